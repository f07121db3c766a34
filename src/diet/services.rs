use tracing::error;

use super::dto::DietPlan;
use crate::profile::UserProfile;
use crate::state::AppState;

pub fn diet_prompt(profile: &UserProfile) -> String {
    format!(
        "Generate a 7-day healthy diet plan for a {}-year-old {} with \
         specialization: {}. Activity: {}.",
        profile.age, profile.gender, profile.specialization, profile.activity_level
    )
}

/// JSON schema the gateway is asked to constrain its response to.
pub fn response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "day": { "type": "STRING" },
                "breakfast": { "type": "STRING" },
                "lunch": { "type": "STRING" },
                "dinner": { "type": "STRING" },
                "snacks": { "type": "STRING" },
                "calories": { "type": "NUMBER" }
            },
            "required": ["day", "breakfast", "lunch", "dinner", "snacks", "calories"]
        }
    })
}

/// Anything the model produced that does not parse as a plan array is
/// treated as an empty plan.
pub fn parse_plan(raw: &str) -> Vec<DietPlan> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub async fn weekly_plan(st: &AppState) -> Vec<DietPlan> {
    let profile = st.profile.read().await.clone();
    let prompt = diet_prompt(&profile);
    match st
        .gemini
        .generate_json(&st.config.models.diet, &prompt, response_schema())
        .await
    {
        Ok(raw) => parse_plan(&raw),
        Err(e) => {
            error!(error = %e, "diet plan generation failed");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_profile_details() {
        let prompt = diet_prompt(&UserProfile::default());
        assert!(prompt.contains("28-year-old Male"));
        assert!(prompt.contains("specialization: Muscle Gain"));
        assert!(prompt.contains("Activity: Moderate."));
    }

    #[test]
    fn schema_requires_all_six_fields() {
        let schema = response_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 6);
        assert!(required.iter().any(|v| v == "calories"));
    }

    #[test]
    fn valid_plan_json_parses() {
        let raw = r#"[{
            "day": "Monday",
            "breakfast": "Oats",
            "lunch": "Chicken bowl",
            "dinner": "Salmon",
            "snacks": "Almonds",
            "calories": 2300
        }]"#;
        let plan = parse_plan(raw);
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].day, "Monday");
        assert_eq!(plan[0].calories, 2300.0);
    }

    #[test]
    fn unparseable_response_yields_empty_plan() {
        assert!(parse_plan("").is_empty());
        assert!(parse_plan("Here is your plan: ...").is_empty());
        assert!(parse_plan("{\"day\":\"Mon\"}").is_empty());
        assert!(parse_plan("```json\n[]\n```").is_empty());
    }

    #[tokio::test]
    async fn stub_gateway_yields_empty_plan() {
        let state = crate::state::AppState::fake();
        assert!(weekly_plan(&state).await.is_empty());
    }

    #[tokio::test]
    async fn failed_generation_yields_empty_plan() {
        let state = crate::state::AppState::failing();
        assert!(weekly_plan(&state).await.is_empty());
    }
}
