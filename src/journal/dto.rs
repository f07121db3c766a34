use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateLogRequest {
    #[serde(default)]
    pub food: String,
    #[serde(default)]
    pub water: f32,
    #[serde(default)]
    pub exercise: String,
}

impl CreateLogRequest {
    /// A submission with nothing in it is rejected before any gateway call.
    pub fn is_empty(&self) -> bool {
        self.food.trim().is_empty() && self.exercise.trim().is_empty() && self.water <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submission_is_empty() {
        let req = CreateLogRequest {
            food: "  ".into(),
            water: 0.0,
            exercise: String::new(),
        };
        assert!(req.is_empty());
    }

    #[test]
    fn any_single_field_makes_it_non_empty() {
        let water_only = CreateLogRequest {
            food: String::new(),
            water: 0.3,
            exercise: String::new(),
        };
        assert!(!water_only.is_empty());

        let food_only = CreateLogRequest {
            food: "eggs".into(),
            water: 0.0,
            exercise: String::new(),
        };
        assert!(!food_only.is_empty());
    }
}
