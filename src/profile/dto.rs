use serde::{Deserialize, Serialize};

/// User-entered demographic and goal data. One profile per process; it
/// drives every prompt the app builds and is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub weight: f32,
    pub height: f32,
    pub gender: String,
    pub activity_level: String,
    pub specialization: String,
    pub step_goal: u32,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 28,
            weight: 75.0,
            height: 178.0,
            gender: "Male".into(),
            activity_level: "Moderate".into(),
            specialization: "Muscle Gain".into(),
            step_goal: 10_000,
        }
    }
}
