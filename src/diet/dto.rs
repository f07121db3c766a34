use serde::{Deserialize, Serialize};

/// One day of a model-generated diet plan. Produced wholesale by the
/// gateway; each generation replaces whatever the caller had before.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DietPlan {
    pub day: String,
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
    pub calories: f64,
}
