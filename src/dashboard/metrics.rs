use serde::Serialize;

/// One day of synthetic fitness metrics. The seed is static demo data;
/// nothing in the app ever mutates it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthMetric {
    pub date: String,
    pub steps: u32,
    pub calories_burned: u32,
    pub water_intake: f32,
}

pub fn seed() -> Vec<HealthMetric> {
    let rows = [
        ("Mon", 8_400, 2_100, 2.1),
        ("Tue", 11_200, 2_450, 2.8),
        ("Wed", 7_900, 1_980, 1.9),
        ("Thu", 9_500, 2_200, 2.4),
        ("Fri", 12_100, 2_600, 3.0),
        ("Sat", 10_400, 2_300, 2.5),
        ("Sun", 6_000, 1_700, 1.5),
    ];
    rows.into_iter()
        .map(|(date, steps, calories_burned, water_intake)| HealthMetric {
            date: date.to_string(),
            steps,
            calories_burned,
            water_intake,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_a_full_week() {
        let metrics = seed();
        assert_eq!(metrics.len(), 7);
        assert_eq!(metrics[0].date, "Mon");
        assert_eq!(metrics[6].date, "Sun");
        assert_eq!(metrics[4].steps, 12_100);
    }
}
