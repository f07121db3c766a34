use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// One user-submitted record of food, water and exercise. Entries are
/// append-only and never edited or deleted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLogEntry {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub food: String,
    pub water: f32,
    pub exercise: String,
    pub ai_feedback: String,
}

/// In-memory ordered journal. Contents are lost when the process exits.
pub struct JournalStore {
    entries: RwLock<Vec<DailyLogEntry>>,
}

impl JournalStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    pub async fn append(
        &self,
        food: String,
        water: f32,
        exercise: String,
        ai_feedback: String,
    ) -> DailyLogEntry {
        let entry = DailyLogEntry {
            id: Uuid::new_v4(),
            timestamp: OffsetDateTime::now_utc(),
            food,
            water,
            exercise,
            ai_feedback,
        };
        self.entries.write().await.push(entry.clone());
        entry
    }

    pub async fn all(&self) -> Vec<DailyLogEntry> {
        self.entries.read().await.clone()
    }

    /// Last `n` entries, oldest first.
    pub async fn recent(&self, n: usize) -> Vec<DailyLogEntry> {
        let entries = self.entries.read().await;
        let skip = entries.len().saturating_sub(n);
        entries[skip..].to_vec()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

impl Default for JournalStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn append_grows_by_one_and_preserves_order() {
        let store = JournalStore::new();
        assert_eq!(store.len().await, 0);

        let first = store
            .append("oatmeal".into(), 0.5, "run".into(), "nice".into())
            .await;
        assert_eq!(store.len().await, 1);

        let second = store
            .append("salad".into(), 1.0, "yoga".into(), "good".into())
            .await;
        assert_eq!(store.len().await, 2);

        let all = store.all().await;
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[1].id, second.id);
        assert_eq!(all[0].food, "oatmeal");
    }

    #[tokio::test]
    async fn recent_returns_last_n_oldest_first() {
        let store = JournalStore::new();
        for i in 0..5 {
            store
                .append(format!("meal {i}"), i as f32, "walk".into(), String::new())
                .await;
        }
        let recent = store.recent(3).await;
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].food, "meal 2");
        assert_eq!(recent[2].food, "meal 4");

        // Asking for more than exists returns everything.
        assert_eq!(store.recent(10).await.len(), 5);
    }
}
