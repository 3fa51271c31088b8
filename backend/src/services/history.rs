//! History service for submitting and listing nutrition records

use crate::error::ApiError;
use crate::repositories::{HistoryRecord, HistoryRepository, NewHistoryRecord};
use nutrition_tracker_shared::{HistoryEntry, HistoryRecordResponse};
use tracing::debug;

/// History service operations
pub struct HistoryService;

impl HistoryService {
    /// Persist an entry as-is
    ///
    /// No range checks are applied and `user_email` is not matched against
    /// registered users.
    pub async fn submit(
        history: &dyn HistoryRepository,
        entry: HistoryEntry,
    ) -> Result<HistoryRecord, ApiError> {
        let record = history.insert(entry.into()).await?;
        debug!(id = %record.id, user_email = %record.user_email, "History record saved");
        Ok(record)
    }

    /// All records tagged with `email`, empty if there are none
    pub async fn list(
        history: &dyn HistoryRepository,
        email: &str,
    ) -> Result<Vec<HistoryRecord>, ApiError> {
        Ok(history.find_by_user_email(email).await?)
    }
}

impl From<HistoryEntry> for NewHistoryRecord {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            user_email: entry.user_email,
            name: entry.name,
            age: entry.age,
            weight: entry.weight,
            height: entry.height,
            activity_level: entry.activity_level,
            calories: entry.calories,
            water_intake: entry.water_intake,
            protein_intake: entry.protein_intake,
            fiber_intake: entry.fiber_intake,
        }
    }
}

impl From<HistoryRecord> for HistoryRecordResponse {
    fn from(record: HistoryRecord) -> Self {
        Self {
            id: record.id.to_string(),
            entry: HistoryEntry {
                user_email: record.user_email,
                name: record.name,
                age: record.age,
                weight: record.weight,
                height: record.height,
                activity_level: record.activity_level,
                calories: record.calories,
                water_intake: record.water_intake,
                protein_intake: record.protein_intake,
                fiber_intake: record.fiber_intake,
            },
            created_at: record.created_at,
        }
    }
}
