//! History store: append-only nutrition records tagged by user email

use super::StoreError;
use crate::db;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// History record from database
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct HistoryRecord {
    pub id: Uuid,
    pub user_email: String,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: Option<String>,
    pub calories: Option<f64>,
    pub water_intake: Option<f64>,
    pub protein_intake: Option<f64>,
    pub fiber_intake: Option<f64>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a history record
#[derive(Debug, Clone, Default)]
pub struct NewHistoryRecord {
    pub user_email: String,
    pub name: Option<String>,
    pub age: Option<f64>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub activity_level: Option<String>,
    pub calories: Option<f64>,
    pub water_intake: Option<f64>,
    pub protein_intake: Option<f64>,
    pub fiber_intake: Option<f64>,
}

/// Persistence contract for history records
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, StoreError>;

    /// Every record tagged with `email`; no ordering is promised
    async fn find_by_user_email(&self, email: &str) -> Result<Vec<HistoryRecord>, StoreError>;

    /// Readiness probe
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// PostgreSQL implementation of [`HistoryRepository`]
#[derive(Debug, Clone)]
pub struct PgHistoryRepository {
    pool: PgPool,
}

impl PgHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoryRepository for PgHistoryRepository {
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, StoreError> {
        let record = sqlx::query_as::<_, HistoryRecord>(
            r#"
            INSERT INTO history_records (
                user_email, name, age, weight, height, activity_level,
                calories, water_intake, protein_intake, fiber_intake
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_email, name, age, weight, height, activity_level,
                      calories, water_intake, protein_intake, fiber_intake, created_at
            "#,
        )
        .bind(&record.user_email)
        .bind(&record.name)
        .bind(record.age)
        .bind(record.weight)
        .bind(record.height)
        .bind(&record.activity_level)
        .bind(record.calories)
        .bind(record.water_intake)
        .bind(record.protein_intake)
        .bind(record.fiber_intake)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::from_insert)?;

        Ok(record)
    }

    async fn find_by_user_email(&self, email: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let records = sqlx::query_as::<_, HistoryRecord>(
            r#"
            SELECT id, user_email, name, age, weight, height, activity_level,
                   calories, water_intake, protein_intake, fiber_intake, created_at
            FROM history_records
            WHERE user_email = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(db::health_check(&self.pool).await?)
    }
}

/// In-memory implementation of [`HistoryRepository`]
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistoryRepository {
    records: Arc<RwLock<Vec<HistoryRecord>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn insert(&self, record: NewHistoryRecord) -> Result<HistoryRecord, StoreError> {
        let record = HistoryRecord {
            id: Uuid::new_v4(),
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
            created_at: Utc::now(),
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn find_by_user_email(&self, email: &str) -> Result<Vec<HistoryRecord>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.user_email == email)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_record(email: &str, calories: f64) -> NewHistoryRecord {
        NewHistoryRecord {
            user_email: email.to_string(),
            calories: Some(calories),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let repo = InMemoryHistoryRepository::new();
        let a = repo.insert(new_record("a@x.com", 2000.0)).await.unwrap();
        let b = repo.insert(new_record("a@x.com", 2000.0)).await.unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.calories, Some(2000.0));
    }

    #[tokio::test]
    async fn test_find_filters_by_email() {
        let repo = InMemoryHistoryRepository::new();
        repo.insert(new_record("a@x.com", 1800.0)).await.unwrap();
        repo.insert(new_record("b@x.com", 2500.0)).await.unwrap();
        repo.insert(new_record("a@x.com", 2100.0)).await.unwrap();

        let records = repo.find_by_user_email("a@x.com").await.unwrap();
        let calories: Vec<_> = records.iter().filter_map(|r| r.calories).collect();
        assert_eq!(calories, vec![1800.0, 2100.0]);
    }

    #[tokio::test]
    async fn test_find_unknown_email_is_empty() {
        let repo = InMemoryHistoryRepository::new();
        repo.insert(new_record("a@x.com", 1800.0)).await.unwrap();

        assert!(repo.find_by_user_email("nobody@x.com").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_reads_are_stable() {
        let repo = InMemoryHistoryRepository::new();
        repo.insert(new_record("a@x.com", 1800.0)).await.unwrap();

        let first = repo.find_by_user_email("a@x.com").await.unwrap();
        let second = repo.find_by_user_email("a@x.com").await.unwrap();
        assert_eq!(first, second);
    }
}
