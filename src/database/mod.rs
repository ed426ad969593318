pub mod models;
pub mod schema;

use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use crate::database::models::{Event, EventAction};
use crate::error::WebhookError;

/// Handle to the event store. Cheap to clone; every request handler shares
/// the same underlying pool.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self, WebhookError> {
        let pool = SqlitePool::connect(database_url).await?;
        Ok(Database { pool })
    }

    /// Creates the events table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), WebhookError> {
        sqlx::query(schema::EVENTS_SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Appends one event. Duplicate deliveries for the same commit or PR
    /// produce duplicate rows; `request_id` carries no uniqueness constraint.
    pub async fn insert_event(&self, event: &Event) -> Result<(), WebhookError> {
        sqlx::query(
            r#"
            INSERT INTO events (request_id, author, action, from_branch, to_branch, timestamp)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&event.request_id)
        .bind(&event.author)
        .bind(event.action.as_str())
        .bind(&event.from_branch)
        .bind(&event.to_branch)
        .bind(&event.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Returns the full stored history, most recent first. Rows sharing a
    /// timestamp come back in whatever order SQLite yields them.
    pub async fn list_events(&self) -> Result<Vec<Event>, WebhookError> {
        let rows = sqlx::query(
            r#"
            SELECT request_id, author, action, from_branch, to_branch, timestamp
            FROM events
            ORDER BY timestamp DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let action: String = row.try_get("action")?;
                Ok(Event {
                    request_id: row.try_get("request_id")?,
                    author: row.try_get("author")?,
                    action: EventAction::parse(&action)?,
                    from_branch: row.try_get("from_branch")?,
                    to_branch: row.try_get("to_branch")?,
                    timestamp: row.try_get("timestamp")?,
                })
            })
            .collect()
    }
}
