use tempfile::TempDir;

use webhook_monitor::database::models::{Event, EventAction};
use webhook_monitor::database::Database;

async fn open_database(dir: &TempDir) -> Database {
    let url = format!("sqlite://{}/events.db?mode=rwc", dir.path().display());
    let database = Database::new(&url).await.expect("failed to open test database");
    database
        .ensure_schema()
        .await
        .expect("failed to create events table");
    database
}

fn event(request_id: &str, action: EventAction, timestamp: &str) -> Event {
    Event {
        request_id: request_id.to_string(),
        author: "alice".to_string(),
        action,
        from_branch: "main".to_string(),
        to_branch: "main".to_string(),
        timestamp: timestamp.to_string(),
    }
}

#[tokio::test]
async fn test_inserted_event_round_trips_verbatim() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir).await;

    let stored = Event {
        request_id: "42".to_string(),
        author: "bob".to_string(),
        action: EventAction::Merge,
        from_branch: "feature-x".to_string(),
        to_branch: "main".to_string(),
        timestamp: "2026-08-06 10:15:00 UTC".to_string(),
    };

    database.insert_event(&stored).await.unwrap();
    let events = database.list_events().await.unwrap();

    assert_eq!(events, vec![stored]);
}

#[tokio::test]
async fn test_history_is_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir).await;

    // Inserted out of chronological order on purpose.
    let timestamps = [
        "2026-08-06 10:00:02 UTC",
        "2026-08-06 10:00:00 UTC",
        "2026-08-06 10:00:01 UTC",
    ];
    for (i, ts) in timestamps.iter().enumerate() {
        database
            .insert_event(&event(&format!("sha{}", i), EventAction::Push, ts))
            .await
            .unwrap();
    }

    let events = database.list_events().await.unwrap();
    let listed: Vec<&str> = events.iter().map(|e| e.timestamp.as_str()).collect();

    assert_eq!(
        listed,
        vec![
            "2026-08-06 10:00:02 UTC",
            "2026-08-06 10:00:01 UTC",
            "2026-08-06 10:00:00 UTC",
        ]
    );
}

#[tokio::test]
async fn test_retrieval_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir).await;

    database
        .insert_event(&event("abc123", EventAction::Push, "2026-08-06 10:00:00 UTC"))
        .await
        .unwrap();

    let first = database.list_events().await.unwrap();
    let second = database.list_events().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_duplicate_deliveries_are_kept() {
    let dir = TempDir::new().unwrap();
    let database = open_database(&dir).await;

    // GitHub delivers at-least-once; the same commit may arrive twice.
    let delivery = event("abc123", EventAction::Push, "2026-08-06 10:00:00 UTC");
    database.insert_event(&delivery).await.unwrap();
    database.insert_event(&delivery).await.unwrap();

    let events = database.list_events().await.unwrap();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.request_id == "abc123"));
}

#[tokio::test]
async fn test_events_survive_reopen() {
    let dir = TempDir::new().unwrap();

    {
        let database = open_database(&dir).await;
        database
            .insert_event(&event("abc123", EventAction::Push, "2026-08-06 10:00:00 UTC"))
            .await
            .unwrap();
    }

    let reopened = open_database(&dir).await;
    let events = reopened.list_events().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].request_id, "abc123");
}
