use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde_json::Value;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::database::models::Event;
use crate::database::Database;
use crate::error::WebhookError;
use crate::github::types::WebhookPayload;
use crate::webhooks::{pull_request, push};

/// `POST /webhook`: normalize one GitHub delivery and append it to the
/// event store.
pub async fn handle_webhook(
    State((_config, database)): State<(AppConfig, Database)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let event_type = headers
        .get("X-GitHub-Event")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    info!("Received {} webhook", event_type);

    let event = match WebhookPayload::decode(event_type, body) {
        Ok(WebhookPayload::Push(payload)) => push::normalize_push(&payload),
        Ok(WebhookPayload::PullRequest(payload)) => pull_request::normalize_pull_request(&payload),
        Err(err) => return error_response(err),
    };

    match database.insert_event(&event).await {
        Ok(()) => {
            info!(
                "Stored {} event {} by {}",
                event.action.as_str(),
                event.request_id,
                event.author
            );
            (
                StatusCode::OK,
                Json(serde_json::json!({"message": "Webhook processed successfully"})),
            )
        }
        Err(err) => error_response(err),
    }
}

/// `GET /events`: full stored history, most recent first.
pub async fn list_events(
    State((_config, database)): State<(AppConfig, Database)>,
) -> Result<Json<Vec<Event>>, (StatusCode, Json<Value>)> {
    match database.list_events().await {
        Ok(events) => Ok(Json(events)),
        Err(err) => {
            warn!("Failed to read event history: {}", err);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": err.to_string()})),
            ))
        }
    }
}

fn error_response(err: WebhookError) -> (StatusCode, Json<Value>) {
    match err {
        WebhookError::UnsupportedEventType(event_type) => {
            warn!("Rejected webhook with event type {:?}", event_type);
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Unsupported event type"})),
            )
        }
        other => {
            warn!("Webhook processing failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": other.to_string()})),
            )
        }
    }
}
