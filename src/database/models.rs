use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::WebhookError;

/// Canonical record of one GitHub push or pull-request notification.
///
/// Immutable once stored; the events table keeps an internal autoincrement
/// id that is never selected or serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Commit SHA for pushes, stringified PR number for pull requests.
    pub request_id: String,
    pub author: String,
    pub action: EventAction,
    pub from_branch: String,
    pub to_branch: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventAction {
    Push,
    PullRequest,
    Merge,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventAction::Push => "PUSH",
            EventAction::PullRequest => "PULL_REQUEST",
            EventAction::Merge => "MERGE",
        }
    }

    pub fn parse(value: &str) -> Result<Self, WebhookError> {
        match value {
            "PUSH" => Ok(EventAction::Push),
            "PULL_REQUEST" => Ok(EventAction::PullRequest),
            "MERGE" => Ok(EventAction::Merge),
            other => Err(WebhookError::StoreError(format!(
                "unknown action kind in events table: {}",
                other
            ))),
        }
    }
}

/// Server-side receipt time in the fixed `YYYY-MM-DD HH:MM:SS UTC` layout.
///
/// Zero-padded and fixed-width, so lexicographic order on the stored column
/// is chronological order.
pub fn receipt_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&EventAction::PullRequest).unwrap(),
            "\"PULL_REQUEST\""
        );
        assert_eq!(EventAction::parse("MERGE").unwrap(), EventAction::Merge);
        assert!(EventAction::parse("merge").is_err());
    }

    #[test]
    fn test_receipt_timestamp_layout() {
        let ts = receipt_timestamp();
        assert_eq!(ts.len(), 23);
        assert!(ts.ends_with(" UTC"));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
