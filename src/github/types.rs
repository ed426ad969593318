//! Typed views of the GitHub webhook payloads this service accepts.
//!
//! Only the fields the normalizer reads are modeled; serde ignores the rest
//! of GitHub's payload. A field missing from an otherwise supported payload
//! is a decode failure, not a default.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WebhookError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadCommit {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushPayload {
    /// Full git ref, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub head_commit: HeadCommit,
    pub sender: Actor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub git_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetails {
    pub number: u64,
    pub merged: bool,
    pub head: BranchRef,
    pub base: BranchRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestPayload {
    pub action: String,
    pub pull_request: PullRequestDetails,
    pub sender: Actor,
}

/// A webhook body decoded against the event type GitHub declared for it in
/// the `X-GitHub-Event` header.
#[derive(Debug, Clone)]
pub enum WebhookPayload {
    Push(PushPayload),
    PullRequest(PullRequestPayload),
}

impl WebhookPayload {
    pub fn decode(event_type: &str, body: Value) -> Result<Self, WebhookError> {
        match event_type {
            "push" => serde_json::from_value(body)
                .map(WebhookPayload::Push)
                .map_err(|e| WebhookError::MalformedPayload(format!("push payload: {}", e))),
            "pull_request" => serde_json::from_value(body)
                .map(WebhookPayload::PullRequest)
                .map_err(|e| WebhookError::MalformedPayload(format!("pull_request payload: {}", e))),
            other => Err(WebhookError::UnsupportedEventType(other.to_string())),
        }
    }
}
