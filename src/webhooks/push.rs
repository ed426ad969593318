use crate::database::models::{receipt_timestamp, Event, EventAction};
use crate::github::types::PushPayload;

/// Branch name is the final `/`-delimited segment of the ref, so
/// `refs/heads/main` becomes `main`.
fn branch_from_ref(git_ref: &str) -> &str {
    git_ref.rsplit('/').next().unwrap_or(git_ref)
}

/// A push has no distinct source branch; `from_branch` mirrors `to_branch`.
pub fn normalize_push(payload: &PushPayload) -> Event {
    let to_branch = branch_from_ref(&payload.git_ref).to_string();

    Event {
        request_id: payload.head_commit.id.clone(),
        author: payload.sender.login.clone(),
        action: EventAction::Push,
        from_branch: to_branch.clone(),
        to_branch,
        timestamp: receipt_timestamp(),
    }
}
