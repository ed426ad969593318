use crate::database::models::{receipt_timestamp, Event, EventAction};
use crate::github::types::PullRequestPayload;

/// A closed-and-merged pull request is recorded as a merge; every other
/// pull_request delivery (opened, synchronize, closed without merging, ...)
/// is recorded as a plain pull request.
pub fn normalize_pull_request(payload: &PullRequestPayload) -> Event {
    let pr = &payload.pull_request;

    let action = if payload.action == "closed" && pr.merged {
        EventAction::Merge
    } else {
        EventAction::PullRequest
    };

    Event {
        request_id: pr.number.to_string(),
        author: payload.sender.login.clone(),
        action,
        from_branch: pr.head.git_ref.clone(),
        to_branch: pr.base.git_ref.clone(),
        timestamp: receipt_timestamp(),
    }
}
