use gloo_net::http::Request;
use hasker_core::{HaskerError, Result, VoteRequest};

/// GET the vote endpoint and return the raw reply body.
pub async fn cast_vote(vote_path: &str, vote: &VoteRequest) -> Result<String> {
    let resp = Request::get(&vote.url(vote_path))
        .send()
        .await
        .map_err(|e| HaskerError::Transport(e.to_string()))?;

    if !resp.ok() {
        return Err(HaskerError::Status(resp.status()));
    }

    resp.text()
        .await
        .map_err(|e| HaskerError::Transport(e.to_string()))
}
