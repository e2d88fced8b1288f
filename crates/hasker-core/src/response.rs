//! Strict decoding of the vote endpoint's reply.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{HaskerError, Result};

/// Server-reported outcome tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteResult {
    Add,
    Update,
    Delete,
    Error,
}

impl VoteResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteResult::Add => "add",
            VoteResult::Update => "update",
            VoteResult::Delete => "delete",
            VoteResult::Error => "error",
        }
    }

    pub fn parse(tag: &str) -> Option<VoteResult> {
        match tag {
            "add" => Some(VoteResult::Add),
            "update" => Some(VoteResult::Update),
            "delete" => Some(VoteResult::Delete),
            "error" => Some(VoteResult::Error),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireResponse {
    result: String,
    #[serde(default)]
    votes: Option<i64>,
}

/// A validated reply, ready to be applied to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    Add { votes: i64 },
    Update { votes: i64 },
    Delete { votes: i64 },
    Error,
}

impl VoteOutcome {
    /// Decode a reply body. Anything that does not match
    /// `{"result": <tag>, "votes": <int>}` is rejected.
    pub fn parse(body: &str) -> Result<VoteOutcome> {
        // Struct deserialization also accepts the sequence form, so require an
        // object before mapping it onto the wire struct.
        let fields: Map<String, Value> = serde_json::from_str(body)?;
        let wire: WireResponse = serde_json::from_value(Value::Object(fields))?;
        let result = VoteResult::parse(&wire.result)
            .ok_or_else(|| HaskerError::UnknownResult(wire.result.clone()))?;

        if result == VoteResult::Error {
            return Ok(VoteOutcome::Error);
        }

        let votes = wire
            .votes
            .ok_or_else(|| HaskerError::MissingVotes(result.as_str().to_string()))?;

        Ok(match result {
            VoteResult::Add => VoteOutcome::Add { votes },
            VoteResult::Update => VoteOutcome::Update { votes },
            VoteResult::Delete => VoteOutcome::Delete { votes },
            VoteResult::Error => VoteOutcome::Error,
        })
    }

    pub fn result(&self) -> VoteResult {
        match self {
            VoteOutcome::Add { .. } => VoteResult::Add,
            VoteOutcome::Update { .. } => VoteResult::Update,
            VoteOutcome::Delete { .. } => VoteResult::Delete,
            VoteOutcome::Error => VoteResult::Error,
        }
    }

    pub fn votes(&self) -> Option<i64> {
        match self {
            VoteOutcome::Add { votes }
            | VoteOutcome::Update { votes }
            | VoteOutcome::Delete { votes } => Some(*votes),
            VoteOutcome::Error => None,
        }
    }
}
