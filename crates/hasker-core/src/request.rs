use crate::{Direction, EntityKey, EntityType};

/// A single vote click, built fresh per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteRequest {
    pub key: EntityKey,
    pub direction: Direction,
}

impl VoteRequest {
    pub fn new(entity_type: EntityType, id: impl Into<String>, direction: Direction) -> Self {
        Self {
            key: EntityKey::new(entity_type, id),
            direction,
        }
    }

    pub fn entity_type(&self) -> EntityType {
        self.key.entity_type
    }

    pub fn id(&self) -> &str {
        &self.key.id
    }

    /// `type=..&id=..&value=..`, with the opaque id percent-encoded.
    pub fn query(&self) -> String {
        format!(
            "type={}&id={}&value={}",
            self.key.entity_type.as_str(),
            urlencoding::encode(&self.key.id),
            self.direction.as_str()
        )
    }

    pub fn url(&self, vote_path: &str) -> String {
        format!("{}?{}", vote_path, self.query())
    }
}
