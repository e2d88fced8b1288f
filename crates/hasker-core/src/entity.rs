use std::fmt;

/// The kind of thing being voted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityType {
    Question,
    Answer,
}

impl EntityType {
    /// Wire value sent as the `type` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Question => "question",
            EntityType::Answer => "answer",
        }
    }

    pub fn all() -> &'static [EntityType] {
        &[EntityType::Question, EntityType::Answer]
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Wire value sent as the `value` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn all() -> &'static [Direction] {
        &[Direction::Up, Direction::Down]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies one voteable block on the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityKey {
    pub entity_type: EntityType,
    pub id: String,
}

impl EntityKey {
    pub fn new(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self {
            entity_type,
            id: id.into(),
        }
    }

    /// Id of the element wrapping the entity's vote controls, e.g. `answer_42`.
    pub fn container_id(&self) -> String {
        format!("{}_{}", self.entity_type.as_str(), self.id)
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.container_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_id() {
        assert_eq!(EntityKey::new(EntityType::Answer, "42").container_id(), "answer_42");
        assert_eq!(EntityKey::new(EntityType::Question, "7").container_id(), "question_7");
    }

    #[test]
    fn test_keys_differ_by_type() {
        let answer = EntityKey::new(EntityType::Answer, "42");
        let question = EntityKey::new(EntityType::Question, "42");
        assert_ne!(answer, question);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }
}
