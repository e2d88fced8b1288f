use serde::{Deserialize, Serialize};

use crate::{Direction, EntityType, HaskerError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub messages: MessageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VoteConfig {
    /// Parse a JSON config, filling omitted sections with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: VoteConfig =
            serde_json::from_str(json).map_err(|e| HaskerError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api.vote_path.trim().is_empty() {
            return Err(HaskerError::Config("api.vote_path is empty".to_string()));
        }
        if self.selectors.votes.trim().is_empty() {
            return Err(HaskerError::Config("selectors.votes is empty".to_string()));
        }

        let classes = [
            ("up_arrow", &self.selectors.up_arrow),
            ("down_arrow", &self.selectors.down_arrow),
            ("answer_control", &self.selectors.answer_control),
            ("question_control", &self.selectors.question_control),
            ("active", &self.selectors.active),
        ];
        for (name, class) in classes {
            if class.is_empty() || class.chars().any(char::is_whitespace) {
                return Err(HaskerError::Config(format!(
                    "selectors.{} must be a single class name, got {:?}",
                    name, class
                )));
            }
        }
        Ok(())
    }

    pub fn arrow_class(&self, direction: Direction) -> &str {
        match direction {
            Direction::Up => &self.selectors.up_arrow,
            Direction::Down => &self.selectors.down_arrow,
        }
    }

    pub fn entity_class(&self, entity_type: EntityType) -> &str {
        match entity_type {
            EntityType::Question => &self.selectors.question_control,
            EntityType::Answer => &self.selectors.answer_control,
        }
    }

    /// Selector matching every control bound to (entity_type, direction),
    /// e.g. `.answer_vote.up_arrow`.
    pub fn control_selector(&self, entity_type: EntityType, direction: Direction) -> String {
        format!(
            ".{}.{}",
            self.entity_class(entity_type),
            self.arrow_class(direction)
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub vote_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            vote_path: "/question/vote/".to_string(),
        }
    }
}

/// Class names and selectors of the question page template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Selector of the vote count element, relative to the entity container
    pub votes: String,
    pub up_arrow: String,
    pub down_arrow: String,
    pub answer_control: String,
    pub question_control: String,
    pub active: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            votes: ".votes span".to_string(),
            up_arrow: "up_arrow".to_string(),
            down_arrow: "down_arrow".to_string(),
            answer_control: "answer_vote".to_string(),
            question_control: "quest_vote".to_string(),
            active: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageConfig {
    /// Shown when the server refuses the vote or its reply is unusable
    pub rejected: String,
    /// Shown when the request fails or returns a non-success status
    pub transport: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            rejected: "Your vote could not be recorded.".to_string(),
            transport: "Could not reach the server. Please try again.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_template() {
        let config = VoteConfig::default();
        assert_eq!(config.api.vote_path, "/question/vote/");
        assert_eq!(
            config.control_selector(EntityType::Answer, Direction::Up),
            ".answer_vote.up_arrow"
        );
        assert_eq!(
            config.control_selector(EntityType::Question, Direction::Down),
            ".quest_vote.down_arrow"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = VoteConfig::from_json(r#"{"api":{"vote_path":"/vote/"}}"#).unwrap();
        assert_eq!(config.api.vote_path, "/vote/");
        assert_eq!(config.selectors.active, "active");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_partial_section() {
        let config = VoteConfig::from_json(r#"{"selectors":{"active":"voted"}}"#).unwrap();
        assert_eq!(config.selectors.active, "voted");
        assert_eq!(config.selectors.up_arrow, "up_arrow");
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = VoteConfig::from_json("{}").unwrap();
        assert_eq!(config.selectors.votes, ".votes span");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            VoteConfig::from_json(r#"{"api":{"vote_path":""}}"#),
            Err(HaskerError::Config(_))
        ));
        assert!(matches!(
            VoteConfig::from_json(r#"{"selectors":{"up_arrow":"up arrow"}}"#),
            Err(HaskerError::Config(_))
        ));
        assert!(matches!(VoteConfig::from_json("not json"), Err(HaskerError::Config(_))));
    }
}
