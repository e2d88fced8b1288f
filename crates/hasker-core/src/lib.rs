//! Vote handling for Hasker question pages, independent of the browser.

pub mod apply;
pub mod config;
pub mod controller;
pub mod entity;
pub mod error;
pub mod in_flight;
pub mod request;
pub mod response;
pub mod view;

#[cfg(test)]
mod memory;

pub use apply::apply_outcome;
pub use config::{ApiConfig, LoggingConfig, MessageConfig, SelectorConfig, VoteConfig};
pub use controller::{Completion, VoteController};
pub use entity::{Direction, EntityKey, EntityType};
pub use error::{HaskerError, Result};
pub use in_flight::{InFlight, Ticket};
pub use request::VoteRequest;
pub use response::{VoteOutcome, VoteResult};
pub use view::{EntityControls, VoteView};
