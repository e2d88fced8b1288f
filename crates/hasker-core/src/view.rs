//! Seam between the vote rules and whatever renders the page.

use crate::{Direction, EntityKey, Result};

/// The up/down controls and count display of one entity.
pub trait EntityControls {
    fn set_active(&mut self, direction: Direction, active: bool);
    fn set_votes(&mut self, votes: i64);
}

pub trait VoteView {
    type Controls: EntityControls;

    /// Resolve every element of the entity's block. Must not mutate anything,
    /// so a failed lookup leaves the page untouched.
    fn locate(&self, key: &EntityKey) -> Result<Self::Controls>;
}
