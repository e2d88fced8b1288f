use std::collections::HashMap;

use crate::{EntityKey, VoteRequest};

/// A vote waiting for its reply.
#[derive(Debug, Clone)]
pub struct Ticket {
    request: VoteRequest,
    generation: u64,
}

impl Ticket {
    pub fn request(&self) -> &VoteRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks the latest click per entity so that replies arriving for
/// superseded clicks are dropped instead of overwriting newer state.
#[derive(Debug, Default)]
pub struct InFlight {
    next_generation: u64,
    latest: HashMap<EntityKey, u64>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, request: VoteRequest) -> Ticket {
        // Generations are global so a key re-entered after settling never
        // reuses a number held by an older ticket.
        self.next_generation += 1;
        let generation = self.next_generation;
        self.latest.insert(request.key.clone(), generation);
        Ticket {
            request,
            generation,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.request.key) == Some(&ticket.generation)
    }

    /// Returns true if the ticket was the latest for its entity; it is then
    /// no longer pending.
    pub fn settle(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.latest.remove(&ticket.request.key);
        true
    }

    pub fn pending(&self) -> usize {
        self.latest.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, EntityType};

    fn vote(id: &str, direction: Direction) -> VoteRequest {
        VoteRequest::new(EntityType::Answer, id, direction)
    }

    #[test]
    fn test_newer_click_supersedes() {
        let mut in_flight = InFlight::new();
        let first = in_flight.begin(vote("1", Direction::Up));
        let second = in_flight.begin(vote("1", Direction::Down));

        assert!(!in_flight.is_current(&first));
        assert!(in_flight.settle(&second));
        assert!(!in_flight.settle(&first));
        assert_eq!(in_flight.pending(), 0);
    }

    #[test]
    fn test_stale_after_reentry() {
        let mut in_flight = InFlight::new();
        let first = in_flight.begin(vote("1", Direction::Up));
        let second = in_flight.begin(vote("1", Direction::Down));
        assert!(in_flight.settle(&second));

        let third = in_flight.begin(vote("1", Direction::Up));
        assert!(!in_flight.settle(&first));
        assert!(in_flight.settle(&third));
    }

    #[test]
    fn test_entities_independent() {
        let mut in_flight = InFlight::new();
        let a = in_flight.begin(vote("1", Direction::Up));
        let b = in_flight.begin(vote("2", Direction::Up));
        let q = in_flight.begin(VoteRequest::new(EntityType::Question, "1", Direction::Up));

        assert_eq!(in_flight.pending(), 3);
        assert!(in_flight.settle(&b));
        assert!(in_flight.settle(&a));
        assert!(in_flight.settle(&q));
    }
}
