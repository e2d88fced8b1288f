//! In-memory page used by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{Direction, EntityControls, EntityKey, HaskerError, Result, VoteView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityState {
    pub votes: String,
    pub up_active: bool,
    pub down_active: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    entities: Rc<RefCell<HashMap<String, EntityState>>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, container: &str, votes: i64, up_active: bool, down_active: bool) {
        self.entities.borrow_mut().insert(
            container.to_string(),
            EntityState {
                votes: votes.to_string(),
                up_active,
                down_active,
            },
        );
    }

    pub fn state(&self, container: &str) -> EntityState {
        self.entities.borrow()[container].clone()
    }
}

pub struct MemoryControls {
    container: String,
    entities: Rc<RefCell<HashMap<String, EntityState>>>,
}

impl MemoryControls {
    fn with<R>(&self, f: impl FnOnce(&mut EntityState) -> R) -> R {
        let mut entities = self.entities.borrow_mut();
        let state = entities
            .get_mut(&self.container)
            .expect("located entity disappeared");
        f(state)
    }
}

impl EntityControls for MemoryControls {
    fn set_active(&mut self, direction: Direction, active: bool) {
        self.with(|s| match direction {
            Direction::Up => s.up_active = active,
            Direction::Down => s.down_active = active,
        })
    }

    fn set_votes(&mut self, votes: i64) {
        self.with(|s| s.votes = votes.to_string())
    }
}

impl VoteView for MemoryPage {
    type Controls = MemoryControls;

    fn locate(&self, key: &EntityKey) -> Result<MemoryControls> {
        let container = key.container_id();
        if !self.entities.borrow().contains_key(&container) {
            return Err(HaskerError::MissingElement(container));
        }
        Ok(MemoryControls {
            container,
            entities: self.entities.clone(),
        })
    }
}
