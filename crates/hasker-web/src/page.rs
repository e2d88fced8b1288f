//! `VoteView` over the live DOM.

use hasker_core::{Direction, EntityControls, EntityKey, HaskerError, Result, SelectorConfig, VoteView};
use tracing::warn;
use web_sys::Element;

/// Vote blocks rendered below `root`.
pub struct PageView {
    root: Element,
    selectors: SelectorConfig,
}

impl PageView {
    pub fn new(root: Element, selectors: SelectorConfig) -> Self {
        Self { root, selectors }
    }

    fn container(&self, container_id: &str) -> Option<Element> {
        let selector = format!("#{}", web_sys::css::escape(container_id));
        self.root.query_selector(&selector).ok().flatten()
    }
}

fn select(container: &Element, container_id: &str, selector: &str) -> Result<Element> {
    container
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| HaskerError::MissingElement(format!("#{} {}", container_id, selector)))
}

impl VoteView for PageView {
    type Controls = PageControls;

    fn locate(&self, key: &EntityKey) -> Result<PageControls> {
        let container_id = key.container_id();
        let container = self
            .container(&container_id)
            .ok_or_else(|| HaskerError::MissingElement(container_id.clone()))?;

        let up_selector = format!(".{}", self.selectors.up_arrow);
        let down_selector = format!(".{}", self.selectors.down_arrow);

        Ok(PageControls {
            up: select(&container, &container_id, &up_selector)?,
            down: select(&container, &container_id, &down_selector)?,
            votes: select(&container, &container_id, &self.selectors.votes)?,
            active_class: self.selectors.active.clone(),
        })
    }
}

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        warn!("No window to show notice: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        warn!("Failed to show notice {:?}: {:?}", message, e);
    }
}

pub struct PageControls {
    up: Element,
    down: Element,
    votes: Element,
    active_class: String,
}

impl EntityControls for PageControls {
    fn set_active(&mut self, direction: Direction, active: bool) {
        let control = match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        };
        let classes = control.class_list();
        let toggled = if active {
            classes.add_1(&self.active_class)
        } else {
            classes.remove_1(&self.active_class)
        };
        if let Err(e) = toggled {
            warn!(direction = %direction, "Failed to toggle active class: {:?}", e);
        }
    }

    fn set_votes(&mut self, votes: i64) {
        self.votes.set_text_content(Some(&votes.to_string()));
    }
}
