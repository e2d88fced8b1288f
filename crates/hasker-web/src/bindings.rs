use std::rc::Rc;

use hasker_core::{Direction, EntityType, VoteConfig, VoteRequest};
use tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, Event};

/// Called once per click with the vote it asks for.
pub type VoteHandler = Rc<dyn Fn(VoteRequest)>;

/// Attach click handlers to every vote arrow below `root`.
/// Returns the number of controls bound.
pub fn bind_controls(
    root: &Element,
    config: &VoteConfig,
    on_vote: VoteHandler,
) -> Result<usize, JsValue> {
    let mut bound = 0;

    for &entity_type in EntityType::all() {
        for &direction in Direction::all() {
            let selector = config.control_selector(entity_type, direction);
            let controls = root.query_selector_all(&selector)?;
            if controls.length() == 0 {
                continue;
            }

            let handler = on_vote.clone();
            let onclick = Closure::wrap(Box::new(move |e: Event| {
                let Some(control) = e
                    .current_target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                else {
                    return;
                };
                let Some(id) = control.get_attribute("data-id") else {
                    warn!(entity_type = %entity_type, direction = %direction, "Vote control has no data-id");
                    return;
                };
                handler(VoteRequest::new(entity_type, id, direction));
            }) as Box<dyn FnMut(Event)>);

            for i in 0..controls.length() {
                if let Some(control) = controls.get(i) {
                    control.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref())?;
                    bound += 1;
                }
            }
            onclick.forget();

            debug!(selector = %selector, "Bound vote controls");
        }
    }

    Ok(bound)
}
