//! Vote arrows for Hasker question pages.
//!
//! The page calls `init(root)` once its markup is in place:
//!
//! ```js
//! import init_wasm, { init } from "./hasker_web.js";
//! await init_wasm();
//! init(document.getElementById("content"));
//! ```

pub mod api;
pub mod bindings;
pub mod logging;
pub mod page;

use std::cell::RefCell;
use std::rc::Rc;

use hasker_core::{VoteConfig, VoteController};
use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::bindings::VoteHandler;
use crate::page::PageView;

/// Shows a user-visible notice.
pub type Notifier = Rc<dyn Fn(&str)>;

/// Bind the vote arrows below `root` using the default template names.
#[wasm_bindgen]
pub fn init(root: &Element) -> Result<(), JsValue> {
    mount(root, VoteConfig::default()).map(|_| ())
}

/// Same as [`init`], with a JSON `VoteConfig` overriding the defaults.
#[wasm_bindgen(js_name = initWithConfig)]
pub fn init_with_config(root: &Element, config_json: &str) -> Result<(), JsValue> {
    let config =
        VoteConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    mount(root, config).map(|_| ())
}

/// A mounted widget.
pub struct VoteWidget {
    bound: usize,
    controller: Rc<RefCell<VoteController<PageView>>>,
}

impl VoteWidget {
    /// Number of vote controls bound.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Votes still waiting for their reply.
    pub fn pending(&self) -> usize {
        self.controller.borrow().pending()
    }
}

/// Wire every vote control below `root` to the vote endpoint, with notices
/// shown by `window.alert`.
pub fn mount(root: &Element, config: VoteConfig) -> Result<VoteWidget, JsValue> {
    let notifier: Notifier = Rc::new(page::alert);
    mount_with_notifier(root, config, notifier)
}

pub fn mount_with_notifier(
    root: &Element,
    config: VoteConfig,
    notifier: Notifier,
) -> Result<VoteWidget, JsValue> {
    logging::init(&config.logging.filter);

    let view = PageView::new(root.clone(), config.selectors.clone());
    let controller = Rc::new(RefCell::new(VoteController::new(view, config.clone())));
    let vote_path = config.api.vote_path.clone();
    let messages = Rc::new(config.messages.clone());

    let shared = controller.clone();
    let on_vote: VoteHandler = Rc::new(move |request| {
        let ticket = shared.borrow_mut().begin(request);
        let controller = shared.clone();
        let vote_path = vote_path.clone();
        let messages = messages.clone();
        let notifier = notifier.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let reply = api::cast_vote(&vote_path, ticket.request()).await;
            // The borrow ends with this statement; alerts block and must not
            // run while the controller is held.
            let completion = controller.borrow_mut().complete(ticket, reply);
            if let Some(message) = completion.notice(&messages) {
                notifier(message);
            }
        });
    });

    let bound = bindings::bind_controls(root, &config, on_vote)?;
    info!(bound, vote_path = %config.api.vote_path, "Vote widget ready");
    Ok(VoteWidget { bound, controller })
}
