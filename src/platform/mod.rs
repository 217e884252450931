//! Browser platform layer
//!
//! Binds the shim to:
//! - LocalStorage (`storage`)
//! - The embedded app's JS handle and ports (`app`)
//! - The global password scoring function (`scorer`)

mod app;
mod scorer;
mod storage;

pub use app::JsApp;
pub use scorer::JsScorer;
pub use storage::LocalStorage;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::bootstrap::Bootstrap;
use crate::config::BootConfig;
use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::ShimError;

/// Boot with the page's `#boot-config` JSON, or defaults when absent
pub fn start() {
    let config = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match config {
        Some(json) => start_with_config(&json),
        None => run(BootConfig::default()),
    }
}

/// Boot with an explicit JSON `BootConfig`
#[wasm_bindgen]
pub fn start_with_config(json: &str) {
    match BootConfig::from_json(json) {
        Ok(config) => run(config),
        Err(e) => {
            init_logging(log::Level::Info);
            log::error!("Not starting: {e}");
        }
    }
}

fn run(config: BootConfig) {
    init_logging(config.log_level());
    log::info!("Bootstrap starting...");
    match boot(&config) {
        Ok(()) => log::info!("Bootstrap ready"),
        Err(e) => log::error!("Bootstrap failed: {e}"),
    }
}

fn boot(config: &BootConfig) -> Result<(), ShimError> {
    let storage = LocalStorage::open()?;
    let scorer = JsScorer::new(&config.scorer);
    let mut app = JsApp::new(config);

    let shim = Bootstrap::start(config, storage, scorer, &mut app)?;
    let shim = Rc::new(RefCell::new(shim));
    app.connect(Rc::new(move || {
        shim.borrow_mut().pump();
    }))
}

fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
}

/// Best-effort text for a thrown JS value
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
