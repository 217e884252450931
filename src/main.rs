//! Bootstrap entry point
//!
//! On the web this runs once at page load. Native builds only log, since
//! there is no page to mount into.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    bootstrap_shim::platform::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    let config = bootstrap_shim::BootConfig::default();
    log::info!("Bootstrap shim (native) starting...");
    log::info!(
        "Nothing to mount: build for wasm32 and serve a page with #{} to run the shim",
        config.mount_id
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
