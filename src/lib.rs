//! Bootstrap shim - embeds a front-end app and relays its host services
//!
//! Core modules:
//! - `state`: Application state and its text encoding
//! - `channel` / `ports`: Message channels between the app and the shim
//! - `scoring`: Password strength scores
//! - `persistence`: Key-value storage and the typed state store
//! - `bootstrap`: Startup sequence and the two relays
//! - `platform`: Browser bindings (wasm32 only)

pub mod bootstrap;
pub mod channel;
pub mod config;
pub mod error;
pub mod persistence;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod ports;
pub mod scoring;
pub mod state;

pub use bootstrap::Bootstrap;
pub use config::{BootConfig, PortNames};
pub use error::ShimError;
pub use persistence::{MemoryStorage, StateStore, Storage};
pub use ports::{AppPorts, EmbeddedApp, ShimPorts};
pub use scoring::{Score, Scorer};
pub use state::AppState;

/// Fixed names shared with the host page
pub mod consts {
    /// LocalStorage record holding the encoded application state
    pub const STORAGE_KEY: &str = "globals";
    /// Element id the app is mounted into
    pub const MOUNT_ID: &str = "main";
    /// Global the app module is published under
    pub const APP_MODULE: &str = "Main";
    /// Global password scoring function
    pub const SCORER: &str = "zxcvbn";

    /// Outbound: app asks for a password score
    pub const PORT_CHECK_PASSWORD: &str = "checkPassword";
    /// Inbound: shim answers with the score
    pub const PORT_PASSWORD_SCORE: &str = "passwordScore";
    /// Outbound: app asks for its state to be persisted
    pub const PORT_SAVE_STATE: &str = "saveToLocalstorage";

    /// Optional `<script type="application/json">` element holding a `BootConfig`
    pub const CONFIG_ELEMENT_ID: &str = "boot-config";
}
