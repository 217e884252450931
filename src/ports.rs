//! Port bundles connecting the embedded app to the shim
//!
//! `port_pair` creates the three channels and splits them into the half the
//! shim owns and the half the app owns.

use crate::channel::{Receiver, Sender, channel};
use crate::config::PortNames;
use crate::error::ShimError;
use crate::scoring::Score;
use crate::state::AppState;

/// Shim side: subscribes to outbound ports, sends on inbound ones
#[derive(Debug)]
pub struct ShimPorts {
    pub check_password: Receiver<String>,
    pub password_score: Sender<Score>,
    pub save_state: Receiver<AppState>,
}

/// App side: sends on outbound ports, subscribes to inbound ones
#[derive(Debug)]
pub struct AppPorts {
    pub check_password: Sender<String>,
    pub password_score: Receiver<Score>,
    pub save_state: Sender<AppState>,
}

pub fn port_pair(names: &PortNames) -> (ShimPorts, AppPorts) {
    let (check_tx, check_rx) = channel(names.check_password.clone());
    let (score_tx, score_rx) = channel(names.password_score.clone());
    let (save_tx, save_rx) = channel(names.save_state.clone());
    (
        ShimPorts {
            check_password: check_rx,
            password_score: score_tx,
            save_state: save_rx,
        },
        AppPorts {
            check_password: check_tx,
            password_score: score_rx,
            save_state: save_tx,
        },
    )
}

/// A front-end app that can be mounted into the page
pub trait EmbeddedApp {
    /// Mount the app at `mount_id` with its initial state and hand back the
    /// shim's end of its ports
    fn embed(&mut self, mount_id: &str, flags: AppState) -> Result<ShimPorts, ShimError>;
}
