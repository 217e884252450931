//! Startup sequence and the two message relays
//!
//! `Bootstrap::start` loads the stored state, embeds the app with it and
//! takes ownership of the shim's end of the ports. `pump` then runs every
//! queued message through its relay:
//! - `checkPassword` -> scorer -> `passwordScore`
//! - `saveToLocalstorage` -> encode -> storage

use crate::config::BootConfig;
use crate::error::ShimError;
use crate::persistence::{StateStore, Storage};
use crate::ports::{EmbeddedApp, ShimPorts};
use crate::scoring::Scorer;
use crate::state::AppState;

pub struct Bootstrap<S, Z> {
    storage_key: String,
    store: StateStore<S>,
    scorer: Z,
    ports: ShimPorts,
    initial_state: AppState,
}

impl<S: Storage, Z: Scorer> Bootstrap<S, Z> {
    /// Load state, embed the app and subscribe to its outbound ports
    pub fn start<A: EmbeddedApp>(
        config: &BootConfig,
        storage: S,
        scorer: Z,
        app: &mut A,
    ) -> Result<Self, ShimError> {
        let store = StateStore::new(storage);
        let initial_state = match store.load(&config.storage_key)? {
            Some(state) => {
                log::info!("Loaded app state from `{}`", config.storage_key);
                state
            }
            None => {
                log::info!("No stored app state, starting signed out");
                AppState::default()
            }
        };

        let ports = app.embed(&config.mount_id, initial_state.clone())?;
        log::info!("App mounted at #{}", config.mount_id);

        Ok(Self {
            storage_key: config.storage_key.clone(),
            store,
            scorer,
            ports,
            initial_state,
        })
    }

    /// Run all queued outbound messages through their relays
    ///
    /// Returns the number of messages handled. Each handler finishes
    /// (including its storage write) before the next one starts.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;

        while let Some(candidate) = self.ports.check_password.try_recv() {
            self.relay_password_check(&candidate);
            handled += 1;
        }

        while let Some(state) = self.ports.save_state.try_recv() {
            self.relay_save(&state);
            handled += 1;
        }

        handled
    }

    fn relay_password_check(&self, candidate: &str) {
        let score = self.scorer.score(candidate);
        log::debug!(
            "Scored password check on `{}`: {}",
            self.ports.check_password.name(),
            score.value()
        );
        self.ports.password_score.send(score);
    }

    fn relay_save(&mut self, state: &AppState) {
        match self.store.save(&self.storage_key, state) {
            Ok(()) => log::debug!("Persisted app state to `{}`", self.storage_key),
            // The relay stays subscribed; the next change gets another try
            Err(e) => log::error!("Failed to persist app state: {e}"),
        }
    }

    /// State the app was constructed with
    pub fn initial_state(&self) -> &AppState {
        &self.initial_state
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut StateStore<S> {
        &mut self.store
    }
}
