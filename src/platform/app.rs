//! Handle to the embedded JS app and its ports

use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::js_message;
use crate::config::{BootConfig, PortNames};
use crate::error::ShimError;
use crate::ports::{AppPorts, EmbeddedApp, ShimPorts, port_pair};
use crate::state::AppState;

#[wasm_bindgen(inline_js = "
    export function embed_app(module, node, flags) {
        const ns = globalThis[module];
        if (!ns || typeof ns.embed !== 'function') {
            throw new Error(`global ${module}.embed is not defined`);
        }
        return ns.embed(node, flags);
    }

    export function subscribe_port(app, port, callback) {
        const p = app.ports && app.ports[port];
        if (!p || typeof p.subscribe !== 'function') {
            throw new Error(`app has no outbound port ${port}`);
        }
        p.subscribe(callback);
    }

    export function send_port(app, port, value) {
        const p = app.ports && app.ports[port];
        if (!p || typeof p.send !== 'function') {
            throw new Error(`app has no inbound port ${port}`);
        }
        p.send(value);
    }
")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn embed_app(module: &str, node: &JsValue, flags: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn subscribe_port(app: &JsValue, port: &str, callback: &js_sys::Function) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn send_port(app: &JsValue, port: &str, value: &JsValue) -> Result<(), JsValue>;
}

fn embed_error(module: &str, e: &JsValue) -> ShimError {
    ShimError::Embed {
        module: module.to_string(),
        message: js_message(e),
    }
}

/// The embedded app, looked up as a global module exposing `embed`
pub struct JsApp {
    module: String,
    names: PortNames,
    handle: Option<JsValue>,
    ports: Option<AppPorts>,
}

impl JsApp {
    pub fn new(config: &BootConfig) -> Self {
        Self {
            module: config.app_module.clone(),
            names: config.ports.clone(),
            handle: None,
            ports: None,
        }
    }

    /// Forward JS port traffic into the channels
    ///
    /// `on_message` runs after every delivered message and must drain the
    /// shim side; any scores it produces are sent back before returning.
    /// Subscriptions stay alive for the lifetime of the page.
    pub fn connect(self, on_message: Rc<dyn Fn()>) -> Result<(), ShimError> {
        let (Some(handle), Some(ports)) = (self.handle.clone(), self.ports) else {
            return Err(ShimError::Embed {
                module: self.module,
                message: "connect called before embed".to_string(),
            });
        };
        let AppPorts {
            check_password,
            password_score,
            save_state,
        } = ports;
        let names = self.names;

        // checkPassword -> shim -> passwordScore
        {
            let handle_js = handle.clone();
            let score_port = names.password_score.clone();
            let port = names.check_password.clone();
            let on_message = on_message.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |value: JsValue| {
                let Some(candidate) = value.as_string() else {
                    log::warn!("Ignoring non-string message on `{port}`");
                    return;
                };
                check_password.send(candidate);
                on_message();
                for score in password_score.drain() {
                    let value = JsValue::from(score.value());
                    if let Err(e) = send_port(&handle_js, &score_port, &value) {
                        log::error!("Failed to send on `{score_port}`: {}", js_message(&e));
                    }
                }
            });
            subscribe_port(&handle, &names.check_password, closure.as_ref().unchecked_ref())
                .map_err(|e| embed_error(&self.module, &e))?;
            closure.forget();
        }

        // saveToLocalstorage -> shim -> storage
        {
            let port = names.save_state.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |value: JsValue| {
                // `JSON.stringify` yields `undefined` for undefined and function payloads
                let text = match js_sys::JSON::stringify(&value) {
                    Ok(text) => match text.as_string() {
                        Some(text) => text,
                        None => {
                            log::warn!("Dropping non-JSON message on `{port}`");
                            return;
                        }
                    },
                    Err(e) => {
                        log::warn!("Dropping unserialisable message on `{port}`: {}", js_message(&e));
                        return;
                    }
                };
                match AppState::decode(&text) {
                    Ok(state) => {
                        save_state.send(state);
                        on_message();
                    }
                    Err(e) => log::warn!("Dropping invalid state on `{port}`: {e}"),
                }
            });
            subscribe_port(&handle, &names.save_state, closure.as_ref().unchecked_ref())
                .map_err(|e| embed_error(&self.module, &e))?;
            closure.forget();
        }

        log::info!(
            "Relaying `{}` -> `{}` and `{}` -> storage",
            names.check_password,
            names.password_score,
            names.save_state
        );
        Ok(())
    }
}

impl EmbeddedApp for JsApp {
    fn embed(&mut self, mount_id: &str, flags: AppState) -> Result<ShimPorts, ShimError> {
        let node = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(mount_id))
            .ok_or_else(|| ShimError::MountPointMissing(mount_id.to_string()))?;
        let node = JsValue::from(node);

        let flags = js_sys::JSON::parse(&flags.encode()?).map_err(|e| embed_error(&self.module, &e))?;
        let handle = embed_app(&self.module, &node, &flags).map_err(|e| embed_error(&self.module, &e))?;

        let (shim, app) = port_pair(&self.names);
        self.handle = Some(handle);
        self.ports = Some(app);
        Ok(shim)
    }
}
