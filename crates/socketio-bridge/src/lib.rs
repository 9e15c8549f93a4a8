//! Socket.IO Bridge
//!
//! Binds the browser Socket.IO client (the global `io` function loaded by the
//! host page) for use from Rust. Listeners stay registered for as long as the
//! `SocketClient` that owns them lives; dropping the client detaches them and
//! closes the connection.

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    type JsSocket;

    #[wasm_bindgen(js_name = io, catch)]
    fn io(url: &str, opts: &JsValue) -> Result<JsSocket, JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &JsSocket, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn off(this: &JsSocket, event: &str, listener: &js_sys::Function);

    #[wasm_bindgen(method)]
    fn disconnect(this: &JsSocket);
}

/// Lifecycle event names emitted by every Socket.IO client
pub const EVENT_CONNECT: &str = "connect";
pub const EVENT_DISCONNECT: &str = "disconnect";
pub const EVENT_CONNECT_ERROR: &str = "connect_error";

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("socket.io client unavailable: {0}")]
    Unavailable(String),
    #[error("invalid socket options: {0}")]
    Options(String),
}

/// Connection options passed to `io(url, opts)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocketOptions {
    pub transports: Vec<String>,
    pub reconnection: bool,
}

impl Default for SocketOptions {
    fn default() -> Self {
        Self {
            transports: vec!["websocket".to_string(), "polling".to_string()],
            reconnection: true,
        }
    }
}

/// Owned Socket.IO connection
pub struct SocketClient {
    socket: JsSocket,
    listeners: Vec<(String, Closure<dyn FnMut(JsValue)>)>,
}

impl SocketClient {
    /// Open a connection to `url`
    pub fn connect(url: &str, options: &SocketOptions) -> Result<Self, BridgeError> {
        let opts = serde_wasm_bindgen::to_value(options)
            .map_err(|e| BridgeError::Options(e.to_string()))?;
        let socket = io(url, &opts).map_err(|e| BridgeError::Unavailable(describe(&e)))?;
        Ok(Self {
            socket,
            listeners: Vec::new(),
        })
    }

    /// Register a listener. The payload is `undefined` for events without one.
    pub fn on<F>(&mut self, event: &str, handler: F)
    where
        F: FnMut(JsValue) + 'static,
    {
        let closure = Closure::<dyn FnMut(JsValue)>::new(handler);
        self.socket.on(event, closure.as_ref().unchecked_ref());
        self.listeners.push((event.to_string(), closure));
    }
}

impl Drop for SocketClient {
    fn drop(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            self.socket.off(&event, closure.as_ref().unchecked_ref());
        }
        self.socket.disconnect();
    }
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            err.dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_prefer_websocket() {
        let opts = SocketOptions::default();
        assert_eq!(opts.transports, vec!["websocket", "polling"]);
        assert!(opts.reconnection);
    }

    #[test]
    fn test_options_serialize_as_io_expects() {
        let json = serde_json::to_value(SocketOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "transports": ["websocket", "polling"], "reconnection": true })
        );
    }
}
