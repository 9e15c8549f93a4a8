//! Push Channel
//!
//! Real-time order notifications over Socket.IO.

use socketio_bridge::{
    SocketClient, SocketOptions, EVENT_CONNECT, EVENT_CONNECT_ERROR, EVENT_DISCONNECT,
};
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::PushError;
use crate::models::Order;

/// Emitted by the backend after an order is created
pub const NEW_ORDER_EVENT: &str = "nuevo_pedido";

/// What the kitchen reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    Connected,
    Disconnected,
    NewOrder(Order),
}

/// Live subscription. Dropping it detaches the listeners and disconnects.
pub struct PushChannel {
    _client: SocketClient,
}

impl PushChannel {
    /// Connect and forward lifecycle changes and decoded `nuevo_pedido`
    /// payloads to `on_event`
    pub fn connect<F>(url: &str, on_event: F) -> Result<Self, PushError>
    where
        F: Fn(PushEvent) + 'static,
    {
        let on_event = Rc::new(on_event);
        let mut client = SocketClient::connect(url, &SocketOptions::default())?;

        let handler = on_event.clone();
        client.on(EVENT_CONNECT, move |_| {
            web_sys::console::log_1(&"[PUSH] ✅ Conectado al servidor de cocina".into());
            handler(PushEvent::Connected);
        });
        let handler = on_event.clone();
        client.on(EVENT_DISCONNECT, move |reason| {
            web_sys::console::warn_1(
                &format!("[PUSH] ⚠️ Desconectado ({})", reason.as_string().unwrap_or_default()).into(),
            );
            handler(PushEvent::Disconnected);
        });
        client.on(EVENT_CONNECT_ERROR, |err| {
            web_sys::console::warn_1(&"[PUSH] Connection error:".into());
            web_sys::console::warn_1(&err);
        });
        let handler = on_event;
        client.on(NEW_ORDER_EVENT, move |payload| match decode_order(payload) {
            Ok(order) => {
                web_sys::console::log_1(&format!("[PUSH] 🆕 Nuevo pedido recibido: #{}", order.id).into());
                handler(PushEvent::NewOrder(order));
            }
            Err(e) => web_sys::console::error_1(&format!("[PUSH] {}", e).into()),
        });

        Ok(Self { _client: client })
    }
}

fn decode_order(payload: JsValue) -> Result<Order, PushError> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(payload).map_err(|e| PushError::Payload {
        event: NEW_ORDER_EVENT.to_string(),
        reason: e.to_string(),
    })?;
    parse_order(value)
}

fn parse_order(value: serde_json::Value) -> Result<Order, PushError> {
    serde_json::from_value(value).map_err(|e| PushError::Payload {
        event: NEW_ORDER_EVENT.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_order_payload() {
        let order = parse_order(json!({
            "id": 12,
            "nombre": "Mesa 3",
            "detalles": "Bandeja x1",
            "total": 28000.0
        }))
        .unwrap();
        assert_eq!(order.id, 12);
        assert_eq!(order.name, "Mesa 3");
    }

    #[test]
    fn test_parse_order_rejects_missing_fields() {
        let err = parse_order(json!({ "id": 12 })).unwrap_err();
        assert!(err.to_string().starts_with("undecodable nuevo_pedido payload"));
    }
}
