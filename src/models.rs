//! Frontend Models
//!
//! Data structures matching the backend's JSON bodies.

use serde::{Deserialize, Serialize};

/// Pending order as sent by the backend and the push channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: u32,
    /// Table or customer name
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "detalles")]
    pub details: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

/// Order lifecycle, sent as its numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    Pending,
    Delivered,
    Rejected,
}

impl OrderStatus {
    pub fn code(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Delivered => 1,
            OrderStatus::Rejected => 2,
        }
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, OrderStatus::Pending)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Rejected => "Rechazado",
        }
    }

    /// CSS class of the status tag
    pub fn tag_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "tag-pendiente",
            OrderStatus::Delivered => "tag-entregado",
            OrderStatus::Rejected => "tag-rechazado",
        }
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> u8 {
        status.code()
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(OrderStatus::Pending),
            1 => Ok(OrderStatus::Delivered),
            2 => Ok(OrderStatus::Rejected),
            other => Err(format!("unknown order status {}", other)),
        }
    }
}

/// Body of `POST /actualizar_estado`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub id: u32,
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}

/// Body of `POST /crear_pedido`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    #[serde(rename = "mesa")]
    pub table: String,
    #[serde(rename = "detalles")]
    pub details: String,
    pub total: u64,
}

/// Reply of the mutating endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerReply {
    pub status: String,
    #[serde(default)]
    pub msg: Option<String>,
    /// Echo of the created order (`/crear_pedido` only)
    #[serde(default, rename = "pedido")]
    pub order: Option<Order>,
}

impl ServerReply {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_from_backend_json() {
        let order: Order = serde_json::from_value(json!({
            "id": 7,
            "nombre": "Mesa 4",
            "detalles": "Arepa x2, Jugo x1",
            "total": 23000.0
        }))
        .unwrap();
        assert_eq!(order.id, 7);
        assert_eq!(order.name, "Mesa 4");
        assert_eq!(order.details, "Arepa x2, Jugo x1");
        assert_eq!(order.total, Some(23000.0));
    }

    #[test]
    fn test_order_total_is_optional() {
        let order: Order =
            serde_json::from_value(json!({ "id": 1, "nombre": "Ana", "detalles": "Café x1" })).unwrap();
        assert_eq!(order.total, None);
    }

    #[test]
    fn test_status_update_uses_numeric_code() {
        let body = serde_json::to_value(StatusUpdate { id: 3, status: OrderStatus::Rejected }).unwrap();
        assert_eq!(body, json!({ "id": 3, "estado": 2 }));
    }

    #[test]
    fn test_status_rejects_unknown_code() {
        assert!(serde_json::from_value::<OrderStatus>(json!(5)).is_err());
        assert_eq!(serde_json::from_value::<OrderStatus>(json!(1)).unwrap(), OrderStatus::Delivered);
    }

    #[test]
    fn test_new_order_wire_names() {
        let body = serde_json::to_value(NewOrder {
            table: "5".into(),
            details: "Pizza x1".into(),
            total: 32000,
        })
        .unwrap();
        assert_eq!(body, json!({ "mesa": "5", "detalles": "Pizza x1", "total": 32000 }));
    }

    #[test]
    fn test_reply_status() {
        let ok: ServerReply = serde_json::from_value(json!({ "status": "ok" })).unwrap();
        assert!(ok.is_ok());
        let err: ServerReply =
            serde_json::from_value(json!({ "status": "error", "msg": "Pedido no encontrado" })).unwrap();
        assert!(!err.is_ok());
        assert_eq!(err.msg.as_deref(), Some("Pedido no encontrado"));
    }

    #[test]
    fn test_reply_echoes_created_order() {
        let reply: ServerReply = serde_json::from_value(json!({
            "status": "ok",
            "pedido": { "id": 31, "nombre": "4", "detalles": "Ajiaco x1", "total": 22000.0 }
        }))
        .unwrap();
        assert!(reply.is_ok());
        assert_eq!(reply.order.map(|o| o.id), Some(31));
    }
}
