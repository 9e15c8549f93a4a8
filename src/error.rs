//! Error Types
//!
//! Transport, server and validation failures.

use thiserror::Error;

/// Failure talking to the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unreadable response: {0}")]
    Decode(String),
    #[error("server replied {status:?}: {message}")]
    Rejected { status: String, message: String },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Reasons a cart cannot be submitted. `Display` is the alert text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("⚠️ Ingresa el número de mesa.")]
    MissingTable,
    #[error("⚠️ No hay productos en el pedido.")]
    EmptyCart,
}

#[derive(Debug, Error)]
pub enum PushError {
    #[error("undecodable {event} payload: {reason}")]
    Payload { event: String, reason: String },
    #[error(transparent)]
    Bridge(#[from] socketio_bridge::BridgeError),
}
