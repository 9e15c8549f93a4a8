//! Order Endpoints

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{NewOrder, Order, OrderStatus, ServerReply, StatusUpdate};

use super::{get_json, post_expect_ok};

pub const PENDING_ORDERS_PATH: &str = "/api/pedidos_pendientes";
pub const UPDATE_STATUS_PATH: &str = "/actualizar_estado";
pub const CREATE_ORDER_PATH: &str = "/crear_pedido";

/// All orders still waiting on the kitchen
pub async fn fetch_pending(config: &Config) -> Result<Vec<Order>, ApiError> {
    get_json(&config.endpoint(PENDING_ORDERS_PATH)).await
}

pub async fn update_status(config: &Config, id: u32, status: OrderStatus) -> Result<(), ApiError> {
    post_expect_ok(&config.endpoint(UPDATE_STATUS_PATH), &StatusUpdate { id, status }).await?;
    Ok(())
}

/// Submit a composed order; the reply echoes the stored order
pub async fn create_order(config: &Config, order: &NewOrder) -> Result<ServerReply, ApiError> {
    post_expect_ok(&config.endpoint(CREATE_ORDER_PATH), order).await
}
