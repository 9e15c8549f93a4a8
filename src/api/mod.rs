//! Backend API Wrappers
//!
//! Frontend bindings to the ordering backend's HTTP endpoints.

mod orders;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::ServerReply;

pub use orders::*;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(ApiError::Transport(format!("GET {} -> HTTP {}", url, response.status())));
    }
    Ok(response.json::<T>().await?)
}

/// POST a JSON body and require `{"status": "ok"}` back
async fn post_expect_ok<B: Serialize>(url: &str, body: &B) -> Result<ServerReply, ApiError> {
    let response = Request::post(url).json(body)?.send().await?;
    if !response.ok() {
        return Err(ApiError::Transport(format!("POST {} -> HTTP {}", url, response.status())));
    }
    let reply = response.json::<ServerReply>().await?;
    check_reply(reply)
}

fn check_reply(reply: ServerReply) -> Result<ServerReply, ApiError> {
    if reply.is_ok() {
        Ok(reply)
    } else {
        Err(ApiError::Rejected {
            message: reply.msg.clone().unwrap_or_default(),
            status: reply.status,
        })
    }
}
