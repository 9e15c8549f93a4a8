#![allow(warnings)]
//! Comandas Frontend Entry Point

mod models;
mod error;
mod config;
mod money;
mod cart;
mod board;
mod toast;
mod api;
mod push;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
