//! Kitchen Panel Component
//!
//! Receives orders over the push channel, lets staff reload the pending set
//! and resolves orders as delivered or rejected.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{HistoryList, PendingOrderCard, ToastBanner};
use crate::config::Config;
use crate::context::use_app_context;
use crate::models::OrderStatus;
use crate::push::{PushChannel, PushEvent};
use crate::store::{store_show_toast, KitchenState, KitchenStateStoreFields, KitchenStore};

/// Post the new status, then fade the entry out and move it to history.
/// Failures are logged and leave the entry untouched.
fn resolve_order(store: KitchenStore, config: Config, key: u64, status: OrderStatus) {
    let resolution = store.board().write().begin_resolve(key, status);
    let Some(resolution) = resolution else {
        return;
    };

    spawn_local(async move {
        if let Err(e) = api::update_status(&config, resolution.order_id, resolution.status).await {
            web_sys::console::error_1(&format!("[KITCHEN] Error al actualizar estado: {}", e).into());
            store.board().write().release(key);
            return;
        }

        store.board().write().mark_leaving(key);
        TimeoutFuture::new(config.fade_ms).await;
        let record = store.board().write().commit(resolution);

        let message = match record.status {
            OrderStatus::Delivered => format!("✅ Pedido de {} entregado", record.name),
            _ => format!("❌ Pedido de {} rechazado", record.name),
        };
        store_show_toast(store, message, config.toast_ms);
    });
}

#[component]
pub fn KitchenPanel() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let store = Store::new(KitchenState::default());

    let toast_ms = config.toast_ms;
    let on_event = move |event: PushEvent| match event {
        PushEvent::Connected => store.online().set(true),
        PushEvent::Disconnected => store.online().set(false),
        PushEvent::NewOrder(order) => {
            let message = format!("📦 Nuevo pedido de {}", order.name);
            store.board().write().receive(order);
            store_show_toast(store, message, toast_ms);
        }
    };
    // Subscription is owned by this view's reactive owner and closed with it
    let _push = PushChannel::connect(&config.socket_url, on_event)
        .map_err(|e| {
            web_sys::console::error_1(&format!("[KITCHEN] Push channel unavailable: {}", e).into());
        })
        .ok()
        .map(StoredValue::new_local);

    let load_pending = move |_| {
        let config = ctx.config();
        spawn_local(async move {
            match api::fetch_pending(&config).await {
                Ok(orders) => {
                    let count = orders.len();
                    web_sys::console::log_1(&format!("[KITCHEN] Loaded {} pending orders", count).into());
                    store.board().write().replace_pending(orders);
                    store_show_toast(store, format!("📋 {} pedidos cargados", count), config.toast_ms);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[KITCHEN] Error cargando pedidos: {}", e).into());
                }
            }
        });
    };

    let on_resolve = Callback::new(move |(key, status): (u64, OrderStatus)| {
        resolve_order(store, ctx.config(), key, status);
    });
    let separator = config.thousands_separator;
    let connection_class = move || {
        if store.online().get() { "conexion online" } else { "conexion offline" }
    };

    view! {
        <div class="cocina-layout">
            <header class="cocina-header">
                <h1>"Panel de cocina"</h1>
                <span class=connection_class>
                    {move || if store.online().get() { "En línea" } else { "Desconectado" }}
                </span>
                <button id="btn-cargar-pedidos" class="btn" on:click=load_pending>
                    "Cargar pedidos"
                </button>
            </header>

            <section class="columna">
                <h2>"Pendientes"</h2>
                <div id="lista-pedidos" class="lista-pedidos">
                    <For
                        each=move || store.board().with(|b| b.pending().to_vec())
                        key=|entry| entry.key
                        children=move |entry| view! {
                            <PendingOrderCard
                                entry=entry
                                store=store
                                separator=separator
                                on_resolve=on_resolve
                            />
                        }
                    />
                </div>
                <Show when=move || store.board().with(|b| b.pending().is_empty())>
                    <p class="lista-vacia">"No hay pedidos pendientes"</p>
                </Show>
            </section>

            <section class="columna">
                <h2>"Procesados"</h2>
                <HistoryList store=store />
            </section>

            <ToastBanner store=store />
        </div>
    }
}
