//! Order Composer Component
//!
//! Menu on the left, cart and submit form on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{CartView, MenuCatalog};
use crate::context::use_app_context;
use crate::store::{ComposerState, ComposerStateStoreFields};

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn OrderComposer() -> impl IntoView {
    let ctx = use_app_context();
    let store = Store::new(ComposerState::default());
    let separator = ctx.config().thousands_separator;

    let on_add = Callback::new(move |(name, price): (&'static str, u64)| {
        store.cart().write().add(name, price);
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store.submitting().get_untracked() {
            return;
        }
        let table = store.table().get_untracked();
        let order = match store.cart().with_untracked(|cart| cart.checkout(&table)) {
            Ok(order) => order,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };

        let config = ctx.config();
        store.submitting().set(true);
        spawn_local(async move {
            match api::create_order(&config, &order).await {
                Ok(reply) => {
                    let stored_id = reply.order.map(|o| o.id.to_string()).unwrap_or_else(|| "?".to_string());
                    web_sys::console::log_1(
                        &format!("[MENU] Order #{} sent for table {}", stored_id, order.table).into(),
                    );
                    alert(&format!("✅ Pedido enviado a cocina ({})", order.table));
                    store.cart().write().clear();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[MENU] Error al enviar pedido: {}", e).into());
                }
            }
            store.submitting().set(false);
        });
    };

    let submitting = move || store.submitting().get();

    view! {
        <div class="menu-layout">
            <MenuCatalog separator=separator on_add=on_add />

            <aside class="pedido-panel">
                <h2>"Pedido"</h2>
                <CartView store=store separator=separator />
                <form class="enviar-form" on:submit=submit>
                    <input
                        id="mesa"
                        type="text"
                        placeholder="Número de mesa"
                        prop:value=move || store.table().get()
                        on:input=move |ev| store.table().set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn enviar" disabled=submitting>
                        "Enviar a cocina"
                    </button>
                </form>
            </aside>
        </div>
    }
}
