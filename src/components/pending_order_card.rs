//! Pending Order Card Component
//!
//! One order awaiting kitchen action, with an observation note and the two
//! terminal actions.

use leptos::prelude::*;

use crate::board::PendingEntry;
use crate::models::OrderStatus;
use crate::money::format_price;
use crate::store::{store_entry_busy, KitchenStateStoreFields, KitchenStore};

#[component]
pub fn PendingOrderCard(
    entry: PendingEntry,
    store: KitchenStore,
    separator: char,
    #[prop(into)] on_resolve: Callback<(u64, OrderStatus)>,
) -> impl IntoView {
    let key = entry.key;
    let order_id = entry.order.id.to_string();
    let busy = move || store_entry_busy(&store, key);
    let class = move || {
        let leaving = store
            .board()
            .with(|b| b.get(key).map(|e| e.leaving).unwrap_or(false));
        if leaving { "pedido fade-out" } else { "pedido fade-in" }
    };
    let total = entry
        .order
        .total
        .filter(|t| *t > 0.0)
        .map(|t| format_price(t.round() as u64, separator));

    view! {
        <div class=class data-id=order_id>
            <div class="pedido-header">
                <h3>{entry.order.name}</h3>
                <span class="tag-pendiente">{OrderStatus::Pending.label()}</span>
            </div>
            <p>{entry.order.details}</p>
            {total.map(|t| view! { <p class="pedido-total">{t}</p> })}
            <textarea
                class="observacion"
                placeholder="Observación (opcional)"
                prop:value=entry.note
                on:input=move |ev| store.board().write().set_note(key, event_target_value(&ev))
            ></textarea>
            <div class="acciones">
                <button
                    class="btn btn-entregado"
                    disabled=busy
                    on:click=move |_| on_resolve.run((key, OrderStatus::Delivered))
                >
                    {OrderStatus::Delivered.label()}
                </button>
                <button
                    class="btn btn-rechazado"
                    disabled=busy
                    on:click=move |_| on_resolve.run((key, OrderStatus::Rejected))
                >
                    {OrderStatus::Rejected.label()}
                </button>
            </div>
        </div>
    }
}
