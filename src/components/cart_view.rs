//! Cart View Component
//!
//! Current line items with per-line removal, the running total and a clear
//! action.

use leptos::prelude::*;

use crate::money::format_price;
use crate::store::{ComposerStateStoreFields, ComposerStore};

#[component]
pub fn CartView(store: ComposerStore, separator: char) -> impl IntoView {
    // Indexed by position: removal shifts the following lines up
    let lines = move || {
        store
            .cart()
            .with(|cart| cart.items().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="pedido">
            <ul id="lista-pedido">
                <For
                    each=lines
                    key=|(index, item)| (*index, item.name.clone(), item.quantity)
                    children=move |(index, item)| view! {
                        <li>
                            <span>{format!("{} x{}", item.name, item.quantity)}</span>
                            <span>{format_price(item.subtotal(), separator)}</span>
                            <button
                                type="button"
                                class="quitar"
                                on:click=move |_| {
                                    store.cart().write().remove(index);
                                }
                            >
                                "✕"
                            </button>
                        </li>
                    }
                />
            </ul>
            <div id="total" class="total">
                {move || format!("Total: {}", format_price(store.cart().with(|c| c.total()), separator))}
            </div>
            <button
                type="button"
                class="btn vaciar"
                disabled=move || store.cart().with(|c| c.is_empty())
                on:click=move |_| store.cart().write().clear()
            >
                "Vaciar pedido"
            </button>
        </div>
    }
}
