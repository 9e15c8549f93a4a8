//! Toast Banner Component
//!
//! Floating notification driven by the kitchen store's toast state.

use leptos::prelude::*;

use crate::store::{KitchenStateStoreFields, KitchenStore};

#[component]
pub fn ToastBanner(store: KitchenStore) -> impl IntoView {
    let class = move || {
        if store.toast().with(|t| t.is_visible()) {
            "toast mostrar"
        } else {
            "toast"
        }
    };

    view! {
        <div class=class role="status">
            {move || store.toast().with(|t| t.message().to_string())}
        </div>
    }
}
