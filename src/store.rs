//! View State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each view builds
//! its own store when it mounts; nothing is shared across views.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::board::Board;
use crate::cart::Cart;
use crate::toast::Toast;

/// Kitchen panel state
#[derive(Clone, Debug, Default, Store)]
pub struct KitchenState {
    pub board: Board,
    pub toast: Toast,
    /// Push channel connected
    pub online: bool,
}

/// Order composer state
#[derive(Clone, Debug, Default, Store)]
pub struct ComposerState {
    pub cart: Cart,
    /// Table identifier as typed
    pub table: String,
    pub submitting: bool,
}

pub type KitchenStore = Store<KitchenState>;
pub type ComposerStore = Store<ComposerState>;

// ========================
// Store Helper Functions
// ========================

/// Show a toast and hide it after `duration_ms`, unless replaced meanwhile
pub fn store_show_toast(store: KitchenStore, message: String, duration_ms: u32) {
    let generation = store.toast().write().show(message);
    spawn_local(async move {
        TimeoutFuture::new(duration_ms).await;
        store.toast().write().expire(generation);
    });
}

/// Whether the entry's action buttons should be disabled
pub fn store_entry_busy(store: &KitchenStore, key: u64) -> bool {
    store.board().with(|board| board.is_busy(key))
}
