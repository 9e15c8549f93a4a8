//! History List Component
//!
//! Orders resolved during this session, newest first.

use leptos::prelude::*;

use crate::board::HistoryEntry;
use crate::store::{KitchenStateStoreFields, KitchenStore};

#[component]
fn HistoryRow(entry: HistoryEntry) -> impl IntoView {
    let tag_class = entry.status.tag_class();
    view! {
        <div class="pedido historial fade-in">
            <div class="pedido-header">
                <h3>{entry.name}</h3>
                <span class=tag_class>{entry.status.label()}</span>
            </div>
            <p>{entry.details}</p>
            {entry.note.map(|note| view! {
                <p class="obs"><strong>"Nota:"</strong> " " {note}</p>
            })}
        </div>
    }
}

#[component]
pub fn HistoryList(store: KitchenStore) -> impl IntoView {
    view! {
        <div id="lista-procesados" class="lista-procesados">
            <For
                each=move || store.board().with(|b| b.history_newest_first())
                key=|(index, _)| *index
                children=move |(_, entry)| view! { <HistoryRow entry=entry /> }
            />
        </div>
    }
}
