//! Kitchen Board
//!
//! Pending orders awaiting kitchen action and the session's history of
//! resolved ones.

use crate::models::{Order, OrderStatus};

/// A pending order as shown on the panel
#[derive(Debug, Clone, PartialEq)]
pub struct PendingEntry {
    /// Client-local identity; order ids may repeat when the push channel
    /// redelivers an event
    pub key: u64,
    pub order: Order,
    /// Observation typed by the kitchen staff
    pub note: String,
    /// Fade-out transition running
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub name: String,
    pub details: String,
    pub status: OrderStatus,
    pub note: Option<String>,
}

/// Snapshot taken when staff acts on an entry. The history record is built
/// from it, so it survives a refresh that replaces the pending list.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub key: u64,
    pub order_id: u32,
    pub status: OrderStatus,
    pub name: String,
    pub details: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Display order, top first
    pending: Vec<PendingEntry>,
    /// Resolution order, oldest first
    history: Vec<HistoryEntry>,
    /// Keys with a status request in flight
    in_flight: Vec<u64>,
    next_key: u64,
}

impl Board {
    pub fn pending(&self) -> &[PendingEntry] {
        &self.pending
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn get(&self, key: u64) -> Option<&PendingEntry> {
        self.pending.iter().find(|entry| entry.key == key)
    }

    /// Insert an order at the top of the pending list
    pub fn receive(&mut self, order: Order) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.pending.insert(
            0,
            PendingEntry {
                key,
                order,
                note: String::new(),
                leaving: false,
            },
        );
        key
    }

    /// Replace the pending list with a freshly fetched set.
    /// Orders are stacked one by one, so the last one ends up on top.
    pub fn replace_pending(&mut self, orders: Vec<Order>) {
        self.pending.clear();
        for order in orders {
            self.receive(order);
        }
    }

    pub fn set_note(&mut self, key: u64, note: String) {
        if let Some(entry) = self.pending.iter_mut().find(|e| e.key == key) {
            entry.note = note;
        }
    }

    pub fn mark_leaving(&mut self, key: u64) {
        if let Some(entry) = self.pending.iter_mut().find(|e| e.key == key) {
            entry.leaving = true;
        }
    }

    /// Whether the entry's actions are unavailable
    pub fn is_busy(&self, key: u64) -> bool {
        match self.get(key) {
            Some(entry) => entry.leaving || self.in_flight.contains(&key),
            None => true,
        }
    }

    /// Start resolving an entry with a terminal status. Returns `None` for a
    /// missing key, a non-terminal status, or a request already in flight.
    pub fn begin_resolve(&mut self, key: u64, status: OrderStatus) -> Option<Resolution> {
        if !status.is_terminal() || self.in_flight.contains(&key) {
            return None;
        }
        let entry = self.get(key)?;
        let note = entry.note.trim();
        let resolution = Resolution {
            key,
            order_id: entry.order.id,
            status,
            name: entry.order.name.clone(),
            details: entry.order.details.clone(),
            note: (!note.is_empty()).then(|| note.to_string()),
        };
        self.in_flight.push(key);
        Some(resolution)
    }

    /// The status request failed; the entry stays as it was
    pub fn release(&mut self, key: u64) {
        self.in_flight.retain(|k| *k != key);
    }

    /// The server accepted the status: drop the entry if it is still
    /// pending and record it in history
    pub fn commit(&mut self, resolution: Resolution) -> HistoryEntry {
        self.release(resolution.key);
        self.pending.retain(|e| e.key != resolution.key);
        let record = HistoryEntry {
            name: resolution.name,
            details: resolution.details,
            status: resolution.status,
            note: resolution.note,
        };
        self.history.push(record.clone());
        record
    }

    /// History for display, newest first, paired with its resolution index
    pub fn history_newest_first(&self) -> Vec<(usize, HistoryEntry)> {
        self.history.iter().cloned().enumerate().rev().collect()
    }
}
