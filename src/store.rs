//! Form State Store
//!
//! The single in-memory position list, held in a Leptos reactive store.
//! The pure list operations live here too so they can be tested without a
//! browser; the store helpers are thin wrappers over them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Position, Subitem};

/// Global form state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct FormState {
    /// All positions being edited, in insertion order
    pub positions: Vec<Position>,
}

impl FormState {
    /// The form always starts with one blank position
    pub fn new() -> Self {
        Self { positions: vec![Position::new()] }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Get the form store from context
pub fn use_form_store() -> FormStore {
    expect_context::<FormStore>()
}

// ========================
// Pure list operations
// ========================

/// Append a new blank position with a fresh id
pub fn push_default(positions: &mut Vec<Position>) {
    positions.push(Position::new());
}

/// Remove the position with `id`. A no-op while only one position remains;
/// the UI hides the delete control in that case, the data layer enforces it.
pub fn remove_by_id(positions: &mut Vec<Position>, id: u64) {
    if positions.len() > 1 {
        positions.retain(|p| p.id != id);
    }
}

/// Apply a field edit to the position with `id`, leaving the others
/// untouched. Lookup is strictly by the stable id, never by index.
pub fn update_by_id(positions: &mut [Position], id: u64, edit: impl FnOnce(&mut Position)) {
    if let Some(position) = positions.iter_mut().find(|p| p.id == id) {
        edit(position);
    }
}

// ========================
// Store helpers
// ========================

/// Append a new blank position to the store
pub fn store_add_position(store: &FormStore) {
    push_default(&mut store.positions().write());
}

/// Remove a position from the store by id (guarded)
pub fn store_remove_position(store: &FormStore, id: u64) {
    remove_by_id(&mut store.positions().write(), id);
}

/// Edit one position in the store by id
pub fn store_update_position(store: &FormStore, id: u64, edit: impl FnOnce(&mut Position)) {
    update_by_id(&mut store.positions().write(), id, edit);
}

/// Edit one subitem of one position, both looked up by id
pub fn store_update_subitem(
    store: &FormStore,
    position_id: u64,
    subitem_id: u64,
    edit: impl FnOnce(&mut Subitem),
) {
    store_update_position(store, position_id, |p| {
        if let Some(subitem) = p.subitems.iter_mut().find(|s| s.id == subitem_id) {
            edit(subitem);
        }
    });
}

/// Replace the whole list (used to write back validation results)
pub fn store_set_positions(store: &FormStore, positions: Vec<Position>) {
    *store.positions().write() = positions;
}
