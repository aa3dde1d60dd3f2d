//! Form Models
//!
//! Position and Subitem records, the kind transition, and upload state.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

/// Validation message for a missing required field
pub const MSG_REQUIRED: &str = "Обязательное поле";
/// Validation message for a too-short title
pub const MSG_TITLE_TOO_SHORT: &str = "Название должно содержать минимум 3 символа";

/// Position kind: a standalone product or a group of subitems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PositionKind {
    #[default]
    Simple,
    Grouped,
}

impl PositionKind {
    pub fn is_grouped(&self) -> bool {
        matches!(self, PositionKind::Grouped)
    }
}

/// Upload lifecycle of the position image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UploadStatus {
    Uploading,
    Done,
    Error,
}

/// Handle returned by the upload collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub status: UploadStatus,
    pub url: String,
}

impl UploadedImage {
    pub fn uploading() -> Self {
        Self { status: UploadStatus::Uploading, url: String::new() }
    }

    pub fn done(url: String) -> Self {
        Self { status: UploadStatus::Done, url }
    }

    pub fn failed() -> Self {
        Self { status: UploadStatus::Error, url: String::new() }
    }

    /// Only a finished upload counts as a present image
    pub fn is_done(&self) -> bool {
        self.status == UploadStatus::Done
    }
}

/// One product entry: the unit of validation and submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Stable identity, assigned once at creation
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub kind: PositionKind,
    pub image: Option<UploadedImage>,
    pub category: String,
    pub warehouse: bool,
    pub warehouse_count: String,
    pub subitems: Vec<Subitem>,
    pub title_errors: Vec<String>,
    pub price_errors: Vec<String>,
    pub image_errors: Vec<String>,
    pub warehouse_count_errors: Vec<String>,
    pub is_valid: bool,
}

/// Nested variant entry under a grouped Position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subitem {
    pub id: u64,
    pub title: String,
    pub warehouse: bool,
    pub warehouse_count: String,
    pub title_errors: Vec<String>,
    pub warehouse_count_errors: Vec<String>,
}

impl Position {
    /// Create a blank position with a fresh id
    pub fn new() -> Self {
        Self::with_id(next_id())
    }

    /// Create a blank position carrying a caller-supplied id. Used for
    /// transient lookups of rows that no longer exist; consumes no fresh id.
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            price: String::new(),
            kind: PositionKind::Simple,
            image: None,
            category: String::new(),
            warehouse: false,
            warehouse_count: String::new(),
            subitems: Vec::new(),
            title_errors: Vec::new(),
            price_errors: Vec::new(),
            image_errors: Vec::new(),
            warehouse_count_errors: Vec::new(),
            is_valid: true,
        }
    }

    /// Switch between Simple and Grouped, keeping the subitem list in shape:
    /// Grouped seeds exactly one blank subitem when none exist, Simple clears
    /// them. Idempotent when the kind does not change.
    pub fn set_grouped(&mut self, grouped: bool) {
        if grouped {
            self.kind = PositionKind::Grouped;
            if self.subitems.is_empty() {
                self.subitems.push(Subitem::new());
            }
        } else {
            self.kind = PositionKind::Simple;
            self.subitems.clear();
        }
    }

    /// Append a blank subitem (always permitted)
    pub fn add_subitem(&mut self) {
        self.subitems.push(Subitem::new());
    }

    /// Remove a subitem by id. The UI only offers this while more than one
    /// subitem remains; the data layer does not re-check.
    pub fn remove_subitem(&mut self, id: u64) {
        self.subitems.retain(|s| s.id != id);
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Subitem {
    pub fn new() -> Self {
        Self::with_id(next_id())
    }

    /// Blank subitem with a caller-supplied id; consumes no fresh id
    pub fn with_id(id: u64) -> Self {
        Self {
            id,
            title: String::new(),
            warehouse: false,
            warehouse_count: String::new(),
            title_errors: Vec::new(),
            warehouse_count_errors: Vec::new(),
        }
    }
}

impl Default for Subitem {
    fn default() -> Self {
        Self::new()
    }
}

/// Session-unique id, seeded from the creation-time clock.
///
/// A raw millisecond timestamp collides when a position and its seeded
/// subitem are created in the same tick, so the clock only seeds an atomic
/// counter.
pub fn next_id() -> u64 {
    static COUNTER: OnceLock<AtomicU64> = OnceLock::new();
    COUNTER
        .get_or_init(|| AtomicU64::new(now_ms()))
        .fetch_add(1, Ordering::Relaxed)
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = Position::new();
        let b = Position::new();
        let s = Subitem::new();
        assert_ne!(a.id, b.id);
        assert_ne!(a.id, s.id);
        assert_ne!(b.id, s.id);
    }

    #[test]
    fn grouped_seeds_exactly_one_blank_subitem() {
        let mut p = Position::new();
        assert_eq!(p.kind, PositionKind::Simple);
        assert!(p.subitems.is_empty());

        p.set_grouped(true);
        assert_eq!(p.kind, PositionKind::Grouped);
        assert_eq!(p.subitems.len(), 1);
        assert_eq!(p.subitems[0].title, "");
        assert!(!p.subitems[0].warehouse);
        assert_eq!(p.subitems[0].warehouse_count, "");
    }

    #[test]
    fn grouped_transition_is_idempotent() {
        let mut p = Position::new();
        p.set_grouped(true);
        let seeded = p.subitems.clone();

        p.set_grouped(true);
        assert_eq!(p.subitems, seeded);
    }

    #[test]
    fn simple_clears_subitems() {
        let mut p = Position::new();
        p.set_grouped(true);
        p.add_subitem();
        assert_eq!(p.subitems.len(), 2);

        p.set_grouped(false);
        assert_eq!(p.kind, PositionKind::Simple);
        assert!(p.subitems.is_empty());
    }

    #[test]
    fn regrouping_reseeds_after_clear() {
        let mut p = Position::new();
        p.set_grouped(true);
        p.set_grouped(false);
        p.set_grouped(true);
        assert_eq!(p.subitems.len(), 1);
    }

    #[test]
    fn remove_subitem_by_id() {
        let mut p = Position::new();
        p.set_grouped(true);
        p.add_subitem();
        let keep = p.subitems[1].id;
        let gone = p.subitems[0].id;

        p.remove_subitem(gone);
        assert_eq!(p.subitems.len(), 1);
        assert_eq!(p.subitems[0].id, keep);
    }

    #[test]
    fn with_id_keeps_the_given_identity() {
        let p = Position::with_id(7);
        assert_eq!(p.id, 7);
        assert_eq!(p.title, "");
        assert!(p.subitems.is_empty());

        let s = Subitem::with_id(8);
        assert_eq!(s.id, 8);
        assert_eq!(s.title, "");
    }

    #[test]
    fn only_finished_upload_is_done() {
        assert!(!UploadedImage::uploading().is_done());
        assert!(!UploadedImage::failed().is_done());
        assert!(UploadedImage::done("https://cdn/img.png".to_string()).is_done());
    }
}
