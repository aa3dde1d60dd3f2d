//! Position Validation
//!
//! Pure, synchronous rules mapping a Position (and its subitems) to
//! per-field error lists and a derived `is_valid` flag. Every run fully
//! replaces the previous error lists.

use crate::models::{Position, Subitem, MSG_REQUIRED, MSG_TITLE_TOO_SHORT};

/// Validate every position independently, preserving order
pub fn validate_positions(positions: &[Position]) -> Vec<Position> {
    positions.iter().map(validate_position).collect()
}

/// Validate one position, returning a copy with fresh error lists and a
/// recomputed `is_valid`
pub fn validate_position(position: &Position) -> Position {
    let mut p = position.clone();

    p.title_errors = title_errors(&p.title);

    p.price_errors = if p.price.is_empty() {
        vec![MSG_REQUIRED.to_string()]
    } else {
        Vec::new()
    };

    p.image_errors = match &p.image {
        Some(image) if image.is_done() => Vec::new(),
        _ => vec![MSG_REQUIRED.to_string()],
    };

    p.warehouse_count_errors = warehouse_count_errors(p.warehouse, &p.warehouse_count);

    p.subitems = p.subitems.iter().map(validate_subitem).collect();

    p.is_valid = p.title_errors.is_empty()
        && p.price_errors.is_empty()
        && p.image_errors.is_empty()
        && p.warehouse_count_errors.is_empty()
        && p
            .subitems
            .iter()
            .all(|s| s.title_errors.is_empty() && s.warehouse_count_errors.is_empty());

    p
}

fn validate_subitem(subitem: &Subitem) -> Subitem {
    let mut s = subitem.clone();
    s.title_errors = title_errors(&s.title);
    s.warehouse_count_errors = warehouse_count_errors(s.warehouse, &s.warehouse_count);
    s
}

fn title_errors(title: &str) -> Vec<String> {
    if title.is_empty() {
        vec![MSG_REQUIRED.to_string()]
    } else if title.chars().count() < 3 {
        vec![MSG_TITLE_TOO_SHORT.to_string()]
    } else {
        Vec::new()
    }
}

fn warehouse_count_errors(warehouse: bool, count: &str) -> Vec<String> {
    if warehouse && count.is_empty() {
        vec![MSG_REQUIRED.to_string()]
    } else {
        Vec::new()
    }
}
