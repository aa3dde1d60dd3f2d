//! UI Components
//!
//! Reusable Leptos components for the positions form.

mod image_upload;
mod kind_selector;
mod position_form;
mod subitem_form;
mod validated_field;

pub use image_upload::ImageUpload;
pub use kind_selector::KindSelector;
pub use position_form::PositionForm;
pub use subitem_form::SubitemForm;
pub use validated_field::ValidatedField;
