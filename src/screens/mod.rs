//! Non-visual screen controllers for the list, create and edit screens.

/// Create/edit form controller.
pub mod form;
/// List screen controller.
pub mod list;
/// Banner image selection seam.
pub mod picker;
