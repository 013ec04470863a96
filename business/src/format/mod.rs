//! Pure formatting for the scalar field types.
//!
//! Every formatter returns `None` for input it cannot represent; the
//! dispatcher turns that into the placeholder cell.

pub mod array;
pub mod currency;
pub mod date;
pub mod status;
pub mod text;

/// Rendered for absent, empty or unrepresentable values.
pub const PLACEHOLDER: &str = "-";
