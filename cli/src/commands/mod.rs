//! Command implementations for the gigboard CLI.
//!
//! Each subcommand is implemented in its own module.

pub mod check;
pub mod completions;
pub mod render;
mod source;

pub use check::run_check;
pub use completions::generate_completions;
pub use render::run_render;
