//! Renderer-agnostic core of the gigboard field table.
//!
//! A [`FieldTable`] pairs an ordered list of [`FieldDescriptor`]s with the
//! key that identifies rows. [`FieldTable::view`] turns the current data into
//! a [`TableView`] of [`CellView`]s, which the egui widget and the terminal
//! renderer draw.

pub mod cell;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod field;
pub mod format;
pub mod refetch;
pub mod row;
pub mod table;

pub use cell::{ActionCell, ActionOutcome, CellView, ToggleCell};
pub use color::Rgba8;
pub use config::{BoardConfig, RowsSource};
pub use dispatch::render_cell;
pub use error::{Error, Result};
pub use field::{
    ActionOption, ActionTarget, CellAlign, CellStyle, FieldDescriptor, FieldKind, FieldKindTag,
    StatusFormat,
};
pub use refetch::{
    ActionContext, ActionHandler, CustomCell, CustomRenderer, CustomValue, Refetch, ToggleContext,
    ToggleHandler,
};
pub use row::{RowData, RowKey, RowRecord};
pub use table::{EMPTY_MESSAGE, FieldTable, RowView, SKELETON_ROWS, TableView};
