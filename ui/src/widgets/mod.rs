pub mod table;

pub use table::{FieldTableState, TableResponse, ToggleSlot, field_table};
