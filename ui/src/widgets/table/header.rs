//! Table header rendering for the field table.

use egui::Ui;
use gigboard_business::FieldTable;

use super::header_cell;

/// Renders one bold header cell per field, in field order.
#[inline]
pub fn render_table_header(ui: &mut Ui, table: &FieldTable) {
    for title in table.headers() {
        header_cell(ui, |ui| {
            ui.strong(title);
        });
    }
    ui.end_row();
}
