//! Row rendering for the field table.

use egui::Ui;
use gigboard_business::{FieldTable, Refetch, RowView};

use super::cells::{render_cell_view, render_skeleton_cell};
use super::data_cell;
use super::state::FieldTableState;

/// Renders one data row and reports the merged refetch request of its cells.
pub fn render_field_row(
    ui: &mut Ui,
    table: &FieldTable,
    view: &RowView,
    state: &mut FieldTableState,
) -> Refetch {
    let mut refetch = Refetch::Keep;

    for (column, (field, cell)) in table.fields().iter().zip(&view.cells).enumerate() {
        let style = field.style.unwrap_or_default();
        data_cell(ui, |ui| {
            if let Some(width) = style.width {
                ui.set_min_width(width);
            }
            ui.push_id((view.index, column), |ui| {
                refetch = refetch.merge(render_cell_view(ui, cell, style, column, state));
            });
        });
    }
    ui.end_row();

    refetch
}

/// Renders a row of skeleton blocks.
#[inline]
pub fn render_skeleton_row(ui: &mut Ui, columns: usize) {
    for _ in 0..columns {
        data_cell(ui, render_skeleton_cell);
    }
    ui.end_row();
}
