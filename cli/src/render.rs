//! Terminal rendering of a field table with `tabled`.

use clap::ValueEnum;
use gigboard_business::{CellAlign, CellView, EMPTY_MESSAGE, FieldTable, RowData, TableView};
use serde::{Deserialize, Serialize};
use tabled::Table;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

/// Stand-in for cells whose rows have not loaded.
pub const LOADING_CELL: &str = "...";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    #[default]
    Rounded,
    Ascii,
    Markdown,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub style: TableStyle,
    /// Expand tooltips, summaries and links to their full text.
    pub wide: bool,
}

/// Renders `table` over `data` the way the widget would, as text.
pub fn render_table<R: RowData>(
    table: &FieldTable,
    data: Option<&[R]>,
    options: RenderOptions,
) -> String {
    let view = table.view(data);

    let mut builder = Builder::default();
    builder.push_record(table.headers());
    match &view {
        TableView::Loading { rows, columns } => {
            for _ in 0..*rows {
                builder.push_record(vec![LOADING_CELL; *columns]);
            }
        }
        TableView::Empty => {}
        TableView::Rows(rows) => {
            for row in rows {
                builder.push_record(row.cells.iter().map(|cell| cell_text(cell, options.wide)));
            }
        }
    }

    let mut rendered = builder.build();
    apply_style(&mut rendered, options.style);
    for (index, field) in table.fields().iter().enumerate() {
        match field.style.map(|style| style.align).unwrap_or_default() {
            CellAlign::Left => {}
            CellAlign::Center => {
                rendered.modify(Columns::one(index), Alignment::center());
            }
            CellAlign::Right => {
                rendered.modify(Columns::one(index), Alignment::right());
            }
        }
    }

    let mut text = rendered.to_string();
    if matches!(view, TableView::Empty) {
        text.push('\n');
        text.push_str(EMPTY_MESSAGE);
    }
    text
}

#[inline]
fn cell_text(cell: &CellView, wide: bool) -> String {
    if wide {
        cell.full_text()
    } else {
        cell.plain_text()
    }
}

fn apply_style(table: &mut Table, style: TableStyle) {
    match style {
        TableStyle::Rounded => {
            table.with(Style::rounded());
        }
        TableStyle::Ascii => {
            table.with(Style::ascii());
        }
        TableStyle::Markdown => {
            table.with(Style::markdown());
        }
    }
}
