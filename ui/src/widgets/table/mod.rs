//! Field-typed table widget.
//!
//! The rendering is split into smaller components:
//! - `header`: header row with one title per field
//! - `row`: data rows and skeleton rows
//! - `cells`: one renderer per cell view
//! - `state`: optimistic toggle values kept between frames
//!
//! Uses the same bordered grid style as the rest of the UI.

mod cells;
pub mod header;
pub mod row;
pub mod state;

use std::hash::Hash;

use egui::{Frame, InnerResponse, Margin, RichText, Ui};
use gigboard_business::{EMPTY_MESSAGE, FieldTable, Refetch, RowData, TableView};

use crate::utils::colors::HEADER_BG_COLOR;
use header::render_table_header;
use row::{render_field_row, render_skeleton_row};
pub use state::{FieldTableState, ToggleSlot};

const MIN_COL_WIDTH: f32 = 60.0;
const EMPTY_ICON: &str = "📭";

/// What the table owner must act on after a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableResponse {
    pub refetch: Refetch,
}

impl TableResponse {
    pub fn needs_refetch(&self) -> bool {
        self.refetch.is_reload()
    }
}

/// Header cell with background.
pub(crate) fn header_cell<R>(
    ui: &mut Ui,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> InnerResponse<R> {
    Frame::NONE
        .fill(HEADER_BG_COLOR)
        .inner_margin(Margin::symmetric(8, 8))
        .show(ui, add_contents)
}

/// Data cell with padding.
pub(crate) fn data_cell<R>(ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> InnerResponse<R> {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 6))
        .show(ui, add_contents)
}

/// Draws `table` over `data`.
///
/// `None` renders skeleton rows, an empty slice renders the empty state
/// below the header. Reload requests from cell handlers are merged into the
/// returned [`TableResponse`]; the widget never reloads by itself.
pub fn field_table<R: RowData>(
    ui: &mut Ui,
    id_salt: impl Hash,
    table: &FieldTable,
    data: Option<&[R]>,
    state: &mut FieldTableState,
) -> TableResponse {
    let view = table.view(data);

    let refetch = ui
        .push_id(id_salt, |ui| {
            let refetch = egui::Grid::new("field_table")
                .num_columns(table.fields().len())
                .striped(true)
                .spacing([16.0, 0.0])
                .min_col_width(MIN_COL_WIDTH)
                .show(ui, |ui| {
                    render_table_header(ui, table);

                    match &view {
                        TableView::Loading { rows, columns } => {
                            for _ in 0..*rows {
                                render_skeleton_row(ui, *columns);
                            }
                            Refetch::Keep
                        }
                        TableView::Empty => Refetch::Keep,
                        TableView::Rows(rows) => rows.iter().fold(Refetch::Keep, |refetch, row| {
                            refetch.merge(render_field_row(ui, table, row, state))
                        }),
                    }
                })
                .inner;

            if matches!(view, TableView::Empty) {
                render_empty_state(ui);
            }
            refetch
        })
        .inner;

    if refetch.is_reload() {
        log::debug!("Field table requested a reload");
    }
    TableResponse { refetch }
}

/// Full-width message shown under the header when there are no rows.
fn render_empty_state(ui: &mut Ui) {
    Frame::NONE
        .inner_margin(Margin::symmetric(8, 16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(EMPTY_ICON).size(24.0));
                ui.label(RichText::new(EMPTY_MESSAGE).weak());
            });
        });
}

#[cfg(test)]
mod field_table_tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use egui::accesskit::Role;
    use egui_kittest::Harness;
    use gigboard_business::{
        ActionHandler, ActionOption, FieldDescriptor, FieldKind, RowKey, StatusFormat,
        ToggleHandler,
    };
    use kittest::Queryable;
    use serde_json::{Value, json};

    use super::cells::SKELETON_LABEL;
    use super::*;

    struct Fixture {
        table: FieldTable,
        rows: Option<Vec<Value>>,
        state: FieldTableState,
        refetch: Refetch,
    }

    impl Fixture {
        fn new(fields: Vec<FieldDescriptor>, rows: Option<Vec<Value>>) -> Self {
            Self {
                table: FieldTable::new(fields, "_id").expect("fields should be valid"),
                rows,
                state: FieldTableState::new(),
                refetch: Refetch::Keep,
            }
        }
    }

    fn show(ui: &mut Ui, fixture: &mut Fixture) {
        let response = field_table(
            ui,
            "test_table",
            &fixture.table,
            fixture.rows.as_deref(),
            &mut fixture.state,
        );
        fixture.refetch = fixture.refetch.merge(response.refetch);
    }

    fn ticket_fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new("subject", "Subject", FieldKind::Text),
            FieldDescriptor::new(
                "status",
                "Status",
                FieldKind::status([StatusFormat::new("OPEN", "Open").colors("#eee", "#000")]),
            ),
        ]
    }

    #[test]
    fn test_headers_exist_while_loading() {
        let harness = Harness::new_ui_state(show, Fixture::new(ticket_fields(), None));

        assert!(
            harness.query_by_label("Subject").is_some(),
            "Subject header should exist"
        );
        assert!(
            harness.query_by_label("Status").is_some(),
            "Status header should exist"
        );
        assert!(
            harness.query_by_label_contains(EMPTY_MESSAGE).is_none(),
            "Loading table should not show the empty state"
        );
        assert_eq!(
            harness.query_all_by_label(SKELETON_LABEL).count(),
            3 * ticket_fields().len(),
            "Loading table should draw 3 skeleton rows with one block per field"
        );
    }

    #[test]
    fn test_empty_rows_show_message() {
        let harness = Harness::new_ui_state(show, Fixture::new(ticket_fields(), Some(vec![])));

        assert!(
            harness.query_by_label("Subject").is_some(),
            "Header should exist even with no data"
        );
        assert!(
            harness.query_by_label(EMPTY_MESSAGE).is_some(),
            "Empty state message should be displayed"
        );
    }

    #[test]
    fn test_ticket_row_shows_text_and_pill() {
        let rows = vec![json!({ "_id": "1", "subject": "Bug", "status": "OPEN" })];
        let harness = Harness::new_ui_state(show, Fixture::new(ticket_fields(), Some(rows)));

        assert!(harness.query_by_label("Bug").is_some(), "Subject text should be displayed");
        assert!(harness.query_by_label("Open").is_some(), "Status pill should show its label");
        assert!(harness.query_by_label_contains(EMPTY_MESSAGE).is_none());
    }

    #[test]
    fn test_typed_cells_render_their_text() {
        let fields = vec![
            FieldDescriptor::new("skills", "Skills", FieldKind::array_summary(Some("name"))),
            FieldDescriptor::new("createdAt", "Created", FieldKind::Date),
            FieldDescriptor::new("budget", "Budget", FieldKind::currency("USD")),
            FieldDescriptor::new("_id", "Actions", FieldKind::actions([])),
        ];
        let rows = vec![json!({
            "_id": "1",
            "skills": [{ "name": "Rust" }, { "name": "Go" }, { "name": "Zig" }],
            "createdAt": "not a date",
            "budget": 1234.5,
        })];
        let harness = Harness::new_ui_state(show, Fixture::new(fields, Some(rows)));

        assert!(
            harness.query_by_label("Rust +2 more").is_some(),
            "Array summary should show the first element and the remainder"
        );
        assert!(
            harness.query_by_label("-").is_some(),
            "Malformed date should render the placeholder"
        );
        assert!(harness.query_by_label("$1,234.50").is_some());
        assert!(
            harness.query_by_label("Final Status").is_some(),
            "Action field without options should show the final status label"
        );
        assert!(harness.query_by_label("⋮").is_none(), "No menu trigger without options");
        assert!(harness.query_by_label("➡").is_none(), "No action button without options");
    }

    #[test]
    fn test_single_action_click_requests_reload() {
        let pressed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&pressed);
        let fields = vec![
            FieldDescriptor::new("subject", "Subject", FieldKind::Text),
            FieldDescriptor::new(
                "_id",
                "Actions",
                FieldKind::actions([ActionOption::button(
                    "Close",
                    ActionHandler::new(move |ctx| {
                        assert_eq!(ctx.row_id.as_id(), Some("7"));
                        flag.store(true, Ordering::SeqCst);
                        Refetch::Reload
                    }),
                )]),
            ),
        ];
        let rows = vec![json!({ "_id": "7", "subject": "Bug" })];
        let mut harness = Harness::new_ui_state(show, Fixture::new(fields, Some(rows)));

        harness.step();
        assert!(!harness.state().refetch.is_reload());

        if let Some(button) = harness.query_by_label("➡") {
            button.click();
        }
        harness.step();

        assert!(pressed.load(Ordering::SeqCst), "Action handler should run on click");
        assert!(
            harness.state().refetch.is_reload(),
            "Reload request should reach the table owner"
        );
    }

    #[test]
    fn test_toggle_click_flips_and_calls_handler() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let fields = vec![
            FieldDescriptor::new("subject", "Subject", FieldKind::Text),
            FieldDescriptor::new(
                "urgent",
                "Urgent",
                FieldKind::toggle(ToggleHandler::new(move |ctx| {
                    let id = ctx.row_id.as_id().unwrap_or_default().to_owned();
                    sink.lock().unwrap().push((id, ctx.value));
                    Refetch::Keep
                })),
            ),
        ];
        let rows = vec![
            json!({ "_id": "a", "subject": "First", "urgent": false }),
            json!({ "_id": "b", "subject": "Second", "urgent": false }),
        ];
        let mut harness = Harness::new_ui_state(show, Fixture::new(fields, Some(rows)));

        harness.step();
        let switches: Vec<_> = harness.query_all_by_role(Role::CheckBox).collect();
        assert_eq!(switches.len(), 2, "Each row should have a switch");
        switches[0].click();
        harness.step();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("a".to_owned(), true)],
            "Handler should see the row id and the new value"
        );
        let state = &mut harness.state_mut().state;
        assert_eq!(state.pending_toggles(), 1, "Flip should be kept optimistically");
        assert!(state.toggle_value(&ToggleSlot::new(1, RowKey::Id("a".to_owned())), false));
        assert!(
            !state.toggle_value(&ToggleSlot::new(1, RowKey::Id("b".to_owned())), false),
            "Other rows should keep their value"
        );
        assert!(!harness.state().refetch.is_reload());
    }

    #[test]
    fn test_multiple_actions_render_menu_trigger() {
        let fields = vec![FieldDescriptor::new(
            "_id",
            "Actions",
            FieldKind::actions([
                ActionOption::link("View", "https://example.com/tickets/1"),
                ActionOption::link("Edit", "https://example.com/tickets/1/edit"),
            ]),
        )];
        let rows = vec![json!({ "_id": "1" })];
        let harness = Harness::new_ui_state(show, Fixture::new(fields, Some(rows)));

        assert!(harness.query_by_label("⋮").is_some(), "Menu trigger should be displayed");
        assert!(
            harness.query_by_label("➡").is_none(),
            "Multiple options should not use the single arrow button"
        );
    }
}
