//! Sample ticket board used when no row source is configured.

use std::sync::{Arc, Mutex, PoisonError};

use gigboard_business::{
    ActionHandler, ActionOption, ActionTarget, CellAlign, CellStyle, CellView, CustomRenderer, CustomValue,
    FieldDescriptor, FieldKind, FieldTable, Refetch, RowKey, RowRecord, StatusFormat,
    ToggleHandler,
};
use gigboard_business::row::display_text;
use serde_json::{Value, json};

const ID_KEY: &str = "_id";

/// Ticket rows kept in memory. Handlers mutate it and ask for a reload.
#[derive(Debug, Clone, Default)]
pub struct TicketStore {
    rows: Arc<Mutex<Vec<RowRecord>>>,
}

impl TicketStore {
    pub fn new(rows: Vec<RowRecord>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    /// Store seeded with sample tickets.
    pub fn demo() -> Self {
        Self::new(sample_rows())
    }

    pub fn snapshot(&self) -> Vec<RowRecord> {
        self.rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Sets `key` on the row identified by `row_id`. Returns whether it exists.
    pub fn set(&self, row_id: &RowKey, key: &str, value: Value) -> bool {
        let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
        let row = match row_id {
            RowKey::Id(id) => rows.iter_mut().find(|row| {
                row.fields()
                    .get(ID_KEY)
                    .and_then(display_text)
                    .is_some_and(|value| value == *id)
            }),
            RowKey::Index(index) => rows.get_mut(*index),
        };

        match row {
            Some(row) => {
                row.insert(key, value);
                true
            }
            None => {
                log::warn!("No ticket {row_id} in the store");
                false
            }
        }
    }
}

fn sample_rows() -> Vec<RowRecord> {
    let rows = json!([
        {
            "_id": "T-1001",
            "subject": "Logo redesign",
            "status": "OPEN",
            "freelancer": { "name": "Ada Byron", "rating": 4.8 },
            "description": "Refresh the brand mark and deliver SVG plus PNG exports for web and print.",
            "skills": [{ "name": "Figma" }, { "name": "Illustrator" }, { "name": "Branding" }],
            "budget": 450,
            "createdAt": "2026-09-01T10:00:00Z",
            "bids": [{ "by": "u1" }, { "by": "u2" }],
            "profileUrl": "https://example.com/freelancers/ada",
            "urgent": false
        },
        {
            "_id": "T-1002",
            "subject": "Checkout bug",
            "status": "IN_PROGRESS",
            "freelancer": { "name": "Linus K" },
            "description": "Card payments fail on retry.",
            "skills": [{ "name": "Rust" }],
            "budget": "1200.5",
            "createdAt": "2026-09-14",
            "bids": [],
            "profileUrl": "https://example.com/freelancers/linus",
            "urgent": "true"
        },
        {
            "_id": "T-1003",
            "subject": "Landing page copy",
            "status": "CLOSED",
            "description": "",
            "skills": [],
            "budget": null,
            "createdAt": 1757980800000_u64,
            "urgent": false
        }
    ]);

    match rows {
        Value::Array(items) => items.into_iter().filter_map(RowRecord::from_value).collect(),
        _ => Vec::new(),
    }
}

/// Field descriptors of the sample board. Handlers are attached separately.
pub fn ticket_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("subject", "Subject", FieldKind::Text).with_style(CellStyle {
            strong: true,
            ..CellStyle::default()
        }),
        FieldDescriptor::new(
            "status",
            "Status",
            FieldKind::status([
                StatusFormat::new("OPEN", "Open").colors("#e3f2fd", "#0d47a1"),
                StatusFormat::new("IN_PROGRESS", "In progress").colors("#fff3e0", "#e65100"),
                StatusFormat::new("CLOSED", "closed")
                    .colors("#eeeeee", "#424242")
                    .uppercase(),
            ]),
        ),
        FieldDescriptor::whole_row("Freelancer", freelancer_renderer()),
        FieldDescriptor::new("description", "Description", FieldKind::long_text(32)),
        FieldDescriptor::new("skills", "Skills", FieldKind::array_summary(Some("name"))),
        FieldDescriptor::new("budget", "Budget", FieldKind::currency("USD")).with_style(
            CellStyle {
                align: CellAlign::Right,
                monospace: true,
                ..CellStyle::default()
            },
        ),
        FieldDescriptor::new("createdAt", "Created", FieldKind::Date),
        FieldDescriptor::new("bids", "Bids", FieldKind::Length),
        FieldDescriptor::new("profileUrl", "Profile", FieldKind::link("Profile")),
        FieldDescriptor::new("urgent", "Urgent", FieldKind::Toggle { on_toggle: None }),
        FieldDescriptor::new(
            ID_KEY,
            "Actions",
            FieldKind::Action {
                options: vec![
                    ActionOption::link("View", "https://example.com/tickets").with_icon("🔎"),
                    ActionOption {
                        label: "Close".to_owned(),
                        icon: Some("✔".to_owned()),
                        target: ActionTarget::Button { handler: None },
                    },
                    ActionOption {
                        label: "Reopen".to_owned(),
                        icon: None,
                        target: ActionTarget::Button { handler: None },
                    },
                ],
            },
        ),
    ]
}

/// Freelancer name followed by the rating, when present.
fn freelancer_renderer() -> CustomRenderer {
    CustomRenderer::new(|cell| {
        let CustomValue::Row(row) = &cell.value else {
            return CellView::Placeholder;
        };
        let freelancer = row.get("freelancer");
        let name = freelancer
            .and_then(|value| value.get("name"))
            .and_then(Value::as_str);
        let rating = freelancer
            .and_then(|value| value.get("rating"))
            .and_then(Value::as_f64);

        match (name, rating) {
            (Some(name), Some(rating)) => CellView::Stack(vec![
                CellView::text(name),
                CellView::text(format!("★ {rating:.1}")),
            ]),
            (Some(name), None) => CellView::text(name),
            (None, _) => CellView::Placeholder,
        }
    })
}

/// Wires the sample board's toggle and buttons to `store`.
pub fn attach_store_handlers(table: &mut FieldTable, store: &TicketStore) {
    let urgent = store.clone();
    let close = store.clone();
    let reopen = store.clone();

    table
        .on_toggle(
            "urgent",
            ToggleHandler::new(move |ctx| {
                reload_if(urgent.set(ctx.row_id, "urgent", Value::Bool(ctx.value)))
            }),
        )
        .on_action(
            "Close",
            ActionHandler::new(move |ctx| reload_if(close.set(ctx.row_id, "status", json!("CLOSED")))),
        )
        .on_action(
            "Reopen",
            ActionHandler::new(move |ctx| reload_if(reopen.set(ctx.row_id, "status", json!("OPEN")))),
        );
}

#[inline]
fn reload_if(changed: bool) -> Refetch {
    if changed { Refetch::Reload } else { Refetch::Keep }
}
