//! Field-type dispatch: one rendering rule per [`FieldKind`].
//!
//! The match in [`render_cell`] has no wildcard arm: a new kind needs a
//! rule here before the crate compiles.

use serde_json::Value;

use crate::cell::{ActionCell, CellView, ToggleCell};
use crate::field::{FieldDescriptor, FieldKind};
use crate::format::{array, currency, date, status, text};
use crate::refetch::{CustomCell, CustomValue};
use crate::row::{RowData, RowKey, display_text};

/// Renders the cell of `field` for `row`.
///
/// Never fails: values that a kind cannot represent become
/// [`CellView::Placeholder`] or the kind's literal fallback.
pub fn render_cell(field: &FieldDescriptor, row: &dyn RowData, row_id: &RowKey) -> CellView {
    let value = field
        .name
        .as_ref()
        .and_then(|name| row.get(name.as_str()))
        .filter(|value| !value.is_null());

    match &field.kind {
        FieldKind::Text => CellView::text_or_placeholder(value.and_then(display_text)),
        FieldKind::LongText { max_len, tooltip } => {
            let Some(full) = value.and_then(display_text) else {
                return CellView::Placeholder;
            };
            let cut = text::truncate(&full, *max_len);
            match cut.full {
                Some(full) => CellView::Tooltip {
                    visible: cut.visible,
                    full: tooltip.clone().unwrap_or(full),
                },
                None => CellView::Text(cut.visible),
            }
        }
        FieldKind::Date => degrade(value, date::format_date, "date"),
        FieldKind::DateTime => degrade(value, date::format_date_time, "date-time"),
        FieldKind::Link { label } => match value.and_then(display_text) {
            Some(href) => CellView::Link {
                label: label.clone().unwrap_or_else(|| href.clone()),
                href,
            },
            None => CellView::Placeholder,
        },
        FieldKind::Currency { code } => degrade(
            value,
            |value| currency::format_currency(value, code.as_deref()),
            "amount",
        ),
        FieldKind::Status { formats } => {
            let Some(raw) = value.and_then(display_text) else {
                return CellView::Placeholder;
            };
            match status::find_status(formats, &raw) {
                Some(format) => CellView::Pill(status::status_pill(format)),
                None => CellView::Text(raw),
            }
        }
        FieldKind::ArraySummary { display_key } => match value {
            Some(Value::Array(items)) => {
                match array::summarize(items, display_key.as_ref().map(|key| key.as_str())) {
                    Some(summary) if summary.more == 0 => CellView::Text(summary.first),
                    Some(summary) => CellView::Summary(summary),
                    None => CellView::Placeholder,
                }
            }
            other => CellView::text_or_placeholder(other.and_then(display_text)),
        },
        FieldKind::Length => match value {
            Some(Value::Array(items)) => CellView::Text(items.len().to_string()),
            _ => CellView::Placeholder,
        },
        FieldKind::Toggle { on_toggle } => CellView::Toggle(ToggleCell {
            row_id: row_id.clone(),
            field: field.name,
            on: value.is_some_and(is_switched_on),
            handler: on_toggle.clone(),
        }),
        FieldKind::Action { options } => {
            if options.is_empty() {
                CellView::FinalStatus
            } else {
                CellView::Actions(ActionCell {
                    row_id: row_id.clone(),
                    options: options.clone(),
                })
            }
        }
        FieldKind::Custom { render } => {
            let custom_value = match field.name {
                Some(_) => CustomValue::Field(value),
                None => CustomValue::Row(row),
            };
            match render {
                Some(render) => render.render(&CustomCell {
                    row_id,
                    value: custom_value,
                }),
                None => CellView::Text(row_id.to_string()),
            }
        }
    }
}

/// Formats a present value, logging values the formatter rejects.
fn degrade(
    value: Option<&Value>,
    format: impl FnOnce(&Value) -> Option<String>,
    what: &str,
) -> CellView {
    let Some(value) = value else {
        return CellView::Placeholder;
    };
    match format(value) {
        Some(text) => CellView::Text(text),
        None => {
            log::debug!("Unrepresentable {what} {value}; rendering placeholder");
            CellView::Placeholder
        }
    }
}

/// Switch coercion: `true` or the string `"true"` in any case.
pub fn is_switched_on(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::String(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}
