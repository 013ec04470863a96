use serde_json::Value;

use super::PLACEHOLDER;
use crate::row::display_text;

/// `first +N more`, with the whole list for the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub first: String,
    /// Elements after the first.
    pub more: usize,
    /// Comma-joined display values of every element.
    pub full: String,
}

impl Summary {
    pub fn visible(&self) -> String {
        if self.more == 0 {
            self.first.clone()
        } else {
            format!("{} +{} more", self.first, self.more)
        }
    }
}

/// Summarizes an array value. Returns `None` for empty arrays.
pub fn summarize(items: &[Value], display_key: Option<&str>) -> Option<Summary> {
    let texts: Vec<String> = items
        .iter()
        .map(|item| item_text(item, display_key).unwrap_or_else(|| PLACEHOLDER.to_owned()))
        .collect();

    let first = texts.first()?.clone();
    Some(Summary {
        first,
        more: texts.len() - 1,
        full: texts.join(", "),
    })
}

fn item_text(item: &Value, display_key: Option<&str>) -> Option<String> {
    match (display_key, item) {
        (Some(key), Value::Object(object)) => object.get(key).and_then(display_text),
        _ => display_text(item),
    }
}
