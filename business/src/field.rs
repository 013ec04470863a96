//! Field descriptors: one per table column.
//!
//! Descriptors are plain configuration. They deserialize from JSON (handlers
//! excluded) so a table layout can live in a file, and handlers are attached
//! in code afterwards.

use std::fmt;

use serde::Deserialize;
use ustr::Ustr;

use crate::refetch::{ActionHandler, CustomRenderer, ToggleHandler};

/// Describes one column of a field table.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldDescriptor {
    /// Source key on the row. `None` hands the whole row to the renderer.
    #[serde(default)]
    pub name: Option<Ustr>,
    /// Header text.
    #[serde(default)]
    pub header: String,
    /// Optional presentation hint.
    #[serde(default)]
    pub style: Option<CellStyle>,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl AsRef<str>, header: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: Some(Ustr::from(name.as_ref())),
            header: header.into(),
            style: None,
            kind,
        }
    }

    /// A custom column reading the whole row.
    pub fn whole_row(header: impl Into<String>, render: CustomRenderer) -> Self {
        Self {
            name: None,
            header: header.into(),
            style: None,
            kind: FieldKind::Custom {
                render: Some(render),
            },
        }
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Header text, falling back to the source key.
    pub fn title(&self) -> &str {
        if self.header.is_empty() {
            self.name.as_ref().map_or("", |name| name.as_str())
        } else {
            &self.header
        }
    }
}

/// The closed set of field types and their configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    /// Text truncated to `max_len` characters with the full text on hover.
    #[serde(alias = "tooltip")]
    LongText {
        #[serde(default, rename = "maxLength")]
        max_len: Option<usize>,
        /// Hover content; defaults to the full value.
        #[serde(default)]
        tooltip: Option<String>,
    },
    Date,
    #[serde(rename = "datetime", alias = "dateTime")]
    DateTime,
    Link {
        #[serde(default, rename = "linkText")]
        label: Option<String>,
    },
    #[serde(alias = "crypto")]
    Currency {
        #[serde(default, rename = "currency")]
        code: Option<String>,
    },
    Status {
        #[serde(default, rename = "statusFormats")]
        formats: Vec<StatusFormat>,
    },
    #[serde(rename = "array", alias = "arrayValue")]
    ArraySummary {
        /// Key read from each object element.
        #[serde(default, rename = "arrayName")]
        display_key: Option<Ustr>,
    },
    Length,
    Toggle {
        #[serde(skip)]
        on_toggle: Option<ToggleHandler>,
    },
    Action {
        #[serde(default, rename = "actions")]
        options: Vec<ActionOption>,
    },
    Custom {
        #[serde(skip)]
        render: Option<CustomRenderer>,
    },
}

impl FieldKind {
    pub fn long_text(max_len: usize) -> Self {
        Self::LongText {
            max_len: Some(max_len),
            tooltip: None,
        }
    }

    pub fn link(label: impl Into<String>) -> Self {
        Self::Link {
            label: Some(label.into()),
        }
    }

    pub fn currency(code: impl Into<String>) -> Self {
        Self::Currency {
            code: Some(code.into()),
        }
    }

    pub fn status(formats: impl IntoIterator<Item = StatusFormat>) -> Self {
        Self::Status {
            formats: formats.into_iter().collect(),
        }
    }

    pub fn array_summary(display_key: Option<&str>) -> Self {
        Self::ArraySummary {
            display_key: display_key.map(Ustr::from),
        }
    }

    pub fn toggle(handler: ToggleHandler) -> Self {
        Self::Toggle {
            on_toggle: Some(handler),
        }
    }

    pub fn actions(options: impl IntoIterator<Item = ActionOption>) -> Self {
        Self::Action {
            options: options.into_iter().collect(),
        }
    }

    pub fn custom(render: CustomRenderer) -> Self {
        Self::Custom {
            render: Some(render),
        }
    }

    pub fn tag(&self) -> FieldKindTag {
        match self {
            Self::Text => FieldKindTag::Text,
            Self::LongText { .. } => FieldKindTag::LongText,
            Self::Date => FieldKindTag::Date,
            Self::DateTime => FieldKindTag::DateTime,
            Self::Link { .. } => FieldKindTag::Link,
            Self::Currency { .. } => FieldKindTag::Currency,
            Self::Status { .. } => FieldKindTag::Status,
            Self::ArraySummary { .. } => FieldKindTag::ArraySummary,
            Self::Length => FieldKindTag::Length,
            Self::Toggle { .. } => FieldKindTag::Toggle,
            Self::Action { .. } => FieldKindTag::Action,
            Self::Custom { .. } => FieldKindTag::Custom,
        }
    }
}

/// Payload-free name of a [`FieldKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKindTag {
    Text,
    LongText,
    Date,
    DateTime,
    Link,
    Currency,
    Status,
    ArraySummary,
    Length,
    Toggle,
    Action,
    Custom,
}

impl FieldKindTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LongText => "longText",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Link => "link",
            Self::Currency => "currency",
            Self::Status => "status",
            Self::ArraySummary => "array",
            Self::Length => "length",
            Self::Toggle => "toggle",
            Self::Action => "action",
            Self::Custom => "custom",
        }
    }

    /// Whether a field of this type can render without a source key.
    pub fn reads_whole_row(self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for FieldKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a status field's lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusFormat {
    /// Raw row value, matched case-insensitively.
    pub value: String,
    /// Pill label.
    pub text_value: String,
    #[serde(default)]
    pub bg_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
    #[serde(default)]
    pub is_uppercase: bool,
}

impl StatusFormat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text_value: label.into(),
            bg_color: None,
            text_color: None,
            is_uppercase: false,
        }
    }

    pub fn colors(mut self, bg_color: impl Into<String>, text_color: impl Into<String>) -> Self {
        self.bg_color = Some(bg_color.into());
        self.text_color = Some(text_color.into());
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.is_uppercase = true;
        self
    }
}

/// One entry of an action menu.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionOption {
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(flatten)]
    pub target: ActionTarget,
}

impl ActionOption {
    pub fn button(label: impl Into<String>, handler: ActionHandler) -> Self {
        Self {
            label: label.into(),
            icon: None,
            target: ActionTarget::Button {
                handler: Some(handler),
            },
        }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            target: ActionTarget::Link { href: href.into() },
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ActionTarget {
    Button {
        #[serde(skip)]
        handler: Option<ActionHandler>,
    },
    Link {
        href: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub align: CellAlign,
    pub monospace: bool,
    pub strong: bool,
    /// Fixed column width in points.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_status_field() {
        let field: FieldDescriptor = serde_json::from_str(
            r##"{
                "name": "status",
                "header": "Status",
                "type": "status",
                "statusFormats": [
                    { "value": "OPEN", "textValue": "Open", "bgColor": "#eee", "textColor": "#000" }
                ]
            }"##,
        )
        .unwrap();

        assert_eq!(field.name.as_deref(), Some("status"));
        let FieldKind::Status { formats } = &field.kind else {
            panic!("expected a status field, got {:?}", field.kind);
        };
        assert_eq!(formats[0].text_value, "Open");
        assert_eq!(formats[0].bg_color.as_deref(), Some("#eee"));
        assert!(!formats[0].is_uppercase);
    }

    #[test]
    fn test_deserialize_unit_and_aliased_kinds() {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(
            r#"[
                { "name": "subject", "header": "Subject", "type": "text" },
                { "name": "createdAt", "header": "Created", "type": "datetime" },
                { "name": "note", "header": "Note", "type": "tooltip", "maxLength": 10 },
                { "name": "amount", "header": "Amount", "type": "crypto", "currency": "BTC" },
                { "header": "Row", "type": "custom" }
            ]"#,
        )
        .unwrap();

        let tags: Vec<_> = fields.iter().map(|f| f.kind.tag()).collect();
        assert_eq!(
            tags,
            [
                FieldKindTag::Text,
                FieldKindTag::DateTime,
                FieldKindTag::LongText,
                FieldKindTag::Currency,
                FieldKindTag::Custom,
            ]
        );
        assert!(fields[4].name.is_none());
    }

    #[test]
    fn test_deserialize_actions() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{
                "name": "_id",
                "header": "Actions",
                "type": "action",
                "actions": [
                    { "label": "Open", "kind": "link", "href": "/tickets/1" },
                    { "label": "Close", "kind": "button", "icon": "x" }
                ]
            }"#,
        )
        .unwrap();

        let FieldKind::Action { options } = &field.kind else {
            panic!("expected an action field");
        };
        assert!(matches!(&options[0].target, ActionTarget::Link { href } if href == "/tickets/1"));
        assert!(matches!(options[1].target, ActionTarget::Button { handler: None }));
        assert_eq!(options[1].icon.as_deref(), Some("x"));
    }

    #[test]
    fn test_style_defaults() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{ "name": "id", "header": "ID", "type": "text", "style": { "monospace": true } }"#,
        )
        .unwrap();
        let style = field.style.unwrap();
        assert!(style.monospace);
        assert_eq!(style.align, CellAlign::Left);
        assert_eq!(style.width, None);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let field = FieldDescriptor::new("subject", "", FieldKind::Text);
        assert_eq!(field.title(), "subject");
    }
}
