//! Renderer-agnostic cell view model.
//!
//! The dispatcher turns every (row, field) pair into a [`CellView`]; the
//! egui widget and the terminal renderer only draw these.

use ustr::Ustr;

use crate::field::{ActionOption, ActionTarget};
use crate::format::PLACEHOLDER;
use crate::format::array::Summary;
use crate::format::status::StatusPill;
use crate::refetch::{ActionContext, Refetch, ToggleContext, ToggleHandler};
use crate::row::RowKey;

/// Shown instead of an action menu with no options.
pub const FINAL_STATUS_LABEL: &str = "Final Status";
/// Trigger of a single-option action cell.
pub const SINGLE_ACTION_ICON: &str = "➡";
/// Trigger of a multi-option action menu.
pub const MENU_ICON: &str = "⋮";

#[derive(Debug, Clone)]
pub enum CellView {
    /// Absent, empty or unrepresentable value.
    Placeholder,
    Text(String),
    /// Truncated text with the full value on hover.
    Tooltip { visible: String, full: String },
    /// Anchor opened in a new browsing context.
    Link { label: String, href: String },
    Pill(StatusPill),
    /// Array summary with more than one element.
    Summary(Summary),
    Toggle(ToggleCell),
    Actions(ActionCell),
    /// Action field without options.
    FinalStatus,
    /// Composite produced by custom renderers.
    Stack(Vec<CellView>),
}

impl CellView {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Text cell, or the placeholder for `None`.
    pub fn text_or_placeholder(text: Option<String>) -> Self {
        text.map_or(Self::Placeholder, Self::Text)
    }

    /// What a reader sees without hovering.
    pub fn plain_text(&self) -> String {
        self.project(false)
    }

    /// Like [`Self::plain_text`], with tooltips expanded to their full text.
    pub fn full_text(&self) -> String {
        self.project(true)
    }

    fn project(&self, expand: bool) -> String {
        match self {
            Self::Placeholder => PLACEHOLDER.to_owned(),
            Self::Text(text) => text.clone(),
            Self::Tooltip { visible, full } => {
                if expand {
                    full.clone()
                } else {
                    visible.clone()
                }
            }
            Self::Link { label, href } => {
                if expand {
                    format!("{label} <{href}>")
                } else {
                    label.clone()
                }
            }
            Self::Pill(pill) => pill.label.clone(),
            Self::Summary(summary) => {
                if expand {
                    summary.full.clone()
                } else {
                    summary.visible()
                }
            }
            Self::Toggle(toggle) => (if toggle.on { "[x]" } else { "[ ]" }).to_owned(),
            Self::Actions(actions) => actions
                .options
                .iter()
                .map(|option| option.label.as_str())
                .collect::<Vec<_>>()
                .join(" | "),
            Self::FinalStatus => FINAL_STATUS_LABEL.to_owned(),
            Self::Stack(parts) => parts
                .iter()
                .map(|part| part.project(expand))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// A switch seeded from the row value.
#[derive(Debug, Clone)]
pub struct ToggleCell {
    pub row_id: RowKey,
    pub field: Option<Ustr>,
    pub on: bool,
    pub handler: Option<ToggleHandler>,
}

impl ToggleCell {
    /// Reports a flip to `value` to the field's handler.
    pub fn flip(&self, value: bool) -> Refetch {
        match &self.handler {
            Some(handler) => handler.call(&ToggleContext {
                row_id: &self.row_id,
                value,
            }),
            None => {
                log::warn!(
                    "Toggle {:?} on row {} has no handler; the change is local only",
                    self.field,
                    self.row_id
                );
                Refetch::Keep
            }
        }
    }
}

/// Outcome of pressing one action option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Done(Refetch),
    Navigate(String),
}

/// An action menu with at least one option.
#[derive(Debug, Clone)]
pub struct ActionCell {
    pub row_id: RowKey,
    pub options: Vec<ActionOption>,
}

impl ActionCell {
    /// A single option renders as one arrow button instead of a menu.
    pub fn is_single(&self) -> bool {
        self.options.len() == 1
    }

    pub fn trigger_icon(&self) -> &'static str {
        if self.is_single() {
            SINGLE_ACTION_ICON
        } else {
            MENU_ICON
        }
    }

    pub fn press(&self, option: &ActionOption) -> ActionOutcome {
        match &option.target {
            ActionTarget::Button {
                handler: Some(handler),
            } => ActionOutcome::Done(handler.call(&ActionContext {
                row_id: &self.row_id,
            })),
            ActionTarget::Button { handler: None } => {
                log::warn!(
                    "Action {:?} on row {} has no handler",
                    option.label,
                    self.row_id
                );
                ActionOutcome::Done(Refetch::Keep)
            }
            ActionTarget::Link { href } => ActionOutcome::Navigate(href.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::refetch::ActionHandler;

    #[test]
    fn test_plain_text_projection() {
        assert_eq!(CellView::Placeholder.plain_text(), "-");
        assert_eq!(CellView::FinalStatus.plain_text(), "Final Status");

        let tooltip = CellView::Tooltip {
            visible: "abc...".to_owned(),
            full: "abcdef".to_owned(),
        };
        assert_eq!(tooltip.plain_text(), "abc...");
        assert_eq!(tooltip.full_text(), "abcdef");

        let stack = CellView::Stack(vec![CellView::text("a"), CellView::Placeholder]);
        assert_eq!(stack.plain_text(), "a -");
    }

    #[test]
    fn test_press_button_and_link() {
        let pressed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&pressed);
        let cell = ActionCell {
            row_id: RowKey::Id("7".to_owned()),
            options: vec![
                ActionOption::button(
                    "Close",
                    ActionHandler::new(move |ctx| {
                        flag.store(ctx.row_id.as_id() == Some("7"), Ordering::SeqCst);
                        Refetch::Reload
                    }),
                ),
                ActionOption::link("Open", "/tickets/7"),
            ],
        };

        assert!(!cell.is_single());
        assert_eq!(cell.trigger_icon(), MENU_ICON);
        assert_eq!(
            cell.press(&cell.options[0]),
            ActionOutcome::Done(Refetch::Reload)
        );
        assert!(pressed.load(Ordering::SeqCst));
        assert_eq!(
            cell.press(&cell.options[1]),
            ActionOutcome::Navigate("/tickets/7".to_owned())
        );
    }

    #[test]
    fn test_toggle_without_handler_keeps_data() {
        let cell = ToggleCell {
            row_id: RowKey::Index(0),
            field: None,
            on: false,
            handler: None,
        };
        assert_eq!(cell.flip(true), Refetch::Keep);
    }
}
