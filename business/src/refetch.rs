//! Mutation handlers and the refetch obligation.
//!
//! Row-level interactions (toggles, action buttons) run caller-supplied
//! handlers. A handler owns its persistence call and any rollback, and it
//! reports whether the table owner must reload its data by returning a
//! [`Refetch`]. The table never reloads on its own.

use std::fmt;
use std::sync::Arc;

use crate::cell::CellView;
use crate::row::{RowData, RowKey};

/// What the table owner must do after a row-level mutation.
#[must_use = "the table owner must reload when a handler asks for it"]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Refetch {
    /// The mutation changed server state; fetch fresh rows.
    Reload,
    /// Nothing to reload (failed, cancelled, or purely local).
    #[default]
    Keep,
}

impl Refetch {
    /// Combines two outcomes; any `Reload` wins.
    pub fn merge(self, other: Self) -> Self {
        if self.is_reload() || other.is_reload() {
            Self::Reload
        } else {
            Self::Keep
        }
    }

    pub fn is_reload(self) -> bool {
        matches!(self, Self::Reload)
    }
}

/// Passed to an action button handler.
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub row_id: &'a RowKey,
}

/// Passed to a toggle handler after the switch flipped.
#[derive(Debug, Clone, Copy)]
pub struct ToggleContext<'a> {
    pub row_id: &'a RowKey,
    pub value: bool,
}

/// Value handed to a custom renderer.
#[derive(Clone, Copy)]
pub enum CustomValue<'a> {
    /// The field has no source key: the whole row.
    Row(&'a dyn RowData),
    /// The field's sub-value, `None` when the key is missing.
    Field(Option<&'a serde_json::Value>),
}

/// Passed to a custom renderer.
#[derive(Clone, Copy)]
pub struct CustomCell<'a> {
    pub row_id: &'a RowKey,
    pub value: CustomValue<'a>,
}

type ActionFn = dyn Fn(&ActionContext<'_>) -> Refetch + Send + Sync;
type ToggleFn = dyn Fn(&ToggleContext<'_>) -> Refetch + Send + Sync;
type CustomFn = dyn Fn(&CustomCell<'_>) -> CellView + Send + Sync;

#[derive(Clone)]
pub struct ActionHandler(Arc<ActionFn>);

impl ActionHandler {
    pub fn new(handler: impl Fn(&ActionContext<'_>) -> Refetch + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self, ctx: &ActionContext<'_>) -> Refetch {
        (self.0)(ctx)
    }
}

#[derive(Clone)]
pub struct ToggleHandler(Arc<ToggleFn>);

impl ToggleHandler {
    pub fn new(handler: impl Fn(&ToggleContext<'_>) -> Refetch + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self, ctx: &ToggleContext<'_>) -> Refetch {
        (self.0)(ctx)
    }
}

#[derive(Clone)]
pub struct CustomRenderer(Arc<CustomFn>);

impl CustomRenderer {
    pub fn new(render: impl Fn(&CustomCell<'_>) -> CellView + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    pub fn render(&self, cell: &CustomCell<'_>) -> CellView {
        (self.0)(cell)
    }
}

macro_rules! opaque_debug {
    ($($ty:ident),*) => {
        $(impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($ty), "(..)"))
            }
        })*
    };
}

opaque_debug!(ActionHandler, ToggleHandler, CustomRenderer);
