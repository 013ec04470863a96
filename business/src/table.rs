//! The table shell: loading, empty and populated states.

use std::collections::HashSet;
use std::path::Path;

use ustr::Ustr;

use crate::cell::CellView;
use crate::dispatch::render_cell;
use crate::error::{Error, Result};
use crate::field::{ActionTarget, FieldDescriptor, FieldKind};
use crate::refetch::{ActionHandler, CustomRenderer, ToggleHandler};
use crate::row::{RowData, RowKey};

/// Skeleton rows shown while data has not arrived.
pub const SKELETON_ROWS: usize = 3;

/// Message of the empty state.
pub const EMPTY_MESSAGE: &str = "No data available";

/// A validated, ordered set of field descriptors plus the row id key.
#[derive(Debug, Clone)]
pub struct FieldTable {
    fields: Vec<FieldDescriptor>,
    unique_id: Ustr,
}

impl FieldTable {
    /// Validates the descriptors.
    ///
    /// Fails when `fields` is empty, when `unique_id` is empty, or when a
    /// field without a source key is not a custom field.
    pub fn new(fields: Vec<FieldDescriptor>, unique_id: impl AsRef<str>) -> Result<Self> {
        if fields.is_empty() {
            return Err(Error::NoFields);
        }

        let unique_id = unique_id.as_ref().trim();
        if unique_id.is_empty() {
            return Err(Error::EmptyUniqueId);
        }

        if let Some(field) = fields
            .iter()
            .find(|field| field.name.is_none() && !field.kind.tag().reads_whole_row())
        {
            return Err(Error::missing_source_key(field.title(), field.kind.tag()));
        }

        Ok(Self {
            fields,
            unique_id: Ustr::from(unique_id),
        })
    }

    /// Loads descriptors from a JSON array.
    pub fn from_json(json: &str, unique_id: impl AsRef<str>) -> Result<Self> {
        let fields: Vec<FieldDescriptor> = serde_json::from_str(json)?;
        Self::new(fields, unique_id)
    }

    pub fn from_path(path: impl AsRef<Path>, unique_id: impl AsRef<str>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Self::from_json(&json, unique_id)
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn unique_id(&self) -> &str {
        self.unique_id.as_str()
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(FieldDescriptor::title)
    }

    /// Attaches `handler` to every toggle field reading `name`.
    pub fn on_toggle(&mut self, name: &str, handler: ToggleHandler) -> &mut Self {
        for field in self.fields_named(name) {
            if let FieldKind::Toggle { on_toggle } = &mut field.kind {
                *on_toggle = Some(handler.clone());
            }
        }
        self
    }

    /// Attaches `handler` to the button actions labelled `label`.
    pub fn on_action(&mut self, label: &str, handler: ActionHandler) -> &mut Self {
        for field in &mut self.fields {
            if let FieldKind::Action { options } = &mut field.kind {
                for option in options.iter_mut().filter(|option| option.label == label) {
                    if let ActionTarget::Button { handler: slot } = &mut option.target {
                        *slot = Some(handler.clone());
                    }
                }
            }
        }
        self
    }

    /// Attaches a renderer to the custom field titled `header`.
    pub fn render_custom(&mut self, header: &str, renderer: CustomRenderer) -> &mut Self {
        for field in &mut self.fields {
            if field.title() == header
                && let FieldKind::Custom { render } = &mut field.kind
            {
                *render = Some(renderer.clone());
            }
        }
        self
    }

    fn fields_named<'a>(&'a mut self, name: &'a str) -> impl Iterator<Item = &'a mut FieldDescriptor> {
        self.fields
            .iter_mut()
            .filter(move |field| field.name.is_some_and(|field_name| field_name.as_str() == name))
    }

    pub fn row_key(&self, row: &dyn RowData, index: usize) -> RowKey {
        RowKey::resolve(row, &self.unique_id, index)
    }

    /// Renders one row.
    pub fn row_view(&self, row: &dyn RowData, index: usize) -> RowView {
        let key = self.row_key(row, index);
        let cells = self
            .fields
            .iter()
            .map(|field| render_cell(field, row, &key))
            .collect();
        RowView { index, key, cells }
    }

    /// Renders the whole table for the current data.
    ///
    /// `None` means the data has not arrived yet.
    pub fn view<R: RowData>(&self, data: Option<&[R]>) -> TableView {
        let Some(rows) = data else {
            return TableView::Loading {
                rows: SKELETON_ROWS,
                columns: self.fields.len(),
            };
        };

        if rows.is_empty() {
            return TableView::Empty;
        }

        let views: Vec<RowView> = rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.row_view(row, index))
            .collect();

        let mut seen = HashSet::with_capacity(views.len());
        for view in &views {
            if !seen.insert(&view.key) {
                log::warn!(
                    "Duplicate row key {} for unique id {:?}; rows may be confused",
                    view.key,
                    self.unique_id.as_str()
                );
            }
        }

        TableView::Rows(views)
    }

    /// Source keys of non-custom fields that `row` lacks.
    pub fn missing_keys(&self, row: &dyn RowData) -> Vec<Ustr> {
        self.fields
            .iter()
            .filter(|field| !field.kind.tag().reads_whole_row())
            .filter_map(|field| field.name)
            .filter(|name| row.get(name.as_str()).is_none())
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum TableView {
    Loading { rows: usize, columns: usize },
    Empty,
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone)]
pub struct RowView {
    /// Position in the supplied data.
    pub index: usize,
    pub key: RowKey,
    pub cells: Vec<CellView>,
}
