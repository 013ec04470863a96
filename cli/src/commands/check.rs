//! Validate descriptors and rows.

use std::collections::HashMap;

use anyhow::{Result, bail};
use gigboard_business::{FieldTable, RowData, RowKey, RowRecord};
use tracing::instrument;

use super::source::{load_rows, load_table};
use crate::cli::SourceArgs;
use crate::config::Config;
use crate::output::Output;

/// What is wrong with one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowProblem {
    pub index: usize,
    /// The row lacks the unique id and falls back to its position.
    pub missing_id: bool,
    /// Earlier row with the same unique id.
    pub duplicate_of: Option<usize>,
    /// Source keys of non-custom fields the row lacks.
    pub missing_keys: Vec<String>,
}

impl RowProblem {
    pub fn describe(&self, unique_id: &str) -> String {
        let mut parts = Vec::new();
        if self.missing_id {
            parts.push(format!("no {unique_id:?}, keyed by position"));
        }
        if let Some(first) = self.duplicate_of {
            parts.push(format!("same {unique_id:?} as row {first}"));
        }
        if !self.missing_keys.is_empty() {
            parts.push(format!("missing {}", self.missing_keys.join(", ")));
        }
        format!("row {}: {}", self.index, parts.join("; "))
    }
}

pub fn check_rows<R: RowData>(table: &FieldTable, rows: &[R]) -> Vec<RowProblem> {
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            let (missing_id, duplicate_of) = match table.row_key(row, index) {
                RowKey::Id(id) => (false, match first_seen.get(&id) {
                    Some(first) => Some(*first),
                    None => {
                        first_seen.insert(id, index);
                        None
                    }
                }),
                RowKey::Index(_) => (true, None),
            };
            let missing_keys: Vec<String> = table
                .missing_keys(row)
                .into_iter()
                .map(|key| key.to_string())
                .collect();

            (missing_id || duplicate_of.is_some() || !missing_keys.is_empty()).then_some(
                RowProblem {
                    index,
                    missing_id,
                    duplicate_of,
                    missing_keys,
                },
            )
        })
        .collect()
}

#[instrument(skip_all, name = "check", fields(fields = %source.fields.display()))]
pub fn run_check(source: &SourceArgs, config: &Config) -> Result<()> {
    let out = Output::new();

    let table = load_table(source, config)?;
    out.success(format!(
        "{} field(s) OK, rows keyed by {:?}",
        table.fields().len(),
        table.unique_id()
    ));

    let Some(path) = source.rows.as_deref() else {
        return Ok(());
    };
    let rows: Vec<RowRecord> = load_rows(path)?;
    let problems = check_rows(&table, &rows);

    for problem in &problems {
        out.warning(problem.describe(table.unique_id()));
    }
    if !problems.is_empty() {
        bail!("{} of {} row(s) have problems", problems.len(), rows.len());
    }
    out.success(format!("{} row(s) OK", rows.len()));
    Ok(())
}
