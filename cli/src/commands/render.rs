//! Render rows as a terminal table.

use anyhow::Result;
use tracing::instrument;

use super::source::{load_table, rows_or_stdin};
use crate::cli::SourceArgs;
use crate::config::Config;
use crate::output::Output;
use crate::render::{RenderOptions, TableStyle, render_table};

#[instrument(skip_all, name = "render", fields(fields = %source.fields.display()))]
pub fn run_render(
    source: &SourceArgs,
    style: Option<TableStyle>,
    wide: bool,
    config: &Config,
) -> Result<()> {
    let out = Output::new();

    let table = load_table(source, config)?;
    let rows = rows_or_stdin(source.rows.as_deref())?;
    let options = RenderOptions {
        style: config.style(style),
        wide: config.wide(wide),
    };

    out.print(render_table(&table, Some(rows.as_slice()), options));
    // Markdown output is usually piped into documents.
    if options.style != TableStyle::Markdown && !rows.is_empty() {
        out.total("Total", rows.len());
    }
    Ok(())
}
