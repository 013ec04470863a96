//! Loading descriptors and rows named on the command line.

use std::io::{IsTerminal as _, Read as _};
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use gigboard_business::{FieldTable, RowRecord};
use tracing::debug;

use crate::cli::SourceArgs;
use crate::config::Config;

const STDIN_PATH: &str = "-";

pub fn load_table(source: &SourceArgs, config: &Config) -> Result<FieldTable> {
    let unique_id = config.unique_id(source.unique_id.clone());
    debug!(fields = %source.fields.display(), unique_id = %unique_id, "loading field descriptors");
    FieldTable::from_path(&source.fields, &unique_id)
        .with_context(|| format!("Invalid field descriptors in {}", source.fields.display()))
}

/// Reads rows from `path`, or stdin for `-`.
pub fn load_rows(path: &Path) -> Result<Vec<RowRecord>> {
    let bytes = if path == Path::new(STDIN_PATH) {
        let mut buffer = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read rows from stdin")?;
        buffer
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read rows: {}", path.display()))?
    };

    let rows = RowRecord::parse_rows(&bytes)
        .with_context(|| format!("Invalid rows in {}", path.display()))?;
    debug!(count = rows.len(), "loaded rows");
    Ok(rows)
}

/// Rows for `render`: the `--rows` file, else piped stdin.
pub fn rows_or_stdin(path: Option<&Path>) -> Result<Vec<RowRecord>> {
    match path {
        Some(path) => load_rows(path),
        None if !std::io::stdin().is_terminal() => load_rows(Path::new(STDIN_PATH)),
        None => bail!("No rows given; pass --rows FILE or pipe a JSON array"),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).expect("Should write fixture");
        path
    }

    #[test]
    fn test_load_table_uses_config_unique_id() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let fields = write(
            dir.path(),
            "fields.json",
            r#"[{ "name": "subject", "header": "Subject", "type": "text" }]"#,
        );
        let source = SourceArgs {
            fields,
            rows: None,
            unique_id: None,
        };
        let config = Config {
            unique_id: Some("ticketId".to_owned()),
            ..Config::default()
        };

        let table = load_table(&source, &config).expect("Should load table");
        assert_eq!(table.unique_id(), "ticketId");
    }

    #[test]
    fn test_invalid_descriptors_name_the_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let fields = write(dir.path(), "fields.json", "[]");
        let source = SourceArgs {
            fields,
            rows: None,
            unique_id: None,
        };

        let err = load_table(&source, &Config::default()).unwrap_err();
        assert!(format!("{err:#}").contains("fields.json"));
    }

    #[test]
    fn test_load_rows_rejects_non_array() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let rows = write(dir.path(), "rows.json", r#"{ "rows": [] }"#);
        assert!(load_rows(&rows).is_err());

        let rows = write(dir.path(), "ok.json", r#"[{ "_id": "1" }]"#);
        assert_eq!(load_rows(&rows).expect("Should load rows").len(), 1);
    }
}
