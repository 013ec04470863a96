//! Board configuration read from the environment.

use std::env::vars;
use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_UNIQUE_ID: &str = "_id";

/// Where the board's rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowsSource {
    Url(String),
    Path(PathBuf),
    /// Built-in sample rows.
    Demo,
}

// The final, validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    rows: RowsSource,
    fields_path: Option<PathBuf>,
    unique_id: String,
}

// Intermediate struct mirroring the environment variables.
#[derive(Deserialize)]
struct RawConfig {
    gigboard_rows_url: Option<String>,
    gigboard_rows_path: Option<PathBuf>,
    gigboard_fields_path: Option<PathBuf>,
    gigboard_unique_id: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rows: RowsSource::Demo,
            fields_path: None,
            unique_id: DEFAULT_UNIQUE_ID.to_owned(),
        }
    }
}

impl BoardConfig {
    pub fn new(rows: RowsSource) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> &RowsSource {
        &self.rows
    }

    pub fn fields_path(&self) -> Option<&PathBuf> {
        self.fields_path.as_ref()
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Reads `GIGBOARD_*` environment variables.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading board configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            gigboard_rows_url,
            gigboard_rows_path,
            gigboard_fields_path,
            gigboard_unique_id,
        } = raw;

        let rows = match (gigboard_rows_url, gigboard_rows_path) {
            (Some(_), Some(_)) => {
                anyhow::bail!("Set only one of GIGBOARD_ROWS_URL and GIGBOARD_ROWS_PATH")
            }
            (Some(url), None) => {
                log::info!("Loading rows from {url}");
                RowsSource::Url(url)
            }
            (None, Some(path)) => {
                log::info!("Loading rows from {}", path.display());
                RowsSource::Path(path)
            }
            (None, None) => {
                log::info!("No row source configured, using demo rows");
                RowsSource::Demo
            }
        };

        let unique_id = match gigboard_unique_id {
            Some(key) if !key.trim().is_empty() => key.trim().to_owned(),
            Some(_) => anyhow::bail!("GIGBOARD_UNIQUE_ID must not be empty"),
            None => DEFAULT_UNIQUE_ID.to_owned(),
        };

        Ok(Self {
            rows,
            fields_path: gigboard_fields_path,
            unique_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_defaults_to_demo_rows() {
        let raw: RawConfig =
            from_iter(Vec::<(&str, &str)>::new()).expect("RawConfig should deserialize");
        let config = BoardConfig::from_raw(raw).expect("empty config should build");
        assert_eq!(config, BoardConfig::default());
        assert_eq!(config.unique_id(), "_id");
    }

    #[test]
    fn test_rows_url_and_unique_id() {
        let raw: RawConfig = from_iter(vec![
            ("GIGBOARD_ROWS_URL", "http://localhost:8080/api/tickets"),
            ("GIGBOARD_UNIQUE_ID", "ticketId"),
        ])
        .expect("RawConfig should deserialize");

        let config = BoardConfig::from_raw(raw).expect("url config should build");
        assert_eq!(
            config.rows(),
            &RowsSource::Url("http://localhost:8080/api/tickets".to_owned())
        );
        assert_eq!(config.unique_id(), "ticketId");
    }

    #[test]
    fn test_url_and_path_conflict() {
        let raw: RawConfig = from_iter(vec![
            ("GIGBOARD_ROWS_URL", "http://localhost/rows"),
            ("GIGBOARD_ROWS_PATH", "rows.json"),
        ])
        .expect("RawConfig should deserialize");

        let err = BoardConfig::from_raw(raw).unwrap_err().to_string();
        assert!(err.contains("GIGBOARD_ROWS_URL"));
    }

    #[test]
    fn test_blank_unique_id_is_rejected() {
        let raw: RawConfig = from_iter(vec![("GIGBOARD_UNIQUE_ID", "  ")])
            .expect("RawConfig should deserialize");
        assert!(BoardConfig::from_raw(raw).is_err());
    }
}
