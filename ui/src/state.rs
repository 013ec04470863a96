//! State of the board page.

use flume::{Receiver, Sender};
use gigboard_business::{BoardConfig, FieldTable, RowRecord, RowsSource};

use crate::api::{LoadResult, RowSource, load_rows};
use crate::demo::{TicketStore, attach_store_handlers, ticket_fields};
use crate::widgets::FieldTableState;

pub struct BoardState {
    pub(crate) table: FieldTable,
    pub(crate) source: RowSource,
    /// `None` until the first load finishes.
    pub(crate) rows: Option<Vec<RowRecord>>,
    pub(crate) table_state: FieldTableState,
    /// Whether a load is in flight.
    pub(crate) is_fetching: bool,
    /// Reload requested while a load was in flight.
    pub(crate) reload_queued: bool,
    /// Error of the last load.
    pub(crate) error: Option<String>,
    started: bool,
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl BoardState {
    pub fn new(table: FieldTable, source: RowSource) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            table,
            source,
            rows: None,
            table_state: FieldTableState::new(),
            is_fetching: false,
            reload_queued: false,
            error: None,
            started: false,
            sender,
            receiver,
        }
    }

    /// Builds the board described by `config`.
    ///
    /// Without a fields file the sample ticket fields are used. The sample
    /// store's handlers are attached whenever rows come from it.
    pub fn from_config(config: &BoardConfig) -> anyhow::Result<Self> {
        let mut table = match config.fields_path() {
            Some(path) => {
                log::info!("Loading fields from {}", path.display());
                FieldTable::from_path(path, config.unique_id())?
            }
            None => FieldTable::new(ticket_fields(), config.unique_id())?,
        };

        let source = match config.rows() {
            RowsSource::Url(url) => RowSource::Url(url.clone()),
            RowsSource::Path(path) => RowSource::File(path.clone()),
            RowsSource::Demo => {
                let store = TicketStore::demo();
                attach_store_handlers(&mut table, &store);
                RowSource::Memory(store)
            }
        };

        Ok(Self::new(table, source))
    }

    pub fn table(&self) -> &FieldTable {
        &self.table
    }

    pub fn rows(&self) -> Option<&[RowRecord]> {
        self.rows.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Whether nothing has been requested yet.
    pub(crate) fn needs_initial_load(&self) -> bool {
        !self.started
    }

    /// Starts a load, or queues one behind the load in flight.
    pub fn refresh(&mut self, ctx: &egui::Context) {
        self.started = true;
        if self.is_fetching {
            self.reload_queued = true;
            return;
        }
        self.is_fetching = true;
        load_rows(&self.source, ctx.clone(), self.sender.clone());
    }

    /// Applies finished loads. Returns whether another load should start.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.receiver.try_recv() {
            self.apply(outcome);
            changed = true;
        }
        changed && std::mem::take(&mut self.reload_queued)
    }

    pub(crate) fn apply(&mut self, outcome: LoadResult) {
        self.is_fetching = false;
        match outcome {
            Ok(rows) => {
                log::info!("Loaded {} rows", rows.len());
                self.rows = Some(rows);
                self.table_state.reset();
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err);
                // Stop the skeleton; keep rows from an earlier load.
                if self.rows.is_none() {
                    self.rows = Some(Vec::new());
                }
            }
        }
    }
}
