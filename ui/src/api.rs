//! Row loading for the board.
//!
//! Every source reports through the same channel so the board polls one
//! receiver regardless of where rows come from.

use std::path::PathBuf;

use flume::Sender;
use gigboard_business::RowRecord;

use crate::demo::TicketStore;

/// Outcome of one load. Errors are already formatted for display.
pub type LoadResult = Result<Vec<RowRecord>, String>;

#[derive(Debug, Clone)]
pub enum RowSource {
    /// JSON array served over HTTP.
    Url(String),
    /// JSON array on disk.
    File(PathBuf),
    /// In-process sample store.
    Memory(TicketStore),
}

/// Starts loading rows from `source`; the result arrives on `sender`.
pub fn load_rows(source: &RowSource, ctx: egui::Context, sender: Sender<LoadResult>) {
    match source {
        RowSource::Url(url) => fetch_rows(url, ctx, sender),
        RowSource::File(path) => read_rows(path.clone(), ctx, sender),
        RowSource::Memory(store) => deliver(&sender, &ctx, Ok(store.snapshot())),
    }
}

/// Fetch rows from `url`.
pub fn fetch_rows(url: &str, ctx: egui::Context, sender: Sender<LoadResult>) {
    log::info!("Fetching rows from {url}");
    let request = ehttp::Request::get(url);

    ehttp::fetch(request, move |result| {
        let outcome = match result {
            Ok(response) if response.ok => {
                RowRecord::parse_rows(&response.bytes).map_err(|err| err.to_string())
            }
            Ok(response) => Err(format!("API returned status: {}", response.status)),
            Err(err) => Err(err),
        };
        deliver(&sender, &ctx, outcome);
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn read_rows(path: PathBuf, ctx: egui::Context, sender: Sender<LoadResult>) {
    log::info!("Reading rows from {}", path.display());
    std::thread::spawn(move || {
        let outcome = std::fs::read(&path)
            .map_err(|err| format!("Failed to read {}: {err}", path.display()))
            .and_then(|bytes| RowRecord::parse_rows(&bytes).map_err(|err| err.to_string()));
        deliver(&sender, &ctx, outcome);
    });
}

#[cfg(target_arch = "wasm32")]
fn read_rows(path: PathBuf, ctx: egui::Context, sender: Sender<LoadResult>) {
    deliver(
        &sender,
        &ctx,
        Err(format!("Cannot read {} in the browser", path.display())),
    );
}

fn deliver(sender: &Sender<LoadResult>, ctx: &egui::Context, outcome: LoadResult) {
    if let Err(err) = &outcome {
        log::warn!("Loading rows failed: {err}");
    }
    if sender.send(outcome).is_err() {
        log::debug!("Board closed before rows arrived");
    }
    ctx.request_repaint();
}
