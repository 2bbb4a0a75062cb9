use std::fs::File;
use std::sync::Arc;

use simplelog::{Config, LevelFilter, WriteLogger};
use termpage::Terminal;
use tokio_util::sync::CancellationToken;

use folio_tui::app::App;
use folio_tui::error::AppError;
use folio_tui::form::SimulatedCourier;
use folio_tui::theme::store::{PreferenceStore, SqliteBackend};
use folio_tui::theme::{appearance, ThemeService};
use folio_tui::{paths, runtime};

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(err) = run().await {
        log::error!("fatal: {err}");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

/// Log to a file in the data directory; stdout belongs to the page.
/// Logging is best-effort: a failure here must not stop the app.
fn init_logging() {
    paths::rotate_logs();

    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Failed to initialize logger: {err}");
            }
        }
        Err(err) => eprintln!("Failed to create log file: {err}"),
    }
}

async fn run() -> Result<(), AppError> {
    let db_path = paths::preferences_db().ok_or(AppError::MissingHome)?;
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let store = PreferenceStore::new(SqliteBackend::new(&db_path).await?);

    let system = appearance::detect();
    let theme = match ThemeService::load(&store, system).await {
        Ok(theme) => theme,
        Err(err) => {
            log::warn!("stored theme unavailable: {err}");
            ThemeService::new(system)
        }
    };

    let cancel = CancellationToken::new();
    let (events_tx, events_rx) = tokio::sync::mpsc::unbounded_channel();
    let watcher = appearance::spawn_watcher(events_tx.clone(), cancel.child_token());

    let mut terminal = Terminal::new()?;
    let (width, height) = terminal.size();
    let app = App::new(
        theme,
        store,
        Arc::new(SimulatedCourier),
        events_tx,
        cancel.clone(),
        width,
        height,
    );

    let result = runtime::run(app, events_rx, cancel.clone(), &mut terminal).await;

    cancel.cancel();
    let _ = watcher.await;
    result
}
