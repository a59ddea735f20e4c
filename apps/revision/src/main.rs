use revision::error::RevisionError;
use revision::logger::initialize as LoggerInitialize;
use revision::paths::{detect_config_dir, resolve_log_dir, resolve_output_path};
use revision::session::Session;

use revision_core::config::RevisionConfig;
use revision_core::loader::load_page;
use revision_core::page::PageState;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use log::{error, info};
use tokio::io::{BufReader, stdin};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), RevisionError> {
    // Optional .env with REVISION_* overrides
    dotenvy::dotenv().ok();

    let config_dir = detect_config_dir()?;
    let config = RevisionConfig::load(&config_dir.path)
        .map_err(|e| RevisionError::core("Failed to load config", e))?;

    let log_dir = resolve_log_dir(config.logging.directory.as_deref(), &config_dir.path);
    create_dir_all(&log_dir).map_err(|e| RevisionError::Revision {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    LoggerInitialize(&log_dir)?;

    info!("Revision starting");
    info!(
        "Config directory: {} ({})",
        config_dir.path.display(),
        config_dir.source
    );
    info!("Log directory: {}", log_dir.display());

    let source = config
        .document_source(&config_dir.path)
        .map_err(|e| RevisionError::core("Invalid document source", e))?;

    let page = load_page(&source, &config.navigation)
        .await
        .map_err(|e| RevisionError::core("Failed to build page", e))?;

    let session = Session::new(
        PageState::spawn(page),
        resolve_output_path(&config.output.path, &config_dir.path),
        config.render_options(),
    );

    session.write_page().await?;
    info!("Page written to {}", session.output().display());

    let summary = session.run(BufReader::new(stdin())).await?;
    info!(
        "Session ended: {} clicks handled, {} rejected",
        summary.handled, summary.rejected
    );

    Ok(())
}
