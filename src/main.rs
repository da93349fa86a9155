use clap::Parser;
use color_eyre::Result;

use clippeek::error::PeekError;
use clippeek::{history, preview};

/// Preview the most recent clipboard history entry
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Print a short preview of the most recent cliphist clipboard entry"
)]
struct Args {}

fn main() -> Result<()> {
    // Writes to /tmp/clippeek-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/clippeek-debug.log")
            .expect("Failed to open /tmp/clippeek-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();
    }

    color_eyre::install()?;

    let _args = Args::parse();

    validate_cliphist_exists()?;

    let listing = match history::capture_listing() {
        Ok(listing) => listing,
        // cliphist's stderr has already passed through; keep its exit code
        Err(PeekError::ListFailed(status)) => std::process::exit(status.code().unwrap_or(1)),
        Err(e) => return Err(e.into()),
    };

    let entry = history::latest_entry(&listing);

    #[cfg(debug_assertions)]
    log::debug!("latest entry: {:?}", entry);

    println!("{}...", preview::derive(entry));

    Ok(())
}

/// Validate that the cliphist binary exists in PATH
fn validate_cliphist_exists() -> Result<(), PeekError> {
    which::which(history::HISTORY_COMMAND).map_err(|_| PeekError::CliphistNotFound)?;
    Ok(())
}
