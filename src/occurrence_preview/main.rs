use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use chrono::Local;
use common::{settings::get_settings, telemetry};
use recurrence::{RecurrenceEngine, RecurrenceLimits};

mod preview;

/// Reads one preview request as JSON from stdin and writes the occurrences
/// (or an error body) as JSON to stdout.
fn main() -> io::Result<ExitCode> {
    let settings = get_settings(".env").map_err(io::Error::other)?;
    let _guard = telemetry::init_subscriber(
        settings.debug,
        settings.application.max_log_files,
        &settings.application.log_directory,
    )
    .map_err(io::Error::other)?;

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let engine = RecurrenceEngine::new(RecurrenceLimits::from(&settings.recurrence));
    let today = Local::now().date_naive();
    tracing::event!(tracing::Level::INFO, ?engine, %today, "Previewing occurrences.");

    let mut stdout = io::stdout().lock();
    let exit_code = match preview::respond(&input, &engine, today) {
        Ok(response) => {
            serde_json::to_writer(&mut stdout, &response)?;
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::event!(tracing::Level::WARN, error = %error.error, "Preview request failed.");
            serde_json::to_writer(&mut stdout, &error)?;
            ExitCode::FAILURE
        }
    };
    writeln!(stdout)?;
    Ok(exit_code)
}
