use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::layer::SubscriberExt;

/// Log lines go to stderr and to daily files under `log_directory`, keeping
/// `max_log_files` of them. Outside debug mode stderr output is JSON.
pub fn get_subscriber(
    debug: bool,
    max_log_files: usize,
    log_directory: &str,
) -> Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard), String> {
    let env_filter = if debug {
        "trace".to_string()
    } else {
        "info".to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(env_filter));

    let (pretty_log, json_log) = if debug {
        let pretty_log = tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr);
        (Some(pretty_log), None)
    } else {
        let json_log = tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr);
        (None, Some(json_log))
    };

    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_suffix("log")
        .max_log_files(max_log_files)
        .build(log_directory)
        .map_err(|e| format!("Failed to create log file appender: {}", e))?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(pretty_log)
        .with(json_log)
        .with(file_log);

    Ok((subscriber, _guard))
}

pub fn init_subscriber(
    debug: bool,
    max_log_files: usize,
    log_directory: &str,
) -> Result<WorkerGuard, String> {
    let (subscriber, _guard) = get_subscriber(debug, max_log_files, log_directory)?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set subscriber: {}", e))?;
    Ok(_guard)
}
