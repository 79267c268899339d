use std::{env, str::FromStr};

use crate::settings::types::{ApplicationSettings, Environment, RecurrenceSettings, Settings};

pub mod types;

/// Loads `env_file_name` if present, then builds settings for `APP_ENVIRONMENT`.
/// A missing env file is fine; values can come from the process environment alone.
pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    if let Err(e) = dotenvy::from_filename(env_file_name) {
        if !e.not_found() {
            return Err(format!("Failed to fetch env file: {}", e));
        }
    }

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_development_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

pub fn get_test_settings() -> Settings {
    get_settings(".env.testing").expect("Error on getting settings.")
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings { debug: true, ..b })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            max_log_files: 30,
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            max_log_files: parse_env_value(
                "MAX_LOG_FILES",
                env::var("MAX_LOG_FILES").ok(),
                s.application.max_log_files,
            )?,
            log_directory: env::var("LOG_DIRECTORY").unwrap_or(s.application.log_directory),
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        recurrence: RecurrenceSettings {
            horizon_years: parse_env_value(
                "RECURRENCE_HORIZON_YEARS",
                env::var("RECURRENCE_HORIZON_YEARS").ok(),
                s.recurrence.horizon_years,
            )?,
            max_iterations: parse_env_value(
                "RECURRENCE_MAX_ITERATIONS",
                env::var("RECURRENCE_MAX_ITERATIONS").ok(),
                s.recurrence.max_iterations,
            )?,
        },
    })
}

fn parse_env_value<T>(key: &str, value: Option<String>, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| format!("Failed to parse {}: {}", key, e)),
        None => Ok(default),
    }
}
