use recurrence::{RecurrenceLimits, DEFAULT_HORIZON_YEARS, DEFAULT_MAX_ITERATIONS};
use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub debug: bool,
    pub recurrence: RecurrenceSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                max_log_files: 14,
                log_directory: "./logs".to_string(),
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ApplicationSettings {
    pub max_log_files: usize,
    pub log_directory: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct RecurrenceSettings {
    pub horizon_years: u32,
    pub max_iterations: usize,
}

impl Default for RecurrenceSettings {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl From<&RecurrenceSettings> for RecurrenceLimits {
    fn from(value: &RecurrenceSettings) -> Self {
        RecurrenceLimits {
            horizon_years: value.horizon_years,
            max_iterations: value.max_iterations,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
