use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DaysOfWeek;

/// Unit of repetition. Anything that is not one of the known names reads back
/// as `Unknown`, which never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
    Unknown,
}

impl RecurrenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::Daily => "daily",
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Unknown => "unknown",
        }
    }
}

impl From<&str> for RecurrenceType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "daily" => RecurrenceType::Daily,
            "weekly" => RecurrenceType::Weekly,
            "monthly" => RecurrenceType::Monthly,
            _ => RecurrenceType::Unknown,
        }
    }
}

impl From<String> for RecurrenceType {
    fn from(value: String) -> Self {
        RecurrenceType::from(value.as_str())
    }
}

impl From<RecurrenceType> for String {
    fn from(value: RecurrenceType) -> Self {
        value.as_str().to_string()
    }
}

/// Repetition policy of a series. The series start date is not part of the
/// rule; callers pass it alongside.
///
/// `end_date` and `max_occurrences` are independent caps and both are
/// inclusive. Whichever is reached first ends the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub r#type: RecurrenceType,
    pub interval: u32,
    pub days_of_week: DaysOfWeek,
    pub end_date: Option<NaiveDate>,
    pub max_occurrences: Option<u32>,
}

impl RecurrenceRule {
    pub fn new(r#type: RecurrenceType, interval: u32) -> Self {
        Self {
            r#type,
            interval,
            days_of_week: DaysOfWeek::EMPTY,
            end_date: None,
            max_occurrences: None,
        }
    }

    pub fn daily(interval: u32) -> Self {
        Self::new(RecurrenceType::Daily, interval)
    }

    pub fn weekly(interval: u32, days_of_week: DaysOfWeek) -> Self {
        Self {
            days_of_week,
            ..Self::new(RecurrenceType::Weekly, interval)
        }
    }

    pub fn monthly(interval: u32) -> Self {
        Self::new(RecurrenceType::Monthly, interval)
    }

    pub fn end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn max_occurrences(mut self, max_occurrences: Option<u32>) -> Self {
        self.max_occurrences = max_occurrences;
        self
    }

    /// Interval used for arithmetic. Stored rules with a zero interval behave as 1.
    pub(crate) fn stride(&self) -> u32 {
        self.interval.max(1)
    }

    pub(crate) fn is_past_end(&self, date: NaiveDate) -> bool {
        self.end_date.is_some_and(|end_date| date > end_date)
    }

    pub(crate) fn is_cap_reached(&self, count: usize) -> bool {
        self.max_occurrences
            .is_some_and(|max_occurrences| count >= max_occurrences as usize)
    }
}
