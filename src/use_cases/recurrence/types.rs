use chrono::NaiveDate;
use recurrence::{RecurrenceRule, RecurrenceType};
use serde::{Deserialize, Serialize};

/// Recurrence fields as they appear nested in block payloads. Numbers are kept
/// signed so that out-of-range values reach validation instead of failing
/// deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRuleVisible {
    pub r#type: RecurrenceType,
    pub interval: i64,
    pub days_of_week: Option<String>,
    pub end_date: Option<NaiveDate>,
    pub max_occurrences: Option<i64>,
}

impl From<RecurrenceRule> for RecurrenceRuleVisible {
    fn from(rule: RecurrenceRule) -> Self {
        RecurrenceRuleVisible {
            r#type: rule.r#type,
            interval: rule.interval.into(),
            days_of_week: match rule.days_of_week.is_empty() {
                true => None,
                false => Some(rule.days_of_week.to_string()),
            },
            end_date: rule.end_date,
            max_occurrences: rule.max_occurrences.map(i64::from),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceWindowQuery {
    pub rule: RecurrenceRuleVisible,
    pub start_date: NaiveDate,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NextOccurrencesQuery {
    pub rule: RecurrenceRuleVisible,
    pub start_date: NaiveDate,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceCheckQuery {
    pub rule: RecurrenceRuleVisible,
    pub start_date: NaiveDate,
    pub date: NaiveDate,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct OccurrenceList {
    pub occurrences: Vec<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceCheck {
    pub date: NaiveDate,
    pub is_occurrence: bool,
}
