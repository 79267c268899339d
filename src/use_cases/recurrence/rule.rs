use recurrence::{DaysOfWeek, RecurrenceRule, RecurrenceType};

use crate::{recurrence::types::RecurrenceRuleVisible, UseCaseError};

/// Validates a rule coming in with a request. Stored rules skip this and go
/// through `RecurrenceRuleTrait` instead, which never rejects.
pub(crate) fn parse_rule(params: &RecurrenceRuleVisible) -> Result<RecurrenceRule, UseCaseError> {
    if params.r#type == RecurrenceType::Unknown {
        return Err(UseCaseError::BadRequest("Unknown recurrence type".to_string()));
    }
    let interval = u32::try_from(params.interval)
        .ok()
        .filter(|interval| *interval >= 1)
        .ok_or_else(|| UseCaseError::BadRequest("interval must be at least 1".to_string()))?;
    let max_occurrences = params
        .max_occurrences
        .map(|max_occurrences| {
            u32::try_from(max_occurrences)
                .ok()
                .filter(|max_occurrences| *max_occurrences >= 1)
                .ok_or_else(|| {
                    UseCaseError::BadRequest("maxOccurrences must be at least 1".to_string())
                })
        })
        .transpose()?;
    let days_of_week = match params.days_of_week.as_deref() {
        Some(days_of_week) => parse_days_of_week(days_of_week)?,
        None => DaysOfWeek::EMPTY,
    };

    Ok(RecurrenceRule {
        r#type: params.r#type,
        interval,
        days_of_week,
        end_date: params.end_date,
        max_occurrences,
    })
}

fn parse_days_of_week(s: &str) -> Result<DaysOfWeek, UseCaseError> {
    s.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u8>()
                .ok()
                .and_then(DaysOfWeek::weekday_from_index)
                .ok_or_else(|| {
                    UseCaseError::BadRequest(format!("{} is not a day of week (0-6)", token))
                })
        })
        .collect()
}
