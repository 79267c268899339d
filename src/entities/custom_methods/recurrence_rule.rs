use recurrence::{DaysOfWeek, RecurrenceRule, RecurrenceType};

use crate::recurrence_rule;

/// Reads stored rows into engine rules. Rows may predate validation, so nothing
/// here fails: unknown types become `Unknown`, bad day tokens are dropped and
/// out-of-range numbers are clamped.
pub trait RecurrenceRuleTrait {
    fn get_recurrence_type(&self) -> RecurrenceType;
    fn get_days_of_week(&self) -> DaysOfWeek;
    fn to_recurrence_rule(&self) -> RecurrenceRule;
}

impl RecurrenceRuleTrait for recurrence_rule::Model {
    fn get_recurrence_type(&self) -> RecurrenceType {
        RecurrenceType::from(self.recurrence_type.as_str())
    }

    fn get_days_of_week(&self) -> DaysOfWeek {
        self.days_of_week
            .as_deref()
            .map(DaysOfWeek::parse_lenient)
            .unwrap_or_default()
    }

    fn to_recurrence_rule(&self) -> RecurrenceRule {
        RecurrenceRule {
            r#type: self.get_recurrence_type(),
            interval: u32::try_from(self.interval).unwrap_or(0).max(1),
            days_of_week: self.get_days_of_week(),
            end_date: self.end_date,
            max_occurrences: self
                .max_occurrences
                .map(|max_occurrences| u32::try_from(max_occurrences).unwrap_or(0)),
        }
    }
}
