use chrono::NaiveDate;
use entities::{custom_methods::recurrence_rule::RecurrenceRuleTrait, recurrence_rule};
use recurrence::RecurrenceEngine;
use tracing::{event, instrument, Level};

use crate::recurrence::types::OccurrenceList;

/// Expands a stored rule for materializing schedule entries. Stored rules are
/// never rejected, whatever shape they were saved in.
#[instrument(skip_all, fields(recurrence_rule_id = %rule.id))]
pub fn expand_stored_rule(
    rule: &recurrence_rule::Model,
    start_date: NaiveDate,
    from_date: NaiveDate,
    to_date: NaiveDate,
    engine: &RecurrenceEngine,
    today: NaiveDate,
) -> OccurrenceList {
    let recurrence_rule = rule.to_recurrence_rule();
    let occurrences =
        engine.generate_occurrences_as_of(&recurrence_rule, start_date, from_date, to_date, today);
    event!(
        Level::DEBUG,
        recurrence_type = recurrence_rule.r#type.as_str(),
        count = occurrences.len(),
        "Expanded stored recurrence rule."
    );
    OccurrenceList { occurrences }
}
