use chrono::NaiveDate;
use recurrence::RecurrenceEngine;
use tracing::{event, instrument, Level};

use crate::{
    recurrence::{
        rule::parse_rule,
        types::{OccurrenceList, OccurrenceWindowQuery},
    },
    UseCaseError,
};

#[instrument(skip_all)]
pub fn list_occurrences(
    params: OccurrenceWindowQuery,
    engine: &RecurrenceEngine,
    today: NaiveDate,
) -> Result<OccurrenceList, UseCaseError> {
    if params.from_date > params.to_date {
        return Err(UseCaseError::BadRequest("fromDate must not be after toDate".to_string()));
    }
    let rule = parse_rule(&params.rule)?;
    let occurrences = engine.generate_occurrences_as_of(
        &rule,
        params.start_date,
        params.from_date,
        params.to_date,
        today,
    );
    event!(Level::DEBUG, count = occurrences.len(), "Listed occurrences.");
    Ok(OccurrenceList { occurrences })
}
