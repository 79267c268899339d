use recurrence::RecurrenceEngine;
use tracing::{event, instrument, Level};

use crate::{
    recurrence::{
        rule::parse_rule,
        types::{NextOccurrencesQuery, OccurrenceList},
    },
    UseCaseError,
};

#[instrument(skip_all)]
pub fn list_next_occurrences(
    params: NextOccurrencesQuery,
    engine: &RecurrenceEngine,
) -> Result<OccurrenceList, UseCaseError> {
    let rule = parse_rule(&params.rule)?;
    let occurrences = engine.generate_next_occurrences(&rule, params.start_date, params.count);
    event!(
        Level::DEBUG,
        requested = params.count,
        count = occurrences.len(),
        "Listed next occurrences."
    );
    Ok(OccurrenceList { occurrences })
}
