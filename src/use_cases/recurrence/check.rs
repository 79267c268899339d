use recurrence::is_occurrence_date;
use tracing::instrument;

use crate::{
    recurrence::{
        rule::parse_rule,
        types::{OccurrenceCheck, OccurrenceCheckQuery},
    },
    UseCaseError,
};

#[instrument(skip_all)]
pub fn check_occurrence(params: OccurrenceCheckQuery) -> Result<OccurrenceCheck, UseCaseError> {
    let rule = parse_rule(&params.rule)?;
    Ok(OccurrenceCheck {
        date: params.date,
        is_occurrence: is_occurrence_date(&rule, params.start_date, params.date),
    })
}
