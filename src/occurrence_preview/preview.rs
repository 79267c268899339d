use chrono::NaiveDate;
use recurrence::RecurrenceEngine;
use serde::{Deserialize, Serialize};
use use_cases::recurrence::{
    check::check_occurrence,
    list::list_occurrences,
    list_next::list_next_occurrences,
    types::{
        NextOccurrencesQuery, OccurrenceCheck, OccurrenceCheckQuery, OccurrenceList,
        OccurrenceWindowQuery,
    },
};

#[derive(Deserialize, Debug)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PreviewRequest {
    Window(OccurrenceWindowQuery),
    Next(NextOccurrencesQuery),
    Check(OccurrenceCheckQuery),
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum PreviewResponse {
    List(OccurrenceList),
    Check(OccurrenceCheck),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn respond(
    input: &str,
    engine: &RecurrenceEngine,
    today: NaiveDate,
) -> Result<PreviewResponse, ErrorResponse> {
    let request: PreviewRequest = serde_json::from_str(input).map_err(|e| ErrorResponse {
        error: format!("Invalid request: {}", e),
    })?;
    match request {
        PreviewRequest::Window(params) => {
            list_occurrences(params, engine, today).map(PreviewResponse::List)
        }
        PreviewRequest::Next(params) => {
            list_next_occurrences(params, engine).map(PreviewResponse::List)
        }
        PreviewRequest::Check(params) => check_occurrence(params).map(PreviewResponse::Check),
    }
    .map_err(|e| ErrorResponse {
        error: e.to_string(),
    })
}
