mod dates;
mod days_of_week;
mod engine;
mod rule;

pub use days_of_week::DaysOfWeek;
pub use engine::{
    generate_next_occurrences, generate_occurrences, is_occurrence_date, RecurrenceEngine,
    RecurrenceLimits, DEFAULT_HORIZON_YEARS, DEFAULT_MAX_ITERATIONS,
};
pub use rule::{RecurrenceRule, RecurrenceType};
