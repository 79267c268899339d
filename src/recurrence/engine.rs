use chrono::{Datelike, Local, NaiveDate};
use tracing::{event, Level};

use crate::{
    dates::{add_days, add_months, days_between, months_between},
    RecurrenceRule, RecurrenceType,
};

/// How far past today `generate_occurrences` may look, whatever window is asked for.
pub const DEFAULT_HORIZON_YEARS: u32 = 2;
/// Stepping iterations allowed to `generate_next_occurrences`.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecurrenceLimits {
    pub horizon_years: u32,
    pub max_iterations: usize,
}

impl Default for RecurrenceLimits {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Expands recurrence rules into dates. Holds nothing but its limits, so a
/// single value can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurrenceEngine {
    limits: RecurrenceLimits,
}

impl RecurrenceEngine {
    pub fn new(limits: RecurrenceLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> RecurrenceLimits {
        self.limits
    }

    /// Occurrences within `[from_date, to_date]`, both inclusive.
    pub fn generate_occurrences(
        &self,
        rule: &RecurrenceRule,
        start_date: NaiveDate,
        from_date: NaiveDate,
        to_date: NaiveDate,
    ) -> Vec<NaiveDate> {
        let today = Local::now().date_naive();
        self.generate_occurrences_as_of(rule, start_date, from_date, to_date, today)
    }

    /// Same as `generate_occurrences` with the horizon measured from `today`.
    ///
    /// Every occurrence since `start_date` counts toward `max_occurrences`,
    /// including the ones before `from_date` that are not returned.
    pub fn generate_occurrences_as_of(
        &self,
        rule: &RecurrenceRule,
        start_date: NaiveDate,
        from_date: NaiveDate,
        to_date: NaiveDate,
        today: NaiveDate,
    ) -> Vec<NaiveDate> {
        let to_date = self.clamp_to_horizon(to_date, today);
        let mut occurrences = vec![];
        let mut count = 0;
        for date in Walk::new(rule, start_date) {
            if date > to_date || rule.is_past_end(date) || rule.is_cap_reached(count) {
                break;
            }
            if is_occurrence_date(rule, start_date, date) {
                count += 1;
                if date >= from_date {
                    occurrences.push(date);
                }
            }
        }
        occurrences
    }

    /// First `count` occurrences of the series. Not bounded by the horizon, only
    /// by the iteration ceiling.
    pub fn generate_next_occurrences(
        &self,
        rule: &RecurrenceRule,
        start_date: NaiveDate,
        count: usize,
    ) -> Vec<NaiveDate> {
        let max_iterations = self.limits.max_iterations;
        let mut occurrences = Vec::with_capacity(count.min(max_iterations));
        let mut walk = Walk::new(rule, start_date);
        for date in walk.by_ref().take(max_iterations) {
            if occurrences.len() >= count
                || rule.is_past_end(date)
                || rule.is_cap_reached(occurrences.len())
            {
                return occurrences;
            }
            if is_occurrence_date(rule, start_date, date) {
                occurrences.push(date);
            }
        }
        // Candidates left over mean the ceiling ended the walk, not the calendar.
        if occurrences.len() < count && walk.next().is_some() {
            event!(
                Level::DEBUG,
                max_iterations,
                found = occurrences.len(),
                requested = count,
                "Iteration ceiling reached before collecting requested occurrences."
            );
        }
        occurrences
    }

    fn clamp_to_horizon(&self, to_date: NaiveDate, today: NaiveDate) -> NaiveDate {
        let horizon = add_months(today, self.limits.horizon_years.saturating_mul(12))
            .unwrap_or(NaiveDate::MAX);
        if to_date > horizon {
            event!(Level::DEBUG, %to_date, %horizon, "Clamping occurrence window to horizon.");
            horizon
        } else {
            to_date
        }
    }
}

/// Whether `candidate` is an occurrence of `rule` anchored at `start_date`.
pub fn is_occurrence_date(
    rule: &RecurrenceRule,
    start_date: NaiveDate,
    candidate: NaiveDate,
) -> bool {
    if candidate < start_date || rule.is_past_end(candidate) {
        return false;
    }
    let stride = i64::from(rule.stride());
    match rule.r#type {
        RecurrenceType::Daily => days_between(start_date, candidate) % stride == 0,
        RecurrenceType::Weekly => {
            // An empty set skips the weekday filter entirely.
            let days_of_week = rule.days_of_week;
            if !days_of_week.is_empty() && !days_of_week.contains(candidate.weekday()) {
                return false;
            }
            (days_between(start_date, candidate) / 7) % stride == 0
        }
        RecurrenceType::Monthly => {
            candidate.day() == start_date.day()
                && months_between(start_date, candidate) % stride == 0
        }
        RecurrenceType::Unknown => false,
    }
}

pub fn generate_occurrences(
    rule: &RecurrenceRule,
    start_date: NaiveDate,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> Vec<NaiveDate> {
    RecurrenceEngine::default().generate_occurrences(rule, start_date, from_date, to_date)
}

pub fn generate_next_occurrences(
    rule: &RecurrenceRule,
    start_date: NaiveDate,
    count: usize,
) -> Vec<NaiveDate> {
    RecurrenceEngine::default().generate_next_occurrences(rule, start_date, count)
}

/// Candidate dates of a series, starting at the anchor. Callers test each
/// candidate with `is_occurrence_date`; the walk ends only when date arithmetic
/// runs off the calendar.
struct Walk<'a> {
    rule: &'a RecurrenceRule,
    start_date: NaiveDate,
    next: Option<NaiveDate>,
    steps: u32,
}

impl<'a> Walk<'a> {
    fn new(rule: &'a RecurrenceRule, start_date: NaiveDate) -> Self {
        Self {
            rule,
            start_date,
            next: Some(start_date),
            steps: 0,
        }
    }

    fn candidate_after(&self, current: NaiveDate) -> Option<NaiveDate> {
        let stride = self.rule.stride();
        match self.rule.r#type {
            RecurrenceType::Daily => add_days(current, u64::from(stride)),
            RecurrenceType::Weekly => self.weekly_candidate_after(current),
            // Counted from the anchor so month-end clamping never shifts the day.
            RecurrenceType::Monthly => {
                add_months(self.start_date, stride.checked_mul(self.steps)?)
            }
            RecurrenceType::Unknown => add_days(current, 1),
        }
    }

    /// Next day that lies in an active week (every `interval`-th seven-day block
    /// from the anchor) and passes the weekday filter.
    fn weekly_candidate_after(&self, current: NaiveDate) -> Option<NaiveDate> {
        let stride = i64::from(self.rule.stride());
        let days_of_week = self.rule.days_of_week;
        let mut offset = days_between(self.start_date, current) + 1;
        loop {
            let week = offset / 7;
            if week % stride != 0 {
                offset = (week / stride + 1) * stride * 7;
            }
            let date = add_days(self.start_date, u64::try_from(offset).ok()?)?;
            if days_of_week.is_empty() || days_of_week.contains(date.weekday()) {
                return Some(date);
            }
            offset += 1;
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.steps += 1;
        self.next = self.candidate_after(current);
        Some(current)
    }
}
