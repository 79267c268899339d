use chrono::NaiveDate;
use recurrence::RecurrenceType;
use use_cases::{
    recurrence::{
        check::check_occurrence,
        types::{OccurrenceCheckQuery, RecurrenceRuleVisible},
    },
    UseCaseError,
};

use crate::utils::{date, rule};

fn is_occurrence(
    rule: RecurrenceRuleVisible,
    start_date: NaiveDate,
    date: NaiveDate,
) -> Result<bool, UseCaseError> {
    let params = OccurrenceCheckQuery {
        rule,
        start_date,
        date,
    };
    check_occurrence(params).map(|res| res.is_occurrence)
}

#[test]
fn dates_before_start_never_match() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);

    for r#type in [
        RecurrenceType::Daily,
        RecurrenceType::Weekly,
        RecurrenceType::Monthly,
    ] {
        assert!(!is_occurrence(rule(r#type, 1), start, date(2026, 2, 15))?);
        assert!(is_occurrence(rule(r#type, 1), start, start)?);
    }
    Ok(())
}

#[test]
fn daily_interval_ignores_weekdays() -> Result<(), UseCaseError> {
    let params = RecurrenceRuleVisible {
        days_of_week: Some("1".to_string()),
        ..rule(RecurrenceType::Daily, 3)
    };
    let start = date(2026, 2, 16);

    assert!(is_occurrence(params.clone(), start, date(2026, 2, 19))?);
    assert!(!is_occurrence(params, start, date(2026, 2, 20))?);
    Ok(())
}

#[test]
fn weekly_without_days_matches_every_day_of_active_weeks() -> Result<(), UseCaseError> {
    let params = rule(RecurrenceType::Weekly, 2);
    let start = date(2026, 2, 16);

    assert!(is_occurrence(params.clone(), start, date(2026, 2, 21))?);
    assert!(!is_occurrence(params.clone(), start, date(2026, 2, 24))?);
    assert!(is_occurrence(params, start, date(2026, 3, 5))?);
    Ok(())
}

#[test]
fn monthly_on_31st_skips_30_day_months() -> Result<(), UseCaseError> {
    let params = rule(RecurrenceType::Monthly, 1);
    let start = date(2026, 1, 31);

    assert!(!is_occurrence(params.clone(), start, date(2026, 4, 30))?);
    assert!(is_occurrence(params, start, date(2026, 5, 31))?);
    Ok(())
}

#[test]
fn dates_after_end_date_never_match() -> Result<(), UseCaseError> {
    let params = RecurrenceRuleVisible {
        end_date: Some(date(2026, 3, 1)),
        ..rule(RecurrenceType::Daily, 1)
    };

    assert!(is_occurrence(params.clone(), date(2026, 2, 16), date(2026, 3, 1))?);
    assert!(!is_occurrence(params, date(2026, 2, 16), date(2026, 3, 2))?);
    Ok(())
}
