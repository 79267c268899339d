use chrono::{Datelike, Months, NaiveDate, Weekday};
use recurrence::{RecurrenceEngine, RecurrenceType};
use use_cases::{
    recurrence::{
        list::list_occurrences,
        types::{OccurrenceWindowQuery, RecurrenceRuleVisible},
    },
    UseCaseError,
};

use crate::utils::{date, init_engine, rule, today};

fn list(
    rule: RecurrenceRuleVisible,
    start_date: NaiveDate,
    from_date: NaiveDate,
    to_date: NaiveDate,
) -> Result<Vec<NaiveDate>, UseCaseError> {
    let params = OccurrenceWindowQuery {
        rule,
        start_date,
        from_date,
        to_date,
    };
    list_occurrences(params, &init_engine(), today()).map(|res| res.occurrences)
}

#[test]
fn daily() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);

    let res = list(rule(RecurrenceType::Daily, 1), start, start, date(2026, 2, 20))?;

    let expected = [16, 17, 18, 19, 20].map(|d| date(2026, 2, d));
    assert_eq!(res, expected);
    Ok(())
}

#[test]
fn daily_every_2_days() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);

    let res = list(rule(RecurrenceType::Daily, 2), start, start, date(2026, 2, 24))?;

    let expected = [16, 18, 20, 22, 24].map(|d| date(2026, 2, d));
    assert_eq!(res, expected);
    Ok(())
}

#[test]
fn weekly_on_sunday() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 15);
    let params = RecurrenceRuleVisible {
        days_of_week: Some("0".to_string()),
        ..rule(RecurrenceType::Weekly, 1)
    };

    let res = list(params, start, start, date(2026, 3, 15))?;

    assert_eq!(res.len(), 5);
    for occurrence in &res {
        assert_eq!(occurrence.weekday(), Weekday::Sun);
    }
    Ok(())
}

#[test]
fn monthly() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);

    let res = list(rule(RecurrenceType::Monthly, 1), start, start, date(2026, 5, 16))?;

    assert_eq!(res.len(), 4);
    for occurrence in &res {
        assert_eq!(occurrence.day(), 16);
    }
    assert_eq!(res[3], date(2026, 5, 16));
    Ok(())
}

#[test]
fn stops_at_end_date() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);
    let params = RecurrenceRuleVisible {
        end_date: Some(date(2026, 2, 18)),
        ..rule(RecurrenceType::Daily, 1)
    };

    let res = list(params, start, start, date(2026, 2, 25))?;

    assert_eq!(res, [16, 17, 18].map(|d| date(2026, 2, d)));
    Ok(())
}

#[test]
fn stops_at_max_occurrences() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);
    let params = RecurrenceRuleVisible {
        max_occurrences: Some(3),
        ..rule(RecurrenceType::Daily, 1)
    };

    let res = list(params, start, start, date(2026, 2, 25))?;

    assert_eq!(res.len(), 3);
    Ok(())
}

#[test]
fn max_occurrences_hold_across_windows() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);
    let params = RecurrenceRuleVisible {
        max_occurrences: Some(4),
        days_of_week: Some("1,3,5".to_string()),
        ..rule(RecurrenceType::Weekly, 1)
    };

    let first = list(params.clone(), start, start, date(2026, 2, 20))?;
    let second = list(params.clone(), start, date(2026, 2, 21), date(2026, 3, 31))?;

    assert_eq!(first, [16, 18, 20].map(|d| date(2026, 2, d)));
    assert_eq!(second, vec![date(2026, 2, 23)]);
    Ok(())
}

#[test]
fn end_date_and_max_occurrences_first_one_wins() -> Result<(), UseCaseError> {
    let start = date(2026, 2, 16);
    let params = RecurrenceRuleVisible {
        end_date: Some(date(2026, 4, 30)),
        max_occurrences: Some(10),
        ..rule(RecurrenceType::Monthly, 1)
    };

    let res = list(params, start, start, date(2026, 12, 31))?;

    assert_eq!(res, [2, 3, 4].map(|m| date(2026, m, 16)));
    Ok(())
}

#[test]
fn same_request_same_result() -> Result<(), UseCaseError> {
    let start = date(2026, 1, 31);
    let params = rule(RecurrenceType::Monthly, 2);

    let first = list(params.clone(), start, start, date(2027, 1, 31))?;
    let second = list(params, start, start, date(2027, 1, 31))?;

    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
    Ok(())
}

#[test]
fn window_beyond_horizon_is_clamped() -> Result<(), UseCaseError> {
    let start = today();
    let horizon_months = init_engine().limits().horizon_years * 12;

    let to_date = start + Months::new(horizon_months + 12);

    let res = list(rule(RecurrenceType::Monthly, 1), start, start, to_date)?;

    assert_eq!(res.len(), horizon_months as usize + 1);
    assert_eq!(res.last(), Some(&(start + Months::new(horizon_months))));
    Ok(())
}

#[test]
fn window_beyond_default_horizon_is_clamped() -> Result<(), UseCaseError> {
    let start = today();
    let params = OccurrenceWindowQuery {
        rule: rule(RecurrenceType::Monthly, 1),
        start_date: start,
        from_date: start,
        to_date: date(2040, 1, 1),
    };

    let res = list_occurrences(params, &RecurrenceEngine::default(), today())?;

    assert_eq!(res.occurrences.len(), 25);
    assert_eq!(res.occurrences.last(), Some(&date(2028, 2, 16)));
    Ok(())
}

#[test]
fn invalid_rule_is_bad_request() {
    let start = date(2026, 2, 16);

    let res = list(rule(RecurrenceType::Daily, 0), start, start, date(2026, 2, 20));

    assert_eq!(
        res,
        Err(UseCaseError::BadRequest("interval must be at least 1".to_string()))
    );
}
