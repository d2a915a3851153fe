use pretty_assertions::assert_eq;
use shewell::{predict, CalendarDate, CycleCalculator, CycleError};
use test_case::test_case;

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test_case("2025-01-01", "2025-01-29", "2025-01-15", "2025-01-10", "2025-01-14" ; "reference scenario")]
#[test_case("2025-02-01", "2025-03-01", "2025-02-15", "2025-02-10", "2025-02-14" ; "short february")]
#[test_case("2024-02-01", "2024-02-29", "2024-02-15", "2024-02-10", "2024-02-14" ; "leap february")]
#[test_case("2025-12-15", "2026-01-12", "2025-12-29", "2025-12-24", "2025-12-28" ; "year rollover")]
fn test_prediction_dates(last: &str, next: &str, ovulation: &str, fertile_start: &str, fertile_end: &str) {
    let p = predict(date(last)).unwrap();
    assert_eq!(p.next_period_start, date(next));
    assert_eq!(p.ovulation_date, date(ovulation));
    assert_eq!(p.fertile_window_start, date(fertile_start));
    assert_eq!(p.fertile_window_end, date(fertile_end));
}

#[test]
fn test_invariants_over_many_dates() {
    let calculators = [CycleCalculator::default(), CycleCalculator::new(21).unwrap(), CycleCalculator::new(35).unwrap()];
    for calculator in calculators {
        let mut day = date("1999-11-01");
        while day < date("2001-03-01") {
            let p = calculator.predict(day).unwrap();
            assert_eq!(day.days_until(p.next_period_start), i64::from(calculator.cycle_length()));
            assert_eq!(p.ovulation_date.days_until(p.next_period_start), 14);
            assert_eq!(p.fertile_window_start.days_until(p.fertile_window_end), 4);
            assert_eq!(p.fertile_window_end.days_until(p.next_period_start), 15);
            day = day.add_days(3).unwrap();
        }
    }
}

#[test]
fn test_prediction_is_deterministic() {
    let calculator = CycleCalculator::default();
    let first = calculator.predict(date("2025-06-30")).unwrap();
    let second = calculator.predict(date("2025-06-30")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_string_input_errors() {
    let calculator = CycleCalculator::default();
    assert_eq!(calculator.predict_str(""), Err(CycleError::MissingDate));
    assert!(matches!(calculator.predict_str("2025-02-29"), Err(CycleError::InvalidDate(_))));
    assert!(matches!(calculator.predict_str("next tuesday"), Err(CycleError::InvalidDate(_))));
}

#[test]
fn test_prediction_serializes_iso_dates() {
    let p = predict(date("2025-01-01")).unwrap();
    let json = serde_json::to_value(p).unwrap();
    assert_eq!(json["last_period_start"], "2025-01-01");
    assert_eq!(json["next_period_start"], "2025-01-29");
    let back: shewell::CyclePrediction = serde_json::from_value(json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn test_prediction_at_the_end_of_four_digit_years() {
    let last = predict(date("9999-12-03")).unwrap();
    assert_eq!(last.next_period_start, date("9999-12-31"));
    let json = serde_json::to_string(&last).unwrap();
    let back: shewell::CyclePrediction = serde_json::from_str(&json).unwrap();
    assert_eq!(back, last);

    assert!(matches!(predict(date("9999-12-20")), Err(CycleError::DateOutOfRange(_))));
}
