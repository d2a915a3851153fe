use shewell::{interpret, CalendarDate, ParsedDate, VoiceDateInterpreter};
use test_case::test_case;

fn date(s: &str) -> CalendarDate {
    s.parse().unwrap()
}

#[test_case("2025-03-10" ; "mid month")]
#[test_case("2024-02-29" ; "leap day")]
#[test_case("2025-01-01" ; "new year")]
fn test_today_is_the_reference(reference: &str) {
    let reference = date(reference);
    assert_eq!(interpret("today", reference), ParsedDate::Recognized(reference));
    assert_eq!(interpret("TODAY", reference), ParsedDate::Recognized(reference));
}

#[test]
fn test_relative_phrases() {
    let reference = date("2025-03-10");
    assert_eq!(interpret("yesterday", reference).date(), Some(date("2025-03-09")));
    assert_eq!(interpret("3 days ago", reference).date(), Some(date("2025-03-07")));
    assert_eq!(interpret("last week", reference).date(), Some(date("2025-03-03")));
    assert_eq!(interpret("a week ago", reference).date(), Some(date("2025-03-03")));
}

#[test]
fn test_relative_phrases_cross_boundaries() {
    assert_eq!(interpret("yesterday", date("2025-01-01")).date(), Some(date("2024-12-31")));
    assert_eq!(interpret("last week", date("2025-03-03")).date(), Some(date("2025-02-24")));
    assert_eq!(interpret("10 days ago", date("2024-03-05")).date(), Some(date("2024-02-24")));
}

#[test]
fn test_month_names_use_reference_year() {
    let reference = date("2025-03-10");
    assert_eq!(interpret("january 3rd", reference).date(), Some(date("2025-01-03")));
    assert_eq!(interpret("it was May 22nd", reference).date(), Some(date("2025-05-22")));
    assert_eq!(interpret("february 29", date("2024-06-01")).date(), Some(date("2024-02-29")));
    assert_eq!(interpret("february 29", reference), ParsedDate::Unrecognized);
}

#[test_case("banana")]
#[test_case("the day before")]
#[test_case("sometime in spring")]
#[test_case("99999999999999999999 days ago")]
fn test_unrecognized_never_fails(utterance: &str) {
    assert_eq!(interpret(utterance, date("2025-03-10")), ParsedDate::Unrecognized);
}

#[test]
fn test_configurable_days_ago_bound() {
    let reference = date("2025-03-10");
    let strict = VoiceDateInterpreter::new(7);
    assert_eq!(strict.interpret("7 days ago", reference).date(), Some(date("2025-03-03")));
    assert_eq!(strict.interpret("8 days ago", reference), ParsedDate::Unrecognized);
}

#[test]
fn test_recognized_dates_round_trip_through_iso() {
    let reference = date("2025-03-10");
    for phrase in ["today", "yesterday", "last week", "5 days ago", "october 9th"] {
        let iso = interpret(phrase, reference).to_iso_string().unwrap();
        let reparsed = CalendarDate::parse_iso(&iso).unwrap();
        assert_eq!(reparsed.to_iso_string(), iso);
        assert_eq!(ParsedDate::Recognized(reparsed), interpret(phrase, reference));
    }
}
