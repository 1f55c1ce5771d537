//! Tests for date and time normalisation.

use super::*;
use rstest::rstest;

#[rstest]
#[case("2025-06-01", "2025-06-01")]
#[case("  2025-06-01  ", "2025-06-01")]
#[case("2025/06/01", "2025-06-01")]
#[case("06/01/2025", "2025-06-01")]
#[case("June 1, 2025", "2025-06-01")]
#[case("Jun 1, 2025", "2025-06-01")]
#[case("1 June 2025", "2025-06-01")]
#[case("Sunday, June 1, 2025", "2025-06-01")]
#[case("2025-06-01T10:00:00Z", "2025-06-01")]
#[case("2025-06-01T23:30:00-02:00", "2025-06-02")]
#[case("Sun, 01 Jun 2025 10:00:00 +0000", "2025-06-01")]
#[case("2024-02-29", "2024-02-29")]
#[case("2025-06-01T10:00:00", "2025-06-01")]
#[case("2025-06-01T10:00", "2025-06-01")]
#[case("2025-06-01T23:59:59.250", "2025-06-01")]
#[case("2025-06-01 10:00:00", "2025-06-01")]
#[case("2025-06-01 10:00", "2025-06-01")]
fn normalize_date_produces_iso(#[case] input: &str, #[case] expected: &str) {
    let date = normalize_date(input).expect("date parses");
    assert_eq!(date.to_string(), expected);
}

#[rstest]
#[case("not-a-date")]
#[case("")]
#[case("   ")]
#[case("2025-02-30")]
#[case("2023-02-29")]
#[case("13/45/2025")]
#[case("2025-06-01T25:00")]
fn normalize_date_rejects_invalid_input(#[case] input: &str) {
    let err = normalize_date(input).expect_err("date should be rejected");
    assert!(matches!(err, EventValidationError::InvalidDate { .. }));
}

#[rstest]
#[case("14:30", "14:30")]
#[case("00:00", "00:00")]
#[case("23:59", "23:59")]
#[case("9:05", "09:05")]
#[case("2:30 PM", "14:30")]
#[case("2:30pm", "14:30")]
#[case("12:00 PM", "12:00")]
#[case("12:00 AM", "00:00")]
#[case("12:15 am", "00:15")]
#[case("11:59 Pm", "23:59")]
#[case(" 7:45 am ", "07:45")]
#[case("07:45 AM", "07:45")]
fn normalize_time_produces_24_hour_form(#[case] input: &str, #[case] expected: &str) {
    let time = normalize_time(input).expect("time parses");
    assert_eq!(time.to_string(), expected);
}

#[rstest]
#[case("25:00")]
#[case("24:00")]
#[case("12:60")]
#[case("13:00 pm")]
#[case("0:30 am")]
#[case("noon")]
#[case("1430")]
#[case("")]
#[case("10:00 xm")]
fn normalize_time_rejects_invalid_input(#[case] input: &str) {
    let err = normalize_time(input).expect_err("time should be rejected");
    assert!(matches!(err, EventValidationError::InvalidTime { .. }));
}

#[rstest]
fn normalised_values_are_stable() {
    let time = normalize_time("2:30 PM").expect("time parses");
    let again = normalize_time(&time.to_string()).expect("normalised time parses");
    assert_eq!(time, again);

    let date = normalize_date("June 1, 2025").expect("date parses");
    let again = normalize_date(&date.to_string()).expect("normalised date parses");
    assert_eq!(date, again);
}
