use super::*;
use time::{Date, Time};

fn at(year: i32, month: Month, day: u8, hour: u8, minute: u8) -> PrimitiveDateTime {
    PrimitiveDateTime::new(
        Date::from_calendar_date(year, month, day).unwrap(),
        Time::from_hms(hour, minute, 0).unwrap(),
    )
}

#[test]
fn format_timestamp_uses_long_spanish_month() {
    assert_eq!(format_timestamp(at(2026, Month::October, 16, 14, 5)), "16 de octubre de 2026, 14:05");
}

#[test]
fn format_timestamp_pads_clock_but_not_day() {
    assert_eq!(format_timestamp(at(2025, Month::March, 5, 9, 7)), "5 de marzo de 2025, 09:07");
}

#[test]
fn format_timestamp_midnight() {
    assert_eq!(format_timestamp(at(2024, Month::January, 1, 0, 0)), "1 de enero de 2024, 00:00");
}

#[test]
fn format_timestamp_covers_every_month_name() {
    let names: Vec<String> = (1..=12u8)
        .map(|m| format_timestamp(at(2024, Month::try_from(m).unwrap(), 1, 12, 0)))
        .collect();
    assert!(names[8].contains("septiembre"));
    assert!(names[11].contains("diciembre"));
    let unique: std::collections::HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), 12);
}

#[test]
fn display_locale_is_spanish() {
    assert_eq!(DISPLAY_LOCALE, "es-ES");
}
