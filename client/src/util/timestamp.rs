//! Display timestamps for message cards.
//!
//! Cards show a long-form `es-ES` date followed by a zero-padded
//! `HH:MM` clock, e.g. `16 de octubre de 2026, 14:05`.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::{Month, OffsetDateTime, PrimitiveDateTime};

/// Locale every user-facing string on the page is written in.
pub const DISPLAY_LOCALE: &str = "es-ES";

/// Current wall-clock time in the local offset, or UTC when the offset
/// cannot be determined.
pub fn now_local() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    PrimitiveDateTime::new(now.date(), now.time())
}

/// Format `at` as a long-form date plus hour and minute.
pub fn format_timestamp(at: PrimitiveDateTime) -> String {
    format!(
        "{} de {} de {}, {:02}:{:02}",
        at.day(),
        month_name(at.month()),
        at.year(),
        at.hour(),
        at.minute()
    )
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "enero",
        Month::February => "febrero",
        Month::March => "marzo",
        Month::April => "abril",
        Month::May => "mayo",
        Month::June => "junio",
        Month::July => "julio",
        Month::August => "agosto",
        Month::September => "septiembre",
        Month::October => "octubre",
        Month::November => "noviembre",
        Month::December => "diciembre",
    }
}
