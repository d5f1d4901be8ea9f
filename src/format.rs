//! Text formatting helpers for the rendered page.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

// Genitive month names, as a ru locale date renders them.
const RU_MONTHS: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format a server-supplied timestamp in the long Russian form,
/// e.g. "5 марта 2024 г.". Unparseable input renders as "Invalid Date".
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            "{} {} {} г.",
            date.day(),
            RU_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => "Invalid Date".to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

/// Convert post body text into paragraph markup: every newline becomes a
/// paragraph boundary and the whole string is wrapped in one paragraph.
/// Leading, trailing and consecutive newlines produce empty paragraphs;
/// tests pin that output. Escaping is the caller's job.
pub fn format_content(content: &str) -> String {
    let broken = content.replace('\n', "</p><p>");
    if broken.is_empty() {
        return broken;
    }
    format!("<p>{broken}</p>")
}
