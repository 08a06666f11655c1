use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// An explicitly labeled visit date ("Дата: 01.02.2023").
static DATE_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:дата)[ \t]*:[ \t]*(\d{1,2}[./-]\d{1,2}[./-]\d{2,4})")
        .expect("invalid labeled date pattern")
});

/// Any bare date-shaped token.
static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{1,2}[./-]\d{1,2}[./-]\d{2,4}").expect("invalid date pattern"));

/// Find the visit date: an explicit "дата:"-labeled token wins over the
/// first bare date-shaped token anywhere in the text.
pub fn find_date_token(text: &str) -> Option<String> {
    if let Some(captures) = DATE_LABELED.captures(text) {
        return Some(captures[1].to_string());
    }
    DATE_TOKEN.find(text).map(|m| m.as_str().to_string())
}

/// Whether the text contains any date-shaped token at all.
pub fn contains_date_token(text: &str) -> bool {
    DATE_TOKEN.is_match(text)
}

/// Normalize a matched date token to a calendar date.
///
/// Day-first formats are tried before month-first, matching how the
/// analyzed documents are written. Two-digit years go through `%y` so they
/// land in the right century. Tokens that match the date shape but name no
/// real calendar date (e.g. "99.99.2023") yield `None`; the raw token stays
/// authoritative for display either way.
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    let year_digits = token
        .rsplit(['.', '/', '-'])
        .next()
        .map(str::len)
        .unwrap_or(0);
    let formats: &[&str] = if year_digits >= 3 {
        &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y"]
    } else {
        &["%d.%m.%y", "%d/%m/%y", "%d-%m-%y"]
    };
    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(token, format).ok())
}
