use crate::errors::{AppError, AppResult};
use chrono::{Days, Local, Months, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;

/// Date format the portal expects in its search filters.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Duration token grammar: a magnitude followed by a unit.
const DURATION_PATTERN: &str = r"^(\d+)([dwmy])$";

/// Cached regex for duration tokens.
/// Compiled once at initialization for performance.
static DURATION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Resolves a relative duration token into a `(start, end)` date pair
/// anchored at today, both formatted as `DD/MM/YYYY`.
///
/// Token grammar (case-insensitive): `<N><unit>` where unit is one of
/// `d` (days), `w` (weeks), `m` (calendar months), `y` (calendar years).
/// The empty token defaults to `3m`. The exact token `1d` is a single-day
/// shortcut: both dates equal today.
///
/// # Errors
///
/// Returns `InvalidFormat` naming the offending token if it does not match
/// the grammar.
pub fn resolve_range(token: &str) -> AppResult<(String, String)> {
    resolve_range_from(Local::now().date_naive(), token)
}

/// Same as [`resolve_range`], anchored at an explicit date instead of the
/// system clock. Tests drive this variant.
pub fn resolve_range_from(today: NaiveDate, token: &str) -> AppResult<(String, String)> {
    let token = if token.is_empty() { "3m" } else { token };
    let end = today.format(DATE_FORMAT).to_string();

    // Single-day shortcut: today only, not "today minus one day"
    if token == "1d" {
        return Ok((end.clone(), end));
    }

    let re = DURATION_REGEX.get_or_init(|| {
        Regex::new(DURATION_PATTERN).expect("DURATION_PATTERN is a valid regex pattern")
    });
    let lowered = token.to_lowercase();
    let caps = re
        .captures(&lowered)
        .ok_or_else(|| invalid_token(token))?;

    let magnitude: u32 = caps[1].parse().map_err(|_| invalid_token(token))?;
    let start = match &caps[2] {
        "d" => today.checked_sub_days(Days::new(u64::from(magnitude))),
        "w" => today.checked_sub_days(Days::new(u64::from(magnitude) * 7)),
        "m" => today.checked_sub_months(Months::new(magnitude)),
        "y" => magnitude
            .checked_mul(12)
            .and_then(|months| today.checked_sub_months(Months::new(months))),
        _ => None,
    }
    .ok_or_else(|| invalid_token(token))?;

    Ok((start.format(DATE_FORMAT).to_string(), end))
}

fn invalid_token(token: &str) -> AppError {
    AppError::InvalidFormat(format!(
        "invalid duration format: '{token}'. Use format like 4d, 1w, 3m, 1y"
    ))
}
