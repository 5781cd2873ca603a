//! Derived-column functions shared by the builders.

use chrono::NaiveDate;

use super::{TransformError, TransformResult};

/// Label for a medicine that needs a prescription.
pub const RECIPE_REQUIRED: &str = "Yes";
/// Label for an over-the-counter medicine.
pub const RECIPE_NOT_REQUIRED: &str = "No";

/// Join first and last name with a single space, then trim.
///
/// A missing last name contributes nothing.
pub fn full_name(first_name: &str, last_name: Option<&str>) -> String {
    format!("{} {}", first_name, last_name.unwrap_or(""))
        .trim()
        .to_string()
}

/// Age as `reference_year - birth_year`.
///
/// Month and day are ignored, so anyone whose birthday has not yet come in the
/// reference year is reported one year older than they are.
/// The birth year is the leading digits of the date, so a trailing time
/// (`"1990-05-15 00:00:00"`, `"1990-05-15T00:00:00"`) is accepted.
/// Returns `None` only when no year can be read.
pub fn naive_age(date_of_birth: &str, reference_year: i32) -> Option<i32> {
    Some(reference_year - birth_year(date_of_birth)?)
}

fn birth_year(date_of_birth: &str) -> Option<i32> {
    let date = date_of_birth
        .trim()
        .split(|c| c == ' ' || c == 'T')
        .next()?;
    let year = date.split('-').next()?;
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

/// Map the integer recipe flag to its label. Only `1` means required.
pub fn recipe_label(requires_recipe: i64) -> &'static str {
    if requires_recipe == 1 {
        RECIPE_REQUIRED
    } else {
        RECIPE_NOT_REQUIRED
    }
}

/// Date component of a `"date time"` timestamp: everything before the first
/// space, or the whole string when there is no space.
pub fn date_part(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(date, _)| date)
}

/// Date key for a timestamp: its `YYYY-MM-DD` date with the dashes removed,
/// read as an integer. `"2025-10-06 14:00:00"` → `20251006`.
pub fn date_key(timestamp: &str) -> TransformResult<i64> {
    let (date, _) = parse_sale_date(timestamp)?;
    date.replace('-', "")
        .parse()
        .map_err(|_| TransformError::MalformedTimestamp(timestamp.to_string()))
}

/// Split out and validate the date component of a sale timestamp.
///
/// The date must be exactly `YYYY-MM-DD` so that the dash-stripped key is
/// always eight digits.
pub(crate) fn parse_sale_date(timestamp: &str) -> TransformResult<(&str, NaiveDate)> {
    let date = date_part(timestamp);
    let bytes = date.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return Err(TransformError::MalformedTimestamp(timestamp.to_string()));
    }

    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| TransformError::MalformedTimestamp(timestamp.to_string()))?;
    Ok((date, parsed))
}
