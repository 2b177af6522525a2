//! Field rules shared by the request parameter conversions.

use chrono::NaiveDate;

use crate::server::error::validation::{ValidationErrors, MISSING_FIELD};

/// Records a missing-field error when `value` is `None` and passes the value through.
pub fn required<T>(errors: &mut ValidationErrors, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, MISSING_FIELD);
    }
    value
}

/// Checks that a string is not blank and at most `max` characters long.
pub fn check_text(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.add(field, "Field may not be blank.");
    } else if value.chars().count() > max {
        errors.add(field, format!("Longer than maximum length {}.", max));
    }
}

/// Checks that an optional free-text string is at most `max` characters long.
pub fn check_max_length(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(field, format!("Longer than maximum length {}.", max));
    }
}

/// Checks that a string is at least `min` characters long.
pub fn check_min_length(errors: &mut ValidationErrors, field: &str, value: &str, min: usize) {
    if value.chars().count() < min {
        errors.add(field, format!("Shorter than minimum length {}.", min));
    }
}

/// Checks for a `local@domain.tld` shaped address of at most 320 characters.
pub fn check_email(errors: &mut ValidationErrors, field: &str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        errors.add(field, "Not a valid email address.");
    } else if value.chars().count() > 320 {
        errors.add(field, "Longer than maximum length 320.");
    }
}

/// Checks that a price is a finite, non-negative number.
pub fn check_price(errors: &mut ValidationErrors, field: &str, value: f64) {
    if !value.is_finite() {
        errors.add(field, "Not a valid number.");
    } else if value < 0.0 {
        errors.add(field, "Must be greater than or equal to 0.");
    }
}

/// Parses an ISO-8601 calendar date, recording an error on failure.
pub fn parse_date(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add(field, "Not a valid date.");
            None
        }
    }
}

/// Checks a list of IDs is non-empty and returns it sorted without duplicates.
pub fn check_ids(errors: &mut ValidationErrors, field: &str, ids: Vec<i32>) -> Vec<i32> {
    if ids.is_empty() {
        errors.add(field, "Shorter than minimum length 1.");
    }

    let mut ids = ids;
    ids.sort_unstable();
    ids.dedup();
    ids
}
