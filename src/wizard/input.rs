//! Keystroke admission and submission validation.

use rust_decimal::Decimal;

use crate::error::ValidationError;

use super::model::{FinancialProfile, ProfileField};

/// Parse a candidate amount string.
///
/// Accepts plain decimal and scientific notation, with surrounding
/// whitespace tolerated. Returns `None` for anything that is not a number.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Decide whether a raw input value may replace the current field value.
///
/// Total: it never fails, it only admits or discards the candidate.
/// The empty string is always admitted (the field is cleared). A value that
/// parses as a number >= 0 is admitted verbatim; the raw string is kept
/// rather than the parsed number so that representations like trailing
/// decimals survive untouched. Everything else leaves the current value in
/// place, with no error raised.
pub fn accept(current: &str, raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match parse_amount(raw) {
        Some(value) if value >= Decimal::ZERO => raw.to_string(),
        _ => current.to_string(),
    }
}

/// Check that every required field is filled in before submission.
///
/// Only `monthly_income` and `monthly_expenses` are required; all other
/// fields default to "not provided". Navigation between steps never runs
/// this check, only submission does.
pub fn validate_for_submission(profile: &FinancialProfile) -> Result<(), ValidationError> {
    let missing: Vec<ProfileField> = ProfileField::ALL
        .iter()
        .copied()
        .filter(|f| f.is_required() && profile.get(*f).is_empty())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(missing))
    }
}
