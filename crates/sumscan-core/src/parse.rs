//! Text-to-input validation.
//!
//! All validation errors are detected here, before any enumeration work
//! begins. The user-facing messages identify the offending token and its
//! 0-based position.

use crate::enumerate::MAX_VALUES;
use crate::errors::{ErrorInfo, ScanError};

/// Parses a comma or whitespace separated list of positive integers.
///
/// The length cap is checked on the raw token count before individual
/// tokens are validated, so an oversized list is rejected for its length
/// even when it also contains malformed tokens.
pub fn parse_values(raw: &str) -> Result<Vec<u64>, ScanError> {
    let tokens: Vec<&str> = raw
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ScanError::Values(ErrorInfo::new(
            "sumscan.values_empty",
            "Please enter at least one positive integer for A.",
        )));
    }

    if tokens.len() > MAX_VALUES {
        return Err(ScanError::Values(
            ErrorInfo::new(
                "sumscan.values_cap",
                format!(
                    "N is {}. For responsiveness, please keep N \u{2264} {MAX_VALUES}.",
                    tokens.len()
                ),
            )
            .with_context("length", tokens.len().to_string())
            .with_context("max", MAX_VALUES.to_string()),
        ));
    }

    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| match token.parse::<u64>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ScanError::Values(
                ErrorInfo::new(
                    "sumscan.values_token",
                    format!("A[{index}] = \"{token}\" is invalid. Use only positive integers."),
                )
                .with_context("position", index.to_string())
                .with_context("token", (*token).to_string()),
            )),
        })
        .collect()
}

/// Parses the minimum-sum threshold.
pub fn parse_threshold(raw: &str) -> Result<u64, ScanError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ScanError::Threshold(
            ErrorInfo::new("sumscan.threshold", "M must be a positive integer.")
                .with_context("token", raw.trim().to_string()),
        )),
    }
}
