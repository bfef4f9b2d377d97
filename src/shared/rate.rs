//! Rate input parsing.
//!
//! Rates arrive as user-typed strings from the presentation layer. Spanish
//! locales type `0,05` where others type `0.05`; the comma form is normalized
//! here as explicit input handling, never via locale-dependent runtime
//! behavior.

use crate::error::MeterError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a user-entered per-tick rate.
///
/// Accepts both `.` and `,` as the decimal separator. The value must be
/// strictly positive.
pub fn parse_rate(input: &str) -> Result<Decimal, MeterError> {
    let normalized = input.trim().replace(',', ".");
    let value = Decimal::from_str(&normalized).map_err(|e| MeterError::InvalidRate {
        input: input.to_string(),
        reason: e.to_string(),
    })?;
    if value <= Decimal::ZERO {
        return Err(MeterError::InvalidRate {
            input: input.to_string(),
            reason: "rate must be positive".to_string(),
        });
    }
    Ok(value)
}
