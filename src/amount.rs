//! Decimal amount parsing and percentage encoding
//!
//! Token amounts are fixed-point integers scaled by 10^18 (ZTC has 18
//! decimals). Validator commission is a perbill: an integer fraction of
//! one billion where 1_000_000_000 represents 100%.

use crate::error::ConsoleError;
use alloy_primitives::U256;

/// One billion, the perbill denominator.
pub const PERBILL_DENOMINATOR: u32 = 1_000_000_000;

/// Parse a non-negative decimal string into a fixed-point integer.
///
/// An empty string parses to zero. More fractional digits than `decimals`
/// allows is rejected rather than truncated, so no entered value is ever
/// silently rounded down.
///
/// # Arguments
/// * `s` - Decimal string, e.g. "50" or "1.25"
/// * `decimals` - Scale of the fixed point (18 for ZTC)
pub fn to_fixed_point(s: &str, decimals: u8) -> Result<U256, ConsoleError> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(U256::ZERO);
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ConsoleError::InvalidAmount(s.to_string()));
    }
    if !int_part.chars().all(|c| c.is_ascii_digit())
        || !frac_part.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ConsoleError::InvalidAmount(s.to_string()));
    }
    if frac_part.len() > decimals as usize {
        return Err(ConsoleError::InvalidAmount(format!(
            "{} has more than {} fractional digits",
            s, decimals
        )));
    }

    let scale = U256::from(10u8).pow(U256::from(decimals));
    let int_value = parse_digits(int_part)?;
    let frac_scale = U256::from(10u8).pow(U256::from(decimals as usize - frac_part.len()));
    let frac_value = parse_digits(frac_part)?;

    int_value
        .checked_mul(scale)
        .and_then(|v| v.checked_add(frac_value * frac_scale))
        .ok_or_else(|| ConsoleError::InvalidAmount(format!("{} overflows", s)))
}

/// Render a fixed-point integer back to a decimal string.
///
/// Trailing fractional zeros are stripped; whole values render without a
/// decimal point. Re-parsing the output yields the same integer.
pub fn format_fixed_point(value: U256, decimals: u8) -> String {
    let scale = U256::from(10u8).pow(U256::from(decimals));
    let int_part = value / scale;
    let frac_part = value % scale;

    if frac_part.is_zero() {
        return int_part.to_string();
    }

    let frac_str = format!("{:0>width$}", frac_part, width = decimals as usize);
    format!("{}.{}", int_part, frac_str.trim_end_matches('0'))
}

/// Convert a percentage to a perbill fraction.
///
/// Fails closed: non-finite input or anything outside [0, 100] yields 0.
/// The result is always in [0, 1_000_000_000].
pub fn percentage_to_perbill(pct: f64) -> u32 {
    if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
        return 0;
    }
    (pct * 10_000_000.0).round() as u32
}

fn parse_digits(digits: &str) -> Result<U256, ConsoleError> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10)
        .map_err(|_| ConsoleError::InvalidAmount(digits.to_string()))
}
