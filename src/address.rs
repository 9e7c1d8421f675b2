//! EVM address parsing and nominee-list splitting
//!
//! Addresses are 20-byte values written as 0x-prefixed hex. Nominee lists
//! arrive as a single comma-separated input field.

use crate::error::ConsoleError;
use alloy_primitives::Address;

/// Parse a 0x-prefixed hex string into an address.
pub fn parse_address(s: &str) -> Result<Address, ConsoleError> {
    let s = s.trim();
    let hex_part = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| ConsoleError::InvalidAddress(format!("{}: missing 0x prefix", s)))?;

    if hex_part.len() != 40 {
        return Err(ConsoleError::InvalidAddress(format!(
            "{}: expected 40 hex characters, got {}",
            s,
            hex_part.len()
        )));
    }

    let bytes = hex::decode(hex_part)
        .map_err(|e| ConsoleError::InvalidAddress(format!("{}: {}", s, e)))?;
    Ok(Address::from_slice(&bytes))
}

/// Split a comma-separated target list into trimmed, non-empty segments.
///
/// No address validation happens here; segments are returned verbatim so the
/// caller can report which entry failed to parse.
pub fn split_target_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Parse a comma-separated list of nominee addresses.
pub fn parse_target_list(input: &str) -> Result<Vec<Address>, ConsoleError> {
    split_target_list(input)
        .iter()
        .map(|s| parse_address(s))
        .collect()
}
