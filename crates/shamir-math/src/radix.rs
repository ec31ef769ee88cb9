//! Base-N numerals.
//!
//! Digits are `0`-`9` followed by `a`-`z` (case-insensitive), so the largest
//! supported base is 36.

use crate::{Error, Result};
use num_bigint::BigUint;

/// Smallest supported numeral base.
pub const MIN_BASE: u32 = 2;

/// Largest supported numeral base.
pub const MAX_BASE: u32 = 36;

fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

/// Decodes `raw` as a base-`base` numeral.
///
/// Unlike [`BigUint::parse_bytes`], signs and `_` separators are rejected:
/// every character must be a digit of `base`.
pub fn decode_value(raw: &str, base: u32) -> Result<BigUint> {
    check_base(base)?;
    if raw.is_empty() {
        return Err(Error::EmptyValue);
    }
    let digits = raw
        .chars()
        .map(|digit| {
            digit
                .to_digit(base)
                .map(|d| d as u8)
                .ok_or(Error::InvalidDigit { digit, base })
        })
        .collect::<Result<Vec<u8>>>()?;
    BigUint::from_radix_be(&digits, base).ok_or(Error::InvalidBase(base))
}

/// Encodes `value` as a lower-case base-`base` numeral.
pub fn encode_value(value: &BigUint, base: u32) -> Result<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}
