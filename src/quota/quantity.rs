// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decoding of Kubernetes resource quantities ("500m", "2Ki", "1e3") to integers.

use crate::constants::quantity::{BINARY_SUFFIXES, DECIMAL_SUFFIXES};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,

    #[error("invalid number in quantity '{0}'")]
    InvalidNumber(String),

    #[error("unknown suffix in quantity '{0}'")]
    UnknownSuffix(String),

    #[error("quantity '{0}' does not fit in a 64-bit integer")]
    OutOfRange(String),
}

/// Decode a quantity to its integer value in base units.
///
/// Fractional values are rounded up away from zero, so "500m" is 1 and
/// "-1.5" is -2.
pub fn quantity_value(quantity: &Quantity) -> Result<i64, QuantityError> {
    parse_quantity(&quantity.0)
}

pub fn parse_quantity(raw: &str) -> Result<i64, QuantityError> {
    if raw.is_empty() {
        return Err(QuantityError::Empty);
    }

    let (negative, unsigned) = match raw.as_bytes()[0] {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };

    let number_len = unsigned
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(unsigned.len());
    let (number, suffix) = unsigned.split_at(number_len);

    let digits =
        parse_digits(number).ok_or_else(|| QuantityError::InvalidNumber(raw.to_string()))?;
    let (binary_power, decimal_exponent) = parse_suffix(suffix, raw)?;

    let out_of_range = || QuantityError::OutOfRange(raw.to_string());

    // Apply the decimal exponent by moving the decimal point
    let point = digits.whole_len as i64 + i64::from(decimal_exponent);
    let split = point.clamp(0, digits.digits.len() as i64) as usize;
    let (whole, fraction) = digits.digits.split_at(split);

    let mut integer: u128 = 0;
    for d in whole {
        integer = integer
            .checked_mul(10)
            .and_then(|v| v.checked_add(u128::from(*d)))
            .ok_or_else(out_of_range)?;
    }
    if integer != 0 && point > digits.digits.len() as i64 {
        let shift = u32::try_from(point - digits.digits.len() as i64)
            .map_err(|_| out_of_range())?;
        integer = 10u128
            .checked_pow(shift)
            .and_then(|m| integer.checked_mul(m))
            .ok_or_else(out_of_range)?;
    }

    let multiplier = 1024u128.checked_pow(binary_power).ok_or_else(out_of_range)?;
    let leading_zeros = (-point).max(0) as u64;
    let (carry, has_remainder) = scale_fraction(fraction, leading_zeros, multiplier);

    let magnitude = integer
        .checked_mul(multiplier)
        .and_then(|v| v.checked_add(carry))
        .and_then(|v| v.checked_add(u128::from(has_remainder)))
        .ok_or_else(out_of_range)?;

    if negative {
        if magnitude > i64::MAX as u128 + 1 {
            return Err(out_of_range());
        }
        Ok((magnitude as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(magnitude).map_err(|_| out_of_range())
    }
}

struct Digits {
    /// Decimal digits of the number with the point removed
    digits: Vec<u8>,
    /// Count of digits before the point
    whole_len: usize,
}

fn parse_digits(number: &str) -> Option<Digits> {
    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let digits = whole
        .chars()
        .chain(fraction.chars())
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    Some(Digits {
        digits,
        whole_len: whole.len(),
    })
}

/// Multiply `0.<leading zeros><fraction>` by `multiplier`.
///
/// Returns the integer part of the product and whether a non-zero fractional
/// part is left over. Exact for any number of digits.
fn scale_fraction(fraction: &[u8], leading_zeros: u64, multiplier: u128) -> (u128, bool) {
    let mut carry: u128 = 0;
    let mut has_remainder = false;

    for d in fraction.iter().rev() {
        let t = u128::from(*d) * multiplier + carry;
        has_remainder |= t % 10 != 0;
        carry = t / 10;
    }

    // carry is below 10 * multiplier, so it drains within 40 zeros
    for _ in 0..leading_zeros.min(40) {
        has_remainder |= carry % 10 != 0;
        carry /= 10;
    }

    (carry, has_remainder)
}

/// Returns (power of 1024, power of 10) for a suffix.
fn parse_suffix(suffix: &str, raw: &str) -> Result<(u32, i32), QuantityError> {
    if let Some((_, power)) = BINARY_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Ok((*power, 0));
    }
    if let Some((_, power)) = DECIMAL_SUFFIXES.iter().find(|(s, _)| *s == suffix) {
        return Ok((0, *power));
    }

    // "E" alone is exa and matched above, "e3" / "E-2" are exponents
    if let Some(exponent) = suffix.strip_prefix(['e', 'E']) {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return exponent
                .parse::<i32>()
                .map(|e| (0, e))
                .map_err(|_| QuantityError::OutOfRange(raw.to_string()));
        }
    }

    Err(QuantityError::UnknownSuffix(raw.to_string()))
}
