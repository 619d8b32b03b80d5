//! Power-of-ten lookup tables for binary-float to decimal conversion.
//!
//! Each entry approximates `10^e` as a 64-bit normalized mantissa and a
//! binary exponent, rounded to nearest with ties away from zero. The tables
//! are what float parsers and printers index by decimal exponent.
//!
//! ```
//! use exactint::table::{power_of_ten_entry, ExtendedFloat};
//!
//! let entry = power_of_ten_entry(-1)?;
//! assert_eq!(entry, ExtendedFloat { mant: 0xCCCC_CCCC_CCCC_CCCD, exp: -67 });
//! # Ok::<(), exactint::Error>(())
//! ```

use crate::bigint::BigInt;
use crate::error::{Error, ErrorCode, Result};
use crate::math::hi64;
use alloc::vec::Vec;
use core::ops::RangeInclusive;

/// A value `mant * 2^exp` with the top bit of `mant` set.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExtendedFloat {
    /// Normalized 64-bit mantissa.
    pub mant: u64,
    /// Binary exponent.
    pub exp: i32,
}

impl ExtendedFloat {
    /// Round a positive big integer, scaled by `2^scale`, to 64 bits.
    fn round(value: &BigInt, scale: i64) -> Result<ExtendedFloat> {
        debug_assert!(value.is_positive());
        let bits = value.bit_length() as i64;
        let (mut mant, round_up) = hi64(value.magnitude())?;
        let mut exp = bits - 64 + scale;
        if round_up {
            mant = match mant.checked_add(1) {
                Some(mant) => mant,
                None => {
                    exp += 1;
                    1 << 63
                }
            };
        }
        let exp = i32::try_from(exp).map_err(|_| Error::invalid(ErrorCode::ExponentTooLarge))?;
        Ok(ExtendedFloat { mant, exp })
    }
}

/// Compute the table entry for `10^e`.
///
/// Non-negative exponents take the top 64 bits of the exact power. Negative
/// exponents divide a power of two by `10^-e`, with the power chosen so the
/// quotient carries 65 significant bits and the last one decides rounding.
pub fn power_of_ten_entry(e: i32) -> Result<ExtendedFloat> {
    if e >= 0 {
        let value = BigInt::power_of_ten(e as i64)?;
        return ExtendedFloat::round(&value, 0);
    }

    let divisor = BigInt::power_of_ten(-(e as i64))?;
    let k = divisor.bit_length() + 64;
    let dividend = BigInt::power_of_two(k as i64)?;
    let quotient = dividend.div(&divisor)?;
    ExtendedFloat::round(&quotient, -(k as i64))
}

/// Compute the entries for every exponent in `range`, lowest first.
#[tracing::instrument(skip_all, level = "debug")]
pub fn power_of_ten_table(range: RangeInclusive<i32>) -> Result<Vec<ExtendedFloat>> {
    let (start, end) = (*range.start(), *range.end());
    tracing::debug!(start, end, "generating power of ten table");

    let len = if end >= start { (end as i64 - start as i64 + 1) as usize } else { 0 };
    let mut table = Vec::new();
    table.try_reserve(len).map_err(|_| Error::alloc())?;
    for e in range {
        table.push(power_of_ten_entry(e)?);
    }
    Ok(table)
}
