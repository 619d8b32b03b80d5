//! Decimal text import and export.

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::limb::{self, Limb, LimbVec, DECIMAL_DIGITS_PER_LIMB, LIMB_BITS, POW10_LIMB};
use crate::math::small;
use alloc::string::String;
use core::fmt::{self, Debug, Display, Write};
use core::str::FromStr;

/// Largest power of ten that fits in a limb, the radix of a decimal chunk.
const CHUNK_RADIX: Limb = POW10_LIMB[DECIMAL_DIGITS_PER_LIMB];

fn write_decimal<W: Write>(negative: bool, chunks: &[Limb], w: &mut W) -> fmt::Result {
    let (top, rest) = match chunks.split_last() {
        Some(split) => split,
        None => return w.write_str("0"),
    };
    if negative {
        w.write_char('-')?;
    }
    let mut buffer = itoa::Buffer::new();
    w.write_str(buffer.format(*top))?;
    for &chunk in rest.iter().rev() {
        let digits = buffer.format(chunk);
        for _ in digits.len()..DECIMAL_DIGITS_PER_LIMB {
            w.write_char('0')?;
        }
        w.write_str(digits)?;
    }
    Ok(())
}

impl BigInt {
    /// Parse an optionally negative decimal integer.
    ///
    /// The text is an optional `-` followed by one or more ASCII digits.
    /// Leading zeros are accepted and `"-0"` is zero. Invalid bytes are
    /// reported with their one-based column.
    ///
    /// ```
    /// use exactint::BigInt;
    ///
    /// let x = BigInt::from_decimal_digits("9007199254740992")?;
    /// assert_eq!(x.to_u64(), Some(9007199254740992));
    ///
    /// let err = BigInt::from_decimal_digits("12x4").unwrap_err();
    /// assert_eq!(err.column(), 3);
    /// # Ok::<(), exactint::Error>(())
    /// ```
    pub fn from_decimal_digits(text: &str) -> Result<BigInt> {
        let bytes = text.as_bytes();
        let (sign, digits, offset) = match bytes.split_first() {
            Some((b'-', rest)) => (Sign::Negative, rest, 1),
            _ => (Sign::Positive, bytes, 0),
        };
        if digits.is_empty() {
            return Err(Error::invalid(ErrorCode::EmptyInput));
        }

        // Each digit adds a little under 4 bits.
        let mut mag = limb::try_alloc(digits.len() * 4 / LIMB_BITS + 1)?;
        for (index, chunk) in digits.chunks(DECIMAL_DIGITS_PER_LIMB).enumerate() {
            let mut value: Limb = 0;
            for (i, &b) in chunk.iter().enumerate() {
                let digit = b.wrapping_sub(b'0');
                if digit > 9 {
                    let column = offset + index * DECIMAL_DIGITS_PER_LIMB + i + 1;
                    return Err(Error::at_column(ErrorCode::InvalidDigit, column));
                }
                value = value * 10 + digit as Limb;
            }
            small::imul(&mut mag, POW10_LIMB[chunk.len()])?;
            small::iadd(&mut mag, value)?;
        }
        Ok(BigInt::from_magnitude(sign, mag))
    }

    /// Split the magnitude into base `10^DECIMAL_DIGITS_PER_LIMB` chunks,
    /// least significant first. Zero has no chunks.
    fn decimal_chunks(&self) -> Result<LimbVec> {
        let mut mag = limb::try_copy(self.magnitude())?;
        // Each chunk holds more than 3 bits per digit.
        let estimate = self.bit_length() as usize / (3 * DECIMAL_DIGITS_PER_LIMB) + 1;
        let mut chunks = limb::try_alloc(estimate)?;
        while !mag.is_empty() {
            let rem = small::idivrem(&mut mag, CHUNK_RADIX);
            limb::push(&mut chunks, rem)?;
        }
        Ok(chunks)
    }

    /// Canonical decimal text: no leading zeros, a `-` only for negative
    /// values, and `"0"` for zero.
    pub fn to_decimal_string(&self) -> Result<String> {
        let chunks = self.decimal_chunks()?;
        let mut text = String::new();
        text.try_reserve(chunks.len() * DECIMAL_DIGITS_PER_LIMB + 1)
            .map_err(|_| Error::alloc())?;
        write_decimal(self.is_negative(), &chunks, &mut text)
            .map_err(|_| Error::alloc())?;
        Ok(text)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt> {
        BigInt::from_decimal_digits(s)
    }
}

/// Formats the value in decimal.
///
/// An allocation failure while converting surfaces as [`fmt::Error`], which
/// makes `ToString::to_string` panic. Use [`BigInt::to_decimal_string`] when
/// the failure must be reported as an [`Error`].
///
/// ```
/// use exactint::BigInt;
///
/// let x = BigInt::from(-1234567890123456789i64);
/// assert_eq!(format!("{}", x), x.to_decimal_string()?);
/// # Ok::<(), exactint::Error>(())
/// ```
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chunks = self.decimal_chunks().map_err(|_| fmt::Error)?;
        write_decimal(self.is_negative(), &chunks, f)
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn parse_test() {
        assert!(BigInt::from_decimal_digits("0").unwrap().is_zero());
        assert!(BigInt::from_decimal_digits("-000").unwrap().is_zero());
        assert_eq!(BigInt::from_decimal_digits("007").unwrap(), BigInt::from(7));
        assert_eq!(
            BigInt::from_decimal_digits("-170141183460469231731687303715884105728").unwrap(),
            BigInt::from(i128::MIN)
        );
        assert_eq!(
            "340282366920938463463374607431768211455".parse::<BigInt>().unwrap(),
            BigInt::from(u128::MAX)
        );
    }

    #[test]
    fn parse_error_test() {
        for text in &["", "-"] {
            let err = BigInt::from_decimal_digits(text).unwrap_err();
            assert_eq!(*err.code(), ErrorCode::EmptyInput);
        }

        let err = BigInt::from_decimal_digits("-12a").unwrap_err();
        assert_eq!(*err.code(), ErrorCode::InvalidDigit);
        assert_eq!(err.column(), 4);

        let err = BigInt::from_decimal_digits("+1").unwrap_err();
        assert_eq!(err.column(), 1);

        let err = BigInt::from_decimal_digits("--1").unwrap_err();
        assert_eq!(err.column(), 2);

        let long = "1".repeat(DECIMAL_DIGITS_PER_LIMB * 3) + " ";
        let err = BigInt::from_decimal_digits(&long).unwrap_err();
        assert_eq!(err.column(), DECIMAL_DIGITS_PER_LIMB * 3 + 1);
    }

    #[test]
    fn format_test() {
        assert_eq!(BigInt::zero().to_string(), "0");
        assert_eq!(BigInt::from(-42).to_string(), "-42");
        assert_eq!(BigInt::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(BigInt::from(i128::MIN).to_string(), i128::MIN.to_string());
        assert_eq!(format!("{:?}", BigInt::from(-7)), "BigInt(-7)");

        // Inner chunks keep their leading zeros.
        let x = BigInt::from(10u128.pow(DECIMAL_DIGITS_PER_LIMB as u32 * 2));
        assert_eq!(x.to_decimal_string().unwrap(), x.to_string());
        assert_eq!(x.to_string().len(), DECIMAL_DIGITS_PER_LIMB * 2 + 1);
    }
}
