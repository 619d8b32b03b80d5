//! Exact powers of two, five and ten, and general exponentiation.

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::limb::{self, Limb, LimbVec, LIMB_BITS, POW5_LIMB};
use crate::math::{large, small};
use core::mem;

/// Above this many multiplications by the largest single-limb power of five,
/// 5^e is computed by squaring instead, which lets Karatsuba kick in.
const POW5_SQUARING_CUTOFF: usize = 64;

/// Validate an exponent whose result has at most `bits_per_unit` bits per
/// unit of exponent.
fn exponent(e: i64, bits_per_unit: u64) -> Result<usize> {
    if e < 0 {
        return Err(Error::invalid(ErrorCode::NegativeExponent));
    }
    let max_limbs = (isize::MAX as usize / mem::size_of::<Limb>()) as u64;
    let fits = (e as u64)
        .checked_mul(bits_per_unit)
        .map_or(false, |bits| bits / LIMB_BITS as u64 + 1 <= max_limbs);
    match usize::try_from(e) {
        Ok(e) if fits => Ok(e),
        _ => Err(Error::invalid(ErrorCode::ExponentTooLarge)),
    }
}

/// Raise a magnitude to a power by repeated squaring.
fn pow_magnitude(base: &[Limb], mut e: usize) -> Result<LimbVec> {
    let mut result = limb::try_alloc(1)?;
    result.push(1);
    let mut base = limb::try_copy(base)?;
    while e != 0 {
        if e & 1 != 0 {
            result = large::mul(&result, &base)?;
        }
        e >>= 1;
        if e != 0 {
            base = large::mul(&base, &base)?;
        }
    }
    Ok(result)
}

fn pow5_magnitude(e: usize) -> Result<LimbVec> {
    let step = POW5_LIMB.len() - 1;
    if e / step > POW5_SQUARING_CUTOFF {
        tracing::trace!(exponent = e, strategy = "squaring", "power of five");
        return pow_magnitude(&[5], e);
    }

    tracing::trace!(exponent = e, strategy = "small powers", "power of five");
    let mut mag = limb::try_alloc(e / step + 2)?;
    mag.push(1);
    let mut rest = e;
    while rest >= step {
        small::imul(&mut mag, POW5_LIMB[step])?;
        rest -= step;
    }
    small::imul(&mut mag, POW5_LIMB[rest])?;
    Ok(mag)
}

impl BigInt {
    /// Exactly `2^e`.
    ///
    /// Fails with `NegativeExponent` when `e < 0`, and with
    /// `ExponentTooLarge` when the result could not be stored.
    pub fn power_of_two(e: i64) -> Result<BigInt> {
        let e = exponent(e, 1)?;
        let mut mag = limb::try_alloc(e / LIMB_BITS + 1)?;
        mag.push(1);
        small::ishl(&mut mag, e)?;
        Ok(BigInt::from_magnitude(Sign::Positive, mag))
    }

    /// Exactly `5^e`.
    ///
    /// ```
    /// use exactint::BigInt;
    ///
    /// assert_eq!(BigInt::power_of_five(4)?, BigInt::from(625));
    /// # Ok::<(), exactint::Error>(())
    /// ```
    pub fn power_of_five(e: i64) -> Result<BigInt> {
        let e = exponent(e, 3)?;
        Ok(BigInt::from_magnitude(Sign::Positive, pow5_magnitude(e)?))
    }

    /// Exactly `10^e`, computed as `5^e * 2^e`.
    pub fn power_of_ten(e: i64) -> Result<BigInt> {
        let e = exponent(e, 4)?;
        let mut mag = pow5_magnitude(e)?;
        small::ishl(&mut mag, e)?;
        Ok(BigInt::from_magnitude(Sign::Positive, mag))
    }

    /// Replace `self` with `2^e`. On error `self` is unchanged.
    pub fn set_power_of_two(&mut self, e: i64) -> Result<()> {
        *self = BigInt::power_of_two(e)?;
        Ok(())
    }

    /// Replace `self` with `5^e`. On error `self` is unchanged.
    pub fn set_power_of_five(&mut self, e: i64) -> Result<()> {
        *self = BigInt::power_of_five(e)?;
        Ok(())
    }

    /// Replace `self` with `10^e`. On error `self` is unchanged.
    pub fn set_power_of_ten(&mut self, e: i64) -> Result<()> {
        *self = BigInt::power_of_ten(e)?;
        Ok(())
    }

    /// Raise `self` to the power `e`. `x.pow(0)` is one for every `x`.
    pub fn pow(&self, e: u32) -> Result<BigInt> {
        if e == 0 {
            return Ok(BigInt::from(1u8));
        }
        let sign = match self.sign() {
            Sign::Negative if e % 2 == 0 => Sign::Positive,
            sign => sign,
        };
        if sign == Sign::Zero {
            return Ok(BigInt::zero());
        }
        let mag = pow_magnitude(self.magnitude(), e as usize)?;
        Ok(BigInt::from_magnitude(sign, mag))
    }

    /// Number of bits needed to represent the magnitude, 0 for zero.
    ///
    /// ```
    /// use exactint::BigInt;
    ///
    /// assert_eq!(BigInt::from(0).bit_length(), 0);
    /// assert_eq!(BigInt::from(-255).bit_length(), 8);
    /// assert_eq!(BigInt::from(256).bit_length(), 9);
    /// ```
    #[inline]
    pub fn bit_length(&self) -> u64 {
        small::bit_length(self.magnitude())
    }
}
