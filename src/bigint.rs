//! The sign-magnitude big integer type.

use crate::error::{Error, ErrorCode, Result};
use crate::limb::{self, Limb, LimbVec, LIMB_BITS};
use crate::math::{self, large, small};
use core::cmp::Ordering;
use core::ops::Neg;

/// Sign of a [`BigInt`].
///
/// The variants are declared in numeric order, so `Negative < Zero <
/// Positive` under the derived ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    /// The value is less than zero.
    Negative,
    /// The value is zero.
    Zero,
    /// The value is greater than zero.
    Positive,
}

impl Sign {
    /// Sign of the product of two values with these signs.
    #[inline]
    pub(crate) fn product(self, other: Sign) -> Sign {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (a, b) if a == b => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// An arbitrary-precision integer stored in sign-magnitude form.
///
/// The magnitude is a little-endian sequence of machine words. Zero is always
/// represented by `Sign::Zero` and an empty magnitude, and a non-zero value
/// never carries leading zero words, so two `BigInt`s are equal exactly when
/// their values are equal.
///
/// Every fallible operation computes its result into a fresh buffer and
/// only then moves it into place. If an allocation fails, the operands and
/// the destination are left untouched.
///
/// ```
/// use exactint::BigInt;
///
/// let a = BigInt::from(-1);
/// let b = BigInt::from(5);
/// assert_eq!(a.bitand(&b)?, b);
/// assert_eq!(a.bitor(&b)?, a);
/// # Ok::<(), exactint::Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    mag: LimbVec,
}

impl BigInt {
    /// The value zero. Does not allocate.
    #[inline]
    pub const fn zero() -> Self {
        BigInt {
            sign: Sign::Zero,
            mag: LimbVec::new(),
        }
    }

    /// Build a value from a magnitude, normalizing it first. `sign` is
    /// ignored when the magnitude turns out to be zero.
    pub(crate) fn from_magnitude(sign: Sign, mut mag: LimbVec) -> Self {
        small::normalize(&mut mag);
        let value = if mag.is_empty() || sign == Sign::Zero {
            BigInt::zero()
        } else {
            BigInt { sign, mag }
        };
        value.check_invariants();
        value
    }

    #[inline]
    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.mag
    }

    #[inline]
    pub(crate) fn check_invariants(&self) {
        debug_assert_eq!(
            self.sign == Sign::Zero,
            self.mag.is_empty(),
            "sign and magnitude disagree about zero"
        );
        debug_assert!(
            self.mag.last() != Some(&0),
            "magnitude has a leading zero limb"
        );
    }

    // PROPERTIES

    /// Returns the sign of the value.
    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    /// Returns true if the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Returns true if the value is strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    // RELATIVE OPERATIONS

    /// Compare the absolute values of `self` and `other`.
    #[inline]
    pub fn compare_magnitudes(&self, other: &BigInt) -> Ordering {
        math::compare(&self.mag, &other.mag)
    }

    /// Signed three-way comparison.
    ///
    /// Values of different sign compare by sign, with zero between the
    /// negatives and the positives.
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Zero => Ordering::Equal,
                Sign::Positive => self.compare_magnitudes(other),
                Sign::Negative => other.compare_magnitudes(self),
            },
            ordering => ordering,
        }
    }

    // COPY

    /// Deep copy, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<BigInt> {
        Ok(BigInt {
            sign: self.sign,
            mag: limb::try_copy(&self.mag)?,
        })
    }

    /// Overwrite `self` with a deep copy of `src`.
    ///
    /// On allocation failure `self` keeps its previous value.
    pub fn copy_from(&mut self, src: &BigInt) -> Result<()> {
        let mag = limb::try_copy(&src.mag)?;
        self.sign = src.sign;
        self.mag = mag;
        Ok(())
    }

    /// Set the value to zero, releasing the word buffer.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = BigInt::zero();
    }

    /// Negate the value in place. Never allocates.
    #[inline]
    pub fn negate(&mut self) {
        self.sign = -self.sign;
    }

    /// Absolute value.
    pub fn abs(&self) -> Result<BigInt> {
        let mut value = self.try_clone()?;
        if value.is_negative() {
            value.negate();
        }
        Ok(value)
    }

    // ADDITION

    fn add_signed(&self, other: &BigInt, other_sign: Sign) -> Result<BigInt> {
        match (self.sign, other_sign) {
            (_, Sign::Zero) => self.try_clone(),
            (Sign::Zero, _) => Ok(BigInt {
                sign: other_sign,
                mag: limb::try_copy(&other.mag)?,
            }),
            (a, b) if a == b => Ok(BigInt::from_magnitude(a, large::add(&self.mag, &other.mag)?)),
            (a, b) => match large::compare(&self.mag, &other.mag) {
                Ordering::Equal => Ok(BigInt::zero()),
                Ordering::Greater => Ok(BigInt::from_magnitude(a, large::sub(&self.mag, &other.mag)?)),
                Ordering::Less => Ok(BigInt::from_magnitude(b, large::sub(&other.mag, &self.mag)?)),
            },
        }
    }

    /// Sum of `self` and `other`.
    pub fn add(&self, other: &BigInt) -> Result<BigInt> {
        self.add_signed(other, other.sign)
    }

    /// Replace `self` with `self + other`.
    pub fn add_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = self.add(other)?;
        Ok(())
    }

    // SUBTRACTION

    /// Difference of `self` and `other`.
    pub fn sub(&self, other: &BigInt) -> Result<BigInt> {
        self.add_signed(other, -other.sign)
    }

    /// Replace `self` with `self - other`.
    pub fn sub_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = self.sub(other)?;
        Ok(())
    }

    // MULTIPLICATION

    /// Product of `self` and `other`.
    pub fn mul(&self, other: &BigInt) -> Result<BigInt> {
        let sign = self.sign.product(other.sign);
        if sign == Sign::Zero {
            return Ok(BigInt::zero());
        }
        Ok(BigInt::from_magnitude(sign, large::mul(&self.mag, &other.mag)?))
    }

    /// Replace `self` with `self * other`.
    pub fn mul_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = self.mul(other)?;
        Ok(())
    }

    // DIVISION

    /// Truncating division, returning `(quotient, remainder)`.
    ///
    /// The quotient is rounded toward zero and the remainder takes the sign
    /// of the dividend, so `self == quotient * other + remainder`.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(Error::invalid(ErrorCode::DivisionByZero));
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }
        let (q, r) = large::divrem(&self.mag, &other.mag)?;
        Ok((
            BigInt::from_magnitude(self.sign.product(other.sign), q),
            BigInt::from_magnitude(self.sign, r),
        ))
    }

    /// Quotient of truncating division.
    pub fn div(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Remainder of truncating division.
    pub fn rem(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(_, r)| r)
    }

    // SHIFTS

    /// Multiply the magnitude by `2^bits`.
    pub fn shl(&self, bits: usize) -> Result<BigInt> {
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let mut mag = limb::try_alloc(self.mag.len() + bits / LIMB_BITS + 1)?;
        mag.extend_from_slice(&self.mag);
        small::ishl(&mut mag, bits)?;
        Ok(BigInt::from_magnitude(self.sign, mag))
    }

    /// Replace `self` with `self << bits`.
    pub fn shl_assign(&mut self, bits: usize) -> Result<()> {
        *self = self.shl(bits)?;
        Ok(())
    }

    /// Divide the magnitude by `2^bits`, rounding toward zero.
    pub fn shr(&self, bits: usize) -> Result<BigInt> {
        let mut mag = limb::try_copy(&self.mag)?;
        small::ishr(&mut mag, bits);
        Ok(BigInt::from_magnitude(self.sign, mag))
    }

    /// Replace `self` with `self >> bits`. Never allocates.
    pub fn shr_assign(&mut self, bits: usize) {
        small::ishr(&mut self.mag, bits);
        if self.mag.is_empty() {
            self.sign = Sign::Zero;
        }
        self.check_invariants();
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

impl Ord for BigInt {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negate();
        self
    }
}

// NATIVE CONVERSIONS
// ------------------

impl BigInt {
    fn from_u128_parts(sign: Sign, value: u128) -> BigInt {
        BigInt::from_magnitude(sign, limb::split_u128(value))
    }

    /// Low 128 bits of the two's-complement encoding.
    fn wrapping_u128(&self) -> u128 {
        let (value, _) = limb::join_u128(&self.mag);
        if self.is_negative() {
            value.wrapping_neg()
        } else {
            value
        }
    }

    /// Returns the value as u128 if it fits, or else None.
    pub fn to_u128(&self) -> Option<u128> {
        match self.sign {
            Sign::Negative => None,
            Sign::Zero => Some(0),
            Sign::Positive => match limb::join_u128(&self.mag) {
                (value, false) => Some(value),
                (_, true) => None,
            },
        }
    }

    /// Returns the value as i128 if it fits, or else None.
    pub fn to_i128(&self) -> Option<i128> {
        let (value, truncated) = limb::join_u128(&self.mag);
        if truncated {
            return None;
        }
        match self.sign {
            Sign::Zero => Some(0),
            Sign::Positive => i128::try_from(value).ok(),
            Sign::Negative if value <= 1 << 127 => Some((value as i128).wrapping_neg()),
            Sign::Negative => None,
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty)*) => ($(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                BigInt::from_u128_parts(Sign::Positive, value as u128)
            }
        }
    )*)
}

from_unsigned!(u8 u16 u32 u64 u128 usize);

macro_rules! from_signed {
    ($($t:ty)*) => ($(
        impl From<$t> for BigInt {
            #[inline]
            fn from(value: $t) -> Self {
                let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
                BigInt::from_u128_parts(sign, value.unsigned_abs() as u128)
            }
        }
    )*)
}

from_signed!(i8 i16 i32 i64 i128 isize);

macro_rules! to_native_exact {
    ($($method:ident: $t:ty => $via:ident,)*) => {
        impl BigInt {
            $(
                #[doc = concat!("Returns the value as ", stringify!($t), " if it fits, or else None.")]
                #[inline]
                pub fn $method(&self) -> Option<$t> {
                    self.$via().and_then(|value| <$t>::try_from(value).ok())
                }
            )*
        }
    };
}

to_native_exact! {
    to_u8: u8 => to_u128,
    to_u16: u16 => to_u128,
    to_u32: u32 => to_u128,
    to_u64: u64 => to_u128,
    to_usize: usize => to_u128,
    to_i8: i8 => to_i128,
    to_i16: i16 => to_i128,
    to_i32: i32 => to_i128,
    to_i64: i64 => to_i128,
    to_isize: isize => to_i128,
}

macro_rules! to_native_wrapping {
    ($($method:ident: $t:ty => $exact:ident,)*) => {
        impl BigInt {
            $(
                #[doc = concat!("Returns the value modulo 2^", stringify!($t), "::BITS in two's complement,")]
                /// and whether the truncation changed the value.
                #[inline]
                pub fn $method(&self) -> ($t, bool) {
                    let value = self.wrapping_u128() as $t;
                    (value, self.$exact() != Some(value))
                }
            )*
        }
    };
}

to_native_wrapping! {
    to_u8_wrapping: u8 => to_u8,
    to_u16_wrapping: u16 => to_u16,
    to_u32_wrapping: u32 => to_u32,
    to_u64_wrapping: u64 => to_u64,
    to_u128_wrapping: u128 => to_u128,
    to_usize_wrapping: usize => to_usize,
    to_i8_wrapping: i8 => to_i8,
    to_i16_wrapping: i16 => to_i16,
    to_i32_wrapping: i32 => to_i32,
    to_i64_wrapping: i64 => to_i64,
    to_i128_wrapping: i128 => to_i128,
    to_isize_wrapping: isize => to_isize,
}

macro_rules! try_from_bigint {
    ($($t:ty => $exact:ident,)*) => ($(
        impl TryFrom<&BigInt> for $t {
            type Error = Error;

            fn try_from(value: &BigInt) -> Result<$t> {
                value
                    .$exact()
                    .ok_or_else(|| Error::invalid(ErrorCode::NumberOutOfRange))
            }
        }
    )*)
}

try_from_bigint! {
    u8 => to_u8,
    u16 => to_u16,
    u32 => to_u32,
    u64 => to_u64,
    u128 => to_u128,
    usize => to_usize,
    i8 => to_i8,
    i16 => to_i16,
    i32 => to_i32,
    i64 => to_i64,
    i128 => to_i128,
    isize => to_isize,
}
