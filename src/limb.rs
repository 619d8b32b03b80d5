//! Limb configuration for the big integer kernel.
//!
//! The limb width is chosen once per build by `build.rs`, which emits
//! exactly one of the `limb_width_8`, `limb_width_16`, `limb_width_32` or
//! `limb_width_64` cfgs. Nothing outside the crate can observe the choice.

use crate::error::{Error, Result};
use alloc::vec::Vec;

// ALIASES
// -------

//  Type for a single limb of the big integer.
//
//  A limb is analogous to a digit in base10, except, it stores 8, 16,
//  32 or 64-bit numbers instead. `Wide` is twice as wide as a limb, and
//  is only used where a double-limb dividend is required.

// 8-BIT LIMB
#[cfg(limb_width_8)]
pub(crate) type Limb = u8;

#[cfg(limb_width_8)]
pub(crate) type Wide = u16;

#[cfg(limb_width_8)]
const POW5_LEN: usize = 4;

#[cfg(limb_width_8)]
const POW10_LEN: usize = 3;

// 16-BIT LIMB
#[cfg(limb_width_16)]
pub(crate) type Limb = u16;

#[cfg(limb_width_16)]
pub(crate) type Wide = u32;

#[cfg(limb_width_16)]
const POW5_LEN: usize = 7;

#[cfg(limb_width_16)]
const POW10_LEN: usize = 5;

// 32-BIT LIMB
#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) type Wide = u64;

#[cfg(limb_width_32)]
const POW5_LEN: usize = 14;

#[cfg(limb_width_32)]
const POW10_LEN: usize = 10;

// 64-BIT LIMB
#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) type Wide = u128;

#[cfg(limb_width_64)]
const POW5_LEN: usize = 28;

#[cfg(limb_width_64)]
const POW10_LEN: usize = 20;

/// Number of bits in a limb.
pub(crate) const LIMB_BITS: usize = Limb::BITS as usize;

/// Limb with every bit set, the sign extension of a negative value.
pub(crate) const LIMB_MAX: Limb = Limb::MAX;

/// Mask of the most significant bit of a limb.
pub(crate) const LIMB_HIGH_BIT: Limb = 1 << (LIMB_BITS - 1);

/// Owned little-endian limb buffer.
pub(crate) type LimbVec = Vec<Limb>;

// SMALL POWERS
// ------------

const fn small_powers<const N: usize>(base: Limb) -> [Limb; N] {
    let mut table = [1; N];
    let mut i = 1;
    while i < N {
        table[i] = table[i - 1] * base;
        i += 1;
    }
    table
}

/// Every power of five that fits in a single limb, `5^0` first.
pub(crate) const POW5_LIMB: [Limb; POW5_LEN] = small_powers(5);

/// Every power of ten that fits in a single limb, `10^0` first.
pub(crate) const POW10_LIMB: [Limb; POW10_LEN] = small_powers(10);

/// Largest number of decimal digits that always fits in one limb.
pub(crate) const DECIMAL_DIGITS_PER_LIMB: usize = POW10_LEN - 1;

// ALLOCATION
// ----------

/// Allocate an empty limb buffer with room for `capacity` limbs.
#[inline]
pub(crate) fn try_alloc(capacity: usize) -> Result<LimbVec> {
    let mut vec = LimbVec::new();
    reserve(&mut vec, capacity)?;
    Ok(vec)
}

/// Copy a limb slice into a freshly allocated buffer.
#[inline]
pub(crate) fn try_copy(x: &[Limb]) -> Result<LimbVec> {
    let mut vec = try_alloc(x.len())?;
    vec.extend_from_slice(x);
    Ok(vec)
}

/// Reserve room for `additional` more limbs.
#[inline]
pub(crate) fn reserve(vec: &mut LimbVec, additional: usize) -> Result<()> {
    vec.try_reserve(additional).map_err(|_| Error::alloc())
}

/// Resize the buffer to `len` limbs, filling with `value`.
#[inline]
pub(crate) fn resize(vec: &mut LimbVec, len: usize, value: Limb) -> Result<()> {
    if len > vec.len() {
        reserve(vec, len - vec.len())?;
    }
    vec.resize(len, value);
    Ok(())
}

/// Push a limb, growing the buffer fallibly.
#[inline]
pub(crate) fn push(vec: &mut LimbVec, value: Limb) -> Result<()> {
    reserve(vec, 1)?;
    vec.push(value);
    Ok(())
}

// NATIVE SPLIT
// ------------

/// Split a u128 into limbs, in little-endian order, without leading zeros.
pub(crate) fn split_u128(mut x: u128) -> LimbVec {
    let len = (128 - x.leading_zeros() as usize + LIMB_BITS - 1) / LIMB_BITS;
    let mut vec = LimbVec::with_capacity(len);
    while x != 0 {
        vec.push(x as Limb);
        x >>= LIMB_BITS;
    }
    vec
}

/// Join up to the low 128 bits of a little-endian limb slice.
///
/// Returns the joined bits and whether any set bit was dropped.
pub(crate) fn join_u128(x: &[Limb]) -> (u128, bool) {
    let mut value: u128 = 0;
    let mut truncated = false;
    for (i, &xi) in x.iter().enumerate() {
        let shift = i * LIMB_BITS;
        if shift >= 128 {
            truncated |= xi != 0;
        } else {
            value |= (xi as u128) << shift;
        }
    }
    (value, truncated)
}
