//! Overflow-exact widening multiplication of native integers.
//!
//! Every function returns the full double-width product split into its high
//! and low halves, so the pair always represents the true product. The signed
//! variants additionally report whether the product fits in a single signed
//! value of the input width.
//!
//! ```
//! use exactint::{safe_mul_i64, safe_mul_u8};
//!
//! assert_eq!(safe_mul_u8(255, 2), (1, 254));
//! assert_eq!(safe_mul_i64(-1, -1), (false, 0, 1));
//! ```

use crate::limb::Limb;

macro_rules! safe_mul_unsigned {
    ($($name:ident: $t:ty => $wide:ty,)*) => ($(
        /// Multiply two unsigned integers, returning the `(high, low)` halves
        #[doc = concat!("of the exact product, so that `a * b == high * 2^", stringify!($t), "::BITS + low`.")]
        #[inline]
        pub fn $name(multiplier: $t, multiplicand: $t) -> ($t, $t) {
            let product = multiplier as $wide * multiplicand as $wide;
            ((product >> <$t>::BITS) as $t, product as $t)
        }
    )*)
}

safe_mul_unsigned! {
    safe_mul_u8: u8 => u16,
    safe_mul_u16: u16 => u32,
    safe_mul_u32: u32 => u64,
    safe_mul_u64: u64 => u128,
}

macro_rules! safe_mul_signed {
    ($($name:ident: $t:ty => $wide:ty,)*) => ($(
        /// Multiply two signed integers, returning `(overflow, high, low)`.
        ///
        /// `high` and `low` are the most and least significant halves of the
        /// exact two's-complement product, each reinterpreted as a signed
        /// value. `overflow` is set when `high` is not the sign extension of
        /// `low`, that is when the product does not fit in the input type.
        #[inline]
        pub fn $name(multiplier: $t, multiplicand: $t) -> (bool, $t, $t) {
            let product = multiplier as $wide * multiplicand as $wide;
            let high = (product >> <$t>::BITS) as $t;
            let low = product as $t;
            (high != low >> (<$t>::BITS - 1), high, low)
        }
    )*)
}

safe_mul_signed! {
    safe_mul_i8: i8 => i16,
    safe_mul_i16: i16 => i32,
    safe_mul_i32: i32 => i64,
    safe_mul_i64: i64 => i128,
}

/// Multiply two limbs, returning the `(high, low)` halves of the product.
#[inline]
pub(crate) fn limb_mul(x: Limb, y: Limb) -> (Limb, Limb) {
    #[cfg(limb_width_8)]
    return safe_mul_u8(x, y);

    #[cfg(limb_width_16)]
    return safe_mul_u16(x, y);

    #[cfg(limb_width_32)]
    return safe_mul_u32(x, y);

    #[cfg(limb_width_64)]
    return safe_mul_u64(x, y);
}
