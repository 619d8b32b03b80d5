//! Building-blocks for arbitrary-precision math.
//!
//! These algorithms assume little-endian order for the large integer
//! buffers, so for a `vec![0, 1, 2, 3]`, `3` is the most significant limb,
//! and `0` is the least significant limb.
//!
//! Magnitudes handed to these functions are normalized (no leading zero
//! limbs) unless noted otherwise, and every function that returns or
//! modifies a magnitude leaves it normalized. Every buffer growth goes
//! through `limb::reserve`, so an allocation failure is reported instead of
//! aborting.

use crate::error::Result;
use crate::limb::{self, Limb, LimbVec, Wide, LIMB_BITS};
use crate::safe_mul::limb_mul;
use core::cmp;

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

pub(crate) mod scalar {
    use super::*;

    // ADDITION

    /// Add two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn add(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_add(y)
    }

    /// AddAssign two small integers and return if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let t = add(*x, y);
        *x = t.0;
        t.1
    }

    // SUBTRACTION

    /// Subtract two small integers and return the resulting value and if overflow happens.
    #[inline]
    pub fn sub(x: Limb, y: Limb) -> (Limb, bool) {
        x.overflowing_sub(y)
    }

    /// SubAssign two small integers and return if overflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let t = sub(*x, y);
        *x = t.0;
        t.1
    }

    // MULTIPLICATION

    /// Multiply two small integers (with carry) (and return the overflow contribution).
    ///
    /// Returns the (low, high) components.
    #[inline]
    pub fn mul(x: Limb, y: Limb, carry: Limb) -> (Limb, Limb) {
        // Cannot overflow: the largest product is `(B-1)^2 = (B-2)*B + 1`,
        // and adding a carry of at most `B-1` bumps the high limb to `B-1`.
        let (hi, lo) = limb_mul(x, y);
        let (lo, overflow) = lo.overflowing_add(carry);
        (lo, hi + overflow as Limb)
    }

    /// Multiply two small integers (with carry) (and return if overflow happens).
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let t = mul(*x, y, carry);
        *x = t.0;
        t.1
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

pub(crate) mod small {
    use super::*;

    // ADDITION

    /// Implied AddAssign implementation for adding a small integer to bigint.
    ///
    /// Allows us to choose a start-index in x to store, to allow incrementing
    /// from a non-zero start.
    pub fn iadd_impl(x: &mut LimbVec, y: Limb, xstart: usize) -> Result<()> {
        if x.len() <= xstart {
            if y != 0 {
                limb::resize(x, xstart, 0)?;
                limb::push(x, y)?;
            }
        } else {
            // Initial add
            let mut carry = scalar::iadd(&mut x[xstart], y);

            // Increment until overflow stops occurring.
            let mut size = xstart + 1;
            while carry && size < x.len() {
                carry = scalar::iadd(&mut x[size], 1);
                size += 1;
            }

            // If we overflowed the buffer entirely, need to add 1 to the end
            // of the buffer.
            if carry {
                limb::push(x, 1)?;
            }
        }
        Ok(())
    }

    /// AddAssign small integer to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVec, y: Limb) -> Result<()> {
        iadd_impl(x, y, 0)
    }

    // SUBTRACTION

    /// SubAssign small integer to bigint.
    /// Does not do overflowing subtraction.
    pub fn isub_impl(x: &mut LimbVec, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        // Initial subtraction
        let mut carry = scalar::isub(&mut x[xstart], y);

        // Decrement until overflow stops occurring.
        let mut size = xstart + 1;
        while carry && size < x.len() {
            carry = scalar::isub(&mut x[size], 1);
            size += 1;
        }
        normalize(x);
    }

    // MULTIPLICATION

    /// MulAssign small integer to bigint.
    pub fn imul(x: &mut LimbVec, y: Limb) -> Result<()> {
        if y == 0 {
            x.clear();
            return Ok(());
        }

        // Multiply iteratively over all elements, adding the carry each time.
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }

        // Overflow of value, add to end.
        if carry != 0 {
            limb::push(x, carry)?;
        }
        Ok(())
    }

    /// Mul small integer to bigint.
    #[inline]
    pub fn mul(x: &[Limb], y: Limb) -> Result<LimbVec> {
        let mut z = limb::try_alloc(x.len() + 1)?;
        z.extend_from_slice(x);
        imul(&mut z, y)?;
        Ok(z)
    }

    // DIVISION

    /// DivAssign small integer to bigint, returning the remainder.
    ///
    /// Never allocates.
    pub fn idivrem(x: &mut LimbVec, y: Limb) -> Limb {
        debug_assert!(y != 0, "idivrem() division by zero.");

        let divisor = y as Wide;
        let mut rem: Limb = 0;
        for xi in x.iter_mut().rev() {
            let num = ((rem as Wide) << LIMB_BITS) | *xi as Wide;
            *xi = (num / divisor) as Limb;
            rem = (num % divisor) as Limb;
        }
        normalize(x);
        rem
    }

    // BIT LENGTH

    /// Get number of leading zero bits in the storage.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(&top) => top.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Calculate the bit-length of the big-integer.
    #[inline]
    pub fn bit_length(x: &[Limb]) -> u64 {
        // Avoid overflowing, calculate via total number of bits
        // minus leading zero bits.
        let nlz = leading_zeros(x) as u64;
        (LIMB_BITS as u64) * (x.len() as u64) - nlz
    }

    // SHL

    /// Shift-left bits inside a buffer.
    ///
    /// Assumes `n < LIMB_BITS`, IE, internally shifting bits.
    pub fn ishl_bits(x: &mut LimbVec, n: usize) -> Result<()> {
        // Need to shift by the number of `bits % LIMB_BITS`.
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return Ok(());
        }

        // Internally, for each item, we shift left by n, and add the previous
        // right shifted limb-bits.
        // For example, we transform (for u8) shifted left 2, to:
        //      b10100100 b01000010
        //      b10 b10010001 b00001000
        let rshift = LIMB_BITS - n;
        let lshift = n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi <<= lshift;
            *xi |= prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            limb::push(x, carry)?;
        }
        Ok(())
    }

    /// Shift-left `n` limbs inside a buffer.
    #[inline]
    pub fn ishl_limbs(x: &mut LimbVec, n: usize) -> Result<()> {
        if n != 0 && !x.is_empty() {
            limb::reserve(x, n)?;
            x.splice(0..0, core::iter::repeat(0).take(n));
        }
        Ok(())
    }

    /// Shift-left buffer by n bits.
    #[inline]
    pub fn ishl(x: &mut LimbVec, n: usize) -> Result<()> {
        // Need to pad with zeros for the number of `bits / LIMB_BITS`,
        // and shift-left with carry for `bits % LIMB_BITS`.
        let rem = n % LIMB_BITS;
        let div = n / LIMB_BITS;
        ishl_bits(x, rem)?;
        ishl_limbs(x, div)
    }

    // SHR

    /// Shift-right buffer by n bits, discarding the shifted-out bits.
    ///
    /// Never allocates.
    pub fn ishr(x: &mut LimbVec, n: usize) {
        let div = n / LIMB_BITS;
        let rem = n % LIMB_BITS;
        if div >= x.len() {
            x.clear();
            return;
        }
        x.drain(..div);

        if rem != 0 {
            let lshift = LIMB_BITS - rem;
            let len = x.len();
            for i in 0..len {
                let next = if i + 1 < len { x[i + 1] } else { 0 };
                x[i] = (x[i] >> rem) | (next << lshift);
            }
        }
        normalize(x);
    }

    // NORMALIZE

    /// Normalize the container by popping any leading zeros.
    #[inline]
    pub fn normalize(x: &mut LimbVec) {
        while let Some(&0) = x.last() {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from a big integer.

pub(crate) mod large {
    use super::*;

    // RELATIVE OPERATORS

    /// Compare `x` to `y`, in little-endian order.
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        if x.len() > y.len() {
            cmp::Ordering::Greater
        } else if x.len() < y.len() {
            cmp::Ordering::Less
        } else {
            let iter = x.iter().rev().zip(y.iter().rev());
            for (&xi, &yi) in iter {
                if xi > yi {
                    return cmp::Ordering::Greater;
                } else if xi < yi {
                    return cmp::Ordering::Less;
                }
            }
            // Equal case.
            cmp::Ordering::Equal
        }
    }

    /// Check if x is less than y.
    #[inline]
    pub fn less(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) == cmp::Ordering::Less
    }

    /// Check if x is greater than or equal to y.
    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        !less(x, y)
    }

    // ADDITION

    /// Implied AddAssign implementation for bigints.
    ///
    /// Allows us to choose a start-index in x to store, so we can avoid
    /// padding the buffer with zeros when not needed, optimized for vectors.
    pub fn iadd_impl(x: &mut LimbVec, y: &[Limb], xstart: usize) -> Result<()> {
        // The effective x buffer is from `xstart..x.len()`, so we need to treat
        // that as the current range. If the effective y buffer is longer, need
        // to resize to that, + the start index.
        if x.len() < xstart + y.len() {
            limb::resize(x, xstart + y.len(), 0)?;
        }

        // Iteratively add elements from y to x.
        let mut carry = false;
        for (xi, yi) in x[xstart..].iter_mut().zip(y.iter()) {
            // Only one op of the two can overflow, since we added at max
            // Limb::MAX + Limb::MAX. Add the previous carry,
            // and store the current carry for the next.
            let mut tmp = scalar::iadd(xi, *yi);
            if carry {
                tmp |= scalar::iadd(xi, 1);
            }
            carry = tmp;
        }

        // Overflow from the previous bit.
        if carry {
            small::iadd_impl(x, 1, y.len() + xstart)?;
        }
        small::normalize(x);
        Ok(())
    }

    /// AddAssign bigint to bigint.
    #[inline]
    pub fn iadd(x: &mut LimbVec, y: &[Limb]) -> Result<()> {
        iadd_impl(x, y, 0)
    }

    /// Add bigint to bigint.
    pub fn add(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        let mut z = limb::try_alloc(cmp::max(x.len(), y.len()) + 1)?;
        z.extend_from_slice(x);
        iadd(&mut z, y)?;
        Ok(z)
    }

    // SUBTRACTION

    /// SubAssign bigint to bigint.
    ///
    /// Requires `x >= y`. Never allocates.
    pub fn isub(x: &mut LimbVec, y: &[Limb]) {
        // Basic underflow checks.
        debug_assert!(greater_equal(x, y));

        // Iteratively subtract elements of y from x.
        let mut carry = false;
        for (xi, yi) in x.iter_mut().zip(y.iter()) {
            let mut tmp = scalar::isub(xi, *yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }

    /// Sub bigint from bigint, requires `x >= y`.
    pub fn sub(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        let mut z = limb::try_copy(x)?;
        isub(&mut z, y);
        Ok(z)
    }

    // MULTIPLICATION

    /// Number of digits to bottom-out to asymptotically slow algorithms.
    ///
    /// Karatsuba tends to out-perform long-multiplication at ~320-640 bits,
    /// so we go halfway.
    pub const KARATSUBA_CUTOFF: usize = 32;

    /// Grade-school multiplication algorithm.
    ///
    /// Slow, naive algorithm, using limb-bit bases and just shifting left for
    /// each iteration. Works in O(n*m) time: each of the `m` iterations
    /// requires `n` multiplications and `n` additions.
    fn long_mul(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        // Using the immutable value, multiply by all the scalars in y, using
        // the algorithm defined above. Use a single buffer to avoid
        // frequent reallocations. Handle the first case to avoid a redundant
        // addition, since we know y.len() >= 1.
        let mut z = limb::try_alloc(x.len() + y.len())?;
        z.extend_from_slice(x);
        small::imul(&mut z, y[0])?;

        // Handle the iterative cases.
        for (i, &yi) in y[1..].iter().enumerate() {
            let zi = small::mul(x, yi)?;
            iadd_impl(&mut z, &zi, i + 1)?;
        }

        small::normalize(&mut z);
        Ok(z)
    }

    /// Split a buffer at `m`, into (lo, hi).
    #[inline]
    fn karatsuba_split(z: &[Limb], m: usize) -> (&[Limb], &[Limb]) {
        let m = cmp::min(m, z.len());
        (&z[..m], &z[m..])
    }

    /// Trim leading zero limbs off a borrowed slice.
    #[inline]
    fn trim(mut z: &[Limb]) -> &[Limb] {
        while let Some((&0, rest)) = z.split_last() {
            z = rest;
        }
        z
    }

    /// Karatsuba multiplication algorithm with roughly equal input sizes.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_mul(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        let (x, y) = (trim(x), trim(y));
        let (x, y) = if x.len() > y.len() { (y, x) } else { (x, y) };
        if x.is_empty() || y.is_empty() {
            Ok(LimbVec::new())
        } else if y.len() <= KARATSUBA_CUTOFF {
            // Bottom-out to long multiplication for small cases.
            long_mul(x, y)
        } else if x.len() < y.len() / 2 {
            karatsuba_uneven_mul(x, y)
        } else {
            // Do our 3 multiplications.
            let m = y.len() / 2;
            let (xl, xh) = karatsuba_split(x, m);
            let (yl, yh) = karatsuba_split(y, m);
            let sumx = add(trim(xl), xh)?;
            let sumy = add(trim(yl), yh)?;
            let z0 = karatsuba_mul_fwd(xl, yl)?;
            let mut z1 = karatsuba_mul_fwd(&sumx, &sumy)?;
            let z2 = karatsuba_mul_fwd(xh, yh)?;
            // Properly scale z1, which is `z1 - z2 - zo`.
            isub(&mut z1, &z2);
            isub(&mut z1, &z0);

            // Create our result, which is equal to, in little-endian order:
            // [z0, z1 - z2 - z0, z2]
            //  z1 must be shifted m digits (2^(W*m)) over.
            //  z2 must be shifted 2*m digits (2^(2*W*m)) over.
            let len = z0.len().max(m + z1.len()).max(2 * m + z2.len()) + 1;
            let mut result = limb::try_alloc(len)?;
            result.extend_from_slice(&z0);
            iadd_impl(&mut result, &z1, m)?;
            iadd_impl(&mut result, &z2, 2 * m)?;

            Ok(result)
        }
    }

    /// Karatsuba multiplication algorithm where y is substantially larger than x.
    ///
    /// Assumes `y.len() >= x.len()`.
    fn karatsuba_uneven_mul(x: &[Limb], mut y: &[Limb]) -> Result<LimbVec> {
        let mut result = limb::try_alloc(x.len() + y.len())?;
        result.resize(x.len() + y.len(), 0);

        // This effectively is like grade-school multiplication between
        // two numbers, except we're using splits on `y`, and the intermediate
        // step is a Karatsuba multiplication.
        let mut start = 0;
        while !y.is_empty() {
            let m = x.len().min(y.len());
            let (yl, yh) = karatsuba_split(y, m);
            let prod = karatsuba_mul_fwd(x, yl)?;
            iadd_impl(&mut result, &prod, start)?;
            y = yh;
            start += m;
        }
        small::normalize(&mut result);

        Ok(result)
    }

    /// Forwarder to the proper Karatsuba algorithm.
    #[inline]
    fn karatsuba_mul_fwd(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        if x.len() < y.len() {
            karatsuba_mul(x, y)
        } else {
            karatsuba_mul(y, x)
        }
    }

    /// Mul bigint to bigint.
    pub fn mul(x: &[Limb], y: &[Limb]) -> Result<LimbVec> {
        if x.is_empty() || y.is_empty() {
            Ok(LimbVec::new())
        } else if y.len() == 1 {
            small::mul(x, y[0])
        } else if x.len() == 1 {
            small::mul(y, x[0])
        } else {
            karatsuba_mul_fwd(x, y)
        }
    }

    // DIVISION

    /// Divide bigint by bigint, returning `(quotient, remainder)`.
    ///
    /// Uses Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) when the divisor has
    /// more than one limb. Requires a non-empty divisor.
    pub fn divrem(x: &[Limb], y: &[Limb]) -> Result<(LimbVec, LimbVec)> {
        debug_assert!(!y.is_empty(), "divrem() division by zero.");

        if less(x, y) {
            return Ok((LimbVec::new(), limb::try_copy(x)?));
        }
        if y.len() == 1 {
            let mut q = limb::try_copy(x)?;
            let r = small::idivrem(&mut q, y[0]);
            let mut rem = limb::try_alloc(1)?;
            if r != 0 {
                rem.push(r);
            }
            return Ok((q, rem));
        }

        let n = y.len();
        let m = x.len() - n;
        let base: Wide = 1 << LIMB_BITS;

        // D1. Normalize so the top limb of the divisor has its high bit set.
        let shift = y[n - 1].leading_zeros() as usize;
        let mut vn = limb::try_copy(y)?;
        small::ishl_bits(&mut vn, shift)?;
        debug_assert_eq!(vn.len(), n);
        let mut un = limb::try_alloc(x.len() + 1)?;
        un.extend_from_slice(x);
        small::ishl_bits(&mut un, shift)?;
        un.resize(x.len() + 1, 0);

        let mut q = limb::try_alloc(m + 1)?;
        q.resize(m + 1, 0);

        let vtop = vn[n - 1] as Wide;
        let vnext = vn[n - 2] as Wide;
        for j in (0..=m).rev() {
            // D3. Estimate the quotient limb from the top two limbs.
            let num = ((un[j + n] as Wide) << LIMB_BITS) | un[j + n - 1] as Wide;
            let mut qhat = num / vtop;
            let mut rhat = num % vtop;
            while qhat >= base || qhat * vnext > ((rhat << LIMB_BITS) | un[j + n - 2] as Wide) {
                qhat -= 1;
                rhat += vtop;
                if rhat >= base {
                    break;
                }
            }

            // D4. Multiply and subtract.
            let mut carry: Limb = 0;
            let mut borrow = false;
            for i in 0..n {
                let (lo, hi) = scalar::mul(qhat as Limb, vn[i], carry);
                carry = hi;
                let mut tmp = scalar::isub(&mut un[i + j], lo);
                if borrow {
                    tmp |= scalar::isub(&mut un[i + j], 1);
                }
                borrow = tmp;
            }
            let mut tmp = scalar::isub(&mut un[j + n], carry);
            if borrow {
                tmp |= scalar::isub(&mut un[j + n], 1);
            }

            // D5/D6. The estimate was one too large: add the divisor back.
            if tmp {
                qhat -= 1;
                let mut carry = false;
                for i in 0..n {
                    let mut c = scalar::iadd(&mut un[i + j], vn[i]);
                    if carry {
                        c |= scalar::iadd(&mut un[i + j], 1);
                    }
                    carry = c;
                }
                un[j + n] = un[j + n].wrapping_add(carry as Limb);
            }
            q[j] = qhat as Limb;
        }

        // D8. Unnormalize the remainder.
        un.truncate(n);
        small::normalize(&mut un);
        small::ishr(&mut un, shift);
        small::normalize(&mut q);
        Ok((q, un))
    }
}

pub(crate) use large::compare;

/// Top 64 bits of a magnitude, left-aligned, and the bit just below them.
///
/// Returns `(0, false)` for an empty magnitude.
pub(crate) fn hi64(x: &[Limb]) -> Result<(u64, bool)> {
    let bits = small::bit_length(x);
    if bits == 0 {
        return Ok((0, false));
    }
    if bits <= 64 {
        let (value, _) = limb::join_u128(x);
        return Ok(((value as u64) << (64 - bits), false));
    }
    let shift = (bits - 64) as usize;
    let next = x[(shift - 1) / LIMB_BITS] >> ((shift - 1) % LIMB_BITS) & 1 != 0;
    let mut top = limb::try_copy(x)?;
    small::ishr(&mut top, shift);
    let (value, _) = limb::join_u128(&top);
    Ok((value as u64, next))
}

// TESTS
// -----
