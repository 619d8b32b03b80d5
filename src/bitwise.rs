//! Bitwise logic with two's-complement semantics.
//!
//! Values are stored in sign-magnitude form, so each operand is encoded to
//! two's complement, the shorter one is extended with the fill word of its
//! sign, the words are combined, and the result is decoded again.

use crate::bigint::BigInt;
use crate::error::Result;
use crate::limb::Limb;
use crate::twos;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    #[inline]
    fn apply(self, x: Limb, y: Limb) -> Limb {
        match self {
            BitOp::And => x & y,
            BitOp::Or => x | y,
            BitOp::Xor => x ^ y,
        }
    }
}

fn combine(op: BitOp, a: &BigInt, b: &BigInt) -> Result<BigInt> {
    match op {
        BitOp::And | BitOp::Or if a == b => return a.try_clone(),
        BitOp::Xor if a == b => return Ok(BigInt::zero()),
        BitOp::And if a.is_zero() || b.is_zero() => return Ok(BigInt::zero()),
        BitOp::Or | BitOp::Xor if a.is_zero() => return b.try_clone(),
        BitOp::Or | BitOp::Xor if b.is_zero() => return a.try_clone(),
        _ => {}
    }

    let mut long = twos::encode(a)?;
    let mut short = twos::encode(b)?;
    let mut short_sign = b.sign();
    if long.len() < short.len() {
        core::mem::swap(&mut long, &mut short);
        short_sign = a.sign();
    }

    // Extend by the sign of the value, not by the top bit of its last word.
    let fill = twos::extension(short_sign);
    for (i, x) in long.iter_mut().enumerate() {
        let y = short.get(i).copied().unwrap_or(fill);
        *x = op.apply(*x, y);
    }
    twos::decode(long)
}

impl BigInt {
    /// Bitwise AND, as if both values were infinite two's-complement bit
    /// strings.
    pub fn bitand(&self, other: &BigInt) -> Result<BigInt> {
        combine(BitOp::And, self, other)
    }

    /// Replace `self` with `self & other`.
    ///
    /// On allocation failure `self` keeps its previous value.
    pub fn bitand_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = combine(BitOp::And, self, other)?;
        Ok(())
    }

    /// Bitwise OR, as if both values were infinite two's-complement bit
    /// strings.
    pub fn bitor(&self, other: &BigInt) -> Result<BigInt> {
        combine(BitOp::Or, self, other)
    }

    /// Replace `self` with `self | other`.
    ///
    /// On allocation failure `self` keeps its previous value.
    pub fn bitor_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = combine(BitOp::Or, self, other)?;
        Ok(())
    }

    /// Bitwise exclusive OR.
    pub fn bitxor(&self, other: &BigInt) -> Result<BigInt> {
        combine(BitOp::Xor, self, other)
    }

    /// Replace `self` with `self ^ other`.
    pub fn bitxor_assign(&mut self, other: &BigInt) -> Result<()> {
        *self = combine(BitOp::Xor, self, other)?;
        Ok(())
    }

    /// Bitwise complement, which equals `-self - 1`.
    pub fn not(&self) -> Result<BigInt> {
        let mut words = twos::encode(self)?;
        for w in &mut words {
            *w = !*w;
        }
        twos::decode(words)
    }
}
