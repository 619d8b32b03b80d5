//! Conversion between sign-magnitude and two's-complement form.
//!
//! A two's-complement word sequence is little-endian and minimal: the top bit
//! of the most significant word is the sign of the value, and no shorter
//! sequence has that property. It only exists transiently, while bitwise
//! operations run or while bytes are imported and exported.

use crate::bigint::{BigInt, Sign};
use crate::error::{Error, ErrorCode, Result};
use crate::limb::{self, Limb, LimbVec, LIMB_BITS, LIMB_HIGH_BIT, LIMB_MAX};
use crate::math::small;
use alloc::vec::Vec;

/// Fill word that extends a value with the given sign.
#[inline]
pub(crate) fn extension(sign: Sign) -> Limb {
    match sign {
        Sign::Negative => LIMB_MAX,
        Sign::Zero | Sign::Positive => 0,
    }
}

/// Arithmetic negation modulo `2^(W * len)`, in place.
///
/// Words below the first non-zero word are already zero and stay so, the
/// first non-zero word is negated and every word above it is inverted. The
/// procedure is its own inverse.
pub(crate) fn negate_words(words: &mut [Limb]) {
    let mut iter = words.iter_mut().skip_while(|w| **w == 0);
    if let Some(first) = iter.next() {
        *first = first.wrapping_neg();
        for w in iter {
            *w = !*w;
        }
    }
}

/// Encode a value as a minimal two's-complement word sequence.
///
/// Zero is encoded as a single zero word.
pub(crate) fn encode(value: &BigInt) -> Result<LimbVec> {
    let mag = value.magnitude();
    let mut words = limb::try_alloc(mag.len() + 1)?;
    match value.sign() {
        Sign::Zero => words.push(0),
        Sign::Positive => {
            words.extend_from_slice(mag);
            if words[words.len() - 1] & LIMB_HIGH_BIT != 0 {
                words.push(0);
            }
        }
        Sign::Negative => {
            words.extend_from_slice(mag);
            negate_words(&mut words);
            if words[words.len() - 1] & LIMB_HIGH_BIT == 0 {
                words.push(LIMB_MAX);
            }
        }
    }
    Ok(words)
}

/// Decode a two's-complement word sequence, reusing its buffer.
///
/// Redundant extension words are accepted. Never allocates.
pub(crate) fn decode(mut words: LimbVec) -> Result<BigInt> {
    let top = match words.last() {
        Some(&top) => top,
        None => return Err(Error::invalid(ErrorCode::EmptyBuffer)),
    };
    if top & LIMB_HIGH_BIT == 0 {
        Ok(BigInt::from_magnitude(Sign::Positive, words))
    } else {
        negate_words(&mut words);
        small::normalize(&mut words);
        Ok(BigInt::from_magnitude(Sign::Negative, words))
    }
}

const LIMB_BYTES: usize = LIMB_BITS / 8;

fn alloc_bytes(capacity: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    bytes.try_reserve(capacity).map_err(|_| Error::alloc())?;
    Ok(bytes)
}

impl BigInt {
    /// Export the value as little-endian two's-complement bytes.
    ///
    /// The encoding is the shortest one whose last byte carries the sign in
    /// its top bit, padded with `0x00` (non-negative) or `0xFF` (negative) up
    /// to `min_len` bytes. Zero encodes as a single `0x00` byte.
    ///
    /// ```
    /// use exactint::BigInt;
    ///
    /// assert_eq!(BigInt::from(-128).to_twos_complement_bytes(0)?, [0x80]);
    /// assert_eq!(BigInt::from(128).to_twos_complement_bytes(0)?, [0x80, 0x00]);
    /// assert_eq!(BigInt::from(-1).to_twos_complement_bytes(4)?, [0xFF; 4]);
    /// # Ok::<(), exactint::Error>(())
    /// ```
    pub fn to_twos_complement_bytes(&self, min_len: usize) -> Result<Vec<u8>> {
        let words = encode(self)?;
        let fill = if self.is_negative() { 0xFF } else { 0x00 };

        let mut len = words.len() * LIMB_BYTES;
        let mut bytes = alloc_bytes(len.max(min_len))?;
        for w in &words {
            bytes.extend_from_slice(&w.to_le_bytes());
        }

        // Drop extension bytes that the next byte down already implies.
        while len > 1 && bytes[len - 1] == fill && (bytes[len - 2] ^ fill) & 0x80 == 0 {
            len -= 1;
        }
        bytes.truncate(len);
        if bytes.len() < min_len {
            bytes.resize(min_len, fill);
        }
        Ok(bytes)
    }

    /// Import little-endian two's-complement bytes.
    ///
    /// The top bit of the last byte is the sign. Any number of redundant
    /// extension bytes is accepted; an empty slice is rejected.
    pub fn from_twos_complement_bytes(bytes: &[u8]) -> Result<BigInt> {
        let last = match bytes.last() {
            Some(&last) => last,
            None => return Err(Error::invalid(ErrorCode::EmptyBuffer)),
        };
        let fill = if last & 0x80 != 0 { 0xFF } else { 0x00 };

        let mut words = limb::try_alloc((bytes.len() + LIMB_BYTES - 1) / LIMB_BYTES)?;
        for chunk in bytes.chunks(LIMB_BYTES) {
            let mut buf = [fill; LIMB_BYTES];
            buf[..chunk.len()].copy_from_slice(chunk);
            words.push(Limb::from_le_bytes(buf));
        }
        decode(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn roundtrip(value: i128) {
        let x = BigInt::from(value);
        let words = encode(&x).unwrap();
        assert_eq!(decode(words).unwrap(), x);
    }

    #[test]
    fn encode_zero_test() {
        assert_eq!(encode(&BigInt::zero()).unwrap(), vec![0]);
    }

    #[test]
    fn encode_test() {
        assert_eq!(encode(&BigInt::from(1)).unwrap(), vec![1]);
        assert_eq!(encode(&BigInt::from(-1)).unwrap(), vec![LIMB_MAX]);

        // Top bit set on a positive value needs a zero word.
        let x = BigInt::from(LIMB_HIGH_BIT as u128);
        assert_eq!(encode(&x).unwrap(), vec![LIMB_HIGH_BIT, 0]);

        // The most negative single-word value fits in one word.
        let x = -BigInt::from(LIMB_HIGH_BIT as u128);
        assert_eq!(encode(&x).unwrap(), vec![LIMB_HIGH_BIT]);

        // One less needs an all-ones word.
        let x = -BigInt::from(LIMB_HIGH_BIT as u128 + 1);
        assert_eq!(encode(&x).unwrap(), vec![LIMB_HIGH_BIT - 1, LIMB_MAX]);

        // Low zero words stay zero.
        let x = -BigInt::from(1u128 << LIMB_BITS);
        assert_eq!(encode(&x).unwrap(), vec![0, LIMB_MAX]);
    }

    #[test]
    fn decode_test() {
        assert!(decode(vec![]).unwrap_err().is_invalid_argument());
        assert!(decode(vec![0, 0, 0]).unwrap().is_zero());
        assert_eq!(decode(vec![LIMB_MAX, LIMB_MAX]).unwrap(), BigInt::from(-1));
        assert_eq!(decode(vec![5, 0, 0]).unwrap(), BigInt::from(5));
    }

    #[test]
    fn roundtrip_test() {
        for &v in &[
            0,
            1,
            -1,
            127,
            -128,
            255,
            -256,
            i64::MAX as i128,
            i64::MIN as i128,
            u64::MAX as i128,
            -(u64::MAX as i128),
            i128::MAX,
            i128::MIN,
        ] {
            roundtrip(v);
        }
    }

    #[test]
    fn negate_words_test() {
        let mut words = [0, 0, 1, 0];
        negate_words(&mut words);
        assert_eq!(words, [0, 0, LIMB_MAX, LIMB_MAX]);
        negate_words(&mut words);
        assert_eq!(words, [0, 0, 1, 0]);

        let mut zeros = [0, 0];
        negate_words(&mut zeros);
        assert_eq!(zeros, [0, 0]);
    }

    #[test]
    fn bytes_test() {
        assert_eq!(BigInt::zero().to_twos_complement_bytes(0).unwrap(), [0]);
        assert_eq!(BigInt::zero().to_twos_complement_bytes(3).unwrap(), [0, 0, 0]);
        assert_eq!(BigInt::from(127).to_twos_complement_bytes(0).unwrap(), [0x7F]);
        assert_eq!(BigInt::from(-129).to_twos_complement_bytes(0).unwrap(), [0x7F, 0xFF]);
        assert_eq!(
            BigInt::from(0x1234).to_twos_complement_bytes(4).unwrap(),
            [0x34, 0x12, 0, 0]
        );

        let x = BigInt::from_twos_complement_bytes(&[0x80]).unwrap();
        assert_eq!(x, BigInt::from(-128));
        let x = BigInt::from_twos_complement_bytes(&[0xFF, 0xFF, 0xFF]).unwrap();
        assert_eq!(x, BigInt::from(-1));
        let x = BigInt::from_twos_complement_bytes(&[0x00, 0x80, 0x00]).unwrap();
        assert_eq!(x, BigInt::from(0x8000));

        let err = BigInt::from_twos_complement_bytes(&[]).unwrap_err();
        assert_eq!(*err.code(), ErrorCode::EmptyBuffer);
    }
}
