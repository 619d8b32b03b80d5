//! # exactint
//!
//! Exact arbitrary-precision integers stored in sign-magnitude form, with
//! bitwise logic that behaves as if every value were an infinitely
//! sign-extended two's-complement bit string.
//!
//! ```
//! use exactint::BigInt;
//!
//! let x: BigInt = "-170141183460469231731687303715884105728".parse()?;
//! assert_eq!(x.to_i128(), Some(i128::MIN));
//!
//! let y = x.mul(&x)?.add(&BigInt::from(1))?;
//! assert_eq!(y.to_string(), "28948022309329048855892746252171976963317496166410141009864396001978282409985");
//!
//! // AND with -1 keeps every bit, OR with -1 sets every bit.
//! let minus_one = BigInt::from(-1);
//! assert_eq!(minus_one.bitand(&y)?, y);
//! assert_eq!(minus_one.bitor(&y)?, minus_one);
//! # Ok::<(), exactint::Error>(())
//! ```
//!
//! Every operation that may allocate returns a [`Result`]. A failed
//! allocation is reported as an [`Error`] whose [`Category`] is
//! `Allocation`, and leaves every operand, including the destination of an
//! `_assign` method, exactly as it was.
//!
//! # Word size
//!
//! Magnitudes are stored as little-endian machine words. The width is
//! selected at build time: 64 bits on 64-bit targets with a native wide
//! multiply, 32 bits elsewhere, overridable by setting
//! `EXACTINT_LIMB_WIDTH` to 8, 16, 32 or 64. The width is never observable
//! through the public API.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use exactint
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and enable the "alloc" feature:
//!
//! ```toml
//! [dependencies]
//! exactint = { version = "0.3", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/exactint/0.3.2")]
// Ignored clippy lints
#![allow(
    // Methods named after the arithmetic they perform return Result, so they
    // cannot be the operator traits.
    clippy::should_implement_trait,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
)]
#![deny(missing_docs)]
#![no_std]

mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

extern crate serde_core as serde;

#[doc(inline)]
pub use crate::bigint::{BigInt, Sign};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::safe_mul::{
    safe_mul_i16, safe_mul_i32, safe_mul_i64, safe_mul_i8, safe_mul_u16, safe_mul_u32,
    safe_mul_u64, safe_mul_u8,
};

mod bigint;
mod bitwise;
mod decimal;
pub mod error;
mod limb;
mod math;
mod pow;
pub mod safe_mul;
mod ser;
pub mod table;
mod twos;
