//! Serde support. A `BigInt` serializes as its decimal string.

use crate::bigint::BigInt;
use core::fmt;
use serde::de::{self, Unexpected, Visitor};
use serde::ser;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.to_decimal_string().map_err(ser::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string of decimal digits")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                BigInt::from_decimal_digits(value).map_err(|err| {
                    if err.is_allocation() {
                        E::custom(err)
                    } else {
                        E::invalid_value(Unexpected::Str(value), &self)
                    }
                })
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
