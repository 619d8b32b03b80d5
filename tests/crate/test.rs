#![no_std]

pub use exactint::*;
