#![crate_name = "shamir_math"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Mathematical utilities for the shamir-rs library: exact rationals over big
//! integers, base-N numeral decoding and Lagrange interpolation at zero.

pub mod lagrange;
pub mod radix;
pub mod rational;

pub use rational::BigRational;

use thiserror::Error;

/// The Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum Error {
    /// Indicates that a fraction was built with a zero denominator.
    #[error("Division by zero")]
    DivisionByZero,

    /// Indicates that a numeral base is outside of the supported range.
    #[error("Invalid base: {0} is not between 2 and 36")]
    InvalidBase(u32),

    /// Indicates that a character is not a digit of the numeral base.
    #[error("Invalid digit {digit:?} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// The base the numeral was decoded in.
        base: u32,
    },

    /// Indicates that a numeral has no digits.
    #[error("Empty value")]
    EmptyValue,
}
