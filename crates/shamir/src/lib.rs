#![crate_name = "shamir"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Exact reconstruction of Shamir-shared secrets.
//!
//! Shares are `(x, y)` points whose y-values arrive as numerals in arbitrary
//! bases. A [`ShamirReconstructor`] decodes them, keeps the `threshold` shares
//! with the smallest x-coordinates, and evaluates the interpolating
//! polynomial at zero with exact rational arithmetic. The result must be an
//! integer; a fractional value means the shares do not lie on a common
//! integer polynomial and reconstruction fails.
//!
//! ```
//! use shamir::{RawShare, ShamirReconstructor};
//! use num_bigint::BigUint;
//!
//! let shares = [
//!     RawShare::new(1, 10, "4"),
//!     RawShare::new(2, 2, "111"),
//!     RawShare::new(3, 10, "12"),
//! ];
//! let reconstructor = ShamirReconstructor::new(3)?;
//! assert_eq!(reconstructor.reconstruct_raw(&shares)?, BigUint::from(3u32));
//! # Ok::<(), shamir::Error>(())
//! ```

/// Threshold and share-count validation
pub mod config;
/// Share documents in JSON form
pub mod document;
mod errors;
/// Secret reconstruction by Lagrange interpolation at zero
pub mod reconstructor;
/// Raw and decoded shares
pub mod share;

pub use document::ShareDocument;
pub use errors::{Error, Result};
pub use reconstructor::ShamirReconstructor;
pub use share::{RawShare, Share};
pub use shamir_math::BigRational;
pub use shamir_traits::{SecretReconstructor, ThresholdParameters};
