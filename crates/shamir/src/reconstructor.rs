//! Lagrange reconstruction of the secret.
//!
//! The secret is the constant term of the polynomial of degree `threshold - 1`
//! through the selected shares:
//! ```text
//! secret = ∑_i y_i · ∏_{j ≠ i} (0 - x_j) / (x_i - x_j)
//! ```
//! The sum is computed over the rationals. Shares that genuinely lie on an
//! integer polynomial interpolate to an integer; anything else is rejected.

use crate::config::{validate_share_count, validate_threshold};
use crate::{Error, RawShare, Result, Share};
use itertools::Itertools;
use num_bigint::{BigInt, BigUint};
use shamir_math::{lagrange::interpolate_at_zero, radix, BigRational};
use shamir_traits::{SecretReconstructor, ThresholdParameters};

/// Decodes `raw` as a case-insensitive base-`base` numeral.
pub fn decode_value(raw: &str, base: u32) -> Result<BigUint> {
    Ok(radix::decode_value(raw, base)?)
}

/// Sorts the shares by ascending x-coordinate and keeps the first `threshold`.
///
/// The sort is stable, so shares with equal x-coordinates keep their input
/// order.
pub fn select_points(shares: &[Share], threshold: usize) -> Result<Vec<Share>> {
    validate_threshold(threshold)?;
    validate_share_count(shares.len(), threshold)?;
    let mut points = shares.to_vec();
    points.sort_by_key(Share::x);
    points.truncate(threshold);
    Ok(points)
}

/// Evaluates the polynomial through `points` at zero, without requiring the
/// value to be an integer.
pub fn interpolate(points: &[Share]) -> Result<BigRational> {
    let points_xy = points
        .iter()
        .map(|share| (BigInt::from(share.x()), BigInt::from(share.y().clone())))
        .collect_vec();
    interpolate_at_zero(&points_xy).map_err(|e| match e {
        shamir_math::Error::DivisionByZero => points
            .iter()
            .map(Share::x)
            .duplicates()
            .next()
            .map_or(Error::MathError(e), Error::duplicate_x),
        e => Error::MathError(e),
    })
}

/// Reconstructs the secret from exactly the given points.
///
/// The interpolated value must be an integer. Its sign is dropped: the secret
/// is the absolute value of the constant term. At least one point is needed.
pub fn reconstruct(points: &[Share]) -> Result<BigUint> {
    validate_threshold(points.len())?;
    let total = interpolate(points)?;
    if !total.is_integer() {
        return Err(Error::non_integer(&total));
    }
    Ok(total.numer().magnitude().clone())
}

/// Reconstructs secrets for a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShamirReconstructor {
    threshold: usize,
}

impl ShamirReconstructor {
    /// Creates a reconstructor for the given threshold.
    ///
    /// Returns an error if the threshold is zero.
    pub fn new(threshold: usize) -> Result<Self> {
        validate_threshold(threshold)?;
        Ok(Self { threshold })
    }

    /// Decodes `raw` as a case-insensitive base-`base` numeral.
    pub fn decode_value(&self, raw: &str, base: u32) -> Result<BigUint> {
        decode_value(raw, base)
    }

    /// Selects the `threshold` shares with the smallest x-coordinates.
    pub fn select_points(&self, shares: &[Share]) -> Result<Vec<Share>> {
        select_points(shares, self.threshold)
    }

    /// Decodes the raw shares and reconstructs the secret.
    pub fn reconstruct_raw(&self, shares: &[RawShare]) -> Result<BigUint> {
        let shares = shares.iter().map(Share::decode).collect::<Result<Vec<_>>>()?;
        self.reconstruct_secret(&shares)
    }
}

impl ThresholdParameters for ShamirReconstructor {
    fn threshold(&self) -> usize {
        self.threshold
    }
}

impl SecretReconstructor for ShamirReconstructor {
    type Share = Share;
    type Secret = BigUint;
    type Error = Error;

    fn reconstruct_secret(&self, shares: &[Share]) -> Result<BigUint> {
        let points = self.select_points(shares)?;
        reconstruct(&points)
    }
}
