//! Lagrange interpolation at zero over the rationals.
//!
//! For distinct x-coordinates `x_0, ..., x_{k-1}` the basis polynomial of
//! index `i` evaluated at zero is
//! ```text
//! L_i(0) = ∏_{j ≠ i} (0 - x_j) / (x_i - x_j)
//! ```
//! and `∑ L_i(0) · y_i` is the constant term of the unique polynomial of degree
//! at most `k - 1` through the points. Everything is computed with
//! [`BigRational`], so the result is exact.

use crate::{BigRational, Result};
use itertools::{izip, Itertools};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Evaluates the basis polynomial of index `i` at zero.
///
/// Returns [`crate::Error::DivisionByZero`] if another x-coordinate equals
/// `xs[i]`.
///
/// # Panics
/// Panics if `i >= xs.len()`.
pub fn basis_at_zero(xs: &[BigInt], i: usize) -> Result<BigRational> {
    let xi = &xs[i];
    xs.iter()
        .enumerate()
        .filter(|(j, _)| *j != i)
        .try_fold(BigRational::one(), |term, (_, xj)| {
            let factor = BigRational::new(-xj, xi - xj)?;
            Ok(&term * &factor)
        })
}

/// Interpolates the points `(x, y)` and evaluates the polynomial at zero.
///
/// The result is exact and is neither required to be an integer nor to be
/// non-negative; callers decide what a fractional value means. An empty set
/// of points interpolates to zero.
pub fn interpolate_at_zero(points: &[(BigInt, BigInt)]) -> Result<BigRational> {
    let xs = points.iter().map(|(x, _)| x.clone()).collect_vec();
    izip!(0.., points).try_fold(BigRational::zero(), |total, (i, (_, y))| {
        let term = basis_at_zero(&xs, i)?.mul_integer(y);
        Ok(&total + &term)
    })
}
