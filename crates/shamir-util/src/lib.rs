#![crate_name = "shamir_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Dealer utilities for the shamir-rs library.
//!
//! These helpers build the shares that the reconstruction side consumes: a
//! random integer polynomial with the secret as constant term, evaluated at a
//! set of x-coordinates, with each value written out in a numeral base.

use itertools::izip;
use num_bigint::{BigUint, RandBigInt};
use num_traits::Zero;
use rand::{CryptoRng, RngCore};

/// Sample the coefficients of a polynomial of degree `degree` whose constant
/// term is `secret`.
///
/// Coefficients are listed from the constant term upwards. The non-constant
/// coefficients are uniform in `[0, 2^coefficient_bits)`.
pub fn sample_polynomial<R: RngCore + CryptoRng>(
    secret: &BigUint,
    degree: usize,
    coefficient_bits: u64,
    rng: &mut R,
) -> Vec<BigUint> {
    std::iter::once(secret.clone())
        .chain((0..degree).map(|_| rng.gen_biguint(coefficient_bits)))
        .collect()
}

/// Evaluate the polynomial with the given coefficients at `x`.
pub fn evaluate(coefficients: &[BigUint], x: u64) -> BigUint {
    coefficients
        .iter()
        .rev()
        .fold(BigUint::zero(), |acc, c| acc * x + c)
}

/// Deal one share per x-coordinate for a threshold of `threshold` shares.
///
/// Returns `(x, base, value)` triples, where `value` is the lower-case
/// base-`base` numeral of the polynomial evaluated at `x`. Bases are taken
/// from `bases` in turn.
///
/// # Panics
/// Panics if `threshold` is zero, if `bases` is empty, or if a base is not
/// between 2 and 36.
pub fn deal<R: RngCore + CryptoRng>(
    secret: &BigUint,
    threshold: usize,
    xs: &[u64],
    bases: &[u32],
    coefficient_bits: u64,
    rng: &mut R,
) -> Vec<(u64, u32, String)> {
    assert!(threshold > 0, "threshold must be at least 1");
    assert!(!bases.is_empty(), "at least one base is required");

    let coefficients = sample_polynomial(secret, threshold - 1, coefficient_bits, rng);
    izip!(xs, bases.iter().cycle())
        .map(|(&x, &base)| {
            let y = evaluate(&coefficients, x);
            (x, base, y.to_str_radix(base))
        })
        .collect()
}
