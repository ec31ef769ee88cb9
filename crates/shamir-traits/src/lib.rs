#![crate_name = "shamir_traits"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Traits for threshold secret reconstruction schemes.

/// Parameters of a threshold scheme.
pub trait ThresholdParameters {
    /// Minimum number of shares needed to reconstruct the secret.
    fn threshold(&self) -> usize;
}

/// Reconstruct a secret from a set of shares.
///
/// Implementations select `threshold()` shares out of the supplied ones and
/// must fail, rather than return a degraded value, when the shares are
/// insufficient or mutually inconsistent.
pub trait SecretReconstructor: ThresholdParameters {
    /// The share type consumed by the reconstruction.
    type Share;
    /// The reconstructed secret.
    type Secret;
    /// The error returned when reconstruction fails.
    type Error: std::error::Error;

    /// Reconstruct the secret from `shares`.
    fn reconstruct_secret(&self, shares: &[Self::Share]) -> Result<Self::Secret, Self::Error>;
}
