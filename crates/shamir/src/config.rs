//! Validation of the reconstruction configuration: the threshold and the
//! number of shares supplied for it.

use crate::{Error, Result};

/// Validates the threshold.
pub fn validate_threshold(threshold: usize) -> Result<()> {
    if threshold == 0 {
        return Err(Error::InvalidThreshold(threshold));
    }
    Ok(())
}

/// Validates that enough shares are provided for the threshold.
pub fn validate_share_count(provided: usize, threshold: usize) -> Result<()> {
    if provided < threshold {
        return Err(Error::insufficient_shares(provided, threshold));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_threshold() {
        assert!(validate_threshold(1).is_ok());
        assert!(validate_threshold(3).is_ok());
        assert!(validate_threshold(64).is_ok());
    }

    #[test]
    fn test_invalid_threshold() {
        assert_eq!(validate_threshold(0), Err(Error::InvalidThreshold(0)));
    }

    #[test]
    fn test_share_count() {
        assert!(validate_share_count(3, 3).is_ok());
        assert!(validate_share_count(10, 3).is_ok());
        assert_eq!(
            validate_share_count(2, 3),
            Err(Error::InsufficientShares {
                provided: 2,
                required: 3
            })
        );
        assert!(validate_share_count(0, 1).is_err());
    }
}
