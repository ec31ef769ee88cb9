//! Share documents.
//!
//! A share document is a JSON object holding the threshold under `keys` and
//! one entry per share, keyed by the share's x-coordinate:
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "10", "value": "12" },
//!     "6": { "base": "4", "value": "213" }
//! }
//! ```
//! Top-level keys that are not made of decimal digits are ignored. A share
//! key that appears more than once yields one share per occurrence, so the
//! repeated x-coordinate is reported when reconstructing.

use crate::{Error, RawShare, Result, ShamirReconstructor};
use num_bigint::BigUint;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct Keys {
    #[serde(default)]
    n: Option<usize>,
    k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Base {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct Entry {
    base: Base,
    value: String,
}

/// The top-level object, with its entries kept in document order.
#[derive(Debug)]
struct RawDocument {
    keys: Keys,
    entries: Vec<(String, Value)>,
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawDocumentVisitor)
    }
}

struct RawDocumentVisitor;

impl<'de> Visitor<'de> for RawDocumentVisitor {
    type Value = RawDocument;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a share document object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<RawDocument, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut keys = None;
        let mut entries = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key == "keys" {
                if keys.is_some() {
                    return Err(de::Error::duplicate_field("keys"));
                }
                keys = Some(map.next_value::<Keys>()?);
            } else {
                entries.push((key, map.next_value::<Value>()?));
            }
        }
        let keys = keys.ok_or_else(|| de::Error::missing_field("keys"))?;
        Ok(RawDocument { keys, entries })
    }
}

fn is_share_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

fn parse_share(key: &str, value: Value) -> Result<RawShare> {
    let x = key
        .parse::<u64>()
        .map_err(|e| Error::document(format!("share {key}: {e}")))?;
    if x == 0 {
        return Err(Error::document("share 0: x-coordinate must be positive"));
    }
    let entry = Entry::deserialize(value)
        .map_err(|e| Error::document(format!("share {x}: {e}")))?;
    let base = match entry.base {
        Base::Number(base) => base,
        Base::Text(text) => text
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::document(format!("share {x}: invalid base {text:?}")))?,
    };
    Ok(RawShare::new(x, base, entry.value))
}

/// A parsed share document: a threshold and the raw shares, ordered by
/// x-coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareDocument {
    threshold: usize,
    advertised: Option<usize>,
    shares: Vec<RawShare>,
}

impl ShareDocument {
    /// Parse a share document from its JSON text.
    ///
    /// Shares with the same x-coordinate keep their document order.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawDocument =
            serde_json::from_str(json).map_err(|e| Error::document(e.to_string()))?;
        let mut shares = raw
            .entries
            .into_iter()
            .filter(|(key, _)| is_share_key(key))
            .map(|(key, value)| parse_share(&key, value))
            .collect::<Result<Vec<_>>>()?;
        // Stable, so repeated keys stay in document order.
        shares.sort_by_key(|share| share.x);
        Ok(Self {
            threshold: raw.keys.k,
            advertised: raw.keys.n,
            shares,
        })
    }

    /// The threshold `k`.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// The number of shares `n` announced by the document, if any. It is not
    /// checked against the shares actually present.
    pub fn advertised_shares(&self) -> Option<usize> {
        self.advertised
    }

    /// The raw shares, by ascending x-coordinate.
    pub fn shares(&self) -> &[RawShare] {
        &self.shares
    }

    /// A reconstructor for the document's threshold.
    pub fn reconstructor(&self) -> Result<ShamirReconstructor> {
        ShamirReconstructor::new(self.threshold)
    }

    /// Reconstruct the secret from the document's shares.
    pub fn reconstruct(&self) -> Result<BigUint> {
        self.reconstructor()?.reconstruct_raw(&self.shares)
    }
}

impl FromStr for ShareDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::ShareDocument;
    use crate::{Error, RawShare};
    use num_bigint::BigUint;
    use std::str::FromStr;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn parse_sample() {
        let document = ShareDocument::from_json(SAMPLE).unwrap();
        assert_eq!(document.threshold(), 3);
        assert_eq!(document.advertised_shares(), Some(4));
        assert_eq!(
            document.shares(),
            &[
                RawShare::new(1, 10, "4"),
                RawShare::new(2, 2, "111"),
                RawShare::new(3, 10, "12"),
                RawShare::new(6, 4, "213"),
            ]
        );
        assert_eq!(document.reconstruct(), Ok(BigUint::from(3u32)));
        assert_eq!(ShareDocument::from_str(SAMPLE), Ok(document));
    }

    #[test]
    fn shares_are_ordered_numerically() {
        let json = r#"{
            "keys": { "k": 2 },
            "10": { "base": 10, "value": "21" },
            "2": { "base": "10", "value": "5" },
            "comment": "ignored"
        }"#;
        let document = ShareDocument::from_json(json).unwrap();
        assert_eq!(document.advertised_shares(), None);
        let xs = document.shares().iter().map(|s| s.x).collect::<Vec<_>>();
        assert_eq!(xs, vec![2, 10]);
        // y = 2x + 1
        assert_eq!(document.reconstruct(), Ok(BigUint::from(1u32)));
    }

    #[test]
    fn large_values() {
        let json = r#"{
            "keys": { "n": 3, "k": 2 },
            "1": { "base": "16", "value": "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF" },
            "2": { "base": "16", "value": "1FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE" },
            "3": { "base": "16", "value": "2FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFD" }
        }"#;
        // y = (2^128 - 1) x, whose constant term is zero.
        let document = ShareDocument::from_json(json).unwrap();
        assert_eq!(document.reconstruct(), Ok(BigUint::from(0u32)));
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(
            ShareDocument::from_json("not json"),
            Err(Error::Document(_))
        ));
        assert!(matches!(
            ShareDocument::from_json(r#"{ "1": { "base": "10", "value": "4" } }"#),
            Err(Error::Document(_))
        ));
        assert!(matches!(
            ShareDocument::from_json(r#"{ "keys": { "n": 1 } }"#),
            Err(Error::Document(_))
        ));
        assert_eq!(
            ShareDocument::from_json(r#"{ "keys": { "k": 1 }, "1": { "base": "ten", "value": "4" } }"#),
            Err(Error::document("share 1: invalid base \"ten\""))
        );
        assert!(matches!(
            ShareDocument::from_json(r#"{ "keys": { "k": 1 }, "1": { "base": "10" } }"#),
            Err(Error::Document(_))
        ));
    }

    #[test]
    fn reconstruction_errors_surface() {
        let json = r#"{ "keys": { "k": 0 }, "1": { "base": "10", "value": "4" } }"#;
        let document = ShareDocument::from_json(json).unwrap();
        assert_eq!(document.reconstruct(), Err(Error::InvalidThreshold(0)));

        let json = r#"{ "keys": { "k": 3 }, "1": { "base": "10", "value": "4" } }"#;
        let document = ShareDocument::from_json(json).unwrap();
        assert_eq!(
            document.reconstruct(),
            Err(Error::insufficient_shares(1, 3))
        );

        let json = r#"{ "keys": { "k": 1 }, "1": { "base": "2", "value": "12" } }"#;
        let document = ShareDocument::from_json(json).unwrap();
        assert!(matches!(document.reconstruct(), Err(Error::MathError(_))));
    }

    #[test]
    fn repeated_share_keys_are_kept() {
        let json = r#"{
            "keys": { "n": 4, "k": 3 },
            "1": { "base": "10", "value": "4" },
            "2": { "base": "2", "value": "111" },
            "2": { "base": "10", "value": "99" },
            "3": { "base": "10", "value": "12" }
        }"#;
        let document = ShareDocument::from_json(json).unwrap();
        assert_eq!(
            document.shares(),
            &[
                RawShare::new(1, 10, "4"),
                RawShare::new(2, 2, "111"),
                RawShare::new(2, 10, "99"),
                RawShare::new(3, 10, "12"),
            ]
        );
        assert_eq!(document.reconstruct(), Err(Error::DuplicateXCoordinate(2)));
    }

    #[test]
    fn repeated_keys_entry_is_rejected() {
        let json = r#"{ "keys": { "k": 1 }, "keys": { "k": 2 }, "1": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            ShareDocument::from_json(json),
            Err(Error::Document(_))
        ));
    }

    #[test]
    fn zero_x_coordinate_is_rejected() {
        let json = r#"{ "keys": { "k": 1 }, "0": { "base": "10", "value": "4" } }"#;
        assert_eq!(
            ShareDocument::from_json(json),
            Err(Error::document("share 0: x-coordinate must be positive"))
        );
        let json = r#"{ "keys": { "k": 1 }, "00": { "base": "10", "value": "4" } }"#;
        assert!(matches!(
            ShareDocument::from_json(json),
            Err(Error::Document(_))
        ));
    }
}
