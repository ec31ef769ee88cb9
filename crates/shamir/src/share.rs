use crate::{Error, Result};
use num_bigint::BigUint;
use shamir_math::radix::decode_value;

/// A share as handed over by the input layer: an x-coordinate and a y-value
/// written in some numeral base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawShare {
    /// Share identifier, used as the x-coordinate.
    pub x: u64,
    /// Base the value is written in.
    pub base: u32,
    /// The y-value as a base-`base` numeral.
    pub value: String,
}

impl RawShare {
    /// Create a new raw share.
    pub fn new<S: Into<String>>(x: u64, base: u32, value: S) -> Self {
        Self {
            x,
            base,
            value: value.into(),
        }
    }
}

impl From<(u64, u32, String)> for RawShare {
    fn from((x, base, value): (u64, u32, String)) -> Self {
        Self { x, base, value }
    }
}

/// A decoded share: the point `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Share {
    x: u64,
    y: BigUint,
}

impl Share {
    /// Create a share from an already decoded value.
    pub fn new(x: u64, y: BigUint) -> Self {
        Self { x, y }
    }

    /// Decode a raw share's value in its base.
    pub fn decode(raw: &RawShare) -> Result<Self> {
        let y = decode_value(&raw.value, raw.base)?;
        Ok(Self { x: raw.x, y })
    }

    /// The x-coordinate.
    pub fn x(&self) -> u64 {
        self.x
    }

    /// The y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

impl TryFrom<&RawShare> for Share {
    type Error = Error;

    fn try_from(raw: &RawShare) -> Result<Self> {
        Self::decode(raw)
    }
}

impl TryFrom<RawShare> for Share {
    type Error = Error;

    fn try_from(raw: RawShare) -> Result<Self> {
        Self::decode(&raw)
    }
}
