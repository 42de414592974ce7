//! Ledger amounts.
//!
//! Query parameters arrive as untyped text. [`Amount::parse`] reads their
//! integer prefix and keeps it only if it is strictly positive, before any
//! ledger code runs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::leading_int;

/// A strictly positive ledger amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Amount(i64);

impl Amount {
    /// Wrap a raw integer. Returns `None` unless `value > 0`.
    #[must_use]
    pub fn new(value: i64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Parse a query parameter by its integer prefix (`"10abc"` is 10,
    /// `"1.5"` is 1). Absent input, input with no leading digits, and values
    /// `<= 0` or beyond `i64` are rejected.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        leading_int(raw?).and_then(Self::new)
    }

    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Amount {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("amount must be positive, got {value}"))
    }
}

impl From<Amount> for i64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
