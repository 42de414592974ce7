//! Account records and the raw inputs that create or authenticate them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse::leading_int;

// ---------------------------------------------------------------------------
// AccountSeq
// ---------------------------------------------------------------------------

/// Sequence number of an account. Assigned at creation as `count + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountSeq(pub u64);

impl AccountSeq {
    /// Parse a path segment by its integer prefix (`"3abc"` is 3).
    ///
    /// Returns `None` when there are no leading digits or the value is not
    /// positive.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        leading_int(raw)
            .and_then(|n| u64::try_from(n).ok())
            .filter(|&n| n > 0)
            .map(Self)
    }
}

impl fmt::Display for AccountSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A stored identifier/password pair with its sequence number.
///
/// Serialized as `{"user": 1, "id": "user1", "password": "pass1"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Sequence number.
    pub user: AccountSeq,
    /// Unique login identifier.
    pub id: String,
    /// Plain-text password.
    pub password: String,
}

impl Account {
    #[must_use]
    pub fn new(user: AccountSeq, id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user,
            id: id.into(),
            password: password.into(),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Account {
    /// Account `userN` / `PassN` with sequence number `N`.
    pub fn dummy(seq: u64) -> Self {
        Self::new(AccountSeq(seq), format!("user{seq}"), format!("Pass{seq}"))
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Raw registration input, as read from the query string.
///
/// Fields stay optional: a missing field is a validation outcome, not a
/// parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Registration {
    pub id: Option<String>,
    pub password: Option<String>,
    pub confirmpass: Option<String>,
}

impl Registration {
    #[must_use]
    pub fn new(id: &str, password: &str, confirmpass: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            password: Some(password.to_string()),
            confirmpass: Some(confirmpass.to_string()),
        }
    }
}

/// Raw login input, as read from the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub id: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    #[must_use]
    pub fn new(id: &str, password: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            password: Some(password.to_string()),
        }
    }
}
