//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"message": "...", "balance": n}`, returned by deposit and withdraw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub message: String,
    pub balance: i64,
}

/// `{"balance": n}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub balance: i64,
}

/// Query string of `/deposit` and `/withdraw`. Parsed into an `Amount` by
/// the handler so a bad value maps to the operation's own error message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AmountQuery {
    pub amount: Option<String>,
}
