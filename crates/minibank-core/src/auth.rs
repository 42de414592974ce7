//! Credential check against the account store.
//!
//! Every failure path returns the same [`BankError::InvalidCredentials`], so a
//! caller cannot tell an unknown identifier from a wrong password.

use minibank_types::{Account, BankError, Credentials, Result};

use crate::store::AccountStore;

/// Validates identifier/password pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Authenticator;

impl Authenticator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Return the matching account, or the generic credentials error.
    pub fn authenticate<'s>(
        &self,
        store: &'s AccountStore,
        input: &Credentials,
    ) -> Result<&'s Account> {
        let id = input
            .id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or(BankError::InvalidCredentials)?;

        let account = store
            .find_by_identifier(id)
            .ok_or(BankError::InvalidCredentials)?;

        match input.password.as_deref() {
            Some(password) if !password.is_empty() && password == account.password => Ok(account),
            _ => Err(BankError::InvalidCredentials),
        }
    }
}
