//! Registration validator.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. identifier and password present and non-empty
//! 2. identifier not taken
//! 3. identifier length
//! 4. password length
//! 5. password contains an `A`-`Z` character
//! 6. confirmation equals password
//!
//! Only after all six pass is the account inserted.

use minibank_types::{Account, BankError, Registration, Result, constants};

use crate::store::AccountStore;

/// Policy gate in front of [`AccountStore::insert`].
#[derive(Debug, Clone)]
pub struct RegistrationValidator {
    /// Minimum identifier length in UTF-16 code units.
    min_id_len: usize,
    /// Minimum password length in UTF-16 code units.
    min_password_len: usize,
}

impl RegistrationValidator {
    /// Create a validator with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_id_len: constants::MIN_ID_LEN,
            min_password_len: constants::MIN_PASSWORD_LEN,
        }
    }

    /// Run every rule against `input` without touching the store.
    ///
    /// On success returns the validated `(identifier, password)` pair.
    pub fn validate<'a>(
        &self,
        store: &AccountStore,
        input: &'a Registration,
    ) -> Result<(&'a str, &'a str)> {
        let id = input.id.as_deref().filter(|s| !s.is_empty());
        let password = input.password.as_deref().filter(|s| !s.is_empty());
        let (Some(id), Some(password)) = (id, password) else {
            return Err(BankError::MissingCredentials);
        };

        if store.contains_identifier(id) {
            return Err(BankError::DuplicateId);
        }

        if id.encode_utf16().count() < self.min_id_len {
            return Err(BankError::IdTooShort);
        }

        if password.encode_utf16().count() < self.min_password_len {
            return Err(BankError::PasswordTooShort);
        }

        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(BankError::PasswordMissingUppercase);
        }

        if input.confirmpass.as_deref() != Some(password) {
            return Err(BankError::ConfirmationMismatch);
        }

        Ok((id, password))
    }

    /// Validate `input` and, if every rule passes, insert the new account
    /// with sequence number `count + 1`.
    pub fn register(&self, store: &mut AccountStore, input: &Registration) -> Result<Account> {
        let (id, password) = self.validate(store, input)?;
        let account = Account::new(store.next_sequence(), id, password);
        Ok(store.insert(account))
    }
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new()
    }
}
