//! In-memory account store.
//!
//! Records are kept in insertion order and indexed by identifier and by
//! sequence number. There is no removal or update: once inserted, a record
//! is immutable for the life of the process.

use std::collections::HashMap;

use minibank_types::{Account, AccountSeq};

use crate::fixtures;

/// Insertion-ordered collection of accounts.
#[derive(Debug, Clone, Default)]
pub struct AccountStore {
    /// Records in insertion order.
    accounts: Vec<Account>,
    /// Identifier → index into `accounts`.
    by_id: HashMap<String, usize>,
    /// Sequence number → index into `accounts`.
    by_seq: HashMap<AccountSeq, usize>,
}

impl AccountStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the five startup fixture accounts.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for account in fixtures::seed_accounts() {
            store.insert(account);
        }
        store
    }

    /// Look up an account by its login identifier.
    #[must_use]
    pub fn find_by_identifier(&self, id: &str) -> Option<&Account> {
        self.by_id.get(id).map(|&idx| &self.accounts[idx])
    }

    /// Look up an account by its sequence number.
    #[must_use]
    pub fn find_by_sequence(&self, seq: AccountSeq) -> Option<&Account> {
        self.by_seq.get(&seq).map(|&idx| &self.accounts[idx])
    }

    /// Whether an identifier is already taken.
    #[must_use]
    pub fn contains_identifier(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Append a record. The caller has already checked identifier uniqueness.
    pub fn insert(&mut self, account: Account) -> Account {
        debug_assert!(
            !self.by_id.contains_key(&account.id),
            "duplicate identifier inserted: {}",
            account.id
        );
        let idx = self.accounts.len();
        self.by_id.insert(account.id.clone(), idx);
        self.by_seq.entry(account.user).or_insert(idx);
        self.accounts.push(account.clone());
        account
    }

    /// All records, in insertion order.
    #[must_use]
    pub fn list_all(&self) -> &[Account] {
        &self.accounts
    }

    /// Sequence number the next registration receives (`count + 1`).
    #[must_use]
    pub fn next_sequence(&self) -> AccountSeq {
        AccountSeq(self.accounts.len() as u64 + 1)
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
