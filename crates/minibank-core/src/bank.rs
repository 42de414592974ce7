//! Shared bank state.
//!
//! The account store and the balance ledger live behind a single mutex, so
//! every operation observes and mutates them one at a time: a registration's
//! uniqueness check and insert are atomic, as is a withdrawal's balance check
//! and decrement. The lock is never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use minibank_types::{Account, AccountSeq, Amount, BankError, Credentials, Registration, Result};

use crate::auth::Authenticator;
use crate::ledger::BalanceLedger;
use crate::registration::RegistrationValidator;
use crate::store::AccountStore;

/// Everything the lock protects.
#[derive(Debug, Default)]
struct BankState {
    accounts: AccountStore,
    ledger: BalanceLedger,
}

/// Cloneable handle to the shared account store and balance ledger.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    state: Arc<Mutex<BankState>>,
    validator: RegistrationValidator,
    authenticator: Authenticator,
}

impl Bank {
    /// A bank with no accounts and a zero balance.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(AccountStore::new())
    }

    /// A bank holding the five fixture accounts and a zero balance.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_store(AccountStore::seeded())
    }

    /// A bank over an existing store.
    #[must_use]
    pub fn with_store(accounts: AccountStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(BankState {
                accounts,
                ledger: BalanceLedger::new(),
            })),
            validator: RegistrationValidator::new(),
            authenticator: Authenticator::new(),
        }
    }

    // Every mutation commits in one final step, so a panic elsewhere cannot
    // leave the state half-written and the poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, BankState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Validate and store a new account.
    pub fn register(&self, input: &Registration) -> Result<Account> {
        let mut state = self.lock();
        match self.validator.register(&mut state.accounts, input) {
            Ok(account) => {
                tracing::info!(user = %account.user, id = %account.id, "Account registered");
                Ok(account)
            }
            Err(err) => {
                tracing::warn!(code = err.code(), reason = %err, "Registration rejected");
                Err(err)
            }
        }
    }

    /// Check credentials. Returns the sequence number of the matching account.
    pub fn login(&self, input: &Credentials) -> Result<AccountSeq> {
        let state = self.lock();
        match self.authenticator.authenticate(&state.accounts, input) {
            Ok(account) => {
                tracing::info!(user = %account.user, "Login accepted");
                Ok(account.user)
            }
            Err(err) => {
                tracing::warn!(code = err.code(), "Login rejected");
                Err(err)
            }
        }
    }

    /// Snapshot of all accounts in insertion order.
    #[must_use]
    pub fn accounts(&self) -> Vec<Account> {
        self.lock().accounts.list_all().to_vec()
    }

    /// One account by sequence number.
    pub fn account(&self, seq: AccountSeq) -> Result<Account> {
        self.lock()
            .accounts
            .find_by_sequence(seq)
            .cloned()
            .ok_or(BankError::AccountNotFound)
    }

    /// Add to the shared balance. Returns the new balance.
    pub fn deposit(&self, amount: Amount) -> Result<i64> {
        let mut state = self.lock();
        let result = state.ledger.deposit(amount);
        match &result {
            Ok(balance) => tracing::info!(%amount, balance, "Deposit applied"),
            Err(err) => tracing::warn!(code = err.code(), %amount, "Deposit rejected"),
        }
        result
    }

    /// Subtract from the shared balance. Returns the new balance.
    pub fn withdraw(&self, amount: Amount) -> Result<i64> {
        let mut state = self.lock();
        let result = state.ledger.withdraw(amount);
        match &result {
            Ok(balance) => tracing::info!(%amount, balance, "Withdrawal applied"),
            Err(err) => tracing::warn!(
                code = err.code(),
                %amount,
                balance = state.ledger.balance(),
                "Withdrawal rejected"
            ),
        }
        result
    }

    /// Current shared balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.lock().ledger.balance()
    }
}
