//! The shared balance ledger.
//!
//! One process-wide integer balance, not tied to any account. Deposits add,
//! withdrawals subtract, and every rejected call leaves the balance exactly
//! as it was.

use minibank_types::{Amount, BankError, Result};

/// Holds the single shared balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceLedger {
    /// Current balance. Never driven negative by a withdrawal.
    balance: i64,
}

impl BalanceLedger {
    /// Create a ledger with a zero balance.
    #[must_use]
    pub fn new() -> Self {
        Self { balance: 0 }
    }

    /// Add `amount` and return the new balance.
    ///
    /// # Errors
    /// Returns `InvalidDepositAmount` if the sum would overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<i64> {
        let next = self
            .balance
            .checked_add(amount.get())
            .ok_or(BankError::InvalidDepositAmount)?;
        self.balance = next;
        Ok(next)
    }

    /// Subtract `amount` and return the new balance.
    ///
    /// # Errors
    /// Returns `InsufficientBalance` if `amount` exceeds the balance.
    pub fn withdraw(&mut self, amount: Amount) -> Result<i64> {
        if amount.get() > self.balance {
            return Err(BankError::InsufficientBalance {
                requested: amount.get(),
                available: self.balance,
            });
        }
        self.balance -= amount.get();
        Ok(self.balance)
    }

    /// Current balance.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }
}
