//! # minibank-core
//!
//! Account and balance core for **MiniBank**.
//!
//! - [`AccountStore`]: insertion-ordered records, indexed by identifier and sequence
//! - [`RegistrationValidator`]: ordered policy checks before an insert
//! - [`Authenticator`]: credential check with a single generic failure
//! - [`BalanceLedger`]: the one shared balance, deposit/withdraw
//! - [`Bank`]: cloneable handle that serializes all of the above behind one lock
//!
//! ## Request Flow
//!
//! ```text
//! HTTP query → typed input (Registration / Credentials / Amount / AccountSeq)
//!     → Bank (lock) → validator / authenticator / store / ledger → Result
//! ```

pub mod auth;
pub mod bank;
pub mod fixtures;
pub mod ledger;
pub mod registration;
pub mod store;

pub use auth::Authenticator;
pub use bank::Bank;
pub use ledger::BalanceLedger;
pub use registration::RegistrationValidator;
pub use store::AccountStore;
