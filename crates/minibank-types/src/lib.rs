//! # minibank-types
//!
//! Shared types, errors, and configuration for **MiniBank**.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Account model**: [`Account`], [`AccountSeq`], [`Registration`], [`Credentials`]
//! - **Ledger amounts**: [`Amount`] (boundary-parsed, strictly positive)
//! - **Configuration**: [`ServiceConfig`], [`LogFormat`]
//! - **Errors**: [`BankError`] with `BK_ERR_` log codes and [`ErrorKind`]
//! - **Constants**: client-facing messages, validation limits, defaults

pub mod account;
pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
mod parse;

pub use account::*;
pub use amount::*;
pub use config::*;
pub use error::*;

// Constants are accessed via `minibank_types::constants::FOO`
// (not re-exported to avoid name collisions).
