//! Error types for MiniBank.
//!
//! The `Display` text of every variant is the exact message sent to HTTP
//! clients. For logs, each variant also carries a stable `BK_ERR_` code,
//! grouped by subsystem:
//! - 1xx: Registration errors
//! - 2xx: Authentication errors
//! - 3xx: Account lookup errors
//! - 4xx: Ledger errors
//! - 9xx: General / internal errors

use thiserror::Error;

/// Coarse error category, used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, missing or out-of-policy input (400).
    Validation,
    /// Credentials rejected (401).
    Authentication,
    /// The requested record does not exist (404).
    NotFound,
    /// Failure on the service side (500).
    Internal,
}

/// Central error enum for all MiniBank operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    // =================================================================
    // Registration Errors (1xx)
    // =================================================================
    /// Identifier or password absent or empty.
    #[error("id and password are required")]
    MissingCredentials,

    /// An account with this identifier already exists.
    #[error("id already exists")]
    DuplicateId,

    /// Identifier below the minimum length.
    #[error("id should be at least 6 characters long")]
    IdTooShort,

    /// Password below the minimum length.
    #[error("Password should be at least 6 characters long")]
    PasswordTooShort,

    /// Password has no `A`-`Z` character.
    #[error("Password should contain at least one uppercase letter")]
    PasswordMissingUppercase,

    /// Confirmation absent or different from the password.
    #[error("Confirmpassword should be the same as Password")]
    ConfirmationMismatch,

    // =================================================================
    // Authentication Errors (2xx)
    // =================================================================
    /// Any login failure. Deliberately does not say which part was wrong.
    #[error("Invalid id or password")]
    InvalidCredentials,

    // =================================================================
    // Lookup Errors (3xx)
    // =================================================================
    /// No account with the requested sequence number.
    #[error("User not found")]
    AccountNotFound,

    // =================================================================
    // Ledger Errors (4xx)
    // =================================================================
    /// Deposit amount absent, unparsable, non-positive, or overflowing.
    #[error("Invalid amount for deposit")]
    InvalidDepositAmount,

    /// Withdrawal amount absent, unparsable, or non-positive.
    #[error("Invalid amount")]
    InvalidWithdrawAmount,

    /// Withdrawal larger than the current balance.
    #[error("Amount should be less than Balance")]
    InsufficientBalance { requested: i64, available: i64 },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Configuration error (invalid environment value, etc.).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error (socket bind, etc.).
    #[error("I/O error: {0}")]
    Io(String),
}

impl BankError {
    /// Stable log code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingCredentials => "BK_ERR_100",
            Self::DuplicateId => "BK_ERR_101",
            Self::IdTooShort => "BK_ERR_102",
            Self::PasswordTooShort => "BK_ERR_103",
            Self::PasswordMissingUppercase => "BK_ERR_104",
            Self::ConfirmationMismatch => "BK_ERR_105",
            Self::InvalidCredentials => "BK_ERR_200",
            Self::AccountNotFound => "BK_ERR_300",
            Self::InvalidDepositAmount => "BK_ERR_400",
            Self::InvalidWithdrawAmount => "BK_ERR_401",
            Self::InsufficientBalance { .. } => "BK_ERR_402",
            Self::Internal(_) => "BK_ERR_900",
            Self::Configuration(_) => "BK_ERR_901",
            Self::Io(_) => "BK_ERR_902",
        }
    }

    /// Category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredentials
            | Self::DuplicateId
            | Self::IdTooShort
            | Self::PasswordTooShort
            | Self::PasswordMissingUppercase
            | Self::ConfirmationMismatch
            | Self::InvalidDepositAmount
            | Self::InvalidWithdrawAmount
            | Self::InsufficientBalance { .. } => ErrorKind::Validation,
            Self::InvalidCredentials => ErrorKind::Authentication,
            Self::AccountNotFound => ErrorKind::NotFound,
            Self::Internal(_) | Self::Configuration(_) | Self::Io(_) => ErrorKind::Internal,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BankError>;

// Conversion from std::io::Error
impl From<std::io::Error> for BankError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_balance_message_hides_amounts() {
        let err = BankError::InsufficientBalance {
            requested: 150,
            available: 100,
        };
        assert_eq!(err.to_string(), "Amount should be less than Balance");
        assert_eq!(err.code(), "BK_ERR_402");
    }

    #[test]
    fn registration_errors_are_validation() {
        let errors = [
            BankError::MissingCredentials,
            BankError::DuplicateId,
            BankError::IdTooShort,
            BankError::PasswordTooShort,
            BankError::PasswordMissingUppercase,
            BankError::ConfirmationMismatch,
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::Validation, "{err}");
            assert!(err.code().starts_with("BK_ERR_1"), "{}", err.code());
        }
    }

    #[test]
    fn lookup_and_auth_kinds() {
        assert_eq!(BankError::InvalidCredentials.kind(), ErrorKind::Authentication);
        assert_eq!(BankError::AccountNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(BankError::Internal("x".into()).kind(), ErrorKind::Internal);
    }

    #[test]
    fn all_codes_have_bk_err_prefix() {
        let errors = [
            BankError::InvalidCredentials,
            BankError::AccountNotFound,
            BankError::InvalidDepositAmount,
            BankError::InvalidWithdrawAmount,
            BankError::Configuration("bad port".into()),
            BankError::Io("refused".into()),
        ];
        for err in errors {
            assert!(
                err.code().starts_with("BK_ERR_"),
                "Error missing BK_ERR_ prefix: {}",
                err.code()
            );
        }
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err: BankError = io.into();
        assert!(matches!(err, BankError::Io(ref m) if m.contains("address in use")));
    }
}
