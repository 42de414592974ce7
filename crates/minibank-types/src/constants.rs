//! System-wide constants for MiniBank.

/// Minimum identifier length, in characters.
pub const MIN_ID_LEN: usize = 6;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Default API host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default API listen port.
pub const DEFAULT_API_PORT: u16 = 3000;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "minibank=info,minibank_api=info,minibank_core=info,tower_http=debug";

// ---------------------------------------------------------------------------
// Success acknowledgements (HTTP response bodies)
// ---------------------------------------------------------------------------

/// Body message for a successful registration.
pub const MSG_REGISTERED: &str = "register successfully !!!!!!";

/// Body message for a successful login.
pub const MSG_LOGIN_OK: &str = "Login successful";

/// Body message for a successful deposit.
pub const MSG_DEPOSIT_OK: &str = "Deposit successful";

/// Body message for a successful withdrawal.
pub const MSG_WITHDRAW_OK: &str = "Withdraw succeed";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name.
pub const SERVICE_NAME: &str = "MiniBank";
