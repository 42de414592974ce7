//! Startup fixture accounts.

use minibank_types::{Account, AccountSeq};

/// `(sequence, identifier, password)` for every fixture account.
const SEED: [(u64, &str, &str); 5] = [
    (1, "user1", "pass1"),
    (2, "user2", "pass2"),
    (3, "user3", "pass3"),
    (4, "user4", "pass4"),
    (5, "admin", "admin"),
];

/// The five accounts a seeded store starts with.
///
/// These predate the registration rules: their identifiers and passwords
/// are shorter than a new registration would allow.
#[must_use]
pub fn seed_accounts() -> Vec<Account> {
    SEED.iter()
        .map(|&(seq, id, password)| Account::new(AccountSeq(seq), id, password))
        .collect()
}
