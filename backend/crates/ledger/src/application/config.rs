//! Application Configuration
//!
//! Configuration for the Ledger application layer.

use platform::password::PasswordPolicy;

/// Ledger application configuration
#[derive(Debug, Clone, Default)]
pub struct LedgerConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
    /// Length bounds applied at registration
    pub password_policy: PasswordPolicy,
}

impl LedgerConfig {
    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
