//! Error types for command handling.

use thiserror::Error;

/// Top-level rejection returned by [`Store::apply`](super::Store::apply).
///
/// Display strings are player-facing; the shell shows them verbatim as
/// error notices. A rejected command leaves the store untouched and emits
/// no effects.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// Submitted promo code does not match the configured one.
    #[error("Invalid discount code!")]
    InvalidDiscountCode,

    /// Order management attempted without an admin session.
    #[error("Only admins can manage orders!")]
    Unauthorized,
}

/// Login or registration failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username has no match in the directory.
    #[error("Account does not exist! Please register first.")]
    AccountNotFound,

    /// Password check failed for an existing account.
    #[error("Incorrect password!")]
    InvalidCredentials,

    /// Admin access requested with the wrong secret.
    #[error("Incorrect admin password!")]
    InvalidAdminPassword,

    /// Admin login requested for an account without the admin flag.
    #[error("This account is not an admin account!")]
    NotAnAdminAccount,
}
