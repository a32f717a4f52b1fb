//! Authentication state collaborator.

use std::sync::Arc;

use crate::session::SessionError;

/// Error raised when the auth state cannot be determined.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("session state unavailable: {0}")]
    Session(#[from] SessionError),

    #[error("auth check failed: {0}")]
    Check(String),
}

/// Source of the current session validity.
///
/// Implementations must be side-effect free from the caller's point of view
/// and cheap enough to query once per navigation.
pub trait AuthProvider: Send + Sync {
    /// Returns true when there is no valid authenticated session.
    fn is_unauthorized(&self) -> Result<bool, AuthError>;
}

impl<T: AuthProvider + ?Sized> AuthProvider for Arc<T> {
    fn is_unauthorized(&self) -> Result<bool, AuthError> {
        (**self).is_unauthorized()
    }
}

impl<T: AuthProvider + ?Sized> AuthProvider for &T {
    fn is_unauthorized(&self) -> Result<bool, AuthError> {
        (**self).is_unauthorized()
    }
}
