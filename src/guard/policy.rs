//! Authentication redirect policy.
//!
//! # Responsibilities
//! - Keep authenticated users away from the welcome screens
//! - Keep unauthenticated users out of the management section
//! - Let every other navigation through unchanged
//!
//! # Design Decisions
//! - Welcome screens are recognised by route name prefix, management pages
//!   by full path prefix. Both are plain string prefixes, so a future route
//!   named `welcome-back` is treated as a welcome screen too.
//! - The auth provider is queried on every check, never cached

use std::fmt;

use crate::config::AuthFailurePolicy;
use crate::guard::provider::{AuthError, AuthProvider};
use crate::observability::metrics;

/// Route name prefix shared by the unauthenticated screens.
pub const WELCOME_NAME_PREFIX: &str = "welcome";

/// Path prefix of the management section.
pub const INDEX_PATH_PREFIX: &str = "/index";

/// Where authenticated users land.
pub const AUTHENTICATED_HOME: &str = "/index";

/// Where unauthenticated users land.
pub const LOGIN_PATH: &str = "/";

/// A resolved navigation endpoint as seen by the guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    /// Name of the matched leaf route. Never empty.
    pub name: String,
    /// Requested path, without query or fragment.
    pub path: String,
    /// Requested path including query and fragment.
    pub full_path: String,
}

impl NavigationTarget {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        full_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            full_path: full_path.into(),
        }
    }
}

/// One navigation attempt.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub to: NavigationTarget,
    /// `None` on the initial navigation.
    pub from: Option<NavigationTarget>,
}

/// Outcome of a guard check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    RedirectTo(String),
}

impl Decision {
    fn label(&self) -> &'static str {
        match self {
            Decision::Proceed => "proceed",
            Decision::RedirectTo(_) => "redirect",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Proceed => f.write_str("proceed"),
            Decision::RedirectTo(path) => write!(f, "redirect to {path}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Guard evaluated before every navigation.
pub struct NavigationGuard<A> {
    auth: A,
    on_auth_failure: AuthFailurePolicy,
}

impl<A: AuthProvider> NavigationGuard<A> {
    /// Create a guard that fails closed when the auth check errors.
    pub fn new(auth: A) -> Self {
        Self::with_policy(auth, AuthFailurePolicy::default())
    }

    pub fn with_policy(auth: A, on_auth_failure: AuthFailurePolicy) -> Self {
        Self {
            auth,
            on_auth_failure,
        }
    }

    /// Decide whether `request` may proceed.
    pub fn check(&self, request: &NavigationRequest) -> Result<Decision, GuardError> {
        let unauthorized = self.unauthorized()?;
        let to = &request.to;

        let decision = if to.name.starts_with(WELCOME_NAME_PREFIX) && !unauthorized {
            Decision::RedirectTo(AUTHENTICATED_HOME.to_string())
        } else if to.full_path.starts_with(INDEX_PATH_PREFIX) && unauthorized {
            Decision::RedirectTo(LOGIN_PATH.to_string())
        } else {
            Decision::Proceed
        };

        tracing::debug!(
            to = %to.full_path,
            route = %to.name,
            from = request.from.as_ref().map(|f| f.full_path.as_str()).unwrap_or("-"),
            unauthorized,
            decision = %decision,
            "Guard evaluated"
        );
        metrics::record_guard_decision(decision.label());

        Ok(decision)
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn on_auth_failure(&self) -> AuthFailurePolicy {
        self.on_auth_failure
    }

    fn unauthorized(&self) -> Result<bool, GuardError> {
        match self.auth.is_unauthorized() {
            Ok(unauthorized) => Ok(unauthorized),
            Err(e) => match self.on_auth_failure {
                AuthFailurePolicy::Propagate => Err(GuardError::Auth(e)),
                AuthFailurePolicy::Unauthorized => {
                    tracing::warn!(error = %e, "Auth check failed, treating session as unauthorized");
                    Ok(true)
                }
                AuthFailurePolicy::Authorized => {
                    tracing::warn!(error = %e, "Auth check failed, treating session as authorized");
                    Ok(false)
                }
            },
        }
    }
}
