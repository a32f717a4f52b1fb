//! Access tokens issued at login.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::session::store::SessionError;

/// Bearer token plus the instant it stops being valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub expire: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, expire: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expire,
        }
    }

    /// Token valid for `ttl` from now. Fails when the expiry instant is
    /// not representable.
    pub fn expires_in(token: impl Into<String>, ttl: Duration) -> Result<Self, SessionError> {
        let expire = Utc::now()
            .checked_add_signed(ttl)
            .ok_or(SessionError::InvalidExpiry(ttl.num_seconds()))?;
        Ok(Self::new(token, expire))
    }

    /// Token valid for `seconds` from now, as given on the command line.
    pub fn expires_in_seconds(token: impl Into<String>, seconds: i64) -> Result<Self, SessionError> {
        let ttl = Duration::try_seconds(seconds).ok_or(SessionError::InvalidExpiry(seconds))?;
        Self::expires_in(token, ttl)
    }

    /// A token is expired from its `expire` instant onwards.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expire <= now
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}
