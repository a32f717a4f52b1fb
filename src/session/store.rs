//! Token storage.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::guard::{AuthError, AuthProvider};
use crate::session::token::AccessToken;

/// Error type for token storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("token file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("token file {} is malformed: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode token: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("no persistent token storage configured")]
    NoPersistentStorage,

    #[error("token lifetime of {0}s is out of range")]
    InvalidExpiry(i64),
}

/// Holds the current access token.
///
/// Tokens stored without "remember me" live in memory for the lifetime of
/// the store. Remembered tokens are written as JSON to the configured file.
#[derive(Debug, Default)]
pub struct TokenStore {
    memory: ArcSwapOption<AccessToken>,
    persist_path: Option<PathBuf>,
}

impl TokenStore {
    /// Store without persistent storage.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Store that remembers tokens in the file at `path`.
    ///
    /// The file is created on the first remembered login; it does not need
    /// to exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            memory: ArcSwapOption::empty(),
            persist_path: Some(path.into()),
        }
    }

    pub fn persist_path(&self) -> Option<&Path> {
        self.persist_path.as_deref()
    }

    /// Save a token. `remember` writes it to disk, otherwise it is kept in
    /// memory only.
    pub fn store(&self, token: AccessToken, remember: bool) -> Result<(), SessionError> {
        if remember {
            let path = self
                .persist_path
                .as_ref()
                .ok_or(SessionError::NoPersistentStorage)?;
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir).map_err(|source| SessionError::Io {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
            let body = serde_json::to_string(&token)?;
            fs::write(path, body).map_err(|source| SessionError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = ?path, expire = %token.expire, "Access token remembered");
        } else {
            tracing::info!(expire = %token.expire, "Access token stored for this session");
            self.memory.store(Some(Arc::new(token)));
        }
        Ok(())
    }

    /// Current valid token, if any.
    ///
    /// Remembered tokens take precedence over in-memory ones. An expired
    /// token is forgotten everywhere and reported as absent.
    pub fn take(&self) -> Result<Option<AccessToken>, SessionError> {
        let token = match self.read_persisted()? {
            Some(token) => Some(token),
            None => self.memory.load_full().map(|t| (*t).clone()),
        };

        match token {
            Some(token) if token.is_expired() => {
                tracing::info!(expire = %token.expire, "Access token expired, clearing session");
                self.clear()?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Forget the token in memory and on disk.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.memory.store(None);
        if let Some(path) = &self.persist_path {
            match fs::remove_file(path) {
                Ok(()) => tracing::debug!(path = ?path, "Token file removed"),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(source) => {
                    return Err(SessionError::Io {
                        path: path.clone(),
                        source,
                    })
                }
            }
        }
        Ok(())
    }

    // Blocking read: `AuthProvider::is_unauthorized` is synchronous and the
    // file holds a single small token. Callers inside a runtime accept the
    // brief stall for each guard check.
    fn read_persisted(&self) -> Result<Option<AccessToken>, SessionError> {
        let Some(path) = &self.persist_path else {
            return Ok(None);
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(SessionError::Io {
                    path: path.clone(),
                    source,
                })
            }
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| SessionError::Decode {
                path: path.clone(),
                source,
            })
    }
}

/// [`AuthProvider`] backed by a [`TokenStore`]: unauthorized means there is
/// no valid token.
#[derive(Debug, Clone)]
pub struct SessionAuth {
    store: Arc<TokenStore>,
}

impl SessionAuth {
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<TokenStore> {
        &self.store
    }
}

impl AuthProvider for SessionAuth {
    fn is_unauthorized(&self) -> Result<bool, AuthError> {
        Ok(self.store.take()?.is_none())
    }
}
