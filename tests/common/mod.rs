//! Shared utilities for integration tests.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use console_router::guard::{AuthError, AuthProvider};
use console_router::routing::Route;
use console_router::views::{LoadError, Loader, View};

/// Auth provider whose answer can be flipped mid-test.
#[allow(dead_code)]
#[derive(Default)]
pub struct SwitchAuth {
    pub unauthorized: AtomicBool,
    pub failing: AtomicBool,
    pub calls: AtomicU32,
}

#[allow(dead_code)]
impl SwitchAuth {
    pub fn new(unauthorized: bool) -> Arc<Self> {
        let auth = Self::default();
        auth.unauthorized.store(unauthorized, Ordering::SeqCst);
        Arc::new(auth)
    }

    pub fn set_unauthorized(&self, unauthorized: bool) {
        self.unauthorized.store(unauthorized, Ordering::SeqCst);
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthProvider for SwitchAuth {
    fn is_unauthorized(&self) -> Result<bool, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(AuthError::Check("session backend unreachable".into()));
        }
        Ok(self.unauthorized.load(Ordering::SeqCst))
    }
}

/// Loader that counts its invocations and fails while `fail` is set.
#[allow(dead_code)]
pub fn counting_loader(component: &'static str, calls: Arc<AtomicU32>, fail: Arc<AtomicBool>) -> Loader {
    Loader::new(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        let failing = fail.load(Ordering::SeqCst);
        async move {
            if failing {
                Err(LoadError::new(component, "module fetch failed"))
            } else {
                Ok(View::new(component))
            }
        }
    })
}

/// Minimal two-section table mirroring the console's shape.
#[allow(dead_code)]
pub fn two_section_routes(security: Loader) -> Vec<Route> {
    vec![
        Route::new("/", "welcome", Loader::component("WelcomeView")).with_children(vec![
            Route::new("", "welcome-login", Loader::component("welcome/LoginPage")),
        ]),
        Route::new("/index", "index", Loader::component("IndexView")).with_children(vec![
            Route::new("", "manage", Loader::component("main/Manage")),
            Route::new("security", "security", security),
        ]),
    ]
}

/// Unique token file path under the system temp dir.
#[allow(dead_code)]
pub fn temp_token_path() -> PathBuf {
    std::env::temp_dir()
        .join(format!("console-router-it-{}", uuid::Uuid::new_v4()))
        .join("session.json")
}
