//! Guarded navigation over the route table.
//!
//! # Responsibilities
//! - Resolve locations against the route table
//! - Run the guard on every attempt, following redirects up to a limit
//! - Load the matched views through the shared cache
//! - Commit the final destination to history

use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use crate::config::GuardConfig;
use crate::guard::{AuthProvider, Decision, GuardError, NavigationGuard, NavigationRequest, NavigationTarget};
use crate::navigation::history::History;
use crate::navigation::location::{Location, LocationError};
use crate::observability::metrics;
use crate::routing::{RouteMatch, RouteTable};
use crate::views::{LoadError, View, ViewCache};

/// Default bound on consecutive redirects within one navigation.
pub const DEFAULT_MAX_REDIRECTS: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error(transparent)]
    InvalidLocation(#[from] LocationError),

    #[error("no route matches `{0}`")]
    NotFound(String),

    #[error("navigation guard failed: {0}")]
    Guard(#[from] GuardError),

    #[error("navigation to `{location}` exceeded {limit} redirects")]
    RedirectLoop { location: String, limit: usize },

    #[error(transparent)]
    View(#[from] LoadError),

    #[error("no previous entry to go back to")]
    NoHistory,
}

/// A committed navigation.
#[derive(Debug, Clone)]
pub struct Navigation {
    /// Correlation id, also attached to the navigation's log events.
    pub id: Uuid,
    /// Where the navigation ended up.
    pub to: NavigationTarget,
    /// Names of the matched routes, section first.
    pub matched: Vec<String>,
    /// Loaded views, parallel to `matched`.
    pub views: Vec<Arc<View>>,
    /// Redirect locations followed before landing, in order.
    pub redirects: Vec<String>,
}

impl Navigation {
    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Resolve a location as the router would, without running the guard.
/// Query and fragment are ignored for matching.
pub fn resolve_location(table: &RouteTable, requested: &str) -> Result<(Location, RouteMatch), NavigationError> {
    let location = Location::parse(requested)?;
    let route = table
        .resolve(&location.path)
        .ok_or_else(|| NavigationError::NotFound(location.path.clone()))?;
    Ok((location, route))
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Push,
    Replace,
    Back,
}

/// Router driving the console's navigations.
pub struct Router<A> {
    table: Arc<RouteTable>,
    guard: NavigationGuard<A>,
    views: ViewCache,
    history: History,
    max_redirects: usize,
}

impl<A: AuthProvider> Router<A> {
    pub fn new(table: Arc<RouteTable>, guard: NavigationGuard<A>) -> Self {
        Self {
            table,
            guard,
            views: ViewCache::new(),
            history: History::new(),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Build a router with the guard settings from configuration.
    pub fn from_config(table: Arc<RouteTable>, auth: A, config: &GuardConfig) -> Self {
        Self::new(table, NavigationGuard::with_policy(auth, config.auth_failure))
            .with_max_redirects(config.max_redirects)
    }

    /// Share a view cache with other routers.
    pub fn with_view_cache(mut self, views: ViewCache) -> Self {
        self.views = views;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Navigate to `location`, adding a history entry.
    pub async fn push(&mut self, location: &str) -> Result<Navigation, NavigationError> {
        self.navigate(location, Mode::Push).await
    }

    /// Navigate to `location`, replacing the current history entry.
    pub async fn replace(&mut self, location: &str) -> Result<Navigation, NavigationError> {
        self.navigate(location, Mode::Replace).await
    }

    /// Navigate to the previous history entry. The guard runs again, so
    /// going back may itself be redirected.
    pub async fn back(&mut self) -> Result<Navigation, NavigationError> {
        let previous = self
            .history
            .previous()
            .map(|target| target.full_path.clone())
            .ok_or(NavigationError::NoHistory)?;
        self.navigate(&previous, Mode::Back).await
    }

    pub fn current(&self) -> Option<&NavigationTarget> {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn views(&self) -> &ViewCache {
        &self.views
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn guard(&self) -> &NavigationGuard<A> {
        &self.guard
    }

    async fn navigate(&mut self, requested: &str, mode: Mode) -> Result<Navigation, NavigationError> {
        let id = Uuid::new_v4();
        let started = Instant::now();

        let result = self.run(id, requested, mode).await;

        let outcome = match &result {
            Ok(nav) if nav.was_redirected() => "redirected",
            Ok(_) => "completed",
            Err(NavigationError::NotFound(_)) => "not_found",
            Err(_) => "failed",
        };
        metrics::record_navigation(outcome, started.elapsed());

        match &result {
            Ok(nav) => tracing::info!(
                %id,
                requested,
                to = %nav.to.full_path,
                route = %nav.to.name,
                redirects = nav.redirects.len(),
                "Navigation committed"
            ),
            Err(e) => tracing::warn!(%id, requested, error = %e, "Navigation aborted"),
        }

        result
    }

    async fn run(&mut self, id: Uuid, requested: &str, mode: Mode) -> Result<Navigation, NavigationError> {
        let mut location = Location::parse(requested)?;
        let mut redirects = Vec::new();

        loop {
            let route = self
                .table
                .resolve(&location.path)
                .ok_or_else(|| NavigationError::NotFound(location.path.clone()))?;

            let request = self.request_to(&route, &location);

            match self.guard.check(&request)? {
                Decision::Proceed => {
                    let views = self.load_views(&route).await?;
                    let to = request.to;
                    match mode {
                        Mode::Push => self.history.push(to.clone()),
                        Mode::Replace => self.history.replace(to.clone()),
                        Mode::Back => self.history.go_back(to.clone()),
                    }
                    return Ok(Navigation {
                        id,
                        to,
                        matched: route.matched_names().map(str::to_string).collect(),
                        views,
                        redirects,
                    });
                }
                Decision::RedirectTo(next) => {
                    if redirects.len() >= self.max_redirects {
                        return Err(NavigationError::RedirectLoop {
                            location: requested.to_string(),
                            limit: self.max_redirects,
                        });
                    }
                    tracing::debug!(%id, from = %location, to = %next, "Guard redirected navigation");
                    location = Location::parse(&next)?;
                    redirects.push(next);
                }
            }
        }
    }

    /// Guard input for an attempt at `location`. `from` is the committed
    /// entry, so every hop of a redirect chain sees the same origin.
    fn request_to(&self, route: &RouteMatch, location: &Location) -> NavigationRequest {
        NavigationRequest {
            to: NavigationTarget::new(route.name.clone(), location.path.clone(), location.full_path()),
            from: self.history.current().cloned(),
        }
    }

    async fn load_views(&self, route: &RouteMatch) -> Result<Vec<Arc<View>>, LoadError> {
        let mut views = Vec::with_capacity(route.matched.len());
        for matched in &route.matched {
            views.push(self.views.load(&matched.name, &matched.loader).await?);
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::AuthError;
    use crate::routing::console_routes;
    use crate::routing::Route;
    use crate::views::Loader;

    struct Fixed(bool);

    impl AuthProvider for Fixed {
        fn is_unauthorized(&self) -> Result<bool, AuthError> {
            Ok(self.0)
        }
    }

    fn router(unauthorized: bool) -> Router<Fixed> {
        let table = Arc::new(console_routes().unwrap());
        Router::new(table, NavigationGuard::new(Fixed(unauthorized)))
    }

    #[tokio::test]
    async fn test_unauthorized_redirected_to_login() {
        let mut router = router(true);
        let nav = router.push("/index/security").await.unwrap();

        assert_eq!(nav.to.name, "welcome-login");
        assert_eq!(nav.to.full_path, "/");
        assert_eq!(nav.redirects, vec!["/".to_string()]);
        assert_eq!(nav.matched, vec!["welcome", "welcome-login"]);
        assert_eq!(router.history().len(), 1);
    }

    #[tokio::test]
    async fn test_authorized_redirected_to_index() {
        let mut router = router(false);
        let nav = router.push("/forget").await.unwrap();

        assert_eq!(nav.to.name, "manage");
        assert_eq!(nav.to.path, "/index");
        assert_eq!(nav.redirects, vec!["/index".to_string()]);
        assert_eq!(
            nav.views.iter().map(|v| v.component.as_str()).collect::<Vec<_>>(),
            vec!["IndexView", "main/Manage"]
        );
    }

    #[tokio::test]
    async fn test_not_found_skips_guard_and_history() {
        let mut router = router(true);
        let err = router.push("/index/unknown").await.unwrap_err();
        assert!(matches!(err, NavigationError::NotFound(ref p) if p == "/index/unknown"));
        assert!(router.current().is_none());
        assert!(router.views().is_empty());
    }

    #[tokio::test]
    async fn test_redirect_to_unknown_route() {
        // No login page in this table, so the anonymous redirect to "/" dead-ends.
        let table = RouteTable::new(vec![Route::new("/index", "index", Loader::component("IndexView"))
            .with_children(vec![Route::new("", "manage", Loader::component("main/Manage"))])])
        .unwrap();
        let mut router = Router::new(Arc::new(table), NavigationGuard::new(Fixed(true)));

        let err = router.push("/index").await.unwrap_err();
        assert!(matches!(err, NavigationError::NotFound(ref p) if p == "/"));
    }

    #[tokio::test]
    async fn test_redirect_loop_is_bounded() {
        // A welcome-named route at /index redirects an authenticated user to itself.
        let table = RouteTable::new(vec![Route::new("/index", "welcome-index", Loader::component("IndexView"))])
            .unwrap();
        let mut router = Router::new(Arc::new(table), NavigationGuard::new(Fixed(false)))
            .with_max_redirects(3);

        let err = router.push("/index").await.unwrap_err();
        assert!(matches!(err, NavigationError::RedirectLoop { limit: 3, .. }));
        assert!(router.current().is_none());
    }

    #[tokio::test]
    async fn test_views_loaded_once_across_navigations() {
        let mut router = router(false);
        router.push("/index/security").await.unwrap();
        router.push("/index/strategy-group").await.unwrap();
        router.push("/index/security").await.unwrap();

        assert!(router.views().is_loaded("index"));
        assert!(router.views().is_loaded("security"));
        assert!(router.views().is_loaded("strategy-group"));
        assert!(!router.views().is_loaded("welcome-login"));
        assert_eq!(router.views().len(), 3);
    }

    #[tokio::test]
    async fn test_guard_request_carries_previous_target() {
        let mut router = router(false);
        let table = console_routes().unwrap();
        let (location, route) = resolve_location(&table, "/index/security?tab=1").unwrap();

        let request = router.request_to(&route, &location);
        assert!(request.from.is_none());
        assert_eq!(request.to.name, "security");
        assert_eq!(request.to.path, "/index/security");
        assert_eq!(request.to.full_path, "/index/security?tab=1");

        router.push("/index/strategy-group#top").await.unwrap();
        let request = router.request_to(&route, &location);
        let from = request.from.unwrap();
        assert_eq!(from.name, "strategy-group");
        assert_eq!(from.full_path, "/index/strategy-group#top");

        // A redirected push leaves the origin at the last committed entry.
        router.push("/forget").await.unwrap();
        let from = router.request_to(&route, &location).from.unwrap();
        assert_eq!(from.name, "manage");
    }

    #[test]
    fn test_resolve_location_ignores_query_and_fragment() {
        let table = console_routes().unwrap();

        let (location, route) = resolve_location(&table, "/index/security?tab=1").unwrap();
        assert_eq!(route.name, "security");
        assert_eq!(location.query.as_deref(), Some("tab=1"));

        let (_, route) = resolve_location(&table, "/forget#reset").unwrap();
        assert_eq!(route.name, "welcome-forget");

        let err = resolve_location(&table, "/index/alarms?tab=1").unwrap_err();
        assert!(matches!(err, NavigationError::NotFound(ref p) if p == "/index/alarms"));
        assert!(matches!(
            resolve_location(&table, "https://example.com/index"),
            Err(NavigationError::InvalidLocation(_))
        ));
    }

    #[tokio::test]
    async fn test_back_and_replace() {
        let mut router = router(false);
        assert!(matches!(router.back().await, Err(NavigationError::NoHistory)));

        router.push("/index").await.unwrap();
        router.push("/index/security").await.unwrap();
        router.replace("/index/create-Alarm").await.unwrap();
        assert_eq!(router.history().len(), 2);

        let nav = router.back().await.unwrap();
        assert_eq!(nav.to.name, "manage");
        assert_eq!(router.history().len(), 1);
    }
}
