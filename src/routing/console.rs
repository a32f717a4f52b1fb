//! The monitor console's route table.
//!
//! Two sections: `welcome` (login and password reset, reachable without a
//! session) and `index` (management pages, session required). Paths and
//! names are part of the console's public surface and must stay literal.

use crate::routing::route::Route;
use crate::routing::table::{RouteTable, RouteTableError};
use crate::views::Loader;

/// Build the console route table.
pub fn console_routes() -> Result<RouteTable, RouteTableError> {
    RouteTable::new(vec![
        Route::new("/", "welcome", Loader::component("WelcomeView")).with_children(vec![
            Route::new("", "welcome-login", Loader::component("welcome/LoginPage")),
            Route::new("forget", "welcome-forget", Loader::component("welcome/ForgetPage")),
        ]),
        Route::new("/index", "index", Loader::component("IndexView")).with_children(vec![
            Route::new("", "manage", Loader::component("main/Manage")),
            Route::new("security", "security", Loader::component("main/Security")),
            Route::new("strategy-group", "strategy-group", Loader::component("main/StrategyGroup")),
            Route::new("create-Alarm", "create-Alarm", Loader::component("main/CreateAlarm")),
            Route::new(
                "events-notifications",
                "events-notifications",
                Loader::component("main/EventsNotifications"),
            ),
        ]),
    ])
}
