use crate::error::{DashError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const BRAND: &str = "LogiTrack";

/// Top-level navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
    Shipments,
    Orders,
    Analytics,
    Settings,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Shipments,
        Route::Orders,
        Route::Analytics,
        Route::Settings,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Shipments => "/shipments",
            Route::Orders => "/orders",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    /// Title shown in the header bar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Shipments => "Shipments",
            Route::Orders => "Orders",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard Overview",
            Route::Shipments => "Shipments Management",
            Route::Orders => "Orders Management",
            Route::Analytics => "Analytics Dashboard",
            Route::Settings => "Settings",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Route::Dashboard => "Monitor shipments, fleet and orders at a glance",
            Route::Shipments => "Track and manage all shipments",
            Route::Orders => "Manage customer orders and tracking",
            Route::Analytics => "Track performance and business insights",
            Route::Settings => "Manage your account and application settings",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Route {
    type Err = DashError;

    /// Accepts a path (`/orders`) or a lowercase name (`orders`).
    fn from_str(s: &str) -> Result<Self> {
        Route::ALL
            .iter()
            .copied()
            .find(|route| route.path() == s || route.title().to_lowercase() == s)
            .ok_or_else(|| DashError::UnknownRoute(s.to_string()))
    }
}
