//! Route identifiers.
//!
//! Every route renders the same product page; routes only decide which
//! navigation link is active.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::StorefrontError;

/// A storefront route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Index route behind the logo link.
    Home,
    Collections,
    Men,
    Women,
    About,
    Contact,
}

impl Route {
    /// Routes listed in the navigation bar and drawer, in display order.
    pub const NAV: [Route; 5] = [
        Route::Collections,
        Route::Men,
        Route::Women,
        Route::About,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Collections => "/collections",
            Route::Men => "/men",
            Route::Women => "/women",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    /// Link text.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Sneakers",
            Route::Collections => "Collections",
            Route::Men => "Men",
            Route::Women => "Women",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    /// Resolve a path, ignoring a trailing slash and any query or fragment.
    pub fn from_path(path: &str) -> Result<Self, StorefrontError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = bare.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };

        std::iter::once(Route::Home)
            .chain(Route::NAV)
            .find(|route| route.path() == normalized)
            .ok_or_else(|| StorefrontError::UnknownRoute(path.to_string()))
    }
}

impl FromStr for Route {
    type Err = StorefrontError;

    /// Accepts a path (`/men`) or a bare identifier (`men`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            Route::from_path(s)
        } else {
            Route::from_path(&format!("/{s}"))
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_round_trip() {
        for route in std::iter::once(Route::Home).chain(Route::NAV) {
            assert_eq!(Route::from_path(route.path()), Ok(route));
        }
    }

    #[test]
    fn test_path_normalization() {
        assert_eq!(Route::from_path("/men/"), Ok(Route::Men));
        assert_eq!(Route::from_path("/women?size=9"), Ok(Route::Women));
        assert_eq!(Route::from_path(""), Ok(Route::Home));
        assert_eq!("contact".parse::<Route>(), Ok(Route::Contact));
    }

    #[test]
    fn test_unknown_route() {
        assert_eq!(
            Route::from_path("/checkout"),
            Err(StorefrontError::UnknownRoute("/checkout".to_string()))
        );
        assert!(Route::from_path("/MEN").is_err());
    }
}
