//! Layout states.

use crate::backend::utils::route::is_trading_path;

/// Expanded/collapsed state of the "Trading" menu group.
///
/// Opens by itself only when the route *starts* matching the trading prefix
/// (or already matches on mount). Moving between trading pages does not
/// reopen a group the user collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    expanded: bool,
    on_trading_route: bool,
}

impl Disclosure {
    /// State for a fresh mount at `path`.
    pub fn mounted_at(path: &str) -> Self {
        let on_trading_route = is_trading_path(path);
        Self {
            expanded: on_trading_route,
            on_trading_route,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        log::debug!("Trading menu {}", if self.expanded { "expanded" } else { "collapsed" });
    }

    /// Feeds the current route. Returns whether the group was forced open.
    pub fn observe_route(&mut self, path: &str) -> bool {
        let matches = is_trading_path(path);
        let entering = matches && !self.on_trading_route;
        self.on_trading_route = matches;
        if entering && !self.expanded {
            self.expanded = true;
            return true;
        }
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Unknown names fall back to light.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark mode",
            Self::Dark => "Switch to light mode",
        }
    }
}
