//! Navigation menu contents for the drawer and the sidebar.
//!
//! Both renderings are built from the same inputs, so they cannot disagree
//! about which group is open or which link is active.

use crate::backend::utils::route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVariant {
    /// Slide-in sheet on narrow windows.
    Drawer,
    /// Persistent column on wide windows.
    Sidebar,
}

impl NavVariant {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Drawer => "nav-drawer",
            Self::Sidebar => "nav-sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
    pub active: bool,
}

impl NavLink {
    fn new(label: &'static str, path: &'static str, icon: &'static str, current: &str) -> Self {
        Self {
            label,
            path,
            icon,
            tone: Tone::Normal,
            active: current == path,
        }
    }

    fn destructive(mut self) -> Self {
        self.tone = Tone::Destructive;
        self
    }

    pub fn class(&self) -> &'static str {
        match (self.active, self.tone) {
            (true, Tone::Destructive) => "nav-link nav-link-destructive active",
            (false, Tone::Destructive) => "nav-link nav-link-destructive",
            (true, Tone::Normal) => "nav-link active",
            (false, Tone::Normal) => "nav-link",
        }
    }
}

/// The collapsible "Trading" group. `links` is empty while collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub label: &'static str,
    pub icon: &'static str,
    pub expanded: bool,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEntry {
    Link(NavLink),
    Group(NavGroup),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub variant: NavVariant,
    pub primary: Vec<NavEntry>,
    pub footer: Vec<NavLink>,
}

#[cfg(test)]
impl NavMenu {
    pub fn group(&self) -> Option<&NavGroup> {
        self.primary.iter().find_map(|entry| match entry {
            NavEntry::Group(group) => Some(group),
            NavEntry::Link(_) => None,
        })
    }

    /// Every link currently shown, group children included.
    pub fn visible_links(&self) -> Vec<&NavLink> {
        let mut links = Vec::new();
        for entry in &self.primary {
            match entry {
                NavEntry::Link(link) => links.push(link),
                NavEntry::Group(group) => links.extend(group.links.iter()),
            }
        }
        links.extend(self.footer.iter());
        links
    }
}

fn trading_group(expanded: bool, current: &str) -> NavGroup {
    let links = if expanded {
        vec![
            NavLink::new("Skills Barter", route::TRADING_SKILLS, "icon-briefcase", current),
            NavLink::new("Goods Barter", route::TRADING_GOODS, "icon-bag", current),
        ]
    } else {
        Vec::new()
    };
    NavGroup {
        label: "Trading",
        icon: "icon-bag",
        expanded,
        links,
    }
}

/// Builds the menu for one rendering of the navigation.
pub fn build_menu(variant: NavVariant, expanded: bool, current: &str) -> NavMenu {
    let mut primary = vec![
        NavEntry::Link(NavLink::new("Dashboard", route::DASHBOARD, "icon-home", current)),
        NavEntry::Group(trading_group(expanded, current)),
        NavEntry::Link(NavLink::new("Messages", route::MESSAGES, "icon-message", current)),
        NavEntry::Link(NavLink::new("Community", route::COMMUNITY, "icon-users", current)),
    ];
    let logout = NavLink::new("Logout", route::LOGOUT, "icon-logout", current).destructive();

    let footer = match variant {
        NavVariant::Drawer => {
            primary.push(NavEntry::Link(NavLink::new(
                "Settings",
                route::SETTINGS,
                "icon-settings",
                current,
            )));
            vec![logout]
        }
        NavVariant::Sidebar => vec![
            NavLink::new("Wallet", route::WALLET, "icon-wallet", current),
            NavLink::new("Settings", route::SETTINGS, "icon-settings", current),
            logout,
        ],
    };

    NavMenu {
        variant,
        primary,
        footer,
    }
}
