use crate::frontend::components::layout::DashboardLayout;
use crate::frontend::pages::auth::{Login, Logout};
use crate::frontend::pages::dashboard::{
    Community, Messages, NotFound, Overview, Settings, TradingGoods, TradingSkills, Wallet,
};

use dioxus::prelude::*;
use dioxus_router::Routable;

pub const LOGIN: &str = "/login";
pub const LOGOUT: &str = "/logout";
pub const DASHBOARD: &str = "/dashboard";
pub const TRADING_SKILLS: &str = "/dashboard/trading/skills";
pub const TRADING_GOODS: &str = "/dashboard/trading/goods";
pub const MESSAGES: &str = "/dashboard/messages";
pub const COMMUNITY: &str = "/dashboard/community";
pub const SETTINGS: &str = "/dashboard/settings";
pub const WALLET: &str = "/dashboard/wallet";

/// Root of every page in the trading group.
pub const TRADING_PREFIX: &str = "/dashboard/trading";

/// True when `path` is the trading root or lies below it.
/// `/dashboard/tradingpost` does not count.
pub fn is_trading_path(path: &str) -> bool {
    match path.strip_prefix(TRADING_PREFIX) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Overview {})]
    #[route("/login")]
    Login {},
    #[route("/logout")]
    Logout {},
    #[layout(DashboardLayout)]
        #[route("/dashboard")]
        Overview {},
        #[route("/dashboard/trading/skills")]
        TradingSkills {},
        #[route("/dashboard/trading/goods")]
        TradingGoods {},
        #[route("/dashboard/messages")]
        Messages {},
        #[route("/dashboard/community")]
        Community {},
        #[route("/dashboard/settings")]
        Settings {},
        #[route("/dashboard/wallet")]
        Wallet {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
