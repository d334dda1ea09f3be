//! Pages under the dashboard layout.

use crate::backend::utils::route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
fn PageFrame(title: &'static str, subtitle: &'static str) -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "{title}" }
            p { class: "page-subtitle", "{subtitle}" }
        }
    }
}

#[component]
pub fn Overview() -> Element {
    rsx! {
        PageFrame { title: "Dashboard", subtitle: "Your barter activity at a glance" }
    }
}

#[component]
pub fn TradingSkills() -> Element {
    rsx! {
        PageFrame { title: "Skills Barter", subtitle: "Offer your skills and find the ones you need" }
    }
}

#[component]
pub fn TradingGoods() -> Element {
    rsx! {
        PageFrame { title: "Goods Barter", subtitle: "Trade goods with people nearby" }
    }
}

#[component]
pub fn Messages() -> Element {
    rsx! {
        PageFrame { title: "Messages", subtitle: "Conversations with your trading partners" }
    }
}

#[component]
pub fn Community() -> Element {
    rsx! {
        PageFrame { title: "Community", subtitle: "People and groups around you" }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        PageFrame { title: "Settings", subtitle: "Profile and preferences" }
    }
}

#[component]
pub fn Wallet() -> Element {
    rsx! {
        PageFrame { title: "Wallet", subtitle: "Credits earned and spent" }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    log::warn!("No page at {path}");

    rsx! {
        div { class: "loading-placeholder",
            section { class: "page",
                h1 { class: "page-title", "Page not found" }
                p { class: "page-subtitle", "Nothing lives at {path}" }
                Link { class: "nav-link", to: route::DASHBOARD, "Back to dashboard" }
            }
        }
    }
}
