//! Logo component.

use crate::backend::utils::route;
use dioxus::prelude::*;
use dioxus_router::components::Link;

/// Brand mark linking back to the dashboard.
#[component]
pub fn Logo() -> Element {
    rsx! {
        Link { class: "brand", to: route::DASHBOARD,
            div { class: "brand-mark" }
            span { class: "brand-name", "SwapSeva" }
        }
    }
}
