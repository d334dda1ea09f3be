//! Stateless navigation menu. The layout owns the disclosure state and
//! renders this twice, once per [`NavVariant`].

use crate::frontend::services::menu::{NavEntry, NavGroup, NavLink, NavVariant, build_menu};
use dioxus::prelude::*;
use dioxus_router::components::Link;

#[component]
pub fn Navigation(
    variant: NavVariant,
    expanded: bool,
    current: String,
    on_toggle: EventHandler<()>,
    on_navigate: EventHandler<()>,
) -> Element {
    let menu = build_menu(variant, expanded, &current);

    rsx! {
        nav { class: menu.variant.class(),
            div { class: "nav-section",
                for entry in menu.primary {
                    {match entry {
                        NavEntry::Link(link) => rsx! {
                            NavItem { key: "{link.path}", link, on_navigate }
                        },
                        NavEntry::Group(group) => rsx! {
                            TradingGroup { key: "{group.label}", group, on_toggle, on_navigate }
                        },
                    }}
                }
            }
            div { class: "nav-section nav-footer",
                for link in menu.footer {
                    NavItem { key: "{link.path}", link, on_navigate }
                }
            }
        }
    }
}

#[component]
fn TradingGroup(
    group: NavGroup,
    on_toggle: EventHandler<()>,
    on_navigate: EventHandler<()>,
) -> Element {
    let chevron = if group.expanded { "chevron-up" } else { "chevron-down" };

    rsx! {
        div { class: "nav-group",
            button {
                class: "nav-group-toggle",
                aria_expanded: group.expanded,
                onclick: move |_| on_toggle.call(()),
                span { class: "nav-group-label",
                    span { class: "nav-icon {group.icon}" }
                    "{group.label}"
                }
                span { class: "nav-icon {chevron}" }
            }
            if group.expanded {
                div { class: "nav-group-links",
                    for link in group.links {
                        NavItem { key: "{link.path}", link, on_navigate }
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(link: NavLink, on_navigate: EventHandler<()>) -> Element {
    rsx! {
        Link {
            class: link.class(),
            to: link.path,
            onclick: move |_| on_navigate.call(()),
            span { class: "nav-icon {link.icon}" }
            "{link.label}"
        }
    }
}
