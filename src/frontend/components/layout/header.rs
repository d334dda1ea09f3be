use crate::backend::session::UserProfile;
use crate::frontend::components::common::{Logo, NotificationBell, ThemeToggle, UserBadge};
use dioxus::prelude::*;

#[component]
pub fn Header(profile: UserProfile, on_open_drawer: EventHandler<()>) -> Element {
    rsx! {
        header { class: "dashboard-header",
            div { class: "header-left",
                button {
                    class: "icon-button drawer-trigger",
                    title: "Toggle navigation menu",
                    onclick: move |_| on_open_drawer.call(()),
                    "\u{2630}"
                    span { class: "sr-only", "Toggle navigation menu" }
                }
                Logo {}
            }
            div { class: "header-right",
                NotificationBell {}
                ThemeToggle {}
                UserBadge { profile }
            }
        }
    }
}
