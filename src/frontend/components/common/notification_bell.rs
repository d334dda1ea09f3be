use crate::frontend::services::notifications::{Toasts, unread_badge};
use chrono::Local;
use dioxus::prelude::*;

/// Header bell with an unread count and a dropdown of recent notices.
#[component]
pub fn NotificationBell() -> Element {
    let mut toasts = use_context::<Toasts>();
    let mut open = use_signal(|| false);
    let badge = unread_badge(toasts.unread()).unwrap_or_default();
    let recent = toasts.recent();
    let empty = recent.is_empty();
    let now = Local::now();

    rsx! {
        div { class: "bell",
            button {
                class: "icon-button bell-trigger",
                title: "Notifications",
                aria_expanded: open(),
                onclick: move |_| {
                    let opening = !open();
                    if opening {
                        toasts.mark_read();
                    }
                    open.set(opening);
                },
                "\u{1F514}"
                if !badge.is_empty() {
                    span { class: "bell-badge", "{badge}" }
                }
                span { class: "sr-only", "Notifications" }
            }
            if open() {
                div { class: "bell-menu",
                    div { class: "bell-menu-title", "Notifications" }
                    if empty {
                        div { class: "bell-empty", "No notifications yet" }
                    }
                    for toast in recent {
                        div { key: "{toast.id}", class: "bell-item",
                            div { class: "toast-title", "{toast.title}" }
                            if !toast.description.is_empty() {
                                div { class: "toast-description", "{toast.description}" }
                            }
                            div { class: "bell-time", {toast.age_label(now)} }
                        }
                    }
                }
            }
        }
    }
}
