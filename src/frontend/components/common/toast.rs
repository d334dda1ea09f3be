//! Toast stack rendered once at the application root.

use crate::frontend::services::notifications::{Toast, Toasts};
use dioxus::prelude::*;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Toasts>();

    rsx! {
        div { class: "toast-host", role: "status",
            for toast in toasts.items() {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_context::<Toasts>();
    let id = toast.id;

    rsx! {
        div { class: toast.variant.class(),
            div {
                div { class: "toast-title", "{toast.title}" }
                if !toast.description.is_empty() {
                    div { class: "toast-description", "{toast.description}" }
                }
            }
            button {
                class: "icon-button",
                title: "Dismiss",
                onclick: move |_| toasts.dismiss(id),
                "\u{2715}"
            }
        }
    }
}
