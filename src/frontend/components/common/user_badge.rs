use crate::backend::session::UserProfile;
use dioxus::prelude::*;

/// Avatar initial with name and email.
#[component]
pub fn UserBadge(profile: UserProfile) -> Element {
    let initial = profile.initial();
    let name = profile.display_name();
    let email = profile.display_email();

    rsx! {
        div { class: "user-badge",
            div { class: "avatar", title: "{name}", "{initial}" }
            div { class: "user-details",
                div { class: "user-name", "{name}" }
                div { class: "user-email", "{email}" }
            }
        }
    }
}
