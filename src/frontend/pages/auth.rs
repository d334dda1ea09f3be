//! Login and logout pages.

use crate::backend::session::Notice;
use crate::backend::utils::route::Route;
use crate::frontend::components::layout::AuthLayout;
use crate::frontend::services::context::SessionContext;
use crate::frontend::services::notifications::Toasts;
use dioxus::prelude::*;
use dioxus_router::use_navigator;

const MAX_NAME_LEN: usize = 64;

/// Checks the login form. Returns the message to show when it is not acceptable.
pub fn validate_login(name: &str, email: &str) -> Result<(), &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Please enter your name");
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err("Name must be at most 64 characters");
    }
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') =>
        {
            Ok(())
        }
        _ => Err("Please enter a valid email address"),
    }
}

#[component]
pub fn Login() -> Element {
    let session = use_context::<SessionContext>();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let submit = move |_: MouseEvent| {
        let (name, email) = (name.read().clone(), email.read().clone());
        if let Err(message) = validate_login(&name, &email) {
            error.set(Some(message.to_string()));
            return;
        }
        match session.login(&name, &email) {
            Ok(()) => {
                error.set(None);
                nav.push(Route::Overview {});
            }
            Err(e) => {
                log::error!("Login failed: {e}");
                error.set(Some("Could not save your session, please try again".to_string()));
            }
        }
    };

    let error_message = error().unwrap_or_default();

    rsx! {
        AuthLayout {
            div { class: "auth-card",
                h1 { class: "auth-title", "Welcome to SwapSeva" }
                input {
                    class: "auth-input",
                    r#type: "text",
                    placeholder: "Name",
                    value: "{name}",
                    oninput: move |e| name.set(e.value()),
                }
                input {
                    class: "auth-input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }
                button { class: "auth-submit", r#type: "button", onclick: submit, "Log in" }
                div { class: "auth-error", "{error_message}" }
            }
        }
    }
}

#[component]
pub fn Logout() -> Element {
    let session = use_context::<SessionContext>();
    let mut toasts = use_context::<Toasts>();
    let nav = use_navigator();

    use_effect(move || {
        match session.logout() {
            Ok(()) => {
                toasts.push(Notice::info("Signed out", "You have been logged out"));
            }
            Err(e) => log::error!("Failed to clear session: {e}"),
        }
        nav.replace(Route::Login {});
    });

    rsx! {
        div { class: "loading-placeholder", "Signing out..." }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_name_and_email() {
        assert_eq!(validate_login("Asha", "asha@swapseva.in"), Ok(()));
        assert_eq!(validate_login("  Asha ", " asha@swapseva.in "), Ok(()));
    }

    #[test]
    fn rejects_blank_name() {
        assert_eq!(validate_login("   ", "asha@swapseva.in"), Err("Please enter your name"));
    }

    #[test]
    fn rejects_overlong_name() {
        let name = "a".repeat(65);
        assert!(validate_login(&name, "asha@swapseva.in").is_err());
        assert!(validate_login(&"a".repeat(64), "asha@swapseva.in").is_ok());
    }

    #[test]
    fn rejects_bad_email() {
        for email in ["", "asha", "@swapseva.in", "asha@", "asha@localhost", "asha@.in"] {
            assert!(validate_login("Asha", email).is_err(), "{email}");
        }
    }
}
