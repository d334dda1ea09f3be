use crate::frontend::services::states::Theme;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();
    let current = theme();
    let glyph = match current {
        Theme::Light => "\u{263E}",
        Theme::Dark => "\u{2600}",
    };

    rsx! {
        button {
            class: "icon-button",
            title: current.label(),
            onclick: move |_| {
                let next = theme.peek().toggled();
                log::debug!("Theme switched to {next:?}");
                theme.set(next);
            },
            "{glyph}"
            span { class: "sr-only", "Toggle theme" }
        }
    }
}
