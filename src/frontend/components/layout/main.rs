use crate::backend::session::{GuardEffects, GuardState, Notice, SessionGuard, UserProfile};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::Logo;
use crate::frontend::components::layout::{Header, Navigation};
use crate::frontend::services::context::SessionContext;
use crate::frontend::services::menu::NavVariant;
use crate::frontend::services::notifications::Toasts;
use crate::frontend::services::states::Disclosure;
use dioxus::prelude::*;
use dioxus_router::{Navigator, components::Outlet, navigator, use_route};

/// Routes the guard's requests to the toast stack and the router.
struct LayoutEffects {
    toasts: Toasts,
    navigator: Navigator,
}

impl GuardEffects for LayoutEffects {
    fn notify(&mut self, notice: Notice) {
        self.toasts.push(notice);
    }

    fn redirect(&mut self, route: &str) {
        self.navigator.push(route);
    }
}

fn admitted_profile(state: &GuardState) -> Option<UserProfile> {
    match state {
        GuardState::Authenticated(profile) => Some(profile.clone()),
        GuardState::Loading | GuardState::Redirecting => None,
    }
}

/// Dashboard chrome around every `/dashboard` page. Nothing below the
/// header renders until the session guard has let the visitor in.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_context::<SessionContext>();
    let toasts = use_context::<Toasts>();
    let nav = navigator();
    let current = use_route::<Route>().to_string();

    let mut guard = use_signal(SessionGuard::new);
    let mut disclosure = use_signal({
        let current = current.clone();
        move || Disclosure::mounted_at(&current)
    });
    let mut drawer_open = use_signal(|| false);

    // Once per mount, after the first paint.
    use_effect(move || {
        let mut effects = LayoutEffects {
            toasts,
            navigator: nav,
        };
        guard.write().check(session.store(), &mut effects);
    });

    use_effect(use_reactive((&current,), move |(current,)| {
        if disclosure.write().observe_route(&current) {
            log::debug!("Trading menu opened for {current}");
        }
    }));

    let Some(profile) = admitted_profile(guard.read().state()) else {
        return rsx! {
            div { class: "loading-placeholder", "Loading..." }
        };
    };

    let expanded = disclosure.read().is_expanded();
    let on_toggle = move |_: ()| disclosure.write().toggle();

    rsx! {
        div { class: "dashboard-shell",
            Header { profile, on_open_drawer: move |_| drawer_open.set(true) }

            if drawer_open() {
                div {
                    class: "drawer-overlay",
                    onclick: move |_| drawer_open.set(false),
                }
                aside { class: "drawer-panel",
                    button {
                        class: "icon-button drawer-close",
                        title: "Close navigation menu",
                        onclick: move |_| drawer_open.set(false),
                        "\u{2715}"
                    }
                    Logo {}
                    Navigation {
                        variant: NavVariant::Drawer,
                        expanded,
                        current: current.clone(),
                        on_toggle,
                        on_navigate: move |_| drawer_open.set(false),
                    }
                }
            }

            div { class: "dashboard-body",
                Navigation {
                    variant: NavVariant::Sidebar,
                    expanded,
                    current: current.clone(),
                    on_toggle,
                    on_navigate: |_| {},
                }
                main { class: "dashboard-main", Outlet::<Route> {} }
            }
        }
    }
}
