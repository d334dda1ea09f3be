mod backend;
mod frontend;
mod utils;

use crate::backend::session::FileSessionStore;
use crate::backend::utils::config::AppConfig;
use crate::backend::utils::css_loader::CssLoader;
use crate::backend::utils::paths::{get_config_path, get_data_dir};
use crate::backend::utils::route::Route;
use crate::frontend::components::common::ToastHost;
use crate::frontend::services::context::SessionContext;
use crate::frontend::services::notifications::{ToastQueue, Toasts};
use crate::frontend::services::states::Theme;
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn main() -> anyhow::Result<()> {
    let data_dir = get_data_dir()?;
    let config_path = get_config_path(&data_dir);
    let loaded = AppConfig::load(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Logging setup, before anything about the config can be reported.
    utils::logging::init(&config.log.filter);
    match loaded {
        Err(e) => log::warn!("Using default config, {} unreadable: {e}", config_path.display()),
        Ok(_) if !config_path.exists() => {
            if let Err(e) = config.save(&config_path) {
                log::warn!("Could not write default config: {e}");
            }
        }
        Ok(_) => log::debug!("Config loaded from {}", config_path.display()),
    }

    CssLoader::init();

    // Initialize runtime once; timers in UI tasks need its context.
    let rt = RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .expect("Failed to create runtime")
    });
    let _guard = rt.enter();

    let session_dir = config.session.directory.clone().unwrap_or(data_dir);
    let store = FileSessionStore::new(&session_dir, &config.session.storage_key);
    log::info!("Session store at {}", store.path().display());
    let session = SessionContext::new(Arc::new(store));

    let size = LogicalSize::new(config.ui.width, config.ui.height);
    let window = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.ui.title.clone())
                .with_inner_size(size)
                .with_min_inner_size(LogicalSize::new(480.0, 600.0)),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(window)
        .with_context(config)
        .with_context(session)
        .launch(AppRoot);

    Ok(())
}

#[component]
fn AppRoot() -> Element {
    let config = use_context::<AppConfig>();
    let theme = use_signal(|| Theme::from_name(&config.ui.theme));
    use_context_provider(|| theme);
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toasts::new(queue, config.ui.toast_timeout_ms));

    rsx! {
        style { dangerous_inner_html: CssLoader::get_dashboard() }

        div { class: "app-root {theme().class()}",
            Router::<Route> {}
            ToastHost {}
        }
    }
}
