use std::collections::HashMap;
use std::sync::OnceLock;

static CSS_CACHE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

pub struct CssLoader;

impl CssLoader {
    pub fn init() {
        let styles: [(&'static str, &'static str); 2] = [
            (
                "dashboard",
                include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/assets/styles/dashboard.css"
                )),
            ),
            (
                "auth",
                include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/assets/styles/auth.css"
                )),
            ),
        ];

        let cache: HashMap<_, _> = styles.into_iter().collect();
        if CSS_CACHE.set(cache).is_err() {
            log::debug!("CSS cache already initialized");
        }
    }

    #[inline(always)]
    pub fn get(style_name: &str) -> Option<&'static str> {
        CSS_CACHE.get()?.get(style_name).copied()
    }

    #[inline(always)]
    pub fn get_dashboard() -> &'static str {
        Self::get("dashboard").unwrap_or("")
    }

    #[inline(always)]
    pub fn get_auth() -> &'static str {
        Self::get("auth").unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_available_after_init() {
        CssLoader::init();
        CssLoader::init();
        assert!(CssLoader::get_dashboard().contains(".nav-link"));
        assert!(CssLoader::get_auth().contains(".auth-card"));
        assert_eq!(CssLoader::get("missing"), None);
    }

    #[test]
    fn narrow_layout_keeps_drawer_brand() {
        CssLoader::init();
        let css = CssLoader::get_dashboard();
        let narrow = &css[css.find("@media (max-width: 767px)").unwrap()..];
        let narrow = &narrow[..narrow.find("\n}").unwrap()];
        assert!(narrow.contains(".dashboard-header .brand-name"));
        assert!(!narrow.lines().any(|line| line.trim() == ".brand-name {"));
    }
}
