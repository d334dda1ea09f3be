//! Common reusable components.

pub mod logo;
pub mod notification_bell;
pub mod theme_toggle;
pub mod toast;
pub mod user_badge;

pub use logo::Logo;
pub use notification_bell::NotificationBell;
pub use theme_toggle::ThemeToggle;
pub use toast::ToastHost;
pub use user_badge::UserBadge;
