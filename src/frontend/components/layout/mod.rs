//! Layout components.

pub mod auth;
pub mod header;
pub mod main;
pub mod navigation;

pub use auth::AuthLayout;
pub use header::Header;
pub use main::DashboardLayout;
pub use navigation::Navigation;
