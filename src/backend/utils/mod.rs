//! Utility modules for the dashboard backend.
//!
//! Configuration, data directory paths and the route table.

/// Application configuration.
pub mod config;
/// Data directory and store file paths.
pub mod paths;
/// Application routing system.
pub mod route;
/// Embedded stylesheets.
pub mod css_loader;
