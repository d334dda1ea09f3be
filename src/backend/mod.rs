//! Backend of the application: session persistence, configuration and routing.

pub mod session;
pub mod utils;
