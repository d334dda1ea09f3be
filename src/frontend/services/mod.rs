//! Frontend services for state and view models shared by the components.

pub mod context;
pub mod menu;
pub mod notifications;
pub mod states;
