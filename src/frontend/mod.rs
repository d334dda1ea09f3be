//! Frontend module for the SwapSeva dashboard.

pub mod components;
pub mod pages;
pub mod services;
