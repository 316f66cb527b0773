//! Terminal user interface.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use renderer::run_app;
