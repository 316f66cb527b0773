//! Core UI functionality for the Remindr application.
//!
//! The fundamental building blocks the interface is assembled from:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and tick generation
//! - [`task_manager`] - Background task management for network operations
//!
//! Components implement the [`Component`] trait, user input becomes
//! [`Action`]s, and anything touching the network runs through the
//! [`TaskManager`] which reports back over an action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, SidebarSelection};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
