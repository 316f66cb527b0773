//! Remindr - a terminal client for the Remindr reminders service
//!
//! This library provides a terminal-based interface for managing scheduled
//! reminders and the notification channels they deliver to (email, WhatsApp,
//! Telegram, webhooks). Channels go through a code-based verification flow
//! before the backend will deliver to them; that flow is implemented here as
//! a reusable state machine driving an interactive UI built with Ratatui.
//!
//! # Modules
//!
//! * [`api`] - Remindr API client trait, wire types and HTTP implementation
//! * [`channels`] - Channel type registry with per-type validation rules
//! * [`verification`] - Channel verification flow state machine
//! * [`service`] - Cached data access layer over the API
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Remindr API client and data models
pub mod api;

/// Notification channel type registry and validation
pub mod channels;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Data access layer with in-memory caching
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Channel verification flow state machine
pub mod verification;
