//! Utility modules for the Remindr application.
//!
//! Cross-cutting helpers used throughout the crate.
//!
//! - [`datetime`] - Date and time parsing, comparison, and human-readable formatting

pub mod datetime;
