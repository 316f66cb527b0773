//! Channel type configuration.
//!
//! Each channel type carries the static data the UI and the verification flow
//! need: display label, icon, placeholder, help text, and the identifier
//! format rule (a regex plus an optional extra predicate). This is data, not
//! logic; the registry in [`registry`] is the single lookup point.

use regex::Regex;

use crate::api::ChannelType;

pub mod registry;

pub use registry::{all_types, config_for, validate_identifier};

/// Format rule for a channel identifier.
pub struct ChannelValidation {
    /// Required format, checked first
    pub regex: Regex,
    /// Message shown when the identifier fails the rule
    pub message: &'static str,
    /// Extra check beyond what the regex can express
    pub predicate: Option<fn(&str) -> bool>,
}

impl ChannelValidation {
    /// Check a trimmed, non-empty identifier against this rule.
    pub fn check(&self, value: &str) -> Result<(), String> {
        if !self.regex.is_match(value) {
            return Err(self.message.to_string());
        }
        if let Some(predicate) = self.predicate {
            if !predicate(value) {
                return Err(self.message.to_string());
            }
        }
        Ok(())
    }
}

/// Static configuration for one channel type.
pub struct ChannelTypeConfig {
    pub channel_type: ChannelType,
    pub label: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
    pub help_text: &'static str,
    pub validation: ChannelValidation,
}
