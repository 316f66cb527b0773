//! Channel type registry
//!
//! Central configuration for all channel types. To add a new channel type,
//! add a config to `REGISTRY` and a variant to [`ChannelType`]; everything
//! else (selection UI, validation, placeholders) picks it up automatically.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::{ChannelTypeConfig, ChannelValidation};
use crate::api::ChannelType;
use crate::constants::ERROR_IDENTIFIER_REQUIRED;

fn whatsapp_digit_count(value: &str) -> bool {
    // Must be 8-15 digits total, country code included
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (8..=15).contains(&digits)
}

fn webhook_url_parses(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

static REGISTRY: Lazy<[ChannelTypeConfig; 4]> = Lazy::new(|| {
    [
        ChannelTypeConfig {
            channel_type: ChannelType::Email,
            label: "Email",
            icon: "📧",
            placeholder: "you@example.com",
            help_text: "We'll send a verification code to this email address",
            validation: ChannelValidation {
                regex: Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap(),
                message: "Please enter a valid email address",
                predicate: None,
            },
        },
        ChannelTypeConfig {
            channel_type: ChannelType::Whatsapp,
            label: "WhatsApp",
            icon: "💬",
            placeholder: "+1234567890",
            help_text: "Include country code (e.g., +1 for US, +33 for France)",
            validation: ChannelValidation {
                regex: Regex::new(r"^\+[1-9]\d{1,14}$").unwrap(),
                message: "Please enter a valid phone number with country code",
                predicate: Some(whatsapp_digit_count),
            },
        },
        ChannelTypeConfig {
            channel_type: ChannelType::Telegram,
            label: "Telegram",
            icon: "✈️",
            placeholder: "@username or phone number",
            help_text: "Your Telegram username (with @) or phone number",
            validation: ChannelValidation {
                regex: Regex::new(r"^(@[a-zA-Z0-9_]{5,32}|\+[1-9]\d{1,14})$").unwrap(),
                message: "Please enter a valid Telegram username or phone number",
                predicate: None,
            },
        },
        ChannelTypeConfig {
            channel_type: ChannelType::Webhook,
            label: "Webhook",
            icon: "🔗",
            placeholder: "https://your-webhook-url.com/endpoint",
            help_text: "URL where we'll send POST requests with reminder data",
            validation: ChannelValidation {
                regex: Regex::new(r"^https?://.+").unwrap(),
                message: "Please enter a valid URL starting with http:// or https://",
                predicate: Some(webhook_url_parses),
            },
        },
    ]
});

/// Get the configuration for a specific channel type.
pub fn config_for(channel_type: ChannelType) -> &'static ChannelTypeConfig {
    REGISTRY
        .iter()
        .find(|config| config.channel_type == channel_type)
        .expect("every channel type has a registry entry")
}

/// All channel types, in selection order. The first entry is the default.
pub fn all_types() -> Vec<ChannelType> {
    REGISTRY.iter().map(|config| config.channel_type).collect()
}

/// Validate a raw identifier against the format rule for `channel_type`.
///
/// Trims the input first; an empty identifier is rejected before the regex
/// runs. Returns the type's configured message on failure.
pub fn validate_identifier(channel_type: ChannelType, raw: &str) -> Result<(), String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ERROR_IDENTIFIER_REQUIRED.to_string());
    }
    config_for(channel_type).validation.check(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_types() {
        let types = all_types();
        assert_eq!(types.len(), 4);
        assert_eq!(types[0], ChannelType::Email); // default type

        for channel_type in types {
            let config = config_for(channel_type);
            assert_eq!(config.channel_type, channel_type);
            assert!(!config.label.is_empty());
            assert!(!config.placeholder.is_empty());
            assert!(!config.help_text.is_empty());
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_identifier(ChannelType::Email, "a@b.co").is_ok());
        assert!(validate_identifier(ChannelType::Email, "  user@example.com  ").is_ok());
        assert!(validate_identifier(ChannelType::Email, "not-an-email").is_err());
        assert!(validate_identifier(ChannelType::Email, "a b@c.d").is_err());
    }

    #[test]
    fn test_whatsapp_validation() {
        assert!(validate_identifier(ChannelType::Whatsapp, "+33612345678").is_ok());
        // Regex shape is fine but only 7 digits
        assert!(validate_identifier(ChannelType::Whatsapp, "+123456").is_err());
        // Missing leading +
        assert!(validate_identifier(ChannelType::Whatsapp, "33612345678").is_err());
    }

    #[test]
    fn test_telegram_validation() {
        assert!(validate_identifier(ChannelType::Telegram, "@some_user").is_ok());
        assert!(validate_identifier(ChannelType::Telegram, "+33612345678").is_ok());
        // Username too short
        assert!(validate_identifier(ChannelType::Telegram, "@abc").is_err());
        assert!(validate_identifier(ChannelType::Telegram, "some_user").is_err());
    }

    #[test]
    fn test_webhook_validation() {
        assert!(validate_identifier(ChannelType::Webhook, "https://example.com/hook").is_ok());
        assert!(validate_identifier(ChannelType::Webhook, "http://localhost:8000/x").is_ok());
        assert!(validate_identifier(ChannelType::Webhook, "ftp://example.com").is_err());
        // Passes the regex but is not a parseable URL
        assert!(validate_identifier(ChannelType::Webhook, "https://exa mple.com").is_err());
    }

    #[test]
    fn test_empty_identifier_rejected_before_regex() {
        for channel_type in all_types() {
            let result = validate_identifier(channel_type, "   ");
            assert_eq!(result.unwrap_err(), ERROR_IDENTIFIER_REQUIRED);
        }
    }
}
