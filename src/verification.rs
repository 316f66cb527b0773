//! Channel verification flow.
//!
//! A [`VerificationSession`] owns the two-step create → validate state machine
//! for registering a notification channel: collect an identifier, create the
//! channel (the backend sends a code), then validate the user-entered code
//! with a bounded number of attempts and a resend escape hatch.
//!
//! The session never performs I/O. Submit operations return a [`FlowCommand`]
//! for the host to execute against [`RemindrApi`](crate::api::RemindrApi), and
//! the outcome is fed back through the `apply_*` methods, which answer with a
//! [`FlowSignal`] the host can present however it likes. Each session carries
//! a unique id so a result arriving after the session was discarded can be
//! recognized and dropped instead of mutating a fresh session.

use uuid::Uuid;

use crate::api::{ApiError, Channel, ChannelCreateRequest, ChannelType, ValidateCodeResponse};
use crate::channels::registry;
use crate::constants::{
    ERROR_CHANNEL_CREATE_FAILED, ERROR_CODE_LENGTH, ERROR_CODE_RESEND_FAILED,
    ERROR_CODE_VALIDATION_FAILED, ERROR_NO_ATTEMPTS_LEFT, MAX_VERIFICATION_ATTEMPTS,
    VERIFICATION_CODE_LENGTH,
};

/// Current step of a verification session. Transitions are forward-only;
/// there is no way back from code entry to identifier collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CollectingIdentifier,
    AwaitingCode,
}

/// Network operation the host must run on behalf of the session.
#[derive(Clone, Debug)]
pub enum FlowCommand {
    CreateChannel(ChannelCreateRequest),
    ValidateCode { channel_ref: String, code: String },
    ResendCode { channel_ref: String },
}

/// Result of executing a [`FlowCommand`], carried back to the session.
#[derive(Debug)]
pub enum VerificationResult {
    Created(Result<Channel, ApiError>),
    Validated(Result<ValidateCodeResponse, ApiError>),
    Resent(Result<(), ApiError>),
}

/// Internal precondition violations. These indicate a caller bug, never a
/// user-facing condition, and must fail before any network call.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("verification session is awaiting a code but has no channel reference")]
    MissingChannelRef,
}

/// What the host should do after a backend result has been applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowSignal {
    /// Nothing to announce; the session state (including `last_error`) tells the story
    None,
    /// Channel created, verification code on its way
    CodeSent,
    /// A fresh code was sent and the attempt counter was reset
    CodeResent,
    /// The channel is confirmed: end the session and treat the channel list as stale
    Verified,
}

/// Ephemeral client-side state for one channel verification.
///
/// Created when the verification UI opens and discarded when it closes;
/// nothing here is persisted. Invariant: `channel_ref` is `None` exactly
/// while `step` is [`Step::CollectingIdentifier`].
#[derive(Debug)]
pub struct VerificationSession {
    id: Uuid,
    step: Step,
    channel_type: ChannelType,
    identifier: String,
    code: String,
    channel_ref: Option<String>,
    attempts_remaining: u8,
    last_error: Option<String>,
    busy: bool,
}

impl VerificationSession {
    /// Start a fresh session for registering a new channel.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::CollectingIdentifier,
            channel_type: registry::all_types()[0],
            identifier: String::new(),
            code: String::new(),
            channel_ref: None,
            attempts_remaining: MAX_VERIFICATION_ATTEMPTS,
            last_error: None,
            busy: false,
        }
    }

    /// Resume verification for an already-created, unconfirmed channel.
    ///
    /// Starts directly in code entry with the attempt counter reset, the
    /// channel's type/identifier copied in for display, and its id as the
    /// channel reference.
    pub fn resume(channel: &Channel) -> Self {
        Self {
            id: Uuid::new_v4(),
            step: Step::AwaitingCode,
            channel_type: channel.channel_type,
            identifier: channel.identifier.clone(),
            code: String::new(),
            channel_ref: Some(channel.id.clone()),
            attempts_remaining: MAX_VERIFICATION_ATTEMPTS,
            last_error: None,
            busy: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn channel_type(&self) -> ChannelType {
        self.channel_type
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn channel_ref(&self) -> Option<&str> {
        self.channel_ref.as_deref()
    }

    pub fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a network operation triggered by this session is in flight.
    /// Submit and resend are suppressed until the result comes back.
    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Whether a code submission would currently be accepted.
    pub fn can_submit_code(&self) -> bool {
        self.step == Step::AwaitingCode && !self.busy && self.attempts_remaining > 0
    }

    /// Change the candidate channel type. Only meaningful while collecting
    /// the identifier; ignored afterwards.
    pub fn set_channel_type(&mut self, channel_type: ChannelType) {
        if self.step == Step::CollectingIdentifier {
            self.channel_type = channel_type;
            self.last_error = None;
        }
    }

    pub fn set_identifier(&mut self, identifier: String) {
        self.identifier = identifier;
        self.last_error = None;
    }

    pub fn set_code(&mut self, code: String) {
        self.code = code;
        self.last_error = None;
    }

    /// Submit the collected identifier.
    ///
    /// Validates locally against the channel type's format rule before any
    /// network activity; on failure the session stays put with `last_error`
    /// set to the type's configured message. Returns the create-channel
    /// command to execute, or `None` when nothing should be sent.
    pub fn submit_identifier(&mut self) -> Option<FlowCommand> {
        if self.busy || self.step != Step::CollectingIdentifier {
            return None;
        }

        let identifier = self.identifier.trim().to_string();
        if let Err(message) = registry::validate_identifier(self.channel_type, &identifier) {
            self.last_error = Some(message);
            return None;
        }

        self.last_error = None;
        self.busy = true;
        Some(FlowCommand::CreateChannel(ChannelCreateRequest {
            channel_type: self.channel_type,
            identifier,
        }))
    }

    /// Apply the result of the create-channel call.
    pub fn apply_create_result(&mut self, result: Result<Channel, ApiError>) -> FlowSignal {
        self.busy = false;
        match result {
            Ok(channel) => {
                self.channel_ref = Some(channel.id);
                self.step = Step::AwaitingCode;
                self.attempts_remaining = MAX_VERIFICATION_ATTEMPTS;
                self.code.clear();
                self.last_error = None;
                FlowSignal::CodeSent
            }
            Err(error) => {
                self.last_error = Some(error.user_message(ERROR_CHANNEL_CREATE_FAILED));
                FlowSignal::None
            }
        }
    }

    /// Submit the entered verification code.
    ///
    /// A missing channel reference in the code entry step is an internal
    /// consistency error and is returned as [`FlowError::MissingChannelRef`]
    /// without producing a command. An exhausted attempt counter is a hard
    /// guard: no command is produced until a resend resets it.
    pub fn submit_code(&mut self) -> Result<Option<FlowCommand>, FlowError> {
        if self.busy || self.step != Step::AwaitingCode {
            return Ok(None);
        }

        let channel_ref = self.channel_ref.clone().ok_or(FlowError::MissingChannelRef)?;

        if self.attempts_remaining == 0 {
            self.last_error = Some(ERROR_NO_ATTEMPTS_LEFT.to_string());
            return Ok(None);
        }

        let code = self.code.trim().to_string();
        if code.len() != VERIFICATION_CODE_LENGTH {
            self.last_error = Some(ERROR_CODE_LENGTH.to_string());
            return Ok(None);
        }

        self.last_error = None;
        self.busy = true;
        Ok(Some(FlowCommand::ValidateCode { channel_ref, code }))
    }

    /// Apply the result of the validate-code call.
    ///
    /// Only a substantive rejection (the backend answered, code wrong)
    /// consumes an attempt; a transport error leaves the counter untouched.
    pub fn apply_validate_result(
        &mut self,
        result: Result<ValidateCodeResponse, ApiError>,
    ) -> FlowSignal {
        self.busy = false;
        match result {
            Ok(response) if response.is_verified() => FlowSignal::Verified,
            Ok(response) => {
                self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
                let message = response
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| {
                        format!("Invalid code. {} attempts remaining.", self.attempts_remaining)
                    });
                self.last_error = Some(message);
                FlowSignal::None
            }
            Err(error) => {
                self.last_error = Some(error.user_message(ERROR_CODE_VALIDATION_FAILED));
                FlowSignal::None
            }
        }
    }

    /// Ask for a fresh verification code.
    pub fn resend_code(&mut self) -> Result<Option<FlowCommand>, FlowError> {
        if self.busy || self.step != Step::AwaitingCode {
            return Ok(None);
        }

        let channel_ref = self.channel_ref.clone().ok_or(FlowError::MissingChannelRef)?;

        self.last_error = None;
        self.busy = true;
        Ok(Some(FlowCommand::ResendCode { channel_ref }))
    }

    /// Apply the result of whichever command this session last produced.
    pub fn apply_result(&mut self, result: VerificationResult) -> FlowSignal {
        match result {
            VerificationResult::Created(result) => self.apply_create_result(result),
            VerificationResult::Validated(result) => self.apply_validate_result(result),
            VerificationResult::Resent(result) => self.apply_resend_result(result),
        }
    }

    /// Apply the result of the resend-code call. Success resets the attempt
    /// counter without changing the step.
    pub fn apply_resend_result(&mut self, result: Result<(), ApiError>) -> FlowSignal {
        self.busy = false;
        match result {
            Ok(()) => {
                self.attempts_remaining = MAX_VERIFICATION_ATTEMPTS;
                self.last_error = None;
                FlowSignal::CodeResent
            }
            Err(error) => {
                self.last_error = Some(error.user_message(ERROR_CODE_RESEND_FAILED));
                FlowSignal::None
            }
        }
    }
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str, channel_type: ChannelType, identifier: &str, confirmed: bool) -> Channel {
        Channel {
            id: id.to_string(),
            channel_type,
            identifier: identifier.to_string(),
            confirmed,
            primary: false,
        }
    }

    fn rejection(message: &str) -> ApiError {
        ApiError::Rejected {
            message: message.to_string(),
        }
    }

    fn wrong_code(message: Option<&str>) -> ValidateCodeResponse {
        ValidateCodeResponse {
            success: false,
            confirmed: false,
            message: message.map(str::to_string),
        }
    }

    fn confirmed() -> ValidateCodeResponse {
        ValidateCodeResponse {
            success: true,
            confirmed: true,
            message: None,
        }
    }

    #[test]
    fn test_new_session_defaults() {
        let session = VerificationSession::new();
        assert_eq!(session.step(), Step::CollectingIdentifier);
        assert_eq!(session.channel_type(), ChannelType::Email);
        assert!(session.identifier().is_empty());
        assert!(session.channel_ref().is_none());
        assert_eq!(session.attempts_remaining(), 3);
        assert!(session.last_error().is_none());
        assert!(!session.busy());
    }

    #[test]
    fn test_resume_starts_in_code_entry() {
        let existing = channel("ch-1", ChannelType::Telegram, "@some_user", false);
        let session = VerificationSession::resume(&existing);

        assert_eq!(session.step(), Step::AwaitingCode);
        assert_eq!(session.channel_type(), ChannelType::Telegram);
        assert_eq!(session.identifier(), "@some_user");
        assert_eq!(session.channel_ref(), Some("ch-1"));
        assert_eq!(session.attempts_remaining(), 3);
    }

    #[test]
    fn test_malformed_identifier_never_produces_command() {
        let mut session = VerificationSession::new();
        session.set_identifier("not-an-email".to_string());

        assert!(session.submit_identifier().is_none());
        assert_eq!(session.last_error(), Some("Please enter a valid email address"));
        assert_eq!(session.step(), Step::CollectingIdentifier);
        assert!(!session.busy());
    }

    #[test]
    fn test_valid_identifier_produces_create_command() {
        let mut session = VerificationSession::new();
        session.set_identifier("  a@b.co  ".to_string());

        let command = session.submit_identifier().expect("command expected");
        match command {
            FlowCommand::CreateChannel(request) => {
                assert_eq!(request.channel_type, ChannelType::Email);
                assert_eq!(request.identifier, "a@b.co"); // trimmed
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(session.busy());
        // Duplicate submission while in flight is suppressed
        assert!(session.submit_identifier().is_none());
    }

    #[test]
    fn test_create_success_transitions_and_resets_attempts() {
        let mut session = VerificationSession::new();
        session.set_identifier("a@b.co".to_string());
        session.submit_identifier().unwrap();

        // Pretend a previous life drained the counter; create must reset it
        session.attempts_remaining = 1;

        let signal = session.apply_create_result(Ok(channel("ch-9", ChannelType::Email, "a@b.co", false)));
        assert_eq!(signal, FlowSignal::CodeSent);
        assert_eq!(session.step(), Step::AwaitingCode);
        assert_eq!(session.channel_ref(), Some("ch-9"));
        assert_eq!(session.attempts_remaining(), 3);
        assert!(!session.busy());
    }

    #[test]
    fn test_create_failure_stays_in_identifier_step() {
        let mut session = VerificationSession::new();
        session.set_identifier("a@b.co".to_string());
        session.submit_identifier().unwrap();

        let signal = session.apply_create_result(Err(rejection("Channel already exists")));
        assert_eq!(signal, FlowSignal::None);
        assert_eq!(session.step(), Step::CollectingIdentifier);
        assert_eq!(session.last_error(), Some("Channel already exists"));
        assert!(session.channel_ref().is_none());
    }

    #[test]
    fn test_create_failure_without_message_uses_fallback() {
        let mut session = VerificationSession::new();
        session.set_identifier("a@b.co".to_string());
        session.submit_identifier().unwrap();

        session.apply_create_result(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(session.last_error(), Some(ERROR_CHANNEL_CREATE_FAILED));
    }

    #[test]
    fn test_three_rejections_exhaust_attempts_and_block_fourth_submission() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);

        for expected_remaining in [2, 1, 0] {
            session.set_code("000000".to_string());
            assert!(session.submit_code().unwrap().is_some());
            session.apply_validate_result(Ok(wrong_code(None)));
            assert_eq!(session.attempts_remaining(), expected_remaining);
            assert_eq!(
                session.last_error(),
                Some(format!("Invalid code. {expected_remaining} attempts remaining.").as_str())
            );
        }

        // Fourth submission is blocked client-side, no command produced
        session.set_code("000000".to_string());
        assert!(session.submit_code().unwrap().is_none());
        assert!(!session.busy());
        assert_eq!(session.last_error(), Some(ERROR_NO_ATTEMPTS_LEFT));
    }

    #[test]
    fn test_backend_message_wins_over_synthesized_one() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);

        session.set_code("000000".to_string());
        session.submit_code().unwrap();
        session.apply_validate_result(Ok(wrong_code(Some("Code expired"))));
        assert_eq!(session.last_error(), Some("Code expired"));
        assert_eq!(session.attempts_remaining(), 2);
    }

    #[test]
    fn test_transport_error_does_not_consume_attempt() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);

        session.set_code("123456".to_string());
        session.submit_code().unwrap();
        let signal = session.apply_validate_result(Err(ApiError::Network("timeout".to_string())));

        assert_eq!(signal, FlowSignal::None);
        assert_eq!(session.attempts_remaining(), 3);
        assert_eq!(session.last_error(), Some(ERROR_CODE_VALIDATION_FAILED));
        assert_eq!(session.step(), Step::AwaitingCode);
    }

    #[test]
    fn test_confirmed_response_completes_session() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);

        session.set_code(" 123456 ".to_string());
        let command = session.submit_code().unwrap().expect("command expected");
        match command {
            FlowCommand::ValidateCode { channel_ref, code } => {
                assert_eq!(channel_ref, "ch-1");
                assert_eq!(code, "123456"); // trimmed
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let signal = session.apply_validate_result(Ok(confirmed()));
        assert_eq!(signal, FlowSignal::Verified);
        assert!(!session.busy());
    }

    #[test]
    fn test_short_code_rejected_locally() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);

        session.set_code("123".to_string());
        assert!(session.submit_code().unwrap().is_none());
        assert_eq!(session.last_error(), Some(ERROR_CODE_LENGTH));
        assert_eq!(session.attempts_remaining(), 3);
    }

    #[test]
    fn test_missing_channel_ref_is_an_internal_error() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);
        // Simulate the invariant being broken by a caller bug
        session.channel_ref = None;
        session.set_code("123456".to_string());

        assert!(matches!(session.submit_code(), Err(FlowError::MissingChannelRef)));
        assert!(matches!(session.resend_code(), Err(FlowError::MissingChannelRef)));
        // Not surfaced as a user-facing message
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_resend_resets_attempts_from_zero() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);
        session.attempts_remaining = 0;

        let command = session.resend_code().unwrap().expect("command expected");
        assert!(matches!(command, FlowCommand::ResendCode { ref channel_ref } if channel_ref == "ch-1"));

        let signal = session.apply_resend_result(Ok(()));
        assert_eq!(signal, FlowSignal::CodeResent);
        assert_eq!(session.attempts_remaining(), 3);
        assert_eq!(session.step(), Step::AwaitingCode);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_resend_failure_keeps_attempts() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);
        session.attempts_remaining = 1;

        session.resend_code().unwrap();
        session.apply_resend_result(Err(rejection("Rate limited, try later")));
        assert_eq!(session.attempts_remaining(), 1);
        assert_eq!(session.last_error(), Some("Rate limited, try later"));
    }

    #[test]
    fn test_editing_fields_clears_error() {
        let mut session = VerificationSession::new();
        session.set_identifier("nope".to_string());
        session.submit_identifier();
        assert!(session.last_error().is_some());

        session.set_identifier("a@b.co".to_string());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_channel_type_locked_after_identifier_step() {
        let existing = channel("ch-1", ChannelType::Email, "a@b.co", false);
        let mut session = VerificationSession::resume(&existing);
        session.set_channel_type(ChannelType::Webhook);
        assert_eq!(session.channel_type(), ChannelType::Email);
    }

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(VerificationSession::new().id(), VerificationSession::new().id());
    }
}
