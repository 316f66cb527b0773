//! End-to-end exercise of the channel verification flow against a mock API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use remindr::api::{
    ApiError, Channel, ChannelCreateRequest, ChannelType, Reminder, ReminderCreateRequest,
    RemindrApi, ValidateCodeResponse,
};
use remindr::logger::Logger;
use remindr::service::DataService;
use remindr::verification::{FlowCommand, FlowSignal, Step, VerificationSession};

/// Scripted API: records calls, answers validate-code from a queue.
struct MockApi {
    calls: Mutex<Vec<String>>,
    validate_responses: Mutex<Vec<Result<ValidateCodeResponse, ApiError>>>,
    resend_count: AtomicUsize,
}

impl MockApi {
    fn new(validate_responses: Vec<Result<ValidateCodeResponse, ApiError>>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            validate_responses: Mutex::new(validate_responses),
            resend_count: AtomicUsize::new(0),
        }
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RemindrApi for MockApi {
    async fn list_channels(&self) -> Result<Vec<Channel>, ApiError> {
        self.record("list_channels");
        Ok(Vec::new())
    }

    async fn create_channel(&self, request: ChannelCreateRequest) -> Result<Channel, ApiError> {
        self.record("create_channel");
        Ok(Channel {
            id: "ch-42".to_string(),
            channel_type: request.channel_type,
            identifier: request.identifier,
            confirmed: false,
            primary: false,
        })
    }

    async fn validate_code(&self, channel_ref: &str, code: &str) -> Result<ValidateCodeResponse, ApiError> {
        self.record(&format!("validate_code {channel_ref} {code}"));
        self.validate_responses.lock().unwrap().remove(0)
    }

    async fn resend_code(&self, channel_ref: &str) -> Result<(), ApiError> {
        self.record(&format!("resend_code {channel_ref}"));
        self.resend_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn delete_channel(&self, _channel_ref: &str) -> Result<(), ApiError> {
        self.record("delete_channel");
        Ok(())
    }

    async fn list_reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        self.record("list_reminders");
        Ok(Vec::new())
    }

    async fn create_reminder(&self, _request: ReminderCreateRequest) -> Result<Reminder, ApiError> {
        unimplemented!("not exercised by these tests")
    }

    async fn delete_reminder(&self, _reminder_id: &str) -> Result<(), ApiError> {
        unimplemented!("not exercised by these tests")
    }
}

fn wrong_code() -> Result<ValidateCodeResponse, ApiError> {
    Ok(ValidateCodeResponse {
        success: false,
        confirmed: false,
        message: None,
    })
}

fn confirmed() -> Result<ValidateCodeResponse, ApiError> {
    Ok(ValidateCodeResponse {
        success: true,
        confirmed: true,
        message: None,
    })
}

async fn drive(service: &DataService, session: &mut VerificationSession, command: FlowCommand) -> FlowSignal {
    let result = service.run_flow_command(command).await;
    session.apply_result(result)
}

#[tokio::test]
async fn test_full_flow_register_then_verify() {
    let api = Arc::new(MockApi::new(vec![wrong_code(), confirmed()]));
    let service = DataService::new(api.clone(), Logger::new());
    let mut session = VerificationSession::new();

    // Step 1: identifier
    session.set_identifier("user@example.com".to_string());
    let command = session.submit_identifier().expect("create command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::CodeSent);
    assert_eq!(session.step(), Step::AwaitingCode);
    assert_eq!(session.channel_ref(), Some("ch-42"));

    // Step 2: wrong code consumes an attempt
    session.set_code("111111".to_string());
    let command = session.submit_code().unwrap().expect("validate command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::None);
    assert_eq!(session.attempts_remaining(), 2);

    // Correct code completes the flow
    session.set_code("222222".to_string());
    let command = session.submit_code().unwrap().expect("validate command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::Verified);

    assert_eq!(
        api.calls(),
        vec![
            "create_channel",
            "validate_code ch-42 111111",
            "validate_code ch-42 222222",
        ]
    );
}

#[tokio::test]
async fn test_local_rejection_never_reaches_the_api() {
    let api = Arc::new(MockApi::new(Vec::new()));
    let mut session = VerificationSession::new();

    session.set_channel_type(ChannelType::Whatsapp);
    session.set_identifier("not-a-number".to_string());
    assert!(session.submit_identifier().is_none());
    assert!(session.last_error().is_some());

    // Short code in the code step is also rejected locally
    let existing = Channel {
        id: "ch-1".to_string(),
        channel_type: ChannelType::Whatsapp,
        identifier: "+33612345678".to_string(),
        confirmed: false,
        primary: false,
    };
    let mut session = VerificationSession::resume(&existing);
    session.set_code("12".to_string());
    assert!(session.submit_code().unwrap().is_none());

    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_resend_resets_exhausted_counter() {
    let api = Arc::new(MockApi::new(vec![wrong_code(), wrong_code(), wrong_code(), confirmed()]));
    let service = DataService::new(api.clone(), Logger::new());

    let existing = Channel {
        id: "ch-7".to_string(),
        channel_type: ChannelType::Email,
        identifier: "a@b.co".to_string(),
        confirmed: false,
        primary: false,
    };
    let mut session = VerificationSession::resume(&existing);

    for _ in 0..3 {
        session.set_code("999999".to_string());
        let command = session.submit_code().unwrap().expect("validate command");
        drive(&service, &mut session, command).await;
    }
    assert_eq!(session.attempts_remaining(), 0);

    // Counter exhausted: submission is blocked before any network call
    session.set_code("999999".to_string());
    assert!(session.submit_code().unwrap().is_none());
    assert_eq!(api.calls().iter().filter(|c| c.starts_with("validate_code")).count(), 3);

    // Resend unblocks with a full counter
    let command = session.resend_code().unwrap().expect("resend command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::CodeResent);
    assert_eq!(session.attempts_remaining(), 3);

    session.set_code("123456".to_string());
    let command = session.submit_code().unwrap().expect("validate command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::Verified);
}

#[tokio::test]
async fn test_transport_error_leaves_counter_untouched() {
    let api = Arc::new(MockApi::new(vec![
        Err(ApiError::Network("connection reset".to_string())),
        confirmed(),
    ]));
    let service = DataService::new(api, Logger::new());

    let existing = Channel {
        id: "ch-7".to_string(),
        channel_type: ChannelType::Email,
        identifier: "a@b.co".to_string(),
        confirmed: false,
        primary: false,
    };
    let mut session = VerificationSession::resume(&existing);

    session.set_code("123456".to_string());
    let command = session.submit_code().unwrap().expect("validate command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::None);
    assert_eq!(session.attempts_remaining(), 3);

    // Same code can be retried and still succeed
    session.set_code("123456".to_string());
    let command = session.submit_code().unwrap().expect("validate command");
    let signal = drive(&service, &mut session, command).await;
    assert_eq!(signal, FlowSignal::Verified);
}

#[tokio::test]
async fn test_create_channel_invalidates_channel_cache() {
    let api = Arc::new(MockApi::new(Vec::new()));
    let service = DataService::new(api.clone(), Logger::new());

    // Warm the cache, then register a channel through the flow
    service.channels().await.unwrap();
    service.channels().await.unwrap();
    assert_eq!(api.calls().iter().filter(|c| *c == "list_channels").count(), 1);

    let mut session = VerificationSession::new();
    session.set_identifier("a@b.co".to_string());
    let command = session.submit_identifier().expect("create command");
    drive(&service, &mut session, command).await;

    // Cache was invalidated by the write, next read refetches
    service.channels().await.unwrap();
    assert_eq!(api.calls().iter().filter(|c| *c == "list_channels").count(), 2);
}
