use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::{cell::RefCell, fmt};
use thiserror::Error;

use crate::config::EmailJsConfig;

pub const SUCCESS_MESSAGE: &str = "Message sent! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("the {0} field is required")]
    EmptyField(Field),
    #[error("a message is already being sent")]
    AlreadySending,
    #[error("the contact form is no longer mounted")]
    Unavailable,
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("email service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

/// Payload handed to the email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub draft: ContactDraft,
    sending: bool,
}

impl ContactForm {
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Validates the draft and marks the form as sending.
    pub fn begin(&mut self) -> Result<TemplateParams, ContactError> {
        if self.sending {
            return Err(ContactError::AlreadySending);
        }
        for field in [Field::Name, Field::Email, Field::Message] {
            if self.draft.get(field).trim().is_empty() {
                return Err(ContactError::EmptyField(field));
            }
        }
        self.sending = true;
        Ok(TemplateParams {
            from_name: self.draft.name.clone(),
            from_email: self.draft.email.clone(),
            message: self.draft.message.clone(),
        })
    }

    /// Settles a delivery attempt. The draft is only cleared on success.
    pub fn finish(&mut self, outcome: &Result<(), DeliveryError>) -> Notice {
        self.sending = false;
        match outcome {
            Ok(()) => {
                self.draft = ContactDraft::default();
                Notice::success(SUCCESS_MESSAGE)
            }
            Err(_) => Notice::error(FAILURE_MESSAGE),
        }
    }
}

/// Mutable access to a [`ContactForm`] wherever the UI keeps it.
pub trait FormSlot {
    /// Returns `None` if the form is gone.
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

impl FormSlot for RefCell<ContactForm> {
    fn modify<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[async_trait(?Send)]
pub trait EmailDelivery {
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError>;
}

/// Runs one submission: validate, hold the form in the sending state for the
/// duration of the delivery call, then settle it.
pub async fn submit<S, D>(slot: &S, delivery: &D) -> Result<Notice, ContactError>
where
    S: FormSlot + ?Sized,
    D: EmailDelivery + ?Sized,
{
    let params = slot
        .modify(ContactForm::begin)
        .ok_or(ContactError::Unavailable)??;

    let outcome = delivery.send(&params).await;
    if let Err(e) = &outcome {
        log::warn!("contact delivery failed: {e}");
    }

    slot.modify(|form| form.finish(&outcome))
        .ok_or(ContactError::Unavailable)
}

#[derive(Debug, Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// Sends messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    client: reqwest::Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait(?Send)]
impl EmailDelivery for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        let body = EmailJsRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        };
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = res.text().await.unwrap_or_default();
            Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::rc::Rc;

    fn filled() -> ContactForm {
        ContactForm {
            draft: ContactDraft {
                name: "A".to_string(),
                email: "a@b.com".to_string(),
                message: "hi".to_string(),
            },
            sending: false,
        }
    }

    /// Fake collaborator that records whether the form was disabled mid-call.
    struct FakeDelivery {
        form: Rc<RefCell<ContactForm>>,
        fail: bool,
        saw_sending: RefCell<Vec<bool>>,
        sent: RefCell<Vec<TemplateParams>>,
    }

    impl FakeDelivery {
        fn new(form: Rc<RefCell<ContactForm>>, fail: bool) -> Self {
            Self {
                form,
                fail,
                saw_sending: RefCell::new(Vec::new()),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl EmailDelivery for FakeDelivery {
        async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
            self.saw_sending
                .borrow_mut()
                .push(self.form.borrow().is_sending());
            self.sent.borrow_mut().push(params.clone());
            if self.fail {
                Err(DeliveryError::Rejected {
                    status: 500,
                    body: "service down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_successful_submission_clears_draft() {
        let form = Rc::new(RefCell::new(filled()));
        let delivery = FakeDelivery::new(form.clone(), false);

        let notice = submit(&*form, &delivery).await.unwrap();

        assert_eq!(notice, Notice::success(SUCCESS_MESSAGE));
        assert_eq!(form.borrow().draft, ContactDraft::default());
        assert!(!form.borrow().is_sending());
        assert_eq!(*delivery.saw_sending.borrow(), vec![true]);
        assert_eq!(
            delivery.sent.borrow()[0],
            TemplateParams {
                from_name: "A".to_string(),
                from_email: "a@b.com".to_string(),
                message: "hi".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_draft() {
        let form = Rc::new(RefCell::new(filled()));
        let delivery = FakeDelivery::new(form.clone(), true);

        let notice = submit(&*form, &delivery).await.unwrap();

        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FAILURE_MESSAGE);
        assert_eq!(form.borrow().draft, filled().draft);
        assert!(!form.borrow().is_sending());
        assert_eq!(*delivery.saw_sending.borrow(), vec![true]);
    }

    #[tokio::test]
    async fn test_empty_field_never_calls_delivery() {
        let mut empty_email = filled();
        empty_email.draft.email = "   ".to_string();
        let form = Rc::new(RefCell::new(empty_email));
        let delivery = FakeDelivery::new(form.clone(), false);

        let res = submit(&*form, &delivery).await;

        assert_eq!(res, Err(ContactError::EmptyField(Field::Email)));
        assert!(delivery.sent.borrow().is_empty());
        assert!(!form.borrow().is_sending());
        assert_eq!(form.borrow().draft.name, "A");
    }

    #[test]
    fn test_begin_rejects_while_sending() {
        let mut form = filled();
        assert!(form.begin().is_ok());
        assert!(form.is_sending());
        assert_eq!(form.begin(), Err(ContactError::AlreadySending));

        let notice = form.finish(&Ok(()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert!(!form.is_sending());
    }

    #[test]
    fn test_draft_field_access() {
        let mut draft = ContactDraft::default();
        draft.set(Field::Message, "hello".to_string());
        assert_eq!(draft.get(Field::Message), "hello");
        assert_eq!(draft.get(Field::Name), "");
    }

    fn client_for(server: &MockServer) -> EmailJsClient {
        EmailJsClient::new(EmailJsConfig {
            endpoint: server.url("/api/v1.0/email/send"),
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
        })
    }

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "A".to_string(),
            from_email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_emailjs_request_shape() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1.0/email/send")
                    .json_body(json!({
                        "service_id": "service_test",
                        "template_id": "template_test",
                        "user_id": "public_test",
                        "template_params": {
                            "from_name": "A",
                            "from_email": "a@b.com",
                            "message": "hi"
                        }
                    }));
                then.status(200).body("OK");
            })
            .await;

        let res = client_for(&server).send(&params()).await;

        mock.assert_async().await;
        assert!(res.is_ok());
    }

    #[tokio::test]
    async fn test_emailjs_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1.0/email/send");
                then.status(400).body("The Public Key is invalid");
            })
            .await;

        let res = client_for(&server).send(&params()).await;

        match res {
            Err(DeliveryError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert!(body.contains("Public Key"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
