// SPDX-License-Identifier: MPL-2.0
//! Contact section: the three-field form wired to the delivery provider.
//!
//! The section validates synchronously (all three visible fields required)
//! and otherwise hands a ready payload to the root, which performs the
//! asynchronous send. The outcome of each attempt is stored as an i18n
//! message key and shown under the form; input fields are only ever cleared
//! after a confirmed successful delivery, so a failed attempt never costs
//! the visitor their text.
//!
//! There is no guard against a second submission while one is pending, no
//! local timeout, and no pending indicator; a pending send can only be
//! resolved by the provider's response.

use crate::email::Payload;
use crate::error::EmailError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_editor, text_input, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::fmt;

pub const FEEDBACK_MISSING_FIELDS_KEY: &str = "contact-feedback-missing-fields";
pub const FEEDBACK_SENT_KEY: &str = "contact-feedback-sent";
pub const FEEDBACK_FAILED_KEY: &str = "contact-feedback-failed";

/// Local state of the contact section.
#[derive(Default)]
pub struct State {
    pub name: String,
    pub email: String,
    body: text_editor::Content,
    /// Opaque value forwarded verbatim to the mail template as `Id`.
    /// It has no input widget; whatever it holds (usually nothing) is sent
    /// along and cleared together with the visible fields.
    pub correlation_id: String,
    feedback_key: Option<&'static str>,
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("message", &self.message())
            .field("feedback_key", &self.feedback_key)
            .finish()
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the message editor, without the editor's trailing
    /// newline artifact.
    pub fn message(&self) -> String {
        let text = self.body.text();
        text.strip_suffix('\n').unwrap_or(&text).to_string()
    }

    /// The i18n key of the most recent outcome, if any attempt happened yet.
    pub fn feedback_key(&self) -> Option<&'static str> {
        self.feedback_key
    }

    fn payload(&self) -> Payload {
        Payload {
            from_name: self.name.clone(),
            reply_to: self.email.clone(),
            message: self.message(),
            correlation_id: self.correlation_id.clone(),
        }
    }

    fn clear_inputs(&mut self) {
        self.name.clear();
        self.email.clear();
        self.body = text_editor::Content::new();
        self.correlation_id.clear();
    }
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    BodyEdited(text_editor::Action),
    SubmitPressed,
    /// Outcome of the asynchronous delivery started for an earlier submit.
    Delivered(Result<(), EmailError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A validated submission ready to hand to the delivery client.
    Send(Payload),
}

/// Process a contact message and return the corresponding event.
#[must_use]
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            Event::None
        }
        Message::EmailChanged(email) => {
            state.email = email;
            Event::None
        }
        Message::BodyEdited(action) => {
            state.body.perform(action);
            Event::None
        }
        Message::SubmitPressed => {
            if state.name.is_empty() || state.email.is_empty() || state.message().is_empty() {
                state.feedback_key = Some(FEEDBACK_MISSING_FIELDS_KEY);
                return Event::None;
            }
            Event::Send(state.payload())
        }
        Message::Delivered(Ok(())) => {
            state.feedback_key = Some(FEEDBACK_SENT_KEY);
            state.clear_inputs();
            Event::None
        }
        Message::Delivered(Err(err)) => {
            // Diagnostics only; the visitor sees the generic failure line
            // and their input stays put for a manual retry.
            log::error!("contact form delivery failed: {}", err);
            state.feedback_key = Some(FEEDBACK_FAILED_KEY);
            Event::None
        }
    }
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the contact section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut form = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(sizing::FORM_WIDTH)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("contact-intro")).size(typography::BODY))
        .push(
            text_input(&ctx.i18n.tr("contact-name-label"), &ctx.state.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::SubmitPressed)
                .padding(spacing::SM),
        )
        .push(
            text_input(&ctx.i18n.tr("contact-email-label"), &ctx.state.email)
                .on_input(Message::EmailChanged)
                .on_submit(Message::SubmitPressed)
                .padding(spacing::SM),
        )
        .push(
            text_editor(&ctx.state.body)
                .placeholder(ctx.i18n.tr("contact-message-label"))
                .on_action(Message::BodyEdited)
                .height(Length::Fixed(sizing::MESSAGE_EDITOR_HEIGHT))
                .padding(spacing::SM),
        )
        .push(
            button(Text::new(ctx.i18n.tr("contact-send-button")).size(typography::BODY))
                .on_press(Message::SubmitPressed)
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::XL]),
        );

    if let Some(key) = ctx.state.feedback_key() {
        form = form.push(
            Text::new(ctx.i18n.tr(key))
                .size(typography::BODY_SM)
                .color(palette::PRIMARY_600),
        );
    }

    Container::new(form)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .style(styles::container::contact_band)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn type_message(state: &mut State, text: &str) {
        let _ = update(
            state,
            Message::BodyEdited(text_editor::Action::Edit(text_editor::Edit::Paste(
                Arc::new(text.to_string()),
            ))),
        );
    }

    fn filled_state() -> State {
        let mut state = State::new();
        let _ = update(&mut state, Message::NameChanged("Ada".to_string()));
        let _ = update(&mut state, Message::EmailChanged("ada@x.com".to_string()));
        type_message(&mut state, "Hi");
        state
    }

    #[test]
    fn submit_with_missing_name_sets_validation_feedback_and_sends_nothing() {
        let mut state = State::new();
        let _ = update(&mut state, Message::EmailChanged("b@x.com".to_string()));
        type_message(&mut state, "hi");

        let event = update(&mut state, Message::SubmitPressed);

        assert!(matches!(event, Event::None));
        assert_eq!(state.feedback_key(), Some(FEEDBACK_MISSING_FIELDS_KEY));
        // Partial values are retained.
        assert_eq!(state.email, "b@x.com");
        assert_eq!(state.message(), "hi");
    }

    #[test]
    fn submit_with_empty_message_is_rejected() {
        let mut state = State::new();
        let _ = update(&mut state, Message::NameChanged("Ada".to_string()));
        let _ = update(&mut state, Message::EmailChanged("ada@x.com".to_string()));

        let event = update(&mut state, Message::SubmitPressed);

        assert!(matches!(event, Event::None));
        assert_eq!(state.feedback_key(), Some(FEEDBACK_MISSING_FIELDS_KEY));
    }

    #[test]
    fn submit_with_all_fields_emits_the_mapped_payload() {
        let mut state = filled_state();

        let event = update(&mut state, Message::SubmitPressed);

        match event {
            Event::Send(payload) => {
                assert_eq!(payload.from_name, "Ada");
                assert_eq!(payload.reply_to, "ada@x.com");
                assert_eq!(payload.message, "Hi");
                assert_eq!(payload.correlation_id, "");
            }
            Event::None => panic!("expected a send event"),
        }
        // Fields stay filled while the delivery is pending.
        assert_eq!(state.name, "Ada");
    }

    #[test]
    fn successful_delivery_clears_inputs_and_keeps_success_feedback() {
        let mut state = filled_state();
        state.correlation_id = "tok-1".to_string();
        let _ = update(&mut state, Message::SubmitPressed);

        let event = update(&mut state, Message::Delivered(Ok(())));

        assert!(matches!(event, Event::None));
        assert_eq!(state.name, "");
        assert_eq!(state.email, "");
        assert_eq!(state.message(), "");
        assert_eq!(state.correlation_id, "");
        assert_eq!(state.feedback_key(), Some(FEEDBACK_SENT_KEY));
    }

    #[test]
    fn failed_delivery_preserves_inputs_and_sets_failure_feedback() {
        let mut state = filled_state();
        let _ = update(&mut state, Message::SubmitPressed);

        let event = update(
            &mut state,
            Message::Delivered(Err(EmailError::Rejected {
                status: 400,
                body: "bad template".to_string(),
            })),
        );

        assert!(matches!(event, Event::None));
        assert_eq!(state.name, "Ada");
        assert_eq!(state.email, "ada@x.com");
        assert_eq!(state.message(), "Hi");
        assert_eq!(state.feedback_key(), Some(FEEDBACK_FAILED_KEY));
    }

    #[test]
    fn feedback_reflects_the_most_recent_attempt() {
        let mut state = filled_state();
        let _ = update(&mut state, Message::SubmitPressed);
        let _ = update(
            &mut state,
            Message::Delivered(Err(EmailError::Network("offline".to_string()))),
        );
        assert_eq!(state.feedback_key(), Some(FEEDBACK_FAILED_KEY));

        // Next attempt with a cleared name overwrites the failure feedback
        // with the validation message.
        let _ = update(&mut state, Message::NameChanged(String::new()));
        let _ = update(&mut state, Message::SubmitPressed);
        assert_eq!(state.feedback_key(), Some(FEEDBACK_MISSING_FIELDS_KEY));
    }

    #[test]
    fn resubmit_while_pending_emits_a_second_send() {
        // The form has no duplicate-submission guard; each valid submit
        // yields its own delivery task.
        let mut state = filled_state();

        let first = update(&mut state, Message::SubmitPressed);
        let second = update(&mut state, Message::SubmitPressed);

        assert!(matches!(first, Event::Send(_)));
        assert!(matches!(second, Event::Send(_)));
    }

    #[test]
    fn contact_view_renders_with_and_without_feedback() {
        let i18n = crate::i18n::fluent::I18n::default();

        let state = State::new();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        let mut state = filled_state();
        let _ = update(&mut state, Message::SubmitPressed);
        let _ = update(&mut state, Message::Delivered(Ok(())));
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
