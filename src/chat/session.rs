//! Conversation session: the chat input, the transcript and the simulated
//! reply latency.

use std::time::Duration;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use super::responder::{Chooser, RandomChooser, Responder};
use crate::error::Result;
use crate::latency::simulate_latency;

/// Default delay before the assistant reply appears.
pub const DEFAULT_REPLY_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

/// Append-only message log, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry stamped with the current local time.
    pub fn push(&mut self, role: Role, text: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage {
            role,
            text: text.into(),
            timestamp: Local::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// The chat text box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatInput {
    pub value: String,
    /// Marked when an empty message was sent.
    pub invalid: bool,
}

/// Result of [`ChatSession::send_message`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendOutcome {
    /// The input was blank; nothing was appended.
    Rejected,
    Replied {
        user: ChatMessage,
        assistant: ChatMessage,
    },
}

/// A message accepted by [`ChatSession::begin_send`] whose reply is pending.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingReply {
    text: String,
    user: ChatMessage,
}

impl PendingReply {
    /// The trimmed message being answered.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Chat widget state for one page session.
#[derive(Debug)]
pub struct ChatSession<C = RandomChooser> {
    pub input: ChatInput,
    transcript: Transcript,
    responder: Responder<C>,
    latency: Duration,
    loading: bool,
}

impl ChatSession<RandomChooser> {
    pub fn new() -> Self {
        Self::with_responder(Responder::new(), DEFAULT_REPLY_LATENCY)
    }
}

impl Default for ChatSession<RandomChooser> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chooser> ChatSession<C> {
    pub fn with_responder(responder: Responder<C>, latency: Duration) -> Self {
        Self {
            input: ChatInput::default(),
            transcript: Transcript::new(),
            responder,
            latency,
            loading: false,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the loading indicator is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replace the contents of the text box.
    pub fn type_input(&mut self, text: impl Into<String>) {
        self.input.value = text.into();
    }

    /// Reply latency of this session.
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// First half of [`send_message`](Self::send_message).
    ///
    /// A blank input marks the box invalid and returns `None`. Otherwise the
    /// mark is cleared, the user entry is appended and the loading indicator
    /// is shown until [`finish_send`](Self::finish_send).
    pub fn begin_send(&mut self) -> Option<PendingReply> {
        let text = self.input.value.trim().to_string();
        if text.is_empty() {
            self.input.invalid = true;
            return None;
        }
        self.input.invalid = false;

        let user = self.transcript.push(Role::User, text.as_str()).clone();
        self.loading = true;
        Some(PendingReply { text, user })
    }

    /// Second half of [`send_message`](Self::send_message): once the wait
    /// completed, append the assistant entry and clear the box. A failed wait
    /// appends nothing and keeps the input.
    pub fn finish_send(&mut self, pending: PendingReply, waited: Result<()>) -> Result<SendOutcome> {
        self.loading = false;
        waited?;

        let reply = self.responder.generate_response(&pending.text);
        let assistant = self.transcript.push(Role::Assistant, reply).clone();
        self.input.value.clear();

        Ok(SendOutcome::Replied {
            user: pending.user,
            assistant,
        })
    }

    /// Send the current input.
    ///
    /// The user entry is appended at once and the assistant entry after the
    /// reply latency. If `cancel` fires during the wait, no reply is appended
    /// and the input is kept.
    pub async fn send_message(&mut self, cancel: &CancellationToken) -> Result<SendOutcome> {
        let Some(pending) = self.begin_send() else {
            return Ok(SendOutcome::Rejected);
        };
        let waited = simulate_latency(self.latency, cancel).await;
        self.finish_send(pending, waited)
    }

    /// Timestamp of the newest entry, if any.
    pub fn last_activity(&self) -> Option<DateTime<Local>> {
        self.transcript.messages().last().map(|message| message.timestamp)
    }
}
