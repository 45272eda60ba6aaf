//! Chat exchange: one request at a time, replies routed to their conversation
//!
//! A send goes through three steps:
//!
//! 1. [`ConversationState::begin_send`] appends the user message, moves the
//!    phase to `Sending` and snapshots the history.
//! 2. [`ChatClient::send`] posts that history and waits for the reply.
//! 3. [`ConversationState::complete`] returns the phase to `Idle` if this
//!    request still holds it, and appends the reply, the apology placeholder,
//!    or nothing when the originating conversation is no longer active.

use crate::api::{ChatError, ChatTransport};
use crate::conversation::{ConversationId, ConversationState};
use crate::types::{ChatRequest, Message, CHAT_MODEL};

/// Content of the assistant placeholder appended when a request fails
pub const APOLOGY: &str =
    "I apologize, but I encountered an error processing your request. Please try again.";

/// Send lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendPhase {
    #[default]
    Idle,
    Sending {
        conversation: ConversationId,
    },
}

impl SendPhase {
    pub fn is_sending(&self) -> bool {
        matches!(self, SendPhase::Sending { .. })
    }
}

/// A request that has been admitted and is ready to go out
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    pub conversation: ConversationId,
    pub history: Vec<Message>,
}

/// What completing a request did to the state
#[derive(Debug, Clone, PartialEq)]
pub enum SendOutcome {
    Replied(Message),
    /// `notice` is the error detail for the transient notification
    Failed { message: Message, notice: String },
    /// The conversation was replaced before the reply arrived
    Discarded,
}

impl ConversationState {
    /// Admit a send, or `None` when the input is blank or a request is in flight
    pub fn begin_send(&mut self, text: &str) -> Option<PendingSend> {
        self.append_user_message(text)?;
        let conversation = self.active_id()?;
        self.phase = SendPhase::Sending { conversation };
        Some(PendingSend {
            conversation,
            history: self.history().to_vec(),
        })
    }

    /// Settle the request started for `conversation`
    pub fn complete(
        &mut self,
        conversation: ConversationId,
        result: Result<String, ChatError>,
    ) -> SendOutcome {
        // Only the request that holds the guard may release it
        if self.phase == (SendPhase::Sending { conversation }) {
            self.phase = SendPhase::Idle;
        }

        if !self.is_active(conversation) {
            tracing::info!("Dropping reply for a conversation that is no longer active");
            return SendOutcome::Discarded;
        }

        match result {
            Ok(content) => SendOutcome::Replied(self.append_assistant_message(&content, false)),
            Err(err) => {
                tracing::error!("Error getting AI response: {}", err);
                SendOutcome::Failed {
                    message: self.append_assistant_message(APOLOGY, true),
                    notice: err.to_string(),
                }
            }
        }
    }
}

/// Posts histories through a [`ChatTransport`] with a fixed model
pub struct ChatClient<T> {
    transport: T,
    model: String,
}

impl<T: ChatTransport> ChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            model: CHAT_MODEL.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the full history and return the assistant's reply text
    pub async fn send(&self, history: &[Message]) -> Result<String, ChatError> {
        let request = ChatRequest::from_history(history, &self.model);
        let response = self.transport.post_chat(&request).await?;
        Ok(response.content)
    }
}
