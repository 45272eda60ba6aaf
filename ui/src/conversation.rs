//! Conversation state
//!
//! Holds the sidebar list and the single active conversation. The active
//! conversation is an explicit [`ActiveConversation`] so an empty list or a
//! missing selection is a state, not an accident.

use crate::chat::SendPhase;
use crate::types::{Message, MessageId};

/// Title shown before the first message
pub const DEFAULT_TITLE: &str = "New Chat";

/// Titles longer than this many characters are cut
pub const TITLE_MAX_CHARS: usize = 30;

const TITLE_ELLIPSIS: &str = "...";

/// Starter prompts offered while the conversation is empty
pub const SUGGESTIONS: [&str; 4] = [
    "Explain quantum computing in simple terms",
    "Write a haiku about programming",
    "What are the best practices for React?",
    "Help me brainstorm business ideas",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub uuid::Uuid);

impl ConversationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConversationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Title for a conversation whose first message is `text`
pub fn derive_title(text: &str) -> String {
    if text.chars().count() > TITLE_MAX_CHARS {
        let head: String = text.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}{TITLE_ELLIPSIS}")
    } else {
        text.to_string()
    }
}

/// One chat thread
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub id: ConversationId,
    pub title: String,
    pub messages: Vec<Message>,
    next_message_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            id: ConversationId::new(),
            title: DEFAULT_TITLE.to_string(),
            messages: Vec::new(),
            next_message_id: 1,
        }
    }

    fn next_id(&mut self) -> MessageId {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;
        id
    }

    /// Appends a user message; the title is set only when this is the first one
    fn push_user(&mut self, text: &str) -> Message {
        if self.messages.is_empty() {
            self.title = derive_title(text);
        }
        let message = Message::user(self.next_id(), text);
        self.messages.push(message.clone());
        message
    }

    fn push_assistant(&mut self, text: &str, is_error: bool) -> Message {
        let message = Message::assistant(self.next_id(), text, is_error);
        self.messages.push(message.clone());
        message
    }

    fn clear(&mut self) {
        self.messages.clear();
        self.title = DEFAULT_TITLE.to_string();
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Sidebar row
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEntry {
    pub id: ConversationId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActiveConversation {
    None,
    Active(Conversation),
}

/// Conversation list, active conversation and send phase
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationState {
    /// Most recent first
    entries: Vec<ConversationEntry>,
    active: ActiveConversation,
    pub(crate) phase: SendPhase,
}

impl ConversationState {
    /// Starts with one empty active conversation
    pub fn new() -> Self {
        let mut state = Self::empty();
        state.start_new();
        state
    }

    /// No conversations at all
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            active: ActiveConversation::None,
            phase: SendPhase::Idle,
        }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn active(&self) -> Option<&Conversation> {
        match &self.active {
            ActiveConversation::Active(conversation) => Some(conversation),
            ActiveConversation::None => None,
        }
    }

    pub fn active_id(&self) -> Option<ConversationId> {
        self.active().map(|c| c.id)
    }

    pub fn is_active(&self, id: ConversationId) -> bool {
        self.active_id() == Some(id)
    }

    pub fn title(&self) -> &str {
        self.active().map_or(DEFAULT_TITLE, |c| c.title.as_str())
    }

    /// Messages of the active conversation in display order
    pub fn history(&self) -> &[Message] {
        self.active().map_or(&[], |c| c.messages.as_slice())
    }

    pub fn is_sending(&self) -> bool {
        self.phase.is_sending()
    }

    fn active_mut(&mut self) -> &mut Conversation {
        if let ActiveConversation::None = self.active {
            self.start_new();
        }
        match &mut self.active {
            ActiveConversation::Active(conversation) => conversation,
            ActiveConversation::None => unreachable!("start_new always activates"),
        }
    }

    fn sync_entry_title(&mut self) {
        let Some(conversation) = self.active() else {
            return;
        };
        let (id, title) = (conversation.id, conversation.title.clone());
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.title = title;
        }
    }

    /// Append trimmed user input.
    ///
    /// Returns `None` without touching state when the input is blank or a
    /// request is in flight.
    pub fn append_user_message(&mut self, text: &str) -> Option<Message> {
        let text = text.trim();
        if text.is_empty() || self.is_sending() {
            return None;
        }
        let message = self.active_mut().push_user(text);
        self.sync_entry_title();
        Some(message)
    }

    pub fn append_assistant_message(&mut self, text: &str, is_error: bool) -> Message {
        self.active_mut().push_assistant(text, is_error)
    }

    /// Empty the active conversation and reset its title
    pub fn clear(&mut self) {
        if let ActiveConversation::Active(conversation) = &mut self.active {
            conversation.clear();
        }
        self.sync_entry_title();
    }

    /// Make a fresh conversation the active one, listed first
    pub fn start_new(&mut self) -> Conversation {
        let conversation = Conversation::new();
        self.entries.insert(
            0,
            ConversationEntry {
                id: conversation.id,
                title: conversation.title.clone(),
            },
        );
        self.active = ActiveConversation::Active(conversation.clone());
        conversation
    }
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}
