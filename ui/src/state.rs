//! Global application state

use crate::conversation::ConversationState;
use crate::notify::{toast, Notifications, ToastKind};
use crate::session::GuestSession;
use leptos::prelude::*;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Guest flag backed by session storage
    pub session: GuestSession,
    /// Conversation list, active conversation and send phase
    pub conversations: RwSignal<ConversationState>,
    /// Visible toasts
    pub notifications: RwSignal<Notifications>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: GuestSession::init(),
            conversations: RwSignal::new(ConversationState::new()),
            notifications: RwSignal::new(Notifications::default()),
        }
    }

    pub fn notify_success(&self, msg: impl Into<String>) {
        toast(self.notifications, ToastKind::Success, msg);
    }

    pub fn notify_error(&self, msg: impl Into<String>) {
        toast(self.notifications, ToastKind::Error, msg);
    }

    /// Continue as guest
    pub fn login(&self) {
        self.session.login();
    }

    /// Drop the guest flag and the in-memory conversations
    pub fn logout(&self) {
        self.session.logout();
        self.conversations.set(ConversationState::new());
        self.notify_success("Logged out successfully");
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
