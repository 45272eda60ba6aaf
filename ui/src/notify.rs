//! Transient notifications (toasts)

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays up
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Visible toasts, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl Notifications {
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Show a toast and schedule its removal
pub fn toast(notifications: RwSignal<Notifications>, kind: ToastKind, text: impl Into<String>) {
    let Some(id) = notifications.try_update(|n| n.push(kind, text)) else {
        return;
    };
    Timeout::new(TOAST_TTL_MS, move || {
        notifications.try_update(|n| n.dismiss(id));
    })
    .forget();
}
