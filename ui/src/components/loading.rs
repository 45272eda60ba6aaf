//! Loading indicators

use leptos::prelude::*;
use crate::components::NexLogo;

/// Animated loading dots
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
        <div class="flex items-center gap-1">
            <span class="w-2 h-2 bg-[var(--accent-primary)]/60 rounded-full dot-bounce-1"></span>
            <span class="w-2 h-2 bg-[var(--accent-primary)]/60 rounded-full dot-bounce-2"></span>
            <span class="w-2 h-2 bg-[var(--accent-primary)]/60 rounded-full dot-bounce-3"></span>
        </div>
    }
}

/// Shown while a chat request is in flight
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex items-start gap-3 message-appear">
            <div class="w-8 h-8 shrink-0">
                <NexLogo size=32 />
            </div>
            <div class="surface-message-ai px-4 py-3 rounded-2xl rounded-tl-sm">
                <LoadingDots />
            </div>
        </div>
    }
}
