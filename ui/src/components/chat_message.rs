//! Chat message component

use leptos::prelude::*;
use crate::components::NexLogo;
use crate::types::Message;

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.is_user();

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            // Avatar
            <div class="w-8 h-8 rounded-full flex items-center justify-center text-sm shrink-0">
                {if is_user {
                    view! { <span class="text-[var(--text-secondary)]">"👤"</span> }.into_any()
                } else {
                    view! { <NexLogo size=32 /> }.into_any()
                }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                // Message bubble
                <div class=format!(
                    "px-4 py-3 rounded-2xl {} {}",
                    if is_user {
                        "surface-message-user rounded-tr-sm"
                    } else {
                        "surface-message-ai rounded-tl-sm"
                    },
                    if message.is_error { "border border-[var(--accent-error)]/30" } else { "" }
                )>
                    <p class="text-sm leading-relaxed whitespace-pre-wrap break-words">
                        {message.content.clone()}
                    </p>
                </div>

                // Timestamp
                <span class="text-xs text-[var(--text-muted)] mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
}
