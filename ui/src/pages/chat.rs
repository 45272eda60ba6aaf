//! Chat page - main conversation interface

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use crate::api::HttpChatTransport;
use crate::chat::{ChatClient, SendOutcome};
use crate::components::{ChatInput, ChatMessage, NexLogo, Sidebar, TypingIndicator};
use crate::conversation::SUGGESTIONS;
use crate::routes::ROOT_PATH;
use crate::state::AppState;

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    // Local state
    let input = RwSignal::new(String::new());
    let sidebar_open = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    let is_sending = Signal::derive(move || state.conversations.with(|c| c.is_sending()));
    let is_empty = Signal::derive(move || state.conversations.with(|c| c.history().is_empty()));
    let title = Signal::derive(move || state.conversations.with(|c| c.title().to_string()));

    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    // Auto-scroll whenever the thread changes
    Effect::new(move |_| {
        state.conversations.track();
        scroll_to_bottom();
    });

    // Admit the message, post the history, then settle against current state
    let do_send_message = move |message_text: String| {
        let Some(pending) = state
            .conversations
            .try_update(|c| c.begin_send(&message_text))
            .flatten()
        else {
            return;
        };

        spawn_local(async move {
            let client = ChatClient::new(HttpChatTransport::default());
            let result = client.send(&pending.history).await;

            let outcome = state
                .conversations
                .try_update(|c| c.complete(pending.conversation, result));

            if let Some(SendOutcome::Failed { notice, .. }) = outcome {
                state.notify_error(notice);
            }
        });
    };

    let send_from_input = move || {
        let message_text = input.get_untracked();
        if message_text.trim().is_empty() || is_sending.get_untracked() {
            return;
        }
        input.set(String::new());
        do_send_message(message_text);
    };

    let new_chat = move || {
        state.conversations.update(|c| {
            c.start_new();
        });
        sidebar_open.set(false);
        state.notify_success("New conversation started");
    };

    let clear_chat = move || {
        state.conversations.update(|c| c.clear());
        state.notify_success("Chat cleared");
    };

    let logout = move || {
        state.logout();
        navigate(ROOT_PATH, Default::default());
    };

    let toggle_sidebar = move |_| sidebar_open.update(|v| *v = !*v);

    view! {
        <Title text=move || format!("{} | Nex.Ai", title.get()) />
        <div class="h-screen flex bg-[var(--bg-primary)] overflow-hidden">
            <Sidebar
                is_open=sidebar_open
                on_new_chat=new_chat
                on_clear_chat=clear_chat
                on_logout=logout
            />

            <main class="flex-1 flex flex-col min-w-0">
                // Chat header
                <div class="h-14 px-4 flex items-center gap-3 border-b border-[var(--border-default)] glass">
                    <button on:click=toggle_sidebar class="lg:hidden btn btn-ghost p-2">
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                    <div class="lg:hidden">
                        <NexLogo size=28 />
                    </div>
                    <h1 class="font-medium text-[var(--text-primary)] truncate">
                        {move || title.get()}
                    </h1>
                </div>

                // Messages area
                <div class="flex-1 overflow-y-auto">
                    <Show
                        when=move || !is_empty.get()
                        fallback=move || view! { <EmptyState on_prompt=do_send_message /> }
                    >
                        <div class="max-w-3xl mx-auto p-4 space-y-6">
                            {move || {
                                state.conversations.with(|c| c.history().to_vec())
                                    .into_iter()
                                    .map(|msg| view! { <ChatMessage message=msg /> })
                                    .collect::<Vec<_>>()
                            }}

                            <Show when=move || is_sending.get()>
                                <TypingIndicator />
                            </Show>
                        </div>
                    </Show>
                    // Scroll anchor
                    <div node_ref=messages_end_ref></div>
                </div>

                <ChatInput
                    value=input
                    on_submit=send_from_input
                    disabled=is_sending
                />
            </main>
        </div>
    }
}

/// Empty state with starter prompts
#[component]
fn EmptyState<F>(on_prompt: F) -> impl IntoView
where
    F: Fn(String) + Clone + 'static,
{
    view! {
        <div class="empty-state h-full">
            <div class="empty-state-icon">
                <NexLogo size=80 />
            </div>

            <h2 class="empty-state-title text-gradient">"How can I help you today?"</h2>
            <p class="empty-state-description">
                "Start a conversation or try one of these suggestions"
            </p>

            <div class="quick-prompts w-full max-w-2xl grid sm:grid-cols-2 gap-3">
                {SUGGESTIONS.iter().enumerate().map(|(i, prompt)| {
                    let prompt = *prompt;
                    let on_prompt = on_prompt.clone();
                    view! {
                        <button
                            on:click=move |_| on_prompt(prompt.to_string())
                            class=format!("quick-prompt text-left animate-fade-in-up stagger-{}", (i % 5) + 1)
                        >
                            {prompt}
                        </button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
