//! Sidebar component

use leptos::prelude::*;
use crate::components::BrandLogo;
use crate::state::AppState;

/// Sidebar with the conversation list and session actions
#[component]
pub fn Sidebar(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
    on_new_chat: impl Fn() + 'static,
    on_clear_chat: impl Fn() + 'static,
    on_logout: impl Fn() + 'static,
) -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-72
             flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 border-b border-[var(--border-default)] flex items-center justify-between">
                <a href="/">
                    <BrandLogo />
                </a>
                <button
                    class="lg:hidden btn btn-ghost p-2"
                    on:click=move |_| is_open.set(false)
                >
                    "✕"
                </button>
            </div>

            <div class="p-3">
                <button on:click=move |_| on_new_chat() class="btn btn-primary w-full">
                    <svg xmlns="http://www.w3.org/2000/svg" class="w-5 h-5" viewBox="0 0 20 20" fill="currentColor">
                        <path fill-rule="evenodd" d="M10 3a1 1 0 011 1v5h5a1 1 0 110 2h-5v5a1 1 0 11-2 0v-5H4a1 1 0 110-2h5V4a1 1 0 011-1z" clip-rule="evenodd" />
                    </svg>
                    "New Chat"
                </button>
            </div>

            // Conversations
            <div class="flex-1 overflow-y-auto px-3 space-y-1 pb-4">
                {move || {
                    let conversations = state.conversations.get();
                    let active = conversations.active_id();
                    conversations.entries().iter().enumerate().map(|(i, entry)| {
                        let is_active = Some(entry.id) == active;
                        view! {
                            <div class=format!(
                                "sidebar-item animate-fade-in-up stagger-{} {}",
                                (i % 5) + 1,
                                if is_active { "sidebar-item-active" } else { "" }
                            )>
                                <span class="text-sm">"💬"</span>
                                <span class="text-sm truncate">{entry.title.clone()}</span>
                            </div>
                        }
                    }).collect::<Vec<_>>()
                }}
            </div>

            // Footer
            <div class="p-3 border-t border-[var(--border-default)] space-y-1">
                <button on:click=move |_| on_clear_chat() class="btn btn-ghost w-full justify-start">
                    "🗑 Clear Chat"
                </button>
                <a href="/terms" class="btn btn-ghost w-full justify-start">"📄 Terms & Conditions"</a>
                <a href="/privacy" class="btn btn-ghost w-full justify-start">"🛡 Privacy Policy"</a>
                <button
                    on:click=move |_| on_logout()
                    class="btn btn-ghost w-full justify-start text-[var(--accent-error)]"
                >
                    "⎋ Logout"
                </button>
            </div>
        </aside>
    }
}
