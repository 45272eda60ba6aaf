//! Guest login page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;
use crate::components::{BrandLogo, NexLogo};
use crate::routes::CHAT_PATH;
use crate::state::AppState;

/// Short pause so the button state is visible before navigating
const CONTINUE_DELAY_MS: u32 = 500;

/// Guest login page
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let is_loading = RwSignal::new(false);

    let on_continue = move |_| {
        if is_loading.get() {
            return;
        }
        is_loading.set(true);
        let navigate = navigate.clone();

        spawn_local(async move {
            TimeoutFuture::new(CONTINUE_DELAY_MS).await;
            state.login();
            navigate(CHAT_PATH, Default::default());
        });
    };

    view! {
        <Title text="Nex.Ai" />
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <header class="relative z-10 p-6">
                <a href="/" class="inline-block hover:opacity-90 transition-opacity">
                    <BrandLogo />
                </a>
            </header>

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <div class="auth-card">
                        <div class="auth-header">
                            <div class="auth-logo">
                                <NexLogo size=80 />
                            </div>
                            <h1 class="auth-title text-gradient">"Welcome to Nex.Ai"</h1>
                            <p class="auth-subtitle">
                                "Your intelligent AI assistant, ready to help with anything"
                            </p>
                        </div>

                        <div class="space-y-3 mb-6">
                            <FeatureItem icon="⚡" text="Instant, intelligent responses" />
                            <FeatureItem icon="🛡" text="Private & secure conversations" />
                            <FeatureItem icon="🤖" text="Powered by OpenAI GPT" />
                        </div>

                        <button
                            on:click=on_continue
                            disabled=move || is_loading.get()
                            class="btn btn-primary w-full py-3"
                        >
                            <Show
                                when=move || is_loading.get()
                                fallback=|| view! { "Continue as Guest →" }
                            >
                                <div class="loading-spinner"></div>
                                "Starting..."
                            </Show>
                        </button>

                        <p class="text-xs text-[var(--text-muted)] text-center mt-4">
                            "No account needed. Your session data is temporary and will be cleared when you close the browser."
                        </p>
                    </div>

                    <div class="mt-6 text-center text-sm text-[var(--text-secondary)]">
                        "By continuing, you agree to our "
                        <a href="/terms" class="auth-link">"Terms"</a>
                        " and "
                        <a href="/privacy" class="auth-link">"Privacy Policy"</a>
                    </div>
                </div>
            </main>
        </div>
    }
}

#[component]
fn FeatureItem(icon: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 text-sm text-[var(--text-secondary)]">
            <div class="w-8 h-8 rounded-lg bg-[var(--accent-primary)]/10 flex items-center justify-center">
                {icon}
            </div>
            <span>{text}</span>
        </div>
    }
}
