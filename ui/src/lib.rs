//! Nex.Ai Chat UI - Leptos single-page frontend
//!
//! Guests continue without an account, chat with the assistant through the
//! `/api/chat` proxy, and can read the terms and privacy pages.

pub mod api;
pub mod chat;
pub mod components;
pub mod conversation;
pub mod notify;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use components::ToastHost;
use pages::{chat::ChatPage, legal::PrivacyPage, legal::TermsPage, login::LoginPage};
use routes::{AppRoute, RouteDecision};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Initialize global state
    let app_state = AppState::new();
    provide_context(app_state);

    view! {
        <Router>
            <main class="dark min-h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Gate path=routes::ROOT_PATH /> } />
                    <Route path=path!("/chat") view=|| view! { <Gate path=routes::CHAT_PATH /> } />
                    <Route path=path!("/terms") view=|| view! { <Gate path=routes::TERMS_PATH /> } />
                    <Route path=path!("/privacy") view=|| view! { <Gate path=routes::PRIVACY_PATH /> } />
                </Routes>
            </main>
            <ToastHost />
        </Router>
    }
}

/// Renders or redirects according to the route table and the guest flag
#[component]
fn Gate(path: &'static str) -> impl IntoView {
    let state = expect_context::<AppState>();

    move || match routes::resolve(path, state.session.is_guest()) {
        RouteDecision::Redirect(to) => view! { <Redirect path=to /> }.into_any(),
        RouteDecision::Render(AppRoute::Login) => view! { <LoginPage /> }.into_any(),
        RouteDecision::Render(AppRoute::Chat) => view! { <ChatPage /> }.into_any(),
        RouteDecision::Render(AppRoute::Terms) => view! { <TermsPage /> }.into_any(),
        RouteDecision::Render(AppRoute::Privacy) => view! { <PrivacyPage /> }.into_any(),
        RouteDecision::Render(AppRoute::NotFound) => view! { <NotFound /> }.into_any(),
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                <p class="text-xl text-[var(--text-secondary)] mb-8">"Page not found"</p>
                <a href="/" class="btn btn-primary">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
