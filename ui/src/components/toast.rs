//! Toast stack

use crate::notify::ToastKind;
use crate::state::AppState;
use leptos::prelude::*;

/// Renders the current toasts, top-center
#[component]
pub fn ToastHost() -> impl IntoView {
    let state = expect_context::<AppState>();

    view! {
        <div class="fixed top-4 left-1/2 -translate-x-1/2 z-50 flex flex-col gap-2 w-full max-w-sm px-4">
            {move || {
                state.notifications.get().toasts().iter().cloned().map(|t| {
                    let id = t.id;
                    let class = match t.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! {
                        <div
                            class=format!("{} animate-fade-in-down", class)
                            role="status"
                            on:click=move |_| state.notifications.update(|n| n.dismiss(id))
                        >
                            {t.text}
                        </div>
                    }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}
