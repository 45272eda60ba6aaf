//! Nex.Ai logo marks

use leptos::prelude::*;

/// Hexagonal logo mark
#[component]
pub fn NexLogo(#[prop(default = 36)] size: u32) -> impl IntoView {
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 48 48"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <defs>
                <linearGradient id="nexGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                    <stop offset="0%" stop-color="hsl(168, 62%, 48%)" />
                    <stop offset="100%" stop-color="hsl(180, 55%, 40%)" />
                </linearGradient>
            </defs>
            <path d="M24 4L42 14V34L24 44L6 34V14L24 4Z" fill="url(#nexGradient)" />
            <path
                d="M24 8L38 16V32L24 40L10 32V16L24 8Z"
                fill="none"
                stroke="hsl(168, 62%, 60%)"
                stroke-width="0.5"
                opacity="0.5"
            />
            <circle cx="24" cy="16" r="2.5" fill="white" />
            <circle cx="16" cy="24" r="2" fill="white" opacity="0.9" />
            <circle cx="32" cy="24" r="2" fill="white" opacity="0.9" />
            <circle cx="24" cy="32" r="2.5" fill="white" />
            <path
                d="M24 16L16 24L24 32L32 24Z"
                fill="none"
                stroke="white"
                stroke-width="1"
                opacity="0.6"
            />
        </svg>
    }
}

/// Logo mark with the wordmark
#[component]
pub fn BrandLogo(#[prop(default = 32)] size: u32) -> impl IntoView {
    view! {
        <div class="logo">
            <NexLogo size=size />
            <span class="text-xl font-bold text-gradient">"Nex.Ai"</span>
        </div>
    }
}
