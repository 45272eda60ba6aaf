//! Terms and privacy pages

use crate::components::BrandLogo;
use leptos::prelude::*;
use leptos_meta::Title;

struct Section {
    heading: &'static str,
    body: &'static str,
    bullets: &'static [&'static str],
}

const LAST_UPDATED: &str = "Last updated: January 2025";

const TERMS: &[Section] = &[
    Section {
        heading: "1. Acceptance of Terms",
        body: "By accessing and using Nex.Ai, you accept and agree to be bound by these terms. If you do not agree to them, please do not use this service.",
        bullets: &[],
    },
    Section {
        heading: "2. Description of Service",
        body: "Nex.Ai provides an AI-powered conversational interface for informational and assistance purposes. The service is provided \"as is\" without warranties regarding the accuracy, completeness, or reliability of any information provided.",
        bullets: &[],
    },
    Section {
        heading: "3. User Conduct",
        body: "You agree not to use the service to:",
        bullets: &[
            "Generate harmful, illegal, or inappropriate content",
            "Attempt to circumvent any security measures",
            "Impersonate others or misrepresent your affiliation",
            "Interfere with the proper functioning of the service",
            "Use the service for any unlawful purpose",
        ],
    },
    Section {
        heading: "4. Guest Sessions",
        body: "Guest sessions are temporary. All data associated with your session is cleared when you close your browser or end your session. Conversation history is not stored for guest users.",
        bullets: &[],
    },
    Section {
        heading: "5. Intellectual Property",
        body: "The Nex.Ai service, including its content, features, and functionality, is owned by Nex.Ai and protected by copyright, trademark, and other intellectual property laws.",
        bullets: &[],
    },
    Section {
        heading: "6. Disclaimer",
        body: "Information provided by Nex.Ai is for general informational purposes only and is provided in good faith, without any representation or warranty regarding its accuracy, validity, or completeness.",
        bullets: &[],
    },
    Section {
        heading: "7. Limitation of Liability",
        body: "In no event shall Nex.Ai be liable for any indirect, incidental, special, consequential, or punitive damages, including loss of profits, data, use, or goodwill.",
        bullets: &[],
    },
    Section {
        heading: "8. Changes to Terms",
        body: "These terms may be modified or replaced at any time. Continued use of the service after a change constitutes acceptance of the new terms.",
        bullets: &[],
    },
    Section {
        heading: "9. Contact Information",
        body: "Questions about these Terms and Conditions can be sent through the service interface.",
        bullets: &[],
    },
];

const PRIVACY: &[Section] = &[
    Section {
        heading: "1. Introduction",
        body: "Welcome to Nex.Ai. This policy explains how your information is handled when you use the service.",
        bullets: &[],
    },
    Section {
        heading: "2. Information We Collect",
        body: "For guest users, only minimal information is involved:",
        bullets: &[
            "Session Data: a flag kept in your browser's session storage",
            "Conversation Content: messages exchanged during your session, not stored on our servers",
            "Usage Data: basic information about how you interact with the service",
        ],
    },
    Section {
        heading: "3. How We Use Your Information",
        body: "The information is used to:",
        bullets: &[
            "Provide and maintain the service",
            "Improve the user experience",
            "Ensure the security of the service",
        ],
    },
    Section {
        heading: "4. Data Storage and Security",
        body: "Guest session data lives in your browser and is cleared when you close the tab or log out. Conversation data for guests is not stored permanently on our servers.",
        bullets: &[],
    },
    Section {
        heading: "5. Data Sharing",
        body: "Your information is not sold, traded, or transferred to third parties. Aggregated, anonymized data that cannot identify individual users may be used for analysis.",
        bullets: &[],
    },
    Section {
        heading: "6. Cookies and Tracking",
        body: "Session storage is used to keep your guest session. No tracking cookies or cross-site analytics are used.",
        bullets: &[],
    },
    Section {
        heading: "7. Your Rights",
        body: "You have the right to:",
        bullets: &[
            "Access information about what data is collected",
            "Clear your session data at any time by logging out or closing your browser",
            "Request information about our data practices",
        ],
    },
    Section {
        heading: "8. Children's Privacy",
        body: "The service is not intended for children under 13 years of age, and personal information from children under 13 is not knowingly collected.",
        bullets: &[],
    },
    Section {
        heading: "9. Changes to This Policy",
        body: "This policy may be updated from time to time. Changes are posted on this page with an updated revision date.",
        bullets: &[],
    },
    Section {
        heading: "10. Contact Us",
        body: "Questions about this Privacy Policy can be sent through the service interface.",
        bullets: &[],
    },
];

/// Terms and conditions
#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Terms and Conditions"
            sections=TERMS
            other_href="/privacy"
            other_label="Privacy Policy"
        />
    }
}

/// Privacy policy
#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <LegalDocument
            title="Privacy Policy"
            sections=PRIVACY
            other_href="/terms"
            other_label="Terms & Conditions"
        />
    }
}

#[component]
fn LegalDocument(
    title: &'static str,
    sections: &'static [Section],
    other_href: &'static str,
    other_label: &'static str,
) -> impl IntoView {
    view! {
        <Title text=format!("{} | Nex.Ai", title) />
        <div class="min-h-screen bg-[var(--bg-primary)]">
            <header class="header sticky top-0 z-50">
                <div class="max-w-4xl mx-auto px-4 h-14 flex items-center justify-between">
                    <a href="/" class="hover:opacity-90 transition-opacity">
                        <BrandLogo />
                    </a>
                    <a href="/" class="btn btn-ghost">"← Back"</a>
                </div>
            </header>

            <main class="max-w-4xl mx-auto px-4 py-8">
                <div class="card p-6">
                    <h1 class="text-2xl font-semibold text-[var(--text-primary)]">{title}</h1>
                    <p class="text-sm text-[var(--text-muted)] mb-6">{LAST_UPDATED}</p>

                    <div class="space-y-6 text-[var(--text-secondary)]">
                        {sections.iter().map(|section| view! {
                            <section>
                                <h3 class="text-lg font-semibold text-[var(--text-primary)] mb-3">
                                    {section.heading}
                                </h3>
                                <p class="leading-relaxed">{section.body}</p>
                                {(!section.bullets.is_empty()).then(|| view! {
                                    <ul class="list-disc pl-5 mt-2 space-y-1">
                                        {section.bullets.iter().map(|item| view! {
                                            <li>{*item}</li>
                                        }).collect::<Vec<_>>()}
                                    </ul>
                                })}
                            </section>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="mt-6 text-center text-sm text-[var(--text-muted)]">
                    <a href=other_href class="auth-link">{other_label}</a>
                    <span class="mx-2">"•"</span>
                    <a href="/" class="auth-link">"Back to Home"</a>
                </div>
            </main>
        </div>
    }
}
