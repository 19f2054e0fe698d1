//! Marketing sections of the landing page
//!
//! Static content only. Each section owns its copy as `const` data and renders
//! it with the same card markup.

use leptos::prelude::*;

/// Title/body pair rendered as a card.
#[derive(Clone, Copy, Debug)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

pub const TECH_STACK: &[&str] = &[
    "Solana",
    "Phantom",
    "Rust",
    "WebAssembly",
    "Leptos",
    "Computer Vision",
];

pub const AI_ENGINE_FEATURES: &[Feature] = &[
    Feature {
        title: "Face Forensics",
        body: "Frame-level analysis flags blending seams, warped landmarks and lighting that does not match the scene.",
    },
    Feature {
        title: "Voice Fingerprinting",
        body: "Spectral checks catch cloned voices that sound right to the ear but not to the model.",
    },
    Feature {
        title: "Confidence Scores",
        body: "Every verdict comes with a score so you decide how aggressive takedowns should be.",
    },
];

pub const MONITORING_FEATURES: &[Feature] = &[
    Feature {
        title: "Always Watching",
        body: "AIGuardian scans public platforms for media that uses your likeness.",
    },
    Feature {
        title: "On-chain Proof",
        body: "Your original media is anchored to your Solana wallet, giving you a verifiable claim of authenticity.",
    },
    Feature {
        title: "Instant Alerts",
        body: "Get notified the moment a suspected deepfake of you appears.",
    },
];

pub const ACTION_STEPS: &[Feature] = &[
    Feature {
        title: "Connect Phantom",
        body: "Link your wallet. It becomes your identity anchor.",
    },
    Feature {
        title: "Register Your Likeness",
        body: "Upload reference media that AIGuardian learns to recognise as you.",
    },
    Feature {
        title: "Let It Watch",
        body: "The engine monitors for impersonation and scores every match.",
    },
    Feature {
        title: "Take Action",
        body: "Review flagged content and file reports with on-chain evidence.",
    },
];

#[component]
fn FeatureCard(feature: Feature, #[prop(optional)] index: Option<usize>) -> impl IntoView {
    view! {
        <div class="feature-card">
            {index.map(|i| view! { <span class="feature-index">{format!("{:02}", i + 1)}</span> })}
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-body">{feature.body}</p>
        </div>
    }
}

#[component]
pub fn TechStacks() -> impl IntoView {
    view! {
        <div class="tech-stacks">
            <h2 class="section-heading">"Built With"</h2>
            <ul class="tech-list">
                {TECH_STACK
                    .iter()
                    .map(|name| view! { <li class="tech-chip">{*name}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn AiEngineSection() -> impl IntoView {
    view! {
        <div class="ai-engine">
            <h2 class="section-heading">"The AI Engine"</h2>
            <p class="section-lead">
                "A detection pipeline trained to tell you apart from a synthetic copy of you."
            </p>
            <div class="feature-grid">
                {AI_ENGINE_FEATURES
                    .iter()
                    .map(|f| view! { <FeatureCard feature=*f/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn MonitoringSection() -> impl IntoView {
    view! {
        <div class="monitoring">
            <h2 class="section-heading">"Monitoring"</h2>
            <div class="feature-grid">
                {MONITORING_FEATURES
                    .iter()
                    .map(|f| view! { <FeatureCard feature=*f/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ActionSteps() -> impl IntoView {
    view! {
        <div class="action-steps">
            <h2 class="section-heading">"How it Works"</h2>
            <div class="steps">
                {ACTION_STEPS
                    .iter()
                    .enumerate()
                    .map(|(i, f)| view! { <FeatureCard feature=*f index=i/> })
                    .collect_view()}
            </div>
        </div>
    }
}
