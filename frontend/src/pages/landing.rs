use leptos::*;
use leptos_meta::Title;
use leptos_router::A;

use crate::components::Hero;
use crate::config::APP_NAME;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 3] = [
    Feature {
        icon: "🛡️",
        title: "Secure",
        description: "Military-grade encryption ensures your data stays protected.",
    },
    Feature {
        icon: "⚡",
        title: "Fast",
        description: "Process fingerprints in seconds with our optimized algorithms.",
    },
    Feature {
        icon: "🔍",
        title: "Reliable",
        description: "99.9% accuracy rate with advanced detection technology.",
    },
];

/// Landing page with links to both workflows.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Title text=APP_NAME/>
        <div class="container landing">
            <Hero/>

            <div class="landing-actions">
                <A href="/embed" class="btn btn-primary btn-large">
                    "📤 Embed Fingerprint"
                </A>
                <A href="/decode" class="btn btn-outline btn-large">
                    "🔍 Decode Fingerprint"
                </A>
            </div>

            <div class="features">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class="glass-panel feature-card">
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p class="muted">{feature.description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
