//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-badge">"🛡️"</div>
            <h1>
                <span class="hero-accent">"Making the digital world secure,"</span>
                <br/>
                "one fingerprint at a time."
            </h1>
            <p class="subtitle">
                "Advanced digital fingerprinting technology for secure authentication and verification."
            </p>
        </div>
    }
}
