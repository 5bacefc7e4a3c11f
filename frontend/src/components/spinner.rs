//! Loading indicator with an optional progress bar.
//!
//! Stateless: the caller owns the percentage and any animation timer.

use leptos::*;

use crate::workflow::SubmissionProgress;

#[component]
pub fn LoadingSpinner(
    /// Text shown next to the bar, or alone
    #[prop(optional, into)]
    message: Option<String>,
    /// Omit for an indeterminate spinner
    #[prop(optional, into)]
    progress: Option<Signal<SubmissionProgress>>,
) -> impl IntoView {
    let message = message.unwrap_or_else(|| "Processing...".to_string());

    let details = match progress {
        Some(progress) => view! {
            <div class="progress-block">
                <div class="progress-labels">
                    <span class="progress-message">{message}</span>
                    <span class="progress-percent">{move || format!("{}%", progress.get().percent())}</span>
                </div>
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {}%;", progress.get().value())
                    ></div>
                </div>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="spinner-text">
                <p class="spinner-message">{message}</p>
                <p class="spinner-hint">"This may take a few moments..."</p>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="loading-spinner">
            <div class="spinner-ring"></div>
            {details}
            <div class="spinner-dots">
                <span class="dot"></span>
                <span class="dot"></span>
                <span class="dot"></span>
            </div>
        </div>
    }
}
