//! Decode workflow: fingerprinted image in, extracted metadata out.

use std::rc::Rc;

use leptos::*;
use leptos_meta::Title;
use leptos_router::use_navigate;
use web_sys::File;

use super::driver::use_workflow;
use crate::components::{LoadingSpinner, PageHeader, UploadZone};
use crate::config::{APP_NAME, DECODE_API_URL, DECODE_CADENCE};
use crate::services::{decode_fingerprint, ObjectUrl};
use crate::types::{AppError, DecodedMetadata};
use crate::workflow::{Phase, Workflow};

#[component]
pub fn DecodePage() -> impl IntoView {
    let driver = use_workflow::<DecodedMetadata>(DECODE_CADENCE);
    let workflow = driver.state();
    let phase = create_memo(move |_| workflow.with(Workflow::phase));
    let progress = Signal::derive(move || workflow.with(|w| w.progress()));

    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let preview = create_memo(move |_| {
        selected_file.with(|f| f.as_ref().and_then(|f| ObjectUrl::new(f).ok()).map(Rc::new))
    });

    let start_decoding = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            driver.reject(AppError::Validation("Select an image first.".to_string()));
            return;
        };

        log::info!("🔍 Decoding fingerprint from {}", file.name());
        driver.submit(move |signal| decode_fingerprint(file, DECODE_API_URL, signal));
    };

    view! {
        <Title text=format!("Decode Fingerprint | {}", APP_NAME)/>
        <PageHeader title="Decode Fingerprint" icon="🔍"/>

        <div class="container workflow">
            <div class="workflow-upload" class:hidden=move || phase.get() != Phase::Upload>
                <div class="section-intro">
                    <h2>"Decode Fingerprint"</h2>
                    <p class="muted">
                        "Upload a fingerprinted image to extract its embedded metadata and verify its authenticity."
                    </p>
                </div>

                <UploadZone set_file=set_selected_file/>

                {move || {
                    workflow
                        .with(|w| w.error().map(ToString::to_string))
                        .map(|message| view! { <div class="error-message">{message}</div> })
                }}

                <div class="submit-block" class:hidden=move || selected_file.with(Option::is_none)>
                    <button class="btn btn-outline btn-large" on:click=start_decoding>
                        "Start Decoding Process"
                    </button>
                </div>
            </div>

            {move || (phase.get() == Phase::Processing).then(|| view! {
                <div class="workflow-processing">
                    <LoadingSpinner message="Decoding digital fingerprint..." progress=progress/>
                    {preview.with(|url| url.as_ref().map(|url| url.as_str().to_string())).map(|src| view! {
                        <img class="processing-preview" src=src alt="Preview"/>
                    })}
                </div>
            })}

            {move || {
                (phase.get() == Phase::Complete)
                    .then(|| workflow.with_untracked(|w| w.result().cloned()))
                    .flatten()
                    .map(|metadata| view! { <DecodeComplete metadata=metadata/> })
            }}
        </div>
    }
}

#[component]
fn DecodeComplete(metadata: DecodedMetadata) -> impl IntoView {
    let navigate = use_navigate();

    let rows = metadata
        .fields()
        .into_iter()
        .map(|field| {
            let extra = !field.known;
            view! {
                <div class="metadata-row" class:extra=extra>
                    <div class="metadata-key">{field.label} ":"</div>
                    <div class="metadata-value mono">{field.value}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="workflow-complete">
            <div class="success-badge">"✅"</div>
            <h2 class="success-title">"Fingerprint Decoded Successfully!"</h2>
            <p class="muted">"Here's the extracted metadata from your image."</p>

            <div class="glass-panel result-panel decoded">
                <div class="metadata-header">
                    <span>"📄"</span>
                    <h3>"Decoded Metadata"</h3>
                </div>

                <div class="metadata-grid">{rows}</div>

                <div class="verified">
                    <span class="verified-badge">"✔ Fingerprint Verified"</span>
                    <p class="muted small">
                        "This image contains a valid digital fingerprint with intact metadata."
                    </p>
                </div>
            </div>

            <div class="actions">
                <button class="btn btn-secondary" on:click=move |_| navigate("/", Default::default())>
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
