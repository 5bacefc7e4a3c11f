//! Embed workflow: image + username in, fingerprinted image out.

use std::rc::Rc;

use leptos::*;
use leptos_meta::Title;
use leptos_router::use_navigate;
use web_sys::File;

use super::driver::use_workflow;
use crate::components::{LoadingSpinner, PageHeader, UploadZone};
use crate::config::{APP_NAME, EMBED_API_URL, EMBED_CADENCE};
use crate::services::{embed_fingerprint, trigger_download, ObjectUrl};
use crate::types::{download_name, AppError, EmbeddedResult};
use crate::workflow::{Phase, Workflow};

#[component]
pub fn EmbedPage() -> impl IntoView {
    let driver = use_workflow::<EmbeddedResult>(EMBED_CADENCE);
    let workflow = driver.state();
    let phase = create_memo(move |_| workflow.with(Workflow::phase));
    let progress = Signal::derive(move || workflow.with(|w| w.progress()));

    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (username, set_username) = create_signal(String::new());
    let preview = create_memo(move |_| {
        selected_file.with(|f| f.as_ref().and_then(|f| ObjectUrl::new(f).ok()).map(Rc::new))
    });

    let start_embedding = move |_| {
        let Some(file) = selected_file.get_untracked() else {
            driver.reject(AppError::Validation("Select an image first.".to_string()));
            return;
        };
        let name = username.get_untracked().trim().to_string();
        if name.is_empty() {
            driver.reject(AppError::Validation(
                "Enter a username to embed in the image.".to_string(),
            ));
            return;
        }

        log::info!("🔏 Embedding fingerprint for '{}' into {}", name, file.name());
        driver.submit(move |signal| embed_fingerprint(file, name, EMBED_API_URL, signal));
    };

    view! {
        <Title text=format!("Embed Fingerprint | {}", APP_NAME)/>
        <PageHeader title="Embed Fingerprint"/>

        <div class="container workflow">
            <div class="workflow-upload" class:hidden=move || phase.get() != Phase::Upload>
                <div class="section-intro">
                    <h2>"Upload Your Image"</h2>
                    <p class="muted">
                        "Select an image to embed with a digital fingerprint for secure authentication."
                    </p>
                </div>

                <UploadZone set_file=set_selected_file/>

                {move || {
                    workflow
                        .with(|w| w.error().map(ToString::to_string))
                        .map(|message| view! { <div class="error-message">{message}</div> })
                }}

                <div class="submit-block" class:hidden=move || selected_file.with(Option::is_none)>
                    <input
                        type="text"
                        class="text-input"
                        placeholder="Enter your username"
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <button class="btn btn-primary btn-large" on:click=start_embedding>
                        "Start Embedding Process"
                    </button>
                </div>
            </div>

            {move || (phase.get() == Phase::Processing).then(|| view! {
                <div class="workflow-processing">
                    <LoadingSpinner message="Embedding digital fingerprint..." progress=progress/>
                    {preview.with(|url| url.as_ref().map(|url| url.as_str().to_string())).map(|src| view! {
                        <img class="processing-preview" src=src alt="Preview"/>
                    })}
                </div>
            })}

            {move || {
                (phase.get() == Phase::Complete)
                    .then(|| workflow.with_untracked(|w| w.result().cloned()))
                    .flatten()
                    .map(|result| {
                        let file_name = selected_file.with_untracked(|f| f.as_ref().map(File::name));
                        view! {
                            <EmbedComplete
                                result=result
                                download_as=download_name(file_name.as_deref())
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn EmbedComplete(result: EmbeddedResult, download_as: String) -> impl IntoView {
    let navigate = use_navigate();
    let owner = result.owner();

    let image_url = result.image_url.clone();
    let download = move |_| {
        log::info!("⬇️ Downloading {} as {}", image_url, download_as);
        if let Err(e) = trigger_download(&image_url, &download_as) {
            log::error!("❌ Download failed: {}", e);
        }
    };

    view! {
        <div class="workflow-complete">
            <div class="success-badge">"✅"</div>
            <h2 class="success-title">"Fingerprint Embedded Successfully!"</h2>
            <p class="muted">"Your image has been secured with a digital fingerprint."</p>

            <div class="glass-panel result-panel">
                <img class="result-image" src=result.image_url alt="Fingerprinted"/>
                {result.metadata.map(|text| view! {
                    <div class="metadata-box">
                        <h3>"Embedded Metadata"</h3>
                        <p class="mono">{text}</p>
                        {owner.map(|owner| view! {
                            <dl class="owner-details">
                                <dt>"Owner"</dt>
                                <dd>{owner.username}</dd>
                                <dt>"Embedded at"</dt>
                                <dd>{owner.embedded_at.format("%d %b %Y, %H:%M:%S").to_string()}</dd>
                            </dl>
                        })}
                    </div>
                })}
            </div>

            <div class="actions">
                <button class="btn btn-primary" on:click=download>
                    "⬇ Download Image"
                </button>
                <button class="btn btn-secondary" on:click=move |_| navigate("/", Default::default())>
                    "Back to Home"
                </button>
            </div>
        </div>
    }
}
