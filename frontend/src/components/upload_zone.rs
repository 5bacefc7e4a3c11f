//! Image drop zone with drag & drop and click-to-browse.
//!
//! Accepts one file at a time. Every accepted file is written to the page's
//! `set_file` signal; clearing only resets the zone itself.

use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::config::ACCEPTED_FILES;
use crate::selection::Selection;
use crate::services::{files_from, read_data_url};

#[component]
pub fn UploadZone(
    /// Receives each newly selected file
    set_file: WriteSignal<Option<File>>,
    /// Advisory filter for the native picker
    #[prop(optional, into)]
    accept: Option<String>,
) -> impl IntoView {
    let selection = create_rw_signal(Selection::<File>::new());
    let (is_drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<leptos::html::Input>();

    let handle_files = move |files: Vec<File>| {
        let Some((file, token)) = selection.try_update(|s| s.accept(files)).flatten() else {
            return;
        };
        log::info!("📎 Selected {} ({} bytes)", file.name(), file.size());
        set_file.set(Some(file.clone()));

        if let Some(token) = token {
            let loaded = read_data_url(&file, move |url| {
                let applied = selection.try_update(|s| s.set_preview(token, url));
                if applied != Some(true) {
                    log::debug!("Discarding preview of a replaced selection");
                }
            });
            if let Err(e) = loaded {
                log::warn!("Could not build preview: {}", e);
            }
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        let files = ev.data_transfer().and_then(|dt| dt.files());
        handle_files(files_from(files));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        handle_files(files_from(input.files()));
        // Allow picking the same file again after clearing.
        input.set_value("");
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let clear = move |_| selection.update(Selection::clear);

    let accept = accept.unwrap_or_else(|| ACCEPTED_FILES.to_string());

    view! {
        <div class="upload-zone-wrapper">
            <div
                class="upload-zone"
                class:drag-over=move || is_drag_over.get()
                class:hidden=move || !selection.with(Selection::is_empty)
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
                on:click=open_picker
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Drop your file here"</p>
                <p class="upload-hint">"or click to select from your device"</p>
                <span class="btn btn-outline">"Select File"</span>
            </div>
            <input
                type="file"
                accept=accept
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            {move || {
                selection
                    .with(|s| s.info().map(|info| (info, s.preview().map(str::to_string))))
                    .map(|(info, preview)| {
                        view! {
                            <div class="glass-panel selected-file">
                                <div class="selected-file-header">
                                    <div class="selected-file-info">
                                        <span class="file-icon">"🖼️"</span>
                                        <div>
                                            <p class="file-name">{info.name.clone()}</p>
                                            <p class="file-size">{info.size_label()}</p>
                                        </div>
                                    </div>
                                    <button class="btn btn-ghost" title="Remove file" on:click=clear>
                                        "✕"
                                    </button>
                                </div>
                                {preview.map(|src| view! {
                                    <div class="selected-file-preview">
                                        <img src=src alt="Preview"/>
                                    </div>
                                })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
