//! Copy, download, validate and guide buttons

use gloo_timers::callback::Timeout;
use ldforge_core::actions::{COPY_CONFIRMATION_MS, COPY_FAILURE_NOTICE};
use ldforge_core::{CopyFeedback, Download, PreviewUpdate, VALIDATOR_URL};
use leptos::prelude::*;

use crate::browser;

#[component]
pub fn ActionBar(preview: Memo<PreviewUpdate>, show_guide: RwSignal<bool>) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::new());

    let on_copy = move |_| {
        let text = preview.with_untracked(|p| p.preview.text.clone());
        wasm_bindgen_futures::spawn_local(async move {
            match browser::copy_text(&text).await {
                Ok(()) => {
                    if let Some(ticket) = feedback.try_update(|f| f.confirm()) {
                        // Only the latest copy may end the confirmation
                        Timeout::new(COPY_CONFIRMATION_MS, move || {
                            feedback.update(|f| {
                                f.expire(ticket);
                            });
                        })
                        .forget();
                    }
                }
                Err(e) => {
                    log::error!("Copy failed: {:?}", e);
                    browser::alert(COPY_FAILURE_NOTICE);
                }
            }
        });
    };

    let on_download = move |_| {
        let download = preview.with_untracked(|p| Download::from_preview(&p.preview));
        if let Err(e) = browser::save_file(&download) {
            log::error!("Download failed: {:?}", e);
        }
    };

    let on_validate = move |_| {
        if let Err(e) = browser::open_in_new_tab(VALIDATOR_URL) {
            log::error!("Could not open validator: {:?}", e);
        }
    };

    view! {
        <div class="actions">
            <button
                type="button"
                class="btn"
                class:btn-confirm=move || feedback.with(|f| f.is_confirming())
                on:click=on_copy
            >
                {move || feedback.with(|f| f.label())}
            </button>
            <button type="button" class="btn" on:click=on_download>"Download"</button>
            <button type="button" class="btn" on:click=on_validate>"Validate"</button>
            <button type="button" class="btn btn-secondary" on:click=move |_| show_guide.set(true)>
                "Implementation Guide"
            </button>
        </div>
    }
}
