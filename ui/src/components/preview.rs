use ldforge_core::PreviewUpdate;
use leptos::prelude::*;

/// Highlighted JSON-LD output with any fallback notices
#[component]
pub fn PreviewPane(preview: Memo<PreviewUpdate>) -> impl IntoView {
    let warnings = move || preview.with(|p| p.warnings.clone());

    view! {
        <section class="preview">
            <pre class="preview-code" inner_html=move || preview.with(|p| p.preview.html.clone()) />
            <Show when=move || preview.with(|p| !p.warnings.is_empty())>
                <ul class="preview-warnings">
                    {move || {
                        warnings()
                            .into_iter()
                            .map(|w| view! {
                                <li>
                                    <strong>{w.field}</strong>
                                    ": "
                                    {w.message}
                                    " (default used)"
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
