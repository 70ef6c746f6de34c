use ldforge_core::actions::implementation_guide;
use leptos::prelude::*;

/// Modal with embedding instructions. Closes on the button or a backdrop click.
#[component]
pub fn GuideModal(show: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="modal-backdrop" on:click=move |_| show.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Implementation Guide"</h2>
                        <button type="button" class="modal-close" on:click=move |_| show.set(false)>
                            "×"
                        </button>
                    </div>
                    {implementation_guide()
                        .iter()
                        .map(|section| view! {
                            <section class="guide-section">
                                <h3>{section.title}</h3>
                                <p>{section.body}</p>
                                <pre class="guide-snippet">{section.snippet}</pre>
                            </section>
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    }
}
