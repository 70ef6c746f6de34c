//! Type selector and the data-driven form

use ldforge_core::{Control, FormSurface, Session};
use leptos::prelude::*;

/// Schema type selector. Choosing a type rebuilds the form.
#[component]
pub fn TypeSelector(session: RwSignal<Session>, surface: RwSignal<FormSurface>) -> impl IntoView {
    // Changes only when the catalog is replaced, not on every input
    let options = Memo::new(move |_| {
        session.with(|s| {
            s.catalog()
                .types()
                .map(|t| (t.key.clone(), t.label.clone()))
                .collect::<Vec<(String, String)>>()
        })
    });

    let on_change = move |ev| {
        let key = event_target_value(&ev);
        let next = session.try_update(|s| s.select(&key));
        if let Some(next) = next {
            log::debug!("Selected schema type {}", next.schema_type);
            surface.set(next);
        }
    };

    view! {
        <label class="field">
            <span class="field-label">"Schema Type"</span>
            <select class="field-input" on:change=on_change>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(key, label)| {
                            let active = key.clone();
                            view! {
                                <option
                                    value=key
                                    selected=move || surface.with(|s| s.schema_type == active)
                                >
                                    {label}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// All controls of the active type.
///
/// Only a type change replaces the controls, so typing never loses focus.
#[component]
pub fn SchemaForm(session: RwSignal<Session>, surface: RwSignal<FormSurface>) -> impl IntoView {
    view! {
        <form class="schema-form" on:submit=|ev| ev.prevent_default()>
            {move || {
                surface
                    .get()
                    .controls
                    .into_iter()
                    .map(|control| view! { <FormControl control=control session=session /> })
                    .collect_view()
            }}
        </form>
    }
}

#[component]
fn FormControl(control: Control, session: RwSignal<Session>) -> impl IntoView {
    let id = control.id.clone();
    let on_input = move |ev| {
        let value = event_target_value(&ev);
        session.update(|s| {
            s.input(&id, &value);
        });
    };

    let input = if control.multiline {
        view! {
            <textarea
                id=control.id.clone()
                class="field-input"
                rows="3"
                placeholder=control.placeholder.clone()
                prop:value=control.value.clone()
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                id=control.id.clone()
                class="field-input"
                type=control.input_type.clone()
                placeholder=control.placeholder.clone()
                prop:value=control.value.clone()
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="field">
            <label class="field-label" for=control.id.clone()>{control.label.clone()}</label>
            {input}
        </div>
    }
}
