use ldforge_core::{FieldCatalog, Session};
use leptos::prelude::*;
use std::sync::Arc;

mod api;
mod browser;
mod components;

use components::actions::ActionBar;
use components::form::{SchemaForm, TypeSelector};
use components::guide::GuideModal;
use components::preview::PreviewPane;
use components::theme_toggle::ThemeToggle;

#[component]
pub fn App() -> impl IntoView {
    let catalog = Arc::new(FieldCatalog::builtin());
    let default_key = catalog.default_type().key.clone();

    let session = RwSignal::new(Session::new(catalog, &default_key));
    let surface = RwSignal::new(session.with_untracked(|s| s.surface()));
    // Rebuilt on every input; builder and renderer never fail
    let preview = Memo::new(move |_| session.with(|s| s.preview()));
    let show_guide = RwSignal::new(false);

    // Built-in types until the server's catalog arrives; a standalone
    // build without a server keeps them
    wasm_bindgen_futures::spawn_local(async move {
        match api::get_session_config().await.map(|config| config.into_parts()) {
            Ok(Ok((catalog, options))) => {
                let key = session.with_untracked(|s| s.schema_type().to_string());
                log::info!("Loaded {} schema types from the server", catalog.len());
                session.set(Session::new(Arc::new(catalog), &key).with_options(options));
                surface.set(session.with_untracked(|s| s.surface()));
            }
            Ok(Err(errors)) => {
                for error in errors {
                    log::warn!("Server catalog rejected: {}", error);
                }
            }
            Err(e) => log::warn!("Using built-in schema types: {}", e),
        }
    });

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Schema Markup Generator"</h1>
                <ThemeToggle />
            </header>
            <main class="app-main">
                <section class="panel">
                    <TypeSelector session=session surface=surface />
                    <SchemaForm session=session surface=surface />
                </section>
                <section class="panel">
                    <h2>"Generated JSON-LD"</h2>
                    <PreviewPane preview=preview />
                    <ActionBar preview=preview show_guide=show_guide />
                </section>
            </main>
            <GuideModal show=show_guide />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
