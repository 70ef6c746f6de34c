use ldforge_core::theme::{resolve_theme, toggle_theme};
use ldforge_core::Theme;
use leptos::prelude::*;

use crate::browser::{self, LocalStorage};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(resolve_theme(&LocalStorage, browser::prefers_dark()));

    Effect::new(move || {
        browser::apply_theme(theme.get().as_str());
    });

    let on_toggle = move |_| {
        let next = toggle_theme(&mut LocalStorage, theme.get_untracked());
        log::debug!("Theme switched to {}", next);
        theme.set(next);
    };

    view! {
        <button type="button" class="theme-toggle" on:click=on_toggle>
            {move || match theme.get() {
                Theme::Light => "Dark mode",
                Theme::Dark => "Light mode",
            }}
        </button>
    }
}
