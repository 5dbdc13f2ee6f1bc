//! Floating "back to top" button, shown once the hero section has scrolled
//! completely past the top of the viewport.

use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::icons::Glyph;
use crate::content::GlyphKind;

fn scroll_to_top() {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let (visible, set_visible) = signal(false);

    Effect::watch(
        move || scroll_y.get(),
        move |_, _, _| {
            let past_hero = document()
                .get_element_by_id("home")
                .map(|el| el.get_bounding_client_rect().bottom() < 0.0)
                .unwrap_or(false);
            set_visible.set(past_hero);
        },
        false,
    );

    view! {
        <Show when=move || visible.get()>
            <button
                class="fixed bottom-8 right-8 z-40 p-3 rounded-full bg-gradient-to-r from-cyan-500 to-blue-600 text-white shadow-lg hover:shadow-cyan-500/25 cursor-pointer pop-in"
                aria-label="Scroll to top"
                on:click=|_| scroll_to_top()
            >
                <Glyph kind=GlyphKind::ArrowUp class="w-6 h-6" />
            </button>
        </Show>
    }
}
