//! Fixed navigation bar: scroll-offset styling, active-section tracking,
//! smooth scrolling to anchors, and the mobile drawer menu.

use leptos::{html, prelude::*};
use leptos_use::use_window_scroll;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::icons::{FallbackImage, Glyph};
use crate::content::{self, GlyphKind};

pub const NAVBAR_ID: &str = "navbar";

/// Vertical offset past which the bar condenses.
const SCROLLED_AT: f64 = 50.0;

/// Gap kept between the navbar's bottom edge and a scrolled-to section.
const SCROLL_GAP: f64 = 16.0;

/// Index of the section considered active: the last one in document order
/// whose top, adjusted for the navbar and gap, has been reached.
fn active_section(tops: &[f64], scroll_y: f64, navbar_height: f64) -> usize {
    let mut active = 0;
    for (index, top) in tops.iter().enumerate() {
        if top - navbar_height - SCROLL_GAP <= scroll_y {
            active = index;
        }
    }
    active
}

/// Absolute document offset of each section top, in `content::SECTIONS`
/// order. Sections missing from the DOM never activate.
fn section_tops() -> Vec<f64> {
    let doc = document();
    let scroll_y = window().scroll_y().unwrap_or(0.0);
    content::SECTIONS
        .iter()
        .map(|section| {
            doc.get_element_by_id(section.id)
                .map(|el| el.get_bounding_client_rect().top() + scroll_y)
                .unwrap_or(f64::MAX)
        })
        .collect()
}

fn measured_navbar_height() -> f64 {
    document()
        .get_element_by_id(NAVBAR_ID)
        .map(|el| el.get_bounding_client_rect().height())
        .unwrap_or(0.0)
}

/// Smooth-scroll so `id` lands just below the navbar (home goes to the very
/// top), then swap the URL fragment in place without reloading.
pub(super) fn scroll_to_section(id: &str) {
    let doc = document();
    let Some(el) = doc.get_element_by_id(id) else {
        return;
    };

    let top = if id == "home" {
        0.0
    } else {
        let scroll_y = window().scroll_y().unwrap_or(0.0);
        let absolute_top = el.get_bounding_client_rect().top() + scroll_y;
        (absolute_top - measured_navbar_height() - SCROLL_GAP).max(0.0)
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);

    if let Ok(history) = window().history() {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{id}")));
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav_ref = NodeRef::<html::Nav>::new();
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_AT);
    let (active, set_active) = signal(0usize);
    let (menu_open, set_menu_open) = signal(false);

    // Recompute the active section on every scroll. Runs client-side only.
    Effect::watch(
        move || scroll_y.get(),
        move |y, _, _| {
            let height = nav_ref
                .get_untracked()
                .map(|el| el.offset_height() as f64)
                .unwrap_or(0.0);
            set_active.set(active_section(&section_tops(), *y, height));
        },
        false,
    );

    let nav_item = move |index: usize, item: &'static content::NavSection| {
        view! {
            <a
                href=format!("#{}", item.id)
                class=move || {
                    let tone = if active.get() == index {
                        "text-cyan-400"
                    } else {
                        "text-gray-300 hover:text-white"
                    };
                    format!(
                        "text-sm lg:text-base font-medium cursor-pointer transition-all duration-300 relative py-2 {tone}",
                    )
                }
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section(item.id);
                }
            >
                {item.label}
                <Show when=move || active.get() == index>
                    <span class="absolute -bottom-0.5 left-0 right-0 h-0.5 bg-gradient-to-r from-cyan-400 to-blue-400"></span>
                </Show>
            </a>
        }
    };

    view! {
        <nav
            id=NAVBAR_ID
            node_ref=nav_ref
            class=move || {
                let skin = if scrolled.get() {
                    "bg-slate-800/90 backdrop-blur-xl shadow-lg shadow-cyan-500/10 py-3 border-b border-slate-700/50"
                } else {
                    "bg-slate-800/50 backdrop-blur-md py-5"
                };
                format!(
                    "fixed top-0 left-0 right-0 w-full z-50 transition-all duration-300 {skin}",
                )
            }
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="cursor-pointer flex items-center space-x-3 group"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_section("home");
                        }
                    >
                        <FallbackImage
                            src=content::LOGO_SRC
                            alt="Divyansh Agrawal Logo"
                            class="h-10 w-10 sm:h-12 sm:w-12 rounded-full object-cover ring-2 ring-cyan-400/20 group-hover:ring-cyan-400/40 transition-all duration-300"
                        />
                        <h1 class="hidden sm:block text-lg md:text-xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                            {content::NAME}
                        </h1>
                    </a>

                    <div class="hidden md:flex items-center space-x-4 lg:space-x-6 xl:space-x-8">
                        {content::SECTIONS
                            .iter()
                            .enumerate()
                            .map(|(index, item)| nav_item(index, item))
                            .collect_view()}
                    </div>

                    <div class="md:hidden">
                        <button
                            class="text-white p-2 rounded-lg hover:bg-white/10 transition-colors"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-label=move || {
                                if menu_open.get() { "Close menu" } else { "Open menu" }
                            }
                        >
                            {move || {
                                let kind = if menu_open.get() { GlyphKind::X } else { GlyphKind::Menu };
                                view! { <Glyph kind=kind class="w-6 h-6" /> }
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>

        <Show when=move || menu_open.get()>
            <div
                class="fixed inset-0 bg-black/60 z-40 md:hidden"
                on:click=move |_| set_menu_open.set(false)
            ></div>

            <div class="fixed right-0 top-0 h-full w-72 bg-slate-800/95 backdrop-blur-lg z-50 md:hidden shadow-2xl drawer-slide-in">
                <div class="flex flex-col h-full">
                    <div class="flex justify-between items-center p-6 border-b border-slate-700/50">
                        <h2 class="text-xl font-semibold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-400">
                            "Menu"
                        </h2>
                        <button
                            class="text-white p-2 rounded-lg hover:bg-white/10 transition-colors"
                            on:click=move |_| set_menu_open.set(false)
                        >
                            <Glyph kind=GlyphKind::X class="w-6 h-6" />
                        </button>
                    </div>

                    <nav class="flex-1 px-6 py-4">
                        {content::SECTIONS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.id)
                                        class="block text-gray-300 hover:text-cyan-400 py-3 text-lg font-medium cursor-pointer transition-all duration-300 hover:translate-x-2"
                                        on:click=move |ev| {
                                            ev.prevent_default();
                                            set_menu_open.set(false);
                                            scroll_to_section(item.id);
                                        }
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_last_section_scrolled_past() {
        let tops = [0.0, 800.0, 1600.0];
        assert_eq!(active_section(&tops, 850.0, 80.0), 1);
        assert_eq!(active_section(&tops, 10.0, 80.0), 0);
    }

    #[test]
    fn bottom_of_page_activates_the_last_section() {
        let tops = [0.0, 800.0, 1600.0];
        assert_eq!(active_section(&tops, 5000.0, 80.0), 2);
    }

    #[test]
    fn section_just_out_of_reach_stays_inactive() {
        let tops = [0.0, 800.0];
        // 800 - 80 - 16 = 704; a scroll of 703 is still on the first section.
        assert_eq!(active_section(&tops, 703.0, 80.0), 0);
        assert_eq!(active_section(&tops, 704.0, 80.0), 1);
    }

    #[test]
    fn missing_sections_never_activate() {
        let tops = [0.0, f64::MAX, 1600.0];
        assert_eq!(active_section(&tops, 5000.0, 80.0), 2);
    }
}
