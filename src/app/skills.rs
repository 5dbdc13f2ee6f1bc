//! Technical skills: one horizontal scroller per category, plus the
//! competitive-programming platform grid with animated rating bars.

use leptos::{html, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use super::icons::{Glyph, TechGlyph};
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

/// Pixels one arrow press moves a category row (about 2.5 cards).
const SCROLL_STEP: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScrollDir {
    Left,
    Right,
}

/// Next scroll offset after one step, clamped to the scrollable range.
fn step_target(current: f64, step: f64, max: f64, dir: ScrollDir) -> f64 {
    match dir {
        ScrollDir::Left => (current - step).max(0.0),
        ScrollDir::Right => (current + step).min(max),
    }
}

fn scroll_row(row: Option<web_sys::HtmlDivElement>, dir: ScrollDir) {
    let Some(row) = row else { return };
    let max = (row.scroll_width() - row.client_width()).max(0) as f64;
    let target = step_target(row.scroll_left() as f64, SCROLL_STEP, max, dir);

    let options = ScrollToOptions::new();
    options.set_left(target);
    options.set_behavior(ScrollBehavior::Smooth);
    row.scroll_to_with_scroll_to_options(&options);
}

#[component]
pub fn Skills() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    view! {
        <section id="skills" node_ref=section_ref class="relative py-10 md:py-16">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class=move || format!("text-center mb-12 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-4">
                        "Technical Skills"
                    </h2>
                    <div
                        class="h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto transition-all duration-700"
                        style=move || {
                            if reveal.is_visible() { "width: 6rem" } else { "width: 0" }
                        }
                    ></div>
                </div>

                <div class="space-y-16">
                    {content::SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! { <CategoryRow reveal=reveal index=index category=category /> }
                        })
                        .collect_view()}
                </div>

                <CpJourney reveal=reveal />
            </div>

            <div class="absolute top-20 right-0 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl -z-10"></div>
            <div class="absolute bottom-20 left-0 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}

#[component]
fn CategoryRow(
    reveal: super::reveal::SectionReveal,
    index: usize,
    category: &'static content::SkillCategory,
) -> impl IntoView {
    let row_ref = NodeRef::<html::Div>::new();

    let arrow = move |dir: ScrollDir| {
        let (kind, side, label) = match dir {
            ScrollDir::Left => (GlyphKind::ChevronLeft, "-left-5", "Scroll left"),
            ScrollDir::Right => (GlyphKind::ChevronRight, "-right-5", "Scroll right"),
        };
        view! {
            <button
                class=format!(
                    "absolute {side} top-1/2 -translate-y-1/2 z-20 w-12 h-12 rounded-full flex items-center justify-center transition-all duration-300 opacity-0 group-hover:opacity-100",
                )
                aria-label=label
                on:click=move |_| scroll_row(row_ref.get_untracked(), dir)
            >
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-r {} rounded-full blur-md opacity-60",
                    category.gradient,
                )></div>
                <div class="relative w-full h-full bg-gray-900/80 backdrop-blur-sm rounded-full flex items-center justify-center border border-gray-700 hover:border-cyan-400/50">
                    <Glyph kind=kind class="w-6 h-6 text-white" />
                </div>
            </button>
        }
    };

    view! {
        <div
            class=move || reveal.class(RevealEffect::FadeUp)
            style=stagger(index, 100)
        >
            <h3 class=format!(
                "text-xl md:text-2xl font-bold mb-8 text-transparent bg-clip-text bg-gradient-to-r {}",
                category.gradient,
            )>{category.title}</h3>

            <div class="relative group">
                {arrow(ScrollDir::Left)}
                {arrow(ScrollDir::Right)}

                <div
                    node_ref=row_ref
                    class="overflow-x-auto overflow-y-visible scrollbar-hide scroll-smooth snap-x snap-mandatory"
                >
                    <div class="flex gap-4 pb-6 pt-6 px-8 md:px-12">
                        {category
                            .skills
                            .iter()
                            .enumerate()
                            .map(|(skill_index, skill)| {
                                view! {
                                    <div
                                        class=move || format!(
                                            "flex-shrink-0 snap-start {}",
                                            reveal.class(RevealEffect::Zoom),
                                        )
                                        style=stagger(skill_index, 50)
                                    >
                                        <div class="relative bg-gray-800/50 backdrop-blur-sm rounded-xl p-4 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 w-32 h-32 flex flex-col items-center justify-center gap-3 hover:shadow-xl hover:shadow-cyan-500/20 hover:-translate-y-2 cursor-pointer">
                                            <span class="text-4xl relative z-10">
                                                <TechGlyph tech=skill.tech size="text-4xl" />
                                            </span>
                                            <span class="text-xs font-medium text-gray-300 text-center hover:text-white transition-colors relative z-10">
                                                {skill.name}
                                            </span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="absolute left-0 top-0 bottom-0 w-16 bg-gradient-to-r from-gray-950 to-transparent pointer-events-none z-10"></div>
                <div class="absolute right-0 top-0 bottom-0 w-16 bg-gradient-to-l from-gray-950 to-transparent pointer-events-none z-10"></div>
            </div>
        </div>
    }
}

#[component]
fn CpJourney(reveal: super::reveal::SectionReveal) -> impl IntoView {
    view! {
        <div
            class=move || format!("mt-20 {}", reveal.class(RevealEffect::FadeUp))
            style=stagger(5, 100)
        >
            <h3 class="text-2xl md:text-3xl font-bold text-center mb-12 text-white">
                "Competitive Programming Journey"
            </h3>

            // Keyed on the reveal generation so the rating bars re-run their
            // fill animation on every re-entry, not just the first.
            {move || {
                reveal.generation();
                view! {
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {content::CP_PLATFORMS
                            .iter()
                            .enumerate()
                            .map(|(index, platform)| {
                                view! {
                                    <PlatformCard
                                        reveal=reveal
                                        index=index
                                        platform=platform
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                }
            }}
        </div>
    }
}

#[component]
fn PlatformCard(
    reveal: super::reveal::SectionReveal,
    index: usize,
    platform: &'static content::CpPlatform,
) -> impl IntoView {
    view! {
        <div
            class=move || reveal.class(RevealEffect::FadeUp)
            style=stagger(index, 100)
        >
            <a
                href=platform.link
                target="_blank"
                rel="noopener noreferrer"
                class="relative group block cursor-pointer hover:-translate-y-2 transition-transform duration-300"
                aria-label=format!("View profile on {}", platform.platform)
            >
                <div class=format!(
                    "absolute inset-0 bg-gradient-to-br {} rounded-2xl blur-xl opacity-50 group-hover:opacity-100 transition-opacity duration-300",
                    platform.glow,
                )></div>

                <div class="relative bg-gray-800/60 backdrop-blur-sm rounded-2xl p-6 border border-gray-700/50 group-hover:border-gray-600 transition-all duration-300 h-full">
                    <div class=format!("{} mb-4 flex justify-center", platform.icon_color)>
                        <Glyph kind=platform.icon class="w-12 h-12" />
                    </div>

                    <h4 class=format!(
                        "text-xl font-bold mb-6 text-center text-transparent bg-clip-text bg-gradient-to-r {}",
                        platform.gradient,
                    )>{platform.platform}</h4>

                    <div class="text-center mb-4">
                        <p class="text-4xl font-bold text-white mb-1">{platform.rating}</p>
                        <p class="text-sm text-gray-400 uppercase tracking-wider">"Rating"</p>
                    </div>

                    <div class="mb-4">
                        <div class="h-2 bg-gray-700 rounded-full overflow-hidden">
                            <div
                                class=format!(
                                    "h-full bg-gradient-to-r {} transition-all duration-1000 ease-out",
                                    platform.gradient,
                                )
                                style=move || {
                                    let width = if reveal.is_visible() {
                                        platform.progress
                                    } else {
                                        0
                                    };
                                    format!("width: {width}%")
                                }
                            ></div>
                        </div>
                    </div>

                    <div class="flex justify-between items-center text-sm">
                        <span class="text-gray-300">{platform.problems}</span>
                        <span class=format!(
                            "font-medium text-transparent bg-clip-text bg-gradient-to-r {}",
                            platform.gradient,
                        )>{platform.standing}</span>
                    </div>
                </div>
            </a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_right_advances_by_exactly_one_step() {
        assert_eq!(
            step_target(0.0, SCROLL_STEP, 2000.0, ScrollDir::Right),
            320.0
        );
        assert_eq!(
            step_target(320.0, SCROLL_STEP, 2000.0, ScrollDir::Right),
            640.0
        );
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        // already near the end: clamp to max, never past it
        assert_eq!(
            step_target(1900.0, SCROLL_STEP, 2000.0, ScrollDir::Right),
            2000.0
        );
        assert_eq!(
            step_target(2000.0, SCROLL_STEP, 2000.0, ScrollDir::Right),
            2000.0
        );
        // and at the start going left
        assert_eq!(step_target(100.0, SCROLL_STEP, 2000.0, ScrollDir::Left), 0.0);
        assert_eq!(step_target(0.0, SCROLL_STEP, 2000.0, ScrollDir::Left), 0.0);
    }

    #[test]
    fn unscrollable_row_stays_put() {
        assert_eq!(step_target(0.0, SCROLL_STEP, 0.0, ScrollDir::Right), 0.0);
    }
}
