//! Experience section: timeline of entries with achievement badges and
//! skill chips.

use leptos::{html, prelude::*};

use super::icons::Glyph;
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

#[component]
pub fn Experience() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    view! {
        <section
            id="experience"
            node_ref=section_ref
            class="relative py-20 md:py-32 overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class=move || format!("text-center mb-16 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-4">
                        "Experience"
                    </h2>
                    <div
                        class="h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto transition-all duration-700"
                        style=move || {
                            if reveal.is_visible() { "width: 6rem" } else { "width: 0" }
                        }
                    ></div>
                </div>

                <div class="relative">
                    // Timeline spine, drawn top-down as the section reveals.
                    <div
                        class="absolute left-1/2 -translate-x-1/2 w-0.5 bg-gradient-to-b from-cyan-400/50 to-transparent hidden lg:block transition-all duration-1000 ease-out"
                        style=move || {
                            if reveal.is_visible() {
                                "height: 100%; opacity: 1"
                            } else {
                                "height: 0; opacity: 0"
                            }
                        }
                    ></div>
                    <div
                        class="absolute left-8 w-0.5 bg-gradient-to-b from-cyan-400/50 to-transparent lg:hidden transition-all duration-1000 ease-out"
                        style=move || {
                            if reveal.is_visible() {
                                "height: 100%; opacity: 1"
                            } else {
                                "height: 0; opacity: 0"
                            }
                        }
                    ></div>

                    <div class="space-y-12">
                        {content::EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! { <TimelineEntry reveal=reveal index=index entry=entry /> }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div
                    class=move || format!("text-center mt-16 {}", reveal.class(RevealEffect::FadeUp))
                    style=stagger(8, 100)
                >
                    <p class="text-gray-400 text-lg">"More experiences coming soon..."</p>
                </div>
            </div>

            <div class="absolute top-1/2 right-0 translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl"></div>
            <div class="absolute bottom-0 left-0 -translate-x-1/2 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
        </section>
    }
}

#[component]
fn TimelineEntry(
    reveal: super::reveal::SectionReveal,
    index: usize,
    entry: &'static content::ExperienceEntry,
) -> impl IntoView {
    let right_aligned = index % 2 == 0;

    view! {
        <div
            class=move || format!(
                "relative {} {}",
                if right_aligned { "lg:pr-8" } else { "lg:pl-8" },
                reveal.class(RevealEffect::FadeUp),
            )
            style=stagger(index + 1, 100)
        >
            <div class="lg:grid lg:grid-cols-2 lg:gap-8">
                <div
                    class=move || format!(
                        "absolute top-8 bg-gray-900 p-3 rounded-full border-4 border-cyan-400 shadow-lg shadow-cyan-400/20 left-4 lg:left-1/2 lg:-translate-x-1/2 {}",
                        reveal.class(RevealEffect::Zoom),
                    )
                    style=stagger(index + 2, 100)
                >
                    <Glyph kind=GlyphKind::Briefcase class="w-5 h-5 text-cyan-400" />
                </div>

                <div class=format!("ml-20 lg:ml-0 {}", if right_aligned { "lg:text-right" } else { "" })>
                    <div class="relative bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 lg:p-8 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 group hover:scale-[1.02]">
                        <div class="relative z-10">
                            <div class=format!(
                                "flex flex-col {}",
                                if right_aligned { "lg:items-end" } else { "" },
                            )>
                                <h3 class="text-2xl font-bold text-white mb-2">{entry.title}</h3>
                                <p class="text-cyan-400 font-medium text-lg mb-1">{entry.role}</p>
                                <div class="flex items-center gap-2 text-gray-400 text-sm">
                                    <Glyph kind=GlyphKind::Calendar class="w-4 h-4" />
                                    <span>{entry.date}</span>
                                </div>
                            </div>

                            <div class=format!(
                                "flex flex-wrap gap-3 mt-4 {}",
                                if right_aligned { "lg:justify-end" } else { "" },
                            )>
                                {entry
                                    .achievements
                                    .iter()
                                    .map(|(icon, text)| {
                                        view! {
                                            <div class="flex items-center gap-2 px-3 py-1.5 bg-cyan-400/10 rounded-full border border-cyan-400/30 hover:scale-110 transition-transform duration-300">
                                                <span class="text-cyan-400">
                                                    <Glyph kind=*icon class="w-4 h-4" />
                                                </span>
                                                <span class="text-sm text-cyan-300">{*text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="mt-6 space-y-3">
                                {entry
                                    .description
                                    .iter()
                                    .map(|body| {
                                        view! {
                                            <p class="text-gray-300 leading-relaxed">{*body}</p>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class=format!(
                                "mt-6 flex flex-wrap gap-2 {}",
                                if right_aligned { "lg:justify-end" } else { "" },
                            )>
                                {entry
                                    .skills
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="px-4 py-2 bg-gray-700/50 text-gray-300 rounded-lg text-sm border border-gray-600 hover:border-cyan-400/50 hover:text-cyan-400 transition-all duration-300">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>

                <div class="hidden lg:block"></div>
            </div>
        </div>
    }
}
