//! Education timeline (zig-zag layout) and the achievements grid.

use leptos::{html, prelude::*};

use super::icons::{FallbackImage, Glyph};
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

#[component]
pub fn Education() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    view! {
        <section
            id="education"
            node_ref=section_ref
            class="relative py-20 md:py-32 overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class=move || format!("text-center mb-16 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-4">
                        "Education"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto"></div>
                </div>

                <div class="relative">
                    <div class="hidden md:block absolute left-1/2 -translate-x-1/2 w-0.5 h-full bg-gradient-to-b from-cyan-400/50 via-blue-400/50 to-green-400/50"></div>
                    <div class="md:hidden absolute left-8 w-0.5 h-full bg-gradient-to-b from-cyan-400/50 via-blue-400/50 to-green-400/50"></div>

                    {content::EDUCATION
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <EducationCard reveal=reveal index=index entry=entry /> }
                        })
                        .collect_view()}
                </div>

                <div
                    class=move || format!("mt-20 {}", reveal.class(RevealEffect::FadeUp))
                    style=stagger(3, 100)
                >
                    <div class="text-center mb-12">
                        <h3 class="text-2xl md:text-3xl font-bold text-white mb-2">
                            "Achievements & Recognition"
                        </h3>
                        <div class="w-20 h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto"></div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {content::ACHIEVEMENTS
                            .iter()
                            .enumerate()
                            .map(|(index, achievement)| {
                                view! {
                                    <div
                                        class=move || reveal.class(RevealEffect::Zoom)
                                        style=stagger(index, 100)
                                    >
                                        <div class="bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 group hover:-translate-y-1">
                                            <div class="flex items-start justify-between mb-4">
                                                <Glyph
                                                    kind=GlyphKind::Award
                                                    class="w-6 h-6 text-cyan-400"
                                                />
                                                <span class="text-xs font-semibold text-cyan-400 bg-cyan-400/10 px-2 py-1 rounded-full">
                                                    {achievement.highlight}
                                                </span>
                                            </div>
                                            <h4 class="text-lg font-semibold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                                                {achievement.title}
                                            </h4>
                                            <p class="text-gray-400 text-sm">
                                                {achievement.description}
                                            </p>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div class="absolute top-20 right-0 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl -z-10"></div>
            <div class="absolute bottom-20 left-0 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}

#[component]
fn EducationCard(
    reveal: super::reveal::SectionReveal,
    index: usize,
    entry: &'static content::EducationEntry,
) -> impl IntoView {
    let left_side = index % 2 == 0;
    let effect = if left_side {
        RevealEffect::FadeRight
    } else {
        RevealEffect::FadeLeft
    };

    // The three entry variants carry their own detail lists; only the
    // non-empty ones render.
    let detail_lists = view! {
        <Show when=move || !entry.coursework.is_empty()>
            <div class="mt-6">
                <h4 class="font-semibold text-gray-400 text-sm mb-3">"Relevant Coursework"</h4>
                <div class="grid grid-cols-2 lg:grid-cols-3 gap-2">
                    {entry
                        .coursework
                        .iter()
                        .map(|course| {
                            view! {
                                <div class="bg-gray-900/50 backdrop-blur-sm rounded-lg px-3 py-2 text-center border border-gray-700 hover:border-cyan-400/50 transition-all duration-300">
                                    <span class="text-gray-300 text-xs">{*course}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>

        <Show when=move || !entry.subjects.is_empty()>
            <div class="mt-4">
                <h4 class="font-semibold text-gray-400 text-sm mb-2">"Core Subjects"</h4>
                <div class="flex flex-wrap gap-2">
                    {entry
                        .subjects
                        .iter()
                        .map(|subject| {
                            view! {
                                <span class="text-xs px-3 py-1 bg-gray-900/50 rounded-full text-gray-300 border border-gray-700">
                                    {*subject}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>

        <Show when=move || !entry.awards.is_empty()>
            <div class="mt-4">
                <h4 class="font-semibold text-gray-400 text-sm mb-2">"Achievements"</h4>
                <div class="space-y-2">
                    {entry
                        .awards
                        .iter()
                        .map(|award| {
                            view! {
                                <div class="flex items-center gap-2">
                                    <Glyph
                                        kind=GlyphKind::Award
                                        class="w-4 h-4 text-yellow-400 flex-shrink-0"
                                    />
                                    <span class="text-gray-300 text-sm">{*award}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </Show>
    };

    view! {
        <div
            class=move || format!("relative mb-16 {}", reveal.class(effect))
            style=stagger(index, 100)
        >
            <div class=format!(
                "flex items-center {}",
                if left_side { "md:flex-row" } else { "md:flex-row-reverse" },
            )>
                <div class=format!(
                    "absolute left-4 md:left-1/2 md:-translate-x-1/2 bg-gray-900 p-3 rounded-full border-4 {} shadow-lg z-10",
                    entry.accent_border,
                )>
                    <Glyph kind=entry.icon class="w-5 h-5 text-cyan-400" />
                </div>

                <div class=format!(
                    "w-full md:w-5/12 ml-20 md:ml-0 {}",
                    if left_side { "md:mr-auto md:pr-8" } else { "md:ml-auto md:pl-8" },
                )>
                    <div class="bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 md:p-8 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 group hover:scale-[1.02]">
                        <div class="mb-4">
                            <div class="flex items-start gap-4 mb-3">
                                <div class="flex-shrink-0">
                                    <div class="w-16 h-16 bg-gray-700/50 rounded-lg overflow-hidden border border-gray-600 flex items-center justify-center">
                                        <FallbackImage
                                            src=entry.logo
                                            alt=entry.institution
                                            class="w-full h-full object-contain p-2"
                                        />
                                    </div>
                                </div>

                                <div class="flex-1">
                                    <h3 class="text-xl md:text-2xl font-bold text-white mb-2 group-hover:text-cyan-400 transition-colors">
                                        {entry.institution}
                                    </h3>
                                    <p class="text-cyan-400 font-medium text-lg">{entry.degree}</p>
                                    <div class="flex items-center gap-2 text-gray-400 text-sm mt-2">
                                        <Glyph kind=GlyphKind::Book class="w-4 h-4" />
                                        <span>{entry.duration}</span>
                                    </div>
                                </div>
                            </div>
                        </div>

                        <div class="inline-block px-4 py-2 bg-gray-900/50 rounded-lg mb-4 border border-gray-700">
                            <p class="text-white font-semibold">
                                {entry.grade_label}
                                ": "
                                <span class=format!(
                                    "ml-2 text-transparent bg-clip-text bg-gradient-to-r {}",
                                    entry.grade_gradient,
                                )>{entry.grade_value}</span>
                            </p>
                        </div>

                        <div class="mb-4">
                            <h4 class="text-sm font-semibold text-gray-400 mb-2">
                                "Key Highlights"
                            </h4>
                            <ul class="space-y-1">
                                {entry
                                    .highlights
                                    .iter()
                                    .map(|highlight| {
                                        view! {
                                            <li class="text-gray-300 text-sm flex items-center gap-2">
                                                <span class="text-cyan-400">"\u{2022}"</span>
                                                <span>{*highlight}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        {detail_lists}
                    </div>
                </div>
            </div>
        </div>
    }
}
