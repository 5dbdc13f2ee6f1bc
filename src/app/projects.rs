//! Featured projects: a card grid where each card runs its own reveal, so
//! cards animate in as they individually reach the viewport.

use leptos::{html, prelude::*};

use super::icons::{Glyph, TechChip};
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    view! {
        <section id="projects" node_ref=section_ref class="relative py-20 md:py-32">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-20 2xl:px-32">
                <div class=move || format!("text-center mb-16 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-4">
                        "Featured Projects"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto mb-4"></div>
                    <p class="text-gray-400 max-w-2xl mx-auto">
                        "Showcasing my journey through full-stack development, from real-time \
                         applications to AI-powered solutions"
                    </p>
                </div>

                <div class="grid grid-cols-1 xl:grid-cols-2 gap-8 max-w-7xl mx-auto">
                    {content::PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! { <ProjectCard index=index project=project /> }
                        })
                        .collect_view()}
                </div>

                <div
                    class=move || format!("text-center mt-16 {}", reveal.class(RevealEffect::FadeUp))
                    style=stagger(3, 100)
                >
                    <a
                        href=content::GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-8 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-medium shadow-lg hover:shadow-cyan-500/25 transition-all duration-300 hover:scale-105"
                    >
                        <Glyph kind=GlyphKind::Github class="w-5 h-5" />
                        "See More on GitHub"
                    </a>
                </div>
            </div>

            <div class="absolute top-20 right-0 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl -z-10"></div>
            <div class="absolute bottom-20 left-0 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}

/// One project card. Owns its own reveal so the grid trickles in card by
/// card instead of all at once with the section.
#[component]
fn ProjectCard(index: usize, project: &'static content::Project) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let reveal = use_section_reveal(card_ref);
    let (hovered, set_hovered) = signal(false);
    let (image_failed, set_image_failed) = signal(false);

    view! {
        <div
            node_ref=card_ref
            class=move || format!("relative group {}", reveal.class(RevealEffect::FadeUp))
            style=stagger(index % 2, 100)
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <div class="relative bg-gray-800/50 backdrop-blur-sm rounded-xl overflow-hidden border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 h-full">
                <div class="relative h-48 md:h-56 overflow-hidden">
                    <Show
                        when=move || !image_failed.get()
                        fallback=move || {
                            view! {
                                <div class="w-full h-full flex items-center justify-center bg-gray-900/60">
                                    <span class="text-gray-500 text-xs">"Logo"</span>
                                </div>
                            }
                        }
                    >
                        <img
                            src=project.image
                            alt=project.title
                            class=move || format!(
                                "w-full h-full object-cover transition-transform duration-500 {}",
                                if hovered.get() { "scale-105" } else { "scale-100" },
                            )
                            on:error=move |_| set_image_failed.set(true)
                        />
                    </Show>

                    <div
                        class=move || format!(
                            "absolute inset-0 bg-gradient-to-t from-gray-900 via-gray-900/70 to-transparent flex items-end justify-start p-6 transition-opacity duration-300 {}",
                            if hovered.get() { "opacity-100" } else { "opacity-0" },
                        )
                    >
                        <div class="flex gap-3">
                            <a
                                href=project.github
                                target="_blank"
                                rel="noopener noreferrer"
                                title="View Code"
                                class="bg-gray-900/80 backdrop-blur-sm text-white p-3 rounded-lg hover:bg-gray-800 transition-colors border border-gray-700 hover:border-cyan-400/50"
                            >
                                <Glyph kind=GlyphKind::Github class="w-5 h-5" />
                            </a>
                            {project
                                .demo
                                .map(|demo| {
                                    view! {
                                        <a
                                            href=demo
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            title="Live Demo"
                                            class="bg-gradient-to-r from-cyan-500 to-blue-600 text-white p-3 rounded-lg hover:shadow-lg hover:shadow-cyan-500/25 transition-all duration-300"
                                        >
                                            <Glyph kind=GlyphKind::ExternalLink class="w-5 h-5" />
                                        </a>
                                    }
                                })}
                        </div>
                    </div>
                </div>

                <div class="p-6">
                    <div class="flex items-start justify-between mb-3">
                        <h3 class="text-xl md:text-2xl font-bold text-white group-hover:text-cyan-400 transition-colors duration-300">
                            {project.title}
                        </h3>
                        {project
                            .demo
                            .map(|_| {
                                view! {
                                    <span class="flex items-center gap-1 text-xs text-green-400 bg-green-400/10 px-2 py-1 rounded-full">
                                        <span class="w-1.5 h-1.5 bg-green-400 rounded-full animate-pulse"></span>
                                        "Live"
                                    </span>
                                }
                            })}
                    </div>

                    <p class="text-gray-300 mb-6 line-clamp-2 text-sm md:text-base">
                        {project.description}
                    </p>

                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .enumerate()
                            .map(|(tech_index, tech)| {
                                view! {
                                    <span
                                        class=move || reveal.class(RevealEffect::Zoom)
                                        style=stagger(tech_index, 50)
                                    >
                                        <TechChip tech=*tech />
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="absolute inset-0 bg-gradient-to-r from-cyan-400 to-blue-500 opacity-0 group-hover:opacity-10 transition-opacity duration-300 rounded-xl pointer-events-none"></div>
            </div>
        </div>
    }
}
