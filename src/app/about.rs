//! About section: introduction, quote, call-to-action row, portrait, and
//! the stats grid.

use leptos::{html, prelude::*};

use super::icons::{FallbackImage, Glyph};
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    let paragraph = move |index: usize, body: AnyView| {
        view! {
            <p
                class=move || reveal.class(RevealEffect::FadeUp)
                style=stagger(index, 100)
            >
                {body}
            </p>
        }
    };

    view! {
        <section id="about" node_ref=section_ref class="relative py-10 md:py-16 overflow-hidden">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class=move || format!("text-center mb-12 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500 mb-4">
                        "About Me"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-blue-500 mx-auto"></div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16">
                    <div class="space-y-6">
                        <h3
                            class=move || format!(
                                "text-2xl md:text-3xl font-bold text-white {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(1, 100)
                        >
                            "Full Stack Developer &"
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-blue-500">
                                " Problem Solver"
                            </span>
                        </h3>

                        <div class="space-y-4 text-gray-300 leading-relaxed">
                            {paragraph(
                                1,
                                view! {
                                    "I'm a Computer Science student at "
                                    <span class="text-cyan-400 font-medium">
                                        "Indian Institute of Information Technology Kota"
                                    </span>
                                    ", passionate about creating innovative web solutions and solving complex problems through code."
                                }
                                    .into_any(),
                            )}
                            {paragraph(
                                2,
                                view! {
                                    "With expertise in the "
                                    <span class="text-cyan-400 font-medium">"MERN stack"</span>
                                    " and a strong foundation in data structures and algorithms, I strive to build applications that are both technically robust and user-friendly."
                                }
                                    .into_any(),
                            )}
                            {paragraph(
                                3,
                                view! {
                                    "My passion for competitive programming has helped me develop strong problem-solving skills, placing me in the "
                                    <span class="text-cyan-400 font-medium">
                                        "top 6.47% globally on LeetCode"
                                    </span>
                                    "."
                                }
                                    .into_any(),
                            )}
                            {paragraph(
                                4,
                                view! {
                                    "When I'm not coding, I'm exploring new technologies, contributing to open source projects, and looking for ways to enhance my technical expertise to deliver better solutions."
                                }
                                    .into_any(),
                            )}
                        </div>

                        <div
                            class=move || format!(
                                "relative mt-8 p-6 bg-gray-800/30 backdrop-blur-sm rounded-lg border border-gray-700/50 {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(5, 100)
                        >
                            <span class="absolute top-4 left-4 text-cyan-400/20 text-3xl">
                                "\u{201c}"
                            </span>
                            <p class="text-gray-300 italic pl-8">
                                "I believe in writing clean, efficient code that not only solves problems but creates delightful user experiences."
                            </p>
                        </div>

                        <div
                            class=move || format!(
                                "flex flex-wrap gap-4 pt-4 {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(6, 100)
                        >
                            <a
                                href=content::RESUME_HREF
                                download=""
                                class="inline-flex items-center gap-2 px-6 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-medium shadow-lg hover:shadow-cyan-500/25 hover:scale-105 transition-all duration-300"
                            >
                                <Glyph kind=GlyphKind::Download class="w-[18px] h-[18px]" />
                                " Download Resume"
                            </a>

                            <div class="flex gap-3">
                                {content::PLATFORM_LINKS
                                    .iter()
                                    .map(|platform| {
                                        view! {
                                            <a
                                                href=platform.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="p-3 bg-gray-800/50 backdrop-blur-sm rounded-lg text-gray-400 hover:text-cyan-400 transition-all duration-300 border border-gray-700 hover:border-cyan-400/50 hover:scale-110"
                                                aria-label=platform.label
                                            >
                                                <Glyph kind=platform.icon class="w-[26px] h-[26px]" />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>

                    <div class="space-y-6">
                        <div class="hidden lg:block mb-8">
                            <div
                                class=move || format!(
                                    "relative w-64 h-64 mx-auto {}",
                                    reveal.class(RevealEffect::Zoom),
                                )
                            >
                                <div class="absolute inset-0 bg-gradient-to-r from-cyan-400 to-blue-500 rounded-full blur-xl opacity-30 ring-rotate"></div>
                                <FallbackImage
                                    src=content::PORTRAIT_ALT_SRC
                                    alt="Divyansh Agrawal"
                                    class="relative w-full h-full rounded-full object-cover border-4 border-gray-800"
                                />
                            </div>
                        </div>

                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {content::ABOUT_STATS
                                .iter()
                                .enumerate()
                                .map(|(index, stat)| {
                                    view! {
                                        <div
                                            class=move || format!(
                                                "relative group h-full {}",
                                                reveal.class(RevealEffect::FadeUp),
                                            )
                                            style=stagger(index, 100)
                                        >
                                            <div class="relative bg-gray-800/50 backdrop-blur-sm rounded-xl p-6 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 overflow-hidden h-full min-h-[200px] flex flex-col hover:scale-105">
                                                <div class=format!(
                                                    "text-transparent bg-clip-text bg-gradient-to-r {} mb-3",
                                                    stat.gradient,
                                                )>
                                                    <Glyph kind=stat.icon class="w-10 h-10 text-cyan-400" />
                                                </div>
                                                <h3 class="text-3xl font-bold text-white mb-1">
                                                    {stat.count}
                                                </h3>
                                                <p class=format!(
                                                    "text-lg font-semibold text-transparent bg-clip-text bg-gradient-to-r {} mb-2",
                                                    stat.gradient,
                                                )>{stat.label}</p>
                                                <p class="text-gray-400 text-sm flex-grow">
                                                    {stat.description}
                                                </p>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-cyan-500/5 rounded-full blur-3xl -z-10"></div>
        </section>
    }
}
