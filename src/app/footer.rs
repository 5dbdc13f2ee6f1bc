//! Footer: blurb, quick links, contact info, and the copyright line.

use leptos::{html, prelude::*};

use super::icons::Glyph;
use super::navbar::scroll_to_section;
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

/// Stamped by build.rs.
const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    let footer_ref = NodeRef::<html::Footer>::new();
    let reveal = use_section_reveal(footer_ref);

    let socials: [(GlyphKind, &'static str, &'static str); 3] = [
        (
            GlyphKind::Linkedin,
            "https://www.linkedin.com/in/DivyanshAgrawal",
            "LinkedIn",
        ),
        (GlyphKind::Github, content::GITHUB_URL, "GitHub"),
        (
            GlyphKind::Mail,
            "mailto:divyansh1001agrawal@gmail.com",
            "Email",
        ),
    ];

    view! {
        <footer node_ref=footer_ref class="bg-slate-950 py-12 border-t border-gray-800">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-8">
                    <div
                        class=move || reveal.class(RevealEffect::FadeUp)
                        style=stagger(1, 100)
                    >
                        <h2 class="text-2xl font-bold text-white mb-2">"Divyansh's Portfolio"</h2>
                        <h3 class="text-lg text-indigo-400 mb-3">
                            "Full Stack Developer & Problem Solver"
                        </h3>
                        <p class="text-gray-300 mb-4">
                            "Thank you for visiting my portfolio website. Connect with me over socials."
                        </p>
                    </div>

                    <div
                        class=move || reveal.class(RevealEffect::FadeUp)
                        style=stagger(2, 100)
                    >
                        <h2 class="text-2xl font-bold text-white mb-4">"Quick Links"</h2>
                        <div class="space-y-2">
                            {content::SECTIONS
                                .iter()
                                .filter(|section| section.id != "contact")
                                .map(|section| {
                                    view! {
                                        <div>
                                            <a
                                                href=format!("#{}", section.id)
                                                class="text-gray-300 hover:text-white flex items-center gap-2"
                                                on:click=move |ev| {
                                                    ev.prevent_default();
                                                    scroll_to_section(section.id);
                                                }
                                            >
                                                <span class="text-indigo-500">"\u{276f}"</span>
                                                " "
                                                {section.label}
                                            </a>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div
                        class=move || reveal.class(RevealEffect::FadeUp)
                        style=stagger(3, 100)
                    >
                        <h2 class="text-2xl font-bold text-white mb-4">"Contact Info"</h2>
                        <div class="space-y-3 mb-4">
                            <div class="flex items-center space-x-2">
                                <Glyph kind=GlyphKind::Mail class="w-[18px] h-[18px] text-indigo-500" />
                                <a
                                    href="mailto:divyansh1001agrawal@gmail.com"
                                    class="text-gray-300 hover:text-white"
                                >
                                    {content::EMAIL}
                                </a>
                            </div>
                            <div class="flex items-center space-x-2 text-gray-300">
                                <Glyph kind=GlyphKind::MapPin class="w-[18px] h-[18px] text-indigo-500" />
                                <span>"Indore, India-452001"</span>
                            </div>
                        </div>

                        <div class="flex space-x-2 mt-6">
                            {socials
                                .into_iter()
                                .map(|(icon, href, label)| {
                                    view! {
                                        <a
                                            href=href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="bg-white rounded-full p-2 flex items-center justify-center hover:scale-110 transition-transform duration-300"
                                            aria-label=label
                                        >
                                            <Glyph kind=icon class="w-[18px] h-[18px] text-gray-900" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                            <a
                                href="https://instagram.com/yourusername"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="bg-white rounded-full p-2 flex items-center justify-center hover:scale-110 transition-transform duration-300"
                                aria-label="Instagram"
                            >
                                <Glyph kind=GlyphKind::Instagram class="w-[18px] h-[18px] text-gray-900" />
                            </a>
                        </div>
                    </div>
                </div>

                <div class="border-t border-gray-800 pt-8 text-center">
                    <p class="text-gray-400 flex justify-center items-center">
                        "Designed with "
                        <Glyph kind=GlyphKind::Heart class="w-4 h-4 text-red-500 mx-2" />
                        " by Divyansh Agrawal \u{00b7} \u{00a9} "
                        {BUILD_YEAR}
                    </p>
                </div>
            </div>
        </footer>
    }
}
