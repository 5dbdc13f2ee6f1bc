//! Hero/home section: greeting, typewriter headline, social row, call-to-
//! action buttons, and the portrait with its rotating ring.

use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn, use_mouse, UseMouseReturn};

use super::icons::{FallbackImage, Glyph};
use super::navbar::scroll_to_section;
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use super::typewriter::{self, Typewriter};
use crate::content;

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    let headline = RwSignal::new(Typewriter::new(content::HERO_PHRASES));
    let _ = use_interval_fn(
        move || headline.update(|tw| tw.tick()),
        typewriter::TICK_MILLIS,
    );

    // Restart the headline from the first phrase every time the hero
    // scrolls back into view.
    Effect::watch(
        move || reveal.generation(),
        move |_, _, _| headline.update(|tw| tw.reset()),
        false,
    );

    let UseMouseReturn { x, y, .. } = use_mouse();
    let parallax = move |divisor: f64| {
        if reveal.is_visible() {
            format!(
                "transform: translate({}px, {}px)",
                x.get() / divisor,
                y.get() / divisor,
            )
        } else {
            String::new()
        }
    };

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="relative w-full min-h-screen flex items-center py-20 md:py-28 lg:py-0 overflow-hidden"
        >
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32 relative z-10">
                <div class="flex flex-col md:flex-row items-center justify-between gap-8 lg:gap-16">
                    <div class="flex-1 text-center md:text-left w-full md:w-auto">
                        <div
                            class=move || format!(
                                "text-cyan-400 text-xl sm:text-2xl mb-2 font-light {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                        >
                            "Hey there \u{1f44b},"
                        </div>

                        <h1
                            class=move || format!(
                                "text-3xl sm:text-4xl md:text-5xl font-bold mb-8 {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(1, 60)
                        >
                            <span class="text-white">"I'm "</span>
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 via-blue-500 to-purple-600 inline-block md:whitespace-nowrap leading-tight">
                                {content::NAME}
                            </span>
                        </h1>

                        <div
                            class=move || format!(
                                "text-xl sm:text-2xl md:text-3xl mb-8 text-gray-300 min-h-[3rem] font-mono {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(2, 60)
                        >
                            <span class="text-cyan-400">
                                {move || headline.with(|tw| tw.rendered())}
                            </span>
                            <span class="text-cyan-400 caret-blink">"|"</span>
                        </div>

                        <div
                            class=move || format!(
                                "flex gap-4 justify-center md:justify-start mb-8 {}",
                                reveal.class(RevealEffect::Zoom),
                            )
                            style=stagger(3, 60)
                        >
                            {content::HERO_SOCIALS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="p-3 bg-gray-800/50 backdrop-blur-sm rounded-lg text-gray-400 hover:text-cyan-400 transition-all duration-300 border border-gray-700 hover:border-cyan-400/50 hover:scale-110"
                                            aria-label=social.label
                                        >
                                            <Glyph kind=social.icon class="w-[26px] h-[26px]" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div
                            class=move || format!(
                                "flex flex-col sm:flex-row gap-4 justify-center md:justify-start items-center {}",
                                reveal.class(RevealEffect::FadeUp),
                            )
                            style=stagger(4, 60)
                        >
                            <button
                                class="px-8 py-3 bg-gradient-to-r from-cyan-500 to-blue-600 text-white rounded-lg font-semibold transition-all duration-300 hover:shadow-lg hover:shadow-cyan-500/25 hover:scale-105"
                                on:click=|_| scroll_to_section("contact")
                            >
                                "Contact Me"
                            </button>

                            <a
                                href="/resume.pdf"
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-8 py-3 bg-transparent text-cyan-400 rounded-lg font-semibold transition-all duration-300 border-2 border-cyan-400 hover:bg-cyan-400/10 hover:shadow-lg hover:shadow-cyan-400/25 hover:scale-105"
                            >
                                "Resume"
                            </a>
                        </div>
                    </div>

                    <div
                        class=move || format!(
                            "flex-1 flex justify-center mt-8 md:mt-0 {}",
                            reveal.class(RevealEffect::Zoom),
                        )
                        style=stagger(1, 60)
                    >
                        <div class="relative group" style=move || parallax(100.0)>
                            <div class="absolute inset-[-3px] rounded-full bg-gradient-to-r from-cyan-500 via-transparent to-blue-500 ring-rotate"></div>
                            <div class="absolute inset-0 bg-gradient-to-r from-cyan-500/20 to-blue-500/20 rounded-full blur-2xl glow-breathe"></div>
                            <FallbackImage
                                src=content::PORTRAIT_SRC
                                alt="Divyansh Agrawal"
                                class="relative w-64 h-64 sm:w-72 sm:h-72 md:w-80 md:h-80 lg:w-96 lg:h-96 rounded-full object-cover z-10 border-4 border-gray-800"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
