//! "Get In Touch" section: contact info cards, social links, and the
//! simulated-submission form.

pub mod form;

use leptos::{ev::SubmitEvent, html, prelude::*};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use self::form::{
    ContactForm, Field, FormStatus, MESSAGE_MAX_CHARS, SUBMIT_DELAY_MILLIS, SUCCESS_VISIBLE_MILLIS,
};
use super::icons::Glyph;
use super::reveal::{stagger, use_section_reveal, RevealEffect};
use crate::content::{self, GlyphKind};

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(section_ref);

    view! {
        <section id="contact" node_ref=section_ref class="relative py-20 md:py-32 overflow-hidden">
            <div class="absolute top-0 left-0 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl -z-10"></div>
            <div class="absolute bottom-0 right-0 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl -z-10"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 xl:px-32">
                <div class=move || format!("text-center mb-16 {}", reveal.class(RevealEffect::FadeUp))>
                    <h2 class="text-3xl md:text-4xl lg:text-5xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-cyan-400 to-purple-500 mb-4">
                        "Get In Touch"
                    </h2>
                    <div class="w-24 h-1 bg-gradient-to-r from-cyan-400 to-purple-500 mx-auto"></div>
                    <p class="mt-6 text-gray-300 max-w-2xl mx-auto text-lg">
                        "Have a project in mind or just want to say hello? Feel free to reach out! \
                         I'm always open to discussing new projects, creative ideas, or \
                         opportunities to be part of your vision."
                    </p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class=move || reveal.class(RevealEffect::FadeRight)>
                        <InfoPanel reveal=reveal />
                    </div>
                    <div
                        class=move || reveal.class(RevealEffect::FadeLeft)
                        style=stagger(1, 100)
                    >
                        <MessageForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoPanel(reveal: super::reveal::SectionReveal) -> impl IntoView {
    view! {
        <div class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 md:p-10 border border-gray-700 hover:border-cyan-400/50 transition-all duration-300 h-full">
            <h3 class="text-2xl md:text-3xl font-bold text-white mb-10">"Let's Connect"</h3>

            <div class="space-y-8">
                {content::CONTACT_CARDS
                    .iter()
                    .enumerate()
                    .map(|(index, card)| {
                        view! {
                            <div
                                class=move || format!("group {}", reveal.class(RevealEffect::FadeUp))
                                style=stagger(index + 2, 100)
                            >
                                <div class="flex items-start space-x-5">
                                    <div class=format!(
                                        "p-4 rounded-xl {} group-hover:scale-110 transition-transform duration-300",
                                        card.tone.badge_class(),
                                    )>
                                        <Glyph kind=card.icon class="w-6 h-6" />
                                    </div>
                                    <div class="flex-1">
                                        <h4 class="font-semibold text-white mb-2 text-lg">
                                            {card.title}
                                        </h4>
                                        {match card.href {
                                            Some(href) => {
                                                view! {
                                                    <a
                                                        href=href
                                                        class="text-gray-300 hover:text-cyan-400 transition-colors flex items-center"
                                                    >
                                                        <span class="break-all">{card.content}</span>
                                                    </a>
                                                }
                                                    .into_any()
                                            }
                                            None => {
                                                view! { <p class="text-gray-300">{card.content}</p> }
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>

            <div
                class=move || format!("mt-12 pt-8 border-t border-gray-700 {}", reveal.class(RevealEffect::FadeUp))
                style=stagger(5, 100)
            >
                <h4 class="font-semibold text-white mb-6 text-lg">"Find me on social media"</h4>
                <div class="grid grid-cols-4 gap-4">
                    {content::CONTACT_SOCIALS
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class=format!(
                                        "bg-gray-900/50 {} p-4 rounded-xl text-gray-300 hover:text-white transition-all duration-300 flex items-center justify-center border border-gray-700 hover:border-transparent hover:-translate-y-1",
                                        social.hover,
                                    )
                                    aria-label=format!("{} Profile", social.name)
                                >
                                    <Glyph kind=social.icon class="w-5 h-5" />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div
                class=move || format!(
                    "mt-10 p-6 bg-gradient-to-br from-cyan-900/20 to-purple-900/20 rounded-xl border border-cyan-800/30 backdrop-blur-sm {}",
                    reveal.class(RevealEffect::FadeUp),
                )
                style=stagger(7, 100)
            >
                <div class="flex items-start space-x-3">
                    <span class="text-cyan-400 text-3xl">"\u{201c}"</span>
                    <p class="text-cyan-300/80 italic text-sm leading-relaxed">
                        "Looking forward to collaborating on exciting projects and bringing your \
                         ideas to life! Let's create something amazing together."
                    </p>
                    <span class="text-cyan-400 text-3xl self-end">"\u{201d}"</span>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MessageForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let UseTimeoutFnReturn {
        start: start_reset, ..
    } = use_timeout_fn(
        move |_: ()| form.update(|f| f.acknowledge()),
        SUCCESS_VISIBLE_MILLIS,
    );

    let UseTimeoutFnReturn {
        start: start_submit,
        ..
    } = use_timeout_fn(
        move |_: ()| {
            form.update(|f| f.finish_submit());
            start_reset(());
        },
        SUBMIT_DELAY_MILLIS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form.update(|f| started = f.try_submit());
        if started {
            // Local simulation only: the payload is logged, never sent.
            let payload = form
                .with_untracked(|f| serde_json::to_string(&f.draft))
                .unwrap_or_default();
            log::info!("simulated contact submission: {payload}");
            start_submit(());
        } else {
            log::debug!("contact form rejected by validation");
        }
    };

    let submitting = move || form.with(|f| f.status == FormStatus::Submitting);
    let submitted = move || form.with(|f| f.status == FormStatus::Submitted);

    view! {
        <form
            on:submit=on_submit
            class="bg-gray-800/50 backdrop-blur-sm rounded-2xl p-8 md:p-10 border border-gray-700 hover:border-purple-400/50 transition-all duration-300 h-full"
        >
            <h3 class="text-2xl md:text-3xl font-bold text-white mb-8">"Send a Message"</h3>

            <Show when=submitted>
                <div class="mb-8 bg-green-900/30 backdrop-blur-sm text-green-400 p-5 rounded-xl flex items-center space-x-3 border border-green-800/50">
                    <div class="bg-green-900/50 p-2 rounded-full flex-shrink-0">
                        <Glyph kind=GlyphKind::Check class="w-5 h-5 text-green-400" />
                    </div>
                    <p class="text-sm md:text-base">
                        "Your message has been sent successfully! I'll get back to you within 24 hours."
                    </p>
                </div>
            </Show>

            <div class="space-y-6">
                <FormInput
                    form=form
                    field=Field::Name
                    label="Your Name"
                    placeholder="John Doe"
                    kind="text"
                />
                <FormInput
                    form=form
                    field=Field::Email
                    label="Your Email"
                    placeholder="john@example.com"
                    kind="email"
                />

                <div>
                    <label class="block text-gray-200 mb-2 font-medium">
                        "Message " <span class="text-red-400">"*"</span>
                    </label>
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        maxlength=MESSAGE_MAX_CHARS
                        placeholder="Hi there, I'd like to discuss a project..."
                        prop:value=move || form.with(|f| f.draft.message.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                        }
                        class=move || field_class(form.with(|f| f.errors.message.is_some()))
                    ></textarea>
                    <FieldErrorNote error=Signal::derive(move || {
                        form.with(|f| f.errors.message.map(|e| e.to_string()))
                    }) />
                    <p class="text-gray-500 text-sm mt-2">
                        {move || {
                            format!(
                                "{}/{} characters",
                                form.with(|f| f.draft.message.chars().count()),
                                MESSAGE_MAX_CHARS,
                            )
                        }}
                    </p>
                </div>
            </div>

            <button
                type="submit"
                disabled=submitting
                class="w-full mt-8 bg-gradient-to-r from-cyan-500 to-purple-600 text-white py-4 px-6 rounded-xl font-medium flex items-center justify-center gap-3 hover:from-cyan-600 hover:to-purple-700 transform transition-all duration-300 shadow-lg hover:shadow-cyan-500/25 disabled:opacity-70 disabled:cursor-not-allowed disabled:transform-none"
            >
                <Show
                    when=submitting
                    fallback=|| {
                        view! {
                            <span>"Send Message"</span>
                            <Glyph kind=GlyphKind::Send class="w-[18px] h-[18px]" />
                        }
                    }
                >
                    <span class="h-5 w-5 rounded-full border-2 border-white/30 border-t-white animate-spin"></span>
                    <span>"Sending..."</span>
                </Show>
            </button>

            <p class="text-gray-500 text-xs text-center mt-6 flex items-center justify-center gap-1">
                <span class="inline-block w-1 h-1 bg-green-400 rounded-full"></span>
                "Your information is secure and will not be shared with third parties"
            </p>
        </form>
    }
}

fn field_class(has_error: bool) -> String {
    let border = if has_error {
        "border-red-500"
    } else {
        "border-gray-700"
    };
    format!(
        "w-full bg-gray-900/50 backdrop-blur-sm border {border} rounded-xl px-4 py-3 text-white placeholder-gray-500 focus:outline-none focus:ring-2 focus:ring-cyan-500 focus:border-transparent transition-all duration-300",
    )
}

#[component]
fn FormInput(
    form: RwSignal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    kind: &'static str,
) -> impl IntoView {
    let value = move || {
        form.with(|f| match field {
            Field::Name => f.draft.name.clone(),
            Field::Email => f.draft.email.clone(),
            Field::Message => f.draft.message.clone(),
        })
    };
    let error = Signal::derive(move || {
        form.with(|f| {
            match field {
                Field::Name => f.errors.name,
                Field::Email => f.errors.email,
                Field::Message => f.errors.message,
            }
            .map(|e| e.to_string())
        })
    });

    view! {
        <div>
            <label class="block text-gray-200 mb-2 font-medium">
                {label} " " <span class="text-red-400">"*"</span>
            </label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                class=move || field_class(error.with(|e| e.is_some()))
            />
            <FieldErrorNote error=error />
        </div>
    }
}

#[component]
fn FieldErrorNote(error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|message| {
                    view! {
                        <p class="text-red-400 text-sm mt-2 flex items-center gap-1 pop-in">
                            <span class="inline-block w-1 h-1 bg-red-400 rounded-full"></span>
                            {message}
                        </p>
                    }
                })
        }}
    }
}
