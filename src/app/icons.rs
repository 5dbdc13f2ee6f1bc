//! Icon rendering: inline SVG glyphs, devicon tech chips, and the image
//! fallback used wherever an asset may be missing.

use leptos::prelude::*;

use crate::content::{GlyphKind, Tech, TechIcon};

impl GlyphKind {
    /// Feather-style stroke markup injected into the `<svg>` wrapper.
    fn markup(self) -> &'static str {
        match self {
            GlyphKind::ArrowUp => r#"<line x1="12" y1="19" x2="12" y2="5"/><polyline points="5 12 12 5 19 12"/>"#,
            GlyphKind::Award => r#"<circle cx="12" cy="8" r="7"/><polyline points="8.21 13.89 7 23 12 20 17 23 15.79 13.88"/>"#,
            GlyphKind::BarChart => r#"<line x1="12" y1="20" x2="12" y2="10"/><line x1="18" y1="20" x2="18" y2="4"/><line x1="6" y1="20" x2="6" y2="16"/>"#,
            GlyphKind::Book => r#"<path d="M4 19.5A2.5 2.5 0 0 1 6.5 17H20"/><path d="M6.5 2H20v20H6.5A2.5 2.5 0 0 1 4 19.5v-15A2.5 2.5 0 0 1 6.5 2z"/>"#,
            GlyphKind::Briefcase => r#"<rect x="2" y="7" width="20" height="14" rx="2" ry="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
            GlyphKind::Calendar => r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"/><line x1="16" y1="2" x2="16" y2="6"/><line x1="8" y1="2" x2="8" y2="6"/><line x1="3" y1="10" x2="21" y2="10"/>"#,
            GlyphKind::Check => r#"<polyline points="20 6 9 17 4 12"/>"#,
            GlyphKind::ChevronLeft => r#"<polyline points="15 18 9 12 15 6"/>"#,
            GlyphKind::ChevronRight => r#"<polyline points="9 18 15 12 9 6"/>"#,
            GlyphKind::Cloud => r#"<path d="M18 10h-1.26A8 8 0 1 0 9 20h9a5 5 0 0 0 0-10z"/>"#,
            GlyphKind::Code => r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#,
            GlyphKind::CreditCard => r#"<rect x="1" y="4" width="22" height="16" rx="2" ry="2"/><line x1="1" y1="10" x2="23" y2="10"/>"#,
            GlyphKind::Download => r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>"#,
            GlyphKind::ExternalLink => r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><polyline points="15 3 21 3 21 9"/><line x1="10" y1="14" x2="21" y2="3"/>"#,
            GlyphKind::GraduationCap => r#"<path d="M22 10L12 5 2 10l10 5 10-5z"/><path d="M6 12v5c0 1.66 2.69 3 6 3s6-1.34 6-3v-5"/>"#,
            GlyphKind::Github => r#"<path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"/>"#,
            GlyphKind::Heart => r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"/>"#,
            GlyphKind::Instagram => r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>"#,
            GlyphKind::Key => r#"<path d="M21 2l-2 2m-7.61 7.61a5.5 5.5 0 1 1-7.778 7.778 5.5 5.5 0 0 1 7.777-7.777zm0 0L15.5 7.5m0 0l3 3L22 7l-3-3m-3.5 3.5L19 4"/>"#,
            GlyphKind::Linkedin => r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V9h4v1.3A6 6 0 0 1 16 8z"/><rect x="2" y="9" width="4" height="12"/><circle cx="4" cy="4" r="2"/>"#,
            GlyphKind::Mail => r#"<path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"/><polyline points="22,6 12,13 2,6"/>"#,
            GlyphKind::MapPin => r#"<path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/>"#,
            GlyphKind::Menu => r#"<line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="18" x2="21" y2="18"/>"#,
            GlyphKind::Monitor => r#"<rect x="2" y="3" width="20" height="14" rx="2" ry="2"/><line x1="8" y1="21" x2="16" y2="21"/><line x1="12" y1="17" x2="12" y2="21"/>"#,
            GlyphKind::Phone => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
            GlyphKind::School => r#"<path d="M3 21h18"/><path d="M5 21V7l7-4 7 4v14"/><path d="M9 21v-6h6v6"/>"#,
            GlyphKind::Send => r#"<line x1="22" y1="2" x2="11" y2="13"/><polygon points="22 2 15 22 11 13 2 9 22 2"/>"#,
            GlyphKind::Server => r#"<rect x="2" y="2" width="20" height="8" rx="2" ry="2"/><rect x="2" y="14" width="20" height="8" rx="2" ry="2"/><line x1="6" y1="6" x2="6.01" y2="6"/><line x1="6" y1="18" x2="6.01" y2="18"/>"#,
            GlyphKind::Target => r#"<circle cx="12" cy="12" r="10"/><circle cx="12" cy="12" r="6"/><circle cx="12" cy="12" r="2"/>"#,
            GlyphKind::Terminal => r#"<polyline points="4 17 10 11 4 5"/><line x1="12" y1="19" x2="20" y2="19"/>"#,
            GlyphKind::TrendingUp => r#"<polyline points="23 6 13.5 15.5 8.5 10.5 1 18"/><polyline points="17 6 23 6 23 12"/>"#,
            GlyphKind::X => r#"<line x1="18" y1="6" x2="6" y2="18"/><line x1="6" y1="6" x2="18" y2="18"/>"#,
            GlyphKind::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
        }
    }
}

#[component]
pub fn Glyph(
    kind: GlyphKind,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=kind.markup()
        ></svg>
    }
}

/// One technology tag: icon plus label, as shown on project cards.
#[component]
pub fn TechChip(tech: Tech) -> impl IntoView {
    view! {
        <span class="flex items-center gap-2 bg-gray-900/50 backdrop-blur-sm px-3 py-1.5 rounded-lg text-sm border border-gray-700 hover:border-cyan-400/50 hover:-translate-y-0.5 transition-all duration-300">
            <TechGlyph tech=tech size="text-lg" />
            <span class="text-gray-300 text-xs">{tech.label()}</span>
        </span>
    }
}

/// The icon of a tag on its own, sized by the caller.
#[component]
pub fn TechGlyph(tech: Tech, #[prop(default = "text-lg")] size: &'static str) -> impl IntoView {
    match tech.icon() {
        TechIcon::Devicon(icon_class) => view! {
            <i class=format!("{icon_class} {} {size}", tech.color())></i>
        }
        .into_any(),
        TechIcon::Glyph(kind) => view! {
            <span class=format!("{} {size}", tech.color())>
                <Glyph kind=kind class="w-[1em] h-[1em]" />
            </span>
        }
        .into_any(),
    }
}

/// Image that degrades to an inline "Logo" caption when the asset is
/// missing, instead of a broken-image box.
#[component]
pub fn FallbackImage(
    src: &'static str,
    alt: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let (failed, set_failed) = signal(false);

    view! {
        <Show
            when=move || !failed.get()
            fallback=|| {
                view! { <span class="text-gray-500 text-xs text-center">"Logo"</span> }
            }
        >
            <img src=src alt=alt class=class on:error=move |_| set_failed.set(true) />
        </Show>
    }
}
