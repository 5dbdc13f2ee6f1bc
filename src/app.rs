mod about;
mod background;
mod contact;
mod education;
mod experience;
mod footer;
mod hero;
mod icons;
mod loader;
mod navbar;
mod projects;
pub mod reveal;
mod scroll_to_top;
mod skills;
mod typewriter;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use about::About;
use background::AnimatedBackground;
use contact::Contact;
use education::Education;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use loader::Loader;
use navbar::Navbar;
use projects::Projects;
use scroll_to_top::ScrollToTop;
use skills::Skills;

/// How long the splash screen stays up before the page renders.
const SPLASH_MILLIS: f64 = 3000.0;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="font-sans bg-gray-950 text-white">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Divyansh Agrawal - {title}") />

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=PortfolioPage />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole single-page site: splash delay, decorative background, and the
/// sections composed in fixed order.
#[component]
fn PortfolioPage() -> impl IntoView {
    let (loading, set_loading) = signal(true);

    let UseTimeoutFnReturn { start, .. } =
        use_timeout_fn(move |_: ()| set_loading.set(false), SPLASH_MILLIS);

    // Timers only run in the browser; the server renders the splash markup.
    Effect::new(move |_| {
        start(());
    });

    view! {
        <Title text="Portfolio" />

        <Show when=move || !loading.get() fallback=Loader>
            <div class="relative">
                <AnimatedBackground />
                <ScrollToTop />

                <div class="relative z-10">
                    <Navbar />
                    <Hero />
                    <About />
                    <Experience />
                    <Skills />
                    <Projects />
                    <Education />
                    <Contact />
                    <Footer />
                </div>
            </div>
        </Show>
    }
}
