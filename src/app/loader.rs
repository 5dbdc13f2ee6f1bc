//! Full-screen splash shown while the page shell counts down its loading
//! delay.

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-slate-900 flex flex-col items-center justify-center z-50">
            <div class="w-20 h-20 border-4 border-t-indigo-500 border-r-transparent border-b-teal-400 border-l-transparent rounded-full animate-spin"></div>
            <p class="mt-6 text-lg text-white loader-caption">
                "Loading Divyansh's Portfolio..."
            </p>
        </div>
    }
}
