//! Global animated background: gradient base, drifting orbs, mouse-follow
//! glow, grid pattern, and floating particles. Purely decorative and
//! pointer-transparent.

use leptos::prelude::*;
use leptos_use::{use_mouse, UseMouseReturn};

const PARTICLE_COUNT: u32 = 30;

/// Scatter parameters for one particle: left %, top %, drift duration (s),
/// start delay (s). Hash-derived so server and client render identically.
fn particle_params(index: u32) -> (f64, f64, f64, f64) {
    let hash = index.wrapping_add(1).wrapping_mul(2654435761);
    let left = (hash % 100) as f64;
    let top = ((hash >> 8) % 100) as f64;
    let duration = 10.0 + ((hash >> 16) % 20) as f64;
    let delay = ((hash >> 24) % 14) as f64 * 0.5;
    (left, top, duration, delay)
}

#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let UseMouseReturn { x, y, .. } = use_mouse();
    let glow_style = move || {
        format!(
            "left: {}px; top: {}px; background: radial-gradient(circle, rgba(6, 182, 212, 0.15) 0%, transparent 70%)",
            x.get() - 300.0,
            y.get() - 300.0,
        )
    };

    view! {
        <div class="fixed inset-0 overflow-hidden pointer-events-none">
            <div class="absolute inset-0 bg-gradient-to-br from-gray-950 via-gray-900 to-black"></div>

            <div class="absolute -top-40 -left-40 w-80 h-80 bg-cyan-500/20 rounded-full blur-3xl orb-drift-a"></div>
            <div class="absolute -bottom-40 -right-40 w-96 h-96 bg-blue-500/20 rounded-full blur-3xl orb-drift-b"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-purple-500/10 rounded-full blur-3xl orb-pulse"></div>

            <div
                class="absolute w-[600px] h-[600px] opacity-20 transition-all duration-700 ease-out"
                style=glow_style
            ></div>

            <div class="absolute inset-0 opacity-[0.02] grid-lines"></div>

            {(0..PARTICLE_COUNT)
                .map(|index| {
                    let (left, top, duration, delay) = particle_params(index);
                    view! {
                        <div
                            class="absolute w-1 h-1 bg-cyan-400/30 rounded-full particle"
                            style=format!(
                                "left: {left}%; top: {top}%; animation-duration: {duration}s; animation-delay: {delay}s",
                            )
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_viewport() {
        for index in 0..PARTICLE_COUNT {
            let (left, top, duration, delay) = particle_params(index);
            assert!((0.0..100.0).contains(&left));
            assert!((0.0..100.0).contains(&top));
            assert!((10.0..30.0).contains(&duration));
            assert!(delay >= 0.0);
        }
    }

    #[test]
    fn scatter_is_deterministic() {
        assert_eq!(particle_params(7), particle_params(7));
        assert_ne!(particle_params(7), particle_params(8));
    }
}
