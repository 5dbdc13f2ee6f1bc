//! Scroll-driven reveal animations.
//!
//! Each section owns one [`SectionReveal`]: an intersection observer watches
//! the section's root element and drives a tiny state machine that the
//! section's markup keys its transition classes off. Animations replay on
//! every re-entry into the viewport, not just the first. The generation
//! counter ticks up on each hidden-to-visible edge so consumers can force a
//! hard restart of child animations (progress bars, the hero typewriter).

use leptos::prelude::*;
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

/// Fraction of the element that must intersect before it counts as visible.
pub const DEFAULT_THRESHOLD: f64 = 0.1;
/// Shrinks the trigger zone so sections reveal slightly after entering.
pub const DEFAULT_ROOT_MARGIN: &str = "-10% 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Pure controller core: visibility reports in, animation target out.
#[derive(Debug, Clone, Copy, Default)]
struct RevealCore {
    state: RevealState,
    generation: u32,
}

impl RevealCore {
    /// Feed one visibility report. Only edges change anything: repeated
    /// reports in the same direction are idempotent, and the generation
    /// counter moves strictly on the hidden-to-visible edge.
    fn observe(&mut self, intersecting: bool) {
        match (self.state, intersecting) {
            (RevealState::Hidden, true) => {
                self.state = RevealState::Visible;
                self.generation += 1;
            }
            (RevealState::Visible, false) => {
                self.state = RevealState::Hidden;
            }
            _ => {}
        }
    }
}

/// The transition an element plays when its section reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealEffect {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    Zoom,
}

impl RevealEffect {
    fn hidden_class(self) -> &'static str {
        match self {
            RevealEffect::FadeUp => "reveal-up",
            RevealEffect::FadeDown => "reveal-down",
            RevealEffect::FadeLeft => "reveal-left",
            RevealEffect::FadeRight => "reveal-right",
            RevealEffect::Zoom => "reveal-zoom",
        }
    }
}

/// Handle held by a section component. `Copy`, so it can be captured freely
/// by view closures.
#[derive(Clone, Copy)]
pub struct SectionReveal {
    core: RwSignal<RevealCore>,
}

impl SectionReveal {
    pub fn is_visible(&self) -> bool {
        self.core.with(|c| c.state == RevealState::Visible)
    }

    pub fn state(&self) -> RevealState {
        self.core.with(|c| c.state)
    }

    /// Bumped on every re-entry; key child views on this to restart
    /// keyframe animations from scratch.
    pub fn generation(&self) -> u32 {
        self.core.with(|c| c.generation)
    }

    /// Class list for an element animated by this controller, to be joined
    /// with the element's static classes.
    pub fn class(&self, effect: RevealEffect) -> String {
        if self.is_visible() {
            format!("reveal {} is-visible", effect.hidden_class())
        } else {
            format!("reveal {}", effect.hidden_class())
        }
    }
}

/// Inline style staggering a child by its index within the reveal.
pub fn stagger(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms", index as u32 * step_ms)
}

#[derive(Debug, Clone, Copy)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN,
        }
    }
}

/// Observe `target` with the default threshold and margin.
pub fn use_section_reveal<El, M>(target: El) -> SectionReveal
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    use_section_reveal_with_options(target, RevealOptions::default())
}

/// Observe `target` and derive a [`SectionReveal`] from its viewport
/// crossings. The observer re-fires on every crossing (never "once"); an
/// unmounted target is a no-op; leptos-use unregisters the platform observer
/// when the owning scope is disposed.
pub fn use_section_reveal_with_options<El, M>(target: El, options: RevealOptions) -> SectionReveal
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let core = RwSignal::new(RevealCore::default());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if let Some(entry) = entries.first() {
                core.update(|c| c.observe(entry.is_intersecting()));
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin),
    );

    SectionReveal { core }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_animation_replays_on_every_entry() {
        let mut core = RevealCore::default();
        assert_eq!(core.state, RevealState::Hidden);
        assert_eq!(core.generation, 0);

        core.observe(true);
        assert_eq!(core.state, RevealState::Visible);
        assert_eq!(core.generation, 1);

        core.observe(false);
        assert_eq!(core.state, RevealState::Hidden);
        assert_eq!(core.generation, 1);

        core.observe(true);
        assert_eq!(core.state, RevealState::Visible);
        assert_eq!(core.generation, 2);
    }

    #[test]
    fn repeated_reports_are_idempotent() {
        let mut core = RevealCore::default();
        core.observe(true);
        core.observe(true);
        assert_eq!(core.generation, 1);

        core.observe(false);
        core.observe(false);
        assert_eq!(core.state, RevealState::Hidden);
        assert_eq!(core.generation, 1);
    }

    #[test]
    fn leaving_never_bumps_the_counter() {
        let mut core = RevealCore::default();
        for _ in 0..5 {
            core.observe(true);
            core.observe(false);
        }
        assert_eq!(core.generation, 5);
    }

    #[test]
    fn effect_classes_toggle_with_state() {
        let hidden = RevealEffect::FadeUp.hidden_class();
        assert_eq!(hidden, "reveal-up");
        // The visible modifier is appended, never swapped, so the CSS
        // transition runs in both directions.
        assert!(format!("reveal {hidden} is-visible").contains(hidden));
    }

    #[test]
    fn stagger_scales_linearly() {
        assert_eq!(stagger(0, 100), "transition-delay: 0ms");
        assert_eq!(stagger(3, 100), "transition-delay: 300ms");
    }
}
