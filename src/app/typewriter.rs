//! Rotating typewriter headline for the hero section.
//!
//! Pure state machine: the component ticks it from `use_interval_fn` and
//! renders [`Typewriter::rendered`]. Phrases type in one character per tick,
//! hold fully typed, then delete and rotate to the next phrase forever.

/// Milliseconds between ticks.
pub const TICK_MILLIS: u64 = 60;

/// Ticks a fully-typed phrase stays on screen (~2s).
const HOLD_TICKS: u32 = 33;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: &'static [&'static str],
    phrase: usize,
    shown: usize,
    held: u32,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        debug_assert!(!phrases.is_empty());
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            held: 0,
            phase: Phase::Typing,
        }
    }

    /// Restart from the first phrase, empty.
    pub fn reset(&mut self) {
        *self = Self::new(self.phrases);
    }

    pub fn tick(&mut self) {
        let len = self.current().chars().count();
        match self.phase {
            Phase::Typing => {
                self.shown += 1;
                if self.shown >= len {
                    self.shown = len;
                    self.held = 0;
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.held += 1;
                if self.held >= HOLD_TICKS {
                    self.phase = Phase::Deleting;
                }
            }
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }

    /// The currently visible prefix of the active phrase.
    pub fn rendered(&self) -> &'static str {
        let phrase = self.current();
        match phrase.char_indices().nth(self.shown) {
            Some((byte, _)) => &phrase[..byte],
            None => phrase,
        }
    }

    fn current(&self) -> &'static str {
        self.phrases[self.phrase]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASES: &[&str] = &["ab", "xyz"];

    #[test]
    fn types_one_char_per_tick() {
        let mut tw = Typewriter::new(PHRASES);
        assert_eq!(tw.rendered(), "");
        tw.tick();
        assert_eq!(tw.rendered(), "a");
        tw.tick();
        assert_eq!(tw.rendered(), "ab");
    }

    #[test]
    fn holds_then_deletes_and_rotates() {
        let mut tw = Typewriter::new(PHRASES);
        // type "ab"
        tw.tick();
        tw.tick();
        // hold
        for _ in 0..HOLD_TICKS {
            tw.tick();
            assert_eq!(tw.rendered(), "ab");
        }
        // delete "b", then "a"
        tw.tick();
        assert_eq!(tw.rendered(), "a");
        tw.tick();
        assert_eq!(tw.rendered(), "");
        // next tick starts typing the second phrase
        tw.tick();
        assert_eq!(tw.rendered(), "x");
    }

    #[test]
    fn wraps_back_to_the_first_phrase() {
        let mut tw = Typewriter::new(PHRASES);
        // run long enough to cycle through both phrases
        let cycle = (2 + HOLD_TICKS as usize + 2) + (3 + HOLD_TICKS as usize + 3);
        for _ in 0..cycle {
            tw.tick();
        }
        tw.tick();
        assert_eq!(tw.rendered(), "a");
    }

    #[test]
    fn reset_rewinds_to_the_start() {
        let mut tw = Typewriter::new(PHRASES);
        for _ in 0..10 {
            tw.tick();
        }
        tw.reset();
        assert_eq!(tw.rendered(), "");
        tw.tick();
        assert_eq!(tw.rendered(), "a");
    }
}
