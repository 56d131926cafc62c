use crate::config::{DF, GESTURE};

/// Scroll-gesture state for the hidden section: strong downward wheel
/// pushes while the page sits at its final block open it.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: bool,
    resistance: u8,
}

impl RevealState {
    /// Start with the section already open (`--unlocked`).
    pub fn revealed() -> Self {
        Self {
            revealed: true,
            resistance: 0,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one wheel event. `downward_px` is positive when the user scrolls
    /// towards the end of the page. Returns true on the event that opens the
    /// section, once; everything after that is a no-op.
    pub fn on_wheel(&mut self, downward_px: f32, at_final_block: bool) -> bool {
        if self.revealed {
            return false;
        }

        // Wandering off the final block abandons the attempt.
        if !at_final_block {
            self.resistance = 0;
            return false;
        }

        if downward_px > GESTURE.strong_scroll_delta {
            self.resistance = self.resistance.saturating_add(1);
            if DF.log_gesture {
                log::info!(
                    "Reveal gesture: {}/{}",
                    self.resistance,
                    GESTURE.resistance_threshold
                );
            }
        } else if downward_px < -GESTURE.strong_scroll_delta {
            // A strong pull back up cancels the attempt.
            self.resistance = 0;
            return false;
        }

        if self.resistance >= GESTURE.resistance_threshold {
            self.revealed = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRONG: f32 = 100.0; // past GESTURE.strong_scroll_delta (80)
    const WEAK: f32 = 10.0;

    #[test]
    fn two_strong_pushes_at_the_bottom_reveal() {
        let mut state = RevealState::default();
        assert!(!state.on_wheel(STRONG, true));
        assert!(state.on_wheel(STRONG, true));
        assert!(state.is_revealed());
    }

    #[test]
    fn reveal_fires_exactly_once() {
        let mut state = RevealState::default();
        state.on_wheel(STRONG, true);
        assert!(state.on_wheel(STRONG, true));
        assert!(!state.on_wheel(STRONG, true));
        assert!(state.is_revealed());
    }

    #[test]
    fn weak_scrolls_never_reveal() {
        let mut state = RevealState::default();
        for _ in 0..50 {
            assert!(!state.on_wheel(WEAK, true));
        }
        assert!(!state.is_revealed());
    }

    #[test]
    fn leaving_the_final_block_resets_the_counter() {
        let mut state = RevealState::default();
        state.on_wheel(STRONG, true);
        state.on_wheel(STRONG, false);
        assert!(!state.on_wheel(STRONG, true));
        assert!(state.on_wheel(STRONG, true));
    }

    #[test]
    fn strong_upward_scroll_resets_the_counter() {
        let mut state = RevealState::default();
        state.on_wheel(STRONG, true);
        state.on_wheel(-STRONG, true);
        assert!(!state.on_wheel(STRONG, true));
        assert!(state.on_wheel(STRONG, true));
    }

    #[test]
    fn weak_scroll_between_strong_pushes_does_not_reset() {
        let mut state = RevealState::default();
        state.on_wheel(STRONG, true);
        state.on_wheel(WEAK, true);
        assert!(state.on_wheel(STRONG, true));
    }

    #[test]
    fn unlocked_start_is_already_revealed() {
        let mut state = RevealState::revealed();
        assert!(state.is_revealed());
        assert!(!state.on_wheel(STRONG, true));
    }
}
