//! Trailing debounce: repeated pokes inside the delay window coalesce into a
//! single ready signal, `delay` after the last poke.

use std::time::Duration;

use crate::utils::AppInstant;

#[derive(Debug)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<AppInstant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// (Re)arm the timer. Each poke pushes the deadline out to `delay` past
    /// `now`, so a burst of pokes fires once, after the burst ends.
    pub fn poke(&mut self, now: AppInstant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per armed window, after the deadline passes.
    pub fn fire_if_ready(&mut self, now: AppInstant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(200);

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn does_not_fire_before_the_deadline() {
        let t0 = AppInstant::now();
        let mut d = Debounce::new(DELAY);
        d.poke(t0);
        assert!(!d.fire_if_ready(t0 + ms(199)));
        assert!(d.is_pending());
    }

    #[test]
    fn fires_once_after_the_deadline() {
        let t0 = AppInstant::now();
        let mut d = Debounce::new(DELAY);
        d.poke(t0);
        assert!(d.fire_if_ready(t0 + ms(200)));
        // Consumed: no second fire without a new poke.
        assert!(!d.fire_if_ready(t0 + ms(500)));
        assert!(!d.is_pending());
    }

    #[test]
    fn burst_of_pokes_coalesces_into_one_fire() {
        let t0 = AppInstant::now();
        let mut d = Debounce::new(DELAY);

        // Ten rapid pokes, 20ms apart; each restarts the window.
        for i in 0..10 {
            d.poke(t0 + ms(i * 20));
            assert!(!d.fire_if_ready(t0 + ms(i * 20)));
        }

        // Still quiet 199ms after the last poke...
        assert!(!d.fire_if_ready(t0 + ms(180 + 199)));
        // ...and exactly one fire after the window closes.
        assert!(d.fire_if_ready(t0 + ms(180 + 200)));
        assert!(!d.fire_if_ready(t0 + ms(180 + 201)));
    }

    #[test]
    fn new_poke_after_a_fire_rearms() {
        let t0 = AppInstant::now();
        let mut d = Debounce::new(DELAY);
        d.poke(t0);
        assert!(d.fire_if_ready(t0 + ms(250)));

        d.poke(t0 + ms(300));
        assert!(!d.fire_if_ready(t0 + ms(400)));
        assert!(d.fire_if_ready(t0 + ms(500)));
    }

    #[test]
    fn unpoked_debounce_never_fires() {
        let t0 = AppInstant::now();
        let mut d = Debounce::new(DELAY);
        assert!(!d.fire_if_ready(t0 + ms(10_000)));
    }
}
