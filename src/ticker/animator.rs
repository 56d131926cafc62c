//! Per-frame offset math for the strip.
//!
//! Timestamps come in as seconds on the scheduler's clock (egui's frame
//! time); injecting synthetic values makes every step testable without a
//! running UI.

pub struct TickerAnimator {
    speed_px_per_sec: f32,
    track_width: f32,
    /// Timestamp of the first frame of the current run. `None` between
    /// `start` and the next frame.
    run_start: Option<f64>,
}

impl TickerAnimator {
    pub fn new(speed_px_per_sec: f32) -> Self {
        Self {
            speed_px_per_sec,
            track_width: 0.0,
            run_start: None,
        }
    }

    pub fn track_width(&self) -> f32 {
        self.track_width
    }

    pub fn is_running(&self) -> bool {
        self.run_start.is_some()
    }

    /// Begin a fresh run over a newly measured track. Any previous run is
    /// abandoned (there is never more than one writer of the offset), and
    /// timing re-anchors on the next frame timestamp.
    pub fn start(&mut self, track_width: f32) {
        self.track_width = track_width;
        self.run_start = None;
    }

    /// Leftward offset for the frame at `now`. The first call after `start`
    /// anchors the run; the offset then grows at the configured speed and
    /// wraps at the track width, staying in `[0, track_width)`.
    ///
    /// While the track width is zero (hidden or unmeasured content) the
    /// offset holds at 0.
    pub fn offset_at(&mut self, now: f64) -> f32 {
        let start = *self.run_start.get_or_insert(now);
        if self.track_width <= 0.0 {
            return 0.0;
        }

        // Frame clocks are monotonic, but a restart can anchor slightly
        // ahead of a stale timestamp; clamp instead of going negative.
        let elapsed = (now - start).max(0.0);
        let offset = ((elapsed * self.speed_px_per_sec as f64) % self.track_width as f64) as f32;

        // f32 rounding can land the remainder exactly on the width; that is
        // the wrap point, i.e. the same visual position as zero.
        if offset >= self.track_width { 0.0 } else { offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_elapsed_times_speed_before_the_wrap() {
        let mut anim = TickerAnimator::new(50.0);
        anim.start(1000.0);
        assert_eq!(anim.offset_at(10.0), 0.0); // anchor frame
        assert_eq!(anim.offset_at(12.0), 100.0);
    }

    #[test]
    fn offset_wraps_at_track_width() {
        // speed 50 px/s, width 1000 px: at t=30s the offset is 500.
        let mut anim = TickerAnimator::new(50.0);
        anim.start(1000.0);
        anim.offset_at(0.0);
        assert_eq!(anim.offset_at(30.0), 500.0);
        // One full lap later the offset is identical.
        assert_eq!(anim.offset_at(50.0), 500.0);
    }

    #[test]
    fn offset_is_continuous_between_wraps() {
        let mut anim = TickerAnimator::new(60.0);
        anim.start(600.0);
        anim.offset_at(0.0);

        let mut prev = anim.offset_at(0.0);
        for i in 1..200 {
            let now = i as f64 * 0.016;
            let offset = anim.offset_at(now);
            let step = offset - prev;
            // Either a small forward step or a wrap back near zero.
            assert!(step > 0.0 || offset < 1.0, "discontinuity at frame {i}");
            prev = offset;
        }
    }

    #[test]
    fn zero_width_track_holds_at_zero() {
        let mut anim = TickerAnimator::new(50.0);
        anim.start(0.0);
        anim.offset_at(0.0);
        assert_eq!(anim.offset_at(1000.0), 0.0);
    }

    #[test]
    fn restart_reanchors_timing() {
        let mut anim = TickerAnimator::new(50.0);
        anim.start(1000.0);
        anim.offset_at(0.0);
        assert!(anim.offset_at(5.0) > 0.0);

        anim.start(1000.0);
        assert!(!anim.is_running());
        // First frame of the new run is the new zero.
        assert_eq!(anim.offset_at(100.0), 0.0);
        assert_eq!(anim.offset_at(101.0), 50.0);
    }

    #[test]
    fn stale_timestamp_after_restart_clamps_to_zero() {
        let mut anim = TickerAnimator::new(50.0);
        anim.start(500.0);
        anim.offset_at(10.0);
        assert_eq!(anim.offset_at(9.5), 0.0);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offset_stays_in_range(
                speed in 1.0f32..500.0,
                width in 1.0f32..100_000.0,
                elapsed in 0.0f64..1_000_000.0,
            ) {
                let mut anim = TickerAnimator::new(speed);
                anim.start(width);
                anim.offset_at(0.0);
                let offset = anim.offset_at(elapsed);
                prop_assert!(offset >= 0.0);
                prop_assert!(offset < width);
            }
        }
    }
}
