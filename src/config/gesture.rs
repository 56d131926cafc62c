/// Tuning for the hidden-section scroll gesture.
pub struct GestureConfig {
    /// Wheel movement (px) that counts as one strong scroll.
    pub strong_scroll_delta: f32,
    /// Strong downward scrolls required before the hidden section opens.
    pub resistance_threshold: u8,
    /// The page counts as "at the final block" when the scroll position is
    /// within this many pixels of the end.
    pub bottom_slack: f32,
}

pub const GESTURE: GestureConfig = GestureConfig {
    strong_scroll_delta: 80.0,
    resistance_threshold: 2,
    bottom_slack: 50.0,
};
