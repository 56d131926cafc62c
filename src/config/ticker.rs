use eframe::egui::Color32;

pub struct TickerConfig {
    /// Strip height in points.
    pub height: f32,
    /// Scroll speed in pixels per second.
    pub speed_px_per_sec: f32,
    /// Never fill the track with fewer than this many copies of the item set.
    /// Two sets is the floor that keeps the loop from visibly repeating
    /// within a single screen width.
    pub min_sets: usize,
    /// Target track width as a multiple of the viewport width.
    pub width_multiplier: f32,
    /// Resize events inside this window coalesce into a single rebuild.
    pub resize_debounce_ms: u64,
    pub font_size: f32,
    /// Horizontal gap between items (part of an item's natural width).
    pub item_spacing: f32,

    // Colors
    pub background_color: Color32,
    pub text_color: Color32,
    pub text_color_link: Color32,
}

pub const TICKER: TickerConfig = TickerConfig {
    height: 26.0,
    speed_px_per_sec: 50.0,
    min_sets: 2,
    width_multiplier: 2.0,
    resize_debounce_ms: 200,
    font_size: 12.0,
    item_spacing: 48.0,

    background_color: Color32::from_rgb(12, 14, 22), // Very dark
    text_color: Color32::from_rgb(220, 224, 235),
    text_color_link: Color32::from_rgb(100, 200, 255), // Light blue for links
};
