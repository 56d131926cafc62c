use eframe::egui::{Context, Frame, Margin, Stroke, Visuals};

use crate::config::{TICKER, ThemeId, ThemePalette};

/// Layout metrics that do not change with the theme.
pub struct UiConfig {
    pub header_height: f32,
    pub content_max_width: f32,
    pub section_gap: f32,
    pub popup_width: f32,
}

pub static UI_CONFIG: UiConfig = UiConfig {
    header_height: 48.0,
    content_max_width: 720.0,
    section_gap: 56.0,
    popup_width: 420.0,
};

impl UiConfig {
    /// Frame for the header bar.
    pub fn header_frame(&self, palette: &ThemePalette) -> Frame {
        Frame {
            fill: palette.panel_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    /// Frame for the ticker strip (no padding; the strip paints its own background)
    pub fn ticker_frame(&self) -> Frame {
        Frame {
            fill: TICKER.background_color,
            stroke: Stroke::NONE,
            inner_margin: Margin::ZERO,
            ..Default::default()
        }
    }

    /// Frame for the page body.
    pub fn page_frame(&self, palette: &ThemePalette) -> Frame {
        Frame {
            fill: palette.page_fill,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(24, 0),
            ..Default::default()
        }
    }
}

/// Sets up visuals for the entire application from the active palette.
pub fn apply_theme_visuals(ctx: &Context, theme: ThemeId) {
    let palette = theme.palette();
    let mut visuals = Visuals::dark();

    visuals.window_fill = palette.panel_fill;
    visuals.panel_fill = palette.panel_fill;
    visuals.hyperlink_color = palette.link;
    visuals.selection.bg_fill = palette.main;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = palette.label;
    visuals.widgets.inactive.fg_stroke.color = palette.label;
    visuals.widgets.hovered.fg_stroke.color = palette.heading;
    visuals.widgets.active.fg_stroke.color = palette.heading;

    ctx.set_visuals(visuals);
}
