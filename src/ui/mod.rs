mod popups;
mod sections;
mod styles;
mod ticker_strip;
mod ui_config;
mod ui_text;

pub(crate) use styles::UiStyleExt;
pub(crate) use ticker_strip::TickerStrip;
pub(crate) use ui_config::{UI_CONFIG, apply_theme_visuals};
pub(crate) use ui_text::UI_TEXT;
