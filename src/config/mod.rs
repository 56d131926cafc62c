//! Configuration module for the promo page.

// Can all be private because we have a public re-export.
mod content;
mod debug;
mod gesture;
mod theme;
mod ticker;

// Re-export commonly used items
pub use content::{PAGE, PageContent, PopupCopy, PopupKind, SectionCopy};
pub use debug::DF;
pub use gesture::GESTURE;
pub use theme::{THEME_BLUE, THEME_GREEN, ThemeId, ThemePalette};
pub use ticker::{TICKER, TickerConfig};
