use eframe::egui::Color32;
use strum_macros::EnumIter;

/// The two page color schemes. Blue is the scheme the page loads with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter)]
pub enum ThemeId {
    #[default]
    Blue,
    Green,
}

pub struct ThemePalette {
    pub name: &'static str,
    /// Accent color: wordmark, action buttons, arrows, selection.
    pub main: Color32,
    /// Header logo glyph. Swapped with the theme, like the page logo image.
    pub logo_glyph: &'static str,
    pub page_fill: Color32,
    pub panel_fill: Color32,
    pub heading: Color32,
    pub label: Color32,
    pub link: Color32,
}

pub const THEME_BLUE: ThemePalette = ThemePalette {
    name: "Blue",
    main: Color32::from_rgb(72, 144, 255),
    logo_glyph: "◉",
    page_fill: Color32::from_rgb(16, 18, 28),
    panel_fill: Color32::from_rgb(22, 25, 38),
    heading: Color32::from_rgb(235, 238, 248),
    label: Color32::from_rgb(165, 172, 190),
    link: Color32::from_rgb(120, 180, 255),
};

pub const THEME_GREEN: ThemePalette = ThemePalette {
    name: "Green",
    main: Color32::from_rgb(62, 200, 120),
    logo_glyph: "◈",
    page_fill: Color32::from_rgb(14, 22, 18),
    panel_fill: Color32::from_rgb(20, 32, 26),
    heading: Color32::from_rgb(235, 245, 238),
    label: Color32::from_rgb(160, 185, 170),
    link: Color32::from_rgb(110, 230, 160),
};

impl ThemeId {
    pub const fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Blue => &THEME_BLUE,
            Self::Green => &THEME_GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_theme_is_blue() {
        assert_eq!(ThemeId::default(), ThemeId::Blue);
    }

    #[test]
    fn every_theme_has_a_distinct_palette() {
        let mut accents = Vec::new();
        for theme in ThemeId::iter() {
            let palette = theme.palette();
            assert!(!palette.name.is_empty());
            assert!(!palette.logo_glyph.is_empty());
            assert!(!accents.contains(&palette.main));
            accents.push(palette.main);
        }
    }
}
