pub const ICON_ARROW: &str = "\u{2192}"; // →

pub struct UiText {
    pub theme_picker_label: &'static str,
    /// Teaser under the final block, nudging at the hidden section.
    pub secret_hint: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    theme_picker_label: "Scheme:",
    secret_hint: "(there is no more page down there. or is there?)",
};
