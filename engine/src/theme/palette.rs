use crate::color::ColorValue;
use crate::theme::types::{ThemeDocument, ThemeKind};

pub const FALLBACK_THEME_ID: &str = "default_dark";
pub const FALLBACK_THEME_NAME: &str = "Default Dark";

/// Colors of the synthesized fallback theme, keyed by semantic role.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("editor.background", "#282C34"),
    ("editor.foreground", "#ABB2BF"),
    ("editorGroup.border", "#181A1F"),
    ("button.background", "#404754"),
    ("button.foreground", "#FFFFFF"),
    ("input.background", "#1E2227"),
    ("sideBar.background", "#21252B"),
    ("list.hoverBackground", "#2C323C"),
    ("focusBorder", "#007ACC"),
    ("editor.selectionBackground", "#3E4451"),
];

/// The built-in theme used when a load yields nothing usable.
pub fn fallback_theme() -> ThemeDocument {
    ThemeDocument {
        id: FALLBACK_THEME_ID.to_string(),
        display_name: FALLBACK_THEME_NAME.to_string(),
        kind: ThemeKind::Dark,
        colors: DEFAULT_PALETTE
            .iter()
            .map(|(role, value)| ((*role).to_string(), ColorValue::parse(value)))
            .collect(),
        token_rules: Vec::new(),
        warnings: Vec::new(),
    }
}
