use crate::color::{ColorValue, LIGHT_LUMINANCE_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Overall brightness class of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Classify by relative luminance. Exactly at the threshold is `Dark`.
    pub fn from_luminance(luminance: f64) -> Self {
        if luminance > LIGHT_LUMINANCE_THRESHOLD {
            ThemeKind::Light
        } else {
            ThemeKind::Dark
        }
    }

    /// Map a declared `type` value (VS Code spellings included).
    pub fn from_declared(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" | "vs" | "hc-light" | "hclight" => Some(ThemeKind::Light),
            "dark" | "vs-dark" | "hc" | "hc-black" | "hcdark" => Some(ThemeKind::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeKind::Dark
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeKind::Light => f.write_str("light"),
            ThemeKind::Dark => f.write_str("dark"),
        }
    }
}

/// Text style flags of a token rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStyle {
    pub italic: bool,
    pub bold: bool,
    pub underline: bool,
}

impl FontStyle {
    /// Parse a space-separated `fontStyle` value. Unknown words are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut style = FontStyle::default();
        for word in raw.split_whitespace() {
            match word {
                "italic" => style.italic = true,
                "bold" => style.bold = true,
                "underline" => style.underline = true,
                _ => {}
            }
        }
        style
    }

    pub fn is_empty(&self) -> bool {
        !(self.italic || self.bold || self.underline)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSettings {
    pub foreground: Option<ColorValue>,
    pub background: Option<ColorValue>,
    pub font_style: FontStyle,
}

impl TokenSettings {
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.font_style.is_empty()
    }
}

/// One syntax-highlight rule: a set of TextMate scopes and their styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRule {
    pub scopes: Vec<String>,
    pub settings: TokenSettings,
}

/// A diagnostic recorded while normalizing a document.
///
/// Warnings never cause rejection; they are kept on the loaded document for
/// the `check` front end and debug logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationWarning {
    NonStringColor { role: String },
    UnnormalizedColor { role: String, value: String },
    MalformedTokenRule { index: usize, reason: String },
    UnnormalizedTokenColor { index: usize, value: String },
    NonStringField { field: String },
    UnknownKind { value: String },
    KindNotInferable,
    MissingRecommendedRole { role: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::NonStringColor { role } => {
                write!(f, "color '{role}' is not a string and was dropped")
            }
            ValidationWarning::UnnormalizedColor { role, value } => {
                write!(f, "color '{role}' has non-hex value '{value}' (kept as-is)")
            }
            ValidationWarning::MalformedTokenRule { index, reason } => {
                write!(f, "token rule #{index} dropped: {reason}")
            }
            ValidationWarning::UnnormalizedTokenColor { index, value } => {
                write!(f, "token rule #{index} has non-hex color '{value}' (kept as-is)")
            }
            ValidationWarning::NonStringField { field } => {
                write!(f, "field '{field}' is not a string and was ignored")
            }
            ValidationWarning::UnknownKind { value } => {
                write!(f, "unknown theme type '{value}', inferring from background")
            }
            ValidationWarning::KindNotInferable => {
                write!(f, "base colors are not hex, assuming a dark theme")
            }
            ValidationWarning::MissingRecommendedRole { role } => {
                write!(f, "recommended color '{role}' is missing")
            }
        }
    }
}

/// A loaded, normalized theme. Immutable once the registry has inserted it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub id: String,
    pub display_name: String,
    pub kind: ThemeKind,
    pub colors: HashMap<String, ColorValue>,
    pub token_rules: Vec<TokenRule>,
    #[serde(default)]
    pub warnings: Vec<ValidationWarning>,
}

impl ThemeDocument {
    pub fn color(&self, role: &str) -> Option<&ColorValue> {
        self.colors.get(role)
    }
}
