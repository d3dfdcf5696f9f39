use crate::color::ColorValue;
use crate::common::LoadErrorReason;
use crate::theme::types::{
    FontStyle, ThemeDocument, ThemeKind, TokenRule, TokenSettings, ValidationWarning,
};
use crate::validation::Validator;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const BACKGROUND_ROLE: &str = "editor.background";
pub const FOREGROUND_ROLE: &str = "editor.foreground";

/// Maximum theme id length.
pub const MAX_THEME_ID_LEN: usize = 64;

/// Roles every well-formed theme should define. Missing ones only warn.
const RECOMMENDED_ROLES: &[&str] = &[
    "editor.selectionBackground",
    "editor.lineHighlightBackground",
    "sideBar.background",
    "statusBar.background",
    "button.background",
    "input.background",
];

/// Derive a theme id from a source name such as `One Dark Pro.json`.
pub fn slugify(source_name: &str) -> String {
    let file_name = source_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(source_name);
    let stem = match file_name.len().checked_sub(5) {
        Some(cut)
            if file_name.is_char_boundary(cut)
                && file_name[cut..].eq_ignore_ascii_case(".json") =>
        {
            &file_name[..cut]
        }
        _ => file_name,
    };

    let mut slug = String::with_capacity(stem.len());
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

/// Validator for theme ids
pub struct ThemeIdValidator;

impl Validator<str> for ThemeIdValidator {
    type Error = LoadErrorReason;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(LoadErrorReason::InvalidId(
                "source name contains no letters or digits".to_string(),
            ));
        }

        if input.len() > MAX_THEME_ID_LEN {
            return Err(LoadErrorReason::InvalidId(format!(
                "id too long (max {MAX_THEME_ID_LEN} characters)"
            )));
        }

        if !input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(LoadErrorReason::InvalidId(format!(
                "'{input}' contains characters other than lowercase letters, digits and underscores"
            )));
        }

        if input.starts_with('_') || input.ends_with('_') {
            return Err(LoadErrorReason::InvalidId(format!(
                "'{input}' cannot start or end with an underscore"
            )));
        }

        Ok(())
    }
}

/// Structural gate for raw documents.
///
/// Only the envelope and the base color pair are checked here; everything
/// else is normalized with warnings by [`normalize_document`].
pub struct DocumentValidator;

impl Validator<Value> for DocumentValidator {
    type Error = LoadErrorReason;

    fn validate(&self, input: &Value) -> Result<(), Self::Error> {
        let object = input.as_object().ok_or(LoadErrorReason::NotAnObject)?;
        let colors = object
            .get("colors")
            .and_then(Value::as_object)
            .ok_or(LoadErrorReason::MissingColors)?;

        let usable = |role: &str| {
            colors
                .get(role)
                .and_then(Value::as_str)
                .is_some_and(|value| !value.trim().is_empty())
        };
        if !usable(BACKGROUND_ROLE) && !usable(FOREGROUND_ROLE) {
            return Err(LoadErrorReason::MissingBaseColors);
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct RawThemeDocument {
    #[serde(default, alias = "displayName")]
    name: Option<Value>,
    #[serde(default, rename = "type", alias = "kind")]
    kind: Option<Value>,
    colors: Map<String, Value>,
    #[serde(default, rename = "tokenColors", alias = "tokenRules")]
    token_colors: Option<Value>,
}

/// Turn a validated raw document into a [`ThemeDocument`].
///
/// Callers must run [`DocumentValidator`] first.
pub fn normalize_document(id: &str, value: Value) -> Result<ThemeDocument, LoadErrorReason> {
    let raw: RawThemeDocument =
        serde_json::from_value(value).map_err(|e| LoadErrorReason::Shape(e.to_string()))?;
    let mut warnings = Vec::new();

    let colors = normalize_colors(raw.colors, &mut warnings);
    let token_rules = normalize_token_rules(raw.token_colors, &mut warnings);

    let display_name = match raw.name {
        Some(Value::String(name)) if !name.trim().is_empty() => name.trim().to_string(),
        Some(Value::String(_)) | Some(Value::Null) | None => id.to_string(),
        Some(_) => {
            warnings.push(ValidationWarning::NonStringField {
                field: "name".to_string(),
            });
            id.to_string()
        }
    };

    let declared = match raw.kind {
        Some(Value::String(kind)) => {
            let parsed = ThemeKind::from_declared(&kind);
            if parsed.is_none() {
                warnings.push(ValidationWarning::UnknownKind { value: kind });
            }
            parsed
        }
        Some(Value::Null) | None => None,
        Some(_) => {
            warnings.push(ValidationWarning::NonStringField {
                field: "type".to_string(),
            });
            None
        }
    };
    let kind = match declared {
        Some(kind) => kind,
        None => infer_kind(&colors).unwrap_or_else(|| {
            warnings.push(ValidationWarning::KindNotInferable);
            ThemeKind::Dark
        }),
    };

    for role in RECOMMENDED_ROLES {
        if !colors.contains_key(*role) {
            warnings.push(ValidationWarning::MissingRecommendedRole {
                role: (*role).to_string(),
            });
        }
    }

    Ok(ThemeDocument {
        id: id.to_string(),
        display_name,
        kind,
        colors,
        token_rules,
        warnings,
    })
}

/// Classify by background luminance, or by an inverted foreground when the
/// theme only declares a foreground.
fn infer_kind(colors: &HashMap<String, ColorValue>) -> Option<ThemeKind> {
    if let Some(luminance) = colors.get(BACKGROUND_ROLE).and_then(ColorValue::luminance) {
        return Some(ThemeKind::from_luminance(luminance));
    }
    let luminance = colors
        .get(FOREGROUND_ROLE)
        .and_then(ColorValue::luminance)?;
    Some(match ThemeKind::from_luminance(luminance) {
        ThemeKind::Light => ThemeKind::Dark,
        ThemeKind::Dark => ThemeKind::Light,
    })
}

fn normalize_colors(
    raw: Map<String, Value>,
    warnings: &mut Vec<ValidationWarning>,
) -> HashMap<String, ColorValue> {
    let mut colors = HashMap::with_capacity(raw.len());
    for (role, value) in raw {
        match value {
            Value::String(text) => {
                let color = ColorValue::parse(&text);
                if !color.is_normalized() {
                    warnings.push(ValidationWarning::UnnormalizedColor {
                        role: role.clone(),
                        value: text,
                    });
                }
                colors.insert(role, color);
            }
            _ => warnings.push(ValidationWarning::NonStringColor { role }),
        }
    }
    colors
}

fn normalize_token_rules(
    raw: Option<Value>,
    warnings: &mut Vec<ValidationWarning>,
) -> Vec<TokenRule> {
    let entries = match raw {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            warnings.push(ValidationWarning::NonStringField {
                field: "tokenColors".to_string(),
            });
            return Vec::new();
        }
    };

    let mut rules = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match normalize_token_rule(index, &entry, warnings) {
            Ok(rule) => rules.push(rule),
            Err(reason) => warnings.push(ValidationWarning::MalformedTokenRule { index, reason }),
        }
    }
    rules
}

fn normalize_token_rule(
    index: usize,
    entry: &Value,
    warnings: &mut Vec<ValidationWarning>,
) -> Result<TokenRule, String> {
    let object = entry
        .as_object()
        .ok_or_else(|| "rule is not an object".to_string())?;

    let scopes: Vec<String> = match object.get("scope") {
        Some(Value::String(scope)) => split_scopes(scope),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .flat_map(split_scopes)
            .collect(),
        Some(_) => return Err("`scope` is neither a string nor an array".to_string()),
        None => return Err("missing `scope`".to_string()),
    };
    if scopes.is_empty() {
        return Err("`scope` is empty".to_string());
    }

    let settings = object
        .get("settings")
        .and_then(Value::as_object)
        .ok_or_else(|| "missing `settings` object".to_string())?;

    let mut token_color = |key: &str| {
        let text = settings.get(key).and_then(Value::as_str)?;
        let color = ColorValue::parse(text);
        if !color.is_normalized() {
            warnings.push(ValidationWarning::UnnormalizedTokenColor {
                index,
                value: text.to_string(),
            });
        }
        Some(color)
    };
    let foreground = token_color("foreground");
    let background = token_color("background");
    let font_style = settings
        .get("fontStyle")
        .and_then(Value::as_str)
        .map(FontStyle::parse)
        .unwrap_or_default();

    Ok(TokenRule {
        scopes,
        settings: TokenSettings {
            foreground,
            background,
            font_style,
        },
    })
}

fn split_scopes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}
