use crate::color::ColorValue;
use crate::theme::ThemeDocument;
use std::collections::HashMap;

/// One semantic role a surface needs, with its fallback chain.
///
/// Resolution: the theme's own value for `role`, else its value for
/// `fallback`, else `literal`. Blank theme values count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEntry {
    pub role: &'static str,
    pub fallback: Option<&'static str>,
    pub literal: &'static str,
}

// Builds a `&[RoleEntry]` from `"role" [or "fallback"] => "#LITERAL"` lines.
macro_rules! role_table {
    (@fallback) => {
        None
    };
    (@fallback $fallback:literal) => {
        Some($fallback)
    };
    ($($role:literal $(or $fallback:literal)? => $literal:literal),* $(,)?) => {
        &[$(RoleEntry {
            role: $role,
            fallback: role_table!(@fallback $($fallback)?),
            literal: $literal,
        }),*]
    };
}

pub const CONTENT_ROLES: &[RoleEntry] = role_table![
    "editor.background" => "#282C34",
    "editor.foreground" => "#ABB2BF",
    "editorGroup.border" or "panel.border" => "#181A1F",
    "editor.lineHighlightBackground" or "list.hoverBackground" => "#2C313C",
    "editor.selectionBackground" => "#3E4451",
    "editor.selectionForeground" or "editor.foreground" => "#FFFFFF",
    "textLink.foreground" or "terminal.ansiBlue" => "#61AFEF",
    "textLink.activeForeground" or "textLink.foreground" => "#528BFF",
    "terminal.ansiCyan" or "focusBorder" => "#56B6C2",
    "input.background" or "dropdown.background" => "#1E2227",
    "input.foreground" or "editor.foreground" => "#ABB2BF",
    "input.border" or "editorGroup.border" => "#181A1F",
    "focusBorder" => "#007ACC",
    "button.background" => "#404754",
    "button.foreground" => "#FFFFFF",
    "button.hoverBackground" or "list.hoverBackground" => "#2C323C",
    "scrollbarSlider.background" => "#4E566680",
    "scrollbarSlider.hoverBackground" or "scrollbarSlider.background" => "#5A637580",
];

pub const CHROME_ROLES: &[RoleEntry] = role_table![
    "editor.background" => "#282C34",
    "editor.foreground" => "#ABB2BF",
    "editorGroup.border" or "panel.border" => "#181A1F",
    "editor.selectionBackground" => "#3E4451",
    "editor.selectionForeground" or "editor.foreground" => "#FFFFFF",
    "editorWidget.background" or "sideBar.background" => "#21252B",
    "button.background" => "#404754",
    "button.foreground" => "#FFFFFF",
    "button.hoverBackground" or "list.hoverBackground" => "#2C323C",
    "disabledForeground" or "tab.inactiveForeground" => "#5C6370",
    "input.background" or "dropdown.background" => "#1E2227",
    "input.foreground" or "editor.foreground" => "#ABB2BF",
    "input.border" or "editorGroup.border" => "#181A1F",
    "sideBar.background" => "#21252B",
    "sideBar.foreground" or "editor.foreground" => "#ABB2BF",
    "list.hoverBackground" => "#2C323C",
    "list.activeSelectionBackground" or "editor.selectionBackground" => "#2C323C",
    "list.activeSelectionForeground" or "editor.foreground" => "#D7DAE0",
    "tab.inactiveBackground" or "sideBar.background" => "#21252B",
    "tab.inactiveForeground" => "#5C6370",
    "tab.activeBackground" or "editor.background" => "#282C34",
    "tab.activeForeground" or "editor.foreground" => "#D7DAE0",
    "tab.border" or "editorGroup.border" => "#181A1F",
    "titleBar.activeBackground" or "editor.background" => "#282C34",
    "titleBar.activeForeground" or "editor.foreground" => "#ABB2BF",
    "menu.background" or "editorWidget.background" => "#21252B",
    "menu.foreground" or "editor.foreground" => "#ABB2BF",
    "menu.selectionBackground" or "list.activeSelectionBackground" => "#2C323C",
    "statusBar.background" => "#007ACC",
    "statusBar.foreground" => "#FFFFFF",
    "scrollbarSlider.background" => "#4E566680",
    "scrollbarSlider.hoverBackground" or "scrollbarSlider.background" => "#5A637580",
    "focusBorder" => "#007ACC",
    "checkbox.background" or "focusBorder" => "#007ACC",
    "progressBar.background" or "focusBorder" => "#007ACC",
];

pub const RESTRICTED_ROLES: &[RoleEntry] = role_table![
    "editor.background" => "#282C34",
    "editor.foreground" => "#ABB2BF",
    "button.background" => "#404754",
    "button.foreground" => "#FFFFFF",
    "input.background" or "dropdown.background" => "#1E2227",
    "input.foreground" or "editor.foreground" => "#ABB2BF",
    "input.border" or "editorGroup.border" => "#181A1F",
    "focusBorder" => "#007ACC",
];

/// Role values resolved for one theme and surface.
pub type ResolvedRoles = HashMap<&'static str, String>;

fn lookup<'a>(theme: &'a ThemeDocument, role: &str) -> Option<&'a str> {
    theme
        .color(role)
        .map(ColorValue::as_str)
        .filter(|value| !value.trim().is_empty())
}

/// Resolve a single role through its fallback chain.
pub fn resolve_role<'a>(theme: &'a ThemeDocument, entry: &'a RoleEntry) -> &'a str {
    lookup(theme, entry.role)
        .or_else(|| entry.fallback.and_then(|fallback| lookup(theme, fallback)))
        .unwrap_or(entry.literal)
}

/// Resolve every role of a table.
pub fn resolve_roles(theme: &ThemeDocument, table: &'static [RoleEntry]) -> ResolvedRoles {
    table
        .iter()
        .map(|entry| (entry.role, resolve_role(theme, entry).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeKind;

    fn theme(colors: &[(&str, &str)]) -> ThemeDocument {
        ThemeDocument {
            id: "t".to_string(),
            display_name: "t".to_string(),
            kind: ThemeKind::Dark,
            colors: colors
                .iter()
                .map(|(role, value)| ((*role).to_string(), ColorValue::parse(value)))
                .collect(),
            token_rules: Vec::new(),
            warnings: Vec::new(),
        }
    }

    const ENTRY: RoleEntry = RoleEntry {
        role: "input.border",
        fallback: Some("editorGroup.border"),
        literal: "#181A1F",
    };

    #[test]
    fn test_own_value_first() {
        let theme = theme(&[("input.border", "#111"), ("editorGroup.border", "#222")]);
        assert_eq!(resolve_role(&theme, &ENTRY), "#111111");
    }

    #[test]
    fn test_fallback_role_second() {
        let theme = theme(&[("editorGroup.border", "#222")]);
        assert_eq!(resolve_role(&theme, &ENTRY), "#222222");
    }

    #[test]
    fn test_literal_last() {
        let theme = theme(&[("input.border", "  ")]);
        assert_eq!(resolve_role(&theme, &ENTRY), "#181A1F");
    }

    #[test]
    fn test_tables_have_unique_roles_and_literals() {
        for table in [CONTENT_ROLES, CHROME_ROLES, RESTRICTED_ROLES] {
            let mut seen = std::collections::HashSet::new();
            for entry in table {
                assert!(seen.insert(entry.role), "duplicate role {}", entry.role);
                assert!(
                    ColorValue::parse(entry.literal).is_normalized(),
                    "literal for {} is not canonical",
                    entry.role
                );
                assert_eq!(ColorValue::parse(entry.literal).as_str(), entry.literal);
            }
        }
    }
}
