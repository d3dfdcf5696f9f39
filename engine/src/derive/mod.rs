//! # Derivation Engine
//!
//! Pure mapping from a theme document and a context tag to style text.
//!
//! Each [`Surface`] owns a role table (which semantic roles it needs and how
//! each falls back) and a fixed rule template. Derivation resolves the role
//! table against the theme, emits the template, appends the syntax block when
//! the surface carries one and the theme has token rules, and finally appends
//! the user's override text verbatim.

pub mod roles;
pub mod surfaces;
pub mod syntax;
pub mod template;

use crate::common::DerivationError;
use crate::derive::roles::{CHROME_ROLES, CONTENT_ROLES, RESTRICTED_ROLES, RoleEntry, resolve_roles};
use crate::derive::surfaces::{CHROME_RULES, CONTENT_RULES, RESTRICTED_RULES};
use crate::derive::syntax::emit_syntax_block;
use crate::derive::template::{Rule, emit_rules};
use crate::theme::ThemeDocument;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output surfaces known to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Surface {
    #[serde(rename = "content-surface")]
    Content,
    #[serde(rename = "chrome-surface")]
    Chrome,
    #[serde(rename = "restricted-surface")]
    Restricted,
}

impl Surface {
    pub const ALL: [Surface; 3] = [Surface::Content, Surface::Chrome, Surface::Restricted];

    pub fn tag(self) -> &'static str {
        match self {
            Surface::Content => "content-surface",
            Surface::Chrome => "chrome-surface",
            Surface::Restricted => "restricted-surface",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Surface::ALL.into_iter().find(|surface| surface.tag() == tag)
    }

    /// The role table and template that define this surface.
    pub fn definition(self) -> &'static SurfaceDefinition {
        match self {
            Surface::Content => &CONTENT,
            Surface::Chrome => &CHROME,
            Surface::Restricted => &RESTRICTED,
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Static description of one surface.
#[derive(Debug)]
pub struct SurfaceDefinition {
    pub roles: &'static [RoleEntry],
    pub rules: &'static [Rule],
    /// Mark color declarations `!important`.
    pub important: bool,
    /// Append the token-rule syntax block.
    pub syntax: bool,
}

static CONTENT: SurfaceDefinition = SurfaceDefinition {
    roles: CONTENT_ROLES,
    rules: CONTENT_RULES,
    important: true,
    syntax: true,
};

static CHROME: SurfaceDefinition = SurfaceDefinition {
    roles: CHROME_ROLES,
    rules: CHROME_RULES,
    important: false,
    syntax: false,
};

static RESTRICTED: SurfaceDefinition = SurfaceDefinition {
    roles: RESTRICTED_ROLES,
    rules: RESTRICTED_RULES,
    important: true,
    syntax: false,
};

/// Stateless style derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DerivationEngine;

impl DerivationEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive the artifact for a context tag.
    ///
    /// An unknown tag yields an empty artifact, meaning "nothing to apply".
    pub fn derive(
        &self,
        theme: &ThemeDocument,
        context: &str,
        override_text: &str,
    ) -> Result<String, DerivationError> {
        match Surface::from_tag(context) {
            Some(surface) => self.derive_surface(theme, surface, override_text),
            None => {
                log::debug!("No role table for context '{context}', deriving nothing");
                Ok(String::new())
            }
        }
    }

    pub fn derive_surface(
        &self,
        theme: &ThemeDocument,
        surface: Surface,
        override_text: &str,
    ) -> Result<String, DerivationError> {
        let definition = surface.definition();
        let roles = resolve_roles(theme, definition.roles);

        let mut out = String::with_capacity(4096);
        out.push_str(&format!("/* chromaport {surface}: {} */\n", theme.id));
        emit_rules(
            &mut out,
            definition.rules,
            &roles,
            surface.tag(),
            definition.important,
        )?;

        if definition.syntax && !theme.token_rules.is_empty() {
            emit_syntax_block(&mut out, &theme.token_rules);
        }

        if !override_text.is_empty() {
            out.push_str("/* user overrides */\n");
            out.push_str(override_text);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;
    use crate::theme::palette::fallback_theme;
    use crate::theme::{FontStyle, ThemeKind, TokenRule, TokenSettings};

    fn minimal_theme() -> ThemeDocument {
        ThemeDocument {
            id: "minimal".to_string(),
            display_name: "Minimal".to_string(),
            kind: ThemeKind::Dark,
            colors: [
                ("editor.background", "#111111"),
                ("editor.foreground", "#EEEEEE"),
            ]
            .into_iter()
            .map(|(role, value)| (role.to_string(), ColorValue::parse(value)))
            .collect(),
            token_rules: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_tags_round_trip() {
        for surface in Surface::ALL {
            assert_eq!(Surface::from_tag(surface.tag()), Some(surface));
        }
        assert_eq!(Surface::from_tag("sidebar-surface"), None);
    }

    #[test]
    fn test_unknown_context_is_empty() {
        let engine = DerivationEngine::new();
        let artifact = engine
            .derive(&minimal_theme(), "sidebar-surface", "body{}")
            .unwrap();
        assert!(artifact.is_empty());
    }

    #[test]
    fn test_every_surface_resolves_minimal_theme() {
        let engine = DerivationEngine::new();
        let theme = minimal_theme();
        for surface in Surface::ALL {
            let artifact = engine.derive_surface(&theme, surface, "").unwrap();
            assert!(!artifact.contains("{editor"), "{surface} left a placeholder");
            assert!(artifact.contains("#111111"), "{surface} lost the background");
        }
    }

    #[test]
    fn test_override_is_last() {
        let engine = DerivationEngine::new();
        let override_text = "body{background:#222222 !important}";
        let artifact = engine
            .derive_surface(&minimal_theme(), Surface::Chrome, override_text)
            .unwrap();

        assert!(artifact.ends_with(override_text));
        let last_derived = artifact.rfind("#111111").unwrap();
        assert!(last_derived < artifact.find(override_text).unwrap());
    }

    #[test]
    fn test_syntax_block_only_on_content() {
        let engine = DerivationEngine::new();
        let mut theme = fallback_theme();
        theme.token_rules.push(TokenRule {
            scopes: vec!["comment".to_string()],
            settings: TokenSettings {
                foreground: Some(ColorValue::parse("#5c6370")),
                background: None,
                font_style: FontStyle::parse("italic"),
            },
        });

        let content = engine.derive_surface(&theme, Surface::Content, "").unwrap();
        assert!(content.contains(".card .hljs-comment"));
        assert!(content.contains("font-style: italic"));

        for surface in [Surface::Chrome, Surface::Restricted] {
            let artifact = engine.derive_surface(&theme, surface, "").unwrap();
            assert!(!artifact.contains("hljs"));
        }
    }

    #[test]
    fn test_content_marks_colors_important_chrome_does_not() {
        let engine = DerivationEngine::new();
        let theme = minimal_theme();
        let content = engine.derive_surface(&theme, Surface::Content, "").unwrap();
        let chrome = engine.derive_surface(&theme, Surface::Chrome, "").unwrap();

        assert!(content.contains("background-color: #111111 !important;"));
        assert!(!chrome.contains("!important"));
    }
}
