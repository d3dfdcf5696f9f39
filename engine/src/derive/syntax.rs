use crate::theme::{TokenRule, TokenSettings};
use std::fmt;

/// Syntax categories the content surface exposes as CSS classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    Comment,
    String,
    Keyword,
    Variable,
    Function,
    Number,
    Operator,
    Constant,
    Class,
    Type,
}

impl SyntaxCategory {
    pub fn class_name(self) -> &'static str {
        match self {
            SyntaxCategory::Comment => "comment",
            SyntaxCategory::String => "string",
            SyntaxCategory::Keyword => "keyword",
            SyntaxCategory::Variable => "variable",
            SyntaxCategory::Function => "function",
            SyntaxCategory::Number => "number",
            SyntaxCategory::Operator => "operator",
            SyntaxCategory::Constant => "constant",
            SyntaxCategory::Class => "class",
            SyntaxCategory::Type => "type",
        }
    }

    /// Class highlight.js puts on tokens of this category.
    pub fn highlight_class(self) -> &'static str {
        match self {
            SyntaxCategory::Constant => "literal",
            other => other.class_name(),
        }
    }
}

impl fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// Scope prefixes in match order. More specific prefixes come before the
/// general ones they would otherwise be shadowed by.
const SCOPE_PREFIXES: &[(&str, SyntaxCategory)] = &[
    ("punctuation.definition.comment", SyntaxCategory::Comment),
    ("comment", SyntaxCategory::Comment),
    ("string", SyntaxCategory::String),
    ("keyword.operator", SyntaxCategory::Operator),
    ("punctuation.operator", SyntaxCategory::Operator),
    ("keyword", SyntaxCategory::Keyword),
    ("storage.type", SyntaxCategory::Type),
    ("storage", SyntaxCategory::Keyword),
    ("variable", SyntaxCategory::Variable),
    ("entity.name.function", SyntaxCategory::Function),
    ("support.function", SyntaxCategory::Function),
    ("meta.function-call", SyntaxCategory::Function),
    ("constant.numeric", SyntaxCategory::Number),
    ("constant.language.numeric", SyntaxCategory::Number),
    ("constant", SyntaxCategory::Constant),
    ("support.constant", SyntaxCategory::Constant),
    ("entity.name.type.class", SyntaxCategory::Class),
    ("entity.name.class", SyntaxCategory::Class),
    ("support.class", SyntaxCategory::Class),
    ("entity.name.type", SyntaxCategory::Type),
    ("support.type", SyntaxCategory::Type),
];

fn scope_matches(scope: &str, prefix: &str) -> bool {
    scope
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

/// Category of a token rule: the first scope, in rule order, that matches a
/// known prefix decides.
pub fn categorize(rule: &TokenRule) -> Option<SyntaxCategory> {
    rule.scopes.iter().find_map(|scope| {
        // Descendant selectors like "meta.tag string" match on their last part.
        let scope = scope.split_whitespace().last()?;
        SCOPE_PREFIXES
            .iter()
            .find(|(prefix, _)| scope_matches(scope, prefix))
            .map(|(_, category)| *category)
    })
}

fn declarations(settings: &TokenSettings) -> Vec<String> {
    let mut declarations = Vec::new();
    if let Some(foreground) = &settings.foreground {
        declarations.push(format!("color: {foreground} !important"));
    }
    if let Some(background) = &settings.background {
        declarations.push(format!("background-color: {background} !important"));
    }
    if settings.font_style.italic {
        declarations.push("font-style: italic".to_string());
    }
    if settings.font_style.bold {
        declarations.push("font-weight: bold".to_string());
    }
    if settings.font_style.underline {
        declarations.push("text-decoration: underline".to_string());
    }
    declarations
}

/// Append the syntax block for the given token rules.
///
/// Rules with no known category or no styling are dropped silently.
pub fn emit_syntax_block(out: &mut String, rules: &[TokenRule]) {
    out.push_str("/* syntax highlighting */\n");
    for rule in rules {
        let Some(category) = categorize(rule) else {
            continue;
        };
        let declarations = declarations(&rule.settings);
        if declarations.is_empty() {
            continue;
        }
        out.push_str(&format!(
            ".card .hljs-{}, .card .{category}, .card .cm-{category} {{ {}; }}\n",
            category.highlight_class(),
            declarations.join("; ")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;
    use crate::theme::FontStyle;

    fn rule(scopes: &[&str], foreground: Option<&str>) -> TokenRule {
        TokenRule {
            scopes: scopes.iter().map(|s| (*s).to_string()).collect(),
            settings: TokenSettings {
                foreground: foreground.map(ColorValue::parse),
                background: None,
                font_style: FontStyle::default(),
            },
        }
    }

    #[test]
    fn test_specific_prefix_wins() {
        assert_eq!(
            categorize(&rule(&["keyword.operator.assignment"], None)),
            Some(SyntaxCategory::Operator)
        );
        assert_eq!(
            categorize(&rule(&["keyword.control"], None)),
            Some(SyntaxCategory::Keyword)
        );
        assert_eq!(
            categorize(&rule(&["constant.numeric.integer"], None)),
            Some(SyntaxCategory::Number)
        );
        assert_eq!(
            categorize(&rule(&["entity.name.type.class"], None)),
            Some(SyntaxCategory::Class)
        );
    }

    #[test]
    fn test_constant_uses_highlight_literal_class() {
        let mut out = String::new();
        emit_syntax_block(&mut out, &[rule(&["constant.language"], Some("#D19A66"))]);
        assert!(out.contains(".card .hljs-literal, .card .constant, .card .cm-constant"));
        assert!(!out.contains("hljs-constant"));
    }

    #[test]
    fn test_first_matching_scope_decides() {
        assert_eq!(
            categorize(&rule(&["markup.heading", "string.quoted", "comment"], None)),
            Some(SyntaxCategory::String)
        );
    }

    #[test]
    fn test_prefix_respects_segment_boundary() {
        assert_eq!(categorize(&rule(&["constantly.odd"], None)), None);
        assert_eq!(categorize(&rule(&["markup.bold"], None)), None);
    }

    #[test]
    fn test_descendant_scope_uses_last_part() {
        assert_eq!(
            categorize(&rule(&["meta.embedded string.quoted"], None)),
            Some(SyntaxCategory::String)
        );
    }

    #[test]
    fn test_block_drops_unknown_and_empty_rules() {
        let mut out = String::new();
        emit_syntax_block(
            &mut out,
            &[
                rule(&["markup.italic"], Some("#FF0000")),
                rule(&["comment"], None),
                rule(&["comment"], Some("#5C6370")),
            ],
        );
        assert_eq!(
            out,
            "/* syntax highlighting */\n\
             .card .hljs-comment, .card .comment, .card .cm-comment { color: #5C6370 !important; }\n"
        );
    }
}
