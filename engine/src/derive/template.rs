use crate::common::DerivationError;
use crate::derive::roles::ResolvedRoles;

/// A fixed style rule: a selector list and its declarations.
///
/// Declaration values may reference roles as `{role.key}`; every reference
/// must be declared in the surface's role table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub selectors: &'static str,
    pub declarations: &'static [(&'static str, &'static str)],
}

impl Rule {
    pub const fn new(
        selectors: &'static str,
        declarations: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            selectors,
            declarations,
        }
    }
}

/// Substitute `{role}` references in a declaration value.
///
/// Returns the substituted value and whether it referenced any role.
pub fn substitute(
    template: &str,
    roles: &ResolvedRoles,
    context: &str,
) -> Result<(String, bool), DerivationError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut referenced = false;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let end = after
            .find('}')
            .ok_or_else(|| DerivationError::UndeclaredRole {
                context: context.to_string(),
                role: after.to_string(),
            })?;
        let role = &after[..end];
        let value = roles
            .get(role)
            .ok_or_else(|| DerivationError::UndeclaredRole {
                context: context.to_string(),
                role: role.to_string(),
            })?;
        if value.trim().is_empty() {
            return Err(DerivationError::UnresolvedRole {
                context: context.to_string(),
                role: role.to_string(),
            });
        }
        out.push_str(value);
        referenced = true;
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok((out, referenced))
}

/// Append rules to `out`.
///
/// With `important`, declarations that carry a theme color get `!important`;
/// layout declarations never do.
pub fn emit_rules(
    out: &mut String,
    rules: &[Rule],
    roles: &ResolvedRoles,
    context: &str,
    important: bool,
) -> Result<(), DerivationError> {
    for rule in rules {
        out.push_str(rule.selectors);
        out.push_str(" {\n");
        for (property, template) in rule.declarations {
            let (value, referenced) = substitute(template, roles, context)?;
            let suffix = if important && referenced {
                " !important"
            } else {
                ""
            };
            out.push_str(&format!("  {property}: {value}{suffix};\n"));
        }
        out.push_str("}\n");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> ResolvedRoles {
        ResolvedRoles::from([
            ("editor.background", "#282C34".to_string()),
            ("editorGroup.border", "#181A1F".to_string()),
        ])
    }

    #[test]
    fn test_substitute_roles() {
        let (value, referenced) =
            substitute("1px solid {editorGroup.border}", &roles(), "ctx").unwrap();
        assert_eq!(value, "1px solid #181A1F");
        assert!(referenced);

        let (value, referenced) = substitute("12px", &roles(), "ctx").unwrap();
        assert_eq!(value, "12px");
        assert!(!referenced);
    }

    #[test]
    fn test_undeclared_role_fails_loudly() {
        let error = substitute("{tab.border}", &roles(), "ctx").unwrap_err();
        assert_eq!(
            error,
            DerivationError::UndeclaredRole {
                context: "ctx".to_string(),
                role: "tab.border".to_string()
            }
        );
        assert!(substitute("{editor.background", &roles(), "ctx").is_err());
    }

    #[test]
    fn test_empty_resolution_fails_loudly() {
        let roles = ResolvedRoles::from([("focusBorder", String::new())]);
        assert!(matches!(
            substitute("{focusBorder}", &roles, "ctx"),
            Err(DerivationError::UnresolvedRole { .. })
        ));
    }

    #[test]
    fn test_emit_marks_only_color_declarations_important() {
        const RULES: &[Rule] = &[Rule::new(
            "pre",
            &[
                ("background-color", "{editor.background}"),
                ("padding", "1em"),
            ],
        )];
        let mut out = String::new();
        emit_rules(&mut out, RULES, &roles(), "ctx", true).unwrap();
        assert_eq!(
            out,
            "pre {\n  background-color: #282C34 !important;\n  padding: 1em;\n}\n"
        );
    }
}
