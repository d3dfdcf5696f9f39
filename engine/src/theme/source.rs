use serde_json::Value;

/// One entry of a theme source collection.
///
/// Sources either hand over an already parsed JSON value or the raw text,
/// which the registry parses itself so that syntax errors land in the skip
/// list like any other load failure.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    name: String,
    payload: Payload,
}

#[derive(Debug, Clone)]
pub(crate) enum Payload {
    Parsed(Value),
    Text(String),
}

impl SourceDocument {
    pub fn parsed(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            payload: Payload::Parsed(value),
        }
    }

    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: Payload::Text(text.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (String, Payload) {
        (self.name, self.payload)
    }
}
