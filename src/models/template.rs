use serde::{Deserialize, Serialize};

/// Message text with `{key}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTemplate(String);

impl MessageTemplate {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Replaces every `{key}` with its value in one left-to-right pass.
    /// Substituted values are copied as is and never rescanned; placeholders
    /// without a value stay in the output as written.
    pub fn render(&self, values: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let matched = after
                .find('}')
                .map(|close| &after[..close])
                .and_then(|token| values.iter().find(|(key, _)| *key == token));

            match matched {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &after[key.len() + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        out
    }

    pub fn contains_placeholder(&self, key: &str) -> bool {
        self.0.contains(&format!("{{{key}}}"))
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for MessageTemplate {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

/// The four status messages a business sends around a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusTemplates {
    pub confirm: MessageTemplate,
    pub reminder: MessageTemplate,
    pub reschedule: MessageTemplate,
    pub noshow: MessageTemplate,
}
