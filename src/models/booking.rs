use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Premium,
    Caring,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LanguageMode {
    #[default]
    Mix,
    EnglishOnly,
    RomanUrduOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInputs {
    pub service: String,
    pub brand: String,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub language_mode: LanguageMode,
    #[serde(default)]
    pub include_prep: bool,
    #[serde(default)]
    pub include_policy: bool,
    #[serde(default = "default_true")]
    pub use_emoji: bool,
}

fn default_true() -> bool {
    true
}

impl BookingInputs {
    /// Trims every text field and drops blank slots. Returns `None` when
    /// `service` or `brand` ends up empty.
    pub fn normalized(mut self) -> Option<Self> {
        self.service = self.service.trim().to_string();
        self.brand = self.brand.trim().to_string();
        self.slots = self
            .slots
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if self.service.is_empty() || self.brand.is_empty() {
            return None;
        }
        Some(self)
    }

    /// Slots on one line, the form the fallback booking copy embeds.
    pub fn slots_oneline(&self) -> String {
        self.slots.join(" | ")
    }
}
