use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Guest";
pub const DEFAULT_SLOT: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub name: String,
    pub phone: String,
    pub slot: String,
}

impl ClientRecord {
    /// Builds a record from optional cells. Values are trimmed; a missing or
    /// blank name or slot takes its default, a missing phone is empty.
    pub fn from_fields(name: Option<&str>, phone: Option<&str>, slot: Option<&str>) -> Self {
        Self {
            name: non_blank(name).unwrap_or(DEFAULT_NAME).to_string(),
            phone: non_blank(phone).unwrap_or_default().to_string(),
            slot: non_blank(slot).unwrap_or(DEFAULT_SLOT).to_string(),
        }
    }
}

impl Default for ClientRecord {
    fn default() -> Self {
        Self::from_fields(None, None, None)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedClientMessage {
    pub name: String,
    pub phone: String,
    pub slot: String,
    pub confirm_message: String,
    pub reminder_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_defaults() {
        let record = ClientRecord::default();
        assert_eq!(record.name, "Guest");
        assert_eq!(record.phone, "");
        assert_eq!(record.slot, "—");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let record = ClientRecord::from_fields(Some("  Ali "), Some(" +923001234567"), Some("Mon 3PM "));
        assert_eq!(record.name, "Ali");
        assert_eq!(record.phone, "+923001234567");
        assert_eq!(record.slot, "Mon 3PM");
    }

    #[test]
    fn test_blank_cells_take_defaults() {
        let record = ClientRecord::from_fields(Some("   "), Some(""), Some("\t"));
        assert_eq!(record, ClientRecord::default());
    }
}
