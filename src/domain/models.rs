use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ButtonId(pub String);

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ButtonId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A label bound to a shell command, plus its decorative glyph and accent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonRecord {
    pub id: ButtonId,
    pub label: String,
    pub command: String,
    pub emoji: String,
    pub color: String,
}

impl ButtonRecord {
    /// Row title as shown in the panel.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

/// A record as found on disk. Files written by older versions may lack the
/// decorative fields, and hand-edited files may lack an id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredButton {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub command: String,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl From<ButtonRecord> for StoredButton {
    fn from(record: ButtonRecord) -> Self {
        Self {
            id: Some(record.id.0),
            label: record.label,
            command: record.command,
            emoji: Some(record.emoji),
            color: Some(record.color),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ButtonsDocument<T> {
    /// A missing key and `null` both read as no buttons.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub buttons: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_shape() {
        let record = ButtonRecord {
            id: ButtonId::from("button-1"),
            label: "Build".to_string(),
            command: "cargo build".to_string(),
            emoji: "🔨".to_string(),
            color: "charts.blue".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], "button-1");
        assert_eq!(value["label"], "Build");
        assert_eq!(value["command"], "cargo build");
        assert_eq!(value["emoji"], "🔨");
        assert_eq!(value["color"], "charts.blue");
    }

    #[test]
    fn test_legacy_record_parses_without_decorations() {
        let doc: ButtonsDocument<StoredButton> = serde_json::from_str(
            r#"{ "buttons": [ { "id": "a", "label": "Test", "command": "npm test" } ] }"#,
        )
        .unwrap();
        assert_eq!(doc.buttons.len(), 1);
        assert_eq!(doc.buttons[0].emoji, None);
        assert_eq!(doc.buttons[0].color, None);
    }

    #[test]
    fn test_missing_buttons_key_is_empty() {
        let doc: ButtonsDocument<StoredButton> = serde_json::from_str("{}").unwrap();
        assert!(doc.buttons.is_empty());
    }

    #[test]
    fn test_null_buttons_is_empty() {
        let doc: ButtonsDocument<StoredButton> =
            serde_json::from_str(r#"{ "buttons": null }"#).unwrap();
        assert!(doc.buttons.is_empty());
    }

    #[test]
    fn test_non_array_buttons_is_rejected() {
        let parsed = serde_json::from_str::<ButtonsDocument<StoredButton>>(r#"{ "buttons": 3 }"#);
        assert!(parsed.is_err());
    }
}
