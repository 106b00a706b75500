use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECTION_NAVIGATION: &str = "Navigation";
pub const SECTION_SOCIALS: &str = "Socials";
pub const SECTION_THEME: &str = "Theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Navigation,
    Content,
    Social,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSetting {
    Light,
    Dark,
    System,
}

impl ThemeSetting {
    pub const ALL: [ThemeSetting; 3] = [ThemeSetting::Light, ThemeSetting::Dark, ThemeSetting::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeSetting::Light => "light",
            ThemeSetting::Dark => "dark",
            ThemeSetting::System => "system",
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeSetting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemeSetting::Light),
            "dark" => Ok(ThemeSetting::Dark),
            "system" => Ok(ThemeSetting::System),
            other => Err(format!("unknown theme setting '{}'", other)),
        }
    }
}

/// What selecting an entry does. Kept as data so a catalog can be
/// serialized and inspected without running anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Navigate { path: String },
    OpenExternal { url: String },
    SetTheme { theme: ThemeSetting },
    #[default]
    None,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,            // Unique within a catalog (e.g. "post-introduction-to-cfd")
    pub title: String,         // Display title
    #[serde(default)]
    pub description: String,   // Empty when the source has none
    pub section: String,       // Grouping label shown by the widget
    #[serde(default, skip_serializing_if = "Action::is_none")]
    pub action: Action,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(id: String, title: String, section: String, kind: EntryKind) -> Self {
        Self {
            id,
            title,
            description: String::new(),
            section,
            action: Action::None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn is_interactive(&self) -> bool {
        !self.action.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_setting_parses_case_insensitively() {
        assert_eq!("Dark".parse::<ThemeSetting>(), Ok(ThemeSetting::Dark));
        assert_eq!(" system ".parse::<ThemeSetting>(), Ok(ThemeSetting::System));
        assert!("sepia".parse::<ThemeSetting>().is_err());
    }

    #[test]
    fn action_serializes_as_tagged_variant() {
        let action = Action::SetTheme { theme: ThemeSetting::Light };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({"type": "set_theme", "theme": "light"}));

        let nav: Action = serde_json::from_str(r#"{"type":"navigate","path":"/cv/"}"#).unwrap();
        assert_eq!(nav, Action::Navigate { path: "/cv/".to_string() });
    }

    #[test]
    fn informational_entry_omits_action() {
        let entry = Entry::new(
            "news-inline".to_string(),
            "Inline".to_string(),
            "News".to_string(),
            EntryKind::Content,
        );
        assert!(!entry.is_interactive());
        let json = serde_json::to_value(&entry).unwrap();
        assert!(json.get("action").is_none());
        assert_eq!(json["description"], "");
    }
}
