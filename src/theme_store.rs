use std::fs;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use log::debug;
use crate::config::project_dirs;
use crate::error::Result;
use crate::executor::ThemeContext;
use crate::model::ThemeSetting;

#[derive(Serialize, Deserialize, Default, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Option<ThemeSetting>,
}

pub fn default_state_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("theme.json"))
}

/// Theme setting persisted as JSON. Last write wins.
pub struct ThemeStore {
    path: PathBuf,
    state: ThemeState,
}

impl ThemeStore {
    /// Opens the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let state = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        debug!("Theme state at {:?}: {:?}", path, state);
        Self { path, state }
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl ThemeContext for ThemeStore {
    fn set_theme(&mut self, theme: ThemeSetting) -> Result<()> {
        self.state.theme = Some(theme);
        self.save()
    }

    fn theme(&self) -> Option<ThemeSetting> {
        self.state.theme
    }
}

#[derive(Debug, Default)]
pub struct MemoryTheme {
    current: Option<ThemeSetting>,
}

impl ThemeContext for MemoryTheme {
    fn set_theme(&mut self, theme: ThemeSetting) -> Result<()> {
        self.current = Some(theme);
        Ok(())
    }

    fn theme(&self) -> Option<ThemeSetting> {
        self.current
    }
}
