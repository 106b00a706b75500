use crate::model::{Action, Entry, EntryKind, ThemeSetting, SECTION_THEME};
use crate::sources::Source;

pub struct ThemeSource;

fn title_for(theme: ThemeSetting) -> &'static str {
    match theme {
        ThemeSetting::Light => "Change theme to light",
        ThemeSetting::Dark => "Change theme to dark",
        ThemeSetting::System => "Use system default theme",
    }
}

fn description_for(theme: ThemeSetting) -> &'static str {
    match theme {
        ThemeSetting::Light => "Change the theme of the site to Light",
        ThemeSetting::Dark => "Change the theme of the site to Dark",
        ThemeSetting::System => "Change the theme of the site to System Default",
    }
}

impl Source for ThemeSource {
    fn name(&self) -> &'static str {
        "theme"
    }

    fn scan(&self) -> Vec<Entry> {
        ThemeSetting::ALL
            .iter()
            .map(|&theme| {
                Entry::new(
                    format!("{}-theme", theme),
                    title_for(theme).to_string(),
                    SECTION_THEME.to_string(),
                    EntryKind::Theme,
                )
                .with_description(description_for(theme))
                .with_action(Action::SetTheme { theme })
            })
            .collect()
    }
}
