use std::process::{Command, Stdio};
use log::{debug, info};
use crate::config::{OpenerConfig, SiteConfig};
use crate::error::{Error, Result};
use crate::model::{Action, Entry, ThemeSetting};

/// Carries out navigation on behalf of a selected entry.
pub trait Navigator {
    /// Same-context navigation to a site path (base prefix included).
    fn navigate(&mut self, path: &str) -> Result<()>;
    /// Opens an external URL in a new context.
    fn open_external(&mut self, url: &str) -> Result<()>;
}

/// Holder of the site-wide theme setting.
pub trait ThemeContext {
    fn set_theme(&mut self, theme: ThemeSetting) -> Result<()>;
    fn theme(&self) -> Option<ThemeSetting>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Invoked,
    NoAction,
}

/// Runs the entry's action once. Entries without an action are a no-op.
pub fn execute(
    entry: &Entry,
    navigator: &mut dyn Navigator,
    theme: &mut dyn ThemeContext,
) -> Result<Dispatch> {
    debug!("Dispatching '{}' ({:?})", entry.id, entry.action);
    match &entry.action {
        Action::Navigate { path } => navigator.navigate(path)?,
        Action::OpenExternal { url } => navigator.open_external(url)?,
        Action::SetTheme { theme: value } => theme.set_theme(*value)?,
        Action::None => {
            info!("Entry '{}' has no action", entry.id);
            return Ok(Dispatch::NoAction);
        }
    }
    Ok(Dispatch::Invoked)
}

/// Hands URLs to an external opener such as `xdg-open`.
pub struct SystemNavigator {
    opener: String,
    site: SiteConfig,
}

impl SystemNavigator {
    pub fn new(opener: &OpenerConfig, site: &SiteConfig) -> Self {
        Self {
            opener: opener.command.clone(),
            site: site.clone(),
        }
    }

    fn spawn(&self, target: &str) -> Result<()> {
        let mut cmd_parts: Vec<&str> = self.opener.split_whitespace().collect();
        if cmd_parts.is_empty() {
            return Err(Error::NoOpener);
        }
        cmd_parts.push(target);

        info!("Opening {} with {}", target, cmd_parts[0]);
        Command::new(cmd_parts[0])
            .args(&cmd_parts[1..])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| Error::Opener {
                command: self.opener.clone(),
                source,
            })?;
        Ok(())
    }
}

impl Navigator for SystemNavigator {
    fn navigate(&mut self, path: &str) -> Result<()> {
        let url = self.site.absolute_url(path);
        self.spawn(&url)
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        self.spawn(url)
    }
}

/// Records what would happen instead of doing it.
#[derive(Debug, Default)]
pub struct DryRun {
    pub log: Vec<String>,
}

impl Navigator for DryRun {
    fn navigate(&mut self, path: &str) -> Result<()> {
        self.log.push(format!("navigate {}", path));
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> Result<()> {
        self.log.push(format!("open {}", url));
        Ok(())
    }
}

impl ThemeContext for DryRun {
    fn set_theme(&mut self, theme: ThemeSetting) -> Result<()> {
        self.log.push(format!("set theme {}", theme));
        Ok(())
    }

    fn theme(&self) -> Option<ThemeSetting> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_catalog;
    use crate::config::Config;
    use crate::model::{EntryKind, SECTION_THEME};
    use crate::theme_store::MemoryTheme;

    #[derive(Default)]
    struct Recorder {
        navigated: Vec<String>,
        opened: Vec<String>,
    }

    impl Navigator for Recorder {
        fn navigate(&mut self, path: &str) -> Result<()> {
            self.navigated.push(path.to_string());
            Ok(())
        }

        fn open_external(&mut self, url: &str) -> Result<()> {
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    fn entry(action: Action) -> Entry {
        Entry::new("x".into(), "X".into(), "Test".into(), EntryKind::Content).with_action(action)
    }

    #[test]
    fn navigate_runs_exactly_once() {
        let mut nav = Recorder::default();
        let mut theme = MemoryTheme::default();
        let outcome = execute(&entry(Action::Navigate { path: "/p/".into() }), &mut nav, &mut theme).unwrap();
        assert_eq!(outcome, Dispatch::Invoked);
        assert_eq!(nav.navigated, vec!["/p/"]);
        assert!(nav.opened.is_empty());
        assert_eq!(theme.theme(), None);
    }

    #[test]
    fn external_links_do_not_navigate_in_place() {
        let mut nav = Recorder::default();
        let mut theme = MemoryTheme::default();
        execute(&entry(Action::OpenExternal { url: "https://orcid.org".into() }), &mut nav, &mut theme).unwrap();
        assert_eq!(nav.opened, vec!["https://orcid.org"]);
        assert!(nav.navigated.is_empty());
    }

    #[test]
    fn entry_without_action_is_a_noop() {
        let mut nav = Recorder::default();
        let mut theme = MemoryTheme::default();
        let outcome = execute(&entry(Action::None), &mut nav, &mut theme).unwrap();
        assert_eq!(outcome, Dispatch::NoAction);
        assert!(nav.navigated.is_empty() && nav.opened.is_empty());
        assert_eq!(theme.theme(), None);
    }

    #[test]
    fn theme_entries_set_matching_theme() {
        let catalog = build_catalog(&Config::default(), &[]);
        for entry in catalog.in_section(SECTION_THEME) {
            let mut nav = Recorder::default();
            let mut theme = MemoryTheme::default();
            execute(entry, &mut nav, &mut theme).unwrap();
            let expected: ThemeSetting = entry.id.trim_end_matches("-theme").parse().unwrap();
            assert_eq!(theme.theme(), Some(expected));
        }
    }

    #[test]
    fn dry_run_records_instead_of_acting() {
        let mut dry = DryRun::default();
        let e = entry(Action::SetTheme { theme: ThemeSetting::System });
        let mut theme = DryRun::default();
        execute(&e, &mut dry, &mut theme).unwrap();
        assert_eq!(theme.log, vec!["set theme system"]);
        assert!(dry.log.is_empty());
    }

    #[test]
    fn blank_opener_is_an_error() {
        let opener = OpenerConfig { command: "  ".into() };
        let mut nav = SystemNavigator::new(&opener, &SiteConfig::default());
        let e = entry(Action::Navigate { path: "/cv/".into() });
        let err = execute(&e, &mut nav, &mut MemoryTheme::default()).unwrap_err();
        assert!(matches!(err, Error::NoOpener));
    }

    #[test]
    fn missing_opener_binary_is_reported() {
        let opener = OpenerConfig { command: "sitepalette-no-such-opener".into() };
        let mut nav = SystemNavigator::new(&opener, &SiteConfig::default());
        let err = nav.open_external("https://example.org").unwrap_err();
        assert!(matches!(err, Error::Opener { .. }));
    }
}
