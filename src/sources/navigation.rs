use crate::config::{NavItem, SiteConfig};
use crate::model::{Action, Entry, EntryKind, SECTION_NAVIGATION};
use crate::slug;
use crate::sources::Source;
use log::info;

pub struct NavigationSource<'a> {
    pub site: &'a SiteConfig,
    pub items: &'a [NavItem],
}

impl Source for NavigationSource<'_> {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn scan(&self) -> Vec<Entry> {
        let entries: Vec<Entry> = self
            .items
            .iter()
            .map(|item| {
                let id = item
                    .id
                    .clone()
                    .unwrap_or_else(|| slug::prefixed("nav", &item.title));
                Entry::new(id, item.title.clone(), SECTION_NAVIGATION.to_string(), EntryKind::Navigation)
                    .with_action(Action::Navigate {
                        path: self.site.path_for(&item.permalink),
                    })
            })
            .collect();
        info!("NavigationSource: found {} entries", entries.len());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_entries_point_into_base_prefix() {
        let site = SiteConfig {
            url: String::new(),
            baseurl: "/goswami-13".to_string(),
        };
        let items = vec![
            NavItem { title: "About".to_string(), permalink: "/".to_string(), id: None },
            NavItem { title: "Guides".to_string(), permalink: "/blog/".to_string(), id: None },
            NavItem { title: "CV".to_string(), permalink: "/cv/".to_string(), id: Some("nav-resume".to_string()) },
        ];
        let entries = NavigationSource { site: &site, items: &items }.scan();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].id, "nav-about");
        assert_eq!(entries[0].action, Action::Navigate { path: "/goswami-13/".to_string() });
        assert_eq!(entries[1].action, Action::Navigate { path: "/goswami-13/blog/".to_string() });
        assert_eq!(entries[2].id, "nav-resume");
        assert!(entries.iter().all(|e| e.section == SECTION_NAVIGATION));
    }
}
