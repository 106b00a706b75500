use crate::config::SiteConfig;
use crate::content::Collection;
use crate::model::{Action, Entry, EntryKind};
use crate::slug;
use crate::sources::Source;
use log::info;

/// One entry per content item. Items without a permalink stay
/// informational.
pub struct CollectionSource<'a> {
    pub site: &'a SiteConfig,
    pub collection: &'a Collection,
}

impl Source for CollectionSource<'_> {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn scan(&self) -> Vec<Entry> {
        let config = &self.collection.config;
        let entries: Vec<Entry> = self
            .collection
            .items
            .iter()
            .map(|item| {
                let mut entry = Entry::new(
                    slug::prefixed(&config.id_prefix, &item.title),
                    item.title.clone(),
                    config.section.clone(),
                    EntryKind::Content,
                );
                if let Some(description) = &item.description {
                    entry = entry.with_description(description.clone());
                }
                if let Some(permalink) = &item.permalink {
                    entry = entry.with_action(Action::Navigate {
                        path: self.site.path_for(permalink),
                    });
                }
                entry
            })
            .collect();
        info!("CollectionSource({}): found {} entries", config.name, entries.len());
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollectionConfig;
    use crate::content::ContentItem;
    use std::path::PathBuf;

    fn item(title: &str, permalink: Option<&str>, description: Option<&str>) -> ContentItem {
        ContentItem {
            title: title.to_string(),
            description: description.map(str::to_string),
            permalink: permalink.map(str::to_string),
            source: PathBuf::from("x.md"),
        }
    }

    #[test]
    fn content_entries_use_prefix_slug_and_base() {
        let site = SiteConfig {
            url: String::new(),
            baseurl: "/goswami-13".to_string(),
        };
        let config = CollectionConfig {
            name: "projects".to_string(),
            section: "Projects".to_string(),
            id_prefix: "projects".to_string(),
            dir: PathBuf::from("_projects"),
            permalink: None,
            reverse: false,
        };
        let collection = Collection::new(
            config,
            vec![
                item("project 1", Some("/projects/1_project/"), Some("with background image")),
                item("A simple inline announcement.", None, None),
            ],
        );

        let entries = CollectionSource { site: &site, collection: &collection }.scan();

        assert_eq!(entries[0].id, "projects-project-1");
        assert_eq!(entries[0].section, "Projects");
        assert_eq!(entries[0].description, "with background image");
        assert_eq!(
            entries[0].action,
            Action::Navigate { path: "/goswami-13/projects/1_project/".to_string() }
        );
        assert_eq!(entries[1].id, "projects-a-simple-inline-announcement");
        assert_eq!(entries[1].description, "");
        assert!(!entries[1].is_interactive());
    }
}
