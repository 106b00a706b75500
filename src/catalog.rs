use crate::config::Config;
use crate::content::Collection;
use crate::model::Entry;
use crate::sources::collection::CollectionSource;
use crate::sources::navigation::NavigationSource;
use crate::sources::social::SocialSource;
use crate::sources::theme::ThemeSource;
use crate::sources::Source;
use log::{debug, warn};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub id: String,
    /// Positions of every entry carrying the id, in catalog order.
    pub positions: Vec<usize>,
}

/// The ordered, immutable set of entries handed to the search widget.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    // id -> position of the last entry with that id
    index: HashMap<String, usize>,
    duplicates: Vec<DuplicateId>,
}

impl Catalog {
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by id. When ids collide the later entry wins.
    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.index.get(id).map(|&idx| &self.entries[idx])
    }

    pub fn duplicates(&self) -> &[DuplicateId] {
        &self.duplicates
    }

    pub fn in_section<'a>(&'a self, section: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.section.eq_ignore_ascii_case(section))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    entries: Vec<Entry>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    pub fn extend_from(&mut self, source: &dyn Source) -> &mut Self {
        let entries = source.scan();
        debug!("Source '{}' contributed {} entries", source.name(), entries.len());
        for entry in entries {
            self.push(entry);
        }
        self
    }

    /// Freezes the entries in insertion order. Duplicate ids are kept and
    /// logged, never renamed.
    pub fn build(self) -> Catalog {
        let mut index = HashMap::with_capacity(self.entries.len());
        let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, entry) in self.entries.iter().enumerate() {
            positions.entry(entry.id.as_str()).or_default().push(i);
        }

        let mut duplicates: Vec<DuplicateId> = positions
            .into_iter()
            .filter(|(_, p)| p.len() > 1)
            .map(|(id, positions)| DuplicateId {
                id: id.to_string(),
                positions,
            })
            .collect();
        duplicates.sort_by_key(|d| d.positions[0]);

        for dup in &duplicates {
            warn!(
                "Duplicate catalog id '{}' at positions {:?}; lookups resolve to the last one",
                dup.id, dup.positions
            );
        }

        for (i, entry) in self.entries.iter().enumerate() {
            index.insert(entry.id.clone(), i);
        }

        Catalog {
            entries: self.entries,
            index,
            duplicates,
        }
    }
}

/// Builds the full catalog: navigation, each collection in order, socials,
/// then the theme switches.
pub fn build_catalog(config: &Config, collections: &[Collection]) -> Catalog {
    let mut builder = CatalogBuilder::new();
    builder.extend_from(&NavigationSource {
        site: &config.site,
        items: &config.navigation,
    });
    for collection in collections {
        builder.extend_from(&CollectionSource {
            site: &config.site,
            collection,
        });
    }
    builder.extend_from(&SocialSource {
        profiles: &config.socials,
    });
    builder.extend_from(&ThemeSource);
    builder.build()
}
