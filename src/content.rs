//! Content collections read from a Jekyll-style site tree.
//!
//! Every Markdown or HTML file below a collection directory is one item. The
//! YAML front matter is deserialized with `serde_yaml`; only the keys the
//! catalog needs are kept: `title`, `description`, `permalink`, `inline` and
//! `published`.

use crate::config::CollectionConfig;
use crate::error::{Error, Result};
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

const FRONT_MATTER_DELIMITER: &str = "---";
const CONTENT_EXTENSIONS: [&str; 3] = ["md", "markdown", "html"];

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})-(.+)$").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default, deserialize_with = "flag_or_false")]
    pub inline: bool,
    #[serde(default = "default_true", deserialize_with = "flag_or_true")]
    pub published: bool,
}

fn default_true() -> bool { true }

impl Default for FrontMatter {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            permalink: None,
            inline: false,
            published: default_true(),
        }
    }
}

// Jekyll sites still write YAML 1.1 style flags (`yes`, `off`, `False`).
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

fn flag<'de, D: Deserializer<'de>>(deserializer: D, default: bool) -> std::result::Result<bool, D::Error> {
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(value)) => value,
        Some(Flag::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "on" => true,
            "false" | "no" | "n" | "off" => false,
            _ => default,
        },
        None => default,
    })
}

fn flag_or_false<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    flag(deserializer, false)
}

fn flag_or_true<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    flag(deserializer, true)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    pub title: String,
    pub description: Option<String>,
    /// Site-relative permalink, without the base prefix. `None` for items
    /// that have no page of their own.
    pub permalink: Option<String>,
    pub source: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Collection {
    pub config: CollectionConfig,
    pub items: Vec<ContentItem>,
}

impl Collection {
    pub fn new(config: CollectionConfig, items: Vec<ContentItem>) -> Self {
        Self { config, items }
    }

    pub fn empty(config: CollectionConfig) -> Self {
        Self::new(config, Vec::new())
    }
}

/// Splits off the `---` delimited block at the top of a file.
///
/// Returns `Ok(None)` when the file does not open with a delimiter line.
pub fn split_front_matter<'a>(content: &'a str, path: &Path) -> Result<Option<&'a str>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut lines = content.split_inclusive('\n');

    match lines.next() {
        Some(first) if first.trim_end() == FRONT_MATTER_DELIMITER => {}
        _ => return Ok(None),
    }

    let start = content.find('\n').map(|pos| pos + 1).unwrap_or(content.len());
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return Ok(Some(&content[start..offset]));
        }
        offset += line.len();
    }

    Err(Error::front_matter(path, "front matter block is never closed"))
}

/// Parses the front matter of a content file. Returns `Ok(None)` when the
/// file has none.
pub fn parse_front_matter(content: &str, path: &Path) -> Result<Option<FrontMatter>> {
    let Some(block) = split_front_matter(content, path)? else {
        return Ok(None);
    };

    if block.trim().is_empty() {
        return Ok(Some(FrontMatter::default()));
    }

    let fm = serde_yaml::from_str(block).map_err(|e| Error::front_matter(path, e.to_string()))?;
    Ok(Some(fm))
}

/// Expands `:collection`, `:name`, `:title`, `:year`, `:month` and `:day`
/// in a permalink pattern. Date parts come from a `YYYY-MM-DD-` file name
/// prefix and expand to nothing when it is absent.
pub fn expand_permalink(pattern: &str, collection: &str, stem: &str) -> String {
    let (year, month, day, title) = match DATE_PREFIX.captures(stem) {
        Some(caps) => (
            caps[1].to_string(),
            caps[2].to_string(),
            caps[3].to_string(),
            caps[4].to_string(),
        ),
        None => (String::new(), String::new(), String::new(), stem.to_string()),
    };

    let expanded = pattern
        .replace(":collection", collection)
        .replace(":name", stem)
        .replace(":title", &title)
        .replace(":year", &year)
        .replace(":month", &month)
        .replace(":day", &day);

    // Empty date parts would otherwise leave `//` behind.
    let mut out = String::with_capacity(expanded.len());
    for c in expanded.chars() {
        if c == '/' && out.ends_with('/') {
            continue;
        }
        out.push(c);
    }
    out
}

fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| CONTENT_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Reads one item. Unreadable or malformed files are skipped with a warning.
fn item_from_file(path: &Path, config: &CollectionConfig) -> Option<ContentItem> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) => {
            let e = Error::Read {
                path: path.to_path_buf(),
                source,
            };
            warn!("{}", e);
            return None;
        }
    };

    let fm = match parse_front_matter(&content, path) {
        Ok(Some(fm)) => fm,
        Ok(None) => {
            debug!("{:?} has no front matter, skipping", path);
            return None;
        }
        Err(e) => {
            warn!("{}", e);
            return None;
        }
    };

    if !fm.published {
        debug!("{:?} is unpublished, skipping", path);
        return None;
    }

    let Some(title) = fm.title else {
        warn!("{:?} has no title, skipping", path);
        return None;
    };

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let permalink = if fm.inline {
        None
    } else {
        fm.permalink.or_else(|| {
            config
                .permalink
                .as_deref()
                .map(|pattern| expand_permalink(pattern, &config.name, stem))
        })
    };

    Some(ContentItem {
        title,
        description: fm.description,
        permalink,
        source: path.to_path_buf(),
    })
}

/// Reads every item of a collection below `site_root`. A missing directory
/// is an empty collection.
pub fn load_collection(site_root: &Path, config: &CollectionConfig) -> Result<Collection> {
    let dir = site_root.join(&config.dir);
    if !dir.exists() {
        debug!("Collection directory {:?} does not exist, skipping", dir);
        return Ok(Collection::empty(config.clone()));
    }

    debug!("Scanning collection '{}' in {:?}", config.name, dir);
    let mut paths = Vec::new();
    for entry in WalkDir::new(&dir) {
        let entry = entry.map_err(|source| Error::Scan {
            name: config.name.clone(),
            source,
        })?;
        if entry.file_type().is_file() && is_content_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    if config.reverse {
        paths.reverse();
    }

    let mut items = Vec::with_capacity(paths.len());
    for path in &paths {
        if let Some(item) = item_from_file(path, config) {
            items.push(item);
        }
    }

    info!("Collection '{}': found {} items", config.name, items.len());
    Ok(Collection::new(config.clone(), items))
}
