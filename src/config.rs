use serde::Deserialize;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use log::{debug, info};
use std::fs;
use crate::error::{Error, Result};

pub const SITE_CONFIG_FILE: &str = "_palette.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub opener: OpenerConfig,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<NavItem>,
    #[serde(default = "default_collections")]
    pub collections: Vec<CollectionConfig>,
    #[serde(default)]
    pub socials: Vec<SocialProfile>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SiteConfig {
    /// Origin of the deployed site, e.g. `https://someone.github.io`.
    #[serde(default)]
    pub url: String,
    /// Prefix every internal path is served under, e.g. `/someone`.
    #[serde(default)]
    pub baseurl: String,
}

impl SiteConfig {
    /// Joins the base prefix and a site-relative permalink.
    pub fn path_for(&self, permalink: &str) -> String {
        let base = self.baseurl.trim_end_matches('/');
        if permalink.starts_with('/') {
            format!("{}{}", base, permalink)
        } else {
            format!("{}/{}", base, permalink)
        }
    }

    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.url.trim_end_matches('/'), path)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_selector")]
    pub selector: String,
}

fn default_output_path() -> PathBuf { PathBuf::from("assets/js/search-data.js") }
fn default_selector() -> String { "ninja-keys".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            selector: default_selector(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct OpenerConfig {
    #[serde(default = "default_opener")]
    pub command: String,
}

fn default_opener() -> String { "xdg-open".to_string() }

impl Default for OpenerConfig {
    fn default() -> Self {
        Self { command: default_opener() }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct NavItem {
    pub title: String,
    pub permalink: String,
    pub id: Option<String>,
}

fn default_navigation() -> Vec<NavItem> {
    vec![NavItem {
        title: "About".to_string(),
        permalink: "/".to_string(),
        id: None,
    }]
}

#[derive(Deserialize, Debug, Clone)]
pub struct CollectionConfig {
    pub name: String,
    pub section: String,
    pub id_prefix: String,
    /// Directory holding the items, relative to the site root.
    pub dir: PathBuf,
    /// Pattern used when an item has no explicit permalink,
    /// e.g. `/:collection/:name/`.
    pub permalink: Option<String>,
    /// List items in reverse path order (newest first for dated posts).
    #[serde(default)]
    pub reverse: bool,
}

impl CollectionConfig {
    fn new(name: &str, section: &str, id_prefix: &str, permalink: Option<&str>, reverse: bool) -> Self {
        Self {
            name: name.to_string(),
            section: section.to_string(),
            id_prefix: id_prefix.to_string(),
            dir: PathBuf::from(format!("_{}", name)),
            permalink: permalink.map(str::to_string),
            reverse,
        }
    }
}

fn default_collections() -> Vec<CollectionConfig> {
    vec![
        CollectionConfig::new("posts", "Posts", "post", None, true),
        CollectionConfig::new("books", "Books", "books", Some("/:collection/:name/"), false),
        CollectionConfig::new("news", "News", "news", Some("/:collection/:name/"), false),
        CollectionConfig::new("projects", "Projects", "projects", Some("/:collection/:name/"), false),
    ]
}

#[derive(Deserialize, Debug, Clone)]
pub struct SocialProfile {
    pub key: String,
    pub title: String,
    pub url: Option<String>,
    pub email: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            output: OutputConfig::default(),
            opener: OpenerConfig::default(),
            navigation: default_navigation(),
            collections: default_collections(),
            socials: Vec::new(),
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "sitepalette", "sitepalette")
}

/// Resolves the config file: explicit path, then `_palette.toml` in the
/// site root, then the user config dir. Falls back to defaults.
pub fn load_config(explicit: Option<&Path>, site_root: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let local = site_root.join(SITE_CONFIG_FILE);
    if local.exists() {
        return read_config(&local);
    }

    if let Some(dirs) = project_dirs() {
        let user = dirs.config_dir().join("config.toml");
        if user.exists() {
            return read_config(&user);
        }
    }

    debug!("No configuration file found, using defaults");
    Ok(Config::default())
}

pub fn read_config(path: &Path) -> Result<Config> {
    info!("Loading configuration from {:?}", path);
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content, path)
}

fn parse_config(content: &str, path: &Path) -> Result<Config> {
    toml::from_str(content).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
