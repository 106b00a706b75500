use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("front matter error in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("failed to scan collection '{name}': {source}")]
    Scan {
        name: String,
        #[source]
        source: walkdir::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no entry with id '{0}'")]
    UnknownEntry(String),

    #[error("no opener command configured")]
    NoOpener,

    #[error("failed to launch opener '{command}': {source}")]
    Opener {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn front_matter(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::FrontMatter {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn front_matter_error_names_file() {
        let err = Error::front_matter("_posts/2024-01-01-x.md", "unterminated block");
        let msg = err.to_string();
        assert!(msg.contains("_posts/2024-01-01-x.md"));
        assert!(msg.contains("unterminated block"));
    }

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io_err.into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
