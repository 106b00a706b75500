use crate::model::Entry;

/// A generator of catalog entries for one category of site content.
pub trait Source {
    fn name(&self) -> &'static str;
    fn scan(&self) -> Vec<Entry>;
}

pub mod navigation;
pub mod collection;
pub mod social;
pub mod theme;
