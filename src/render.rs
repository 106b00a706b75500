//! Emitters for the widget integration file.
//!
//! The JavaScript output assigns the catalog to the `data` property of the
//! `ninja-keys` element; every handler is generated from the entry's
//! [`Action`]. The JSON output is the plain serde form of the entries.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::{Action, Entry};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Js,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "js" => Ok(Format::Js),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl Format {
    /// Guesses the format from an output file extension.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        path.extension().and_then(|s| s.to_str()).and_then(|ext| ext.parse().ok())
    }
}

pub fn render(catalog: &Catalog, format: Format, selector: &str) -> Result<String> {
    match format {
        Format::Js => render_js(catalog, selector),
        Format::Json => render_json(catalog),
    }
}

pub fn render_json(catalog: &Catalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.entries())?)
}

pub fn render_js(catalog: &Catalog, selector: &str) -> Result<String> {
    let mut out = String::new();
    out.push_str("// get the ninja-keys element\n");
    out.push_str(&format!("const ninja = document.querySelector({});\n", js_string(selector)?));
    out.push_str("\nninja.data = [");

    for (i, entry) in catalog.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&render_entry(entry)?);
    }

    out.push_str("\n];\n");
    Ok(out)
}

fn render_entry(entry: &Entry) -> Result<String> {
    let mut out = format!(
        "{{\n    id: {},\n    title: {},\n    description: {},\n    section: {},",
        js_string(&entry.id)?,
        js_string(&entry.title)?,
        js_string(&entry.description)?,
        js_string(&entry.section)?,
    );
    if let Some(body) = handler_body(&entry.action)? {
        out.push_str(&format!("\n    handler: () => {{\n      {}\n    }},", body));
    }
    out.push_str("\n  }");
    Ok(out)
}

fn handler_body(action: &Action) -> Result<Option<String>> {
    let body = match action {
        Action::Navigate { path } => format!("window.location.href = {};", js_string(path)?),
        Action::OpenExternal { url } => format!("window.open({}, \"_blank\");", js_string(url)?),
        Action::SetTheme { theme } => format!("setThemeSetting({});", js_string(theme.as_str())?),
        Action::None => return Ok(None),
    };
    Ok(Some(body))
}

// JSON string literals are valid JavaScript; `</` is broken up so the file
// stays safe when inlined into a <script> tag.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}
