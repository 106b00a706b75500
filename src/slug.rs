use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{M}\p{Nd}]+").expect("static regex"));

const FALLBACK_SLUG: &str = "untitled";

/// Lowercases `input` and collapses every run of non-alphanumeric
/// characters into a single `-`. Never returns an empty string.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let slug = SEPARATORS.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Builds an id of the form `<prefix>-<slug>`.
pub fn prefixed(prefix: &str, title: &str) -> String {
    format!("{}-{}", prefix, slugify(title))
}

/// Percent-encodes the alphanumeric characters of an address so scrapers
/// don't pick it up from the generated script. `@` and `.` stay readable.
pub fn encode_email(address: &str) -> String {
    let mut out = String::with_capacity(address.len() * 3);
    for c in address.trim().chars() {
        if c.is_ascii_alphanumeric() {
            out.push_str(&format!("%{:02X}", c as u8));
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_titles() {
        assert_eq!(slugify("Introduction to CFD"), "introduction-to-cfd");
        assert_eq!(
            slugify("Meshes in Motion: Making OpenFOAM Go with the Flow"),
            "meshes-in-motion-making-openfoam-go-with-the-flow"
        );
        assert_eq!(
            slugify("First Steps : Setting up your first case in OpenFOAM"),
            "first-steps-setting-up-your-first-case-in-openfoam"
        );
        assert_eq!(slugify("3D POD and Visualization"), "3d-pod-and-visualization");
    }

    #[test]
    fn test_slugify_punctuation_heavy_title() {
        let slug = slugify("4 Tutorials to Rule Them All!!! (Part 1)");
        assert_eq!(slug, "4-tutorials-to-rule-them-all-part-1");
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.contains("--"));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }

    #[test]
    fn test_slugify_empty_falls_back() {
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify("!!! ???"), "untitled");
    }

    #[test]
    fn test_prefixed_id() {
        assert_eq!(prefixed("projects", "project 3 with very long name"), "projects-project-3-with-very-long-name");
    }

    #[test]
    fn test_encode_email() {
        assert_eq!(encode_email("ab.c@x.io"), "%61%62.%63@%78.%69%6F");
    }

    proptest! {
        #[test]
        fn slug_is_never_empty_and_has_no_edge_separators(title in ".*") {
            let slug = slugify(&title);
            prop_assert!(!slug.is_empty());
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn ascii_titles_slugify_to_lowercase_alphanumerics(title in "[ -~]{0,64}") {
            let slug = slugify(&title);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }

        #[test]
        fn slugify_is_idempotent(title in "[ -~]{0,64}") {
            let once = slugify(&title);
            prop_assert_eq!(slugify(&once), once.clone());
        }
    }
}
