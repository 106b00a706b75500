use crate::config::SocialProfile;
use crate::model::{Action, Entry, EntryKind, SECTION_SOCIALS};
use crate::slug;
use crate::sources::Source;
use log::{info, warn};

pub struct SocialSource<'a> {
    pub profiles: &'a [SocialProfile],
}

/// Resolves the external target of a profile. Only absolute `https://`
/// and `mailto:` targets are accepted.
fn target_url(profile: &SocialProfile) -> Option<String> {
    if let Some(email) = &profile.email {
        return Some(format!("mailto:{}", slug::encode_email(email)));
    }
    let url = profile.url.as_deref()?.trim();
    if url.starts_with("https://") || url.starts_with("mailto:") {
        Some(url.to_string())
    } else {
        None
    }
}

impl Source for SocialSource<'_> {
    fn name(&self) -> &'static str {
        "social"
    }

    fn scan(&self) -> Vec<Entry> {
        let mut entries = Vec::new();
        for profile in self.profiles {
            let Some(url) = target_url(profile) else {
                warn!("Social profile '{}' has no https:// or mailto: target, skipping", profile.key);
                continue;
            };
            entries.push(
                Entry::new(
                    format!("social-{}", slug::slugify(&profile.key)),
                    profile.title.clone(),
                    SECTION_SOCIALS.to_string(),
                    EntryKind::Social,
                )
                .with_action(Action::OpenExternal { url }),
            );
        }
        info!("SocialSource: found {} entries", entries.len());
        entries
    }
}
