//! Values composed from other resolved settings.
//!
//! These have no override keys of their own: they are recomputed from the
//! resolved sections after every load.

use serde::Serialize;

use super::sections::{BaseUrls, Guild, Roles};

/// URLs composed from [`BaseUrls`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteUrls {
    pub discord_invite_api: String,
    pub site_staff: String,
    pub site_paste: String,
    pub site_logs_view: String,
    /// Paste service URL with a `{key}` placeholder.
    pub paste_service: String,
}

impl SiteUrls {
    /// Placeholder replaced by [`SiteUrls::paste_url`].
    pub const PASTE_KEY_PLACEHOLDER: &'static str = "{key}";

    /// Composes the site URLs.
    #[must_use]
    pub fn compose(base: &BaseUrls) -> Self {
        let site = &base.site;
        let schema = &base.site_schema;

        Self {
            discord_invite_api: format!("{}invites", base.discord_api),
            site_staff: format!("{schema}{site}/staff"),
            site_paste: format!("paste.{site}"),
            site_logs_view: format!("{schema}{site}/staff/bot/logs"),
            paste_service: format!("{schema}paste.{site}/{}", Self::PASTE_KEY_PLACEHOLDER),
        }
    }

    /// Returns the paste service URL for a paste key.
    #[must_use]
    pub fn paste_url(&self, key: &str) -> String {
        self.paste_service.replace(Self::PASTE_KEY_PLACEHOLDER, key)
    }
}

/// Role, channel and category combinations plus composed URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Derived {
    pub moderation_roles: Vec<u64>,
    pub staff_roles: Vec<u64>,
    /// Staff roles plus partners and the python community role.
    pub staff_partners_community_roles: Vec<u64>,
    pub moderation_channels: Vec<u64>,
    pub moderation_categories: Vec<u64>,
    pub urls: SiteUrls,
}

impl Derived {
    /// Composes derived values from resolved sections.
    #[must_use]
    pub fn compose(guild: &Guild, roles: &Roles, urls: &BaseUrls) -> Self {
        let mut staff_partners_community_roles = guild.staff_roles.clone();
        staff_partners_community_roles.extend([roles.partners, roles.python_community]);

        Self {
            moderation_roles: guild.moderation_roles.clone(),
            staff_roles: guild.staff_roles.clone(),
            staff_partners_community_roles,
            moderation_channels: guild.moderation_channels.clone(),
            moderation_categories: guild.moderation_categories.clone(),
            urls: SiteUrls::compose(urls),
        }
    }
}
