//! Moderation and community feature settings.

use super::BaseSections;

settings_section! {
    pub struct BigBrother: "big_brother_" {
        header_message_limit: u64 = 15,
        log_delay: u64 = 15,
    }
}

settings_section! {
    /// Code block detection.
    pub struct CodeBlock: "code_block_" with base: &BaseSections<'_> {
        /// Channels where code blocks are detected without a cooldown.
        channel_whitelist: Vec<u64> = vec![base.channels.bot_commands],
        /// Channels affected by a cooldown. These are also whitelisted.
        cooldown_channels: Vec<u64> = vec![base.channels.python_general],
        cooldown_seconds: u64 = 300,
        minimum_lines: u64 = 4,
    }
}

settings_section! {
    pub struct Free: "free_" {
        activity_timeout: u64 = 600,
        cooldown_per: f64 = 60.0,
        cooldown_rate: u64 = 1,
    }
}

settings_record! {
    /// What happens to a member who trips an anti-spam rule.
    pub struct Punishment {
        remove_after: u64,
        role_id: u64,
    }
}

settings_record! {
    /// At most `max` events within `interval` seconds.
    pub struct Rule {
        interval: u64,
        max: u64,
    }
}

settings_record! {
    pub struct ExtendedRule {
        interval: u64,
        max: u64,
        max_consecutive: u64,
    }
}

settings_record! {
    pub struct Rules {
        attachments: Rule,
        burst: Rule,
        chars: Rule,
        discord_emojis: Rule,
        duplicates: Rule,
        links: Rule,
        mentions: Rule,
        newlines: ExtendedRule,
        role_mentions: Rule,
    }
}

impl Rule {
    const fn new(interval: u64, max: u64) -> Self {
        Self { interval, max }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            attachments: Rule::new(10, 6),
            burst: Rule::new(10, 7),
            chars: Rule::new(5, 4_200),
            discord_emojis: Rule::new(10, 20),
            duplicates: Rule::new(10, 3),
            links: Rule::new(10, 10),
            mentions: Rule::new(10, 5),
            newlines: ExtendedRule {
                interval: 10,
                max: 100,
                max_consecutive: 10,
            },
            role_mentions: Rule::new(10, 3),
        }
    }
}

settings_section! {
    /// Anti-spam limits. Rules are overridable per leaf, e.g.
    /// `ANTI_SPAM_RULES__BURST__MAX`.
    pub struct AntiSpam: "anti_spam_" with base: &BaseSections<'_> {
        cache_size: u64 = 100,
        clean_offending: bool = true,
        ping_everyone: bool = true,
        punishment: Punishment = Punishment {
            remove_after: 600,
            role_id: base.roles.muted,
        },
        rules: Rules = Rules::default(),
    }
}

settings_section! {
    pub struct HelpChannels: "help_channels_" with base: &BaseSections<'_> {
        enable: bool = true,
        idle_minutes: u64 = 30,
        deleted_idle_minutes: u64 = 5,
        /// Roles allowed to make a help channel dormant.
        cmd_whitelist: Vec<u64> = vec![base.roles.helpers],
    }
}

settings_section! {
    pub struct RedirectOutput: "redirect_output_" {
        delete_delay: u64 = 15,
        delete_invocation: bool = true,
    }
}

settings_section! {
    pub struct DuckPond: "duck_pond_" with base: &BaseSections<'_> {
        threshold: u64 = 7,
        channel_blacklist: Vec<u64> = vec![
            base.channels.announcements,
            base.channels.python_news,
            base.channels.python_events,
            base.channels.mailing_lists,
            base.channels.reddit,
            base.channels.duck_pond,
            base.channels.changelog,
            base.channels.staff_announcements,
            base.channels.mod_announcements,
            base.channels.admin_announcements,
            base.channels.staff_info,
        ],
    }
}

settings_section! {
    pub struct VoiceGate: "voice_gate_" {
        bot_message_delete_delay: u64 = 10,
        minimum_activity_blocks: u64 = 3,
        minimum_days_member: u64 = 3,
        minimum_messages: u64 = 50,
        voice_ping_delete_delay: u64 = 60,
    }
}

settings_section! {
    pub struct VideoPermission: "video_permission_" {
        default_permission_duration: u64 = 5,
    }
}

settings_section! {
    pub struct CleanMessages: "clean_" {
        message_limit: u64 = 10_000,
    }
}

settings_section! {
    pub struct Cooldowns: "cooldowns_" {
        tags: u64 = 60,
    }
}

settings_section! {
    /// Message filters. Watchlist filters never notify the user.
    pub struct Filter: "filters_" with base: &BaseSections<'_> {
        filter_domains: bool = true,
        filter_everyone_ping: bool = true,
        filter_invites: bool = true,
        filter_zalgo: bool = false,
        watch_regex: bool = true,
        watch_rich_embeds: bool = true,

        notify_user_domains: bool = false,
        notify_user_everyone_ping: bool = true,
        notify_user_invites: bool = true,
        notify_user_zalgo: bool = false,

        offensive_msg_delete_days: u64 = 7,
        ping_everyone: bool = true,

        channel_whitelist: Vec<u64> = vec![
            base.channels.admins,
            base.channels.big_brother,
            base.channels.dev_log,
            base.channels.message_log,
            base.channels.mod_log,
            base.channels.staff_lounge,
        ],
        role_whitelist: Vec<u64> = vec![
            base.roles.admins,
            base.roles.helpers,
            base.roles.moderators,
            base.roles.owners,
            base.roles.python_community,
            base.roles.partners,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{Categories, Channels, ConfigError, OverrideSources, Roles};

    fn with_base<T>(f: impl FnOnce(&BaseSections<'_>) -> T) -> T {
        let channels = Channels::defaults();
        let roles = Roles::defaults();
        let categories = Categories::defaults();
        f(&BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        })
    }

    #[test]
    fn test_anti_spam_defaults() {
        let anti_spam = with_base(AntiSpam::defaults);
        assert_eq!(anti_spam.cache_size, 100);
        assert_eq!(anti_spam.punishment.role_id, Roles::defaults().muted);
        assert_eq!(anti_spam.rules.chars, Rule::new(5, 4_200));
        assert_eq!(anti_spam.rules.newlines.max_consecutive, 10);
    }

    #[test]
    fn test_anti_spam_nested_rule_override() {
        let sources = OverrideSources::new().with_env_vars([
            ("ANTI_SPAM_RULES__BURST__MAX", "9"),
            ("anti_spam_punishment", r#"{"remove_after": 60}"#),
        ]);

        let anti_spam = with_base(|base| AntiSpam::load(base, &sources)).unwrap();
        assert_eq!(anti_spam.rules.burst, Rule::new(10, 9));
        assert_eq!(anti_spam.rules.links, Rule::new(10, 10));
        assert_eq!(anti_spam.punishment.remove_after, 60);
        assert_eq!(anti_spam.punishment.role_id, Roles::defaults().muted);
    }

    #[test]
    fn test_float_override() {
        let sources = OverrideSources::new().with_env_vars([("FREE_COOLDOWN_PER", "2.5")]);
        let free = Free::load(&sources).unwrap();
        assert!((free.cooldown_per - 2.5).abs() < f64::EPSILON);
        assert_eq!(free.cooldown_rate, 1);
    }

    #[test]
    fn test_bad_boolean_fails_section() {
        let sources = OverrideSources::new().with_env_vars([("FILTERS_FILTER_ZALGO", "sometimes")]);
        let result = with_base(|base| Filter::load(base, &sources));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_filter_whitelists_follow_base() {
        let filter = with_base(Filter::defaults);
        let roles = Roles::defaults();
        assert!(filter.role_whitelist.contains(&roles.partners));
        assert!(!filter.filter_zalgo);
        assert_eq!(filter.channel_whitelist.len(), 6);
    }
}
