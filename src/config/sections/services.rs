//! Bot process settings and external service endpoints.

use super::Webhooks;

settings_section! {
    /// Process-wide switches. These keys have no prefix.
    pub struct Miscellaneous: "" {
        debug: bool = true,
        file_logs: bool = false,
    }
}

settings_section! {
    pub struct Bot: "bot_" {
        /// Command prefix.
        prefix: String = "!".to_owned(),
        #[serde(serialize_with = "super::redact")]
        sentry_dsn: String = String::new(),
        #[serde(serialize_with = "super::redact")]
        token: String = String::new(),
        /// Comma-separated logger names to trace, or `*` for all.
        trace_loggers: String = "*".to_owned(),
    }
}

settings_section! {
    pub struct Redis: "redis_" {
        host: String = "redis.default.svc.cluster.local".to_owned(),
        #[serde(serialize_with = "super::redact")]
        password: String = String::new(),
        port: u64 = 6379,
        /// Use an in-process fake instead of a Redis server.
        use_fakeredis: bool = false,
    }
}

settings_section! {
    pub struct Stats: "stats_" {
        presence_update_timeout: u64 = 30,
        statsd_host: String = "graphite.default.svc.cluster.local".to_owned(),
    }
}

settings_section! {
    pub struct Metabase: "metabase_" {
        username: String = String::new(),
        #[serde(serialize_with = "super::redact")]
        password: String = String::new(),
        base_url: String = "http://metabase.default.svc.cluster.local".to_owned(),
        public_url: String = "https://metabase.pythondiscord.com".to_owned(),
        /// Minutes before a session must be renewed.
        max_session_age: u64 = 20_160,
    }
}

settings_section! {
    /// Base URLs. Composed URLs are derived from these after load.
    pub struct BaseUrls: "urls_" {
        snekbox_eval_api: String = "http://snekbox-310.default.svc.cluster.local/eval".to_owned(),
        snekbox_311_eval_api: String = "http://snekbox.default.svc.cluster.local/eval".to_owned(),

        discord_api: String = "https://discordapp.com/api/v7/".to_owned(),

        bot_avatar: String = "https://raw.githubusercontent.com/python-discord/branding/main/logos/logo_circle/logo_circle.png".to_owned(),
        github_bot_repo: String = "https://github.com/python-discord/bot".to_owned(),

        site: String = "pythondiscord.com".to_owned(),
        site_schema: String = "https://".to_owned(),
        site_api: String = "site.default.svc.cluster.local/api".to_owned(),
        site_api_schema: String = "http://".to_owned(),

        connect_max_retries: u64 = 3,
        connect_cooldown: u64 = 5,
    }
}

settings_section! {
    /// API keys for external services.
    pub struct Keys: "api_keys_" {
        #[serde(serialize_with = "super::redact")]
        github: String = String::new(),
        #[serde(serialize_with = "super::redact")]
        site_api: String = String::new(),
    }
}

settings_section! {
    pub struct PythonNews: "python_news_" with webhooks: &Webhooks {
        channel: Option<u64> = webhooks.python_news.channel,
        webhook: u64 = webhooks.python_news.id,
        mail_lists: Vec<String> = vec![
            "python-ideas".to_owned(),
            "python-announce-list".to_owned(),
            "pypi-announce".to_owned(),
            "python-dev".to_owned(),
        ],
    }
}

settings_section! {
    pub struct Branding: "branding_" {
        /// Days between banner and icon rotations.
        cycle_frequency: u64 = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::OverrideSources;

    #[test]
    fn test_miscellaneous_has_no_prefix() {
        let sources = OverrideSources::new().with_env_vars([("DEBUG", "no")]);
        let misc = Miscellaneous::load(&sources).unwrap();
        assert!(!misc.debug);
        assert!(!misc.file_logs);
    }

    #[test]
    fn test_bot_token_override() {
        let sources = OverrideSources::new().with_file_values(".env", [("BOT_TOKEN", "secret")]);
        let bot = Bot::load(&sources).unwrap();
        assert_eq!(bot.token, "secret");
        assert_eq!(bot.prefix, "!");
    }

    #[test]
    fn test_secrets_are_redacted_in_json() {
        let sources = OverrideSources::new().with_env_vars([("REDIS_PASSWORD", "hunter2")]);
        let redis = Redis::load(&sources).unwrap();
        let json = serde_json::to_value(&redis).unwrap();
        assert_eq!(json["password"], "********");
        assert_eq!(json["port"], 6379);
    }

    #[test]
    fn test_python_news_mail_lists_override() {
        let sources =
            OverrideSources::new().with_env_vars([("PYTHON_NEWS_MAIL_LISTS", "python-dev")]);
        let webhooks_sources = OverrideSources::new();
        let channels = crate::config::Channels::defaults();
        let roles = crate::config::Roles::defaults();
        let categories = crate::config::Categories::defaults();
        let base = crate::config::BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };
        let webhooks = Webhooks::load(&base, &webhooks_sources).unwrap();

        let news = PythonNews::load(&webhooks, &sources).unwrap();
        assert_eq!(news.mail_lists, ["python-dev"]);
        assert_eq!(news.channel, Some(channels.python_news));
        assert_eq!(news.webhook, 704_381_182_279_942_324);
    }
}
