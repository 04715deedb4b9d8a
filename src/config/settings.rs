//! The assembled application configuration.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::derived::Derived;
use super::error::ConfigError;
use super::loader::{quote_env_value, render_section, validate_section, ResolvedField, ResolvedSection};
use super::schema::SectionSchema;
use super::sections::{
    AntiSpam, BaseSections, BaseUrls, BigBrother, Bot, Branding, Categories, Channels,
    CleanMessages, CodeBlock, Colours, Cooldowns, DuckPond, Emojis, Filter, Free, Guild,
    HelpChannels, Icons, Keys, Metabase, Miscellaneous, PythonNews, RedirectOutput, Redis, Roles,
    Stats, VideoPermission, VoiceGate, Webhooks,
};
use super::sources::{EnvFile, Origin, OverrideSources};
use super::value::ValueKind;

/// Environment key holding the deployed commit hash.
pub const GIT_SHA_KEY: &str = "GIT_SHA";

/// Commit hash reported when `GIT_SHA` is unset.
pub const DEFAULT_GIT_SHA: &str = "development";

/// Where overrides are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Override files in increasing priority.
    pub env_files: Vec<EnvFile>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            env_files: vec![EnvFile::optional(".env"), EnvFile::optional(".env.server")],
        }
    }
}

impl LoadOptions {
    /// Uses the given files, in increasing priority.
    #[must_use]
    pub fn with_env_files<I, P>(paths: I, required: bool) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            env_files: paths
                .into_iter()
                .map(|path| EnvFile {
                    path: path.into(),
                    required,
                })
                .collect(),
        }
    }
}

/// Which keys were overridden, and from where.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Resolved sections in load order.
    pub sections: Vec<ResolvedSection>,

    /// Number of override files that were found and read.
    pub files_read: usize,
}

impl LoadReport {
    /// Returns every overridden field with its section name.
    pub fn overrides(&self) -> impl Iterator<Item = (&'static str, &ResolvedField)> {
        self.sections
            .iter()
            .flat_map(|section| section.overrides().map(move |field| (section.name(), field)))
    }

    /// Returns the number of overridden fields.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides().count()
    }
}

/// The complete, immutable bot configuration.
///
/// Built once at startup and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub miscellaneous: Miscellaneous,
    pub bot: Bot,
    pub channels: Channels,
    pub roles: Roles,
    pub categories: Categories,
    pub guild: Guild,
    pub webhooks: Webhooks,
    pub big_brother: BigBrother,
    pub code_block: CodeBlock,
    pub colours: Colours,
    pub free: Free,
    pub anti_spam: AntiSpam,
    pub help_channels: HelpChannels,
    pub redirect_output: RedirectOutput,
    pub duck_pond: DuckPond,
    pub python_news: PythonNews,
    pub voice_gate: VoiceGate,
    pub branding: Branding,
    pub video_permission: VideoPermission,
    pub redis: Redis,
    pub clean_messages: CleanMessages,
    pub stats: Stats,
    pub cooldowns: Cooldowns,
    pub metabase: Metabase,
    pub urls: BaseUrls,
    pub emojis: Emojis,
    pub icons: Icons,
    pub filter: Filter,
    pub keys: Keys,

    /// Commit hash of the running build.
    pub git_sha: String,

    /// Values composed from the sections above.
    pub derived: Derived,
}

impl Settings {
    /// Loads settings from the process environment and the configured files.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a file is malformed,
    /// or any override cannot be parsed.
    pub fn load(options: &LoadOptions) -> Result<Self, ConfigError> {
        Self::load_with_report(options).map(|(settings, _)| settings)
    }

    /// Like [`Settings::load`], also reporting which keys were overridden.
    ///
    /// # Errors
    ///
    /// See [`Settings::load`].
    pub fn load_with_report(options: &LoadOptions) -> Result<(Self, LoadReport), ConfigError> {
        let sources = OverrideSources::load(&options.env_files)?;
        Self::resolve(&sources)
    }

    /// Builds settings from already collected override sources.
    ///
    /// # Errors
    ///
    /// Returns an error if any override cannot be parsed.
    pub fn from_sources(sources: &OverrideSources) -> Result<Self, ConfigError> {
        Self::resolve(sources).map(|(settings, _)| settings)
    }

    /// Resolves every section in dependency order, then composes derived values.
    ///
    /// # Errors
    ///
    /// Returns an error if any override cannot be parsed.
    pub fn resolve(sources: &OverrideSources) -> Result<(Self, LoadReport), ConfigError> {
        let mut report = LoadReport {
            sections: Vec::new(),
            files_read: sources.file_count(),
        };

        let miscellaneous = track(&mut report, Miscellaneous::resolve(sources))?;
        let bot = track(&mut report, Bot::resolve(sources))?;
        let channels = track(&mut report, Channels::resolve(sources))?;
        let roles = track(&mut report, Roles::resolve(sources))?;
        let categories = track(&mut report, Categories::resolve(sources))?;

        let base = BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };
        let guild = track(&mut report, Guild::resolve(&base, sources))?;
        let webhooks = track(&mut report, Webhooks::resolve(&base, sources))?;
        let big_brother = track(&mut report, BigBrother::resolve(sources))?;
        let code_block = track(&mut report, CodeBlock::resolve(&base, sources))?;
        let colours = track(&mut report, Colours::resolve(sources))?;
        let free = track(&mut report, Free::resolve(sources))?;
        let anti_spam = track(&mut report, AntiSpam::resolve(&base, sources))?;
        let help_channels = track(&mut report, HelpChannels::resolve(&base, sources))?;
        let redirect_output = track(&mut report, RedirectOutput::resolve(sources))?;
        let duck_pond = track(&mut report, DuckPond::resolve(&base, sources))?;
        let python_news = track(&mut report, PythonNews::resolve(&webhooks, sources))?;
        let voice_gate = track(&mut report, VoiceGate::resolve(sources))?;
        let branding = track(&mut report, Branding::resolve(sources))?;
        let video_permission = track(&mut report, VideoPermission::resolve(sources))?;
        let redis = track(&mut report, Redis::resolve(sources))?;
        let clean_messages = track(&mut report, CleanMessages::resolve(sources))?;
        let stats = track(&mut report, Stats::resolve(sources))?;
        let cooldowns = track(&mut report, Cooldowns::resolve(sources))?;
        let metabase = track(&mut report, Metabase::resolve(sources))?;
        let urls = track(&mut report, BaseUrls::resolve(sources))?;
        let emojis = track(&mut report, Emojis::resolve(sources))?;
        let icons = track(&mut report, Icons::resolve(sources))?;
        let filter = track(&mut report, Filter::resolve(&base, sources))?;
        let keys = track(&mut report, Keys::resolve(sources))?;

        let git_sha = match sources.lookup(GIT_SHA_KEY) {
            Some(found) => found.text(GIT_SHA_KEY, ValueKind::Text)?.to_owned(),
            None => DEFAULT_GIT_SHA.to_owned(),
        };

        let derived = Derived::compose(&guild, &roles, &urls);

        info!(
            "Configuration loaded: {} sections, {} overrides from {} file(s) and the environment",
            report.sections.len(),
            report.override_count(),
            report.files_read
        );

        let settings = Self {
            miscellaneous,
            bot,
            channels,
            roles,
            categories,
            guild,
            webhooks,
            big_brother,
            code_block,
            colours,
            free,
            anti_spam,
            help_channels,
            redirect_output,
            duck_pond,
            python_news,
            voice_gate,
            branding,
            video_permission,
            redis,
            clean_messages,
            stats,
            cooldowns,
            metabase,
            urls,
            emojis,
            icons,
            filter,
            keys,
            git_sha,
            derived,
        };

        Ok((settings, report))
    }

    /// Returns the coded defaults with no overrides applied.
    #[must_use]
    pub fn defaults() -> Self {
        let channels = Channels::defaults();
        let roles = Roles::defaults();
        let categories = Categories::defaults();
        let base = BaseSections {
            channels: &channels,
            roles: &roles,
            categories: &categories,
        };

        let guild = Guild::defaults(&base);
        let webhooks = Webhooks::defaults(&base);
        let code_block = CodeBlock::defaults(&base);
        let anti_spam = AntiSpam::defaults(&base);
        let help_channels = HelpChannels::defaults(&base);
        let duck_pond = DuckPond::defaults(&base);
        let filter = Filter::defaults(&base);
        let python_news = PythonNews::defaults(&webhooks);
        let urls = BaseUrls::defaults();
        let derived = Derived::compose(&guild, &roles, &urls);

        Self {
            miscellaneous: Miscellaneous::defaults(),
            bot: Bot::defaults(),
            channels,
            roles,
            categories,
            guild,
            webhooks,
            big_brother: BigBrother::defaults(),
            code_block,
            colours: Colours::defaults(),
            free: Free::defaults(),
            anti_spam,
            help_channels,
            redirect_output: RedirectOutput::defaults(),
            duck_pond,
            python_news,
            voice_gate: VoiceGate::defaults(),
            branding: Branding::defaults(),
            video_permission: VideoPermission::defaults(),
            redis: Redis::defaults(),
            clean_messages: CleanMessages::defaults(),
            stats: Stats::defaults(),
            cooldowns: Cooldowns::defaults(),
            metabase: Metabase::defaults(),
            urls,
            emojis: Emojis::defaults(),
            icons: Icons::defaults(),
            filter,
            keys: Keys::defaults(),
            git_sha: DEFAULT_GIT_SHA.to_owned(),
            derived,
        }
    }

    /// Describes every section, in load order, with current values as defaults.
    #[must_use]
    pub fn schemas(&self) -> Vec<SectionSchema> {
        vec![
            self.miscellaneous.to_schema(),
            self.bot.to_schema(),
            self.channels.to_schema(),
            self.roles.to_schema(),
            self.categories.to_schema(),
            self.guild.to_schema(),
            self.webhooks.to_schema(),
            self.big_brother.to_schema(),
            self.code_block.to_schema(),
            self.colours.to_schema(),
            self.free.to_schema(),
            self.anti_spam.to_schema(),
            self.help_channels.to_schema(),
            self.redirect_output.to_schema(),
            self.duck_pond.to_schema(),
            self.python_news.to_schema(),
            self.voice_gate.to_schema(),
            self.branding.to_schema(),
            self.video_permission.to_schema(),
            self.redis.to_schema(),
            self.clean_messages.to_schema(),
            self.stats.to_schema(),
            self.cooldowns.to_schema(),
            self.metabase.to_schema(),
            self.urls.to_schema(),
            self.emojis.to_schema(),
            self.icons.to_schema(),
            self.filter.to_schema(),
            self.keys.to_schema(),
        ]
    }

    /// Writes every setting as a dotenv line. Loading the result as an
    /// override file reproduces these settings.
    ///
    /// # Errors
    ///
    /// Returns an error only if `out` fails to accept the text.
    pub fn write_env<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for schema in self.schemas() {
            writeln!(out, "# {}", schema.name)?;
            render_section(&schema, out)?;
            writeln!(out)?;
        }
        writeln!(out, "{GIT_SHA_KEY}={}", quote_env_value(&self.git_sha))
    }

    /// Renders [`Settings::write_env`] into a string.
    #[must_use]
    pub fn to_env_string(&self) -> String {
        EnvFileDisplay(self).to_string()
    }

    /// Returns every recognised override key, lower-cased.
    #[must_use]
    pub fn known_keys() -> HashSet<String> {
        let mut keys: HashSet<String> = Self::defaults()
            .schemas()
            .iter()
            .flat_map(SectionSchema::keys)
            .map(|key| key.to_lowercase())
            .collect();
        keys.insert(GIT_SHA_KEY.to_lowercase());
        keys
    }

    /// Checks every key against `sources`, collecting all parse failures.
    #[must_use]
    pub fn validate_sources(sources: &OverrideSources) -> Vec<(String, Result<Origin, ConfigError>)> {
        Self::defaults()
            .schemas()
            .iter()
            .flat_map(|schema| validate_section(schema, sources))
            .collect()
    }

    /// Returns file keys that no section recognises.
    #[must_use]
    pub fn unknown_file_keys(sources: &OverrideSources) -> Vec<(&Path, &str)> {
        let known = Self::known_keys();
        sources
            .file_keys()
            .filter(|(_, key)| !known.contains(&key.to_lowercase()))
            .collect()
    }
}

struct EnvFileDisplay<'a>(&'a Settings);

impl fmt::Display for EnvFileDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_env(f)
    }
}

fn track<T>(
    report: &mut LoadReport,
    result: Result<(T, ResolvedSection), ConfigError>,
) -> Result<T, ConfigError> {
    let (section, resolved) = result?;
    report.sections.push(resolved);
    Ok(section)
}
