//! Override sources: environment files and the process environment.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::error::ConfigError;
use super::value::ValueKind;

/// An environment file to read overrides from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFile {
    /// Path to the dotenv-format file.
    pub path: PathBuf,

    /// If true, a missing file is an error instead of being skipped.
    pub required: bool,
}

impl EnvFile {
    /// A file that is skipped when it does not exist.
    #[must_use]
    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }

    /// A file that must exist.
    #[must_use]
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }
}

/// Where a resolved value came from, in increasing precedence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Origin {
    Default,
    File { index: usize, path: PathBuf },
    Environment,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::File { path, .. } => write!(f, "file {}", path.display()),
            Self::Environment => f.write_str("environment"),
        }
    }
}

/// Raw override text found for a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override<'a> {
    pub raw: &'a str,
    pub origin: Origin,
    /// The environment value was not valid Unicode; `raw` is a lossy decoding.
    pub lossy: bool,
}

impl Override<'_> {
    /// Returns the override text, or an error if it could not be decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for a value that was not valid Unicode.
    pub fn text(&self, key: &str, expected: ValueKind) -> Result<&str, ConfigError> {
        if self.lossy {
            return Err(ConfigError::Parse {
                key: key.to_owned(),
                value: self.raw.to_owned(),
                expected,
                reason: "value is not valid Unicode".to_owned(),
            });
        }
        Ok(self.raw)
    }
}

#[derive(Debug, Clone)]
struct FileOverrides {
    path: PathBuf,
    /// Keys as written in the file, in file order.
    keys: Vec<String>,
    /// Lower-cased key to value.
    values: HashMap<String, String>,
}

/// The ordered override sources consulted by the loader.
///
/// Files are consulted from last to first, and the environment snapshot
/// takes precedence over every file.
#[derive(Debug, Clone, Default)]
pub struct OverrideSources {
    environment: HashMap<String, String>,
    /// Lower-cased environment keys whose value was decoded lossily.
    non_unicode: HashSet<String>,
    files: Vec<FileOverrides>,
}

impl OverrideSources {
    /// Creates sources with no overrides at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots the current process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::new().with_os_env_vars(std::env::vars_os())
    }

    /// Adds raw environment variables.
    ///
    /// Variables whose name is not valid Unicode cannot match any key and are
    /// skipped. A value that is not valid Unicode is kept, and fails to parse
    /// if a setting reads it.
    #[must_use]
    pub fn with_os_env_vars<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        for (key, value) in vars {
            let Ok(key) = key.into_string() else {
                warn!("Skipping environment variable with a non-Unicode name");
                continue;
            };
            let key = key.to_lowercase();
            match value.into_string() {
                Ok(value) => {
                    self.non_unicode.remove(&key);
                    self.environment.insert(key, value);
                }
                Err(value) => {
                    debug!("Environment variable {} is not valid Unicode", key);
                    self.environment
                        .insert(key.clone(), value.to_string_lossy().into_owned());
                    self.non_unicode.insert(key);
                }
            }
        }
        self
    }

    /// Snapshots the process environment and reads the given files in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing or any file is malformed.
    pub fn load(files: &[EnvFile]) -> Result<Self, ConfigError> {
        let mut sources = Self::from_process_env();
        for file in files {
            sources.add_file(file)?;
        }
        Ok(sources)
    }

    /// Adds environment variables, replacing any with the same name.
    #[must_use]
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in vars {
            let key = key.into().to_lowercase();
            self.non_unicode.remove(&key);
            self.environment.insert(key, value.into());
        }
        self
    }

    /// Adds a file source from already-parsed entries. It takes precedence
    /// over every file added before it.
    #[must_use]
    pub fn with_file_values<I, K, V>(mut self, path: impl Into<PathBuf>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.push_file(
            path.into(),
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    /// Reads a dotenv-format file and adds it as the highest-priority file.
    ///
    /// Returns `false` if an optional file was not found and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, or the file cannot be
    /// read or parsed.
    pub fn add_file(&mut self, file: &EnvFile) -> Result<bool, ConfigError> {
        let iter = match dotenvy::from_path_iter(&file.path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                if file.required {
                    return Err(ConfigError::FileMissing {
                        path: file.path.clone(),
                    });
                }
                debug!("Override file {} not found, skipping", file.path.display());
                return Ok(false);
            }
            Err(source) => {
                return Err(ConfigError::FileRead {
                    path: file.path.clone(),
                    source,
                });
            }
        };

        let entries = iter
            .collect::<Result<Vec<_>, _>>()
            .map_err(|source| ConfigError::FileRead {
                path: file.path.clone(),
                source,
            })?;

        debug!(
            "Read {} entries from override file {}",
            entries.len(),
            file.path.display()
        );
        self.push_file(file.path.clone(), entries);
        Ok(true)
    }

    fn push_file(&mut self, path: PathBuf, entries: impl IntoIterator<Item = (String, String)>) {
        let mut keys = Vec::new();
        let mut values = HashMap::new();
        for (key, value) in entries {
            values.insert(key.to_lowercase(), value);
            keys.push(key);
        }
        self.files.push(FileOverrides { path, keys, values });
    }

    /// Finds the highest-priority override for a key, ignoring case.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Override<'_>> {
        let key = key.to_lowercase();

        if let Some(raw) = self.environment.get(&key) {
            return Some(Override {
                raw,
                origin: Origin::Environment,
                lossy: self.non_unicode.contains(&key),
            });
        }

        self.files
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, file)| {
                file.values.get(&key).map(|raw| Override {
                    raw,
                    origin: Origin::File {
                        index,
                        path: file.path.clone(),
                    },
                    lossy: false,
                })
            })
    }

    /// Returns every key read from files, as written, with its file path.
    pub fn file_keys(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.files.iter().flat_map(|file| {
            file.keys
                .iter()
                .map(move |key| (file.path.as_path(), key.as_str()))
        })
    }

    /// Returns the number of file sources that were read.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use tempfile::NamedTempFile;

    fn write_env_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let sources = OverrideSources::new().with_env_vars([("Redis_Port", "6380")]);
        let found = sources.lookup("REDIS_PORT").unwrap();
        assert_eq!(found.raw, "6380");
        assert_eq!(found.origin, Origin::Environment);
    }

    #[test]
    fn test_later_file_wins() {
        let sources = OverrideSources::new()
            .with_file_values(".env", [("REDIS_PORT", "1"), ("REDIS_HOST", "base")])
            .with_file_values(".env.server", [("redis_port", "2")]);

        let port = sources.lookup("redis_port").unwrap();
        assert_eq!(port.raw, "2");
        assert_eq!(
            port.origin,
            Origin::File {
                index: 1,
                path: PathBuf::from(".env.server")
            }
        );
        assert_eq!(sources.lookup("redis_host").unwrap().raw, "base");
    }

    #[test]
    fn test_environment_beats_files() {
        let sources = OverrideSources::new()
            .with_file_values(".env", [("BOT_PREFIX", "?")])
            .with_env_vars([("BOT_PREFIX", "$")]);
        assert_eq!(sources.lookup("bot_prefix").unwrap().raw, "$");
    }

    #[test]
    fn test_unknown_key_is_absent() {
        let sources = OverrideSources::new().with_env_vars([("SOMETHING", "1")]);
        assert!(sources.lookup("bot_token").is_none());
    }

    #[test]
    fn test_add_file_reads_dotenv_format() {
        let file = write_env_file(
            "# comment\nBOT_TOKEN=abc\nemojis_bot='<:bot:812712599464443914>'\n",
        );
        let mut sources = OverrideSources::new();

        assert!(sources.add_file(&EnvFile::required(file.path())).unwrap());
        assert_eq!(sources.lookup("bot_token").unwrap().raw, "abc");
        assert_eq!(
            sources.lookup("EMOJIS_BOT").unwrap().raw,
            "<:bot:812712599464443914>"
        );

        let keys: Vec<&str> = sources.file_keys().map(|(_, key)| key).collect();
        assert_eq!(keys, ["BOT_TOKEN", "emojis_bot"]);
    }

    #[test]
    fn test_missing_optional_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = OverrideSources::new();

        let added = sources
            .add_file(&EnvFile::optional(dir.path().join(".env")))
            .unwrap();
        assert!(!added);
        assert_eq!(sources.file_count(), 0);
    }

    #[test]
    fn test_missing_required_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = OverrideSources::new();

        let result = sources.add_file(&EnvFile::required(dir.path().join(".env.server")));
        assert!(matches!(result, Err(ConfigError::FileMissing { .. })));
    }

    #[test]
    fn test_malformed_file_fails() {
        for content in ["BOT_TOKEN='abc\n", "BOT TOKEN=1\n"] {
            let file = write_env_file(content);
            let result = OverrideSources::new().add_file(&EnvFile::required(file.path()));
            assert!(
                matches!(result, Err(ConfigError::FileRead { .. })),
                "{content:?}"
            );
        }
    }

    #[test]
    fn test_non_utf8_file_fails() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"BOT_TOKEN=\xff\xfe\n").unwrap();

        let result = OverrideSources::new().add_file(&EnvFile::optional(file.path()));
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_env_value_fails_when_read() {
        use std::os::unix::ffi::OsStringExt;

        let sources = OverrideSources::new().with_os_env_vars([
            (OsString::from("BOT_TOKEN"), OsString::from_vec(vec![0xff, 0xfe])),
            (OsString::from("BOT_PREFIX"), OsString::from("?")),
        ]);

        let token = sources.lookup("bot_token").unwrap();
        assert!(token.lossy);
        let err = token.text("BOT_TOKEN", ValueKind::Text).unwrap_err();
        assert_eq!(err.key(), Some("BOT_TOKEN"));

        let prefix = sources.lookup("BOT_PREFIX").unwrap();
        assert_eq!(prefix.text("BOT_PREFIX", ValueKind::Text).unwrap(), "?");

        let replaced = sources.with_env_vars([("BOT_TOKEN", "abc")]);
        assert!(!replaced.lookup("bot_token").unwrap().lossy);
    }

    #[test]
    fn test_origin_precedence_order() {
        let file = Origin::File {
            index: 0,
            path: PathBuf::from(".env"),
        };
        assert!(Origin::Default < file);
        assert!(file < Origin::Environment);
    }
}
