//! Generic section loader: overlays override sources onto a schema.

use std::fmt;

use tracing::debug;

use super::error::ConfigError;
use super::schema::{SectionSchema, Setting, NESTED_DELIMITER};
use super::sources::{Origin, OverrideSources};
use super::value::Value;

/// A setting after overrides were applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub name: &'static str,
    pub key: String,
    pub value: Value,
    pub origin: Origin,
}

/// A fully resolved section: every schema field with its final value.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSection {
    name: &'static str,
    fields: Vec<ResolvedField>,
}

impl ResolvedSection {
    /// Returns the section name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns all fields in schema order.
    #[must_use]
    pub fn fields(&self) -> &[ResolvedField] {
        &self.fields
    }

    /// Returns the resolved value of a field.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }

    /// Extracts a typed field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Schema`] if the field is absent or of another kind.
    pub fn get<T: Setting>(&self, name: &'static str) -> Result<T, ConfigError> {
        self.value(name)
            .and_then(T::from_value)
            .ok_or(ConfigError::Schema {
                section: self.name,
                field: name,
                expected: std::any::type_name::<T>(),
            })
    }

    /// Returns the fields whose value did not come from the default.
    pub fn overrides(&self) -> impl Iterator<Item = &ResolvedField> {
        self.fields
            .iter()
            .filter(|field| field.origin != Origin::Default)
    }
}

/// Resolves every field of `schema` against `sources`.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] for the first override that cannot be
/// coerced to its field's type.
pub fn load_section(
    schema: &SectionSchema,
    sources: &OverrideSources,
) -> Result<ResolvedSection, ConfigError> {
    let mut fields = Vec::with_capacity(schema.fields.len());

    for field in &schema.fields {
        let key = schema.env_key(field.name);
        let (value, origin) = resolve(&key, &field.default, sources)?;

        if origin != Origin::Default {
            debug!(section = schema.name, %origin, "Applied override for {}", key);
        }

        fields.push(ResolvedField {
            name: field.name,
            key,
            value,
            origin,
        });
    }

    Ok(ResolvedSection {
        name: schema.name,
        fields,
    })
}

/// Checks every field of `schema`, collecting all failures instead of
/// stopping at the first one.
#[must_use]
pub fn validate_section(
    schema: &SectionSchema,
    sources: &OverrideSources,
) -> Vec<(String, Result<Origin, ConfigError>)> {
    schema
        .fields
        .iter()
        .map(|field| {
            let key = schema.env_key(field.name);
            let result = resolve(&key, &field.default, sources).map(|(_, origin)| origin);
            (key, result)
        })
        .collect()
}

/// Resolves one key. Records are resolved whole first, then refined by
/// their leaf keys.
fn resolve(
    key: &str,
    default: &Value,
    sources: &OverrideSources,
) -> Result<(Value, Origin), ConfigError> {
    let (mut value, mut origin) = match sources.lookup(key) {
        Some(found) => {
            let value = default
                .parse_as(found.text(key, default.kind())?)
                .map_err(|reason| ConfigError::Parse {
                    key: key.to_owned(),
                    value: found.raw.to_owned(),
                    expected: default.kind(),
                    reason,
                })?;
            (value, found.origin)
        }
        None => (default.clone(), Origin::Default),
    };

    if let Value::Record(fields) = &mut value {
        for (name, sub_value) in fields.iter_mut() {
            let sub_key = format!("{key}{NESTED_DELIMITER}{}", name.to_uppercase());
            let (resolved, sub_origin) = resolve(&sub_key, sub_value, sources)?;
            *sub_value = resolved;
            origin = origin.max(sub_origin);
        }
    }

    Ok((value, origin))
}

/// Writes one dotenv line per leaf key of `schema`.
///
/// # Errors
///
/// Returns an error only if `out` fails to accept the text.
pub fn render_section<W: fmt::Write>(schema: &SectionSchema, out: &mut W) -> fmt::Result {
    for (key, value) in schema.leaf_keys() {
        writeln!(out, "{key}={}", quote_env_value(&value.render()))?;
    }
    Ok(())
}

/// Quotes a value so that dotenv parsing returns it verbatim.
pub(crate) fn quote_env_value(value: &str) -> String {
    if !value.contains('\'') {
        return format!("'{value}'");
    }
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('$', "\\$")
        .replace('\n', "\\n");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn retries_schema() -> SectionSchema {
        SectionSchema::new("Client", "client_")
            .field("retries", Value::Integer(3))
            .field("enabled", Value::Boolean(true))
    }

    fn webhook_schema() -> SectionSchema {
        SectionSchema::new("Webhooks", "webhooks_").field(
            "dev_log",
            Value::Record(vec![
                ("id".to_owned(), Value::Integer(680_501_655_111_729_222)),
                ("channel".to_owned(), Value::OptionalInteger(Some(622_895_325_144_940_554))),
            ]),
        )
    }

    #[test]
    fn test_defaults_without_overrides() {
        let section = load_section(&retries_schema(), &OverrideSources::new()).unwrap();
        assert_eq!(section.get::<u64>("retries").unwrap(), 3);
        assert!(section.get::<bool>("enabled").unwrap());
        assert_eq!(section.overrides().count(), 0);
    }

    #[test]
    fn test_file_override() {
        let sources = OverrideSources::new().with_file_values(".env", [("CLIENT_RETRIES", "5")]);
        let section = load_section(&retries_schema(), &sources).unwrap();
        assert_eq!(section.get::<u64>("retries").unwrap(), 5);
        assert!(section.get::<bool>("enabled").unwrap());
    }

    #[test]
    fn test_environment_and_file_overrides_combine() {
        let sources = OverrideSources::new()
            .with_file_values(".env", [("client_retries", "5")])
            .with_env_vars([("CLIENT_ENABLED", "false")]);
        let section = load_section(&retries_schema(), &sources).unwrap();
        assert_eq!(section.get::<u64>("retries").unwrap(), 5);
        assert!(!section.get::<bool>("enabled").unwrap());

        let origins: Vec<&Origin> = section.fields().iter().map(|f| &f.origin).collect();
        assert!(matches!(origins[0], Origin::File { index: 0, .. }));
        assert_eq!(origins[1], &Origin::Environment);
    }

    #[test]
    fn test_highest_priority_source_wins() {
        let sources = OverrideSources::new()
            .with_file_values(".env", [("CLIENT_RETRIES", "5")])
            .with_file_values(".env.server", [("CLIENT_RETRIES", "6")]);
        let section = load_section(&retries_schema(), &sources).unwrap();
        assert_eq!(section.get::<u64>("retries").unwrap(), 6);

        let sources = sources.with_env_vars([("CLIENT_RETRIES", "7")]);
        let section = load_section(&retries_schema(), &sources).unwrap();
        assert_eq!(section.get::<u64>("retries").unwrap(), 7);
    }

    #[test]
    fn test_empty_integer_fails() {
        let sources = OverrideSources::new().with_env_vars([("CLIENT_RETRIES", "")]);
        let err = load_section(&retries_schema(), &sources).unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::Parse { key, value, .. } if key == "CLIENT_RETRIES" && value.is_empty()
        ));
    }

    #[test]
    fn test_record_leaf_override() {
        let sources =
            OverrideSources::new().with_env_vars([("WEBHOOKS_DEV_LOG__CHANNEL", "42")]);
        let section = load_section(&webhook_schema(), &sources).unwrap();
        let record = section.value("dev_log").unwrap();
        assert_eq!(record.field("id"), Some(&Value::Integer(680_501_655_111_729_222)));
        assert_eq!(record.field("channel"), Some(&Value::OptionalInteger(Some(42))));
        assert_eq!(section.fields()[0].origin, Origin::Environment);
    }

    #[test]
    fn test_record_whole_value_refined_by_leaf() {
        let sources = OverrideSources::new()
            .with_file_values(".env", [("WEBHOOKS_DEV_LOG", r#"{"id": 1, "channel": 2}"#)])
            .with_env_vars([("webhooks_dev_log__id", "3")]);
        let section = load_section(&webhook_schema(), &sources).unwrap();
        let record = section.value("dev_log").unwrap();
        assert_eq!(record.field("id"), Some(&Value::Integer(3)));
        assert_eq!(record.field("channel"), Some(&Value::OptionalInteger(Some(2))));
    }

    #[test]
    fn test_record_leaf_parse_error_names_leaf_key() {
        let sources = OverrideSources::new().with_env_vars([("WEBHOOKS_DEV_LOG__ID", "abc")]);
        let err = load_section(&webhook_schema(), &sources).unwrap_err();
        assert_eq!(err.key(), Some("WEBHOOKS_DEV_LOG__ID"));
    }

    #[test]
    fn test_get_with_wrong_type_is_schema_error() {
        let section = load_section(&retries_schema(), &OverrideSources::new()).unwrap();
        assert!(matches!(
            section.get::<String>("retries"),
            Err(ConfigError::Schema { field: "retries", .. })
        ));
        assert!(section.get::<u64>("missing").is_err());
    }

    #[test]
    fn test_validate_section_reports_every_field() {
        let sources = OverrideSources::new()
            .with_env_vars([("CLIENT_RETRIES", "many"), ("CLIENT_ENABLED", "perhaps")]);
        let results = validate_section(&retries_schema(), &sources);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|(_, result)| result.is_err()));
    }

    #[test]
    fn test_render_section() {
        let mut out = String::new();
        render_section(&webhook_schema(), &mut out).unwrap();
        assert_eq!(
            out,
            "WEBHOOKS_DEV_LOG__ID='680501655111729222'\n\
             WEBHOOKS_DEV_LOG__CHANNEL='622895325144940554'\n"
        );
    }

    #[test]
    fn test_quote_env_value_with_single_quote() {
        assert_eq!(quote_env_value("I'm $HOME"), "\"I'm \\$HOME\"");
        assert_eq!(quote_env_value("plain"), "'plain'");
    }
}
