//! Typed configuration values and their text forms.
//!
//! Every setting default is a [`Value`]; its variant fixes the type that
//! override text is parsed into.

use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value as Json;

/// The semantic type of a setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Integer,
    OptionalInteger,
    Float,
    Boolean,
    Text,
    IntegerList,
    TextList,
    Colour,
    Record,
}

impl ValueKind {
    /// Returns a human readable name for error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::OptionalInteger => "optional integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Text => "string",
            Self::IntegerList => "list of integers",
            Self::TextList => "list of strings",
            Self::Colour => "hex colour",
            Self::Record => "record",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A resolved or default setting value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(u64),
    OptionalInteger(Option<u64>),
    Float(f64),
    Boolean(bool),
    Text(String),
    IntegerList(Vec<u64>),
    TextList(Vec<String>),
    Colour(u32),
    /// Ordered sub-fields of a nested record.
    Record(Vec<(String, Value)>),
}

impl Value {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Integer(_) => ValueKind::Integer,
            Self::OptionalInteger(_) => ValueKind::OptionalInteger,
            Self::Float(_) => ValueKind::Float,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Text(_) => ValueKind::Text,
            Self::IntegerList(_) => ValueKind::IntegerList,
            Self::TextList(_) => ValueKind::TextList,
            Self::Colour(_) => ValueKind::Colour,
            Self::Record(_) => ValueKind::Record,
        }
    }

    /// Looks up a sub-field of a record value.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Record(fields) => fields
                .iter()
                .find(|(field, _)| field == name)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    /// Parses override text into a value of the same kind as `self`.
    ///
    /// `self` acts as the default: record sub-fields missing from the
    /// override keep their current value.
    ///
    /// # Errors
    ///
    /// Returns a short reason when the text cannot be coerced.
    pub fn parse_as(&self, raw: &str) -> Result<Self, String> {
        match self {
            Self::Integer(_) => parse_integer(raw).map(Self::Integer),
            Self::OptionalInteger(_) => parse_optional_integer(raw).map(Self::OptionalInteger),
            Self::Float(_) => parse_float(raw).map(Self::Float),
            Self::Boolean(_) => parse_bool(raw).map(Self::Boolean),
            Self::Text(_) => Ok(Self::Text(raw.to_owned())),
            Self::IntegerList(_) => list_items(raw)?
                .iter()
                .map(json_integer)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::IntegerList),
            Self::TextList(_) => list_items(raw)?
                .iter()
                .map(json_text)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::TextList),
            Self::Colour(_) => parse_colour(raw).map(Self::Colour),
            Self::Record(_) => {
                let json: Json = serde_json::from_str(raw.trim()).map_err(|e| e.to_string())?;
                self.coerce_json(&json)
            }
        }
    }

    /// Converts structured JSON into a value of the same kind as `self`.
    fn coerce_json(&self, json: &Json) -> Result<Self, String> {
        match self {
            Self::Integer(_) => json_integer(json).map(Self::Integer),
            Self::OptionalInteger(_) => match json {
                Json::Null => Ok(Self::OptionalInteger(None)),
                other => json_integer(other).map(|n| Self::OptionalInteger(Some(n))),
            },
            Self::Float(_) => match json {
                Json::Number(n) => n
                    .as_f64()
                    .map(Self::Float)
                    .ok_or_else(|| format!("{n} is not representable as a float")),
                Json::String(s) => parse_float(s).map(Self::Float),
                other => Err(format!("expected a number, found {other}")),
            },
            Self::Boolean(_) => match json {
                Json::Bool(b) => Ok(Self::Boolean(*b)),
                Json::String(s) => parse_bool(s).map(Self::Boolean),
                other => Err(format!("expected a boolean, found {other}")),
            },
            Self::Text(_) => json_text(json).map(Self::Text),
            Self::IntegerList(_) | Self::TextList(_) => match json {
                Json::Array(_) => self.parse_as(&json.to_string()),
                other => Err(format!("expected an array, found {other}")),
            },
            Self::Colour(_) => match json {
                Json::String(s) => parse_colour(s).map(Self::Colour),
                Json::Number(_) => {
                    let n = json_integer(json)?;
                    u32::try_from(n)
                        .ok()
                        .filter(|c| *c <= MAX_COLOUR)
                        .map(Self::Colour)
                        .ok_or_else(|| format!("{n} exceeds 24 bits"))
                }
                other => Err(format!("expected a hex string, found {other}")),
            },
            Self::Record(defaults) => {
                let Json::Object(map) = json else {
                    return Err(format!("expected a JSON object, found {json}"));
                };
                let mut fields = defaults.clone();
                for (name, value) in &mut fields {
                    if let Some(item) = map.get(name.as_str()) {
                        *value = value
                            .coerce_json(item)
                            .map_err(|reason| format!("field {name}: {reason}"))?;
                    }
                }
                Ok(Self::Record(fields))
            }
        }
    }

    /// Renders the value as override text that [`Value::parse_as`] reads back.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::OptionalInteger(n) => n.map(|n| n.to_string()).unwrap_or_default(),
            Self::Float(f) => f.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Text(s) => s.clone(),
            Self::Colour(c) => format!("0x{c:06x}"),
            Self::IntegerList(_) | Self::TextList(_) | Self::Record(_) => self.to_json().to_string(),
        }
    }

    /// Converts the value to JSON.
    #[must_use]
    pub fn to_json(&self) -> Json {
        match self {
            Self::Integer(n) => Json::from(*n),
            Self::OptionalInteger(n) => n.map_or(Json::Null, Json::from),
            Self::Float(f) => Json::from(*f),
            Self::Boolean(b) => Json::Bool(*b),
            Self::Text(s) => Json::String(s.clone()),
            Self::IntegerList(items) => Json::from(items.clone()),
            Self::TextList(items) => Json::from(items.clone()),
            Self::Colour(c) => Json::String(format!("0x{c:06x}")),
            Self::Record(fields) => Json::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }
}

/// Largest colour Discord accepts (24-bit RGB).
const MAX_COLOUR: u32 = 0x00FF_FFFF;

/// A 24-bit RGB colour, written in hex in override files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour(pub u32);

impl Colour {
    /// Returns the packed RGB value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the red, green and blue components.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn parse_integer(raw: &str) -> Result<u64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty value".to_owned());
    }
    trimmed.parse().map_err(|e: std::num::ParseIntError| e.to_string())
}

fn parse_optional_integer(raw: &str) -> Result<Option<u64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
    {
        return Ok(None);
    }
    parse_integer(trimmed).map(Some)
}

fn parse_float(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| e.to_string())
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("unrecognised boolean {other:?}")),
    }
}

fn parse_colour(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err("empty value".to_owned());
    }

    let colour = u32::from_str_radix(digits, 16).map_err(|e| e.to_string())?;
    if colour > MAX_COLOUR {
        return Err(format!("{colour:#x} exceeds 24 bits"));
    }
    Ok(colour)
}

/// Splits list text: a JSON array, or comma-separated items.
fn list_items(raw: &str) -> Result<Vec<Json>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    if trimmed.starts_with('[') {
        return serde_json::from_str(trimmed).map_err(|e| e.to_string());
    }
    Ok(trimmed
        .split(',')
        .map(|item| Json::String(item.trim().to_owned()))
        .collect())
}

fn json_integer(json: &Json) -> Result<u64, String> {
    match json {
        Json::Number(n) => n
            .as_u64()
            .ok_or_else(|| format!("{n} is not a non-negative integer")),
        Json::String(s) => parse_integer(s),
        other => Err(format!("expected an integer, found {other}")),
    }
}

fn json_text(json: &Json) -> Result<String, String> {
    match json {
        Json::String(s) => Ok(s.clone()),
        Json::Null => Err("expected a string, found null".to_owned()),
        other => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(Value::Integer(3).parse_as(" 42 "), Ok(Value::Integer(42)));
        assert!(Value::Integer(3).parse_as("forty").is_err());
        assert!(Value::Integer(3).parse_as("-1").is_err());
    }

    #[test]
    fn test_parse_integer_empty_fails() {
        assert_eq!(
            Value::Integer(3).parse_as(""),
            Err("empty value".to_owned())
        );
    }

    #[test]
    fn test_parse_bool_tokens() {
        let default = Value::Boolean(false);
        for token in ["true", "TRUE", "1", "yes", "Yes", "on"] {
            assert_eq!(default.parse_as(token), Ok(Value::Boolean(true)), "{token}");
        }
        for token in ["false", "False", "0", "no", "NO", "off"] {
            assert_eq!(default.parse_as(token), Ok(Value::Boolean(false)), "{token}");
        }
        assert!(default.parse_as("maybe").is_err());
    }

    #[test]
    fn test_parse_float() {
        assert_eq!(Value::Float(1.0).parse_as("60.5"), Ok(Value::Float(60.5)));
        assert_eq!(Value::Float(1.0).parse_as("60"), Ok(Value::Float(60.0)));
    }

    #[test]
    fn test_parse_optional_integer() {
        let default = Value::OptionalInteger(Some(1));
        assert_eq!(default.parse_as(""), Ok(Value::OptionalInteger(None)));
        assert_eq!(default.parse_as("null"), Ok(Value::OptionalInteger(None)));
        assert_eq!(default.parse_as("7"), Ok(Value::OptionalInteger(Some(7))));
    }

    #[test]
    fn test_parse_integer_list_forms() {
        let default = Value::IntegerList(vec![1]);
        assert_eq!(default.parse_as("[1, 2, 3]"), Ok(Value::IntegerList(vec![1, 2, 3])));
        assert_eq!(default.parse_as("4, 5"), Ok(Value::IntegerList(vec![4, 5])));
        assert_eq!(default.parse_as(""), Ok(Value::IntegerList(vec![])));
        assert!(default.parse_as("1,,2").is_err());
    }

    #[test]
    fn test_parse_text_list_forms() {
        let default = Value::TextList(vec![]);
        assert_eq!(
            default.parse_as(r#"["python-dev", "pypi-announce"]"#),
            Ok(Value::TextList(vec!["python-dev".to_owned(), "pypi-announce".to_owned()]))
        );
        assert_eq!(
            default.parse_as("a, b"),
            Ok(Value::TextList(vec!["a".to_owned(), "b".to_owned()]))
        );
    }

    #[test]
    fn test_parse_colour_prefixes() {
        let default = Value::Colour(0);
        assert_eq!(default.parse_as("3775a8"), Ok(Value::Colour(0x0037_75a8)));
        assert_eq!(default.parse_as("0x3775A8"), Ok(Value::Colour(0x0037_75a8)));
        assert_eq!(default.parse_as("#fffffe"), Ok(Value::Colour(0x00ff_fffe)));
        assert!(default.parse_as("1000000").is_err());
        assert!(default.parse_as("green").is_err());
    }

    #[test]
    fn test_parse_record_keeps_missing_fields() {
        let default = Value::Record(vec![
            ("id".to_owned(), Value::Integer(1)),
            ("channel".to_owned(), Value::OptionalInteger(Some(2))),
        ]);

        let parsed = default.parse_as(r#"{"id": 10}"#).unwrap();
        assert_eq!(parsed.field("id"), Some(&Value::Integer(10)));
        assert_eq!(parsed.field("channel"), Some(&Value::OptionalInteger(Some(2))));

        let parsed = default.parse_as(r#"{"channel": null, "extra": 1}"#).unwrap();
        assert_eq!(parsed.field("channel"), Some(&Value::OptionalInteger(None)));
    }

    #[test]
    fn test_parse_record_rejects_bad_field() {
        let default = Value::Record(vec![("id".to_owned(), Value::Integer(1))]);
        let err = default.parse_as(r#"{"id": "abc"}"#).unwrap_err();
        assert!(err.starts_with("field id:"), "{err}");
    }

    #[test]
    fn test_render_is_readable_by_parse() {
        let values = [
            Value::Integer(1_035_199_133_436_354_600),
            Value::OptionalInteger(None),
            Value::Float(60.0),
            Value::Boolean(true),
            Value::Text("<:bot:812712599464443914>".to_owned()),
            Value::IntegerList(vec![267_628_507_062_992_896, 3]),
            Value::TextList(vec!["python-ideas".to_owned()]),
            Value::Colour(0x00e6_7e22),
        ];
        for value in values {
            assert_eq!(value.parse_as(&value.render()).as_ref(), Ok(&value));
        }
    }

    #[test]
    fn test_colour_components() {
        let colour = Colour(0x0037_75a8);
        assert_eq!(colour.rgb(), (0x37, 0x75, 0xa8));
        assert_eq!(colour.to_string(), "#3775a8");
    }
}
