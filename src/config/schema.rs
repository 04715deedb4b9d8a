//! Section schemas and the typed-setting conversion trait.

use super::value::{Colour, Value};

/// Separator between a record field and its sub-field in override keys,
/// e.g. `WEBHOOKS_DEV_LOG__ID`.
pub const NESTED_DELIMITER: &str = "__";

/// A declared setting: its name and typed default.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub default: Value,
}

/// An ordered list of settings sharing an override key prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSchema {
    /// Section name, used in logs and errors.
    pub name: &'static str,

    /// Prefix prepended to every field name to form its override key.
    pub prefix: &'static str,

    pub fields: Vec<FieldSpec>,
}

impl SectionSchema {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new(name: &'static str, prefix: &'static str) -> Self {
        Self {
            name,
            prefix,
            fields: Vec::new(),
        }
    }

    /// Adds a field with its default value.
    #[must_use]
    pub fn field(mut self, name: &'static str, default: Value) -> Self {
        self.fields.push(FieldSpec { name, default });
        self
    }

    /// Returns the canonical (upper-case) override key for a field.
    #[must_use]
    pub fn env_key(&self, field: &str) -> String {
        format!("{}{}", self.prefix, field).to_uppercase()
    }

    /// Returns every leaf override key, descending into records.
    #[must_use]
    pub fn leaf_keys(&self) -> Vec<(String, &Value)> {
        let mut keys = Vec::new();
        for field in &self.fields {
            collect_leaves(self.env_key(field.name), &field.default, &mut keys);
        }
        keys
    }

    /// Returns every key the loader consults, including whole-record keys.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for field in &self.fields {
            collect_keys(self.env_key(field.name), &field.default, &mut keys);
        }
        keys
    }
}

fn collect_keys(key: String, value: &Value, out: &mut Vec<String>) {
    if let Value::Record(fields) = value {
        for (name, sub) in fields {
            collect_keys(
                format!("{key}{NESTED_DELIMITER}{}", name.to_uppercase()),
                sub,
                out,
            );
        }
    }
    out.push(key);
}

fn collect_leaves<'a>(key: String, value: &'a Value, out: &mut Vec<(String, &'a Value)>) {
    match value {
        Value::Record(fields) => {
            for (name, sub) in fields {
                let sub_key = format!("{key}{NESTED_DELIMITER}{}", name.to_uppercase());
                collect_leaves(sub_key, sub, out);
            }
        }
        leaf => out.push((key, leaf)),
    }
}

/// Conversion between a typed setting field and its schema [`Value`].
pub trait Setting: Sized {
    /// Converts the field into a schema value.
    fn to_value(&self) -> Value;

    /// Extracts the field from a resolved value of the matching kind.
    fn from_value(value: &Value) -> Option<Self>;
}

impl Setting for u64 {
    fn to_value(&self) -> Value {
        Value::Integer(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl Setting for Option<u64> {
    fn to_value(&self) -> Value {
        Value::OptionalInteger(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::OptionalInteger(n) => Some(*n),
            _ => None,
        }
    }
}

impl Setting for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl Setting for bool {
    fn to_value(&self) -> Value {
        Value::Boolean(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl Setting for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl Setting for Vec<u64> {
    fn to_value(&self) -> Value {
        Value::IntegerList(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::IntegerList(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl Setting for Vec<String> {
    fn to_value(&self) -> Value {
        Value::TextList(self.clone())
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::TextList(items) => Some(items.clone()),
            _ => None,
        }
    }
}

impl Setting for Colour {
    fn to_value(&self) -> Value {
        Value::Colour(self.0)
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Colour(c) => Some(Self(*c)),
            _ => None,
        }
    }
}
