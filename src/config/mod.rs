//! Configuration module for the guild bot.
//!
//! Declares every configuration section with its coded defaults and
//! resolves overrides from `.env` files and the process environment into
//! one immutable [`Settings`] value.

mod derived;
mod error;
mod loader;
mod schema;
mod sections;
mod settings;
mod sources;
mod value;

pub use derived::{Derived, SiteUrls};
pub use error::ConfigError;
pub use loader::{load_section, render_section, validate_section, ResolvedField, ResolvedSection};
pub use schema::{FieldSpec, SectionSchema, Setting, NESTED_DELIMITER};
pub use sections::*;
pub use settings::{LoadOptions, LoadReport, Settings, DEFAULT_GIT_SHA, GIT_SHA_KEY};
pub use sources::{EnvFile, Origin, Override, OverrideSources};
pub use value::{Colour, Value, ValueKind};
