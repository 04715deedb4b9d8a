//! Declared configuration sections and their coded defaults.
//!
//! Each section is declared once with [`settings_section!`]: field names,
//! types and defaults. The macro derives the schema handed to the generic
//! loader and the typed extraction back out of the resolved values.

use serde::Serializer;

/// Declares a configuration section.
///
/// Sections whose defaults refer to other, already resolved sections take a
/// context argument with `with name: Type`, which the default expressions
/// may use.
macro_rules! settings_section {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $prefix:literal $(with $ctx:ident: $ctx_ty:ty)? {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty = $default:expr,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Section name used in logs and errors.
            pub const NAME: &'static str = stringify!($name);

            /// Prefix of every override key in this section.
            pub const PREFIX: &'static str = $prefix;

            /// Returns the coded defaults.
            #[must_use]
            pub fn defaults($($ctx: $ctx_ty)?) -> Self {
                Self {
                    $( $field: $default, )*
                }
            }

            /// Describes this section as a schema whose defaults are its
            /// current values.
            #[must_use]
            pub fn to_schema(&self) -> $crate::config::SectionSchema {
                $crate::config::SectionSchema::new(Self::NAME, Self::PREFIX)
                    $( .field(stringify!($field), $crate::config::Setting::to_value(&self.$field)) )*
            }

            /// Extracts the typed section from resolved values.
            ///
            /// # Errors
            ///
            /// Returns [`ConfigError::Schema`](crate::config::ConfigError::Schema)
            /// if a field is missing or of another kind.
            pub fn from_resolved(
                resolved: &$crate::config::ResolvedSection,
            ) -> Result<Self, $crate::config::ConfigError> {
                Ok(Self {
                    $( $field: resolved.get(stringify!($field))?, )*
                })
            }

            /// Loads the section, also returning the resolved values with
            /// their origins.
            ///
            /// # Errors
            ///
            /// Returns an error if an override cannot be parsed.
            pub fn resolve(
                $($ctx: $ctx_ty,)?
                sources: &$crate::config::OverrideSources,
            ) -> Result<(Self, $crate::config::ResolvedSection), $crate::config::ConfigError> {
                let schema = Self::defaults($($ctx)?).to_schema();
                let resolved = $crate::config::load_section(&schema, sources)?;
                Ok((Self::from_resolved(&resolved)?, resolved))
            }

            /// Loads the section from the given override sources.
            ///
            /// # Errors
            ///
            /// Returns an error if an override cannot be parsed.
            pub fn load(
                $($ctx: $ctx_ty,)?
                sources: &$crate::config::OverrideSources,
            ) -> Result<Self, $crate::config::ConfigError> {
                Self::resolve($($ctx,)? sources).map(|(section, _)| section)
            }
        }
    };
}

/// Declares a nested record usable as a section field.
macro_rules! settings_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident: $ty:ty,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )*
        }

        impl $crate::config::Setting for $name {
            fn to_value(&self) -> $crate::config::Value {
                $crate::config::Value::Record(vec![
                    $( (stringify!($field).to_owned(), $crate::config::Setting::to_value(&self.$field)), )*
                ])
            }

            fn from_value(value: &$crate::config::Value) -> Option<Self> {
                Some(Self {
                    $( $field: <$ty as $crate::config::Setting>::from_value(value.field(stringify!($field))?)?, )*
                })
            }
        }
    };
}

mod appearance;
mod discord;
mod moderation;
mod services;

pub use appearance::{Colours, Emojis, Icons};
pub use discord::{Categories, Channels, Guild, Roles, Webhook, Webhooks};
pub use moderation::{
    AntiSpam, BigBrother, CleanMessages, CodeBlock, Cooldowns, DuckPond, ExtendedRule, Filter,
    Free, HelpChannels, Punishment, RedirectOutput, Rule, Rules, VideoPermission, VoiceGate,
};
pub use services::{
    BaseUrls, Bot, Branding, Keys, Metabase, Miscellaneous, PythonNews, Redis, Stats,
};

/// The resolved identifier sections that other sections' defaults refer to.
#[derive(Debug, Clone, Copy)]
pub struct BaseSections<'a> {
    pub channels: &'a Channels,
    pub roles: &'a Roles,
    pub categories: &'a Categories,
}

/// Serialises a secret as a fixed mask, keeping empty values visible.
fn redact<S: Serializer>(value: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if value.is_empty() { "" } else { "********" })
}
