//! Guild Bot Configuration Library
//!
//! Typed configuration for a community Discord bot.
//!
//! This crate provides:
//! - Declared configuration sections with coded defaults
//! - Overrides from `.env` files and the process environment
//! - Derived values composed after all sections are resolved
//! - Static constants such as event names and canned replies

pub mod config;
pub mod constants;
