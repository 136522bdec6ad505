//! Locale identity resolution between the unified catalog and store locale codes.
//!
//! The unified catalog is the closed set of codes content is stored under. Each
//! store has its own code space that covers only part of the catalog and spells
//! some languages differently. This module translates between the three spaces.

pub mod catalog;
pub mod convert;
pub mod error;
pub mod registry;
pub mod table;

// Re-export types
pub use catalog::{Store, UnifiedLocale};
pub use convert::*;
pub use error::{LocaleError, LocaleResult, TableError};
pub use registry::LocaleRegistry;
pub use table::{LocaleAlias, LocaleRow};

/// The built-in registry.
pub fn registry() -> &'static LocaleRegistry {
    LocaleRegistry::builtin()
}
