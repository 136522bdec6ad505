//! storelocale - Store locale identity resolution
//!
//! Translates locale identifiers between a closed catalog of unified locale
//! codes and the App Store Connect and Google Play Console locale code spaces,
//! and derives which unified locales each store supports.
//!
//! All lookups are synchronous and run over immutable tables built once per
//! process, so any number of threads may call them without coordination.

pub mod config;
pub mod locale;

// Re-export commonly used types
pub use config::{ConfigError, LocaleConfig, PublishPlan};
pub use locale::{
    KeyedConversion, LocaleError, LocaleRegistry, LocaleResult, Store, TableError, UnifiedLocale,
};
