//! Locale resolution error types.

use thiserror::Error;

use super::catalog::Store;

/// Errors returned by locale lookups and conversions.
///
/// No variant is transient. Each one means the caller (or an upstream store
/// response) supplied a code that has to be corrected at its source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The code is not in the unified catalog.
    #[error("Unknown unified locale: {0:?}")]
    UnknownUnifiedLocale(String),

    /// The code is not in the store's reverse table.
    #[error("Unknown {store} locale code: {code:?}")]
    UnknownPlatformLocale { store: Store, code: String },

    /// The same key appears twice in one source collection.
    #[error("Key {0:?} appears more than once")]
    DuplicateKey(String),

    /// Two distinct source keys resolved to the same target key.
    #[error("{first:?} and {second:?} both resolve to {unified:?} ({store})")]
    KeyCollision {
        store: Store,
        unified: String,
        first: String,
        second: String,
    },
}

/// Result type for locale operations.
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Integrity violations found while building a registry from a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Unified locale {0:?} appears more than once")]
    DuplicateUnified(&'static str),

    #[error("Unified locale {code:?} is not canonical (expected {canonical:?})")]
    NonCanonicalUnified {
        code: &'static str,
        canonical: String,
    },

    #[error("{store} code {code:?} is targeted by both {first:?} and {second:?}")]
    NonInjective {
        store: Store,
        code: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("{store} alias {code:?} shadows the forward code of {unified:?}")]
    AliasShadowsForward {
        store: Store,
        code: &'static str,
        unified: &'static str,
    },

    #[error("{store} alias {code:?} points to unknown unified locale {unified:?}")]
    AliasTargetUnknown {
        store: Store,
        code: &'static str,
        unified: &'static str,
    },

    #[error("{store} alias {code:?} appears more than once")]
    DuplicateAlias { store: Store, code: &'static str },
}
