//! Unified locale identity and store identity types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::LocaleError;

/// A locale drawn from the closed unified catalog.
///
/// Values only come out of a [`LocaleRegistry`](super::LocaleRegistry), so holding one
/// proves catalog membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnifiedLocale(&'static str);

impl UnifiedLocale {
    pub(crate) const fn new_unchecked(code: &'static str) -> Self {
        Self(code)
    }

    /// Parse an exact unified code against the built-in catalog.
    pub fn parse(code: &str) -> Result<Self, LocaleError> {
        super::registry().unified(code)
    }

    /// The canonical unified code.
    pub fn code(&self) -> &'static str {
        self.0
    }

    /// The English display name.
    pub fn display_name(&self) -> &'static str {
        super::registry().display_name(*self)
    }
}

impl std::fmt::Display for UnifiedLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl AsRef<str> for UnifiedLocale {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl std::str::FromStr for UnifiedLocale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for UnifiedLocale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for UnifiedLocale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::parse(&code).map_err(serde::de::Error::custom)
    }
}

/// A storefront with its own locale code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Store {
    AppStore,
    GooglePlay,
}

impl Store {
    /// Get the store identifier string.
    pub fn id(&self) -> &'static str {
        match self {
            Store::AppStore => "app-store",
            Store::GooglePlay => "google-play",
        }
    }

    /// Get the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Store::AppStore => "App Store",
            Store::GooglePlay => "Google Play",
        }
    }

    /// The other store.
    pub fn other(&self) -> Store {
        match self {
            Store::AppStore => Store::GooglePlay,
            Store::GooglePlay => Store::AppStore,
        }
    }

    /// Get all stores.
    pub fn all() -> &'static [Store] {
        &[Store::AppStore, Store::GooglePlay]
    }
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
