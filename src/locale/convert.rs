//! Conversion operations over the built-in registry.
//!
//! Forward conversions (unified to store) return `Ok(None)` when the store does
//! not carry a locale. Unknown inputs are always an error, in both directions and
//! for both stores; nothing here substitutes a default locale.

use std::collections::{BTreeMap, BTreeSet};

use super::catalog::{Store, UnifiedLocale};
use super::error::{LocaleError, LocaleResult};
use super::registry::LocaleRegistry;

fn registry() -> &'static LocaleRegistry {
    LocaleRegistry::builtin()
}

/// Whether `code` is a unified catalog member.
pub fn is_supported_locale(code: &str) -> bool {
    registry().is_supported(code)
}

/// Resolve a unified code leniently (case and `_` insensitive).
pub fn canonicalize_unified(input: &str) -> LocaleResult<UnifiedLocale> {
    registry().canonicalize(input)
}

/// English display name for a unified code.
pub fn display_name(code: &str) -> LocaleResult<&'static str> {
    let locale = registry().unified(code)?;
    Ok(registry().display_name(locale))
}

pub fn to_store(store: Store, code: &str) -> LocaleResult<Option<&'static str>> {
    registry().to_store_code(store, code)
}

pub fn from_store(store: Store, code: &str) -> LocaleResult<UnifiedLocale> {
    registry().from_store(store, code)
}

pub fn store_to_store(from: Store, to: Store, code: &str) -> LocaleResult<Option<&'static str>> {
    registry().store_to_store(from, to, code)
}

pub fn unified_to_app_store(code: &str) -> LocaleResult<Option<&'static str>> {
    to_store(Store::AppStore, code)
}

pub fn unified_to_google_play(code: &str) -> LocaleResult<Option<&'static str>> {
    to_store(Store::GooglePlay, code)
}

pub fn app_store_to_unified(code: &str) -> LocaleResult<UnifiedLocale> {
    from_store(Store::AppStore, code)
}

pub fn google_play_to_unified(code: &str) -> LocaleResult<UnifiedLocale> {
    from_store(Store::GooglePlay, code)
}

/// Pivot an App Store code to Google Play.
///
/// `Ok(None)` when Google Play lacks the language; an error only when the App
/// Store code itself is unknown.
pub fn app_store_to_google_play(code: &str) -> LocaleResult<Option<&'static str>> {
    store_to_store(Store::AppStore, Store::GooglePlay, code)
}

/// Pivot a Google Play code to the App Store.
pub fn google_play_to_app_store(code: &str) -> LocaleResult<Option<&'static str>> {
    store_to_store(Store::GooglePlay, Store::AppStore, code)
}

/// Unified locales the store carries, in catalog order.
pub fn supported_for(store: Store) -> Vec<UnifiedLocale> {
    registry().supported(store)
}

pub fn compute_app_store_supported() -> Vec<UnifiedLocale> {
    supported_for(Store::AppStore)
}

pub fn compute_google_play_supported() -> Vec<UnifiedLocale> {
    supported_for(Store::GooglePlay)
}

/// Unified locales carried by both stores.
pub fn compute_common_supported() -> Vec<UnifiedLocale> {
    registry().common_supported()
}

/// Convert a list of unified codes, skipping those the store lacks.
///
/// Input order is preserved. An unknown unified code fails the whole batch.
pub fn convert_list_to_store<S: AsRef<str>>(
    store: Store,
    codes: &[S],
) -> LocaleResult<Vec<&'static str>> {
    let mut converted = Vec::with_capacity(codes.len());
    for code in codes {
        let code = code.as_ref();
        match to_store(store, code)? {
            Some(store_code) => converted.push(store_code),
            None => tracing::debug!("Skipping {} for {}: not carried by the store", code, store),
        }
    }
    Ok(converted)
}

/// Convert a list of store codes to unified codes, preserving order.
pub fn convert_list_from_store<S: AsRef<str>>(
    store: Store,
    codes: &[S],
) -> LocaleResult<Vec<UnifiedLocale>> {
    codes
        .iter()
        .map(|code| from_store(store, code.as_ref()))
        .collect()
}

pub fn unified_list_to_app_store<S: AsRef<str>>(codes: &[S]) -> LocaleResult<Vec<&'static str>> {
    convert_list_to_store(Store::AppStore, codes)
}

pub fn unified_list_to_google_play<S: AsRef<str>>(codes: &[S]) -> LocaleResult<Vec<&'static str>> {
    convert_list_to_store(Store::GooglePlay, codes)
}

pub fn app_store_list_to_unified<S: AsRef<str>>(codes: &[S]) -> LocaleResult<Vec<UnifiedLocale>> {
    convert_list_from_store(Store::AppStore, codes)
}

pub fn google_play_list_to_unified<S: AsRef<str>>(
    codes: &[S],
) -> LocaleResult<Vec<UnifiedLocale>> {
    convert_list_from_store(Store::GooglePlay, codes)
}

/// A keyed collection whose keys were rewritten into another code space.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedConversion<V> {
    /// Rewritten entries; values are untouched.
    pub entries: BTreeMap<String, V>,
    /// Source keys whose locale the target store does not carry.
    pub dropped: Vec<String>,
}

impl<V> KeyedConversion<V> {
    fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            dropped: Vec::new(),
        }
    }

    /// Whether every source entry made it into the result.
    pub fn is_lossless(&self) -> bool {
        self.dropped.is_empty()
    }

    pub fn into_entries(self) -> BTreeMap<String, V> {
        self.entries
    }
}

/// Fail if `key` was already seen in the same source collection.
fn check_repeated(seen: &mut BTreeSet<String>, key: &str) -> LocaleResult<()> {
    if !seen.insert(key.to_string()) {
        return Err(LocaleError::DuplicateKey(key.to_string()));
    }
    Ok(())
}

/// Insert `value` under `target`, failing if another source key already claimed it.
fn insert_unique<V>(
    result: &mut KeyedConversion<V>,
    sources: &mut BTreeMap<String, String>,
    store: Store,
    source: &str,
    target: &str,
    value: V,
) -> LocaleResult<()> {
    if let Some(first) = sources.get(target) {
        return Err(LocaleError::KeyCollision {
            store,
            unified: target.to_string(),
            first: first.clone(),
            second: source.to_string(),
        });
    }
    sources.insert(target.to_string(), source.to_string());
    result.entries.insert(target.to_string(), value);
    Ok(())
}

/// Rewrite unified keys into `store` codes.
///
/// Entries for locales the store lacks are dropped and listed in
/// [`KeyedConversion::dropped`]. Unknown unified keys are an error, and so is
/// the same key appearing twice in `entries`.
pub fn convert_keys_to_store<K, V, I>(store: Store, entries: I) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut result = KeyedConversion::new();
    let mut sources = BTreeMap::new();
    let mut seen = BTreeSet::new();
    for (key, value) in entries {
        let key = key.as_ref();
        check_repeated(&mut seen, key)?;
        let locale = registry().unified(key)?;
        match registry().to_store(store, locale) {
            Some(store_code) => {
                insert_unique(&mut result, &mut sources, store, key, store_code, value)?
            }
            None => {
                tracing::debug!("Dropping {} entry for {}: not carried by the store", key, store);
                result.dropped.push(key.to_string());
            }
        }
    }
    Ok(result)
}

/// Rewrite `store` code keys into unified codes.
///
/// Two spellings of the same language (an alias and its forward code) in one
/// collection are reported as [`LocaleError::KeyCollision`].
pub fn convert_keys_from_store<K, V, I>(
    store: Store,
    entries: I,
) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut result = KeyedConversion::new();
    let mut sources = BTreeMap::new();
    let mut seen = BTreeSet::new();
    for (key, value) in entries {
        let key = key.as_ref();
        check_repeated(&mut seen, key)?;
        let locale = registry().from_store(store, key)?;
        insert_unique(&mut result, &mut sources, store, key, locale.code(), value)?;
    }
    Ok(result)
}

pub fn convert_object_to_app_store<K, V, I>(entries: I) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    convert_keys_to_store(Store::AppStore, entries)
}

pub fn convert_object_to_google_play<K, V, I>(entries: I) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    convert_keys_to_store(Store::GooglePlay, entries)
}

pub fn convert_object_from_app_store<K, V, I>(entries: I) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    convert_keys_from_store(Store::AppStore, entries)
}

pub fn convert_object_from_google_play<K, V, I>(entries: I) -> LocaleResult<KeyedConversion<V>>
where
    K: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
{
    convert_keys_from_store(Store::GooglePlay, entries)
}
