//! Lookup structures derived from the locale table.
//!
//! A [`LocaleRegistry`] owns the catalog index, the two forward tables and the
//! two reverse tables. All four are generated from one row table and checked for
//! round-trip integrity and per-store injectivity while they are built, so a
//! registry that exists is a registry whose invariants hold.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::OnceLock;

use unic_langid::LanguageIdentifier;

use super::catalog::{Store, UnifiedLocale};
use super::error::{LocaleError, LocaleResult, TableError};
use super::table::{
    LocaleAlias, LocaleRow, APP_STORE_ALIASES, GOOGLE_PLAY_ALIASES, LOCALE_ROWS,
};

/// Forward and reverse tables for one store.
#[derive(Debug)]
struct StoreTable {
    /// Store code per row, indexed like `LocaleRegistry::rows`.
    forward: Vec<Option<&'static str>>,
    /// Store code (forward codes and aliases) to row index.
    reverse: HashMap<&'static str, usize>,
}

impl StoreTable {
    fn build(
        store: Store,
        rows: &[LocaleRow],
        index: &HashMap<&'static str, usize>,
        aliases: &[LocaleAlias],
    ) -> Result<Self, TableError> {
        let forward: Vec<Option<&'static str>> = rows
            .iter()
            .map(|row| match store {
                Store::AppStore => row.app_store,
                Store::GooglePlay => row.google_play,
            })
            .collect();

        let mut reverse: HashMap<&'static str, usize> =
            HashMap::with_capacity(forward.len() + aliases.len());
        for (row_index, code) in forward.iter().enumerate() {
            let Some(code) = *code else { continue };
            match reverse.entry(code) {
                Entry::Occupied(existing) => {
                    return Err(TableError::NonInjective {
                        store,
                        code,
                        first: rows[*existing.get()].unified,
                        second: rows[row_index].unified,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(row_index);
                }
            }
        }

        for entry in aliases {
            let Some(&target) = index.get(entry.unified) else {
                return Err(TableError::AliasTargetUnknown {
                    store,
                    code: entry.code,
                    unified: entry.unified,
                });
            };
            if let Some(&shadowed) = reverse.get(entry.code) {
                if forward[shadowed] == Some(entry.code) {
                    return Err(TableError::AliasShadowsForward {
                        store,
                        code: entry.code,
                        unified: rows[shadowed].unified,
                    });
                }
                return Err(TableError::DuplicateAlias {
                    store,
                    code: entry.code,
                });
            }
            reverse.insert(entry.code, target);
        }

        Ok(Self { forward, reverse })
    }
}

/// The unified catalog plus its per-store translation tables.
#[derive(Debug)]
pub struct LocaleRegistry {
    rows: Vec<LocaleRow>,
    index: HashMap<&'static str, usize>,
    app_store: StoreTable,
    google_play: StoreTable,
}

static BUILTIN: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// The process-wide registry built from the compiled-in table.
    ///
    /// # Panics
    ///
    /// Panics on first use if the compiled-in table violates an integrity check.
    /// The table is a constant, so this is covered by the crate's own tests.
    pub fn builtin() -> &'static LocaleRegistry {
        BUILTIN.get_or_init(|| {
            let registry = match Self::build(LOCALE_ROWS, APP_STORE_ALIASES, GOOGLE_PLAY_ALIASES) {
                Ok(registry) => registry,
                Err(e) => panic!("built-in locale table is inconsistent: {e}"),
            };
            tracing::debug!(
                "Locale registry ready: {} unified, {} App Store, {} Google Play",
                registry.len(),
                registry.supported(Store::AppStore).len(),
                registry.supported(Store::GooglePlay).len()
            );
            registry
        })
    }

    /// Run every integrity check on a row table and per-store alias lists.
    ///
    /// Only the built-in table is ever turned into a registry, so checking a
    /// candidate table never yields locales outside the compiled-in catalog.
    pub fn verify_table(
        rows: &[LocaleRow],
        app_store_aliases: &[LocaleAlias],
        google_play_aliases: &[LocaleAlias],
    ) -> Result<(), TableError> {
        Self::build(rows, app_store_aliases, google_play_aliases).map(|_| ())
    }

    fn build(
        rows: &[LocaleRow],
        app_store_aliases: &[LocaleAlias],
        google_play_aliases: &[LocaleAlias],
    ) -> Result<Self, TableError> {
        let mut index = HashMap::with_capacity(rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let canonical = row
                .unified
                .parse::<LanguageIdentifier>()
                .map(|id| id.to_string())
                .unwrap_or_default();
            if canonical != row.unified {
                return Err(TableError::NonCanonicalUnified {
                    code: row.unified,
                    canonical,
                });
            }
            if index.insert(row.unified, row_index).is_some() {
                return Err(TableError::DuplicateUnified(row.unified));
            }
        }

        let app_store = StoreTable::build(Store::AppStore, rows, &index, app_store_aliases)?;
        let google_play = StoreTable::build(Store::GooglePlay, rows, &index, google_play_aliases)?;

        Ok(Self {
            rows: rows.to_vec(),
            index,
            app_store,
            google_play,
        })
    }

    fn table(&self, store: Store) -> &StoreTable {
        match store {
            Store::AppStore => &self.app_store,
            Store::GooglePlay => &self.google_play,
        }
    }

    fn locale_at(&self, row_index: usize) -> UnifiedLocale {
        UnifiedLocale::new_unchecked(self.rows[row_index].unified)
    }

    /// Number of unified locales in the catalog.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The rows this registry was built from, in table order.
    pub fn rows(&self) -> &[LocaleRow] {
        &self.rows
    }

    /// Every unified locale, in table order.
    pub fn locales(&self) -> impl Iterator<Item = UnifiedLocale> + '_ {
        self.rows
            .iter()
            .map(|row| UnifiedLocale::new_unchecked(row.unified))
    }

    /// Catalog membership test.
    pub fn is_supported(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Resolve an exact unified code.
    pub fn unified(&self, code: &str) -> LocaleResult<UnifiedLocale> {
        self.index
            .get(code)
            .map(|&row_index| self.locale_at(row_index))
            .ok_or_else(|| LocaleError::UnknownUnifiedLocale(code.to_string()))
    }

    /// Resolve a unified code written with any casing or `_` separators.
    ///
    /// `pt_br`, `PT-br` and `pt-BR` all resolve to `pt-BR`. The canonical form must
    /// still be a catalog member; `pt` does not widen to `pt-BR`.
    pub fn canonicalize(&self, input: &str) -> LocaleResult<UnifiedLocale> {
        let unknown = || LocaleError::UnknownUnifiedLocale(input.to_string());
        let trimmed = input.trim();
        if let Some(&row_index) = self.index.get(trimmed) {
            return Ok(self.locale_at(row_index));
        }
        let canonical = trimmed
            .replace('_', "-")
            .parse::<LanguageIdentifier>()
            .map_err(|_| unknown())?
            .to_string();
        self.index
            .get(canonical.as_str())
            .map(|&row_index| self.locale_at(row_index))
            .ok_or_else(unknown)
    }

    /// English display name of a locale.
    pub fn display_name(&self, locale: UnifiedLocale) -> &'static str {
        self.index
            .get(locale.code())
            .map(|&row_index| self.rows[row_index].name)
            .unwrap_or_else(|| locale.code())
    }

    /// Forward mapping. `None` means the store has no such locale.
    pub fn to_store(&self, store: Store, locale: UnifiedLocale) -> Option<&'static str> {
        let row_index = *self.index.get(locale.code())?;
        self.table(store).forward[row_index]
    }

    /// Forward mapping from an unvalidated unified code.
    pub fn to_store_code(&self, store: Store, code: &str) -> LocaleResult<Option<&'static str>> {
        let locale = self.unified(code)?;
        Ok(self.to_store(store, locale))
    }

    /// Reverse mapping, including alias spellings. Matching is exact.
    pub fn from_store(&self, store: Store, code: &str) -> LocaleResult<UnifiedLocale> {
        self.table(store)
            .reverse
            .get(code)
            .map(|&row_index| self.locale_at(row_index))
            .ok_or_else(|| LocaleError::UnknownPlatformLocale {
                store,
                code: code.to_string(),
            })
    }

    /// Whether `code` is accepted by the store's reverse table.
    pub fn is_store_code(&self, store: Store, code: &str) -> bool {
        self.table(store).reverse.contains_key(code)
    }

    /// Pivot a code from one store's space to another's through the unified code.
    pub fn store_to_store(
        &self,
        from: Store,
        to: Store,
        code: &str,
    ) -> LocaleResult<Option<&'static str>> {
        let locale = self.from_store(from, code)?;
        Ok(self.to_store(to, locale))
    }

    /// Catalog entries with a forward mapping for `store`, in table order.
    pub fn supported(&self, store: Store) -> Vec<UnifiedLocale> {
        self.table(store)
            .forward
            .iter()
            .enumerate()
            .filter(|(_, code)| code.is_some())
            .map(|(row_index, _)| self.locale_at(row_index))
            .collect()
    }

    /// Catalog entries supported by both stores, in table order.
    pub fn common_supported(&self) -> Vec<UnifiedLocale> {
        let app_store = &self.app_store.forward;
        let google_play = &self.google_play.forward;
        (0..self.rows.len())
            .filter(|&i| app_store[i].is_some() && google_play[i].is_some())
            .map(|i| self.locale_at(i))
            .collect()
    }
}
