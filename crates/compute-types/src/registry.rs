// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Process-wide interning tables for open-ended enumerations.
//!
//! A [`Registry`] maps a lookup key to the single value registered for it.
//! Each enumeration family owns one registry in a `static`; the table is
//! seeded with the family's well-known values the first time it is touched
//! and only ever grows afterwards.

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};

/// Produces the entries a registry starts out with.
pub type Seed<V> = fn() -> Vec<(String, V)>;

/// A grow-only, thread-safe map from key to singleton value.
pub struct Registry<V: 'static> {
    family: &'static str,
    seed: Seed<V>,
    entries: OnceLock<RwLock<HashMap<String, V>>>,
}

impl<V: Clone> Registry<V> {
    /// Creates an empty registry for `family`. The seed function runs on
    /// first access, not here, so this can initialize a `static`.
    pub const fn new(family: &'static str, seed: Seed<V>) -> Self {
        Self { family, seed, entries: OnceLock::new() }
    }

    /// The name of the enumeration family this registry interns values for.
    pub fn family(&self) -> &'static str {
        self.family
    }

    fn table(&self) -> &RwLock<HashMap<String, V>> {
        self.entries
            .get_or_init(|| RwLock::new((self.seed)().into_iter().collect()))
    }

    // Entries are inserted whole under the write lock, so a poisoned lock
    // never guards a half-written map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, V>> {
        self.table().read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Looks up the value registered under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        self.read().get(key).cloned()
    }

    /// Returns the value registered under `key`, registering the output of
    /// `make` if there is none yet.
    ///
    /// When several threads race to register the same key, exactly one
    /// `make` result is stored and every caller gets that one back.
    pub fn get_or_insert_with<F>(&self, key: &str, make: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(existing) = self.get(key) {
            return existing;
        }

        let mut table =
            self.table().write().unwrap_or_else(PoisonError::into_inner);
        table.entry(key.to_owned()).or_insert_with(make).clone()
    }

    /// A snapshot of every registered value, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

impl<V> std::fmt::Debug for Registry<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("initialized", &self.entries.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn seed() -> Vec<(String, Arc<str>)> {
        vec![("alpha".to_owned(), Arc::from("alpha"))]
    }

    #[test]
    fn seed_is_visible_before_any_insert() {
        let registry = Registry::new("Test", seed);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("alpha").as_deref(), Some("alpha"));
        assert!(registry.get("beta").is_none());
    }

    #[test]
    fn existing_entries_are_not_replaced() {
        let registry = Registry::new("Test", seed);
        let first = registry.get_or_insert_with("beta", || Arc::from("beta"));
        let second =
            registry.get_or_insert_with("beta", || Arc::from("imposter"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*second, "beta");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn racing_inserts_converge_on_one_value() {
        let registry: Registry<Arc<str>> = Registry::new("Test", seed);
        let calls = AtomicUsize::new(0);

        let results: Vec<Arc<str>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    s.spawn(|| {
                        registry.get_or_insert_with("contended", || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            Arc::from("contended")
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for r in &results {
            assert!(Arc::ptr_eq(r, &results[0]));
        }
        assert_eq!(registry.len(), 2);
    }
}
