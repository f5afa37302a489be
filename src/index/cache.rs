//! Stamp-validated memoization.
//!
//! A [`ValueCache`] holds derived values attached to one owner (a source
//! unit or a directory). Each slot remembers the owner [`Stamp`] it was
//! computed for and is only served while the owner's stamp is unchanged.
//! Slots are replaced whole under a write lock, never mutated in place, so
//! readers see either the old value or the new one.

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::base::Stamp;

/// Typed name of a cache slot.
pub struct CacheKey<T> {
    name: &'static str,
    _value: PhantomData<fn() -> T>,
}

impl<T> CacheKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _value: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

struct Slot {
    stamp: Stamp,
    value: Arc<dyn Any + Send + Sync>,
}

/// Per-owner table of memoized values.
#[derive(Default)]
pub struct ValueCache {
    slots: RwLock<FxHashMap<&'static str, Slot>>,
}

impl fmt::Debug for ValueCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.slots.read();
        let mut map = f.debug_map();
        for (name, slot) in slots.iter() {
            map.entry(name, &slot.stamp.get());
        }
        map.finish()
    }
}

impl ValueCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored under `key`, if it was computed for `stamp`.
    pub fn get<T>(&self, stamp: Stamp, key: &CacheKey<T>) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let slots = self.slots.read();
        let slot = slots.get(key.name)?;
        if slot.stamp != stamp {
            return None;
        }
        Arc::clone(&slot.value).downcast::<T>().ok()
    }

    /// Return the value for `key` computed at `stamp`, computing and storing
    /// it first if the slot is missing or stale.
    ///
    /// Concurrent callers may both compute; the slot ends up holding one of
    /// the (equal) results. A slot already holding a newer stamp is never
    /// overwritten with an older one.
    pub fn get_or_compute<T, F>(&self, stamp: Stamp, key: &CacheKey<T>, compute: F) -> Arc<T>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        if let Some(value) = self.get(stamp, key) {
            return value;
        }

        tracing::trace!(key = key.name, stamp = stamp.get(), "computing cached value");
        let value = Arc::new(compute());

        let mut slots = self.slots.write();
        let newer_present = slots.get(key.name).is_some_and(|slot| slot.stamp > stamp);
        if !newer_present {
            let erased: Arc<dyn Any + Send + Sync> = value.clone();
            slots.insert(
                key.name,
                Slot {
                    stamp,
                    value: erased,
                },
            );
        }
        value
    }

    /// Drop every slot.
    pub fn clear(&self) {
        self.slots.write().clear();
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}

/// An owner whose derived values are invalidated by stamp advancement.
pub trait Versioned {
    /// Current content version of the owner.
    fn stamp(&self) -> Stamp;

    fn value_cache(&self) -> &ValueCache;

    /// Memoize `compute` under `key` for the owner's current stamp.
    fn cached<T, F>(&self, key: &CacheKey<T>, compute: F) -> Arc<T>
    where
        Self: Sized,
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        let stamp = self.stamp();
        self.value_cache().get_or_compute(stamp, key, compute)
    }
}
