// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slots (view holders) and their per-slot view cache.

use core::fmt;

use hashbrown::HashMap;

use crate::{HostView, ViewKey, ViewType};

/// Identifier of a slot created by a [`ListAdapter`](crate::ListAdapter).
///
/// Identifiers are never reused within one adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub(crate) u64);

impl SlotId {
    /// Raw value, for hosts that key their own tables by slot.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

bitflags::bitflags! {
    /// Slot flags controlling visibility and interaction.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SlotFlags: u8 {
        /// The slot's view is shown.
        const VISIBLE        = 0b0000_0001;
        /// Taps on the slot are dispatched to the adapter.
        const TAPPABLE       = 0b0000_0010;
        /// Long presses on the slot are dispatched to the adapter.
        const LONG_PRESSABLE = 0b0000_0100;
    }
}

impl Default for SlotFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::TAPPABLE | Self::LONG_PRESSABLE
    }
}

/// Memoized child-view lookups for one slot.
///
/// Successful lookups are stored on first use; failed lookups are not, so a
/// child that appears later is still found.
#[derive(Clone)]
pub struct ViewCache<H> {
    entries: HashMap<ViewKey, H>,
}

impl<H: Clone> ViewCache<H> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the cached handle for `key`, running `lookup` on a miss.
    pub fn get_or_lookup(
        &mut self,
        key: ViewKey,
        lookup: impl FnOnce(ViewKey) -> Option<H>,
    ) -> Option<H> {
        if let Some(handle) = self.entries.get(&key) {
            return Some(handle.clone());
        }
        let handle = lookup(key)?;
        self.entries.insert(key, handle.clone());
        Some(handle)
    }

    /// Returns `true` if `key` has been resolved before.
    #[must_use]
    pub fn contains(&self, key: ViewKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of cached handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached handle.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<H: Clone> Default for ViewCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> fmt::Debug for ViewCache<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewCache")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// A reusable rendering handle created by the adapter.
///
/// A slot wraps the host view inflated for one [`ViewType`]. The surface
/// recycles slots across positions of the same view type and asks the
/// adapter to rebind them.
pub struct Slot<V: HostView> {
    id: SlotId,
    view_type: ViewType,
    flags: SlotFlags,
    view: V,
    cache: ViewCache<V::Handle>,
}

impl<V: HostView> Slot<V> {
    pub(crate) fn new(id: SlotId, view_type: ViewType, flags: SlotFlags, view: V) -> Self {
        Self {
            id,
            view_type,
            flags,
            view,
            cache: ViewCache::new(),
        }
    }

    /// Identifier used for interaction dispatch.
    #[must_use]
    pub const fn id(&self) -> SlotId {
        self.id
    }

    /// View type this slot was created for.
    #[must_use]
    pub const fn view_type(&self) -> ViewType {
        self.view_type
    }

    /// Returns `true` for the empty-state placeholder slot.
    #[must_use]
    pub const fn is_empty_slot(&self) -> bool {
        matches!(self.view_type, ViewType::Empty)
    }

    /// Visibility and interaction flags.
    #[must_use]
    pub const fn flags(&self) -> SlotFlags {
        self.flags
    }

    /// The host view.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// The host view, mutably.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Looks up a child view, memoizing the result in this slot.
    pub fn find_view(&mut self, key: ViewKey) -> Option<V::Handle> {
        let view = &self.view;
        self.cache.get_or_lookup(key, |key| view.find_view(key))
    }

    /// The per-slot cache of child views.
    #[must_use]
    pub const fn view_cache(&self) -> &ViewCache<V::Handle> {
        &self.cache
    }

    /// Consumes the slot, returning the host view.
    pub fn into_view(self) -> V {
        self.view
    }
}

impl<V: HostView + fmt::Debug> fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("id", &self.id)
            .field("view_type", &self.view_type)
            .field("flags", &self.flags)
            .field("view", &self.view)
            .field("cache", &self.cache)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::{Slot, SlotFlags, SlotId, ViewCache};
    use crate::{HostView, LayoutId, ViewKey, ViewType};

    #[derive(Debug, Default)]
    struct CountingView {
        lookups: Cell<usize>,
        visible: bool,
    }

    impl HostView for CountingView {
        type Handle = u32;

        fn find_view(&self, key: ViewKey) -> Option<u32> {
            self.lookups.set(self.lookups.get() + 1);
            // Only even keys exist in this tree.
            (key.0 % 2 == 0).then_some(key.0 * 10)
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    fn slot() -> Slot<CountingView> {
        Slot::new(
            SlotId(1),
            ViewType::Item(LayoutId(3)),
            SlotFlags::default(),
            CountingView::default(),
        )
    }

    #[test]
    fn first_lookup_populates_the_cache() {
        let mut slot = slot();
        assert_eq!(slot.find_view(ViewKey(2)), Some(20));
        assert_eq!(slot.find_view(ViewKey(2)), Some(20));
        assert_eq!(slot.view().lookups.get(), 1);
        assert!(slot.view_cache().contains(ViewKey(2)));
    }

    #[test]
    fn misses_are_not_cached() {
        let mut slot = slot();
        assert_eq!(slot.find_view(ViewKey(1)), None);
        assert_eq!(slot.find_view(ViewKey(1)), None);
        assert_eq!(slot.view().lookups.get(), 2);
        assert!(slot.view_cache().is_empty());
    }

    #[test]
    fn cache_is_per_key() {
        let mut cache: ViewCache<u32> = ViewCache::new();
        assert_eq!(cache.get_or_lookup(ViewKey(1), |_| Some(1)), Some(1));
        assert_eq!(cache.get_or_lookup(ViewKey(2), |_| Some(2)), Some(2));
        // Cached value wins over a fresh lookup.
        assert_eq!(cache.get_or_lookup(ViewKey(1), |_| Some(99)), Some(1));
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn slot_accessors_reflect_construction() {
        let mut slot = slot();
        assert_eq!(slot.id().get(), 1);
        assert_eq!(slot.view_type(), ViewType::Item(LayoutId(3)));
        assert!(!slot.is_empty_slot());
        assert!(slot.flags().contains(SlotFlags::TAPPABLE | SlotFlags::LONG_PRESSABLE));

        slot.view_mut().set_visible(true);
        assert!(slot.into_view().visible);
    }
}
