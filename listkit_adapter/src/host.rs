// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits the host UI toolkit implements for the adapter.
//!
//! The adapter never creates, lays out or draws views itself. It reaches the
//! host through three narrow seams:
//!
//! - [`Inflater`]: instantiate a template for a [`LayoutId`].
//! - [`HostView`]: the instantiated view, queried for child views by
//!   [`ViewKey`] and told whether it is visible.
//! - [`PositionResolver`]: map a slot back to the adapter position it is
//!   currently bound to.
//!
//! Closures implement [`Inflater`] and [`PositionResolver`], which keeps tests
//! and small hosts short.

use crate::{LayoutId, SlotId};

/// Identifier of a child view inside an inflated template.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKey(pub u32);

/// A view instantiated by the host from a template.
pub trait HostView {
    /// Handle to a child view, cheap to clone.
    type Handle: Clone;

    /// Looks up a child view by key, walking the view tree.
    ///
    /// [`Slot::find_view`](crate::Slot::find_view) memoizes successful
    /// lookups, so this is called at most once per key and slot.
    fn find_view(&self, key: ViewKey) -> Option<Self::Handle>;

    /// Shows or hides the view while keeping its place in the layout.
    fn set_visible(&mut self, visible: bool);
}

/// Instantiates templates into host views.
pub trait Inflater<V> {
    /// Creates a new view from `template`.
    fn inflate(&mut self, template: LayoutId) -> V;
}

impl<V, F> Inflater<V> for F
where
    F: FnMut(LayoutId) -> V,
{
    fn inflate(&mut self, template: LayoutId) -> V {
        self(template)
    }
}

/// Maps a slot to the adapter position it is bound to.
pub trait PositionResolver {
    /// Position currently shown by `slot`, or `None` when the surface cannot
    /// resolve one (for example while the slot is being recycled or the data
    /// is mid-invalidation).
    fn adapter_position(&self, slot: SlotId) -> Option<usize>;
}

impl<F> PositionResolver for F
where
    F: Fn(SlotId) -> Option<usize>,
{
    fn adapter_position(&self, slot: SlotId) -> Option<usize> {
        self(slot)
    }
}
