// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! View-model records and view-type identifiers.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::{Error, PositionRole, Result};

/// Opaque identifier of a visual template.
///
/// The host maps layout ids to whatever it instantiates for a row or cell.
/// Items sharing a layout id share a view pool on the rendering surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(pub u32);

impl LayoutId {
    /// Template used for the empty-state placeholder unless configured otherwise.
    pub const DEFAULT_EMPTY: Self = Self(0);
}

/// View type reported to the rendering surface for a position.
///
/// The empty placeholder has its own variant, so it can never collide with a
/// real layout id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ViewType {
    /// The empty-state placeholder shown when the collection has no items.
    Empty,
    /// An item rendered with the given template.
    Item(LayoutId),
}

/// One item of an adapter's collection.
///
/// Everything except the selection flag is fixed at construction. The flag
/// can be seeded with [`with_selected`](Self::with_selected) while building
/// the record; afterwards only [`ListAdapter`](crate::ListAdapter) changes it.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel<T> {
    layout: LayoutId,
    span_size: NonZeroUsize,
    role: PositionRole,
    payload: T,
    selected: bool,
}

impl<T> ViewModel<T> {
    /// Creates an unselected view-model spanning a single grid column.
    #[must_use]
    pub const fn new(layout: LayoutId, role: PositionRole, payload: T) -> Self {
        Self {
            layout,
            span_size: NonZeroUsize::MIN,
            role,
            payload,
            selected: false,
        }
    }

    /// Creates an unselected view-model from a raw span size.
    ///
    /// Fails with [`Error::ZeroSpan`] when `span_size` is zero.
    pub fn try_new(
        layout: LayoutId,
        span_size: usize,
        role: PositionRole,
        payload: T,
    ) -> Result<Self> {
        let span_size = NonZeroUsize::new(span_size).ok_or(Error::ZeroSpan)?;
        Ok(Self::new(layout, role, payload).with_span_size(span_size))
    }

    /// Builds one view-model per payload, tagging each with its role in the
    /// sequence.
    pub fn sequence<I>(layout: LayoutId, payloads: I) -> Vec<Self>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let payloads = payloads.into_iter();
        let len = payloads.len();
        payloads
            .enumerate()
            .map(|(index, payload)| Self::new(layout, PositionRole::of(index, len), payload))
            .collect()
    }

    /// Sets the number of grid columns this item occupies.
    #[must_use]
    pub fn with_span_size(mut self, span_size: NonZeroUsize) -> Self {
        self.span_size = span_size;
        self
    }

    /// Seeds the selection flag.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Template used to render this item.
    #[must_use]
    pub const fn layout(&self) -> LayoutId {
        self.layout
    }

    /// Number of grid columns this item occupies (always at least 1).
    #[must_use]
    pub const fn span_size(&self) -> usize {
        self.span_size.get()
    }

    /// Role of this item within the collection it was built for.
    #[must_use]
    pub const fn role(&self) -> PositionRole {
        self.role
    }

    /// Caller data rendered by this item.
    #[must_use]
    pub const fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns `true` if the item is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Consumes the view-model, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn toggle_selected(&mut self) {
        self.selected = !self.selected;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::{LayoutId, ViewModel};
    use crate::{Error, PositionRole};

    const ROW: LayoutId = LayoutId(7);

    #[test]
    fn new_view_model_is_unselected_with_unit_span() {
        let model = ViewModel::new(ROW, PositionRole::Middle, "a");
        assert_eq!(model.layout(), ROW);
        assert_eq!(model.span_size(), 1);
        assert_eq!(model.role(), PositionRole::Middle);
        assert_eq!(*model.payload(), "a");
        assert!(!model.is_selected());
    }

    #[test]
    fn try_new_rejects_zero_span() {
        assert_eq!(
            ViewModel::try_new(ROW, 0, PositionRole::Leading, ()),
            Err(Error::ZeroSpan)
        );
        let model = ViewModel::try_new(ROW, 3, PositionRole::Leading, ()).unwrap();
        assert_eq!(model.span_size(), 3);
    }

    #[test]
    fn sequence_tags_roles_over_the_whole_input() {
        let models = ViewModel::sequence(ROW, ["a", "b", "c"]);
        let roles: Vec<_> = models.iter().map(ViewModel::role).collect();
        assert_eq!(
            roles,
            [
                PositionRole::Leading,
                PositionRole::Middle,
                PositionRole::Trailing
            ]
        );
        assert!(models.iter().all(|m| m.layout() == ROW && !m.is_selected()));

        let single = ViewModel::sequence(ROW, ["only"]);
        assert_eq!(single[0].role(), PositionRole::LeadingAndTrailing);
    }

    #[test]
    fn builder_style_setters_seed_span_and_selection() {
        let model = ViewModel::new(ROW, PositionRole::Leading, 1_u8)
            .with_span_size(NonZeroUsize::new(2).unwrap())
            .with_selected(true);
        assert_eq!(model.span_size(), 2);
        assert!(model.is_selected());
        assert_eq!(model.into_payload(), 1);
    }

    #[test]
    fn toggle_flips_selection() {
        let mut model = ViewModel::new(ROW, PositionRole::Leading, ());
        model.toggle_selected();
        assert!(model.is_selected());
        model.toggle_selected();
        assert!(!model.is_selected());
        model.set_selected(true);
        assert!(model.is_selected());
    }
}
