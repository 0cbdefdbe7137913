// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-position span lookup for grid layouts.
//!
//! A grid surface asks how many columns each position occupies. For a
//! populated adapter that is the item's own span size. For an empty adapter
//! the single placeholder position reports the configured span count, which
//! the caller must keep equal to the grid's column count so the placeholder
//! fills a full row. The adapter cannot see the grid, so a mismatch shows up
//! only as a broken empty row.
//!
//! Beyond the per-position span, [`SpanLookup`] packs positions into rows the
//! way a grid lays them out: left to right, starting a new row whenever an
//! item does not fit the columns left in the current one. Spans wider than the
//! grid are clamped to the full row.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use smallvec::SmallVec;

use crate::ViewModel;

/// Positions sharing one grid row.
pub type SpanRow = SmallVec<[usize; 4]>;

/// Read-only span queries over an adapter's current collection.
///
/// Obtained from [`ListAdapter::span_lookup`](crate::ListAdapter::span_lookup).
#[derive(Debug)]
pub struct SpanLookup<'a, T> {
    models: &'a [ViewModel<T>],
    span_count: NonZeroUsize,
}

impl<'a, T> SpanLookup<'a, T> {
    pub(crate) const fn new(models: &'a [ViewModel<T>], span_count: NonZeroUsize) -> Self {
        Self { models, span_count }
    }

    /// Configured number of grid columns.
    #[must_use]
    pub const fn span_count(&self) -> usize {
        self.span_count.get()
    }

    /// Number of columns occupied by `position`.
    ///
    /// # Panics
    ///
    /// Panics if the collection is non-empty and `position` is out of range.
    #[must_use]
    pub fn span_at(&self, position: usize) -> usize {
        if self.models.is_empty() {
            return self.span_count.get();
        }
        self.models[position].span_size()
    }

    /// Column at which `position` starts.
    ///
    /// # Panics
    ///
    /// Panics if the collection is non-empty and `position` is out of range.
    #[must_use]
    pub fn span_index(&self, position: usize) -> usize {
        self.locate(position).1
    }

    /// Row containing `position`.
    ///
    /// # Panics
    ///
    /// Panics if the collection is non-empty and `position` is out of range.
    #[must_use]
    pub fn span_group_index(&self, position: usize) -> usize {
        self.locate(position).0
    }

    /// Positions grouped by row, in layout order.
    ///
    /// An empty collection yields the single placeholder row `[0]`.
    #[must_use]
    pub fn rows(&self) -> Vec<SpanRow> {
        let mut rows: Vec<SpanRow> = Vec::new();
        let mut column = 0;
        for position in 0..self.slot_count() {
            let span = self.clamped_span(position);
            if rows.is_empty() || column + span > self.span_count.get() {
                rows.push(SpanRow::new());
                column = 0;
            }
            if let Some(row) = rows.last_mut() {
                row.push(position);
            }
            column += span;
        }
        rows
    }

    fn slot_count(&self) -> usize {
        self.models.len().max(1)
    }

    fn clamped_span(&self, position: usize) -> usize {
        self.span_at(position).min(self.span_count.get())
    }

    /// Returns `(row, column)` of `position`.
    fn locate(&self, position: usize) -> (usize, usize) {
        if self.models.is_empty() {
            return (0, 0);
        }
        assert!(
            position < self.models.len(),
            "span position {position} out of range for {} items",
            self.models.len()
        );
        let columns = self.span_count.get();
        let mut row = 0;
        let mut column = 0;
        for earlier in 0..position {
            column += self.clamped_span(earlier);
            // The next item wraps if it does not fit the rest of this row.
            if column + self.clamped_span(earlier + 1) > columns {
                row += 1;
                column = 0;
            }
        }
        (row, column)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::num::NonZeroUsize;

    use super::SpanLookup;
    use crate::{LayoutId, PositionRole, ViewModel};

    fn models(spans: &[usize]) -> Vec<ViewModel<()>> {
        spans
            .iter()
            .enumerate()
            .map(|(i, &span)| {
                ViewModel::try_new(LayoutId(1), span, PositionRole::of(i, spans.len()), ())
                    .unwrap()
            })
            .collect()
    }

    fn columns(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn empty_collection_uses_configured_span() {
        let lookup = SpanLookup::<()>::new(&[], columns(2));
        assert_eq!(lookup.span_at(0), 2);
        assert_eq!(lookup.span_index(0), 0);
        assert_eq!(lookup.span_group_index(0), 0);
        assert_eq!(lookup.rows().len(), 1);
        assert_eq!(lookup.rows()[0].as_slice(), &[0]);
    }

    #[test]
    fn populated_collection_uses_item_spans() {
        let items = models(&[1, 2, 3]);
        let lookup = SpanLookup::new(&items, columns(3));
        assert_eq!(lookup.span_at(0), 1);
        assert_eq!(lookup.span_at(1), 2);
        assert_eq!(lookup.span_at(2), 3);
    }

    #[test]
    fn items_pack_into_rows_and_wrap_when_they_do_not_fit() {
        // Row 0: item 0 (1) + item 1 (2) = 3 columns.
        // Row 1: item 2 (2); item 3 (2) does not fit after it.
        // Row 2: item 3 (2) + item 4 (1).
        let items = models(&[1, 2, 2, 2, 1]);
        let lookup = SpanLookup::new(&items, columns(3));

        let rows = lookup.rows();
        let rows: Vec<&[usize]> = rows.iter().map(|r| r.as_slice()).collect();
        assert_eq!(rows, [&[0, 1][..], &[2][..], &[3, 4][..]]);

        let located: Vec<(usize, usize)> = (0..items.len())
            .map(|p| (lookup.span_group_index(p), lookup.span_index(p)))
            .collect();
        assert_eq!(located, [(0, 0), (0, 1), (1, 0), (2, 0), (2, 2)]);
    }

    #[test]
    fn oversized_spans_take_a_full_row() {
        let items = models(&[1, 5, 1]);
        let lookup = SpanLookup::new(&items, columns(2));

        let located: Vec<(usize, usize)> = (0..items.len())
            .map(|p| (lookup.span_group_index(p), lookup.span_index(p)))
            .collect();
        assert_eq!(located, [(0, 0), (1, 0), (2, 0)]);
        assert_eq!(lookup.rows().len(), 3);
        // The raw span is still reported as configured on the item.
        assert_eq!(lookup.span_at(1), 5);
    }

    #[test]
    fn single_column_puts_every_item_on_its_own_row() {
        let items = models(&[1, 1, 1]);
        let lookup = SpanLookup::new(&items, columns(1));
        assert_eq!(lookup.span_group_index(2), 2);
        assert_eq!(lookup.span_index(2), 0);
    }
}
