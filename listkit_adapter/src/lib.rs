// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listkit Adapter: a toolkit-agnostic list and grid adapter core.
//!
//! This crate sits between an ordered collection of items and a virtualized
//! list or grid surface owned by some host UI toolkit. It supplies the surface
//! with what it asks for (how many slots, which template each slot uses, how
//! to fill a slot, how many grid columns a position spans) and turns user
//! interaction on slots back into item-level callbacks.
//!
//! The core concepts are:
//!
//! - [`ViewModel`]: one item, carrying a template id ([`LayoutId`]), a grid
//!   span size, a [`PositionRole`], a caller payload and a selection flag.
//! - [`ListAdapter`]: owns the collection and drives the surface contract:
//!   [`item_count`](ListAdapter::item_count),
//!   [`view_type_at`](ListAdapter::view_type_at),
//!   [`create_slot`](ListAdapter::create_slot) and
//!   [`bind`](ListAdapter::bind). An empty collection is rendered as a single
//!   placeholder slot of type [`ViewType::Empty`].
//! - [`Slot`]: the reusable rendering handle, wrapping a host view together
//!   with a [`ViewCache`] of memoized child-view lookups.
//! - [`SpanLookup`]: per-position column spans and row packing for grids.
//! - [`AdapterBuilder`]: fluent wiring of configuration, callbacks and the
//!   initial collection.
//!
//! The host plugs in through the traits in [`host`]: [`HostView`] for the
//! instantiated views, [`Inflater`] to instantiate templates and
//! [`PositionResolver`] to map a slot back to the position it shows.
//!
//! Taps toggle the item's selection before the click callback runs; long
//! presses never change selection. Gestures are either recognized by the
//! adapter from raw pointer events (via `listkit_gesture`) or recognized by
//! the host and dispatched directly.
//!
//! ## Minimal example
//!
//! ```rust
//! use listkit_adapter::{HostView, LayoutId, ListAdapter, SlotId, ViewKey, ViewModel, ViewType};
//!
//! #[derive(Default)]
//! struct Row {
//!     visible: bool,
//! }
//!
//! impl HostView for Row {
//!     type Handle = ();
//!     fn find_view(&self, _key: ViewKey) -> Option<()> {
//!         None
//!     }
//!     fn set_visible(&mut self, visible: bool) {
//!         self.visible = visible;
//!     }
//! }
//!
//! const ROW: LayoutId = LayoutId(1);
//!
//! let mut adapter: ListAdapter<&str, Row> = ListAdapter::new();
//!
//! // Nothing to show yet: one placeholder slot.
//! assert_eq!(adapter.item_count(), 1);
//! assert_eq!(adapter.view_type_at(0), ViewType::Empty);
//!
//! adapter.set_models(ViewModel::sequence(ROW, ["apples", "pears"]));
//! assert_eq!(adapter.item_count(), 2);
//!
//! // The surface creates a slot, binds it to position 1, and the user taps it.
//! let mut inflate = |_: LayoutId| Row::default();
//! let mut slot = adapter.create_slot(adapter.view_type_at(1), &mut inflate);
//! adapter.bind(&mut slot, 1);
//! let bound_to = |_: SlotId| Some(1);
//! assert!(adapter.dispatch_tap(slot.id(), &bound_to));
//!
//! let selected: Vec<_> = adapter.selected_positions().collect();
//! assert_eq!(selected, [1]);
//! ```
//!
//! ## Logging
//!
//! Collection changes are logged at `debug` and slot lifecycle and ignored
//! interactions at `trace`, through `tracing` under the
//! `listkit_adapter::adapter` target. No subscriber is installed by this
//! crate.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo` and `listkit_gesture`.
//! - `libm`: enables `no_std` builds that rely on `libm` for the gesture math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapter;
pub mod builder;
pub mod error;
pub mod host;
pub mod role;
pub mod slot;
pub mod span;
pub mod view_model;

pub use adapter::{
    AdapterConfig, AdapterState, ListAdapter, OnEmptyBind, OnInvalidate, OnItemBind, OnItemClick,
    OnItemLongClick,
};
pub use builder::AdapterBuilder;
pub use error::{Error, Result};
pub use host::{HostView, Inflater, PositionResolver, ViewKey};
pub use role::PositionRole;
pub use slot::{Slot, SlotFlags, SlotId, ViewCache};
pub use span::{SpanLookup, SpanRow};
pub use view_model::{LayoutId, ViewModel, ViewType};

pub use listkit_gesture::{Gesture, PointerId};
