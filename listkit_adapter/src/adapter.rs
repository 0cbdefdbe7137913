// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The list adapter: collection, view types, empty state, selection and
//! interaction dispatch.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use hashbrown::HashMap;
use kurbo::Point;
use listkit_gesture::press::{DEFAULT_LONG_PRESS_TIMEOUT, DEFAULT_TOUCH_SLOP};
use listkit_gesture::{Gesture, PointerId, PressState};

use crate::{
    Error, HostView, Inflater, LayoutId, PositionResolver, Result, Slot, SlotFlags, SlotId,
    SpanLookup, ViewModel, ViewType,
};

/// Called with `(position, model)` after a tap toggled the item's selection.
pub type OnItemClick<T> = Box<dyn FnMut(usize, &ViewModel<T>)>;

/// Called with `(position, model)` on a long press.
pub type OnItemLongClick<T> = Box<dyn FnMut(usize, &ViewModel<T>)>;

/// Called with `(position, model, slot)` to fill an item slot.
pub type OnItemBind<T, V> = Box<dyn FnMut(usize, &ViewModel<T>, &mut Slot<V>)>;

/// Called with the placeholder slot to fill the empty state.
pub type OnEmptyBind<V> = Box<dyn FnMut(&mut Slot<V>)>;

/// Called after every full invalidation.
pub type OnInvalidate = Box<dyn FnMut()>;

/// Adapter configuration set at construction or attach time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdapterConfig {
    /// Template inflated for the empty-state placeholder.
    pub empty_template: LayoutId,
    /// Whether the empty-state placeholder is shown.
    pub empty_visible: bool,
    /// Span reported for the placeholder; must equal the grid's column count.
    pub span_count: NonZeroUsize,
    /// Distance a press may travel and still be a tap or long press.
    pub touch_slop: Option<f64>,
    /// Hold duration in milliseconds after which a press becomes a long press.
    pub long_press_timeout: Option<u64>,
}

impl AdapterConfig {
    /// Returns this configuration with a raw span count.
    ///
    /// Fails with [`Error::ZeroSpan`] when `span_count` is zero.
    pub fn with_span_count(self, span_count: usize) -> Result<Self> {
        let span_count = NonZeroUsize::new(span_count).ok_or(Error::ZeroSpan)?;
        Ok(Self { span_count, ..self })
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            empty_template: LayoutId::DEFAULT_EMPTY,
            empty_visible: true,
            span_count: NonZeroUsize::MIN,
            touch_slop: Some(DEFAULT_TOUCH_SLOP),
            long_press_timeout: Some(DEFAULT_LONG_PRESS_TIMEOUT),
        }
    }
}

/// The two states of an adapter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AdapterState {
    /// No items; a single placeholder slot renders the empty template.
    Empty,
    /// At least one item; every slot renders its item's template.
    Populated,
}

/// Binds a collection of [`ViewModel`]s to a virtualized list or grid surface.
///
/// The surface polls [`item_count`](Self::item_count),
/// [`view_type_at`](Self::view_type_at), [`create_slot`](Self::create_slot)
/// and [`bind`](Self::bind). Interactions come back either as raw pointer
/// events ([`pointer_down`](Self::pointer_down) and friends) or as already
/// recognized gestures ([`dispatch_tap`](Self::dispatch_tap),
/// [`dispatch_long_press`](Self::dispatch_long_press)).
///
/// Every mutation of the collection or of bulk selection is a full
/// invalidation: [`data_generation`](Self::data_generation) advances and the
/// invalidation listener, if any, runs. Surfaces must re-derive everything
/// they show; there is no per-item diffing.
///
/// The adapter is meant to live on the UI thread. Callbacks are not `Send`.
pub struct ListAdapter<T, V: HostView> {
    models: Vec<ViewModel<T>>,
    config: AdapterConfig,

    on_item_click: Option<OnItemClick<T>>,
    on_item_long_click: Option<OnItemLongClick<T>>,
    on_item_bind: Option<OnItemBind<T, V>>,
    on_empty_bind: Option<OnEmptyBind<V>>,
    on_invalidate: Option<OnInvalidate>,

    slots: HashMap<SlotId, SlotFlags>,
    next_slot: u64,
    presses: PressState<SlotId>,
    generation: u64,
}

impl<T, V: HostView> ListAdapter<T, V> {
    /// Creates an empty adapter with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AdapterConfig::default())
    }

    /// Creates an empty adapter with `config`.
    #[must_use]
    pub fn with_config(config: AdapterConfig) -> Self {
        Self {
            models: Vec::new(),
            config,
            on_item_click: None,
            on_item_long_click: None,
            on_item_bind: None,
            on_empty_bind: None,
            on_invalidate: None,
            slots: HashMap::new(),
            next_slot: 0,
            presses: PressState::with_thresholds(config.touch_slop, config.long_press_timeout),
            generation: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Shows or hides placeholder slots created from now on.
    pub fn set_empty_visible(&mut self, visible: bool) {
        self.config.empty_visible = visible;
    }

    /// Sets the template for placeholder slots created from now on.
    pub fn set_empty_template(&mut self, template: LayoutId) {
        self.config.empty_template = template;
    }

    /// Sets the span reported for the placeholder.
    pub fn set_span_count(&mut self, span_count: NonZeroUsize) {
        self.config.span_count = span_count;
    }

    /// Sets the tap callback.
    pub fn set_on_item_click(&mut self, callback: impl FnMut(usize, &ViewModel<T>) + 'static) {
        self.on_item_click = Some(Box::new(callback));
    }

    /// Sets the long-press callback.
    pub fn set_on_item_long_click(&mut self, callback: impl FnMut(usize, &ViewModel<T>) + 'static) {
        self.on_item_long_click = Some(Box::new(callback));
    }

    /// Sets the item bind callback.
    pub fn set_on_item_bind(
        &mut self,
        callback: impl FnMut(usize, &ViewModel<T>, &mut Slot<V>) + 'static,
    ) {
        self.on_item_bind = Some(Box::new(callback));
    }

    /// Sets the empty-state bind callback.
    pub fn set_on_empty_bind(&mut self, callback: impl FnMut(&mut Slot<V>) + 'static) {
        self.on_empty_bind = Some(Box::new(callback));
    }

    /// Sets the listener run after every full invalidation.
    pub fn set_invalidation_listener(&mut self, listener: impl FnMut() + 'static) {
        self.on_invalidate = Some(Box::new(listener));
    }

    /// Removes every callback and the invalidation listener.
    pub fn clear_callbacks(&mut self) {
        self.on_item_click = None;
        self.on_item_long_click = None;
        self.on_item_bind = None;
        self.on_empty_bind = None;
        self.on_invalidate = None;
    }

    pub(crate) fn install_callbacks(
        &mut self,
        on_item_click: Option<OnItemClick<T>>,
        on_item_long_click: Option<OnItemLongClick<T>>,
        on_item_bind: Option<OnItemBind<T, V>>,
        on_empty_bind: Option<OnEmptyBind<V>>,
        on_invalidate: Option<OnInvalidate>,
    ) {
        self.on_item_click = on_item_click;
        self.on_item_long_click = on_item_long_click;
        self.on_item_bind = on_item_bind;
        self.on_empty_bind = on_empty_bind;
        self.on_invalidate = on_invalidate;
    }

    /// Replaces the whole collection.
    ///
    /// Selection is whatever the supplied view-models carry.
    pub fn set_models(&mut self, items: impl IntoIterator<Item = ViewModel<T>>) {
        self.models.clear();
        self.models.extend(items);
        tracing::debug!(
            target: "listkit_adapter::adapter",
            count = self.models.len(),
            "replaced models"
        );
        self.invalidate();
    }

    /// Appends to the collection, keeping existing items and their selection.
    pub fn add_models(&mut self, items: impl IntoIterator<Item = ViewModel<T>>) {
        let before = self.models.len();
        self.models.extend(items);
        tracing::debug!(
            target: "listkit_adapter::adapter",
            added = self.models.len() - before,
            count = self.models.len(),
            "appended models"
        );
        self.invalidate();
    }

    /// The current collection, in render order.
    #[must_use]
    pub fn models(&self) -> &[ViewModel<T>] {
        &self.models
    }

    /// Number of view-models (zero when empty, unlike [`item_count`](Self::item_count)).
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns `true` if the collection has no view-models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AdapterState {
        if self.models.is_empty() {
            AdapterState::Empty
        } else {
            AdapterState::Populated
        }
    }

    /// Selected view-models in collection order.
    ///
    /// Scans the collection on every call.
    pub fn selected_view_models(&self) -> impl Iterator<Item = &ViewModel<T>> + '_ {
        self.models.iter().filter(|model| model.is_selected())
    }

    /// Positions of the selected view-models, ascending.
    pub fn selected_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.models
            .iter()
            .enumerate()
            .filter_map(|(position, model)| model.is_selected().then_some(position))
    }

    /// Number of selected view-models.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected_view_models().count()
    }

    /// Selects every item.
    pub fn select_all(&mut self) {
        self.set_all_selected(true);
    }

    /// Unselects every item.
    pub fn unselect_all(&mut self) {
        self.set_all_selected(false);
    }

    fn set_all_selected(&mut self, selected: bool) {
        for model in &mut self.models {
            model.set_selected(selected);
        }
        tracing::debug!(
            target: "listkit_adapter::adapter",
            selected,
            count = self.models.len(),
            "bulk selection"
        );
        self.invalidate();
    }

    /// Number of slots the surface should show.
    ///
    /// An empty collection still reports one slot, the placeholder.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.models.len().max(1)
    }

    /// View type of `position`.
    ///
    /// # Panics
    ///
    /// Panics if the collection is non-empty and `position` is out of range.
    #[must_use]
    pub fn view_type_at(&self, position: usize) -> ViewType {
        if self.models.is_empty() {
            return ViewType::Empty;
        }
        assert_position(position, self.models.len());
        ViewType::Item(self.models[position].layout())
    }

    /// Instantiates a slot for `view_type` and registers it for interaction
    /// dispatch.
    pub fn create_slot(&mut self, view_type: ViewType, inflater: &mut impl Inflater<V>) -> Slot<V> {
        let mut flags = SlotFlags::TAPPABLE | SlotFlags::LONG_PRESSABLE;
        let view = match view_type {
            ViewType::Empty => {
                let visible = self.config.empty_visible;
                let mut view = inflater.inflate(self.config.empty_template);
                view.set_visible(visible);
                flags.set(SlotFlags::VISIBLE, visible);
                view
            }
            ViewType::Item(layout) => {
                flags |= SlotFlags::VISIBLE;
                inflater.inflate(layout)
            }
        };

        let id = SlotId(self.next_slot);
        self.next_slot += 1;
        self.slots.insert(id, flags);
        tracing::trace!(
            target: "listkit_adapter::adapter",
            slot = id.get(),
            ?view_type,
            "created slot"
        );
        Slot::new(id, view_type, flags, view)
    }

    /// Unregisters a slot the surface is destroying and returns its view.
    ///
    /// Presses in flight on the slot are cancelled.
    pub fn release_slot(&mut self, slot: Slot<V>) -> V {
        let id = slot.id();
        self.slots.remove(&id);
        self.presses.cancel_target(&id);
        slot.into_view()
    }

    /// Returns `true` if `slot` was created by this adapter and not released.
    #[must_use]
    pub fn is_registered(&self, slot: SlotId) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Fills `slot` for `position`.
    ///
    /// Item slots go to the item bind callback, the placeholder to the empty
    /// bind callback. A missing callback makes this a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is an item slot and `position` is out of range.
    pub fn bind(&mut self, slot: &mut Slot<V>, position: usize) {
        match slot.view_type() {
            ViewType::Item(_) => {
                assert_position(position, self.models.len());
                if let Some(callback) = self.on_item_bind.as_mut() {
                    callback(position, &self.models[position], slot);
                }
            }
            ViewType::Empty => {
                if let Some(callback) = self.on_empty_bind.as_mut() {
                    callback(slot);
                }
            }
        }
    }

    /// Span lookup for the surface's grid layout.
    #[must_use]
    pub fn span_lookup(&self) -> SpanLookup<'_, T> {
        SpanLookup::new(&self.models, self.config.span_count)
    }

    /// Columns occupied by `position`; see [`SpanLookup::span_at`].
    #[must_use]
    pub fn span_at(&self, position: usize) -> usize {
        self.span_lookup().span_at(position)
    }

    /// Counter advanced by every full invalidation.
    #[must_use]
    pub const fn data_generation(&self) -> u64 {
        self.generation
    }

    fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if let Some(listener) = self.on_invalidate.as_mut() {
            listener();
        }
    }

    /// Handles a tap on `slot`.
    ///
    /// When the slot resolves to an item, the item's selection is toggled and
    /// the click callback then sees the toggled model. Returns `true` if an
    /// item was hit. Unresolved positions, an empty collection, and unknown
    /// slots are ignored.
    pub fn dispatch_tap(&mut self, slot: SlotId, resolver: &impl PositionResolver) -> bool {
        let Some(position) = self.resolve(slot, SlotFlags::TAPPABLE, resolver) else {
            return false;
        };
        self.models[position].toggle_selected();
        if let Some(callback) = self.on_item_click.as_mut() {
            callback(position, &self.models[position]);
        }
        true
    }

    /// Handles a long press on `slot`.
    ///
    /// Selection is left untouched. Returns `true` (consumed) for every
    /// registered long-pressable slot, whether or not a callback is set or an
    /// item was hit.
    pub fn dispatch_long_press(&mut self, slot: SlotId, resolver: &impl PositionResolver) -> bool {
        if !self.accepts(slot, SlotFlags::LONG_PRESSABLE) {
            return false;
        }
        if let Some(position) = self.resolve(slot, SlotFlags::LONG_PRESSABLE, resolver) {
            if let Some(callback) = self.on_item_long_click.as_mut() {
                callback(position, &self.models[position]);
            }
        }
        true
    }

    /// Records a pointer down on `slot`.
    ///
    /// Presses on unknown slots are ignored.
    pub fn pointer_down(
        &mut self,
        pointer: Option<PointerId>,
        slot: SlotId,
        position: Point,
        timestamp: u64,
    ) {
        if self.is_registered(slot) {
            self.presses.on_down(pointer, slot, position, timestamp);
        }
    }

    /// Records pointer movement; leaving the touch slop cancels the gesture.
    pub fn pointer_move(&mut self, pointer: Option<PointerId>, position: Point) {
        self.presses.on_move(pointer, position);
    }

    /// Records a pointer release over `slot` and dispatches the recognized
    /// gesture.
    pub fn pointer_up(
        &mut self,
        pointer: Option<PointerId>,
        slot: SlotId,
        position: Point,
        timestamp: u64,
        resolver: &impl PositionResolver,
    ) -> Gesture<SlotId> {
        let gesture = self.presses.on_up(pointer, &slot, position, timestamp);
        match gesture {
            Gesture::Tap(target) => {
                self.dispatch_tap(target, resolver);
            }
            Gesture::LongPress(target) => {
                self.dispatch_long_press(target, resolver);
            }
            Gesture::Suppressed(_) => {}
        }
        gesture
    }

    /// Cancels the press of `pointer`.
    pub fn pointer_cancel(&mut self, pointer: Option<PointerId>) {
        self.presses.cancel(pointer);
    }

    /// Dispatches long presses that became due at `now`.
    ///
    /// Returns how many fired.
    pub fn poll_long_press(&mut self, now: u64, resolver: &impl PositionResolver) -> usize {
        let fired = self.presses.poll(now);
        for &slot in &fired {
            self.dispatch_long_press(slot, resolver);
        }
        fired.len()
    }

    fn accepts(&self, slot: SlotId, gesture: SlotFlags) -> bool {
        self.slots
            .get(&slot)
            .is_some_and(|flags| flags.contains(gesture))
    }

    fn resolve(
        &self,
        slot: SlotId,
        gesture: SlotFlags,
        resolver: &impl PositionResolver,
    ) -> Option<usize> {
        if !self.accepts(slot, gesture) {
            tracing::trace!(
                target: "listkit_adapter::adapter",
                slot = slot.get(),
                "ignored interaction on unregistered slot"
            );
            return None;
        }
        if self.models.is_empty() {
            return None;
        }
        let Some(position) = resolver.adapter_position(slot) else {
            tracing::trace!(
                target: "listkit_adapter::adapter",
                slot = slot.get(),
                "ignored interaction without a resolved position"
            );
            return None;
        };
        assert_position(position, self.models.len());
        Some(position)
    }
}

fn assert_position(position: usize, len: usize) {
    assert!(
        position < len,
        "position {position} out of range for {len} view-models"
    );
}

impl<T, V: HostView> Default for ListAdapter<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, V: HostView> fmt::Debug for ListAdapter<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListAdapter")
            .field("models", &self.models)
            .field("config", &self.config)
            .field("slots", &self.slots.len())
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
