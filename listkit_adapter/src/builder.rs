// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fluent construction of a configured [`ListAdapter`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::num::NonZeroUsize;

use crate::adapter::{OnEmptyBind, OnInvalidate, OnItemBind, OnItemClick, OnItemLongClick};
use crate::{AdapterConfig, HostView, LayoutId, ListAdapter, Slot, ViewModel};

/// Builder collecting configuration, callbacks and initial items for a
/// [`ListAdapter`].
///
/// Every option is optional; unset callbacks stay unset and the
/// configuration defaults to [`AdapterConfig::default`].
///
/// ```
/// use core::num::NonZeroUsize;
/// use listkit_adapter::{AdapterBuilder, HostView, LayoutId, ViewKey, ViewModel};
///
/// struct Label(&'static str);
///
/// impl HostView for Label {
///     type Handle = ();
///     fn find_view(&self, _key: ViewKey) -> Option<()> {
///         None
///     }
///     fn set_visible(&mut self, _visible: bool) {}
/// }
///
/// let adapter = AdapterBuilder::<&str, Label>::new()
///     .grid(NonZeroUsize::new(2).unwrap())
///     .empty_template(LayoutId(100))
///     .on_item_click(|position, model| {
///         let _ = (position, model.payload());
///     })
///     .models(ViewModel::sequence(LayoutId(1), ["a", "b", "c"]))
///     .build();
///
/// assert_eq!(adapter.item_count(), 3);
/// assert_eq!(adapter.config().span_count.get(), 2);
/// ```
pub struct AdapterBuilder<T, V: HostView> {
    config: AdapterConfig,
    models: Vec<ViewModel<T>>,
    on_item_click: Option<OnItemClick<T>>,
    on_item_long_click: Option<OnItemLongClick<T>>,
    on_item_bind: Option<OnItemBind<T, V>>,
    on_empty_bind: Option<OnEmptyBind<V>>,
    on_invalidate: Option<OnInvalidate>,
}

impl<T, V: HostView> AdapterBuilder<T, V> {
    /// Starts from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: AdapterConfig::default(),
            models: Vec::new(),
            on_item_click: None,
            on_item_long_click: None,
            on_item_bind: None,
            on_empty_bind: None,
            on_invalidate: None,
        }
    }

    /// Replaces the whole configuration.
    #[must_use]
    pub fn config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    /// Template for the empty-state placeholder.
    #[must_use]
    pub fn empty_template(mut self, template: LayoutId) -> Self {
        self.config.empty_template = template;
        self
    }

    /// Whether the empty-state placeholder is shown.
    #[must_use]
    pub fn empty_visible(mut self, visible: bool) -> Self {
        self.config.empty_visible = visible;
        self
    }

    /// Single-column list layout.
    #[must_use]
    pub fn linear(mut self) -> Self {
        self.config.span_count = NonZeroUsize::MIN;
        self
    }

    /// Grid layout with `span_count` columns.
    ///
    /// The placeholder spans all columns.
    #[must_use]
    pub fn grid(mut self, span_count: NonZeroUsize) -> Self {
        self.config.span_count = span_count;
        self
    }

    /// Touch slop for tap and long-press recognition.
    #[must_use]
    pub fn touch_slop(mut self, slop: Option<f64>) -> Self {
        self.config.touch_slop = slop;
        self
    }

    /// Long-press timeout in milliseconds; `None` disables long presses
    /// from pointer input.
    #[must_use]
    pub fn long_press_timeout(mut self, timeout: Option<u64>) -> Self {
        self.config.long_press_timeout = timeout;
        self
    }

    /// Initial collection.
    #[must_use]
    pub fn models(mut self, items: impl IntoIterator<Item = ViewModel<T>>) -> Self {
        self.models = items.into_iter().collect();
        self
    }

    /// Tap callback.
    #[must_use]
    pub fn on_item_click(mut self, callback: impl FnMut(usize, &ViewModel<T>) + 'static) -> Self {
        self.on_item_click = Some(Box::new(callback));
        self
    }

    /// Long-press callback.
    #[must_use]
    pub fn on_item_long_click(
        mut self,
        callback: impl FnMut(usize, &ViewModel<T>) + 'static,
    ) -> Self {
        self.on_item_long_click = Some(Box::new(callback));
        self
    }

    /// Item bind callback.
    #[must_use]
    pub fn on_item_bind(
        mut self,
        callback: impl FnMut(usize, &ViewModel<T>, &mut Slot<V>) + 'static,
    ) -> Self {
        self.on_item_bind = Some(Box::new(callback));
        self
    }

    /// Empty-state bind callback.
    #[must_use]
    pub fn on_empty_bind(mut self, callback: impl FnMut(&mut Slot<V>) + 'static) -> Self {
        self.on_empty_bind = Some(Box::new(callback));
        self
    }

    /// Listener run after every full invalidation.
    #[must_use]
    pub fn invalidation_listener(mut self, listener: impl FnMut() + 'static) -> Self {
        self.on_invalidate = Some(Box::new(listener));
        self
    }

    /// Builds the adapter.
    ///
    /// Initial models are installed before the invalidation listener, so the
    /// listener first runs on the first mutation after `build`.
    #[must_use]
    pub fn build(self) -> ListAdapter<T, V> {
        let mut adapter = ListAdapter::with_config(self.config);
        if !self.models.is_empty() {
            adapter.set_models(self.models);
        }
        adapter.install_callbacks(
            self.on_item_click,
            self.on_item_long_click,
            self.on_item_bind,
            self.on_empty_bind,
            self.on_invalidate,
        );
        adapter
    }
}

impl<T, V: HostView> Default for AdapterBuilder<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V: HostView> fmt::Debug for AdapterBuilder<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterBuilder")
            .field("config", &self.config)
            .field("models", &self.models.len())
            .field("on_item_click", &self.on_item_click.is_some())
            .field("on_item_long_click", &self.on_item_long_click.is_some())
            .field("on_item_bind", &self.on_item_bind.is_some())
            .field("on_empty_bind", &self.on_empty_bind.is_some())
            .field("on_invalidate", &self.on_invalidate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;
    use core::num::NonZeroUsize;

    use super::AdapterBuilder;
    use crate::{
        AdapterConfig, AdapterState, HostView, LayoutId, SlotId, ViewKey, ViewModel, ViewType,
    };

    #[derive(Debug, Default)]
    struct Cell {
        visible: bool,
    }

    impl HostView for Cell {
        type Handle = ();

        fn find_view(&self, _key: ViewKey) -> Option<()> {
            None
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[test]
    fn defaults_match_the_default_configuration() {
        let adapter = AdapterBuilder::<u8, Cell>::new().build();
        assert_eq!(*adapter.config(), AdapterConfig::default());
        assert_eq!(adapter.state(), AdapterState::Empty);
        assert_eq!(adapter.data_generation(), 0);
    }

    #[test]
    fn options_reach_the_adapter() {
        let mut adapter = AdapterBuilder::<u8, Cell>::new()
            .grid(NonZeroUsize::new(3).unwrap())
            .empty_template(LayoutId(42))
            .empty_visible(false)
            .touch_slop(None)
            .long_press_timeout(Some(250))
            .build();

        let config = *adapter.config();
        assert_eq!(config.span_count.get(), 3);
        assert_eq!(config.empty_template, LayoutId(42));
        assert!(!config.empty_visible);
        assert_eq!(config.touch_slop, None);
        assert_eq!(config.long_press_timeout, Some(250));
        assert_eq!(adapter.span_at(0), 3);

        let slot = adapter.create_slot(ViewType::Empty, &mut |_: LayoutId| Cell {
            visible: true,
        });
        assert!(!slot.view().visible);
    }

    #[test]
    fn linear_resets_the_span_count() {
        let adapter = AdapterBuilder::<u8, Cell>::new()
            .grid(NonZeroUsize::new(4).unwrap())
            .linear()
            .build();
        assert_eq!(adapter.span_at(0), 1);
    }

    #[test]
    fn callbacks_and_models_are_installed() {
        let clicks = Rc::new(RefCell::new(0));
        let invalidations = Rc::new(RefCell::new(0));
        let click_sink = clicks.clone();
        let invalidation_sink = invalidations.clone();

        let mut adapter = AdapterBuilder::<u8, Cell>::new()
            .models(ViewModel::sequence(LayoutId(1), [1, 2]))
            .on_item_click(move |_, _| *click_sink.borrow_mut() += 1)
            .invalidation_listener(move || *invalidation_sink.borrow_mut() += 1)
            .build();

        assert_eq!(adapter.item_count(), 2);
        assert_eq!(*invalidations.borrow(), 0);

        let slot =
            adapter.create_slot(ViewType::Item(LayoutId(1)), &mut |_: LayoutId| Cell::default());
        adapter.dispatch_tap(slot.id(), &|_: SlotId| Some(0));
        assert_eq!(*clicks.borrow(), 1);

        adapter.unselect_all();
        assert_eq!(*invalidations.borrow(), 1);
    }
}
