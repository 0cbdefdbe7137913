// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A fake two-column grid screen driven by `listkit_adapter`.
//!
//! This example shows how a host toolkit wires the adapter:
//! - an [`Inflater`] and [`HostView`] standing in for real widgets,
//! - a tiny "surface" that asks for item count, view types and spans, creates
//!   and binds slots, and remembers which position each slot shows,
//! - raw pointer events turned into taps and long presses by the adapter.
//!
//! Run:
//! - `RUST_LOG=listkit_adapter=trace cargo run -p listkit_demos --example screen`

use std::cell::RefCell;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::rc::Rc;

use kurbo::Point;
use listkit_adapter::{
    AdapterBuilder, Gesture, HostView, Inflater, LayoutId, ListAdapter, PositionRole, Slot,
    SlotId, ViewKey, ViewModel,
};
use tracing_subscriber::EnvFilter;

const CARD: LayoutId = LayoutId(1);
const BANNER: LayoutId = LayoutId(2);
const NOTHING_HERE: LayoutId = LayoutId(3);

const TITLE: ViewKey = ViewKey(10);
const BADGE: ViewKey = ViewKey(11);

/// A widget tree reduced to a map of labelled children.
#[derive(Debug)]
struct Widget {
    template: LayoutId,
    visible: bool,
    labels: Rc<RefCell<HashMap<ViewKey, String>>>,
}

/// Handle to one label of a [`Widget`].
#[derive(Clone, Debug)]
struct Label {
    key: ViewKey,
    labels: Rc<RefCell<HashMap<ViewKey, String>>>,
}

impl Label {
    fn set_text(&self, text: impl Into<String>) {
        self.labels.borrow_mut().insert(self.key, text.into());
    }

    fn text(&self) -> Option<String> {
        self.labels.borrow().get(&self.key).cloned()
    }
}

impl HostView for Widget {
    type Handle = Label;

    fn find_view(&self, key: ViewKey) -> Option<Label> {
        let has_child = match self.template {
            CARD => key == TITLE || key == BADGE,
            BANNER | NOTHING_HERE => key == TITLE,
            _ => false,
        };
        has_child.then(|| Label {
            key,
            labels: self.labels.clone(),
        })
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Counts inflations, the way a toolkit would report allocations.
#[derive(Debug, Default)]
struct WidgetFactory {
    inflated: usize,
}

impl Inflater<Widget> for WidgetFactory {
    fn inflate(&mut self, template: LayoutId) -> Widget {
        self.inflated += 1;
        Widget {
            template,
            visible: true,
            labels: Rc::default(),
        }
    }
}

/// The rendering surface: one slot per position, no recycling.
struct Surface {
    slots: Vec<Slot<Widget>>,
    bound: HashMap<SlotId, usize>,
}

impl Surface {
    fn new() -> Self {
        Self {
            slots: Vec::new(),
            bound: HashMap::new(),
        }
    }

    /// Rebuilds every slot from the adapter, as after a full invalidation.
    fn refresh(&mut self, adapter: &mut ListAdapter<Fruit, Widget>, factory: &mut WidgetFactory) {
        for slot in self.slots.drain(..) {
            let _ = adapter.release_slot(slot);
        }
        self.bound.clear();
        for position in 0..adapter.item_count() {
            let mut slot = adapter.create_slot(adapter.view_type_at(position), factory);
            adapter.bind(&mut slot, position);
            self.bound.insert(slot.id(), position);
            self.slots.push(slot);
        }
    }

    fn print(&mut self, adapter: &ListAdapter<Fruit, Widget>) {
        let lookup = adapter.span_lookup();
        for row in lookup.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&position| {
                    let slot = &mut self.slots[position];
                    if !slot.view().visible {
                        return String::from("(hidden)");
                    }
                    let title = slot
                        .find_view(TITLE)
                        .and_then(|label| label.text())
                        .unwrap_or_default();
                    let badge = slot
                        .find_view(BADGE)
                        .and_then(|label| label.text())
                        .unwrap_or_default();
                    format!("{title}{badge} ({} cols)", lookup.span_at(position))
                })
                .collect();
            println!("  | {} |", cells.join(" | "));
        }
    }

    fn position_of(&self, slot: SlotId) -> Option<usize> {
        self.bound.get(&slot).copied()
    }
}

#[derive(Clone, Debug)]
struct Fruit {
    name: &'static str,
}

fn fruits() -> Vec<ViewModel<Fruit>> {
    let banner = ViewModel::new(
        BANNER,
        PositionRole::Leading,
        Fruit {
            name: "Seasonal picks",
        },
    )
    .with_span_size(NonZeroUsize::new(2).unwrap());
    let names = ["apple", "pear", "plum"];
    let cards = names.iter().enumerate().map(|(index, &name)| {
        // The banner is the leading item, so cards are never first.
        let role = if index + 1 == names.len() {
            PositionRole::Trailing
        } else {
            PositionRole::Middle
        };
        ViewModel::new(CARD, role, Fruit { name })
    });
    std::iter::once(banner).chain(cards).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    tracing::info!("building a two-column fruit grid");

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let click_log = clicks.clone();

    let mut adapter = AdapterBuilder::<Fruit, Widget>::new()
        .grid(NonZeroUsize::new(2).unwrap())
        .empty_template(NOTHING_HERE)
        .on_item_bind(|_, model, slot| {
            if let Some(title) = slot.find_view(TITLE) {
                title.set_text(model.payload().name);
            }
            if let Some(badge) = slot.find_view(BADGE) {
                badge.set_text(if model.is_selected() { " *" } else { "" });
            }
        })
        .on_empty_bind(|slot| {
            if let Some(title) = slot.find_view(TITLE) {
                title.set_text("Nothing here yet");
            }
        })
        .on_item_click(move |position, model| {
            click_log
                .borrow_mut()
                .push(format!("tap {position} {}", model.payload().name));
        })
        .on_item_long_click(|position, model| {
            println!("long press on {position} ({})", model.payload().name);
        })
        .build();

    let mut factory = WidgetFactory::default();
    let mut surface = Surface::new();

    println!("empty screen:");
    surface.refresh(&mut adapter, &mut factory);
    surface.print(&adapter);

    adapter.set_models(fruits());
    surface.refresh(&mut adapter, &mut factory);
    println!("after loading:");
    surface.print(&adapter);

    // Tap "pear": down and up on its slot, close together in space and time.
    let pear = surface.slots[2].id();
    adapter.pointer_down(None, pear, Point::new(40.0, 120.0), 0);
    let gesture = adapter.pointer_up(None, pear, Point::new(42.0, 121.0), 90, &|slot| {
        surface.position_of(slot)
    });
    assert_eq!(gesture, Gesture::Tap(pear));

    // Hold "plum" until the long-press timeout passes.
    let plum = surface.slots[3].id();
    adapter.pointer_down(None, plum, Point::new(140.0, 120.0), 1_000);
    let fired = adapter.poll_long_press(1_600, &|slot| surface.position_of(slot));
    assert_eq!(fired, 1);
    let gesture = adapter.pointer_up(None, plum, Point::new(140.0, 120.0), 1_700, &|slot| {
        surface.position_of(slot)
    });
    assert_eq!(gesture, Gesture::Suppressed(Some(plum)));

    // A tap does not invalidate, so rebind the tapped position by hand.
    let position = surface.position_of(pear).unwrap_or_default();
    adapter.bind(&mut surface.slots[position], position);
    println!("after tapping pear:");
    surface.print(&adapter);

    println!("clicks: {:?}", clicks.borrow());
    println!(
        "selected: {:?}",
        adapter
            .selected_view_models()
            .map(|model| model.payload().name)
            .collect::<Vec<_>>()
    );

    adapter.select_all();
    surface.refresh(&mut adapter, &mut factory);
    println!("after select all:");
    surface.print(&adapter);
    println!("widgets inflated: {}", factory.inflated);
}
