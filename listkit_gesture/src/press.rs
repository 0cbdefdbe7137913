// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Press tracking and tap/long-press recognition.
//!
//! ## Recognition rules
//!
//! 1. **Slop**: once a press travels farther than `touch_slop` from where it
//!    went down, it can no longer produce any gesture.
//! 2. **Long press**: a press held for at least `long_press_timeout` fires once,
//!    either from [`PressState::poll`] while still held or from
//!    [`PressState::on_up`] when the host never polled.
//! 3. **Tap**: a release on the pressed target, within slop, before the
//!    timeout, and with no long press fired.
//! 4. Everything else is [`Gesture::Suppressed`].
//!
//! ## Threshold configuration
//!
//! - `touch_slop: None` never cancels a press for movement.
//! - `long_press_timeout: None` disables long presses; every in-slop release on
//!   the pressed target becomes a tap.
//!
//! Each pointer is tracked independently, keyed by [`PointerId`]. Passing
//! `None` as pointer id uses pointer `1`.

use alloc::collections::BTreeMap;
use core::num::NonZeroU64;

use kurbo::Point;
use smallvec::SmallVec;

/// Pointer identifier for tracking multiple concurrent presses.
pub type PointerId = NonZeroU64;

const PRIMARY_POINTER: PointerId = NonZeroU64::MIN;

/// Default touch slop in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default long-press timeout in milliseconds.
pub const DEFAULT_LONG_PRESS_TIMEOUT: u64 = 500;

/// Tap and long-press recognizer.
///
/// `K` is the key of the pressed element; list adapters use their slot
/// identifier.
#[derive(Clone, Debug)]
pub struct PressState<K> {
    presses: BTreeMap<PointerId, Press<K>>,
    /// Distance a press may travel before it stops being a tap or long press.
    pub touch_slop: Option<f64>,
    /// Hold duration in milliseconds after which a press becomes a long press.
    pub long_press_timeout: Option<u64>,
}

/// State for an active pointer press.
#[derive(Clone, Debug)]
pub struct Press<K> {
    /// Element where the press went down.
    pub target: K,
    /// Pointer position at press time.
    pub down_position: Point,
    /// Timestamp of the press in milliseconds.
    pub down_time: u64,
    /// True once the press travelled farther than the touch slop.
    pub slop_exceeded: bool,
    /// True once a long press was reported for this press.
    pub long_press_fired: bool,
}

impl<K> Press<K> {
    fn long_press_due(&self, timeout: Option<u64>, now: u64) -> bool {
        !self.slop_exceeded
            && !self.long_press_fired
            && timeout.is_some_and(|timeout| now.saturating_sub(self.down_time) >= timeout)
    }
}

/// Outcome of a pointer release.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gesture<K> {
    /// The pressed element was tapped.
    Tap(K),
    /// The pressed element was held past the timeout and released.
    LongPress(K),
    /// No gesture; carries the pressed element if a press was active.
    Suppressed(Option<K>),
}

impl<K: PartialEq + Clone> PressState<K> {
    /// Creates a recognizer with [`DEFAULT_TOUCH_SLOP`] and
    /// [`DEFAULT_LONG_PRESS_TIMEOUT`].
    pub fn new() -> Self {
        Self::with_thresholds(Some(DEFAULT_TOUCH_SLOP), Some(DEFAULT_LONG_PRESS_TIMEOUT))
    }

    /// Creates a recognizer with custom thresholds.
    pub fn with_thresholds(touch_slop: Option<f64>, long_press_timeout: Option<u64>) -> Self {
        Self {
            presses: BTreeMap::new(),
            touch_slop,
            long_press_timeout,
        }
    }

    /// Records a pointer down on `target`.
    ///
    /// A second down on the same pointer replaces the earlier press.
    pub fn on_down(
        &mut self,
        pointer_id: Option<PointerId>,
        target: K,
        position: Point,
        timestamp: u64,
    ) {
        let press = Press {
            target,
            down_position: position,
            down_time: timestamp,
            slop_exceeded: false,
            long_press_fired: false,
        };
        self.presses.insert(pointer_id.unwrap_or(PRIMARY_POINTER), press);
    }

    /// Records pointer movement.
    ///
    /// Returns the pressed target when this move is the one that first exceeds
    /// the touch slop, `None` otherwise.
    pub fn on_move(&mut self, pointer_id: Option<PointerId>, position: Point) -> Option<K> {
        let press = self.presses.get_mut(&pointer_id.unwrap_or(PRIMARY_POINTER))?;
        if press.slop_exceeded {
            return None;
        }
        let slop = self.touch_slop?;
        if press.down_position.distance(position) > slop {
            press.slop_exceeded = true;
            tracing::trace!(target: "listkit_gesture::press", "press left touch slop");
            Some(press.target.clone())
        } else {
            None
        }
    }

    /// Fires long presses that became due at `now`.
    ///
    /// Each press fires at most once; a press that fired is swallowed on
    /// release.
    pub fn poll(&mut self, now: u64) -> SmallVec<[K; 2]> {
        let timeout = self.long_press_timeout;
        let mut fired = SmallVec::new();
        for press in self.presses.values_mut() {
            if press.long_press_due(timeout, now) {
                press.long_press_fired = true;
                fired.push(press.target.clone());
            }
        }
        fired
    }

    /// Records a pointer release over `current_target` and classifies the press.
    pub fn on_up(
        &mut self,
        pointer_id: Option<PointerId>,
        current_target: &K,
        position: Point,
        timestamp: u64,
    ) -> Gesture<K> {
        let Some(press) = self.presses.remove(&pointer_id.unwrap_or(PRIMARY_POINTER)) else {
            return Gesture::Suppressed(None);
        };

        if press.long_press_fired || press.slop_exceeded || press.target != *current_target {
            return Gesture::Suppressed(Some(press.target));
        }

        let within_slop = self
            .touch_slop
            .is_none_or(|slop| press.down_position.distance(position) <= slop);
        if !within_slop {
            return Gesture::Suppressed(Some(press.target));
        }

        if press.long_press_due(self.long_press_timeout, timestamp) {
            Gesture::LongPress(press.target)
        } else {
            Gesture::Tap(press.target)
        }
    }

    /// Cancels the press of a pointer.
    ///
    /// Returns `true` if a press was active.
    pub fn cancel(&mut self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .remove(&pointer_id.unwrap_or(PRIMARY_POINTER))
            .is_some()
    }

    /// Cancels every press on `target`.
    ///
    /// Used when the element goes away mid-press.
    pub fn cancel_target(&mut self, target: &K) {
        self.presses.retain(|_, press| press.target != *target);
    }

    /// Returns `true` if the pointer has an active press.
    pub fn is_pressed(&self, pointer_id: Option<PointerId>) -> bool {
        self.presses
            .contains_key(&pointer_id.unwrap_or(PRIMARY_POINTER))
    }

    /// Returns the active press of a pointer.
    pub fn get_press(&self, pointer_id: PointerId) -> Option<&Press<K>> {
        self.presses.get(&pointer_id)
    }

    /// Clears all active presses.
    pub fn clear(&mut self) {
        self.presses.clear();
    }
}

impl<K: PartialEq + Clone> Default for PressState<K> {
    fn default() -> Self {
        Self::new()
    }
}
