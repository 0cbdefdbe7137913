// Copyright 2025 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listkit Gesture: tap and long-press recognition for list slots.
//!
//! This crate turns raw pointer events (down, move, up, plus a clock poll) into
//! the two gestures a list adapter cares about:
//!
//! - **Tap**: the pointer is released on the element it pressed, without
//!   travelling farther than the touch slop and before the long-press timeout.
//! - **Long press**: the pointer is held on an element for at least the
//!   long-press timeout, again without travelling farther than the touch slop.
//!
//! Anything else (drags, releases on another element, releases after a long
//! press already fired) is suppressed. Richer gestures such as flings, double
//! taps or pinches are out of scope.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use listkit_gesture::{Gesture, PressState};
//!
//! let mut state: PressState<u32> = PressState::new();
//!
//! // A quick press and release on the same slot is a tap.
//! state.on_down(None, 7, Point::new(10.0, 10.0), 1_000);
//! let gesture = state.on_up(None, &7, Point::new(12.0, 11.0), 1_080);
//! assert_eq!(gesture, Gesture::Tap(7));
//!
//! // Holding the pointer past the timeout fires a long press from `poll`,
//! // and the subsequent release is swallowed.
//! state.on_down(None, 7, Point::new(10.0, 10.0), 2_000);
//! assert!(state.poll(2_100).is_empty());
//! assert_eq!(state.poll(2_600).as_slice(), &[7]);
//! assert_eq!(
//!     state.on_up(None, &7, Point::new(10.0, 10.0), 2_700),
//!     Gesture::Suppressed(Some(7))
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for the distance math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod press;

pub use press::{Gesture, PointerId, Press, PressState};
