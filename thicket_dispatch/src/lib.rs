// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thicket Dispatch: an immediate-mode hover/grab/focus input dispatcher.
//!
//! ## Overview
//!
//! In an immediate-mode UI the application re-declares its whole widget tree
//! every frame. This crate owns the part that must *not* be rebuilt from
//! scratch: deciding, from raw pointer and keyboard triggers, which element
//! currently owns hover, the pointer drag ("grab"), and keyboard focus, and
//! translating that into one semantic [`Event`] per element.
//!
//! It deliberately does no rendering, layout, styling, or text shaping.
//! Widgets and containers call [`Dispatcher::check`] with the rect and id
//! they computed, read back [`Status`] flags and the [`Event`], and draw
//! however they like.
//!
//! ## Identity
//!
//! Elements are identified by hierarchical paths: each element contributes a
//! local id, and nesting joins them with [`ID_SEPARATOR`] (`"menu/file/save"`).
//! Grab and focus ownership persist across frames as paths, so an element is
//! "the same element" next frame exactly when it is checked at the same place
//! in the tree with the same id.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use thicket_dispatch::{Dispatcher, Event, Request, Status};
//!
//! let mut ui = Dispatcher::new();
//!
//! // Each frame: reset, feed triggers, then traverse.
//! ui.reset();
//! ui.move_pointer(Point::new(40.0, 12.0));
//! ui.press_pointer(0);
//!
//! let mut window = ui.check(Request::Hover, Rect::new(0.0, 0.0, 320.0, 200.0), "win");
//! {
//!     let ok = window.check(Request::Grab, Rect::new(20.0, 8.0, 120.0, 24.0), "ok");
//!     assert!(ok.status().contains(Status::GRABBED));
//!     assert_eq!(ok.event(), Event::Grab);
//! }
//! drop(window);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod dispatcher;
mod machine;
pub mod path;
pub mod types;

pub use dispatcher::{Dispatcher, Target};
pub use path::ID_SEPARATOR;
pub use types::{Command, Event, Request, Status, TargetState};
