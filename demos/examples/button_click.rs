// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted click on an immediate-mode button.
//!
//! Each frame re-declares the same two overlapping buttons and prints what
//! the dispatcher decided: who is hovered, who holds the grab, and when the
//! click fires. Only the first button in paint order can hover, even though
//! both rects contain the pointer.
//!
//! Run:
//! - `cargo run -p thicket_demos --example button_click`

use kurbo::{Point, Rect};
use thicket_dispatch::{Dispatcher, Event, Request, Status};

/// One immediate-mode button: declare it, read back the result.
fn button(ui: &mut Dispatcher, id: &str, rect: Rect) -> Event {
    let target = ui.check(Request::Grab, rect, id);
    let status = target.status();
    let event = target.event();
    println!(
        "  {id:>6}: hovered={} grabbed={} event={event:?}",
        status.contains(Status::HOVERED),
        status.contains(Status::GRABBED),
    );
    event
}

fn main() {
    let mut ui = Dispatcher::new();
    let front = Rect::new(0.0, 0.0, 100.0, 30.0);
    let back = Rect::new(50.0, 0.0, 150.0, 30.0);

    // A little script of (label, pointer, pressed buttons, released buttons).
    let frames: &[(&str, Point, &[u8], &[u8])] = &[
        ("idle", Point::new(200.0, 200.0), &[], &[]),
        ("hover", Point::new(60.0, 15.0), &[], &[]),
        ("press", Point::new(60.0, 15.0), &[0], &[]),
        ("drag out", Point::new(200.0, 15.0), &[], &[]),
        ("drag back", Point::new(60.0, 15.0), &[], &[]),
        ("release", Point::new(60.0, 15.0), &[], &[0]),
    ];

    for (label, pointer, pressed, released) in frames {
        ui.reset();
        ui.move_pointer(*pointer);
        for b in *pressed {
            ui.press_pointer(*b);
        }
        for b in *released {
            ui.release_pointer(*b);
        }

        println!("frame {} ({label}):", ui.ticks());
        if button(&mut ui, "front", front) == Event::Action {
            println!("  -> front button clicked!");
        }
        button(&mut ui, "back", back);
    }
}
