// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted text box: click to focus, type, backspace, press enter.
//!
//! The dispatcher only decodes commands and buffers text; the widget owns
//! its backing string and applies the decoded events to it, exactly as a
//! real text box would.
//!
//! Run:
//! - `cargo run -p thicket_demos --example text_entry`

use kurbo::{Point, Rect};
use thicket_dispatch::{Command, Dispatcher, Event, Request, Status};

/// Minimal text box state living outside the dispatcher.
#[derive(Default)]
struct TextBox {
    value: String,
}

impl TextBox {
    fn frame(&mut self, ui: &mut Dispatcher, rect: Rect) {
        let target = ui.check(Request::Input, rect, "name");
        let focused = target.status().contains(Status::FOCUSED);
        match target.event() {
            Event::Input => self.value.push_str(target.input()),
            Event::Backspace => {
                self.value.pop();
            }
            Event::EndLine => println!("  submitted: {:?}", self.value),
            Event::FocusGained => println!("  focus gained"),
            Event::FocusLost => println!("  focus lost"),
            _ => {}
        }
        println!("  value={:?} focused={focused}", self.value);
    }
}

fn main() {
    let mut ui = Dispatcher::new();
    let rect = Rect::new(10.0, 10.0, 170.0, 34.0);
    let mut text_box = TextBox::default();

    // Click inside the box, type "hi there", fix a typo, submit, click away.
    ui.move_pointer(Point::new(20.0, 20.0));

    let frames: &[(&str, Command, &str)] = &[
        ("click", Command::None, ""),
        ("settle", Command::None, ""),
        ("type", Command::None, "hi"),
        ("space", Command::Space, " "),
        ("type more", Command::None, "therr"),
        ("backspace", Command::Backspace, ""),
        ("fix", Command::None, "e"),
        ("submit", Command::Enter, ""),
    ];

    for (i, (label, command, text)) in frames.iter().enumerate() {
        ui.reset();
        if i == 0 {
            ui.press_pointer(0);
        } else if i == 1 {
            ui.release_pointer(0);
        }
        if *command != Command::None {
            ui.set_command(*command);
        }
        if !text.is_empty() {
            ui.append_input(text);
        }

        println!("frame {} ({label}):", ui.ticks());
        text_box.frame(&mut ui, rect);
    }

    // Clicking outside drops focus.
    ui.reset();
    ui.move_pointer(Point::new(300.0, 300.0));
    ui.press_pointer(0);
    println!("frame {} (click away):", ui.ticks());
    text_box.frame(&mut ui, rect);

    ui.reset();
    println!("wants keyboard: {}", ui.wants_keyboard());
}
