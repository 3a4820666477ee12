// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hover/grab/focus state machine.
//!
//! One [`Machine`] is built per `check` call and resolves that element's
//! [`Status`] and [`Event`] from the frame's input, the persisted ownership
//! ids, the element's path, and a read-only view of its parent record. It is
//! deliberately independent of the scope stack so the priority chain can be
//! exercised in isolation.
//!
//! ## Priority chain
//!
//! Stages short-circuit in this order:
//!
//! 1. **hover** — paint-order exclusivity (`had_hover`), the parent hover
//!    chain, and point-in-rect.
//! 2. **grab over / grab out** — press, release, and cancel handling for the
//!    element under (or no longer under) the pointer.
//! 3. **grab command** — escape cancels a held grab.
//! 4. **focus / gain focus / lose focus** — resolution against the focused,
//!    next-focus, and losing-focus ids. At most one element can be promised
//!    focus per frame; the first writer wins.
//! 5. **focus command / input command / action command** — the keyboard
//!    decoder for the focused element.
//!
//! Focus transfer is a two-frame handshake: the element that wins the
//! gain-focus attempt becomes `focused` immediately and the previous holder
//! is marked `losing_focus`; the loser reports [`Event::FocusLost`] when it
//! is next checked, and [`Dispatcher::reset`](crate::Dispatcher::reset)
//! settles whatever remains of the handshake at the frame boundary.

use alloc::string::String;
use kurbo::{Point, Rect};

use crate::types::{Command, Event, Request, Status, TargetState};

/// Primary button bitmask; a fresh grab requires this press state exactly.
///
/// The equality test (rather than a bit test) is what keeps a chorded press
/// from granting a grab: pressing a second button while the first is down
/// cancels instead.
const PRIMARY: u32 = 1;

/// Input state accumulated since the last `reset`, cleared every frame.
#[derive(Clone, Debug)]
pub(crate) struct FrameInput {
    /// Current pointer position, in absolute coordinates.
    pub(crate) pointer: Point,
    /// Bitmask of buttons pressed this frame.
    pub(crate) pressed: u32,
    /// Bitmask of buttons released this frame.
    pub(crate) released: u32,
    /// The frame's single semantic command.
    pub(crate) command: Command,
    /// Queued input text for the focused element.
    pub(crate) text: String,
    /// Whether an earlier-closed element already consumed hover this frame.
    pub(crate) had_hover: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            pointer: Point::ZERO,
            pressed: 0,
            released: 0,
            command: Command::None,
            text: String::new(),
            had_hover: false,
        }
    }
}

/// Grab and focus ownership, persisted across frames.
///
/// At most one id is grabbed and at most one is focused at any time.
/// `next_focus`/`losing_focus` carry the in-flight focus handshake.
#[derive(Clone, Debug, Default)]
pub(crate) struct OwnershipIds {
    /// Path of the element holding the pointer drag, or empty.
    pub(crate) grabbed: String,
    /// Path of the element holding keyboard focus, or empty.
    pub(crate) focused: String,
    /// Path promised focus at the next confirmation point, or empty.
    pub(crate) next_focus: String,
    /// Path in the process of losing focus this frame, or empty.
    pub(crate) losing_focus: String,
}

/// Replace `dst` with `src`, reusing `dst`'s allocation.
fn assign(dst: &mut String, src: &str) {
    dst.clear();
    dst.push_str(src);
}

/// Result of resolving one element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Reaction {
    pub(crate) status: Status,
    pub(crate) event: Event,
}

/// One element's trip through the priority chain.
pub(crate) struct Machine<'a> {
    pub(crate) frame: &'a mut FrameInput,
    pub(crate) ids: &'a mut OwnershipIds,
    /// The element's full path.
    pub(crate) path: &'a str,
    /// The record of the innermost open ancestor, if any.
    pub(crate) parent: Option<&'a TargetState>,
}

impl Machine<'_> {
    /// Run the chain for an element requesting `req` over `rect`.
    pub(crate) fn resolve(mut self, req: Request, rect: Rect) -> Reaction {
        debug_assert!(req > Request::None, "Request::None never reaches the machine");
        let mut event = Event::None;
        let status = self.hover(req, rect, &mut event);
        Reaction { status, event }
    }

    /// Hover stage: eligible only if no earlier sibling consumed hover, the
    /// parent chain is itself hovered, and the pointer is inside `rect`.
    fn hover(&mut self, req: Request, rect: Rect, event: &mut Event) -> Status {
        let parent_hovered = self
            .parent
            .is_none_or(|p| p.status.contains(Status::HOVERED));
        if self.frame.had_hover || !parent_hovered || !rect.contains(self.frame.pointer) {
            if req == Request::Hover {
                return Status::empty();
            }
            return self.grab_out(req, event);
        }
        if req == Request::Hover {
            return Status::HOVERED;
        }
        Status::HOVERED | self.grab_over(req, event)
    }

    /// Grab stage for a hovered element.
    fn grab_over(&mut self, req: Request, event: &mut Event) -> Status {
        if self.frame.released != 0 {
            // A release over the holder completes the interaction.
            if self.ids.grabbed == self.path {
                *event = Event::Action;
                self.ids.grabbed.clear();
            }
            return self.focus(req, event);
        }
        if self.frame.pressed != PRIMARY {
            if self.ids.grabbed != self.path {
                return if req == Request::Grab {
                    Status::empty()
                } else {
                    self.gain_focus(req, event)
                };
            }
            if self.frame.pressed == 0 {
                return Status::GRABBED | self.grab_command(req, event);
            }
            // A chorded press while held is a cancel, not a second grab.
            *event = Event::Cancel;
            self.ids.grabbed.clear();
            return self.focus(req, event);
        }
        *event = Event::Grab;
        assign(&mut self.ids.grabbed, self.path);
        if req == Request::Grab {
            return Status::GRABBED;
        }
        Status::GRABBED | self.gain_focus(req, event)
    }

    /// Grab stage for an element the pointer is no longer over.
    fn grab_out(&mut self, req: Request, event: &mut Event) -> Status {
        if self.ids.grabbed != self.path {
            return if self.frame.pressed == 0 {
                self.focus(req, event)
            } else {
                self.lose_focus(req, event)
            };
        }
        if self.frame.released == 0 && self.frame.pressed == 0 {
            // The drag continues outside the element's bounds.
            return Status::GRABBED | self.focus(req, event);
        }
        *event = Event::Cancel;
        self.ids.grabbed.clear();
        if req == Request::Grab || self.ids.focused != self.path {
            return Status::empty();
        }
        if self.frame.pressed != 0 {
            return self.lose_focus(req, event);
        }
        self.focus(req, event)
    }

    /// Command handling while held: escape cancels the grab.
    fn grab_command(&mut self, req: Request, event: &mut Event) -> Status {
        if self.frame.command == Command::Escape {
            *event = Event::Cancel;
        }
        if req == Request::Grab {
            self.action_command(event)
        } else {
            self.focus(req, event)
        }
    }

    /// Focus stage: resolve against the focused/next/losing ids.
    fn focus(&mut self, req: Request, event: &mut Event) -> Status {
        if self.ids.focused == self.path {
            if self.ids.losing_focus == self.path {
                // The single frame where a losing element still reports
                // FOCUSED before fully releasing.
                return Status::FOCUSED;
            }
            // Keep-alive: reconfirm the promise so reset() does not drop it.
            assign(&mut self.ids.next_focus, self.path);
            return Status::FOCUSED | self.focus_command(req, event);
        }
        if self.ids.losing_focus == self.path {
            *event = Event::FocusLost;
            return Status::empty();
        }
        if self.ids.next_focus == self.path {
            assign(&mut self.ids.focused, self.path);
            *event = Event::FocusGained;
            return Status::FOCUSED;
        }
        Status::empty()
    }

    /// Attempt to acquire focus for a focus-level element that interacted
    /// this frame.
    fn gain_focus(&mut self, req: Request, event: &mut Event) -> Status {
        if self.ids.focused == self.path || self.ids.next_focus == self.path {
            return self.focus(req, event);
        }
        if !self.ids.next_focus.is_empty() {
            // Someone else was already promised focus this frame. A child may
            // still take over from its own still-settling ancestor, but only
            // if that ancestor is focused and has not fired a competing event.
            let Some(parent) = self.parent else {
                return Status::empty();
            };
            if !parent.status.contains(Status::FOCUSED) {
                return Status::empty();
            }
            if parent.event != Event::None && parent.event != Event::FocusGained {
                assign(&mut self.ids.next_focus, self.path);
                self.ids.losing_focus.clone_from(&self.ids.focused);
                return Status::empty();
            }
        }
        assign(&mut self.ids.next_focus, self.path);
        if *event != Event::None
            || !self.ids.losing_focus.is_empty()
            || (!self.ids.focused.is_empty() && self.ids.focused == self.ids.grabbed)
        {
            // A grabbed element must not lose focus mid-grab; the promise
            // stays recorded for the next confirmation point.
            return Status::empty();
        }
        self.ids.losing_focus.clone_from(&self.ids.focused);
        assign(&mut self.ids.focused, self.path);
        *event = Event::FocusGained;
        Status::FOCUSED
    }

    /// A press happened outside a focused, non-grabbed element.
    fn lose_focus(&mut self, req: Request, event: &mut Event) -> Status {
        if self.ids.focused != self.path {
            return self.focus(req, event);
        }
        if *event == Event::None {
            self.ids.focused.clear();
            *event = Event::FocusLost;
            return Status::empty();
        }
        assign(&mut self.ids.losing_focus, self.path);
        self.focus(req, event)
    }

    /// Route the focused element into the action or input decoder.
    fn focus_command(&mut self, req: Request, event: &mut Event) -> Status {
        if req == Request::Focus {
            self.action_command(event)
        } else {
            self.input_command(event)
        }
    }

    /// Decode the frame's command plus queued text for a focused input
    /// element.
    fn input_command(&mut self, event: &mut Event) -> Status {
        match self.frame.command {
            Command::Enter => {
                if self.frame.text.is_empty() {
                    *event = Event::EndLine;
                } else {
                    // The caller should have flushed; swallow the enter.
                    *event = Event::None;
                    return Status::INPUTING;
                }
            }
            Command::Space => {
                if self.frame.text.is_empty() {
                    *event = Event::Space;
                } else {
                    *event = Event::Input;
                    self.frame.text.push(' ');
                }
            }
            Command::Backspace => {
                if self.frame.text.is_empty() {
                    *event = Event::Backspace;
                } else {
                    *event = Event::Input;
                    self.frame.text.pop();
                }
            }
            Command::Escape => *event = Event::Cancel,
            Command::None | Command::Action => {
                if !self.frame.text.is_empty() {
                    *event = Event::Input;
                }
            }
        }
        Status::INPUTING | self.action_command(event)
    }

    /// Final mapper: any event releases the grab; otherwise activation
    /// commands promote to [`Event::Action`].
    fn action_command(&mut self, event: &mut Event) -> Status {
        if *event != Event::None {
            self.ids.grabbed.clear();
            return Status::empty();
        }
        match self.frame.command {
            Command::None => return Status::empty(),
            Command::Action | Command::Enter | Command::Space => *event = Event::Action,
            Command::Backspace | Command::Escape => {}
        }
        self.ids.grabbed.clear();
        Status::empty()
    }
}
