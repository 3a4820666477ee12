// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dispatcher: per-frame triggers, the element scope stack, and the
//! [`Target`] guard returned by [`Dispatcher::check`].
//!
//! ## Frame protocol
//!
//! One frame is one call to [`Dispatcher::reset`] followed by a single
//! traversal of nested [`check`](Dispatcher::check) calls. The platform layer
//! feeds triggers first ([`move_pointer`](Dispatcher::move_pointer),
//! [`press_pointer`](Dispatcher::press_pointer),
//! [`release_pointer`](Dispatcher::release_pointer),
//! [`set_command`](Dispatcher::set_command),
//! [`append_input`](Dispatcher::append_input)), then the traversal checks each
//! element exactly once. Children are checked through their parent's
//! [`Target`], so the borrow checker enforces the stack discipline: targets
//! close in LIFO order, and `reset` cannot run while any target is open.
//!
//! `reset` clears one-shot triggers but leaves grab and focus ownership
//! intact, which is what makes drags and focus survive across frames.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use thicket_dispatch::{Dispatcher, Event, Request, Status};
//!
//! let mut ui = Dispatcher::new();
//! let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
//!
//! // Frame 1: the pointer presses over the button.
//! ui.reset();
//! ui.move_pointer(Point::new(5.0, 5.0));
//! ui.press_pointer(0);
//! {
//!     let button = ui.check(Request::Grab, rect, "ok");
//!     assert_eq!(button.event(), Event::Grab);
//!     assert!(button.status().contains(Status::GRABBED));
//! }
//!
//! // Frame 2: the release completes the click.
//! ui.reset();
//! ui.release_pointer(0);
//! let button = ui.check(Request::Grab, rect, "ok");
//! assert_eq!(button.event(), Event::Action);
//! ```

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use crate::machine::{FrameInput, Machine, OwnershipIds};
use crate::path::IdPath;
use crate::types::{Command, Event, Request, Status, TargetState};

/// Inline capacity of the scope stack; deeper trees spill to the heap.
const STACK_DEPTH: usize = 16;

/// Routes pointer and keyboard input to the elements of one UI surface.
///
/// All state is exclusive to the instance; independent surfaces (for example
/// separate windows) each get their own dispatcher.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    frame: FrameInput,
    ids: OwnershipIds,
    path: IdPath,
    stack: SmallVec<[TargetState; STACK_DEPTH]>,
    ticks: u64,
}

impl Dispatcher {
    /// Create a dispatcher with no hover, grab, or focus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the pointer position, in absolute coordinates.
    pub fn move_pointer(&mut self, pos: Point) {
        self.frame.pointer = pos;
    }

    /// Mark the given pointer button as pressed this frame.
    ///
    /// Button 0 is primary; only a primary press can begin a grab.
    pub fn press_pointer(&mut self, button: u8) {
        assert!(button < 32, "button index out of range");
        self.frame.pressed |= 1 << u32::from(button);
    }

    /// Mark the given pointer button as released this frame.
    pub fn release_pointer(&mut self, button: u8) {
        assert!(button < 32, "button index out of range");
        self.frame.released |= 1 << u32::from(button);
    }

    /// Set the frame's semantic keyboard command.
    pub fn set_command(&mut self, command: Command) {
        self.frame.command = command;
    }

    /// Queue input text for the focused element.
    ///
    /// A pending [`Command::Space`] is folded into the buffer as `' '`, and a
    /// pending [`Command::Backspace`] cancels against the buffered text, so
    /// platform layers can forward key and text events in arrival order.
    pub fn append_input(&mut self, text: &str) {
        if self.frame.command == Command::Space {
            self.frame.command = Command::None;
            self.frame.text.push(' ');
            if text == " " {
                return;
            }
        } else if self.frame.command == Command::Backspace {
            if self.frame.text.is_empty() {
                return;
            }
            self.frame.command = Command::None;
            self.frame.text.pop();
        }
        self.frame.text.push_str(text);
    }

    /// Begin a new frame: clear one-shot triggers and settle the focus
    /// handshake. Grab and focus ownership survive.
    ///
    /// # Panics
    ///
    /// Panics if any target from the previous traversal is still open; the
    /// persisted ids would be corrupt for the rest of the session otherwise.
    pub fn reset(&mut self) {
        assert!(self.stack.is_empty(), "reset() with open targets");
        self.frame.had_hover = false;
        self.frame.pressed = 0;
        self.frame.released = 0;
        if self.ids.next_focus == self.ids.focused {
            self.ids.next_focus.clear();
        }
        if self.ids.losing_focus == self.ids.focused {
            // The promised transfer was never reconfirmed; the holder is out.
            self.ids.focused.clear();
        } else {
            self.ids.losing_focus.clear();
        }
        self.frame.command = Command::None;
        self.frame.text.clear();
        self.ticks = self.ticks.wrapping_add(1);
    }

    /// Request focus for the given path out of band (for example a text box
    /// claiming focus programmatically).
    ///
    /// Returns `false` without side effects if a different element was
    /// already promised focus this frame.
    pub fn try_focus(&mut self, path: &str) -> bool {
        if !self.ids.next_focus.is_empty() && self.ids.next_focus != self.ids.focused {
            return false;
        }
        self.ids.next_focus.clear();
        self.ids.next_focus.push_str(path);
        if !self.ids.focused.is_empty() {
            self.ids.losing_focus.clone_from(&self.ids.focused);
        }
        true
    }

    /// Current pointer position.
    pub fn pointer_position(&self) -> Point {
        self.frame.pointer
    }

    /// Whether the given button is pressed this frame (and nothing was
    /// released).
    pub fn is_pointer_pressed(&self, button: u8) -> bool {
        assert!(button < 32, "button index out of range");
        self.frame.released == 0 && self.frame.pressed & (1 << u32::from(button)) != 0
    }

    /// Whether the given path currently owns keyboard focus.
    pub fn is_focused(&self, path: &str) -> bool {
        self.ids.focused == path
    }

    /// The frame's semantic command.
    pub fn command(&self) -> Command {
        self.frame.command
    }

    /// The queued input text.
    pub fn input(&self) -> &str {
        &self.frame.text
    }

    /// Whether the UI wants pointer events: something is hovered or a grab
    /// is held.
    pub fn wants_pointer(&self) -> bool {
        self.frame.had_hover || !self.ids.grabbed.is_empty()
    }

    /// Whether the UI wants keyboard events: some element is focused.
    pub fn wants_keyboard(&self) -> bool {
        !self.ids.focused.is_empty()
    }

    /// Frames elapsed since the dispatcher was created. Wraps.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Check events for the frame's root element.
    ///
    /// `rect` is the element's absolute rect; `id` its local identifier,
    /// required to be non-empty above [`Request::Hover`] and to not contain
    /// [`ID_SEPARATOR`](crate::ID_SEPARATOR). Children are checked through
    /// the returned [`Target`].
    ///
    /// # Panics
    ///
    /// Panics on an empty `id` above hover level; routing grab or focus to an
    /// anonymous element is a protocol violation.
    pub fn check(&mut self, req: Request, rect: Rect, id: &str) -> Target<'_> {
        let index = self.begin_target(req, rect, id);
        Target {
            dispatcher: self,
            index,
        }
    }

    fn begin_target(&mut self, req: Request, rect: Rect, id: &str) -> usize {
        self.path.extend(id, self.stack.is_empty());
        if req == Request::None {
            // Layout/clip bookkeeping only; the state machine never runs.
            self.stack.push(TargetState {
                id_len: id.len(),
                rect,
                status: Status::empty(),
                event: Event::None,
            });
            return self.stack.len() - 1;
        }
        assert!(
            !id.is_empty() || req == Request::Hover,
            "elements above hover interest require an id"
        );
        let reaction = Machine {
            frame: &mut self.frame,
            ids: &mut self.ids,
            path: self.path.as_str(),
            parent: self.stack.last(),
        }
        .resolve(req, rect);
        self.stack.push(TargetState {
            id_len: id.len(),
            rect,
            status: reaction.status,
            event: reaction.event,
        });
        self.stack.len() - 1
    }

    /// Pop the top record and bubble its consequences into the parent.
    fn pop_target(&mut self) {
        let Some(element) = self.stack.pop() else {
            unreachable!("target closed with empty stack");
        };
        if element.status.contains(Status::HOVERED) {
            // Paint-order exclusivity: later elements cannot hover this frame.
            self.frame.had_hover = true;
        }
        if self.stack.is_empty() {
            self.path.clear();
            return;
        }
        self.path.trim_by(element.id_len + 1);

        let had_grab = element.status.contains(Status::GRABBED);
        let had_focus = element.status.contains(Status::FOCUSED);
        if !had_grab && !had_focus {
            return;
        }
        let Some(parent) = self.stack.last_mut() else {
            unreachable!("stack emptiness handled above");
        };
        if had_grab {
            parent.status.remove(Status::GRABBED);
            if parent.event == Event::Grab {
                parent.event = Event::None;
            }
        }
        if had_focus {
            parent.status.remove(Status::FOCUSED | Status::INPUTING);
            if parent.event == Event::FocusGained {
                parent.event = Event::None;
            } else {
                parent.event = Event::FocusLost;
            }
        }
    }
}

/// An open element on the scope stack.
///
/// Returned by [`Dispatcher::check`] and [`Target::check`]; dropping (or
/// [`close`](Self::close)-ing) it pops the element and bubbles grab/focus
/// consequences to its parent. Holding the dispatcher mutably borrowed is
/// what makes out-of-order closes and traversal re-entry unrepresentable.
#[derive(Debug)]
pub struct Target<'a> {
    dispatcher: &'a mut Dispatcher,
    index: usize,
}

impl Target<'_> {
    /// Check events for a child element, nested inside this one.
    pub fn check(&mut self, req: Request, rect: Rect, id: &str) -> Target<'_> {
        let index = self.dispatcher.begin_target(req, rect, id);
        Target {
            dispatcher: &mut *self.dispatcher,
            index,
        }
    }

    fn state(&self) -> &TargetState {
        &self.dispatcher.stack[self.index]
    }

    /// The element's status flags.
    pub fn status(&self) -> Status {
        self.state().status
    }

    /// The element's semantic event.
    pub fn event(&self) -> Event {
        self.state().event
    }

    /// The element's (possibly shrunk) absolute rect.
    pub fn rect(&self) -> Rect {
        self.state().rect
    }

    /// The queued input text, for [`Event::Input`] handling.
    pub fn input(&self) -> &str {
        self.dispatcher.input()
    }

    /// The dispatcher's frame tick, for widgets that blink.
    pub fn ticks(&self) -> u64 {
        self.dispatcher.ticks()
    }

    /// Tighten the rect once the real content width is known.
    pub fn shrink_width(&mut self, width: f64) {
        let state = &mut self.dispatcher.stack[self.index];
        state.rect.x1 = state.rect.x0 + width;
        self.retract_if_outside();
    }

    /// Tighten the rect once the real content height is known.
    pub fn shrink_height(&mut self, height: f64) {
        let state = &mut self.dispatcher.stack[self.index];
        state.rect.y1 = state.rect.y0 + height;
        self.retract_if_outside();
    }

    /// Tighten the rect once the real content size is known.
    pub fn shrink(&mut self, width: f64, height: f64) {
        let state = &mut self.dispatcher.stack[self.index];
        state.rect.x1 = state.rect.x0 + width;
        state.rect.y1 = state.rect.y0 + height;
        self.retract_if_outside();
    }

    /// Retract hover (and a this-frame grab) if the pointer fell outside the
    /// tightened rect. A grab held from an earlier frame is kept; only a
    /// grant made under the stale rect is withdrawn.
    fn retract_if_outside(&mut self) {
        let pointer = self.dispatcher.frame.pointer;
        let state = &mut self.dispatcher.stack[self.index];
        if state.rect.contains(pointer) {
            return;
        }
        state.status.remove(Status::HOVERED);
        if state.status.contains(Status::GRABBED) && state.event == Event::Grab {
            state.status.remove(Status::GRABBED);
            state.event = Event::None;
            self.dispatcher.ids.grabbed.clear();
        }
    }

    /// Close the element explicitly. Equivalent to dropping the target.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for Target<'_> {
    fn drop(&mut self) {
        self.dispatcher.pop_target();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    fn hovering() -> Dispatcher {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.move_pointer(Point::new(5.0, 5.0));
        ui
    }

    #[test]
    fn press_then_release_is_a_click() {
        let mut ui = hovering();
        ui.press_pointer(0);
        {
            let button = ui.check(Request::Grab, RECT, "a");
            assert!(button.status().contains(Status::GRABBED));
            assert_eq!(button.event(), Event::Grab);
        }

        ui.reset();
        ui.release_pointer(0);
        {
            let button = ui.check(Request::Grab, RECT, "a");
            assert_eq!(button.event(), Event::Action);
            assert!(!button.status().contains(Status::GRABBED));
        }

        // The grab resolved; nothing holds the pointer anymore.
        ui.reset();
        assert!(!ui.wants_pointer());
    }

    #[test]
    fn first_sibling_in_paint_order_wins_hover() {
        let mut ui = hovering();
        {
            let a = ui.check(Request::Hover, RECT, "a");
            assert!(a.status().contains(Status::HOVERED));
        }
        {
            let b = ui.check(Request::Hover, RECT, "b");
            assert!(!b.status().contains(Status::HOVERED));
        }
    }

    #[test]
    fn escape_cancels_a_held_grab() {
        let mut ui = hovering();
        ui.press_pointer(0);
        ui.check(Request::Grab, RECT, "x").close();

        ui.reset();
        ui.set_command(Command::Escape);
        {
            let x = ui.check(Request::Grab, RECT, "x");
            assert_eq!(x.event(), Event::Cancel);
        }

        // The grab id was released: a later release produces no action.
        ui.reset();
        assert!(!ui.wants_pointer());
        ui.release_pointer(0);
        {
            let x = ui.check(Request::Grab, RECT, "x");
            assert_eq!(x.event(), Event::None);
        }
    }

    /// Drive a fresh dispatcher until `box` owns focus.
    fn focus_on_box(ui: &mut Dispatcher) {
        assert!(ui.try_focus("box"), "no competing focus request");
        ui.reset();
        let b = ui.check(Request::Input, RECT, "box");
        assert_eq!(b.event(), Event::FocusGained);
        b.close();
        ui.reset();
        assert!(ui.is_focused("box"));
    }

    #[test]
    fn backspace_edits_pending_text() {
        let mut ui = hovering();
        focus_on_box(&mut ui);

        ui.append_input("hi");
        ui.set_command(Command::Backspace);
        let b = ui.check(Request::Input, RECT, "box");
        assert_eq!(b.event(), Event::Input);
        assert_eq!(b.input(), "h");
    }

    #[test]
    fn backspace_with_no_pending_text_reaches_the_widget() {
        let mut ui = hovering();
        focus_on_box(&mut ui);

        ui.set_command(Command::Backspace);
        let b = ui.check(Request::Input, RECT, "box");
        assert_eq!(b.event(), Event::Backspace);
        assert_eq!(b.input(), "");
    }

    #[test]
    fn focus_persists_across_idle_frames() {
        let mut ui = hovering();
        focus_on_box(&mut ui);

        for _ in 0..3 {
            ui.reset();
            let b = ui.check(Request::Input, RECT, "box");
            assert!(b.status().contains(Status::FOCUSED));
            assert_eq!(b.event(), Event::None);
            b.close();
        }
        assert!(ui.wants_keyboard());
    }

    #[test]
    fn press_outside_drops_focus() {
        let mut ui = hovering();
        focus_on_box(&mut ui);

        ui.move_pointer(Point::new(50.0, 50.0));
        ui.press_pointer(0);
        {
            let b = ui.check(Request::Input, RECT, "box");
            assert_eq!(b.event(), Event::FocusLost);
            assert!(!b.status().contains(Status::FOCUSED));
        }
        ui.reset();
        assert!(!ui.wants_keyboard());
    }

    #[test]
    fn click_transfers_focus_between_elements() {
        let rect_b = Rect::new(20.0, 0.0, 30.0, 10.0);
        let mut ui = hovering();
        focus_on_box(&mut ui);

        // Click on the second box; "box" is pressed-outside and loses.
        ui.move_pointer(Point::new(25.0, 5.0));
        ui.press_pointer(0);
        {
            let a = ui.check(Request::Input, RECT, "box");
            assert_eq!(a.event(), Event::FocusLost);
        }
        {
            let b = ui.check(Request::Input, rect_b, "other");
            assert_eq!(b.event(), Event::Grab);
        }
        ui.reset();
        // The release confirms the promised transfer.
        ui.release_pointer(0);
        ui.check(Request::Input, RECT, "box").close();
        {
            let b = ui.check(Request::Input, rect_b, "other");
            assert_eq!(b.event(), Event::FocusGained);
        }
        ui.reset();
        assert!(ui.is_focused("other"));
    }

    #[test]
    fn nested_press_grants_the_grab_to_the_child() {
        let mut ui = hovering();
        ui.press_pointer(0);
        let mut panel = ui.check(Request::Grab, RECT, "p");
        assert_eq!(panel.event(), Event::Grab);
        {
            let child = panel.check(Request::Grab, RECT, "c");
            assert!(child.status().contains(Status::GRABBED));
            assert_eq!(child.event(), Event::Grab);
        }
        // The child's grab bubbled: the panel's own grant was withdrawn.
        assert!(!panel.status().contains(Status::GRABBED));
        assert_eq!(panel.event(), Event::None);
        drop(panel);

        // Across frames the grab belongs to the child path.
        ui.reset();
        ui.release_pointer(0);
        let mut panel = ui.check(Request::Grab, RECT, "p");
        assert_eq!(panel.event(), Event::None);
        let child = panel.check(Request::Grab, RECT, "c");
        assert_eq!(child.event(), Event::Action);
    }

    #[test]
    fn child_focus_loss_bubbles_to_parent() {
        let mut ui = hovering();
        // The hovered focus-level panel gains focus directly; the child then
        // takes over, suppressing the panel's own gain.
        let mut panel = ui.check(Request::Focus, RECT, "p");
        assert_eq!(panel.event(), Event::FocusGained);
        {
            let child = panel.check(Request::Input, RECT, "c");
            assert_eq!(child.event(), Event::FocusGained);
        }
        assert!(!panel.status().contains(Status::FOCUSED));
        assert_eq!(panel.event(), Event::None);
        drop(panel);
        ui.reset();
        assert!(ui.is_focused("p/c"));

        // A focused child closing over an uninvolved parent synthesizes
        // FOCUS_LOST on the parent.
        let mut panel = ui.check(Request::Hover, RECT, "p");
        {
            let child = panel.check(Request::Input, RECT, "c");
            assert!(child.status().contains(Status::FOCUSED));
        }
        assert_eq!(panel.event(), Event::FocusLost);
    }

    #[test]
    fn children_of_unhovered_parents_cannot_hover() {
        let mut ui = hovering();
        // A bookkeeping-only parent never reports HOVERED, so its children
        // are outside the hover chain.
        let mut group = ui.check(Request::None, RECT, "g");
        let child = group.check(Request::Hover, RECT, "");
        assert!(!child.status().contains(Status::HOVERED));
    }

    #[test]
    fn try_focus_contention_is_first_writer_wins() {
        let mut ui = Dispatcher::new();
        ui.reset();
        assert!(ui.try_focus("x"));
        assert!(!ui.try_focus("y"));
        // Losing request left no trace; "x" is still promised.
        ui.check(Request::Input, Rect::new(20.0, 0.0, 30.0, 10.0), "x").close();
        ui.reset();
        assert!(ui.is_focused("x"));
    }

    #[test]
    fn refocusing_the_focused_element_is_allowed() {
        let mut ui = hovering();
        focus_on_box(&mut ui);
        assert!(ui.try_focus("box"));
        assert!(ui.is_focused("box"));
    }

    #[test]
    fn shrink_retracts_a_stale_hover() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.move_pointer(Point::new(50.0, 5.0));
        let mut panel = ui.check(Request::Hover, Rect::new(0.0, 0.0, 100.0, 10.0), "p");
        assert!(panel.status().contains(Status::HOVERED));
        panel.shrink_width(40.0);
        assert!(!panel.status().contains(Status::HOVERED));
        assert_eq!(panel.rect(), Rect::new(0.0, 0.0, 40.0, 10.0));
    }

    #[test]
    fn shrink_withdraws_a_fresh_grab() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.move_pointer(Point::new(50.0, 5.0));
        ui.press_pointer(0);
        {
            let mut panel = ui.check(Request::Grab, Rect::new(0.0, 0.0, 100.0, 10.0), "p");
            assert_eq!(panel.event(), Event::Grab);
            panel.shrink(40.0, 10.0);
            assert_eq!(panel.event(), Event::None);
            assert!(!panel.status().contains(Status::GRABBED));
        }
        // The withdrawn grant never happened as far as ownership goes.
        ui.reset();
        assert!(!ui.wants_pointer());
    }

    #[test]
    fn shrink_keeps_an_established_grab() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.move_pointer(Point::new(50.0, 5.0));
        ui.press_pointer(0);
        ui.check(Request::Grab, Rect::new(0.0, 0.0, 100.0, 10.0), "p")
            .close();

        // Next frame the grab is held; shrinking under the pointer keeps it.
        ui.reset();
        let mut panel = ui.check(Request::Grab, Rect::new(0.0, 0.0, 100.0, 10.0), "p");
        assert!(panel.status().contains(Status::GRABBED));
        panel.shrink_width(40.0);
        assert!(panel.status().contains(Status::GRABBED));
        assert!(!panel.status().contains(Status::HOVERED));
    }

    #[test]
    fn space_command_coalesces_into_text() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.set_command(Command::Space);
        ui.append_input(" ");
        assert_eq!(ui.input(), " ");
        assert_eq!(ui.command(), Command::None);

        // The second space is folded in front of the appended text too.
        ui.set_command(Command::Space);
        ui.append_input("a");
        assert_eq!(ui.input(), "  a");
    }

    #[test]
    fn backspace_command_coalesces_against_text() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.append_input("xy");
        ui.set_command(Command::Backspace);
        ui.append_input("a");
        assert_eq!(ui.input(), "xa");
        assert_eq!(ui.command(), Command::None);

        // With nothing buffered the backspace stays for the widget and the
        // text is dropped.
        ui.reset();
        ui.set_command(Command::Backspace);
        ui.append_input("a");
        assert_eq!(ui.input(), "");
        assert_eq!(ui.command(), Command::Backspace);
    }

    #[test]
    fn release_elsewhere_does_not_leak_hover_state() {
        let mut ui = hovering();
        ui.press_pointer(0);
        ui.check(Request::Grab, RECT, "a").close();
        assert!(ui.wants_pointer());

        ui.reset();
        ui.move_pointer(Point::new(50.0, 50.0));
        ui.release_pointer(0);
        {
            let a = ui.check(Request::Grab, RECT, "a");
            assert_eq!(a.event(), Event::Cancel);
        }
        ui.reset();
        assert!(!ui.wants_pointer());
    }

    #[test]
    fn is_pointer_pressed_reports_held_buttons() {
        let mut ui = Dispatcher::new();
        ui.reset();
        ui.press_pointer(2);
        assert!(ui.is_pointer_pressed(2));
        assert!(!ui.is_pointer_pressed(0));
        ui.release_pointer(2);
        assert!(!ui.is_pointer_pressed(2));
    }

    #[test]
    fn ticks_advance_per_frame() {
        let mut ui = Dispatcher::new();
        let start = ui.ticks();
        ui.reset();
        ui.reset();
        assert_eq!(ui.ticks(), start + 2);
    }

    #[test]
    #[should_panic(expected = "elements above hover interest require an id")]
    fn anonymous_grab_element_is_a_protocol_violation() {
        let mut ui = Dispatcher::new();
        ui.reset();
        let _ = ui.check(Request::Grab, RECT, "");
    }
}
