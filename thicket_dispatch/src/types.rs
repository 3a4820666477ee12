// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vocabulary types shared by the dispatcher: interest levels, status flags,
//! semantic events, and keyboard commands.

use kurbo::Rect;

/// The maximum event category an element declares interest in when checked.
///
/// Levels are ordered by ascending interest: an element checked at
/// [`Request::Grab`] will never be asked about focus or text input, while an
/// element checked at [`Request::Input`] participates in every stage of the
/// state machine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Request {
    /// No event handling at all. The element is pushed onto the scope stack
    /// purely for clipping and path bookkeeping.
    None,
    /// Hover only: the element reports whether the pointer is over it.
    Hover,
    /// Hover plus pointer grab: press, release, and cancel handling.
    Grab,
    /// Everything above plus keyboard focus and action commands.
    Focus,
    /// Everything above plus text input decoding.
    Input,
}

bitflags::bitflags! {
    /// Status flags reported for a checked element.
    ///
    /// Flags describe the element's standing this frame; the single-shot
    /// transitions (gained, lost, fired) are reported as an [`Event`] instead.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// The pointer is inside the element's clipped, unobstructed rect.
        const HOVERED  = 0b0000_0001;
        /// The element owns the current pointer drag.
        const GRABBED  = 0b0000_0010;
        /// The element owns keyboard interaction.
        const FOCUSED  = 0b0000_0100;
        /// The element is focused and receiving decoded text input.
        const INPUTING = 0b0000_1000;
    }
}

/// Semantic event delivered to exactly one element per transition.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Event {
    /// No event this frame.
    #[default]
    None,
    /// The primary pointer button was pressed over the element; it now owns
    /// the drag.
    Grab,
    /// The interaction completed: a release over the grab holder, or an
    /// action command on the focused element.
    Action,
    /// The interaction was abandoned: escape, a stray button, or activity
    /// outside the grab holder's bounds.
    Cancel,
    /// The element just acquired keyboard focus.
    FocusGained,
    /// The element just lost keyboard focus.
    FocusLost,
    /// Decoded text is available through the dispatcher's input buffer.
    Input,
    /// Space was pressed with no pending text.
    Space,
    /// Backspace was pressed with no pending text; the widget should edit its
    /// own backing string.
    Backspace,
    /// Enter was pressed with no pending text.
    EndLine,
}

/// The frame's single semantic keyboard command, pre-translated by the
/// platform layer from raw key events.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Command {
    /// No command this frame.
    #[default]
    None,
    /// Generic activation (for example Return on a button).
    Action,
    /// Enter inside a text element.
    Enter,
    /// Space bar.
    Space,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
}

/// Per-element record kept on the scope stack while the element is open.
#[derive(Clone, Debug)]
pub struct TargetState {
    /// Length of this element's local id, used to trim the shared path on
    /// close.
    pub(crate) id_len: usize,
    /// The element's absolute rect, already clipped against its parent.
    pub rect: Rect,
    /// The element's status flags.
    pub status: Status,
    /// The element's semantic event.
    pub event: Event,
}
