// Copyright 2025 the Thicket Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hierarchical identity path under construction during a frame traversal.

use alloc::string::String;

/// Separator between a parent path and a child's local id.
///
/// Local ids must not contain this character; it is what keeps
/// `"a/bc"` and `"a/b" + "c"` from colliding.
pub const ID_SEPARATOR: char = '/';

/// The path of the element currently being entered.
///
/// Backed by a single buffer that keeps its capacity across frames, so
/// steady-state traversal does not allocate. Each [`extend`](Self::extend)
/// is undone by a matching [`trim_by`](Self::trim_by) with the segment
/// length recorded on the scope stack.
#[derive(Clone, Debug, Default)]
pub(crate) struct IdPath {
    buf: String,
}

impl IdPath {
    /// Append a local id, prefixed by [`ID_SEPARATOR`] unless this is the
    /// frame's root element.
    pub(crate) fn extend(&mut self, id: &str, root: bool) {
        debug_assert!(
            !id.contains(ID_SEPARATOR),
            "local ids must not contain the path separator"
        );
        if !root {
            self.buf.push(ID_SEPARATOR);
        }
        self.buf.push_str(id);
    }

    /// Remove the last `len` bytes (a local id plus its separator).
    pub(crate) fn trim_by(&mut self, len: usize) {
        debug_assert!(self.buf.len() >= len, "path shorter than trim marker");
        let keep = self.buf.len() - len;
        self.buf.truncate(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_separator() {
        let mut path = IdPath::default();
        path.extend("menu", true);
        assert_eq!(path.as_str(), "menu");
    }

    #[test]
    fn nested_segments_are_separated() {
        let mut path = IdPath::default();
        path.extend("menu", true);
        path.extend("file", false);
        path.extend("save", false);
        assert_eq!(path.as_str(), "menu/file/save");
    }

    #[test]
    fn trim_undoes_extend() {
        let mut path = IdPath::default();
        path.extend("menu", true);
        path.extend("file", false);
        path.trim_by("file".len() + 1);
        assert_eq!(path.as_str(), "menu");
        path.extend("edit", false);
        assert_eq!(path.as_str(), "menu/edit");
    }

    #[test]
    fn empty_local_ids_still_nest() {
        // Hover-only elements may have no id; their segment is just the
        // separator.
        let mut path = IdPath::default();
        path.extend("panel", true);
        path.extend("", false);
        assert_eq!(path.as_str(), "panel/");
        path.trim_by(1);
        assert_eq!(path.as_str(), "panel");
    }

    #[test]
    fn sibling_and_ancestor_paths_do_not_collide() {
        let mut a = IdPath::default();
        a.extend("a", true);
        a.extend("bc", false);

        let mut b = IdPath::default();
        b.extend("ab", true);
        b.extend("c", false);

        assert_ne!(a.as_str(), b.as_str());
    }
}
