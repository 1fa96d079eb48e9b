// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Selection: the committed selection set.
//!
//! [`Selection`] is a small, generic container for the set of currently
//! selected keys. It is owned by the caller (typically the rendering layer)
//! and passed into the interaction engine whenever a gesture needs to test or
//! modify it; the engine never holds onto it between commits. The container
//! knows nothing about geometry or ordering; callers decide which keys a
//! click or marquee gesture maps to.
//!
//! The operations mirror the selection gestures directly:
//! - [`Selection::select_only`]: plain click, replace with a singleton.
//! - [`Selection::toggle`]: shift-click, add or remove one key.
//! - [`Selection::clear`]: click on empty space, deselect all.
//! - [`Selection::replace_with`]: marquee commit, replace with a batch.
//! - [`Selection::extend_with`]: shift-marquee commit, union with a batch.
//!
//! A monotonically increasing [`Selection::revision`] counter bumps only when
//! the contents actually change, giving observers a cheap "did anything
//! happen?" signal for redraw scheduling.
//!
//! ## Minimal example
//!
//! ```rust
//! use marquee_selection::Selection;
//!
//! // Using u32 as a stand-in for an application-specific id.
//! let mut selection = Selection::<u32>::new();
//!
//! selection.select_only(7);
//! assert!(selection.contains(&7));
//!
//! // Shift-click toggles membership.
//! selection.toggle(7);
//! assert!(selection.is_empty());
//!
//! // Marquee commit replaces the whole set; shift-marquee unions instead.
//! selection.replace_with([1, 2]);
//! selection.extend_with([2, 3]);
//! assert_eq!(selection.items(), &[1, 2, 3]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A caller-owned set of selected keys with change tracking.
///
/// Keys are stored in a `Vec<K>` with uniqueness enforced by equality, so
/// `K` needs neither `Ord` nor `Hash`; a plain index handle works fine. The
/// stored order is first-selected-first and is stable across mutations, but
/// callers should not attach semantics to it.
#[derive(Clone, Debug, Default)]
pub struct Selection<K> {
    items: Vec<K>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in their internal order.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// The revision bumps exactly when a mutation changes the selected set.
    /// No-op calls (such as clearing an empty selection or re-selecting the
    /// same singleton) leave it unchanged, so it can gate redraws without
    /// comparing contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if !self.items.is_empty() {
            self.items.clear();
            self.bump();
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<K> Selection<K>
where
    K: PartialEq,
{
    /// Returns `true` if `key` is currently selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.items.iter().any(|k| k == key)
    }

    /// Replaces the selection with the single `key`.
    ///
    /// This is the mapping for a plain (unmodified) click on a box.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items[0] == key {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump();
    }

    /// Toggles `key`: removes it when selected, appends it otherwise.
    ///
    /// This is the mapping for a shift-click on a box.
    pub fn toggle(&mut self, key: K) {
        if let Some(idx) = self.items.iter().position(|k| k == &key) {
            self.items.remove(idx);
        } else {
            self.items.push(key);
        }
        self.bump();
    }

    /// Replaces the selection with a batch of keys, dropping duplicates.
    ///
    /// This is the mapping for a marquee commit without shift. De-duplication
    /// scans the accumulated output, which is fine at the scale of one
    /// detection result; batches produced by a scene query are already unique.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut incoming: Vec<K> = Vec::new();
        for key in keys {
            if !incoming.iter().any(|existing| existing == &key) {
                incoming.push(key);
            }
        }
        if incoming == self.items {
            return;
        }
        self.items = incoming;
        self.bump();
    }

    /// Unions a batch of keys into the selection.
    ///
    /// Keys already present are skipped; the existing keys keep their order.
    /// This is the mapping for a marquee commit with shift held.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = K>,
    {
        let mut added = false;
        for key in keys {
            if !self.contains(&key) {
                self.items.push(key);
                added = true;
            }
        }
        if added {
            self.bump();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn empty_selection_basics() {
        let sel = Selection::<u32>::new();
        assert!(sel.is_empty());
        assert_eq!(sel.len(), 0);
        assert_eq!(sel.revision(), 0);
    }

    #[test]
    fn select_only_replaces_and_skips_noop() {
        let mut sel = Selection::new();
        sel.select_only(1);
        assert_eq!(sel.items(), &[1]);
        assert_eq!(sel.revision(), 1);

        // Re-selecting the same singleton is a no-op.
        sel.select_only(1);
        assert_eq!(sel.revision(), 1);

        sel.select_only(2);
        assert_eq!(sel.items(), &[2]);
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        sel.toggle(5);
        assert!(sel.contains(&5));
        sel.toggle(5);
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn clear_bumps_only_when_nonempty() {
        let mut sel = Selection::<u32>::new();
        sel.clear();
        assert_eq!(sel.revision(), 0);

        sel.select_only(1);
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.revision(), 2);
    }

    #[test]
    fn replace_with_dedups_and_detects_noops() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2, 2, 3]);
        assert_eq!(sel.items(), &[1, 2, 3]);
        let rev = sel.revision();

        // Identical batch: no change, no bump.
        sel.replace_with([1, 2, 3]);
        assert_eq!(sel.revision(), rev);

        // Empty batch clears.
        sel.replace_with([]);
        assert!(sel.is_empty());
    }

    #[test]
    fn extend_with_unions_without_duplicates() {
        let mut sel = Selection::new();
        sel.replace_with([1, 2]);
        let rev = sel.revision();

        sel.extend_with([2, 3, 3, 4]);
        assert_eq!(sel.items(), &[1, 2, 3, 4]);
        assert_eq!(sel.revision(), rev + 1);

        // All keys already present: no bump.
        sel.extend_with([1, 4]);
        assert_eq!(sel.revision(), rev + 1);
    }
}
