// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The repaint flag for the host render loop.

/// Accumulated "a redraw is due" flag with generation tracking.
///
/// The host marks this from each redraw source (engine transitions via
/// `PickEngine::take_repaint`, viewport refits reported by
/// `set_container_size`, selection revision changes) and drains it once
/// per frame. The generation counter increments on every mark, which lets
/// observers detect missed frames or cache against a specific generation.
///
/// This replaces implicit re-render-on-any-dependency schemes with one
/// explicit flag whose writers are visible at the call sites.
///
/// # Example
///
/// ```
/// use marquee_paint::Repaint;
///
/// let mut repaint = Repaint::new();
/// assert!(!repaint.take());
///
/// repaint.mark();
/// repaint.mark();
/// assert_eq!(repaint.generation(), 2);
///
/// // One redraw covers both marks.
/// assert!(repaint.take());
/// assert!(!repaint.take());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Repaint {
    needed: bool,
    generation: u64,
}

impl Repaint {
    /// Creates a clean flag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            needed: false,
            generation: 0,
        }
    }

    /// Requests a redraw.
    pub fn mark(&mut self) {
        self.needed = true;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns `true` if a redraw is pending, without clearing it.
    #[must_use]
    pub fn is_needed(&self) -> bool {
        self.needed
    }

    /// Drains the flag, returning whether a redraw was pending.
    #[must_use]
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.needed)
    }

    /// Returns the number of marks so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::Repaint;

    #[test]
    fn take_drains_but_generation_persists() {
        let mut repaint = Repaint::new();
        repaint.mark();
        assert!(repaint.is_needed());
        assert!(repaint.take());
        assert!(!repaint.is_needed());
        assert_eq!(repaint.generation(), 1);

        repaint.mark();
        assert_eq!(repaint.generation(), 2);
    }
}
