use crate::artifacts::comparable::Comparable;

/// Cost to remove an A entry.
pub const REMOVE_COST: usize = 1;

/// Cost to add a B entry.
pub const ADD_COST: usize = 1;

/// Cost to replace an A entry with a different B entry.
pub const SUBSTITUTION_COST: usize = 2;

/// Cost when the A and B entries are equal.
pub const EQUAL_COST: usize = 0;

/// The rectangle of a comparable a view reads from.
///
/// This is the borrow-free half of a `View`: it is what the divide and conquer
/// stack stores, so the stack can outlive any one comparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    a_offset: usize,
    a_length: usize,
    b_offset: usize,
    b_length: usize,
    reversed: bool,
}

impl Window {
    pub fn full(a_length: usize, b_length: usize) -> Self {
        Self {
            a_offset: 0,
            a_length,
            b_offset: 0,
            b_length,
            reversed: false,
        }
    }

    pub fn a_length(&self) -> usize {
        self.a_length
    }

    pub fn b_length(&self) -> usize {
        self.b_length
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Maps a window-local A index to the comparable's A index.
    pub(crate) fn a_adjust(&self, a_index: usize) -> usize {
        if self.reversed {
            self.a_offset + self.a_length - 1 - a_index
        } else {
            self.a_offset + a_index
        }
    }

    /// Maps a window-local B index to the comparable's B index.
    pub(crate) fn b_adjust(&self, b_index: usize) -> usize {
        if self.reversed {
            self.b_offset + self.b_length - 1 - b_index
        } else {
            self.b_offset + b_index
        }
    }

    /// Restricts this window to `[a_low, a_high) x [b_low, b_high)` in its own
    /// logical coordinates.
    ///
    /// `flip` is relative: the result is reversed when exactly one of this
    /// window and `flip` is reversed, so flipping twice reads forward again.
    pub fn sub(&self, a_low: usize, a_high: usize, b_low: usize, b_high: usize, flip: bool) -> Self {
        debug_assert!(a_low <= a_high && a_high <= self.a_length);
        debug_assert!(b_low <= b_high && b_high <= self.b_length);

        let (a_offset, b_offset) = if self.reversed {
            (
                self.a_offset + self.a_length - a_high,
                self.b_offset + self.b_length - b_high,
            )
        } else {
            (self.a_offset + a_low, self.b_offset + b_low)
        };

        Self {
            a_offset,
            a_length: a_high - a_low,
            b_offset,
            b_length: b_high - b_low,
            reversed: self.reversed ^ flip,
        }
    }
}

/// A zero-copy, possibly reversed, window over a comparable.
///
/// Views are cheap descriptors: they own nothing and are copied freely while
/// the aligners divide the problem up.
pub struct View<'c, C: ?Sized> {
    comp: &'c C,
    window: Window,
}

impl<C: ?Sized> Clone for View<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: ?Sized> Copy for View<'_, C> {}

impl<C: ?Sized> std::fmt::Debug for View<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View").field("window", &self.window).finish()
    }
}

impl<'c, C: Comparable + ?Sized> View<'c, C> {
    /// Creates a view over the whole comparable.
    pub fn new(comp: &'c C) -> Self {
        Self::from_window(comp, Window::full(comp.a_length(), comp.b_length()))
    }

    pub fn from_window(comp: &'c C, window: Window) -> Self {
        Self { comp, window }
    }

    pub fn comparable(&self) -> &'c C {
        self.comp
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn a_length(&self) -> usize {
        self.window.a_length
    }

    pub fn b_length(&self) -> usize {
        self.window.b_length
    }

    pub fn is_reversed(&self) -> bool {
        self.window.reversed
    }

    pub fn equals(&self, a_index: usize, b_index: usize) -> bool {
        self.comp
            .equals(self.window.a_adjust(a_index), self.window.b_adjust(b_index))
    }

    pub fn substitution_cost(&self, a_index: usize, b_index: usize) -> usize {
        if self.equals(a_index, b_index) {
            EQUAL_COST
        } else {
            SUBSTITUTION_COST
        }
    }

    pub fn sub(&self, a_low: usize, a_high: usize, b_low: usize, b_high: usize, flip: bool) -> Self {
        Self::from_window(self.comp, self.window.sub(a_low, a_high, b_low, b_high, flip))
    }

    /// Trims the equal runs off both ends of this view.
    ///
    /// Returns the trimmed view along with the length of the matching run
    /// before and after it, in this view's logical order. A reversed view scans
    /// its logical end first, since that end is the front of the underlying
    /// comparable. The two runs never overlap.
    pub fn reduce(&self) -> (Self, usize, usize) {
        let a_length = self.a_length();
        let b_length = self.b_length();
        let width = a_length.min(b_length);

        let (before, after) = if self.is_reversed() {
            let after = self.trailing_run(width);
            (self.leading_run(width - after), after)
        } else {
            let before = self.leading_run(width);
            (before, self.trailing_run(width - before))
        };

        let reduced = self.sub(before, a_length - after, before, b_length - after, false);
        (reduced, before, after)
    }

    fn leading_run(&self, limit: usize) -> usize {
        (0..limit).take_while(|&k| self.equals(k, k)).count()
    }

    fn trailing_run(&self, limit: usize) -> usize {
        let a_last = self.a_length();
        let b_last = self.b_length();
        (0..limit)
            .take_while(|&k| self.equals(a_last - 1 - k, b_last - 1 - k))
            .count()
    }
}
