use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::view::{ADD_COST, REMOVE_COST, View};
use tracing::debug;

/// The Needleman-Wunsch score vectors used to split a view.
///
/// Each vector holds one row of the cost matrix. The vectors only ever grow,
/// so a long-lived aligner stops allocating once it has seen its largest B.
#[derive(Debug, Default)]
pub(crate) struct Scores {
    /// The row being written by the current sweep.
    front: Vec<usize>,
    /// The last completed row of the current sweep.
    back: Vec<usize>,
    /// The stored row of the previous sweep.
    other: Vec<usize>,
}

impl Scores {
    /// Creates score vectors of the given length, which must be one greater
    /// than the largest B length expected. Zero allocates lazily.
    pub fn new(length: usize) -> Self {
        Self {
            front: vec![0; length],
            back: vec![0; length],
            other: vec![0; length],
        }
    }

    pub fn len(&self) -> usize {
        self.back.len()
    }

    fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    fn store(&mut self) {
        std::mem::swap(&mut self.back, &mut self.other);
    }

    fn ensure(&mut self, length: usize) {
        if self.back.len() < length {
            debug!(from = self.back.len(), to = length, "growing score vectors");
            self.front.resize(length, 0);
            self.back.resize(length, 0);
            self.other.resize(length, 0);
        }
    }

    /// Runs the Needleman-Wunsch sweep over the view, leaving the last row of
    /// the cost matrix in `back`.
    pub fn calculate<C: Comparable + ?Sized>(&mut self, view: &View<'_, C>) {
        let a_length = view.a_length();
        let b_length = view.b_length();
        self.ensure(b_length + 1);

        self.back[0] = 0;
        for j in 1..=b_length {
            self.back[j] = self.back[j - 1] + ADD_COST;
        }

        for i in 1..=a_length {
            let (front, back) = (&mut self.front, &self.back);
            front[0] = back[0] + REMOVE_COST;
            for j in 1..=b_length {
                front[j] = (back[j - 1] + view.substitution_cost(i - 1, j - 1))
                    .min(back[j] + REMOVE_COST)
                    .min(front[j - 1] + ADD_COST);
            }

            self.swap();
        }
    }

    /// Finds the B index where the forward costs in `other` plus the mirrored
    /// costs in `back` are smallest, preferring the lowest index on ties.
    fn find_pivot(&self, b_length: usize) -> usize {
        let mut index = 0;
        let mut minimum = self.other[0] + self.back[b_length];
        for j in 1..=b_length {
            let value = self.other[j] + self.back[b_length - j];
            if value < minimum {
                minimum = value;
                index = j;
            }
        }
        index
    }

    /// Finds where an optimal alignment of the view crosses the middle of A.
    pub fn split<C: Comparable + ?Sized>(&mut self, view: &View<'_, C>) -> (usize, usize) {
        let a_length = view.a_length();
        let b_length = view.b_length();

        let a_mid = a_length / 2;
        self.calculate(&view.sub(0, a_mid, 0, b_length, false));
        self.store();
        self.calculate(&view.sub(a_mid, a_length, 0, b_length, true));
        let b_mid = self.find_pivot(b_length);

        (a_mid, b_mid)
    }
}
