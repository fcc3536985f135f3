use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::collector::{Collector, UsageError};
use crate::artifacts::diff::view::{ADD_COST, REMOVE_COST, View};
use crate::artifacts::diff::wagner::cost_at;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Remove,
    Add,
    Diagonal,
}

/// Backtraces a filled cost matrix from the bottom right corner.
pub(super) struct Walker<'w, 'c, C: ?Sized> {
    costs: &'w [usize],
    view: &'w View<'c, C>,
    i: usize,
    j: usize,
}

impl<'w, 'c, C: Comparable + ?Sized> Walker<'w, 'c, C> {
    pub fn new(costs: &'w [usize], view: &'w View<'c, C>) -> Self {
        Self {
            costs,
            view,
            i: view.a_length(),
            j: view.b_length(),
        }
    }

    fn cost(&self, i: usize, j: usize) -> usize {
        cost_at(self.costs, self.view.a_length(), i, j)
    }

    /// Picks the cheapest neighbour, preferring remove, then add, then the
    /// diagonal on ties.
    fn next_move(&self) -> Move {
        let remove = self.cost(self.i - 1, self.j);
        let add = self.cost(self.i, self.j - 1);
        let diagonal = self.cost(self.i - 1, self.j - 1);
        let minimum = remove.min(add).min(diagonal);

        if remove == minimum {
            Move::Remove
        } else if add == minimum {
            Move::Add
        } else {
            Move::Diagonal
        }
    }

    fn step(&mut self, col: &mut Collector) -> Result<(), UsageError> {
        let current = self.cost(self.i, self.j);
        let chosen = self.next_move();

        let (previous, step_cost) = match chosen {
            Move::Remove => (self.cost(self.i - 1, self.j), REMOVE_COST),
            Move::Add => (self.cost(self.i, self.j - 1), ADD_COST),
            Move::Diagonal => (
                self.cost(self.i - 1, self.j - 1),
                self.view.substitution_cost(self.i - 1, self.j - 1),
            ),
        };
        assert_eq!(
            previous + step_cost,
            current,
            "no minimal move from ({}, {}): {chosen:?} does not lead to cost {current}",
            self.i,
            self.j
        );

        match chosen {
            Move::Remove => {
                self.i -= 1;
                col.insert_removed(1)
            }
            Move::Add => {
                self.j -= 1;
                col.insert_added(1)
            }
            Move::Diagonal => {
                self.i -= 1;
                self.j -= 1;
                if self.view.equals(self.i, self.j) {
                    col.insert_equal(1)
                } else {
                    col.insert_substituted(1)
                }
            }
        }
    }

    /// Inserts the alignment into `col`, back to front.
    pub fn walk(mut self, col: &mut Collector) -> Result<(), UsageError> {
        while self.i > 0 && self.j > 0 {
            self.step(col)?;
        }

        col.insert_removed(self.i)?;
        col.insert_added(self.j)
    }
}
