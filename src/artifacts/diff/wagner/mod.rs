//! Wagner-Fischer full matrix alignment
//!
//! Fills the complete edit cost matrix for a view and walks it backwards from
//! the bottom right corner. Quadratic in space, so it is best kept for small
//! sub-problems handed over by the divide and conquer aligner.

mod walker;

use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::algorithm::Diff;
use crate::artifacts::diff::collector::Collector;
use crate::artifacts::diff::view::{ADD_COST, REMOVE_COST, View};
use tracing::debug;
use walker::Walker;

#[derive(Debug, Default)]
pub struct Wagner {
    /// Flat matrix of `a_length * b_length` cells, column `j` at `j * a_length`.
    costs: Vec<usize>,
}

impl Wagner {
    /// Creates a full matrix aligner with `size` preallocated cost cells.
    pub fn new(size: usize) -> Self {
        Self {
            costs: vec![0; size],
        }
    }

    pub fn capacity(&self) -> usize {
        self.costs.len()
    }

    fn set_costs<C: Comparable + ?Sized>(&mut self, view: &View<'_, C>) {
        let a_length = view.a_length();
        let b_length = view.b_length();
        let size = a_length * b_length;
        if self.costs.len() < size {
            debug!(from = self.costs.len(), to = size, "growing cost matrix");
            self.costs.resize(size, 0);
        }

        for j in 1..=b_length {
            for i in 1..=a_length {
                let remove = cost_at(&self.costs, a_length, i - 1, j) + REMOVE_COST;
                let add = cost_at(&self.costs, a_length, i, j - 1) + ADD_COST;
                let substitute = cost_at(&self.costs, a_length, i - 1, j - 1)
                    + view.substitution_cost(i - 1, j - 1);

                self.costs[(i - 1) + (j - 1) * a_length] = remove.min(add).min(substitute);
            }
        }
    }
}

/// The cost of aligning the first `i` A entries with the first `j` B entries.
///
/// The empty prefix row and column are implied rather than stored.
fn cost_at(costs: &[usize], a_length: usize, i: usize, j: usize) -> usize {
    match (i, j) {
        (0, j) => j * ADD_COST,
        (i, 0) => i * REMOVE_COST,
        (i, j) => costs[(i - 1) + (j - 1) * a_length],
    }
}

impl Diff for Wagner {
    fn no_resize_needed<C: Comparable + ?Sized>(&self, view: &View<'_, C>) -> bool {
        view.a_length() * view.b_length() <= self.costs.len()
    }

    fn diff<C: Comparable + ?Sized>(
        &mut self,
        view: &View<'_, C>,
        col: &mut Collector,
    ) -> anyhow::Result<()> {
        self.set_costs(view);
        Walker::new(&self.costs, view).walk(col)?;
        Ok(())
    }
}
