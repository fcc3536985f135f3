//! Hirschberg's linear space alignment
//!
//! Each view is split where an optimal alignment crosses the middle of A, and
//! both halves are aligned independently. The halves are driven through an
//! explicit stack rather than recursion. Small sub-problems are resolved
//! directly, or handed to a hybrid aligner when its buffers already fit them.

mod scores;
mod stack;

use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::algorithm::{Aligner, Diff};
use crate::artifacts::diff::collector::Collector;
use crate::artifacts::diff::end_case::end_case;
use crate::artifacts::diff::view::View;
use scores::Scores;
use stack::Stack;
use tracing::trace;

#[derive(Debug)]
pub struct Hirschberg {
    scores: Scores,
    stack: Stack,
    hybrid: Option<Box<Aligner>>,
    use_reduce: bool,
}

impl Hirschberg {
    /// Creates a divide and conquer aligner.
    ///
    /// `hybrid` takes over any sub-problem it can align without growing its
    /// buffers. `length` is the initial score vector length, one more than the
    /// longest B expected. `use_reduce` trims equal runs at every step, which
    /// pays off when the inputs share long unchanged stretches.
    pub fn new(hybrid: Option<Aligner>, length: usize, use_reduce: bool) -> Self {
        Self {
            scores: Scores::new(length),
            stack: Stack::new(),
            hybrid: hybrid.map(Box::new),
            use_reduce,
        }
    }

    pub fn hybrid(&self) -> Option<&Aligner> {
        self.hybrid.as_deref()
    }

    pub fn use_reduce(&self) -> bool {
        self.use_reduce
    }

    pub fn set_use_reduce(&mut self, use_reduce: bool) {
        self.use_reduce = use_reduce;
    }
}

impl Diff for Hirschberg {
    fn no_resize_needed<C: Comparable + ?Sized>(&self, view: &View<'_, C>) -> bool {
        self.scores.len() > view.b_length()
    }

    fn diff<C: Comparable + ?Sized>(
        &mut self,
        view: &View<'_, C>,
        col: &mut Collector,
    ) -> anyhow::Result<()> {
        let comp = view.comparable();

        self.stack.clear();
        self.stack.push(Some(view.window()), 0);

        while let Some((window, remainder)) = self.stack.pop() {
            col.insert_equal(remainder)?;
            let Some(window) = window else {
                continue;
            };

            let mut current = View::from_window(comp, window);
            if self.use_reduce {
                let (reduced, before, after) = current.reduce();
                col.insert_equal(after)?;
                self.stack.push(None, before);
                current = reduced;
            }

            if end_case(&current, col)? {
                continue;
            }

            if let Some(hybrid) = self.hybrid.as_deref_mut()
                && hybrid.no_resize_needed(&current)
            {
                trace!(
                    a_length = current.a_length(),
                    b_length = current.b_length(),
                    "handing view to hybrid aligner"
                );
                hybrid.diff(&current, col)?;
                continue;
            }

            let a_length = current.a_length();
            let b_length = current.b_length();
            let (a_mid, b_mid) = self.scores.split(&current);
            trace!(a_length, b_length, a_mid, b_mid, "split view");

            // The right half is pushed last so it is collected first.
            self.stack
                .push(Some(current.sub(0, a_mid, 0, b_mid, false).window()), 0);
            self.stack.push(
                Some(current.sub(a_mid, a_length, b_mid, b_length, false).window()),
                0,
            );
        }

        Ok(())
    }
}
