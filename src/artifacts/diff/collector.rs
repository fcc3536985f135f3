//! Run-length collection of diff steps
//!
//! The aligners discover an edit script from its end towards its start, so the
//! collector is fed in reverse output order. It coalesces consecutive steps of
//! the same kind into groups and, once finished, reads the groups back in
//! forward order.
//!
//! Added and removed entries between two equal runs form one change block and
//! accumulate side by side. When the block is closed the added group is
//! stored before the removed group, so a block always reads back as removals
//! followed by additions.

use crate::artifacts::diff::step::{Step, StepType};
use std::fmt;

/// Misuse of the collector's insert-finish-read lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageError {
    InsertAfterFinish,
    FinishAfterFinish,
    CountBeforeFinish,
    TotalBeforeFinish,
    ReadBeforeFinish,
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            UsageError::InsertAfterFinish => {
                "may not insert into a collector which has already been finished"
            }
            UsageError::FinishAfterFinish => {
                "may not finish a collector which has already been finished"
            }
            UsageError::CountBeforeFinish => {
                "may not request count until the collector has been finished"
            }
            UsageError::TotalBeforeFinish => {
                "may not request total until the collector has been finished"
            }
            UsageError::ReadBeforeFinish => {
                "may not request read until the collector has been finished"
            }
        };
        write!(f, "{message}")
    }
}

impl std::error::Error for UsageError {}

/// Collects, groups and reverses the steps produced by an aligner.
///
/// A finished collector is the result of a diff: `count`, `total` and `read`
/// are only available after `finish`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Collector {
    /// Groups in insertion order, which is the reverse of the output order.
    groups: Vec<Step>,
    /// Sum of the counts of all stored groups.
    total: usize,
    added_run: usize,
    removed_run: usize,
    equal_run: usize,
    finished: bool,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, step_type: StepType, count: usize) {
        self.groups.push(Step::new(step_type, count));
        self.total += count;
    }

    fn push_added(&mut self) {
        if self.added_run > 0 {
            self.push(StepType::Added, self.added_run);
            self.added_run = 0;
        }
    }

    fn push_removed(&mut self) {
        if self.removed_run > 0 {
            self.push(StepType::Removed, self.removed_run);
            self.removed_run = 0;
        }
    }

    fn push_equal(&mut self) {
        if self.equal_run > 0 {
            self.push(StepType::Equal, self.equal_run);
            self.equal_run = 0;
        }
    }

    fn ensure_not_finished(&self, error: UsageError) -> Result<(), UsageError> {
        if self.finished { Err(error) } else { Ok(()) }
    }

    fn ensure_finished(&self, error: UsageError) -> Result<(), UsageError> {
        if self.finished { Ok(()) } else { Err(error) }
    }

    /// Inserts `count` added entries, preceding everything inserted so far.
    pub fn insert_added(&mut self, count: usize) -> Result<(), UsageError> {
        self.ensure_not_finished(UsageError::InsertAfterFinish)?;
        if count > 0 {
            self.push_equal();
            self.added_run += count;
        }
        Ok(())
    }

    /// Inserts `count` removed entries, preceding everything inserted so far.
    pub fn insert_removed(&mut self, count: usize) -> Result<(), UsageError> {
        self.ensure_not_finished(UsageError::InsertAfterFinish)?;
        if count > 0 {
            self.push_equal();
            self.removed_run += count;
        }
        Ok(())
    }

    /// Inserts `count` substitutions, recorded as removed plus added entries.
    pub fn insert_substituted(&mut self, count: usize) -> Result<(), UsageError> {
        self.ensure_not_finished(UsageError::InsertAfterFinish)?;
        if count > 0 {
            self.push_equal();
            self.removed_run += count;
            self.added_run += count;
        }
        Ok(())
    }

    /// Inserts `count` equal entries, preceding everything inserted so far.
    pub fn insert_equal(&mut self, count: usize) -> Result<(), UsageError> {
        self.ensure_not_finished(UsageError::InsertAfterFinish)?;
        if count > 0 {
            self.push_added();
            self.push_removed();
            self.equal_run += count;
        }
        Ok(())
    }

    /// Flushes any pending runs and closes the collector for inserts.
    pub fn finish(&mut self) -> Result<(), UsageError> {
        self.ensure_not_finished(UsageError::FinishAfterFinish)?;
        self.finished = true;
        self.push_added();
        self.push_removed();
        self.push_equal();
        Ok(())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The number of groups collected.
    pub fn count(&self) -> Result<usize, UsageError> {
        self.ensure_finished(UsageError::CountBeforeFinish)?;
        Ok(self.groups.len())
    }

    /// The sum of the counts of all groups.
    pub fn total(&self) -> Result<usize, UsageError> {
        self.ensure_finished(UsageError::TotalBeforeFinish)?;
        Ok(self.total)
    }

    /// Calls `handle` with every group in forward order.
    pub fn read<F>(&self, mut handle: F) -> Result<(), UsageError>
    where
        F: FnMut(StepType, usize),
    {
        self.ensure_finished(UsageError::ReadBeforeFinish)?;
        for step in self.groups.iter().rev() {
            handle(step.step_type, step.count);
        }
        Ok(())
    }

    /// The groups in forward order.
    pub fn steps(&self) -> Result<Vec<Step>, UsageError> {
        let mut steps = Vec::with_capacity(self.groups.len());
        self.read(|step_type, count| steps.push(Step::new(step_type, count)))?;
        Ok(steps)
    }

    /// Stores a group exactly as given, bypassing run coalescing.
    #[cfg(test)]
    pub(crate) fn force_push(&mut self, step_type: StepType, count: usize) {
        self.push(step_type, count);
    }
}

impl fmt::Display for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.finished {
            return write!(f, "not finished");
        }

        let parts = self
            .groups
            .iter()
            .rev()
            .map(|step| step.to_string())
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join(" "))
    }
}
