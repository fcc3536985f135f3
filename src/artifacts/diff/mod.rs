//! Minimal edit scripts between two sequences
//!
//! This module implements the diff engine:
//!
//! - `view`: Zero-copy, possibly reversed windows over a comparable
//! - `collector`: Run-length grouping of steps inserted back to front
//! - `end_case`: Direct resolution of views with a side of at most one entry
//! - `hirschberg`: Linear space divide and conquer alignment
//! - `wagner`: Full cost matrix alignment with a backtrace
//! - `algorithm`: Strategies composing the aligners behind one entry point
//!
//! Costs are fixed: removing or adding an entry costs 1, a substitution costs
//! 2 and an equal pair costs nothing. A substitution is therefore never
//! cheaper than a removal plus an addition, and both aligners report it as
//! that pair, so every strategy yields comparable scripts.

pub mod algorithm;
pub mod collector;
pub mod end_case;
pub mod hirschberg;
pub mod step;
pub mod view;
pub mod wagner;

pub use algorithm::{
    Aligner, Algorithm, AlgorithmKind, DEFAULT_WAGNER_SIZE, Diff, DiffOptions, default_diff,
    hirschberg_diff, hybrid_diff, wagner_diff,
};
pub use collector::{Collector, UsageError};
pub use step::{Step, StepType};
pub use view::{View, Window};
