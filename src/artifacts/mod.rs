//! Diff data structures and algorithms
//!
//! - `comparable`: Sources that can be diffed (slices, characters, bytes)
//! - `diff`: Views, the step collector and the aligners
//! - `format`: Plus-minus and conflict marker renderings
//! - `tokens`: Cutting text into lines, words or characters

pub mod comparable;
pub mod diff;
pub mod format;
pub mod tokens;
