//! Minimal edit scripts between ordered sequences.
//!
//! The engine aligns any two sequences exposing lengths and pairwise equality
//! through [`Comparable`], and reports the result as run-length groups of
//! equal, added and removed entries.
//!
//! ```
//! use seqdiff::{CharComparable, default_diff};
//!
//! let result = default_diff().diff(&CharComparable::new("kitten", "sitting"))?;
//! assert_eq!(result.to_string(), "-1 +1 =3 -1 +1 =1 +1");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::comparable::{
    ByteComparable, CharComparable, Comparable, CustomComparable, SliceComparable,
};
pub use artifacts::diff::{
    Algorithm, AlgorithmKind, Collector, DEFAULT_WAGNER_SIZE, DiffOptions, Step, StepType,
    UsageError, default_diff, hirschberg_diff, hybrid_diff, wagner_diff,
};
pub use areas::session::Session;
pub use artifacts::format::{merge, merge_with, plus_minus, plus_minus_with};
pub use artifacts::tokens::TokenMode;
pub use commands::diff::OutputFormat;

/// Diffs `comp` with the default strategy and returns the groups in order.
pub fn path<C: Comparable + ?Sized>(comp: &C) -> anyhow::Result<Vec<Step>> {
    default_diff().path(comp)
}

/// Diffs two slices of strings with the default strategy.
pub fn string_slice_path<S>(a: &[S], b: &[S]) -> anyhow::Result<Vec<Step>>
where
    S: AsRef<str> + PartialEq,
{
    path(&SliceComparable::new(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_slice_path() -> anyhow::Result<()> {
        let a = ["cat", "dog", "pig"];
        let b = ["cat", "horse", "dog"];

        assert_eq!(
            string_slice_path(&a, &b)?,
            vec![
                Step::new(StepType::Equal, 1),
                Step::new(StepType::Added, 1),
                Step::new(StepType::Equal, 1),
                Step::new(StepType::Removed, 1),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_path_with_custom_equality() -> anyhow::Result<()> {
        let a = ["Mike", "TED", "mark"];
        let b = ["ted", "MARK", "bob"];
        let comp = CustomComparable::new(&a, &b, |x: &&str, y: &&str| x.eq_ignore_ascii_case(y));

        assert_eq!(
            path(&comp)?,
            vec![
                Step::new(StepType::Removed, 1),
                Step::new(StepType::Equal, 2),
                Step::new(StepType::Added, 1),
            ]
        );
        Ok(())
    }
}
