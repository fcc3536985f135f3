use crate::artifacts::comparable::SliceComparable;
use crate::artifacts::diff::algorithm::default_diff;
use crate::artifacts::diff::collector::{Collector, UsageError};
use crate::artifacts::diff::step::StepType;

pub const START_CHANGE: &str = "<<<<<<<<";
pub const MIDDLE_CHANGE: &str = "========";
pub const END_CHANGE: &str = ">>>>>>>>";

/// Diffs two line slices and wraps every changed block in conflict markers.
///
/// Removed lines sit between the start and middle markers, added lines
/// between the middle and end markers.
pub fn merge<S>(a: &[S], b: &[S]) -> anyhow::Result<Vec<String>>
where
    S: AsRef<str> + PartialEq,
{
    let results = default_diff().diff(&SliceComparable::new(a, b))?;
    Ok(merge_with(&results, a, b)?)
}

/// Wraps the changed blocks of an already computed diff in conflict markers.
pub fn merge_with<S: AsRef<str>>(
    results: &Collector,
    a: &[S],
    b: &[S],
) -> Result<Vec<String>, UsageError> {
    let mut lines = Vec::with_capacity(results.total()? + results.count()? * 2);
    let (mut a_index, mut b_index) = (0, 0);
    let mut previous = StepType::Equal;

    results.read(|step_type, count| {
        let markers: &[&str] = match (previous, step_type) {
            (StepType::Added, StepType::Equal) => &[END_CHANGE],
            (StepType::Removed, StepType::Equal) => &[MIDDLE_CHANGE, END_CHANGE],
            (StepType::Equal, StepType::Added) => &[START_CHANGE, MIDDLE_CHANGE],
            (StepType::Removed, StepType::Added) => &[MIDDLE_CHANGE],
            (StepType::Equal, StepType::Removed) => &[START_CHANGE],
            (StepType::Added, StepType::Removed) => &[END_CHANGE, START_CHANGE],
            _ => &[],
        };
        lines.extend(markers.iter().map(|marker| marker.to_string()));

        for _ in 0..count {
            let line = match step_type {
                StepType::Equal => {
                    a_index += 1;
                    b_index += 1;
                    &a[a_index - 1]
                }
                StepType::Added => {
                    b_index += 1;
                    &b[b_index - 1]
                }
                StepType::Removed => {
                    a_index += 1;
                    &a[a_index - 1]
                }
            };
            lines.push(line.as_ref().to_string());
        }

        previous = step_type;
    })?;

    match previous {
        StepType::Added => lines.push(END_CHANGE.to_string()),
        StepType::Removed => {
            lines.push(MIDDLE_CHANGE.to_string());
            lines.push(END_CHANGE.to_string());
        }
        StepType::Equal => {}
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::format::fixtures::{
        document_a, document_b, shopping_after, shopping_before,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_merge_lines() -> anyhow::Result<()> {
        let result = merge(&document_a(), &document_b())?;

        assert_eq!(
            result,
            vec![
                "<<<<<<<<",
                "========",
                "This is an important",
                "notice! It should",
                "therefore be located at",
                "the beginning of this",
                "document!",
                "",
                ">>>>>>>>",
                "This part of the",
                "document has stayed the",
                "same from version to",
                "version.  It shouldn't",
                "be shown if it doesn't",
                "change.  Otherwise, that",
                "would not be helping to",
                "<<<<<<<<",
                "compress the size of the",
                "changes.",
                "",
                "This paragraph contains",
                "text that is outdated.",
                "It will be deleted in the",
                "near future.",
                "========",
                "compress anything.",
                ">>>>>>>>",
                "",
                "It is important to spell",
                "<<<<<<<<",
                "check this dokument. On",
                "========",
                "check this document. On",
                ">>>>>>>>",
                "the other hand, a",
                "misspelled word isn't",
                "the end of the world.",
                "Nothing in the rest of",
                "this paragraph needs to",
                "be changed. Things can",
                "be added after it.",
                "<<<<<<<<",
                "========",
                "",
                "This paragraph contains",
                "important new additions",
                "to this document.",
                ">>>>>>>>",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_merge_shopping_list() -> anyhow::Result<()> {
        let result = merge(&shopping_before(), &shopping_after())?;

        assert_eq!(
            result,
            vec![
                "Shopping List:",
                "<<<<<<<<",
                "Eggs",
                "Bacon",
                "========",
                "Yogurt",
                ">>>>>>>>",
                "Apples",
                "Oranges",
                "<<<<<<<<",
                "========",
                "Bananas",
                ">>>>>>>>",
                "Milk",
                "<<<<<<<<",
                "========",
                "Tea",
                ">>>>>>>>",
            ]
        );
        Ok(())
    }

    #[rstest]
    #[case(
        vec!["sameA", "removedA", "sameB", "sameC", "removedC", "sameD"],
        vec!["sameA", "sameB", "AddedB", "sameC", "AddedC", "sameD"],
        vec![
            "sameA", "<<<<<<<<", "removedA", "========", ">>>>>>>>", "sameB", "<<<<<<<<",
            "========", "AddedB", ">>>>>>>>", "sameC", "<<<<<<<<", "removedC", "========",
            "AddedC", ">>>>>>>>", "sameD",
        ]
    )]
    #[case(
        vec!["sameA", "removedA"],
        vec!["sameA"],
        vec!["sameA", "<<<<<<<<", "removedA", "========", ">>>>>>>>"]
    )]
    #[case(
        vec!["sameA"],
        vec!["sameA", "addedA"],
        vec!["sameA", "<<<<<<<<", "========", "addedA", ">>>>>>>>"]
    )]
    #[case(
        vec!["sameA", "removedA"],
        vec!["sameA", "AddedA"],
        vec!["sameA", "<<<<<<<<", "removedA", "========", "AddedA", ">>>>>>>>"]
    )]
    fn test_merge_blocks(
        #[case] a: Vec<&str>,
        #[case] b: Vec<&str>,
        #[case] expected: Vec<&str>,
    ) -> anyhow::Result<()> {
        assert_eq!(merge(&a, &b)?, expected);
        Ok(())
    }

    #[test]
    fn test_merge_with_added_before_removed() -> Result<(), UsageError> {
        // Collected back to front, this reads "=1 +1 -1".
        let mut results = Collector::new();
        results.force_push(StepType::Removed, 1);
        results.force_push(StepType::Added, 1);
        results.force_push(StepType::Equal, 1);
        results.finish()?;

        let result = merge_with(&results, &["sameA", "removedA"], &["sameA", "AddedA"])?;

        assert_eq!(
            result,
            vec![
                "sameA", "<<<<<<<<", "========", "AddedA", ">>>>>>>>", "<<<<<<<<", "removedA",
                "========", ">>>>>>>>",
            ]
        );
        Ok(())
    }
}
