use crate::artifacts::comparable::SliceComparable;
use crate::artifacts::diff::algorithm::default_diff;
use crate::artifacts::diff::collector::{Collector, UsageError};
use crate::artifacts::diff::step::StepType;

/// Diffs two line slices and labels every line.
///
/// Lines only in `b` are prefixed with `+`, lines only in `a` with `-` and
/// shared lines with a space.
pub fn plus_minus<S>(a: &[S], b: &[S]) -> anyhow::Result<Vec<String>>
where
    S: AsRef<str> + PartialEq,
{
    let results = default_diff().diff(&SliceComparable::new(a, b))?;
    Ok(plus_minus_with(&results, a, b)?)
}

/// Labels the lines of `a` and `b` following an already computed diff.
pub fn plus_minus_with<S: AsRef<str>>(
    results: &Collector,
    a: &[S],
    b: &[S],
) -> Result<Vec<String>, UsageError> {
    let mut lines = Vec::with_capacity(results.total()?);
    let (mut a_index, mut b_index) = (0, 0);

    results.read(|step_type, count| {
        for _ in 0..count {
            let line = match step_type {
                StepType::Equal => {
                    let line = format!(" {}", a[a_index].as_ref());
                    a_index += 1;
                    b_index += 1;
                    line
                }
                StepType::Added => {
                    let line = format!("+{}", b[b_index].as_ref());
                    b_index += 1;
                    line
                }
                StepType::Removed => {
                    let line = format!("-{}", a[a_index].as_ref());
                    a_index += 1;
                    line
                }
            };
            lines.push(line);
        }
    })?;

    Ok(lines)
}
