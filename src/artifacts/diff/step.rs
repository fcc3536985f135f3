use derive_new::new;
use std::fmt;

/// The kind of a single step in an edit script.
///
/// A substitution is never reported as its own kind: under the cost model it is
/// exactly a removal paired with an addition, so it is emitted as `Removed`
/// followed by `Added`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepType {
    /// The A and B entries are equal.
    Equal,
    /// The B entry was added.
    Added,
    /// The A entry was removed.
    Removed,
}

impl StepType {
    pub fn symbol(&self) -> &'static str {
        match self {
            StepType::Equal => "=",
            StepType::Added => "+",
            StepType::Removed => "-",
        }
    }

    /// The step seen from the other side, i.e. when A and B trade places.
    pub fn swapped(self) -> StepType {
        match self {
            StepType::Equal => StepType::Equal,
            StepType::Added => StepType::Removed,
            StepType::Removed => StepType::Added,
        }
    }

    /// How many A entries a single step of this kind consumes.
    pub fn a_consumed(&self) -> usize {
        match self {
            StepType::Equal | StepType::Removed => 1,
            StepType::Added => 0,
        }
    }

    /// How many B entries a single step of this kind consumes.
    pub fn b_consumed(&self) -> usize {
        match self {
            StepType::Equal | StepType::Added => 1,
            StepType::Removed => 0,
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A run-length encoded group of steps of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, new)]
pub struct Step {
    pub step_type: StepType,
    pub count: usize,
}

impl Step {
    pub fn swapped(self) -> Step {
        Step::new(self.step_type.swapped(), self.count)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.step_type, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Step::new(StepType::Equal, 3), "=3")]
    #[case(Step::new(StepType::Added, 1), "+1")]
    #[case(Step::new(StepType::Removed, 12), "-12")]
    fn test_step_display(#[case] step: Step, #[case] expected: &str) {
        assert_eq!(step.to_string(), expected);
    }

    #[test]
    fn test_swapped_trades_added_and_removed() {
        assert_eq!(StepType::Added.swapped(), StepType::Removed);
        assert_eq!(StepType::Removed.swapped(), StepType::Added);
        assert_eq!(StepType::Equal.swapped(), StepType::Equal);
        assert_eq!(
            Step::new(StepType::Added, 4).swapped(),
            Step::new(StepType::Removed, 4)
        );
    }
}
