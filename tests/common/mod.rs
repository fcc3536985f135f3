#![allow(dead_code)]

pub mod command;
pub mod file;

use seqdiff::{Step, StepType};

/// Replays `steps` over `a` and checks that they consume every entry of both
/// sides and only ever pair up equal entries.
pub fn replays<T: PartialEq>(steps: &[Step], a: &[T], b: &[T]) -> bool {
    let (mut a_index, mut b_index) = (0, 0);

    for step in steps {
        if step.count == 0 {
            return false;
        }
        for _ in 0..step.count {
            match step.step_type {
                StepType::Equal => {
                    if a_index >= a.len() || b_index >= b.len() || a[a_index] != b[b_index] {
                        return false;
                    }
                    a_index += 1;
                    b_index += 1;
                }
                StepType::Added => {
                    if b_index >= b.len() {
                        return false;
                    }
                    b_index += 1;
                }
                StepType::Removed => {
                    if a_index >= a.len() {
                        return false;
                    }
                    a_index += 1;
                }
            }
        }
    }

    a_index == a.len() && b_index == b.len()
}

/// The edit cost of a script: every added or removed entry costs one.
pub fn cost(steps: &[Step]) -> usize {
    steps
        .iter()
        .filter(|step| step.step_type != StepType::Equal)
        .map(|step| step.count)
        .sum()
}

/// Textbook quadratic edit distance with unit indels and substitutions at 2.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let mut row = (0..=b.len()).collect::<Vec<_>>();
    for (i, a_value) in a.iter().enumerate() {
        let mut next = vec![i + 1; b.len() + 1];
        for (j, b_value) in b.iter().enumerate() {
            let substitution = if a_value == b_value { 0 } else { 2 };
            next[j + 1] = (row[j] + substitution)
                .min(row[j + 1] + 1)
                .min(next[j] + 1);
        }
        row = next;
    }
    row[b.len()]
}

pub fn swapped(steps: &[Step]) -> Vec<Step> {
    steps.iter().map(|step| step.swapped()).collect()
}
