use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::collector::{Collector, UsageError};
use crate::artifacts::diff::view::View;

/// Resolves a view directly when one side holds at most a single entry.
///
/// Returns `true` when the view was written into the collector, `false` when
/// it is large enough to need an aligner.
pub fn end_case<C: Comparable + ?Sized>(
    view: &View<'_, C>,
    col: &mut Collector,
) -> Result<bool, UsageError> {
    if view.a_length() <= 1 {
        a_edge(view, col)?;
        return Ok(true);
    }

    if view.b_length() <= 1 {
        b_edge(view, col)?;
        return Ok(true);
    }

    Ok(false)
}

// The inserts below run back to front, the collector reverses them.

fn a_edge<C: Comparable + ?Sized>(view: &View<'_, C>, col: &mut Collector) -> Result<(), UsageError> {
    let b_length = view.b_length();
    if view.a_length() == 0 {
        return col.insert_added(b_length);
    }

    match (0..b_length).find(|&j| view.equals(0, j)) {
        Some(split) => {
            col.insert_added(b_length - split - 1)?;
            col.insert_equal(1)?;
            col.insert_added(split)
        }
        None => {
            col.insert_added(b_length)?;
            col.insert_removed(1)
        }
    }
}

fn b_edge<C: Comparable + ?Sized>(view: &View<'_, C>, col: &mut Collector) -> Result<(), UsageError> {
    let a_length = view.a_length();
    if view.b_length() == 0 {
        return col.insert_removed(a_length);
    }

    match (0..a_length).find(|&i| view.equals(i, 0)) {
        Some(split) => {
            col.insert_removed(a_length - split - 1)?;
            col.insert_equal(1)?;
            col.insert_removed(split)
        }
        None => {
            col.insert_added(1)?;
            col.insert_removed(a_length)
        }
    }
}
