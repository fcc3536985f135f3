use crate::artifacts::comparable::Comparable;
use crate::artifacts::diff::collector::Collector;
use crate::artifacts::diff::end_case::end_case;
use crate::artifacts::diff::hirschberg::Hirschberg;
use crate::artifacts::diff::step::Step;
use crate::artifacts::diff::view::View;
use crate::artifacts::diff::wagner::Wagner;
use derive_new::new;
use tracing::debug;

/// Number of cost matrix cells the default hybrid preallocates for its full
/// aligner. Larger views are split until their halves fit.
pub const DEFAULT_WAGNER_SIZE: usize = 500;

/// The capability shared by every aligner.
pub trait Diff {
    /// Reports whether the aligner's scratch buffers already cover `view`.
    fn no_resize_needed<C: Comparable + ?Sized>(&self, view: &View<'_, C>) -> bool;

    /// Aligns `view`, inserting its steps into `col` back to front.
    fn diff<C: Comparable + ?Sized>(
        &mut self,
        view: &View<'_, C>,
        col: &mut Collector,
    ) -> anyhow::Result<()>;
}

/// The closed set of aligners a strategy can be built from.
#[derive(Debug)]
pub enum Aligner {
    Hirschberg(Hirschberg),
    Wagner(Wagner),
}

impl Diff for Aligner {
    fn no_resize_needed<C: Comparable + ?Sized>(&self, view: &View<'_, C>) -> bool {
        match self {
            Aligner::Hirschberg(hirschberg) => hirschberg.no_resize_needed(view),
            Aligner::Wagner(wagner) => wagner.no_resize_needed(view),
        }
    }

    fn diff<C: Comparable + ?Sized>(
        &mut self,
        view: &View<'_, C>,
        col: &mut Collector,
    ) -> anyhow::Result<()> {
        match self {
            Aligner::Hirschberg(hirschberg) => hirschberg.diff(view, col),
            Aligner::Wagner(wagner) => wagner.diff(view, col),
        }
    }
}

impl From<Hirschberg> for Aligner {
    fn from(hirschberg: Hirschberg) -> Self {
        Aligner::Hirschberg(hirschberg)
    }
}

impl From<Wagner> for Aligner {
    fn from(wagner: Wagner) -> Self {
        Aligner::Wagner(wagner)
    }
}

/// A configured diff strategy and the scratch state it reuses between runs.
///
/// One `Algorithm` must not run two diffs at once; build one per thread.
#[derive(Debug, new)]
pub struct Algorithm {
    aligner: Aligner,
}

impl Algorithm {
    pub fn aligner(&self) -> &Aligner {
        &self.aligner
    }

    /// Computes the edit script turning A into B.
    ///
    /// The common prefix and suffix are trimmed once up front, and views with
    /// a side of at most one entry never reach the aligner.
    pub fn diff<C: Comparable + ?Sized>(&mut self, comp: &C) -> anyhow::Result<Collector> {
        let mut col = Collector::new();

        let (view, before, after) = View::new(comp).reduce();
        debug!(
            a_length = view.a_length(),
            b_length = view.b_length(),
            before,
            after,
            "diffing reduced view"
        );

        col.insert_equal(after)?;
        if !end_case(&view, &mut col)? {
            self.aligner.diff(&view, &mut col)?;
        }
        col.insert_equal(before)?;

        col.finish()?;
        Ok(col)
    }

    /// Computes the edit script and returns its groups in forward order.
    pub fn path<C: Comparable + ?Sized>(&mut self, comp: &C) -> anyhow::Result<Vec<Step>> {
        Ok(self.diff(comp)?.steps()?)
    }
}

/// A divide and conquer strategy with score vectors of the given length.
pub fn hirschberg_diff(length: usize, use_reduce: bool) -> Algorithm {
    Algorithm::new(Hirschberg::new(None, length, use_reduce).into())
}

/// A full matrix strategy with `size` preallocated cost cells.
pub fn wagner_diff(size: usize) -> Algorithm {
    Algorithm::new(Wagner::new(size).into())
}

/// A divide and conquer strategy that hands sub-problems fitting in `size`
/// cost cells to a full matrix aligner.
pub fn hybrid_diff(length: usize, use_reduce: bool, size: usize) -> Algorithm {
    let wagner = Aligner::from(Wagner::new(size));
    Algorithm::new(Hirschberg::new(Some(wagner), length, use_reduce).into())
}

pub fn default_diff() -> Algorithm {
    hybrid_diff(0, true, DEFAULT_WAGNER_SIZE)
}

/// Which aligner a strategy is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AlgorithmKind {
    #[default]
    Hybrid,
    Hirschberg,
    Wagner,
}

/// Tunables for building an `Algorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub algorithm: AlgorithmKind,
    /// Trim equal runs at every divide and conquer step.
    pub use_reduce: bool,
    /// Initial score vector length, grown on demand.
    pub score_length: usize,
    /// Preallocated cost matrix cells for the full aligner.
    pub matrix_size: usize,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self::new(AlgorithmKind::Hybrid, true, 0, DEFAULT_WAGNER_SIZE)
    }
}

impl From<DiffOptions> for Algorithm {
    fn from(options: DiffOptions) -> Self {
        match options.algorithm {
            AlgorithmKind::Hybrid => {
                hybrid_diff(options.score_length, options.use_reduce, options.matrix_size)
            }
            AlgorithmKind::Hirschberg => hirschberg_diff(options.score_length, options.use_reduce),
            AlgorithmKind::Wagner => wagner_diff(options.matrix_size),
        }
    }
}
