//! Pipeline orchestration for goeBURST spanning trees.
//!
//! Provides the [`Goeburst`] runtime entry point. A run computes every
//! pairwise distance, derives the level histograms, ranks the complete edge
//! set and finally lets Kruskal pick the tree. All intermediate state is owned
//! by the run and dropped when it returns.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    Result,
    builder::{DegeneratePolicy, ExecutionStrategy},
    distance::DistanceMatrix,
    error::{GoeburstError, ProfileError},
    histogram::LevelHistograms,
    mst::kruskal,
    profile::ProfileSource,
    ranking::{EdgeRanker, candidate_edges},
    result::GoeburstResult,
};

/// Entry point for running the goeBURST pipeline.
///
/// # Examples
/// ```
/// use goeburst_core::{GoeburstBuilder, ProfileTable};
///
/// let table = ProfileTable::from_codes("demo", [[1, 1], [1, 2], [3, 2]])?;
/// let goeburst = GoeburstBuilder::new().build()?;
/// let result = goeburst.run(&table)?;
/// let tree: Vec<(usize, usize)> = result
///     .tree()
///     .edges()
///     .iter()
///     .map(|edge| (edge.source(), edge.target()))
///     .collect();
/// assert_eq!(tree, [(1, 2), (0, 1)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Goeburst {
    execution_strategy: ExecutionStrategy,
    degenerate_policy: DegeneratePolicy,
}

impl Goeburst {
    pub(crate) fn new(
        execution_strategy: ExecutionStrategy,
        degenerate_policy: DegeneratePolicy,
    ) -> Self {
        Self {
            execution_strategy,
            degenerate_policy,
        }
    }

    /// Returns the execution strategy that will be used when running.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the policy applied to pairs without a shared defined locus.
    #[must_use]
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    /// Builds the goeBURST spanning tree of the profiles in `source`.
    ///
    /// # Errors
    /// Returns [`GoeburstError::EmptySource`] when the source holds no
    /// profiles, [`GoeburstError::DegeneratePair`] when two profiles share no
    /// defined locus under [`DegeneratePolicy::Reject`], and
    /// [`GoeburstError::Profile`] when the source fails to yield a profile.
    #[instrument(
        name = "core.run",
        err,
        skip(self, source),
        fields(
            data_source = %source.name(),
            profiles = source.len(),
            loci = source.loci(),
            strategy = ?self.execution_strategy
        ),
    )]
    pub fn run<S>(&self, source: &S) -> Result<GoeburstResult>
    where
        S: ProfileSource + Sync + ?Sized,
    {
        if source.is_empty() {
            warn!(
                data_source = source.name(),
                "profile source is empty, returning error"
            );
            return Err(GoeburstError::EmptySource {
                data_source: Arc::from(source.name()),
            });
        }

        let matrix = self.wrap_profile_error(
            source,
            DistanceMatrix::compute(source, self.execution_strategy),
        )?;
        self.check_degenerate_pairs(source, &matrix)?;

        let histograms = LevelHistograms::from_matrix(&matrix);
        let mut edges = candidate_edges(&matrix);
        EdgeRanker::new(&histograms).rank(&mut edges, self.execution_strategy);
        let tree = kruskal(source.len(), &edges)?;

        info!(
            edges = tree.edges().len(),
            total_distance = tree.total_distance(),
            "goeBURST tree completed"
        );
        Ok(GoeburstResult::new(
            tree,
            histograms,
            matrix.degenerate_pairs().to_vec(),
        ))
    }

    fn check_degenerate_pairs<S>(&self, source: &S, matrix: &DistanceMatrix) -> Result<()>
    where
        S: ProfileSource + ?Sized,
    {
        let Some(&(left, right)) = matrix.degenerate_pairs().first() else {
            return Ok(());
        };

        match self.degenerate_policy {
            DegeneratePolicy::Reject => Err(GoeburstError::DegeneratePair {
                data_source: Arc::from(source.name()),
                left,
                right,
            }),
            DegeneratePolicy::ZeroDistance => {
                warn!(
                    data_source = source.name(),
                    pairs = matrix.degenerate_pairs().len(),
                    first_left = left,
                    first_right = right,
                    "profiles without a shared defined locus treated as distance 0"
                );
                Ok(())
            }
        }
    }

    fn wrap_profile_error<S, T>(
        &self,
        source: &S,
        result: core::result::Result<T, ProfileError>,
    ) -> Result<T>
    where
        S: ProfileSource + ?Sized,
    {
        result.map_err(|error| GoeburstError::Profile {
            data_source: Arc::from(source.name()),
            error,
        })
    }
}
