//! Builder utilities for configuring goeBURST runs.
//!
//! Exposes the execution strategy and degenerate-pair policy selection surface
//! and the validation applied before constructing [`Goeburst`] instances.

use crate::{Result, error::GoeburstError, goeburst::Goeburst};

/// Indicates how the distance sweep and the edge sort are executed.
///
/// `Auto` resolves deterministically: it uses the Rayon pool when the
/// `parallel` feature is compiled in and the serial path otherwise. Both paths
/// produce identical trees.
///
/// # Examples
/// ```
/// use goeburst_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// assert!(!ExecutionStrategy::Serial.runs_parallel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select an appropriate backend automatically.
    Auto,
    /// Run every stage on the calling thread.
    Serial,
    /// Spread the distance sweep and edge sort over the Rayon pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Returns `true` when this strategy uses the Rayon pool in the current
    /// build.
    #[must_use]
    pub const fn runs_parallel(self) -> bool {
        match self {
            Self::Serial => false,
            Self::Auto | Self::Parallel => cfg!(feature = "parallel"),
        }
    }
}

/// Treatment of profile pairs that share no defined locus.
///
/// # Examples
/// ```
/// use goeburst_core::DegeneratePolicy;
///
/// assert_eq!(DegeneratePolicy::default(), DegeneratePolicy::ZeroDistance);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Treat the pair as distance `0`, log it, and report it in the result.
    #[default]
    ZeroDistance,
    /// Abort the run with [`GoeburstError::DegeneratePair`].
    Reject,
}

/// Configures and constructs [`Goeburst`] instances.
///
/// # Examples
/// ```
/// use goeburst_core::{DegeneratePolicy, ExecutionStrategy, GoeburstBuilder};
///
/// let goeburst = GoeburstBuilder::new()
///     .with_execution_strategy(ExecutionStrategy::Serial)
///     .with_degenerate_policy(DegeneratePolicy::Reject)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(goeburst.execution_strategy(), ExecutionStrategy::Serial);
/// assert_eq!(goeburst.degenerate_policy(), DegeneratePolicy::Reject);
/// ```
#[derive(Debug, Clone)]
pub struct GoeburstBuilder {
    execution_strategy: ExecutionStrategy,
    degenerate_policy: DegeneratePolicy,
}

impl Default for GoeburstBuilder {
    fn default() -> Self {
        Self {
            execution_strategy: ExecutionStrategy::Auto,
            degenerate_policy: DegeneratePolicy::ZeroDistance,
        }
    }
}

impl GoeburstBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use goeburst_core::{DegeneratePolicy, ExecutionStrategy, GoeburstBuilder};
    ///
    /// let builder = GoeburstBuilder::new();
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// assert_eq!(builder.degenerate_policy(), DegeneratePolicy::ZeroDistance);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the execution strategy to use when running the pipeline.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Sets how pairs without a shared defined locus are handled.
    #[must_use]
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> Self {
        self.degenerate_policy = policy;
        self
    }

    /// Returns the currently configured degenerate-pair policy.
    #[must_use]
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }

    /// Validates the configuration and constructs a [`Goeburst`] instance.
    ///
    /// # Errors
    /// Returns [`GoeburstError::BackendUnavailable`] when
    /// [`ExecutionStrategy::Parallel`] is requested from a build without the
    /// `parallel` feature.
    ///
    /// # Examples
    /// ```
    /// use goeburst_core::GoeburstBuilder;
    ///
    /// let goeburst = GoeburstBuilder::new().build().expect("configuration is valid");
    /// # let _ = goeburst;
    /// ```
    pub fn build(self) -> Result<Goeburst> {
        if self.execution_strategy == ExecutionStrategy::Parallel
            && !self.execution_strategy.runs_parallel()
        {
            return Err(GoeburstError::BackendUnavailable {
                requested: self.execution_strategy,
            });
        }

        Ok(Goeburst::new(self.execution_strategy, self.degenerate_policy))
    }
}
