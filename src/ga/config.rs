//! Evolution configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control the generational
//! loop in [`super::TimetableGa`].

use crate::TimetableError;

/// Configuration for the timetable evolution.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.elite_count, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(80)
///     .with_generations(500)
///     .with_elite_count(8)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionConfig {
    /// Number of timetables kept after each generation.
    pub population_size: usize,

    /// Number of generations to run. There is no other stopping rule;
    /// cap this to bound the run time.
    pub generations: usize,

    /// Top-ranked timetables carried unchanged into the next generation.
    pub elite_count: usize,

    /// Crossover children produced per generation.
    ///
    /// Each child comes from two distinct non-elite parents. A child that
    /// double-books someone is replaced by a freshly generated timetable.
    pub crossover_pairs: usize,

    /// Individuals replaced by their mutation variants per generation.
    ///
    /// Clamped to the size of the non-elite pool.
    pub mutation_samples: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from the operating system.
    pub seed: Option<u64>,

    /// Whether to score and breed on the rayon thread pool.
    ///
    /// Results for a given seed are identical either way.
    pub parallel: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            elite_count: 10,
            crossover_pairs: 10,
            mutation_samples: 20,
            seed: None,
            parallel: true,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the number of crossover children per generation.
    pub fn with_crossover_pairs(mut self, n: usize) -> Self {
        self.crossover_pairs = n;
        self
    }

    /// Sets the number of individuals mutated per generation.
    pub fn with_mutation_samples(mut self, n: usize) -> Self {
        self.mutation_samples = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel scoring and breeding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of non-elite slots in the population.
    pub fn survivor_count(&self) -> usize {
        self.population_size.saturating_sub(self.elite_count)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), TimetableError> {
        if self.population_size == 0 {
            return Err(TimetableError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(TimetableError::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if self.elite_count >= self.population_size {
            return Err(TimetableError::InvalidConfig(format!(
                "elite_count ({}) must be below population_size ({})",
                self.elite_count, self.population_size
            )));
        }
        if self.crossover_pairs > 0 && self.survivor_count() < 2 {
            return Err(TimetableError::InvalidConfig(
                "crossover needs at least two non-elite individuals".into(),
            ));
        }
        Ok(())
    }
}
