//! Generational evolution loop.
//!
//! # Algorithm
//!
//! 1. Build `population_size` timetables with the greedy initializer.
//! 2. Each generation:
//!    - rank by fitness and keep the top `elite_count` unchanged;
//!    - breed `crossover_pairs` children from distinct non-elite parents,
//!      replacing any double-booking child with a fresh timetable;
//!    - replace `mutation_samples` individuals of the non-elite pool
//!      (including the children) with all their mutation variants;
//!    - rank the pool and keep the best `population_size - elite_count`.
//! 3. After the last generation, return the fittest timetable.
//!
//! # Parallelism
//!
//! Scoring, crossover, and mutation run on rayon when
//! [`EvolutionConfig::parallel`] is set. Every unit of work receives its
//! own generator seeded from the master generator beforehand, so a seeded
//! run gives the same result with or without threads. Ranking and
//! truncation happen on the calling thread between generations.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::config::EvolutionConfig;
use super::operators::{crossover, mutate};
use super::TimetableProblem;
use crate::constraints::is_hard_valid;
use crate::fitness::fully_covered_groups;
use crate::models::Timetable;
use crate::TimetableError;

/// Timetables paired with their fitness scores.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Timetable>,
    scores: Vec<f64>,
}

impl Population {
    /// Timetables in population order.
    pub fn individuals(&self) -> &[Timetable] {
        &self.individuals
    }

    /// Scores parallel to [`Population::individuals`].
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Index of the highest score; the first one on ties.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            if best.map_or(true, |b| score > self.scores[b]) {
                best = Some(i);
            }
        }
        best
    }

    /// Highest score (`-inf` when empty).
    pub fn best_fitness(&self) -> f64 {
        self.best_index()
            .map(|i| self.scores[i])
            .unwrap_or(f64::NEG_INFINITY)
    }

    /// Mean score (0 when empty).
    pub fn mean_fitness(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    fn into_ranked(self) -> Vec<(Timetable, f64)> {
        let mut ranked: Vec<(Timetable, f64)> =
            self.individuals.into_iter().zip(self.scores).collect();
        // stable: equal scores keep population order
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    fn from_ranked(ranked: Vec<(Timetable, f64)>) -> Self {
        let (individuals, scores) = ranked.into_iter().unzip();
        Self { individuals, scores }
    }
}

/// Best fitness observed in one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Highest fitness in the population after the generation.
    pub best_fitness: f64,
    /// Mean fitness in the population after the generation.
    pub mean_fitness: f64,
}

/// Outcome of a run.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// Fittest timetable of the final population.
    pub best: Timetable,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// One report per generation.
    pub history: Vec<GenerationReport>,
}

/// Genetic search over timetables.
///
/// # Example
/// ```
/// use u_timetable::ga::{EvolutionConfig, TimetableGa, TimetableProblem};
/// use u_timetable::models::{Group, Lecturer, Room, SessionKind, Subject};
/// use u_timetable::constraints::is_hard_valid;
///
/// let problem = TimetableProblem::new(
///     vec![Group::new("G1", 20).with_subject("Math")],
///     vec![Subject::new("Math").with_lecture_hours(10)],
///     vec![Lecturer::new("L1", "Smith").with_qualification("Math", SessionKind::Lecture)],
///     vec![Room::new("R1", 30)],
/// )
/// .unwrap();
/// let config = EvolutionConfig::default()
///     .with_population_size(12)
///     .with_elite_count(2)
///     .with_crossover_pairs(3)
///     .with_mutation_samples(4)
///     .with_generations(5)
///     .with_seed(42);
///
/// let ga = TimetableGa::new(problem, config).unwrap();
/// let result = ga.run();
/// assert!(is_hard_valid(&result.best));
/// assert_eq!(result.history.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableGa {
    problem: TimetableProblem,
    config: EvolutionConfig,
}

impl TimetableGa {
    /// Creates a search after validating the configuration.
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] from [`EvolutionConfig::validate`].
    pub fn new(problem: TimetableProblem, config: EvolutionConfig) -> Result<Self, TimetableError> {
        config.validate()?;
        Ok(Self { problem, config })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &TimetableProblem {
        &self.problem
    }

    /// The run configuration.
    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Runs all generations with a generator built from the configured seed.
    pub fn run(&self) -> EvolutionResult {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs all generations drawing from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> EvolutionResult {
        info!(
            "Evolving {} timetables for {} generations ({} groups, {} lecturers, {} rooms)",
            self.config.population_size,
            self.config.generations,
            self.problem.groups().len(),
            self.problem.lecturers().len(),
            self.problem.rooms().len()
        );

        let mut population = self.initial_population(rng);
        let mut history = Vec::with_capacity(self.config.generations);

        for generation in 1..=self.config.generations {
            population = self.step(population, rng);
            let report = GenerationReport {
                generation,
                best_fitness: population.best_fitness(),
                mean_fitness: population.mean_fitness(),
            };
            info!("Generation {}: best fitness = {}", generation, report.best_fitness);
            history.push(report);
        }

        let best_index = population.best_index().unwrap_or(0);
        let best_fitness = population.scores[best_index];
        let best = population.individuals.swap_remove(best_index);
        info!(
            "Best timetable: {} sessions, fitness {}, {}/{} groups fully covered",
            best.len(),
            best_fitness,
            fully_covered_groups(&best, self.problem.groups(), self.problem.subjects()).len(),
            self.problem.groups().len()
        );

        EvolutionResult {
            best,
            best_fitness,
            history,
        }
    }

    /// Builds and scores `population_size` fresh timetables.
    pub fn initial_population<R: Rng + ?Sized>(&self, rng: &mut R) -> Population {
        let seeds: Vec<u64> = (0..self.config.population_size).map(|_| rng.random()).collect();
        let individuals = self.run_jobs(seeds, |seed| {
            self.problem
                .generate_valid_schedule(&mut StdRng::seed_from_u64(seed))
        });
        self.evaluate(individuals)
    }

    /// Scores timetables.
    pub fn evaluate(&self, individuals: Vec<Timetable>) -> Population {
        let scores: Vec<f64> = if self.config.parallel {
            individuals.par_iter().map(|t| self.problem.fitness(t)).collect()
        } else {
            individuals.iter().map(|t| self.problem.fitness(t)).collect()
        };
        Population { individuals, scores }
    }

    /// Advances the population by one generation.
    ///
    /// The returned population has the same size as the input and its
    /// best fitness is never lower while `elite_count > 0`.
    pub fn step<R: Rng + ?Sized>(&self, population: Population, rng: &mut R) -> Population {
        let target = population.len();
        let mut ranked = population.into_ranked();
        let elite_count = self.config.elite_count.min(ranked.len());
        let non_elites = ranked.split_off(elite_count);
        let elites = ranked;

        let mut pool: Vec<Timetable> = non_elites.into_iter().map(|(t, _)| t).collect();

        let children = self.breed(&pool, rng);
        pool.extend(children);

        let variants = self.mutate_sample(&mut pool, rng);
        pool.extend(variants);

        let mut survivors = self.evaluate(pool).into_ranked();
        survivors.truncate(target.saturating_sub(elite_count));

        let mut next = elites;
        next.extend(survivors);
        Population::from_ranked(next)
    }

    fn breed<R: Rng + ?Sized>(&self, parents: &[Timetable], rng: &mut R) -> Vec<Timetable> {
        if parents.len() < 2 {
            return Vec::new();
        }
        let jobs: Vec<(usize, usize, u64)> = (0..self.config.crossover_pairs)
            .map(|_| {
                let pair = index::sample(rng, parents.len(), 2);
                (pair.index(0), pair.index(1), rng.random())
            })
            .collect();

        let children = self.run_jobs(jobs, |(i, j, seed)| {
            let mut child_rng = StdRng::seed_from_u64(seed);
            let child = crossover(&parents[i], &parents[j], &mut child_rng);
            if is_hard_valid(&child) {
                (child, false)
            } else {
                (self.problem.generate_valid_schedule(&mut child_rng), true)
            }
        });

        let replaced = children.iter().filter(|(_, fresh)| *fresh).count();
        debug!(
            "crossover: {} children, {} replaced by fresh timetables",
            children.len(),
            replaced
        );
        children.into_iter().map(|(child, _)| child).collect()
    }

    /// Removes the sampled individuals from `pool` and returns all their variants.
    fn mutate_sample<R: Rng + ?Sized>(&self, pool: &mut Vec<Timetable>, rng: &mut R) -> Vec<Timetable> {
        let amount = self.config.mutation_samples.min(pool.len());
        let mut picked = index::sample(rng, pool.len(), amount).into_vec();
        picked.sort_unstable_by(|a, b| b.cmp(a));

        let jobs: Vec<(Timetable, u64)> = picked
            .into_iter()
            .map(|i| (pool.remove(i), rng.random()))
            .collect();

        let variants: Vec<Timetable> = self
            .run_jobs(jobs, |(timetable, seed)| {
                mutate(&self.problem, &timetable, &mut StdRng::seed_from_u64(seed))
            })
            .into_iter()
            .flatten()
            .collect();
        debug!("mutation: {} individuals produced {} variants", amount, variants.len());
        variants
    }

    fn run_jobs<T, U, F>(&self, jobs: Vec<T>, f: F) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        if self.config.parallel {
            jobs.into_par_iter().map(f).collect()
        } else {
            jobs.into_iter().map(f).collect()
        }
    }
}
