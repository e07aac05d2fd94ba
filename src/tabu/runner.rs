//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Build the initial tour with an [`InitialTour`] provider
//! 2. While the stop policy allows:
//!    a. Generate the sampled 2-opt neighborhood of the current tour
//!    b. Select the best admissible neighbor under the tabu memory
//!    c. If one exists, move to it and record it (tour or move signature)
//!    d. Update the global best on strict improvement, otherwise count
//!       a stagnating iteration
//! 3. Return the best tour found
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::{MemoryPolicy, StopPolicy, TabuConfig};
use super::memory::TabuMemory;
use super::neighborhood::TwoOptNeighborhood;
use super::select::{select_with_move_memory, select_with_solution_memory};
use super::types::MoveSignature;
use crate::construct::InitialTour;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::tour::Tour;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best tour found.
    pub best: Tour,
    /// Cost of the best tour.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Consecutive non-improving iterations at the end of the run.
    pub iterations_without_improvement: usize,
    /// Iterations completed when the best tour was found (0 if the
    /// initial tour was never improved).
    pub best_iteration: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Whether the run was stopped by a cancellation token.
    pub cancelled: bool,
}

#[derive(Debug, Clone)]
enum Memory {
    Solutions(TabuMemory<Tour>),
    Moves {
        memory: TabuMemory<MoveSignature>,
        aspiration: bool,
    },
}

/// A single Tabu Search run, advanced one iteration at a time.
///
/// Use this directly to observe the search between iterations; otherwise
/// [`TabuRunner`] drives it to completion.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::NearestNeighbor;
/// use u_tsp::graph::Graph;
/// use u_tsp::tabu::{TabuConfig, TabuSearch};
///
/// let g = Graph::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 2.0)])
///     .unwrap();
/// let config = TabuConfig::default().with_threshold(20);
/// let mut search = TabuSearch::new(&g, &NearestNeighbor::new(0), &config).unwrap();
/// while search.step() {
///     assert!(search.current().is_permutation_of(5));
/// }
/// assert_eq!(search.iterations(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch<'g> {
    graph: &'g Graph,
    stop_policy: StopPolicy,
    threshold: usize,
    neighborhood: TwoOptNeighborhood,
    memory: Memory,
    current: Tour,
    current_cost: f64,
    best: Tour,
    best_cost: f64,
    iterations: usize,
    no_improve: usize,
    best_iteration: usize,
    cost_history: Vec<f64>,
}

impl<'g> TabuSearch<'g> {
    /// Validates `config`, builds the initial tour, and prepares an empty
    /// tabu memory.
    ///
    /// # Errors
    ///
    /// [`SearchError::Config`] if the configuration is invalid, or
    /// [`SearchError::InvalidInitialTour`] if `provider` does not return a
    /// permutation of the graph's nodes.
    pub fn new<P>(graph: &'g Graph, provider: &P, config: &TabuConfig) -> Result<Self, SearchError>
    where
        P: InitialTour + ?Sized,
    {
        config.validate()?;

        let initial = provider.initial_tour(graph);
        if !initial.is_permutation_of(graph.size()) {
            return Err(SearchError::InvalidInitialTour {
                nodes: graph.size(),
                len: initial.len(),
            });
        }
        let cost = initial.cost(graph);

        let memory = match config.memory {
            MemoryPolicy::Solutions => Memory::Solutions(TabuMemory::new(config.memory_capacity)),
            MemoryPolicy::Moves { aspiration } => Memory::Moves {
                memory: TabuMemory::new(config.memory_capacity),
                aspiration,
            },
        };

        Ok(Self {
            graph,
            stop_policy: config.stop_policy,
            threshold: config.threshold,
            neighborhood: TwoOptNeighborhood::new(
                config.discard_probability,
                config.seed,
                config.seeding,
            ),
            memory,
            best: initial.clone(),
            current: initial,
            current_cost: cost,
            best_cost: cost,
            iterations: 0,
            no_improve: 0,
            best_iteration: 0,
            cost_history: Vec::new(),
        })
    }

    /// Whether the stop policy's counter has reached the threshold.
    pub fn is_stopped(&self) -> bool {
        let counter = match self.stop_policy {
            StopPolicy::Iterations => self.iterations,
            StopPolicy::Stagnation => self.no_improve,
        };
        counter >= self.threshold
    }

    /// Runs one iteration. Returns `false` without doing anything once the
    /// search has stopped.
    pub fn step(&mut self) -> bool {
        if self.is_stopped() {
            return false;
        }

        let candidates = self.neighborhood.generate(&self.current, self.graph);
        let chosen = match &self.memory {
            Memory::Solutions(memory) => select_with_solution_memory(&candidates, memory),
            Memory::Moves { memory, aspiration } => {
                select_with_move_memory(&candidates, memory, aspiration.then_some(self.best_cost))
            }
        };

        match chosen {
            Some(c) => {
                match &mut self.memory {
                    Memory::Solutions(memory) => memory.record(c.tour.clone()),
                    Memory::Moves { memory, .. } => memory.record(c.signature),
                }
                self.current = c.tour.clone();
                self.current_cost = c.cost;
            }
            None => {
                tracing::trace!(
                    iteration = self.iterations,
                    neighborhood = candidates.len(),
                    "Tabu: no admissible neighbor, keeping current tour"
                );
            }
        }

        self.iterations += 1;
        if self.current_cost < self.best_cost {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
            self.best_iteration = self.iterations;
            self.no_improve = 0;
            tracing::debug!(
                iteration = self.iterations,
                cost = self.best_cost,
                "Tabu: new best tour"
            );
        } else {
            self.no_improve += 1;
        }
        self.cost_history.push(self.best_cost);

        tracing::trace!(
            iteration = self.iterations,
            current = self.current_cost,
            best = self.best_cost,
            stagnation = self.no_improve,
            "Tabu: iteration done"
        );
        true
    }

    /// Tour the search is currently at.
    pub fn current(&self) -> &Tour {
        &self.current
    }

    /// Cost of the current tour.
    pub fn current_cost(&self) -> f64 {
        self.current_cost
    }

    /// Best tour found so far.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    /// Cost of the best tour found so far.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Iterations executed so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Consecutive iterations since the best cost last improved.
    pub fn iterations_without_improvement(&self) -> usize {
        self.no_improve
    }

    /// Finishes the run and returns its result.
    pub fn into_result(self) -> TabuResult {
        TabuResult {
            best: self.best,
            best_cost: self.best_cost,
            iterations: self.iterations,
            iterations_without_improvement: self.no_improve,
            best_iteration: self.best_iteration,
            cost_history: self.cost_history,
            cancelled: false,
        }
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on `graph`, seeded by `provider`.
    ///
    /// # Errors
    ///
    /// See [`TabuSearch::new`]. Errors are raised before the first
    /// iteration.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::construct::IdentityTour;
    /// use u_tsp::graph::Graph;
    /// use u_tsp::tabu::{StopPolicy, TabuConfig, TabuRunner};
    ///
    /// let g = Graph::from_points(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0), (0.0, 1.0)]).unwrap();
    /// let config = TabuConfig::default()
    ///     .with_stop_policy(StopPolicy::Stagnation)
    ///     .with_threshold(10);
    /// let result = TabuRunner::run(&g, &IdentityTour, &config).unwrap();
    /// assert!((result.best_cost - 4.0).abs() < 1e-9);
    /// ```
    pub fn run<P>(graph: &Graph, provider: &P, config: &TabuConfig) -> Result<TabuResult, SearchError>
    where
        P: InitialTour + ?Sized,
    {
        Self::run_with_cancel(graph, provider, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token, checked
    /// between iterations.
    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip_all,
        fields(nodes = graph.size(), threshold = config.threshold)
    )]
    pub fn run_with_cancel<P>(
        graph: &Graph,
        provider: &P,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<TabuResult, SearchError>
    where
        P: InitialTour + ?Sized,
    {
        let mut search = TabuSearch::new(graph, provider, config)?;
        tracing::debug!(cost = search.best_cost(), "Tabu: initial tour");

        let mut cancelled = false;
        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }
            if !search.step() {
                break;
            }
        }

        let mut result = search.into_result();
        result.cancelled = cancelled;
        tracing::debug!(
            iterations = result.iterations,
            best = result.best_cost,
            cancelled,
            "Tabu: finished"
        );
        Ok(result)
    }
}
