use log::{debug, trace};
use serde::Serialize;

use crate::config::GridConfig;
use crate::constants::{
    DEFAULT_MAX_STEPS, MAX_GRID_AXIS, OPTIMIZER_RESULT_LIMIT, OPTIMIZER_STEP_CAP,
};
use crate::pattern::{Classifier, PatternQuery};
use crate::reach::{ReachabilityOutcome, solve};
use crate::search::{PatternMatch, search_with};

/// A point of the children x beds grid and the stride it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Configuration {
    pub children: u64,
    pub beds: u64,
    pub stride: u64,
}

impl Configuration {
    pub fn new(base_step: u64, children: u64, beds: u64) -> Self {
        Self {
            children,
            beds,
            // saturates only for grids that Config::validate rejects
            stride: base_step.saturating_add(children).saturating_add(beds),
        }
    }

    /// Every cell of the grid, children-major; cells with stride 0 are skipped.
    /// Each axis is clamped to [`MAX_GRID_AXIS`].
    pub fn enumerate(grid: &GridConfig) -> Vec<Configuration> {
        let max_children = grid.max_children.min(MAX_GRID_AXIS);
        let max_beds = grid.max_beds.min(MAX_GRID_AXIS);
        (0..=max_children)
            .flat_map(|c| (0..=max_beds).map(move |b| Configuration::new(grid.base_step, c, b)))
            .filter(|cfg| cfg.stride != 0)
            .collect()
    }
}

/// Why a configuration made the shortlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CandidateOutcome {
    /// The target lies exactly on this stride.
    TargetReached { outcome: ReachabilityOutcome },
    /// No target given; the nearest beautiful day for this stride.
    NearestPattern {
        nearest: PatternMatch,
        match_count: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationCandidate {
    pub configuration: Configuration,
    pub outcome: CandidateOutcome,
    /// Steps needed; lower is better.
    pub score: u64,
}

#[derive(Debug, Clone)]
pub struct OptimizeRequest {
    pub start: u64,
    pub target: Option<u64>,
    pub max_steps: u64,
    pub query: PatternQuery,
    pub custom_pattern: Option<String>,
    pub grid: GridConfig,
}

impl OptimizeRequest {
    pub fn new(start: u64, target: Option<u64>) -> Self {
        Self {
            start,
            target,
            max_steps: DEFAULT_MAX_STEPS,
            query: PatternQuery::All,
            custom_pattern: None,
            grid: GridConfig::default(),
        }
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_query(mut self, query: PatternQuery, custom_pattern: Option<String>) -> Self {
        self.query = query;
        self.custom_pattern = custom_pattern;
        self
    }

    pub fn with_grid(mut self, grid: GridConfig) -> Self {
        self.grid = grid;
        self
    }
}

/// Tries every configuration of the grid and returns the best
/// [`OPTIMIZER_RESULT_LIMIT`], fewest steps first.
///
/// With a target, only configurations that hit it exactly are kept.
/// Without one, each configuration is searched for beautiful days within
/// `min(max_steps, OPTIMIZER_STEP_CAP)` steps.
pub fn optimize(request: &OptimizeRequest) -> Vec<OptimizationCandidate> {
    let configurations = Configuration::enumerate(&request.grid);
    let classifier = Classifier::new(request.query, request.custom_pattern.as_deref());
    let step_cap = request.max_steps.min(OPTIMIZER_STEP_CAP);

    let mut candidates: Vec<OptimizationCandidate> = configurations
        .into_iter()
        .filter_map(|cfg| match request.target {
            Some(target) => evaluate_target(request.start, target, cfg),
            None => evaluate_patterns(request.start, step_cap, cfg, &classifier),
        })
        .collect();

    debug!(
        "optimize: start={} target={:?} kept {} configuration(s)",
        request.start,
        request.target,
        candidates.len()
    );

    // stable: ties keep enumeration order
    candidates.sort_by_key(|c| c.score);
    candidates.truncate(OPTIMIZER_RESULT_LIMIT);
    candidates
}

fn evaluate_target(start: u64, target: u64, cfg: Configuration) -> Option<OptimizationCandidate> {
    let outcome = solve(start, target, cfg.stride);
    let n = outcome.exact_steps()?;
    trace!(
        "optimize: children={} beds={} reaches {} in {}",
        cfg.children, cfg.beds, target, n
    );
    Some(OptimizationCandidate {
        configuration: cfg,
        outcome: CandidateOutcome::TargetReached { outcome },
        score: n,
    })
}

fn evaluate_patterns(
    start: u64,
    step_cap: u64,
    cfg: Configuration,
    classifier: &Classifier,
) -> Option<OptimizationCandidate> {
    let matches = search_with(start, cfg.stride, step_cap, classifier);
    let match_count = matches.len();
    let nearest = matches.into_iter().next()?;
    trace!(
        "optimize: children={} beds={} nearest {} at step {}",
        cfg.children, cfg.beds, nearest.value, nearest.steps_from_start
    );
    Some(OptimizationCandidate {
        configuration: cfg,
        score: nearest.steps_from_start,
        outcome: CandidateOutcome::NearestPattern {
            nearest,
            match_count,
        },
    })
}
