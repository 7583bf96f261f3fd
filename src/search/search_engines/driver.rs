use crate::search::{
    benchmarking::Benchmark,
    ordering::{LeastFailedFirst, OrderingPolicy, TaskOrder},
    search_engines::{EhcConfig, LookaheadResult},
    Heuristic, HeuristicValue, NodeId, Plan, SearchSpace, State, Task,
};
use std::{
    collections::{HashMap, HashSet},
    fmt::{Debug, Formatter},
};
use tracing::{debug, info};

/// Lowest-heuristic node observed since the last improvement; the
/// backtracking variant resumes from its parent when a lookahead exhausts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BestLocal {
    pub h: HeuristicValue,
    pub node: NodeId,
}

/// The generic enforced hill-climbing driver. One instance owns all the
/// mutable state of a single planning run: the node arena, the dead-end and
/// heuristic caches, the ordering policy, the benchmark record, and the
/// backtrack budget. The published variants differ only in the
/// [`EhcConfig`] they construct the driver with.
pub struct EhcSearch<'a> {
    pub(crate) task: &'a Task,
    pub(crate) heuristic: Box<dyn Heuristic + 'a>,
    pub(crate) ordering: Box<dyn OrderingPolicy>,
    pub(crate) config: EhcConfig,
    pub(crate) space: SearchSpace,
    pub(crate) dead_ends: HashSet<State>,
    pub(crate) heuristic_cache: HashMap<State, HeuristicValue>,
    pub(crate) benchmark: Benchmark,
    pub(crate) best_local: Option<BestLocal>,
    backtracks_left: u32,
}

impl<'a> EhcSearch<'a> {
    pub fn new(task: &'a Task, heuristic: Box<dyn Heuristic + 'a>, config: EhcConfig) -> Self {
        let ordering: Box<dyn OrderingPolicy> = if config.use_lff {
            Box::new(LeastFailedFirst::new(task))
        } else {
            Box::new(TaskOrder)
        };
        let benchmark = Benchmark::new(
            task.name(),
            config.search_name,
            heuristic.name(),
            &config.lookahead.to_string(),
            ordering.name(),
        )
        .with_time_limit(config.time_limit);

        Self {
            task,
            heuristic,
            ordering,
            space: SearchSpace::new(task.initial_state().clone()),
            dead_ends: HashSet::new(),
            heuristic_cache: HashMap::new(),
            benchmark,
            best_local: None,
            backtracks_left: config.backtrack_budget,
            config,
        }
    }

    /// Run the search to completion, returning the plan if one was found.
    pub fn run(mut self) -> Option<Plan> {
        self.search()
    }

    /// As [`EhcSearch::run`], but also hand back the finished benchmark
    /// record for inspection.
    pub fn run_with_benchmark(mut self) -> (Option<Plan>, Benchmark) {
        let plan = self.search();
        (plan, self.benchmark)
    }

    fn search(&mut self) -> Option<Plan> {
        info!(
            task = self.task.name(),
            search = self.config.search_name,
            "starting enforced hill-climbing search"
        );

        let root = self.space.root();
        let mut current = root;
        loop {
            if self.task.goal_reached(self.space.state(current)) {
                let plan = self.space.extract_plan(current, self.task);
                info!(plan_length = plan.len(), "solution found");
                self.benchmark.log_solution(Some(&plan), Some("Solution found"));
                return Some(plan);
            }
            if self.benchmark.time_up() {
                info!("time limit reached");
                self.benchmark.log_solution(None, Some("Time limit reached"));
                return None;
            }

            match self.lookahead(current) {
                LookaheadResult::Improvement(node) => {
                    self.best_local = None;
                    current = node;
                }
                LookaheadResult::Timeout => {
                    info!("time limit reached");
                    self.benchmark.log_solution(None, Some("Time limit reached"));
                    return None;
                }
                result @ (LookaheadResult::Exhausted | LookaheadResult::BoundedOut) => {
                    if !self.handle_failed_lookahead(result, root, &mut current) {
                        return None;
                    }
                }
            }
        }
    }

    /// Apply the variant's policy after a failed lookahead. Returns false
    /// when the search should terminate without a plan; `current` has been
    /// repositioned otherwise.
    fn handle_failed_lookahead(
        &mut self,
        result: LookaheadResult,
        root: NodeId,
        current: &mut NodeId,
    ) -> bool {
        if self.config.use_dead_end_cache {
            self.dead_ends.insert(self.space.state(*current).clone());
            self.benchmark.restart();
            debug!(
                dead_ends = self.dead_ends.len(),
                "dead end recorded, restarting from the root"
            );
            if self.dead_ends.contains(self.space.state(root)) {
                info!("root state is a dead end, no solution found");
                self.benchmark.log_solution(None, Some("No solution found"));
                return false;
            }
            *current = root;
            return true;
        }

        if self.config.use_backtracking && result == LookaheadResult::Exhausted {
            if let Some(best) = self.best_local {
                if self.backtracks_left > 0 && best.node != root {
                    self.backtracks_left -= 1;
                    *current = self.space.node(best.node).parent();
                    debug!(
                        backtracks_left = self.backtracks_left,
                        "backtracking to the parent of the best local state"
                    );
                    return true;
                }
            }
            info!("no backtracks left, no solution found");
            self.benchmark.log_solution(None, Some("No backtracks left"));
            return false;
        }

        info!("no solution found");
        self.benchmark.log_solution(None, Some("No solution found"));
        false
    }

    /// Heuristic value of `state`, through the per-run cache when the
    /// variant enables it. The second component reports whether the
    /// heuristic actually ran, so lookaheads can keep their call counters
    /// exact under caching.
    pub(crate) fn evaluate(&mut self, state: &State) -> (HeuristicValue, bool) {
        if !self.config.use_heuristic_cache {
            return (self.heuristic.evaluate(state, self.task), true);
        }
        if let Some(&cached) = self.heuristic_cache.get(state) {
            return (cached, false);
        }
        let value = self.heuristic.evaluate(state, self.task);
        self.heuristic_cache.insert(state.clone(), value);
        (value, true)
    }
}

impl Debug for EhcSearch<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        f.debug_struct("EhcSearch")
            .field("task", &self.task.name())
            .field("config", &self.config)
            .field("nodes", &self.space.len())
            .field("dead_ends", &self.dead_ends.len())
            .finish_non_exhaustive()
    }
}
