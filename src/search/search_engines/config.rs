use crate::search::benchmarking::DEFAULT_TIME_LIMIT;
use std::time::Duration;

/// The inner search strategy a lookahead runs. The serialized names are the
/// vocabulary of the benchmark record's lookahead field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
pub enum LookaheadKind {
    /// Plain breadth-first lookahead: first strict improvement wins.
    #[strum(serialize = "BFS")]
    Bfs,
    /// Breadth-first with a depth cap on enqueued successors.
    #[strum(serialize = "DB_BFS")]
    DepthBoundedBfs,
    /// Heuristic best-first lookahead over a lazy-deletion min-heap.
    #[strum(serialize = "BeFS")]
    BestFirst,
    /// Best-first with a depth cap on enqueued successors.
    #[strum(serialize = "DB_BeFS")]
    DepthBoundedBestFirst,
}

/// Queue cap of the best-first lookaheads.
pub const DEFAULT_MAX_QUEUE_SIZE: usize = 10_000;

/// Queue cap used by the earliest draft of the heaped variant; kept
/// reachable through [`EhcConfig::max_queue_size`].
pub const LEGACY_MAX_QUEUE_SIZE: usize = 10_000_000;

/// Backtrack budget of the heaps-and-backtracking variant.
pub const DEFAULT_BACKTRACK_BUDGET: u32 = 50;

/// Backtrack budget of the paper-literal draft of the same variant.
pub const LEGACY_BACKTRACK_BUDGET: u32 = 10;

/// Configuration record of the generic EHC driver. The published variants
/// are named constructors over this record; every knob stays public so
/// non-default combinations (including the legacy cap values) remain
/// expressible without touching the driver.
#[derive(Debug, Clone)]
pub struct EhcConfig {
    /// Tag used in the benchmark record.
    pub search_name: &'static str,
    pub lookahead: LookaheadKind,
    /// Cache states whose lookahead found no improvement and restart from
    /// the root instead of terminating.
    pub use_dead_end_cache: bool,
    /// On exhaustion, resume from the parent of the best state seen since
    /// the last improvement, up to `backtrack_budget` times.
    pub use_backtracking: bool,
    /// Memoise heuristic values per state for the lifetime of the run.
    pub use_heuristic_cache: bool,
    /// Order successors with the learned Least-Failed-First weights.
    pub use_lff: bool,
    /// Best-first frontier cap; exceeding it bounds the lookahead out.
    pub max_queue_size: usize,
    /// Lookahead depth cap, measured from the anchor.
    pub depth_bound: Option<u32>,
    pub backtrack_budget: u32,
    pub time_limit: Duration,
}

impl EhcConfig {
    fn base(search_name: &'static str, lookahead: LookaheadKind) -> Self {
        Self {
            search_name,
            lookahead,
            use_dead_end_cache: false,
            use_backtracking: false,
            use_heuristic_cache: false,
            use_lff: false,
            max_queue_size: DEFAULT_MAX_QUEUE_SIZE,
            depth_bound: None,
            backtrack_budget: DEFAULT_BACKTRACK_BUDGET,
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }

    /// Classic EHC: BFS lookahead, terminate on the first failed lookahead.
    pub fn classic() -> Self {
        Self::base("classic_ehc", LookaheadKind::Bfs)
    }

    /// Classic EHC with the lookahead capped at depth 5.
    pub fn depth_bounded() -> Self {
        Self {
            depth_bound: Some(5),
            ..Self::base("depthbound_ehc", LookaheadKind::DepthBoundedBfs)
        }
    }

    /// Depth-bounded BFS lookahead plus a dead-end cache with restarts.
    pub fn episodic() -> Self {
        Self {
            use_dead_end_cache: true,
            depth_bound: Some(7),
            ..Self::base("episodic_ehc", LookaheadKind::DepthBoundedBfs)
        }
    }

    /// Heaped EHC: best-first lookahead, terminate on the first failure.
    pub fn adapted() -> Self {
        Self::base("adapted_ehc", LookaheadKind::BestFirst)
    }

    /// Depth-bounded best-first lookahead plus a dead-end cache with
    /// restarts.
    pub fn db_adapted() -> Self {
        Self {
            use_dead_end_cache: true,
            depth_bound: Some(5),
            ..Self::base("db_adapted_ehc", LookaheadKind::DepthBoundedBestFirst)
        }
    }

    /// Classic EHC with LFF-ordered successor enumeration.
    pub fn guided() -> Self {
        Self {
            use_lff: true,
            ..Self::base("guided_ehc", LookaheadKind::Bfs)
        }
    }

    /// The hybrid: best-first lookahead, LFF ordering, dead-end cache with
    /// restarts, and a per-run heuristic cache.
    pub fn hybrid() -> Self {
        Self {
            use_dead_end_cache: true,
            use_heuristic_cache: true,
            use_lff: true,
            ..Self::base("super_ehc", LookaheadKind::BestFirst)
        }
    }

    /// Heaps and backtracking: best-first lookahead; on exhaustion, back up
    /// to the parent of the best state seen since the last improvement.
    pub fn backtracking() -> Self {
        Self {
            use_backtracking: true,
            ..Self::base("hb_ehc", LookaheadKind::BestFirst)
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn ordering_name(&self) -> &'static str {
        if self.use_lff {
            "LFF"
        } else {
            "None"
        }
    }
}
