//! The published EHC variants. Each entry point shares the signature
//! `(task, heuristic, use_preferred_ops) -> Option<Plan>`; the
//! `use_preferred_ops` flag is accepted for interface parity with the other
//! search entry points and is not consulted — none of these variants use
//! preferred operators.

use crate::search::{
    search_engines::{EhcConfig, EhcSearch},
    Heuristic, Plan, Task,
};

/// Classic enforced hill-climbing: BFS lookahead, fail on the first
/// lookahead that finds no improvement.
pub fn classic_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::classic()).run()
}

/// Classic EHC with a depth-bounded BFS lookahead.
pub fn depthbound_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::depth_bounded()).run()
}

/// Depth-bounded BFS lookahead with a dead-end cache: a failed lookahead
/// marks its anchor dead and restarts from the root instead of giving up.
pub fn episodic_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::episodic()).run()
}

/// The heaped variant: heuristic best-first lookahead with a capped
/// frontier.
pub fn adapted_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::adapted()).run()
}

/// The heaped variant with a depth bound and dead-end-cache restarts.
pub fn db_adapted_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::db_adapted()).run()
}

/// Classic EHC with Least-Failed-First successor ordering.
pub fn guided_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::guided()).run()
}

/// The hybrid: best-first lookahead, LFF ordering, dead-end-cache restarts,
/// and a per-run heuristic cache.
pub fn super_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::hybrid()).run()
}

/// Heaps and backtracking: best-first lookahead; when it exhausts, resume
/// from the parent of the best state seen since the last improvement, up to
/// the backtrack budget.
pub fn hb_ehc<'a>(
    task: &'a Task,
    heuristic: Box<dyn Heuristic + 'a>,
    _use_preferred_ops: bool,
) -> Option<Plan> {
    EhcSearch::new(task, heuristic, EhcConfig::backtracking()).run()
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[clap(rename_all = "kebab-case")]
pub enum SearchVariantName {
    #[clap(help = "Classic enforced hill-climbing (BFS lookahead)")]
    Classic,
    #[clap(help = "Classic EHC with a depth-bounded lookahead")]
    DepthBound,
    #[clap(help = "Depth-bounded lookahead with dead-end restarts")]
    Episodic,
    #[clap(help = "Best-first lookahead")]
    Adapted,
    #[clap(help = "Depth-bounded best-first lookahead with dead-end restarts")]
    DbAdapted,
    #[clap(help = "BFS lookahead with least-failed-first operator ordering")]
    Guided,
    #[clap(help = "Best-first + LFF + dead-end restarts + heuristic cache")]
    Super,
    #[clap(help = "Best-first lookahead with backtracking")]
    HeapsBacktracking,
}

impl SearchVariantName {
    pub fn config(&self) -> EhcConfig {
        match self {
            SearchVariantName::Classic => EhcConfig::classic(),
            SearchVariantName::DepthBound => EhcConfig::depth_bounded(),
            SearchVariantName::Episodic => EhcConfig::episodic(),
            SearchVariantName::Adapted => EhcConfig::adapted(),
            SearchVariantName::DbAdapted => EhcConfig::db_adapted(),
            SearchVariantName::Guided => EhcConfig::guided(),
            SearchVariantName::Super => EhcConfig::hybrid(),
            SearchVariantName::HeapsBacktracking => EhcConfig::backtracking(),
        }
    }

    pub fn search<'a>(&self, task: &'a Task, heuristic: Box<dyn Heuristic + 'a>) -> Option<Plan> {
        EhcSearch::new(task, heuristic, self.config()).run()
    }
}
