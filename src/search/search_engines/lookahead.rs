//! The lookahead engine: the inner searches the EHC driver runs from its
//! current anchor. Each strategy either returns a strictly improving (or
//! goal) descendant of the anchor, or reports why it stopped.

use crate::search::{
    search_engines::{driver::BestLocal, EhcSearch, LookaheadKind},
    NodeId, PriorityQueue, State,
};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Result of one lookahead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaheadResult {
    /// A descendant of the anchor whose heuristic strictly beats the
    /// anchor's, or a goal node found during expansion.
    Improvement(NodeId),
    /// The frontier drained without finding an improvement.
    Exhausted,
    /// An internal resource cap was hit before the frontier drained.
    BoundedOut,
    /// The wall-clock budget elapsed mid-lookahead.
    Timeout,
}

/// Per-lookahead counters, folded into the benchmark record on exit.
#[derive(Debug, Default)]
struct LookaheadCounters {
    expansions: u64,
    heuristic_calls: u64,
    ordering_calls: u64,
}

impl<'a> EhcSearch<'a> {
    pub(crate) fn lookahead(&mut self, anchor: NodeId) -> LookaheadResult {
        match self.config.lookahead {
            LookaheadKind::Bfs | LookaheadKind::DepthBoundedBfs => self.bfs_lookahead(anchor),
            LookaheadKind::BestFirst | LookaheadKind::DepthBoundedBestFirst => {
                self.best_first_lookahead(anchor)
            }
        }
    }

    /// Breadth-first lookahead (plain or depth-bounded). The FIFO frontier
    /// makes the first discovered improvement the shallowest one.
    fn bfs_lookahead(&mut self, anchor: NodeId) -> LookaheadResult {
        let mut counters = LookaheadCounters::default();
        let anchor_state = self.space.state(anchor).clone();
        let anchor_g = self.space.node(anchor).g();
        let (h0, fresh) = self.evaluate(&anchor_state);
        if fresh {
            counters.heuristic_calls += 1;
        }

        let mut queue = VecDeque::new();
        queue.push_back(anchor);
        let mut visited: HashSet<State> = HashSet::new();

        while let Some(node_id) = queue.pop_front() {
            if self.benchmark.time_up() {
                debug!("timeout inside lookahead");
                self.log_lookahead(false, &counters, "Timeout");
                return LookaheadResult::Timeout;
            }

            let state = self.space.state(node_id).clone();
            if self.config.use_dead_end_cache && self.dead_ends.contains(&state) {
                debug!("pruned: node in dead-end cache");
                continue;
            }
            if !visited.insert(state.clone()) {
                debug!("pruned: node visited");
                continue;
            }

            // The expanded node's own heuristic value anchors the LFF
            // penalty for each of its successors.
            let parent_h = if self.config.use_lff {
                let (h, fresh) = self.evaluate(&state);
                if fresh {
                    counters.heuristic_calls += 1;
                }
                h
            } else {
                h0
            };

            for (op_index, successor) in self.ordering.successors(self.task, &state) {
                if self.config.use_dead_end_cache && self.dead_ends.contains(&successor) {
                    debug!("pruned: successor in dead-end cache");
                    continue;
                }
                if visited.contains(&successor) {
                    debug!("pruned: successor visited");
                    continue;
                }

                counters.expansions += 1;
                let child = self.space.make_child(node_id, op_index, successor.clone());

                if self.task.goal_reached(&successor) {
                    debug!("goal found in lookahead");
                    self.log_lookahead(true, &counters, "Goal found");
                    return LookaheadResult::Improvement(child);
                }

                let (h, fresh) = self.evaluate(&successor);
                if fresh {
                    counters.heuristic_calls += 1;
                }
                if h.is_infinite() {
                    continue;
                }
                if h < h0 || h == 0.0 {
                    debug!(
                        depth = self.space.node(child).g() - anchor_g,
                        expansions = counters.expansions,
                        "improving successor found in lookahead"
                    );
                    self.log_lookahead(true, &counters, "Successor found");
                    return LookaheadResult::Improvement(child);
                }

                if self.config.use_lff {
                    self.ordering.record_outcome(parent_h, op_index, h);
                    counters.ordering_calls += 1;
                }

                if let Some(bound) = self.config.depth_bound {
                    if self.space.node(child).g() - anchor_g >= bound {
                        debug!("successor not enqueued, beyond depth bound");
                        continue;
                    }
                }
                queue.push_back(child);
            }
        }

        self.log_lookahead(false, &counters, "Lookahead exhausted");
        LookaheadResult::Exhausted
    }

    /// Best-first lookahead (plain or depth-bounded). The frontier is keyed
    /// by heuristic value with FIFO tie-breaking, and capped at the
    /// configured queue size.
    fn best_first_lookahead(&mut self, anchor: NodeId) -> LookaheadResult {
        let mut counters = LookaheadCounters::default();
        let anchor_state = self.space.state(anchor).clone();
        let anchor_g = self.space.node(anchor).g();
        let (h0, fresh) = self.evaluate(&anchor_state);
        if fresh {
            counters.heuristic_calls += 1;
        }

        let mut frontier = PriorityQueue::new();
        frontier.push(anchor, h0);
        let mut visited: HashSet<State> = HashSet::new();

        while !frontier.is_empty() {
            if self.benchmark.time_up() {
                debug!("timeout inside lookahead");
                self.log_lookahead(false, &counters, "Timeout");
                return LookaheadResult::Timeout;
            }
            let node_id = frontier.pop();

            let state = self.space.state(node_id).clone();
            if self.config.use_dead_end_cache && self.dead_ends.contains(&state) {
                debug!("pruned: node in dead-end cache");
                continue;
            }
            if !visited.insert(state.clone()) {
                debug!("pruned: node visited");
                continue;
            }

            let parent_h = if self.config.use_lff {
                let (h, fresh) = self.evaluate(&state);
                if fresh {
                    counters.heuristic_calls += 1;
                }
                h
            } else {
                h0
            };

            for (op_index, successor) in self.ordering.successors(self.task, &state) {
                if self.config.use_dead_end_cache && self.dead_ends.contains(&successor) {
                    debug!("pruned: successor in dead-end cache");
                    continue;
                }
                if visited.contains(&successor) {
                    debug!("pruned: successor visited");
                    continue;
                }

                counters.expansions += 1;
                let child = self.space.make_child(node_id, op_index, successor.clone());

                if self.task.goal_reached(&successor) {
                    debug!("goal found in lookahead");
                    self.log_lookahead(true, &counters, "Goal found");
                    return LookaheadResult::Improvement(child);
                }

                let (h, fresh) = self.evaluate(&successor);
                if fresh {
                    counters.heuristic_calls += 1;
                }
                if h.is_infinite() {
                    continue;
                }
                if h < h0 || h == 0.0 {
                    debug!(
                        depth = self.space.node(child).g() - anchor_g,
                        expansions = counters.expansions,
                        "improving successor found in lookahead"
                    );
                    self.log_lookahead(true, &counters, "Successor found");
                    return LookaheadResult::Improvement(child);
                }

                if self.config.use_backtracking
                    && self.best_local.map_or(true, |best| h < best.h)
                {
                    self.best_local = Some(BestLocal { h, node: child });
                }

                if self.config.use_lff {
                    self.ordering.record_outcome(parent_h, op_index, h);
                    counters.ordering_calls += 1;
                }

                // A successor beyond the depth bound can still win above as
                // an improvement; it just never enters the frontier.
                if let Some(bound) = self.config.depth_bound {
                    if self.space.node(child).g() - anchor_g >= bound {
                        debug!("successor not enqueued, beyond depth bound");
                        continue;
                    }
                }
                frontier.push(child, h);

                if frontier.len() > self.config.max_queue_size {
                    debug!(queue_size = frontier.len(), "queue size exceeded");
                    self.log_lookahead(false, &counters, "Queue size exceeded");
                    return LookaheadResult::BoundedOut;
                }
            }
        }

        self.log_lookahead(false, &counters, "Lookahead exhausted");
        LookaheadResult::Exhausted
    }

    fn log_lookahead(&mut self, success: bool, counters: &LookaheadCounters, reason: &'static str) {
        self.benchmark.log_lookahead(
            success,
            counters.expansions,
            counters.heuristic_calls,
            counters.ordering_calls,
            reason,
        );
    }
}
