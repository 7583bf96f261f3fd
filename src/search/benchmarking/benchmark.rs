use crate::search::Plan;
use itertools::Itertools;
use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Target of the tracing events carrying finished benchmark records. Wiring
/// a subscriber filter to this target separates the machine-readable records
/// from the ordinary search log.
pub const BENCHMARK_TARGET: &str = "benchmark";

/// Default wall-clock budget of a planning run.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Outcome of a single lookahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookaheadRecord {
    pub success: bool,
    pub expansions: u64,
    pub heuristic_calls: u64,
    pub ordering_calls: u64,
    pub exit_reason: &'static str,
}

/// Collects the statistics of one planning run and owns its wall-clock
/// budget. The driver polls [`Benchmark::time_up`] at its checkpoints, feeds
/// every finished lookahead through [`Benchmark::log_lookahead`], and
/// finalises with [`Benchmark::log_solution`], which emits the run record as
/// one comma-joined line on the [`BENCHMARK_TARGET`] channel.
#[derive(Debug)]
pub struct Benchmark {
    task_name: String,
    search_name: String,
    heuristic_name: String,
    lookahead_name: String,
    ordering_name: String,
    time_limit: Duration,
    start_time: Instant,
    lookaheads: Vec<LookaheadRecord>,
    num_restarts: u64,
}

impl Benchmark {
    pub fn new(
        task_name: &str,
        search_name: &str,
        heuristic_name: &str,
        lookahead_name: &str,
        ordering_name: &str,
    ) -> Self {
        Self {
            task_name: task_name.to_owned(),
            search_name: search_name.to_owned(),
            heuristic_name: heuristic_name.to_owned(),
            lookahead_name: lookahead_name.to_owned(),
            ordering_name: ordering_name.to_owned(),
            time_limit: DEFAULT_TIME_LIMIT,
            start_time: Instant::now(),
            lookaheads: vec![],
            num_restarts: 0,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Whether the wall-clock budget has elapsed. Cancellation is
    /// cooperative: the search polls this at its checkpoints and unwinds on
    /// its own.
    pub fn time_up(&self) -> bool {
        self.start_time.elapsed() > self.time_limit
    }

    pub fn restart(&mut self) {
        self.num_restarts += 1;
    }

    pub fn num_restarts(&self) -> u64 {
        self.num_restarts
    }

    pub fn log_lookahead(
        &mut self,
        success: bool,
        expansions: u64,
        heuristic_calls: u64,
        ordering_calls: u64,
        exit_reason: &'static str,
    ) {
        self.lookaheads.push(LookaheadRecord {
            success,
            expansions,
            heuristic_calls,
            ordering_calls,
            exit_reason,
        });
    }

    pub fn lookaheads(&self) -> &[LookaheadRecord] {
        &self.lookaheads
    }

    pub fn total_expansions(&self) -> u64 {
        self.lookaheads.iter().map(|record| record.expansions).sum()
    }

    pub fn total_heuristic_calls(&self) -> u64 {
        self.lookaheads
            .iter()
            .map(|record| record.heuristic_calls)
            .sum()
    }

    pub fn total_ordering_calls(&self) -> u64 {
        self.lookaheads
            .iter()
            .map(|record| record.ordering_calls)
            .sum()
    }

    /// Finalise the run. A `None` message inherits the exit reason of the
    /// last lookahead.
    pub fn log_solution(&self, solution: Option<&Plan>, message: Option<&str>) {
        let elapsed = self.start_time.elapsed();
        let message = match message {
            Some(message) => message.to_owned(),
            None => self
                .lookaheads
                .last()
                .map(|record| record.exit_reason.to_owned())
                .unwrap_or_default(),
        };

        info!(target: BENCHMARK_TARGET, "{}", self.record_line(solution, &message, elapsed));

        let peak_memory_mb = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
        info!(
            elapsed = elapsed.as_secs_f64(),
            peak_memory_mb = peak_memory_mb,
            solution_found = solution.is_some(),
            "search finalised"
        );
    }

    fn record_line(&self, solution: Option<&Plan>, message: &str, elapsed: Duration) -> String {
        let lookaheads = format!(
            "[{}]",
            self.lookaheads
                .iter()
                .map(|record| {
                    format!(
                        "({}, {}, {}, {}, {})",
                        record.success,
                        record.expansions,
                        record.heuristic_calls,
                        record.ordering_calls,
                        record.exit_reason
                    )
                })
                .join(", ")
        );

        [
            csv_field(&self.task_name),
            csv_field(&self.search_name),
            csv_field(&self.heuristic_name),
            csv_field(&self.lookahead_name),
            csv_field(&self.ordering_name),
            solution.is_some().to_string(),
            solution.map_or(0, Plan::len).to_string(),
            elapsed.as_secs_f64().to_string(),
            self.lookaheads.len().to_string(),
            self.total_expansions().to_string(),
            self.total_heuristic_calls().to_string(),
            self.total_ordering_calls().to_string(),
            self.num_restarts.to_string(),
            csv_field(message),
            csv_field(&lookaheads),
        ]
        .join(",")
    }
}

// CSV-style quoting: a field containing a comma or a quote is wrapped in
// double quotes, with embedded quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}
