mod benchmark;

pub use benchmark::{Benchmark, LookaheadRecord, BENCHMARK_TARGET, DEFAULT_TIME_LIMIT};
