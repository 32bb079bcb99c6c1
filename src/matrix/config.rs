//! Configuration for loading and computing

/// How decode treats coordinates outside the declared shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Accept any non-negative coordinate, regardless of `rows`/`cols`
    #[default]
    Lenient,
    /// Reject entries with `row >= rows` or `col >= cols` as a format error
    Strict,
}

impl BoundsPolicy {
    /// Check whether this policy rejects out-of-range coordinates
    pub fn is_strict(&self) -> bool {
        matches!(self, BoundsPolicy::Strict)
    }
}

/// Configuration shared by the codec and the arithmetic engine
#[derive(Debug, Clone)]
pub struct Config {
    /// Coordinate validation applied while decoding
    pub bounds: BoundsPolicy,

    /// Minimum number of nonempty rows in the left operand before
    /// multiply switches to the row-parallel path
    pub parallel_row_threshold: usize,

    /// Number of worker threads for the row-parallel path
    pub n_threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: BoundsPolicy::Lenient,
            parallel_row_threshold: 1024,
            n_threads: num_cpus::get(), // Use all available cores
        }
    }
}

impl Config {
    /// Default configuration with strict coordinate validation
    pub fn strict() -> Self {
        Self {
            bounds: BoundsPolicy::Strict,
            ..Self::default()
        }
    }

    /// Default configuration that never takes the parallel path
    pub fn sequential() -> Self {
        Self {
            parallel_row_threshold: usize::MAX,
            ..Self::default()
        }
    }

    /// Whether a multiply over `nonempty_rows` rows of A should run in parallel
    pub fn use_parallel(&self, nonempty_rows: usize) -> bool {
        self.n_threads > 1 && nonempty_rows >= self.parallel_row_threshold
    }
}
