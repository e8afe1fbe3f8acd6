//! Host parallelism behind an injectable provider.

/// Source of the worker count used when a request leaves the thread
/// count open.
///
/// The dispatcher queries the provider at most once per request and
/// never caches the answer across requests.
pub trait ParallelismProvider: Send + Sync {
    /// Number of workers to use for an open thread count.
    fn available_parallelism(&self) -> usize;
}

/// Asks the operating system on every call.
pub struct HostParallelism;

impl ParallelismProvider for HostParallelism {
    fn available_parallelism(&self) -> usize {
        std::thread::available_parallelism()
            .map(std::num::NonZero::get)
            .unwrap_or(1)
    }
}

/// Always answers with the same count; the test double for dispatcher
/// behavior that must not depend on the host machine.
pub struct FixedParallelism(pub usize);

impl ParallelismProvider for FixedParallelism {
    fn available_parallelism(&self) -> usize {
        self.0
    }
}
