//! Request dispatch: strategy resolution, thread defaulting, and the
//! timing wrapper around the calculation itself.

use std::sync::Arc;

use tracing::debug;

use pihex_core::error::PiError;
use pihex_core::registry::StrategyRegistry;
use pihex_core::strategy::Strategy;

use crate::interfaces::ExecutionResult;
use crate::parallelism::{HostParallelism, ParallelismProvider};
use crate::timing::measure;

/// Routes a request to a strategy and instruments the run.
///
/// Requests are independent; the dispatcher holds no per-request state
/// and can be shared freely.
pub struct Dispatcher {
    registry: StrategyRegistry,
    parallelism: Box<dyn ParallelismProvider>,
}

struct Resolved {
    strategy: Arc<dyn Strategy>,
    threads: usize,
    label: String,
}

impl Dispatcher {
    /// Dispatcher backed by the host's parallelism.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(Box::new(HostParallelism))
    }

    /// Dispatcher with an injected parallelism source.
    #[must_use]
    pub fn with_provider(parallelism: Box<dyn ParallelismProvider>) -> Self {
        Self {
            registry: StrategyRegistry::new(),
            parallelism,
        }
    }

    /// Extract digits with the requested strategy.
    ///
    /// An absent strategy, or any casing of `"sequential"`, takes the
    /// sequential path. Everything else goes through the registry; a
    /// miss is `UnknownStrategy`, never a silent fallback.
    pub fn calculate(
        &self,
        start: i64,
        count: i64,
        threads: Option<i64>,
        strategy: Option<&str>,
    ) -> Result<String, PiError> {
        let resolved = self.resolve(threads, strategy)?;
        resolved.strategy.calculate(start, count, resolved.threads)
    }

    /// Extract digits and record the wall-clock time of the
    /// calculation alone; resolution happens outside the clock.
    pub fn calculate_with_timing(
        &self,
        start: i64,
        count: i64,
        threads: Option<i64>,
        strategy: Option<&str>,
    ) -> Result<ExecutionResult, PiError> {
        let resolved = self.resolve(threads, strategy)?;
        let timed = measure(|| resolved.strategy.calculate(start, count, resolved.threads));
        let time_millis = timed.millis();
        Ok(ExecutionResult {
            digits: timed.value?,
            strategy: resolved.label,
            threads: resolved.threads,
            time_millis,
        })
    }

    /// List the strategy names requests may ask for.
    #[must_use]
    pub fn available_strategies(&self) -> Vec<&'static str> {
        self.registry.available()
    }

    fn resolve(&self, threads: Option<i64>, strategy: Option<&str>) -> Result<Resolved, PiError> {
        match strategy {
            Some(name) if !name.eq_ignore_ascii_case("sequential") => {
                let strategy = self.registry.strategy_for(name)?;
                let threads = self.resolve_threads(threads);
                debug!(strategy = %name, threads, "Strategy resolved");
                Ok(Resolved {
                    strategy,
                    threads,
                    label: name.to_string(),
                })
            }
            _ => {
                // The sequential path never asks the host how many
                // cores it has.
                let strategy = self.registry.strategy_for("sequential")?;
                debug!(strategy = "sequential", threads = 1_usize, "Strategy resolved");
                Ok(Resolved {
                    strategy,
                    threads: 1,
                    label: "sequential".to_string(),
                })
            }
        }
    }

    /// A missing or non-positive thread count means "all cores"; the
    /// provider is asked at most once per request.
    fn resolve_threads(&self, requested: Option<i64>) -> usize {
        match requested {
            Some(threads) if threads > 0 => usize::try_from(threads).unwrap_or(usize::MAX),
            _ => self.parallelism.available_parallelism(),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
