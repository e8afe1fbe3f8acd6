//! Strategy registry.

use std::sync::Arc;

use crate::error::PiError;
use crate::strategy::{SequentialStrategy, Strategy, ThreadJoinStrategy};

/// Immutable set of the known execution strategies.
///
/// The set is closed and built eagerly at construction; lookups never
/// create anything, so a miss is always `UnknownStrategy` and there is
/// no fallback.
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    /// Build the registry with the two known strategies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strategies: vec![
                Arc::new(SequentialStrategy::new()),
                Arc::new(ThreadJoinStrategy::new()),
            ],
        }
    }

    /// Look up a strategy by name, ignoring ASCII case.
    pub fn strategy_for(&self, name: &str) -> Result<Arc<dyn Strategy>, PiError> {
        self.strategies
            .iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| PiError::UnknownStrategy(name.to_string()))
    }

    /// List all registered strategy names.
    #[must_use]
    pub fn available(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|strategy| strategy.name()).collect()
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_finds_sequential() {
        let registry = StrategyRegistry::new();
        let strategy = registry.strategy_for("sequential").unwrap();
        assert_eq!(strategy.name(), "sequential");
    }

    #[test]
    fn registry_finds_threads() {
        let registry = StrategyRegistry::new();
        let strategy = registry.strategy_for("threads").unwrap();
        assert_eq!(strategy.name(), "threads");
    }

    #[test]
    fn lookup_ignores_case() {
        let registry = StrategyRegistry::new();
        for name in ["THREADS", "Threads", "tHrEaDs"] {
            assert_eq!(registry.strategy_for(name).unwrap().name(), "threads");
        }
        assert_eq!(
            registry.strategy_for("SEQUENTIAL").unwrap().name(),
            "sequential"
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = StrategyRegistry::new();
        let err = registry.strategy_for("fibers").unwrap_err();
        assert!(matches!(err, PiError::UnknownStrategy(ref name) if name == "fibers"));
    }

    #[test]
    fn available_lists_both_strategies() {
        let registry = StrategyRegistry::new();
        let available = registry.available();
        assert!(available.contains(&"sequential"));
        assert!(available.contains(&"threads"));
        assert_eq!(available.len(), 2);
    }

    #[test]
    fn resolved_strategy_computes() {
        let registry = StrategyRegistry::new();
        let strategy = registry.strategy_for("threads").unwrap();
        assert_eq!(strategy.calculate(0, 5, 2).unwrap(), "243F6");
    }
}
