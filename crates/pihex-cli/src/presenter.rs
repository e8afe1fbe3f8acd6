//! CLI result presenter.

use std::time::Duration;

use console::style;

use pihex_orchestration::interfaces::{ExecutionResult, ResultPresenter};

use crate::output::{format_digits, format_duration};

/// CLI result presenter.
///
/// Quiet mode prints the bare digit string for piping; normal mode
/// adds the strategy, thread count, and duration.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, start: i64, count: i64, result: &ExecutionResult) {
        if self.quiet {
            println!("{}", result.digits);
            return;
        }

        let duration = Duration::from_secs_f64(result.time_millis / 1000.0);
        println!("{} {}", style("Strategy:").dim(), result.strategy);
        println!("{} {}", style("Threads:").dim(), result.threads);
        println!("{} {}", style("Duration:").dim(), format_duration(duration));
        println!(
            "pi[{start}..{}] = {}",
            start + count,
            format_digits(&result.digits, self.verbose)
        );
    }

    fn present_error(&self, error: &str) {
        eprintln!("{} {error}", style("Error:").red().bold());
    }
}
