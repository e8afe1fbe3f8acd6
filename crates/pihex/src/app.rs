//! Application flow for the `pihex` binary.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use pihex_cli::completion::generate_completion;
use pihex_cli::output::write_to_file;
use pihex_cli::progress::extraction_spinner;
use pihex_cli::CLIResultPresenter;
use pihex_orchestration::{Dispatcher, ExecutionResult, ResultPresenter};

use crate::config::AppConfig;

/// JSON document printed by `--json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResponse<'a> {
    start: i64,
    count: i64,
    digits: &'a str,
    strategy: &'a str,
    threads: usize,
    time_millis: f64,
}

/// Run the application with the given configuration.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }
    run_extraction(config)
}

fn run_extraction(config: &AppConfig) -> Result<()> {
    let dispatcher = Dispatcher::new();

    let spinner = (!config.quiet && !config.json)
        .then(|| extraction_spinner(config.start, config.count));
    let outcome = dispatcher.calculate_with_timing(
        config.start,
        config.count,
        config.threads,
        config.strategy.as_deref(),
    );
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let result = outcome?;

    debug!(
        strategy = %result.strategy,
        threads = result.threads,
        millis = result.time_millis,
        "Extraction complete"
    );

    if config.json {
        print_json(config, &result)?;
    } else {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        presenter.present_result(config.start, config.count, &result);
    }

    if let Some(path) = config.output.as_deref() {
        write_to_file(path, &result.digits)
            .with_context(|| format!("failed to write digits to {path}"))?;
    }
    Ok(())
}

fn print_json(config: &AppConfig, result: &ExecutionResult) -> Result<()> {
    let response = JsonResponse {
        start: config.start,
        count: config.count,
        digits: &result.digits,
        strategy: &result.strategy,
        threads: result.threads,
        time_millis: result.time_millis,
    };
    let body = serde_json::to_string_pretty(&response).context("failed to encode result")?;
    println!("{body}");
    Ok(())
}
