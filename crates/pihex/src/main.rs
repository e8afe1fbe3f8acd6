//! `pihex` binary entry point.

use pihex_cli::CLIResultPresenter;
use pihex_lib::{app, config, errors};
use pihex_orchestration::ResultPresenter;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
        presenter.present_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
