//! # pihex-cli
//!
//! CLI output, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod progress;

pub use presenter::CLIResultPresenter;
