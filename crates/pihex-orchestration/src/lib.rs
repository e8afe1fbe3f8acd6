//! # pihex-orchestration
//!
//! Strategy dispatch, thread resolution, and timing instrumentation.

pub mod dispatcher;
pub mod interfaces;
pub mod parallelism;
pub mod timing;

pub use dispatcher::Dispatcher;
pub use interfaces::{ExecutionResult, ResultPresenter};
pub use parallelism::{FixedParallelism, HostParallelism, ParallelismProvider};
pub use timing::{measure, TimedResult};
