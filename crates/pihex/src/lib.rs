//! Library surface of the `pihex` application, exposed for the binary
//! and the end-to-end tests.

pub mod app;
pub mod config;
pub mod errors;
