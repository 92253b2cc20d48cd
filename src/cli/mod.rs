//! Command Line Interface (CLI) layer for aspectnorm.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, params merging and
//! the batch run. It wires user-provided options to `aspectnorm::api`.
//!
//! If you are embedding aspectnorm into another application, prefer using
//! the high-level `aspectnorm::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
