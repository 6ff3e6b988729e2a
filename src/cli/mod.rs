//! Command-line interface module.

mod args;
pub mod check;
pub mod classify;
pub mod common;

pub use args::{CheckArgs, ClassifyArgs, Cli, Commands};
