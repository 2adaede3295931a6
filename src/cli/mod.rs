//! CLI module
//!
//! Command-line front end over the dataset viewer.
//!
//! # Commands
//!
//! - `show` - Print one sorted page of a dataset
//! - `columns` - Print the inferred columns
//! - `export` - Write the full dataset to CSV

mod commands;
mod runner;

pub use commands::{Cli, Commands, DatasetArgs, OutputFormat};
pub use runner::Runner;
