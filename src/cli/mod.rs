//! Command-line harness for the search algorithms
//!
//! Each subcommand runs one algorithm on a small built-in problem and
//! prints the result as text or JSON.

pub mod commands;
pub mod config;
pub mod output;
