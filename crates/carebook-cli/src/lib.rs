//! carebook-cli
//!
//! Command implementations and configuration for the `carebook` binary.

pub mod commands;
pub mod config;
