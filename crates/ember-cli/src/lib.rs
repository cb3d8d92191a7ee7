//! ember-cli library root.
//!
//! Re-exports the config and command modules so integration tests can
//! drive them without going through argument parsing.

pub mod commands;
pub mod config;
pub mod logging;
