//! assetcheck CLI library.
//!
//! Command implementations and logging setup for the `assetcheck` binary.

pub mod commands;
pub mod logging;
