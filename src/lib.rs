//! Core library for the `checkpoint` CLI.
//!
//! The binary wires these modules together: YAML configuration parsing,
//! the concurrent probe engine, the fixed-tick schedule loop, and the
//! console table renderer. The primary interface is the `checkpoint`
//! command-line application.
pub mod args;
pub mod config;
pub mod error;
pub mod http_probe;
pub mod logger;
pub mod report;
pub mod schedule;
