//! # burrito
//!
//! Collects parameters from AWS SSM Parameter Store and wraps them up
//! into a shell script of `export` lines.
//!
//! Each input name is an environment variable; its value is the key to
//! look up. Lookups run sequentially against one store session, failed
//! lookups are skipped, and the script is written once at the end.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod script;
pub mod store;
pub mod telemetry;
