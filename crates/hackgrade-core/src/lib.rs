//! Hackgrade Core Library
//!
//! Validation, key reconciliation, scoring and report writing for hackathon
//! prediction submissions, plus the random baseline generators.

pub mod baseline;
pub mod config;
pub mod error;
pub mod explore;
pub mod format;
pub mod join;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod reconcile;
pub mod report;
pub mod score;
pub mod table;
pub mod task;
pub mod validate;
