//! Command implementations.

pub mod chart;
pub mod config;
