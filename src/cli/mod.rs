//! CLI infrastructure for the oxo search toolkit
//!
//! This module provides the command-line interface for demonstrating,
//! analyzing, and benchmarking the two search strategies.

pub mod commands;
pub mod output;
