//! Core functionality for the gmlint GML linter
//!
//! This crate provides the core linting functionality including:
//! - Line-oriented rule checking
//! - Spacing fixes and long-line splitting
//! - Diagnostic generation and reporting
//! - Configuration management
//! - File discovery and processing

pub mod check;
pub mod config;
pub mod diagnostic;
pub mod discovery;
pub mod error;
pub mod fs;
pub mod lints;
pub mod rule_set;
pub mod settings;
pub mod split;
pub mod toml;
