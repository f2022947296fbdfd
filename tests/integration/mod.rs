//! Integration Tests Module
//!
//! End-to-end tests that drive the command layer, configuration and report
//! rendering together.

pub mod config_layering;
