//! Ops by Hive
//!
//! Shows how much a Hive account's operations would have cost in transaction fees
//! on other blockchains, and how much of the network's activity the account
//! accounts for.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fees;
pub mod network_share;
pub mod reports;
pub mod types;
pub mod utils;
