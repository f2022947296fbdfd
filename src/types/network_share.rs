//! Network statistics and an account's share of them

use serde::{Deserialize, Serialize};

/// One row of the network transaction statistics feed (yearly granularity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatistics {
    pub date: String,
    pub trx_count: u64,
    #[serde(default)]
    pub avg_trx: f64,
    #[serde(default)]
    pub min_trx: u64,
    #[serde(default)]
    pub max_trx: u64,
    #[serde(default)]
    pub last_block_num: u64,
}

/// How much of the network's activity a single account accounts for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkShare {
    pub username: String,
    pub user_total: u64,
    pub global_total: u64,
    /// user_total / global_total * 100, 0.0 when the network total is zero
    pub percentage: f64,
}
