//! Blockchain identities known to the fee comparison

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Blockchain networks supported for fee comparison
///
/// Declaration order is the processing order used by the calculator, with Hive last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockchainNetwork {
    Bitcoin,
    Ethereum,
    Solana,
    BnbChain,
    Polkadot,
    Hive,
}

/// Blockchains compared against Hive, in processing order
pub const COMPARABLE_BLOCKCHAINS: [BlockchainNetwork; 5] = [
    BlockchainNetwork::Bitcoin,
    BlockchainNetwork::Ethereum,
    BlockchainNetwork::Solana,
    BlockchainNetwork::BnbChain,
    BlockchainNetwork::Polkadot,
];

impl BlockchainNetwork {
    /// Every network, comparison set first and Hive last
    pub const ALL: [BlockchainNetwork; 6] = [
        BlockchainNetwork::Bitcoin,
        BlockchainNetwork::Ethereum,
        BlockchainNetwork::Solana,
        BlockchainNetwork::BnbChain,
        BlockchainNetwork::Polkadot,
        BlockchainNetwork::Hive,
    ];

    /// Stable identifier, matches the serde representation
    pub fn id(&self) -> &'static str {
        match self {
            BlockchainNetwork::Bitcoin => "bitcoin",
            BlockchainNetwork::Ethereum => "ethereum",
            BlockchainNetwork::Solana => "solana",
            BlockchainNetwork::BnbChain => "bnb_chain",
            BlockchainNetwork::Polkadot => "polkadot",
            BlockchainNetwork::Hive => "hive",
        }
    }

    /// Human-readable name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockchainNetwork::Bitcoin => "Bitcoin",
            BlockchainNetwork::Ethereum => "Ethereum",
            BlockchainNetwork::Solana => "Solana",
            BlockchainNetwork::BnbChain => "BNB Chain",
            BlockchainNetwork::Polkadot => "Polkadot",
            BlockchainNetwork::Hive => "Hive",
        }
    }

    /// Ticker symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            BlockchainNetwork::Bitcoin => "BTC",
            BlockchainNetwork::Ethereum => "ETH",
            BlockchainNetwork::Solana => "SOL",
            BlockchainNetwork::BnbChain => "BNB",
            BlockchainNetwork::Polkadot => "DOT",
            BlockchainNetwork::Hive => "HIVE",
        }
    }

    pub fn is_hive(&self) -> bool {
        matches!(self, BlockchainNetwork::Hive)
    }
}

impl fmt::Display for BlockchainNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BlockchainNetwork {
    type Err = String;

    /// Accepts the stable id, the display name or the ticker symbol (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        BlockchainNetwork::ALL
            .iter()
            .copied()
            .find(|network| {
                network.id() == needle
                    || network.display_name().to_lowercase() == needle
                    || network.symbol().to_lowercase() == needle
            })
            .ok_or_else(|| {
                format!(
                    "unknown blockchain '{}' (expected one of: {})",
                    s,
                    BlockchainNetwork::ALL
                        .iter()
                        .map(|n| n.id())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
