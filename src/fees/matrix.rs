//! Compiled-in fee history for every supported blockchain
//!
//! Figures are hand-curated yearly average transaction fees in USD. The table is a
//! `const`, so lookups never allocate and concurrent readers need no locking.

use super::constants::{FeeCalculationYear, HIVE_TRANSACTION_FEE_USD, VALID_CALCULATION_YEARS};
use super::network::BlockchainNetwork;
use crate::types::YearlyFeeDatum;

const fn datum(year: FeeCalculationYear, average_fee_usd: f64) -> YearlyFeeDatum {
    YearlyFeeDatum {
        year,
        average_fee_usd,
    }
}

// Bitcoin: historical average transaction fees
const BITCOIN_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, 1.0),
    datum(2021, 20.0),
    datum(2022, 1.9),
    datum(2023, 2.5),
    datum(2024, 7.0),
    datum(2025, 0.62),
];

// Ethereum: historical average gas fees
const ETHEREUM_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, 0.15),
    datum(2021, 20.0),
    datum(2022, 2.5),
    datum(2023, 4.0),
    datum(2024, 2.0),
    datum(2025, 1.8),
];

const SOLANA_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, 0.00025),
    datum(2021, 0.00025),
    datum(2022, 0.00025),
    datum(2023, 0.00020),
    datum(2024, 0.00030),
    datum(2025, 0.00093),
];

const BNB_CHAIN_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, 0.05),
    datum(2021, 0.50),
    datum(2022, 0.30),
    datum(2023, 0.15),
    datum(2024, 0.10),
    datum(2025, 0.08),
];

const POLKADOT_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, 0.03),
    datum(2021, 0.10),
    datum(2022, 0.05),
    datum(2023, 0.03),
    datum(2024, 0.04),
    datum(2025, 0.03),
];

// Feeless
const HIVE_FEE_HISTORY: [YearlyFeeDatum; 6] = [
    datum(2020, HIVE_TRANSACTION_FEE_USD),
    datum(2021, HIVE_TRANSACTION_FEE_USD),
    datum(2022, HIVE_TRANSACTION_FEE_USD),
    datum(2023, HIVE_TRANSACTION_FEE_USD),
    datum(2024, HIVE_TRANSACTION_FEE_USD),
    datum(2025, HIVE_TRANSACTION_FEE_USD),
];

/// Mapping from blockchain to its chronologically ordered fee history
#[derive(Debug, Clone, Copy)]
pub struct FeeMatrix<'a> {
    histories: &'a [(BlockchainNetwork, &'a [YearlyFeeDatum])],
}

const FEE_HISTORIES: [(BlockchainNetwork, &[YearlyFeeDatum]); 6] = [
    (BlockchainNetwork::Bitcoin, &BITCOIN_FEE_HISTORY),
    (BlockchainNetwork::Ethereum, &ETHEREUM_FEE_HISTORY),
    (BlockchainNetwork::Solana, &SOLANA_FEE_HISTORY),
    (BlockchainNetwork::BnbChain, &BNB_CHAIN_FEE_HISTORY),
    (BlockchainNetwork::Polkadot, &POLKADOT_FEE_HISTORY),
    (BlockchainNetwork::Hive, &HIVE_FEE_HISTORY),
];

/// The fee matrix used by every calculation
pub const BLOCKCHAIN_FEE_MATRIX: FeeMatrix<'static> = FeeMatrix::new(&FEE_HISTORIES);

impl<'a> FeeMatrix<'a> {
    pub const fn new(histories: &'a [(BlockchainNetwork, &'a [YearlyFeeDatum])]) -> Self {
        Self { histories }
    }

    /// Fee history for a blockchain, `None` if the matrix has no row for it
    pub fn history(&self, blockchain: BlockchainNetwork) -> Option<&'a [YearlyFeeDatum]> {
        self.histories
            .iter()
            .find(|(network, _)| *network == blockchain)
            .map(|(_, history)| *history)
    }

    /// Average fee for a blockchain in a year; absent rather than zero when missing
    pub fn fee_for_year(
        &self,
        blockchain: BlockchainNetwork,
        year: FeeCalculationYear,
    ) -> Option<f64> {
        self.history(blockchain)?
            .iter()
            .find(|datum| datum.year == year)
            .map(|datum| datum.average_fee_usd)
    }

    /// True when every known network has exactly one datum per supported year
    pub fn is_complete(&self) -> bool {
        BlockchainNetwork::ALL.iter().all(|network| {
            self.history(*network).is_some_and(|history| {
                history.len() == VALID_CALCULATION_YEARS.len()
                    && VALID_CALCULATION_YEARS
                        .iter()
                        .all(|year| history.iter().filter(|d| d.year == *year).count() == 1)
            })
        })
    }

    /// Networks with a row in this matrix, in insertion order
    pub fn networks(&self) -> impl Iterator<Item = BlockchainNetwork> + 'a {
        self.histories.iter().map(|(network, _)| *network)
    }
}

/// Retrieves fee history for a specific blockchain from the built-in matrix
pub fn fee_history_for_blockchain(
    blockchain: BlockchainNetwork,
) -> Option<&'static [YearlyFeeDatum]> {
    BLOCKCHAIN_FEE_MATRIX.history(blockchain)
}

/// Retrieves the average fee for a blockchain and year from the built-in matrix
pub fn fee_for_year(blockchain: BlockchainNetwork, year: FeeCalculationYear) -> Option<f64> {
    BLOCKCHAIN_FEE_MATRIX.fee_for_year(blockchain, year)
}
