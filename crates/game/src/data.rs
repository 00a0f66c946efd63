//! Source data for galaxies and cryptoids, as supplied by the data layer.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Identity of one data entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoidData {
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    /// Icon file name resolved by the asset source.
    pub filename: String,
}

impl CryptoidData {
    pub fn new(name: &str, symbol: &str, rank: u32) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            rank,
            filename: format!("{}.png", symbol.to_lowercase()),
        }
    }
}

/// A cluster of cryptoids; the first one is the representative body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalaxyData {
    pub name: String,
    pub cryptoids: Vec<CryptoidData>,
}

impl GalaxyData {
    pub fn representative(&self) -> Option<&CryptoidData> {
        self.cryptoids.first()
    }
}

/// Every galaxy in the cryptoverse.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub galaxies: Vec<GalaxyData>,
}

impl Catalog {
    /// Load a RON catalog file. Galaxies without cryptoids are dropped.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let mut catalog: Catalog =
            ron::from_str(&data).with_context(|| format!("parsing catalog {}", path.display()))?;
        catalog.galaxies.retain(|g| {
            if g.cryptoids.is_empty() {
                log::warn!("Galaxy {} has no cryptoids, skipping", g.name);
            }
            !g.cryptoids.is_empty()
        });
        Ok(catalog)
    }

    pub fn total_cryptoids(&self) -> usize {
        self.galaxies.iter().map(|g| g.cryptoids.len()).sum()
    }

    /// A small catalog for running without a data layer.
    pub fn builtin() -> Self {
        let galaxy = |name: &str, members: &[(&str, &str, u32)]| GalaxyData {
            name: name.to_string(),
            cryptoids: members
                .iter()
                .map(|(n, s, r)| CryptoidData::new(n, s, *r))
                .collect(),
        };
        Self {
            galaxies: vec![
                galaxy(
                    "Proof of Work",
                    &[("Bitcoin", "BTC", 1), ("Litecoin", "LTC", 20), ("Monero", "XMR", 28), ("Dogecoin", "DOGE", 9)],
                ),
                galaxy(
                    "Smart Contracts",
                    &[("Ethereum", "ETH", 2), ("Cardano", "ADA", 8), ("Solana", "SOL", 5), ("Avalanche", "AVAX", 12), ("Tron", "TRX", 10)],
                ),
                galaxy(
                    "Stablecoins",
                    &[("Tether", "USDT", 3), ("USD Coin", "USDC", 6), ("Dai", "DAI", 24)],
                ),
                galaxy(
                    "Exchange Tokens",
                    &[("BNB", "BNB", 4), ("Cronos", "CRO", 30), ("OKB", "OKB", 33)],
                ),
            ],
        }
    }
}
