use serde::Serialize;
use std::collections::HashMap;

/// Protocol metadata narrowed to a single target chain. Built by the
/// normalizer from a raw [`ProtocolData`](crate::models::ProtocolData);
/// never mutated afterwards.
///
/// `chain_tvl` holds exactly one entry, keyed by the target chain name. A
/// protocol with no deployment on the target chain carries an explicit 0.0
/// there rather than a missing key.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolRecord {
    pub name: String,
    pub chains: Vec<String>,
    pub twitter: Option<String>,
    pub github: Option<HashMap<String, String>>,
    pub gecko_id: Option<String>,
    pub cmc_id: Option<String>,
    pub chain_tvl: HashMap<String, f64>,
    /// TVL summed over every chain of the raw record, kept so the engine can
    /// compute concentration without re-reading the multi-chain shape.
    pub total_tvl: f64,
}

impl ProtocolRecord {
    /// TVL on the target chain this record was narrowed to.
    pub fn target_tvl(&self) -> f64 {
        self.chain_tvl.values().copied().next().unwrap_or(0.0)
    }

    pub fn is_multi_chain(&self) -> bool {
        self.chains.len() > 1
    }

    /// Number of social platforms with a known link (twitter, github).
    pub fn platform_count(&self) -> u32 {
        self.twitter.is_some() as u32 + self.github.is_some() as u32
    }
}
