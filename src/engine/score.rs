use serde::{Deserialize, Serialize};

use crate::models::ProtocolRecord;

/// Share of a protocol's total TVL attributable to the target chain, as a
/// percentage. A zero or empty total means no other chain is known, which
/// the contract treats as full concentration on the target chain (100),
/// not as an error or zero.
pub fn diversification_ratio(target_tvl: f64, total_tvl: f64) -> f64 {
    if total_tvl > 0.0 {
        target_tvl / total_tvl * 100.0
    } else {
        // No TVL reported anywhere else: 100% concentrated here.
        100.0
    }
}

/// Composite identity score in [0, 100]: a fixed point value per present
/// signal. Twitter, GitHub, CoinGecko id and CoinMarketCap id are worth 20
/// each; multi-chain deployment is worth 20, single-chain 10.
pub fn platform_strength(record: &ProtocolRecord) -> u32 {
    let mut score = 0;
    if record.twitter.is_some() {
        score += 20;
    }
    if record.github.is_some() {
        score += 20;
    }
    if record.gecko_id.is_some() {
        score += 20;
    }
    if record.cmc_id.is_some() {
        score += 20;
    }
    score += if record.is_multi_chain() { 20 } else { 10 };
    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCategory {
    Low,
    Medium,
    High,
}

impl HealthCategory {
    /// Three-bucket step function, inclusive on the lower bound of each
    /// bucket: `>= 80` HIGH, `>= 50` MEDIUM, below LOW.
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            HealthCategory::High
        } else if score >= 50 {
            HealthCategory::Medium
        } else {
            HealthCategory::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthCategory::Low => "LOW",
            HealthCategory::Medium => "MEDIUM",
            HealthCategory::High => "HIGH",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            HealthCategory::Low => "🔴",
            HealthCategory::Medium => "🟡",
            HealthCategory::High => "🟢",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TvlCategory {
    Small,
    Medium,
    Large,
}

impl TvlCategory {
    pub fn from_tvl(tvl: f64) -> Self {
        if tvl < 100_000.0 {
            TvlCategory::Small
        } else if tvl < 1_000_000.0 {
            TvlCategory::Medium
        } else {
            TvlCategory::Large
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TvlCategory::Small => "SMALL",
            TvlCategory::Medium => "MEDIUM",
            TvlCategory::Large => "LARGE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SocialPresence {
    pub has_twitter: bool,
    pub has_github: bool,
    pub platform_count: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MarketPresence {
    pub has_coingecko: bool,
    pub has_cmc: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthScore {
    pub score: u32,
    pub category: HealthCategory,
}

impl HealthScore {
    pub fn from_score(score: u32) -> Self {
        Self {
            score,
            category: HealthCategory::from_score(score),
        }
    }
}

/// Full per-protocol statistics over a normalized record.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolStats {
    pub name: String,
    pub target_tvl: f64,
    pub chain_diversification: f64,
    pub social: SocialPresence,
    pub market: MarketPresence,
    pub tvl_category: TvlCategory,
    pub is_multi_chain: bool,
    pub platform_strength: u32,
}

impl ProtocolStats {
    pub fn derive(record: &ProtocolRecord) -> Self {
        let target_tvl = record.target_tvl();
        Self {
            name: record.name.clone(),
            target_tvl,
            chain_diversification: diversification_ratio(target_tvl, record.total_tvl),
            social: SocialPresence {
                has_twitter: record.twitter.is_some(),
                has_github: record.github.is_some(),
                platform_count: record.platform_count(),
            },
            market: MarketPresence {
                has_coingecko: record.gecko_id.is_some(),
                has_cmc: record.cmc_id.is_some(),
            },
            tvl_category: TvlCategory::from_tvl(target_tvl),
            is_multi_chain: record.is_multi_chain(),
            platform_strength: platform_strength(record),
        }
    }
}

/// Condensed health view rendered by the summary tools.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolSummary {
    pub name: String,
    pub tvl: f64,
    pub health: HealthScore,
    /// Diversification ratio rounded to a whole percent.
    pub network_share: u32,
    pub social: SocialPresence,
    pub is_multi_chain: bool,
}

impl ProtocolSummary {
    pub fn derive(record: &ProtocolRecord) -> Self {
        let stats = ProtocolStats::derive(record);
        Self {
            name: stats.name,
            tvl: stats.target_tvl,
            health: HealthScore::from_score(stats.platform_strength),
            network_share: stats.chain_diversification.round() as u32,
            social: stats.social,
            is_multi_chain: stats.is_multi_chain,
        }
    }
}
