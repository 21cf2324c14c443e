//! Derived metrics over normalized feed records. Everything here is a pure
//! function of its inputs: no I/O, no shared state, deterministic given the
//! same upstream data.

pub mod score;
pub mod trend;

pub use score::{
    diversification_ratio, platform_strength, HealthCategory, HealthScore, ProtocolStats,
    ProtocolSummary, TvlCategory,
};
pub use trend::{percent_change, TrendSummary};
