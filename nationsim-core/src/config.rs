use crate::modifiers::ModifierTable;
use serde::{Deserialize, Serialize};

/// Constants of the growth model.
///
/// These were process-wide constants in earlier balance passes; keeping
/// them in a config struct lets tests pin or distort them per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Baseline yearly growth rate, shared by population and GDP (1%).
    pub base_rate: f64,
    /// How strongly the current HDI lifts population growth.
    pub pop_hdi_weight: f64,
    /// How strongly the current HDI lifts GDP growth.
    pub gdp_hdi_weight: f64,
    /// GDP-per-capita scale of the saturating HDI curve. Around this
    /// value the curve passes ~0.88; far above it, HDI flattens out
    /// toward 1 instead of blowing past it.
    pub hdi_scale: f64,
    /// Governance modifier tables.
    pub modifiers: ModifierTable,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_rate: 0.01,
            pop_hdi_weight: 0.005,
            gdp_hdi_weight: 0.02,
            hdi_scale: 50_000.0,
            modifiers: ModifierTable::default(),
        }
    }
}

/// Configuration for one global turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnConfig {
    /// Cap on concurrent per-nation updates (0 = one worker per core).
    ///
    /// The updates themselves are embarrassingly parallel; the cap
    /// exists for stores backed by a rate-limited external service.
    pub concurrency: usize,
    pub growth: GrowthConfig,
}
