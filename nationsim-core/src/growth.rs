//! The growth model: one nation, one turn, no I/O.
//!
//! [`advance`] is a pure function from a record and a [`GrowthConfig`] to
//! a new record. It never touches a store, never mutates its input, and
//! is safe to run in parallel across nations.

use crate::config::GrowthConfig;
use crate::record::{NationRecord, NationStats};
use thiserror::Error;

/// Why a single record could not be advanced.
///
/// These fail one nation, never the batch: the orchestrator reports them
/// and moves on.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GrowthError {
    #[error("population must be positive")]
    NonPositivePopulation,
    #[error("gdp must be a finite non-negative number, got {0}")]
    InvalidGdp(f64),
    #[error("hdi must be a finite value in [0, 1], got {0}")]
    InvalidHdi(f64),
}

/// Advance one nation by one turn.
///
/// Returns a new record with `stats` recomputed and every other field
/// copied unchanged. Growth rates:
///
/// ```text
/// pop_rate = base_rate * pop_mod + hdi * pop_hdi_weight
/// gdp_rate = base_rate * gdp_mod + hdi * gdp_hdi_weight
/// hdi'     = clamp(penalty * (0.5 + 0.5 * tanh(gdp_per_capita / hdi_scale)), 0, 1)
/// ```
///
/// Population and GDP are rounded to the nearest integer and floored at
/// zero, so even a contrived negative growth rate cannot drive a
/// statistic negative.
pub fn advance(nation: &NationRecord, config: &GrowthConfig) -> Result<NationRecord, GrowthError> {
    let stats = validate(&nation.stats)?;
    let mods = config.modifiers.growth(&nation.government);

    let pop_rate = config.base_rate * mods.pop_mod + stats.hdi * config.pop_hdi_weight;
    let population = round_floor_zero(stats.population as f64 * (1.0 + pop_rate));

    let gdp_rate = config.base_rate * mods.gdp_mod + stats.hdi * config.gdp_hdi_weight;
    let gdp = (stats.gdp * (1.0 + gdp_rate)).round().max(0.0);

    // A shrinking nation can round down to zero people; development then
    // reads as zero output per head rather than a division by zero.
    let gdp_per_capita = if population == 0 {
        0.0
    } else {
        gdp / population as f64
    };

    let raw_hdi = 0.5 + 0.5 * (gdp_per_capita / config.hdi_scale).tanh();
    let penalized = raw_hdi * config.modifiers.hdi_penalty(&nation.government);
    let hdi = penalized.clamp(0.0, 1.0);

    let mut next = nation.clone();
    next.stats = NationStats {
        population,
        gdp,
        hdi,
    };
    Ok(next)
}

fn validate(stats: &NationStats) -> Result<NationStats, GrowthError> {
    if stats.population == 0 {
        return Err(GrowthError::NonPositivePopulation);
    }
    if !stats.gdp.is_finite() || stats.gdp < 0.0 {
        return Err(GrowthError::InvalidGdp(stats.gdp));
    }
    if !stats.hdi.is_finite() || !(0.0..=1.0).contains(&stats.hdi) {
        return Err(GrowthError::InvalidHdi(stats.hdi));
    }
    Ok(*stats)
}

fn round_floor_zero(value: f64) -> u64 {
    value.round().max(0.0) as u64
}
