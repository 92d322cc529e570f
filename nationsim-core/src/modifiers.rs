//! Governance modifier tables.
//!
//! Growth multipliers and the HDI penalty are lookups keyed by
//! [`GovernmentType`] with a guaranteed fallback entry, so adding a
//! government type can never produce an unhandled case.

use crate::record::GovernmentType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-government multipliers on the baseline growth rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthModifiers {
    pub gdp_mod: f64,
    pub pop_mod: f64,
}

impl GrowthModifiers {
    /// The fallback entry: no adjustment in either direction.
    pub const NEUTRAL: GrowthModifiers = GrowthModifiers {
        gdp_mod: 1.0,
        pop_mod: 1.0,
    };
}

/// Lookup of governance effects on growth and development.
///
/// Both tables fall back to a neutral entry for governments they do not
/// list; an unrecognized government type is never an error and never
/// skips a nation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierTable {
    growth: HashMap<GovernmentType, GrowthModifiers>,
    /// Multiplier applied to the raw HDI before the final clamp.
    hdi_penalty: HashMap<GovernmentType, f64>,
    fallback: GrowthModifiers,
}

impl ModifierTable {
    /// Growth multipliers for a government, falling back to neutral.
    pub fn growth(&self, government: &GovernmentType) -> GrowthModifiers {
        self.growth.get(government).copied().unwrap_or(self.fallback)
    }

    /// HDI multiplier for a government, 1.0 unless an entry says otherwise.
    pub fn hdi_penalty(&self, government: &GovernmentType) -> f64 {
        self.hdi_penalty.get(government).copied().unwrap_or(1.0)
    }

    /// Insert or replace the growth entry for a government type.
    pub fn set_growth(&mut self, government: GovernmentType, modifiers: GrowthModifiers) {
        self.growth.insert(government, modifiers);
    }

    /// Insert or replace the HDI multiplier for a government type.
    pub fn set_hdi_penalty(&mut self, government: GovernmentType, multiplier: f64) {
        self.hdi_penalty.insert(government, multiplier);
    }

    /// A table with no entries at all: every government reads as neutral.
    pub fn neutral() -> Self {
        Self {
            growth: HashMap::new(),
            hdi_penalty: HashMap::new(),
            fallback: GrowthModifiers::NEUTRAL,
        }
    }
}

impl Default for ModifierTable {
    /// The shipped balance table.
    ///
    /// Democracy: stable economic growth. Monarchy: slower economy,
    /// faster population. Dictatorship: forced economic growth, shrinking
    /// population, and a social penalty on development.
    fn default() -> Self {
        let mut table = Self::neutral();
        table.set_growth(
            GovernmentType::Democracy,
            GrowthModifiers {
                gdp_mod: 1.05,
                pop_mod: 1.01,
            },
        );
        table.set_growth(
            GovernmentType::Monarchy,
            GrowthModifiers {
                gdp_mod: 0.95,
                pop_mod: 1.02,
            },
        );
        table.set_growth(
            GovernmentType::Dictatorship,
            GrowthModifiers {
                gdp_mod: 1.10,
                pop_mod: 0.98,
            },
        );
        table.set_hdi_penalty(GovernmentType::Dictatorship, 0.95);
        table
    }
}
