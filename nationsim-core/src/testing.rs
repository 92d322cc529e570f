//! Test helpers: fluent construction of nation records.

use crate::record::{derive_nation_id, GovernmentType, NationRecord, NationStats};
use serde_json::Value;

pub struct NationBuilder {
    record: NationRecord,
}

impl NationBuilder {
    /// A Democracy with baseline statistics and an id derived from `name`.
    pub fn new(name: &str) -> Self {
        Self {
            record: NationRecord {
                id: derive_nation_id(name),
                name: name.to_string(),
                capital: "Capital City".to_string(),
                government: GovernmentType::Democracy,
                stats: NationStats::baseline(),
                motto: None,
                owner: None,
                founded: None,
                extra: serde_json::Map::new(),
            },
        }
    }

    pub fn government(mut self, government: GovernmentType) -> Self {
        self.record.government = government;
        self
    }

    pub fn capital(mut self, capital: &str) -> Self {
        self.record.capital = capital.to_string();
        self
    }

    pub fn owner(mut self, owner: &str) -> Self {
        self.record.owner = Some(owner.to_string());
        self
    }

    pub fn stats(mut self, population: u64, gdp: f64, hdi: f64) -> Self {
        self.record.stats = NationStats {
            population,
            gdp,
            hdi,
        };
        self
    }

    /// Attach an opaque payload field.
    pub fn extra(mut self, key: &str, value: Value) -> Self {
        self.record.extra.insert(key.to_string(), value);
        self
    }

    pub fn build(self) -> NationRecord {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let nation = NationBuilder::new("New Atlantis").build();
        assert_eq!(nation.id, "new_atlantis");
        assert_eq!(nation.government, GovernmentType::Democracy);
        assert_eq!(nation.stats, NationStats::baseline());
    }

    #[test]
    fn test_builder_overrides() {
        let nation = NationBuilder::new("Borduria")
            .government(GovernmentType::Dictatorship)
            .capital("Szohod")
            .owner("kurvi-tasch")
            .stats(2_000_000, 3_000_000_000.0, 0.41)
            .extra("motto_translated", serde_json::json!(false))
            .build();

        assert_eq!(nation.capital, "Szohod");
        assert_eq!(nation.owner.as_deref(), Some("kurvi-tasch"));
        assert_eq!(nation.stats.hdi, 0.41);
        assert_eq!(nation.extra.len(), 1);
    }
}
