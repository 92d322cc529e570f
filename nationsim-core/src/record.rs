//! The nation record: the persisted state unit for one simulated country.
//!
//! The turn engine mutates exactly three fields ([`NationStats`]); every
//! other field, known or unknown, round-trips through a turn unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Government type of a nation.
///
/// An open enumeration: any string deserializes, unrecognized values are
/// carried as [`GovernmentType::Other`] and get neutral growth modifiers.
/// Used only to select a modifier tuple, never to gate behavior.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GovernmentType {
    Democracy,
    Monarchy,
    Dictatorship,
    Other(String),
}

impl GovernmentType {
    pub fn as_str(&self) -> &str {
        match self {
            GovernmentType::Democracy => "Democracy",
            GovernmentType::Monarchy => "Monarchy",
            GovernmentType::Dictatorship => "Dictatorship",
            GovernmentType::Other(name) => name,
        }
    }
}

impl From<String> for GovernmentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Democracy" => GovernmentType::Democracy,
            "Monarchy" => GovernmentType::Monarchy,
            "Dictatorship" => GovernmentType::Dictatorship,
            _ => GovernmentType::Other(value),
        }
    }
}

impl From<GovernmentType> for String {
    fn from(value: GovernmentType) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for GovernmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three statistics recomputed every turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NationStats {
    pub population: u64,
    /// Gross domestic product. Integer-valued after every turn (rounded).
    pub gdp: f64,
    /// Human Development Index, clamped into [0, 1] after every turn.
    pub hdi: f64,
}

impl NationStats {
    /// Statistics every newly founded nation starts with.
    pub fn baseline() -> Self {
        Self {
            population: 1_000_000,
            gdp: 1_000_000_000.0,
            hdi: 0.500,
        }
    }
}

/// Persisted state for one nation.
///
/// Serialized as a flat JSON object keyed by `id` in the record store.
/// Unknown fields land in `extra` and are written back verbatim, so
/// payload the engine knows nothing about (flag URLs, law history)
/// survives a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationRecord {
    /// Stable lowercase identifier, derived once at founding from the
    /// display name. The engine never regenerates it.
    pub id: String,
    /// Display name. Descriptive only; intake always supplies it, but a
    /// minimum-shape record without one still advances.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub capital: String,
    #[serde(rename = "governmentType")]
    pub government: GovernmentType,
    pub stats: NationStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motto: Option<String>,
    /// Handle of the founding player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded: Option<DateTime<Utc>>,
    /// Opaque payload: everything the engine does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NationRecord {
    /// Found a new nation with [`NationStats::baseline`] statistics.
    ///
    /// The id is derived from `name` via [`derive_nation_id`] and is
    /// final from this point on.
    pub fn founded(
        name: &str,
        capital: &str,
        government: GovernmentType,
        founded: DateTime<Utc>,
    ) -> Self {
        Self {
            id: derive_nation_id(name),
            name: name.to_string(),
            capital: capital.to_string(),
            government,
            stats: NationStats::baseline(),
            motto: None,
            owner: None,
            founded: Some(founded),
            extra: Map::new(),
        }
    }
}

/// Derive the stable identifier for a nation from its display name.
///
/// Lowercases, turns whitespace runs into single underscores, and strips
/// everything else that is not ASCII alphanumeric. Called once at
/// founding; existing ids are never re-derived.
pub fn derive_nation_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    for word in name.split_whitespace() {
        if !id.is_empty() {
            id.push('_');
        }
        id.extend(
            word.chars()
                .flat_map(char::to_lowercase)
                .filter(char::is_ascii_alphanumeric),
        );
    }
    // A name made entirely of separators would otherwise leave dangling
    // underscores behind.
    while id.ends_with('_') {
        id.pop();
    }
    id
}
