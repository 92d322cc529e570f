//! # Nation Simulation Core
//!
//! Deterministic turn engine for a persistent world of nations.
//!
//! Each nation is a flat keyed record of economic and social statistics.
//! A "turn" reads every record from a store, recomputes population, GDP,
//! and the development index from deterministic growth rules, and writes
//! the result back under the same identifier.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ RecordStore  │────▶│ run_global_  │────▶│   advance   │
//! │ (list/read)  │     │ turn (batch) │     │  (pure fn)  │
//! └──────────────┘     └──────┬───────┘     └──────┬──────┘
//!                             │                    │
//!                      ┌──────▼───────┐     ┌──────▼──────┐
//!                      │ TurnSummary  │     │ RecordStore │
//!                      │ (report)     │     │ (write)     │
//!                      └──────────────┘     └─────────────┘
//! ```
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`NationRecord`] | Persisted state for one nation (stats + opaque payload) |
//! | [`advance`] | Pure function: `(record, config) -> record` |
//! | [`RecordStore`] | Storage contract: list / read / write whole records |
//! | [`run_global_turn`] | Batch driver: every nation, one turn, one summary |
//! | [`TurnSummary`] | Processed / skipped / failed accounting for one turn |
//!
//! ## Failure Model
//!
//! Per-nation updates are independent. A record that vanishes between
//! `list` and `read` is skipped; a malformed record or a failed write is
//! reported in the summary without aborting siblings. Only a failed
//! `list` aborts the whole turn, since there is nothing safe to iterate.

pub mod config;
pub mod growth;
pub mod modifiers;
pub mod ranking;
pub mod record;
pub mod store;
pub mod testing;
pub mod turn;

pub use config::{GrowthConfig, TurnConfig};
pub use growth::{advance, GrowthError};
pub use modifiers::{GrowthModifiers, ModifierTable};
pub use ranking::{load_all, rank_by_hdi};
pub use record::{derive_nation_id, GovernmentType, NationRecord, NationStats};
pub use store::{FsStore, MemoryStore, RecordStore, StoreError};
pub use turn::{run_global_turn, TurnError, TurnFailure, TurnSummary};
