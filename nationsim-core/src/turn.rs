//! The turn orchestrator: every nation, one turn, one summary.
//!
//! Per-nation updates are independent (one read, one pure computation,
//! one write), so the batch fans out across a rayon pool sized by
//! [`TurnConfig::concurrency`]. Failures are per-record and enumerable
//! after the run; only a failed `list` aborts the turn.

use crate::config::TurnConfig;
use crate::growth;
use crate::store::{RecordStore, StoreError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

/// Why a whole turn could not run at all.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The store could not enumerate ids: there is nothing safe to
    /// iterate, so the turn reports zero work instead of guessing.
    #[error("failed to enumerate nation records: {0}")]
    ListFailed(#[source] StoreError),
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// One nation that failed during a turn, with the underlying reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnFailure {
    pub id: String,
    pub reason: String,
}

/// Accounting for one global turn.
///
/// `failed` preserves store list order. A nation is *skipped* only when
/// it was listed but no longer resolves; everything else that goes wrong
/// lands in `failed`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: Vec<TurnFailure>,
}

enum Outcome {
    Processed,
    Skipped,
    Failed(TurnFailure),
}

/// Run one global turn: advance every nation in the store by one tick.
///
/// Calling this twice is two turns, not a repeat of one: stats move
/// again. What *is* guaranteed across repeated runs is safety, never a
/// partially written record and never a panic from a bad sibling.
#[instrument(skip_all, name = "global_turn")]
pub fn run_global_turn<S: RecordStore>(
    store: &S,
    config: &TurnConfig,
) -> Result<TurnSummary, TurnError> {
    let ids = store.list().map_err(TurnError::ListFailed)?;
    log::info!("starting global turn over {} nations", ids.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.concurrency)
        .build()?;
    let outcomes: Vec<Outcome> = pool.install(|| {
        ids.par_iter()
            .map(|id| advance_one(store, id, config))
            .collect()
    });

    let mut summary = TurnSummary::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Processed => summary.processed += 1,
            Outcome::Skipped => summary.skipped += 1,
            Outcome::Failed(failure) => {
                log::warn!("nation '{}' failed this turn: {}", failure.id, failure.reason);
                summary.failed.push(failure);
            }
        }
    }
    log::info!(
        "global turn complete: {} processed, {} skipped, {} failed",
        summary.processed,
        summary.skipped,
        summary.failed.len()
    );
    Ok(summary)
}

/// One nation's read -> advance -> write pipeline.
fn advance_one<S: RecordStore>(store: &S, id: &str, config: &TurnConfig) -> Outcome {
    let failed = |reason: String| {
        Outcome::Failed(TurnFailure {
            id: id.to_string(),
            reason,
        })
    };

    let nation = match store.read(id) {
        Ok(Some(nation)) => nation,
        Ok(None) => {
            // Vanished (or renamed) between list and read. Not an error
            // for the batch.
            log::debug!("nation '{id}' no longer resolves, skipping");
            return Outcome::Skipped;
        }
        Err(e) => return failed(e.to_string()),
    };

    let next = match growth::advance(&nation, &config.growth) {
        Ok(next) => next,
        Err(e) => return failed(e.to_string()),
    };

    match store.write(id, &next) {
        Ok(()) => {
            log::trace!(
                "nation '{id}': population {} -> {}, hdi {:.3} -> {:.3}",
                nation.stats.population,
                next.stats.population,
                nation.stats.hdi,
                next.stats.hdi
            );
            Outcome::Processed
        }
        Err(e) => failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NationRecord;
    use crate::store::MemoryStore;
    use crate::testing::NationBuilder;

    /// Wraps a store and lies about what exists, or refuses writes.
    struct UnreliableStore {
        inner: MemoryStore,
        phantom_ids: Vec<String>,
        fail_writes: bool,
        fail_list: bool,
    }

    impl UnreliableStore {
        fn wrapping(inner: MemoryStore) -> Self {
            Self {
                inner,
                phantom_ids: Vec::new(),
                fail_writes: false,
                fail_list: false,
            }
        }
    }

    impl RecordStore for UnreliableStore {
        fn list(&self) -> Result<Vec<String>, StoreError> {
            if self.fail_list {
                return Err(StoreError::Backend("list offline".to_string()));
            }
            let mut ids = self.inner.list()?;
            ids.extend(self.phantom_ids.iter().cloned());
            Ok(ids)
        }

        fn read(&self, id: &str) -> Result<Option<NationRecord>, StoreError> {
            self.inner.read(id)
        }

        fn write(&self, id: &str, record: &NationRecord) -> Result<(), StoreError> {
            if self.fail_writes {
                return Err(StoreError::Backend("write refused".to_string()));
            }
            self.inner.write(id, record)
        }
    }

    fn seeded_store(names: &[&str]) -> MemoryStore {
        let store = MemoryStore::new();
        for name in names {
            store.insert(NationBuilder::new(name).build());
        }
        store
    }

    #[test]
    fn test_turn_processes_every_nation() {
        let store = seeded_store(&["Atlantis", "Borduria", "Syldavia"]);

        let summary = run_global_turn(&store, &TurnConfig::default()).unwrap();

        assert_eq!(summary.processed, 3);
        assert_eq!(summary.skipped, 0);
        assert!(summary.failed.is_empty());
        // Baseline 1M at Democracy rates grows by 1.26% -> 1_012_600.
        let atlantis = store.read("atlantis").unwrap().unwrap();
        assert_eq!(atlantis.stats.population, 1_012_600);
    }

    #[test]
    fn test_vanished_record_is_skipped_not_failed() {
        let mut store = UnreliableStore::wrapping(seeded_store(&["Atlantis"]));
        store.phantom_ids.push("ghost".to_string());

        let summary = run_global_turn(&store, &TurnConfig::default()).unwrap();

        assert_eq!(summary.processed, 1);
        assert_eq!(summary.skipped, 1);
        assert!(summary.failed.is_empty());
    }

    #[test]
    fn test_malformed_record_fails_alone() {
        let store = seeded_store(&["Atlantis", "Borduria"]);
        store.insert(NationBuilder::new("Ghost Town").stats(0, 1_000.0, 0.5).build());

        let summary = run_global_turn(&store, &TurnConfig::default()).unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].id, "ghost_town");
        // The malformed record itself is untouched.
        let ghost = store.read("ghost_town").unwrap().unwrap();
        assert_eq!(ghost.stats.population, 0);
    }

    #[test]
    fn test_write_failures_do_not_abort_the_batch() {
        let mut store = UnreliableStore::wrapping(seeded_store(&["Atlantis", "Borduria", "Syldavia"]));
        store.fail_writes = true;

        let summary = run_global_turn(&store, &TurnConfig::default()).unwrap();

        assert_eq!(summary.processed, 0);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed.len(), 3);
        // List order is preserved in the failure report.
        let ids: Vec<&str> = summary.failed.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["atlantis", "borduria", "syldavia"]);
        assert!(summary.failed[0].reason.contains("write refused"));
    }

    #[test]
    fn test_list_failure_is_batch_fatal() {
        let mut store = UnreliableStore::wrapping(seeded_store(&["Atlantis"]));
        store.fail_list = true;

        let result = run_global_turn(&store, &TurnConfig::default());

        assert!(matches!(result, Err(TurnError::ListFailed(_))));
        // Nothing was touched.
        let atlantis = store.inner.read("atlantis").unwrap().unwrap();
        assert_eq!(atlantis.stats.population, 1_000_000);
    }

    #[test]
    fn test_second_turn_is_safe_but_not_a_noop() {
        let store = seeded_store(&["Atlantis"]);
        let config = TurnConfig::default();

        run_global_turn(&store, &config).unwrap();
        let after_one = store.read("atlantis").unwrap().unwrap();

        let summary = run_global_turn(&store, &config).unwrap();
        let after_two = store.read("atlantis").unwrap().unwrap();

        // Safe to repeat: no crash, record still well-formed.
        assert_eq!(summary.processed, 1);
        assert!((0.0..=1.0).contains(&after_two.stats.hdi));
        // But two turns have passed: stats moved again.
        assert!(after_two.stats.population > after_one.stats.population);
        assert!(after_two.stats.gdp > after_one.stats.gdp);
    }

    #[test]
    fn test_capped_and_uncapped_turns_agree() {
        // Same world, capped vs uncapped, must land on identical state.
        let capped = seeded_store(&["Atlantis", "Borduria", "Syldavia", "Zubrowka"]);
        let uncapped = seeded_store(&["Atlantis", "Borduria", "Syldavia", "Zubrowka"]);

        let mut config = TurnConfig::default();
        config.concurrency = 1;
        run_global_turn(&capped, &config).unwrap();
        run_global_turn(&uncapped, &TurnConfig::default()).unwrap();

        for id in capped.list().unwrap() {
            assert_eq!(
                capped.read(&id).unwrap().unwrap().stats,
                uncapped.read(&id).unwrap().unwrap().stats
            );
        }
    }
}
