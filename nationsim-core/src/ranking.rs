//! Global ranking: order the world's nations by development.

use crate::record::NationRecord;
use crate::store::{RecordStore, StoreError};

/// Sort nations by HDI, best first, name as the tie-break.
pub fn rank_by_hdi(mut nations: Vec<NationRecord>) -> Vec<NationRecord> {
    nations.sort_by(|a, b| {
        b.stats
            .hdi
            .total_cmp(&a.stats.hdi)
            .then_with(|| a.name.cmp(&b.name))
    });
    nations
}

/// Read every listed record, dropping the ones that no longer resolve or
/// fail to parse. A partially broken store still yields a ranking.
pub fn load_all<S: RecordStore>(store: &S) -> Result<Vec<NationRecord>, StoreError> {
    let mut nations = Vec::new();
    for id in store.list()? {
        match store.read(&id) {
            Ok(Some(nation)) => nations.push(nation),
            Ok(None) => log::debug!("nation '{id}' vanished during ranking load"),
            Err(e) => log::warn!("dropping unreadable nation '{id}' from ranking: {e}"),
        }
    }
    Ok(nations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::testing::NationBuilder;

    #[test]
    fn test_ranking_orders_by_hdi_descending() {
        let nations = vec![
            NationBuilder::new("Middling").stats(1_000, 1_000.0, 0.5).build(),
            NationBuilder::new("Thriving").stats(1_000, 1_000.0, 0.9).build(),
            NationBuilder::new("Struggling").stats(1_000, 1_000.0, 0.2).build(),
        ];

        let ranked = rank_by_hdi(nations);
        let names: Vec<&str> = ranked.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Thriving", "Middling", "Struggling"]);
    }

    #[test]
    fn test_ranking_tie_breaks_on_name() {
        let nations = vec![
            NationBuilder::new("Borduria").stats(1_000, 1_000.0, 0.5).build(),
            NationBuilder::new("Atlantis").stats(1_000, 1_000.0, 0.5).build(),
        ];

        let ranked = rank_by_hdi(nations);
        assert_eq!(ranked[0].name, "Atlantis");
    }

    #[test]
    fn test_load_all_reads_every_record() {
        let store = MemoryStore::new();
        store.insert(NationBuilder::new("Atlantis").build());
        store.insert(NationBuilder::new("Borduria").build());

        let nations = load_all(&store).unwrap();
        assert_eq!(nations.len(), 2);
    }
}
