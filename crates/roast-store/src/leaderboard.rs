//! The roast tally.

use crate::collections::Leaderboard;
use crate::error::Result;
use crate::events::StoreEvent;
use crate::models::{LeaderboardEntry, Tally};
use crate::store::RoastStore;

impl RoastStore {
    pub fn leaderboard(&self) -> Tally {
        self.read::<Leaderboard>()
    }

    /// Count one roast generated for `target`.  Returns the new count.
    pub fn add_roast(&self, target: &str) -> Result<u64> {
        let mut tally = self.load::<Leaderboard>()?;
        let count = tally.entry(target.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        let count = *count;

        self.write::<Leaderboard>(&tally)?;
        tracing::debug!(name = target, count, "roast counted");
        self.emit(StoreEvent::RoastGenerated);
        Ok(count)
    }

    /// Tally rows, most roasted first; ties by name.
    pub fn ranked_leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<LeaderboardEntry> = self
            .leaderboard()
            .into_iter()
            .map(|(name, count)| LeaderboardEntry { name, count })
            .collect();
        entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        entries
    }

    /// Drop the whole tally.  Emits `roast-generated` so rankings refresh.
    pub fn clear_leaderboard(&self) -> Result<()> {
        self.clear::<Leaderboard>()?;
        tracing::info!("leaderboard cleared");
        self.emit(StoreEvent::RoastGenerated);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::events::StoreEvent;
    use crate::models::LeaderboardEntry;
    use crate::store::test_support::store;

    #[test]
    fn count_equals_number_of_generations() {
        let (store, _) = store();
        for n in 1..=4 {
            assert_eq!(store.add_roast("Ana").unwrap(), n);
        }
        assert_eq!(store.leaderboard().get("Ana"), Some(&4));
        assert_eq!(store.leaderboard().get("Ben"), None);
    }

    #[test]
    fn ranking_orders_by_count_then_name() {
        let (store, _) = store();
        store.add_roast("Cy").unwrap();
        store.add_roast("Ben").unwrap();
        store.add_roast("Ana").unwrap();
        store.add_roast("Cy").unwrap();

        let ranked = store.ranked_leaderboard();
        let expected = vec![
            LeaderboardEntry { name: "Cy".into(), count: 2 },
            LeaderboardEntry { name: "Ana".into(), count: 1 },
            LeaderboardEntry { name: "Ben".into(), count: 1 },
        ];
        assert_eq!(ranked, expected);
    }

    #[test]
    fn clear_resets_and_notifies() {
        let (store, _) = store();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = store.events().subscribe(StoreEvent::RoastGenerated, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_roast("Ana").unwrap();
        store.clear_leaderboard().unwrap();
        assert!(store.leaderboard().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);

        assert_eq!(store.add_roast("Ana").unwrap(), 1);
    }
}
