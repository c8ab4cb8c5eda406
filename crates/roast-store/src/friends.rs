//! CRUD operations for [`Friend`] records.

use crate::collections::Friends;
use crate::error::Result;
use crate::events::StoreEvent;
use crate::models::Friend;
use crate::store::RoastStore;

impl RoastStore {
    pub fn friends(&self) -> Vec<Friend> {
        self.read::<Friends>()
    }

    /// Append a friend unless one with the same name (ignoring case) exists.
    ///
    /// Returns `true` if a record was added.  `friends-changed` is only
    /// emitted in that case.
    pub fn add_friend(&self, name: &str) -> Result<bool> {
        let mut friends = self.load::<Friends>()?;
        let wanted = name.to_lowercase();
        if friends.iter().any(|f| f.name.to_lowercase() == wanted) {
            tracing::debug!(name, "friend already present");
            return Ok(false);
        }

        let friend = Friend {
            name: name.to_string(),
            id: self.next_id(friends.iter().map(|f| f.id)),
            added_at: self.now(),
        };
        friends.push(friend);

        self.write::<Friends>(&friends)?;
        tracing::debug!(name, total = friends.len(), "friend added");
        self.emit(StoreEvent::FriendsChanged);
        Ok(true)
    }

    /// Remove every friend whose name equals `name` exactly.
    ///
    /// The list is written back and `friends-changed` emitted even when
    /// nothing matched.  Returns the number of removed records.
    pub fn remove_friend(&self, name: &str) -> Result<usize> {
        let mut friends = self.load::<Friends>()?;
        let before = friends.len();
        friends.retain(|f| f.name != name);
        let removed = before - friends.len();

        self.write::<Friends>(&friends)?;
        tracing::debug!(name, removed, "friend removed");
        self.emit(StoreEvent::FriendsChanged);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::backend::MemoryBackend;
    use crate::events::StoreEvent;
    use crate::store::test_support::{start, store, FlakyBackend};
    use crate::store::RoastStore;

    const TWO_FRIENDS: &str = r#"[
        {"name":"Ana","id":1,"addedAt":"2024-06-10T06:13:20Z"},
        {"name":"Ben","id":2,"addedAt":"2024-06-10T06:13:21Z"}
    ]"#;

    fn names(store: &RoastStore) -> Vec<String> {
        store.friends().into_iter().map(|f| f.name).collect()
    }

    #[test]
    fn duplicate_differing_only_in_case_is_ignored() {
        let (store, _) = store();
        assert!(store.add_friend("Ana").unwrap());
        assert!(!store.add_friend("ANA").unwrap());
        assert!(!store.add_friend("ana").unwrap());

        let friends = store.friends();
        assert_eq!(friends.len(), 1);
        assert_eq!(friends[0].name, "Ana");
        assert_eq!(friends[0].added_at, start());
    }

    #[test]
    fn ids_differ_when_added_in_the_same_millisecond() {
        let (store, _) = store();
        store.add_friend("Ana").unwrap();
        store.add_friend("Ben").unwrap();
        let friends = store.friends();
        assert_ne!(friends[0].id, friends[1].id);
    }

    #[test]
    fn remove_is_case_sensitive() {
        let (store, _) = store();
        store.add_friend("Ana").unwrap();
        assert_eq!(store.remove_friend("ana").unwrap(), 0);
        assert_eq!(store.friends().len(), 1);
        assert_eq!(store.remove_friend("Ana").unwrap(), 1);
        assert!(store.friends().is_empty());
    }

    #[test]
    fn events_follow_successful_mutations() {
        let (store, _) = store();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _sub = store.events().subscribe(StoreEvent::FriendsChanged, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_friend("Ana").unwrap();
        store.add_friend("ana").unwrap();
        store.remove_friend("Nobody").unwrap();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn remove_drops_every_exact_match() {
        let store = RoastStore::new(MemoryBackend::with_entries([(
            "friends_list",
            r#"[
                {"name":"Ana","id":1,"addedAt":"2024-06-10T06:13:20Z"},
                {"name":"ana","id":2,"addedAt":"2024-06-10T06:13:21Z"},
                {"name":"Ana","id":3,"addedAt":"2024-06-10T06:13:22Z"}
            ]"#,
        )]));
        assert_eq!(store.remove_friend("Ana").unwrap(), 2);
        assert_eq!(names(&store), vec!["ana"]);
    }

    #[test]
    fn interrupted_read_does_not_overwrite_friends() {
        let backend = FlakyBackend::new(MemoryBackend::with_entries([("friends_list", TWO_FRIENDS)]));
        let store = RoastStore::new(Arc::clone(&backend));

        backend.fail_reads(1);
        assert!(store.add_friend("Cy").is_err());
        assert_eq!(names(&store), vec!["Ana", "Ben"]);

        backend.fail_reads(1);
        assert!(store.remove_friend("Ana").is_err());
        assert_eq!(names(&store), vec!["Ana", "Ben"]);

        assert!(store.add_friend("Cy").unwrap());
        assert_eq!(names(&store), vec!["Ana", "Ben", "Cy"]);
    }
}
