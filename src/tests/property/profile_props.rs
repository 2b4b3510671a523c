//! Property-based tests for badge unlocks and profile persistence
//!
//! Tests invariants:
//! - Final attributes do not depend on unlock order
//! - Repeating an unlock changes nothing
//! - The log grows by exactly one entry per new unlock
//! - Saving and loading preserves attributes, unlocks and the log

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use proptest::sample::subsequence;

use crate::core::badge::BadgeCatalog;
use crate::core::profile::{baseline_attributes, LogEntry, Profile};
use crate::core::storage::ProfileStore;

// ============================================================================
// Strategies
// ============================================================================

fn all_ids() -> Vec<&'static str> {
    BadgeCatalog::builtin().list_all().iter().map(|b| b.id).collect()
}

/// Any subset of the built-in badge ids, in random order.
fn arb_unlock_order() -> impl Strategy<Value = Vec<&'static str>> {
    let ids = all_ids();
    let len = ids.len();
    subsequence(ids, 0..=len).prop_shuffle()
}

/// The same subset in two independent orders.
fn arb_two_orders() -> impl Strategy<Value = (Vec<&'static str>, Vec<&'static str>)> {
    let ids = all_ids();
    let len = ids.len();
    subsequence(ids, 0..=len)
        .prop_flat_map(|subset| (Just(subset.clone()).prop_shuffle(), Just(subset).prop_shuffle()))
}

fn day(offset: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset as i64)
}

fn unlock_all(catalog: &BadgeCatalog, ids: &[&str]) -> Profile {
    let mut profile = Profile::create("Prop", "1990-01-01").unwrap();
    for (i, id) in ids.iter().enumerate() {
        let _ = profile.unlock_badge(catalog.lookup(id).unwrap(), Some(day(i)));
    }
    profile
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: attributes are the baseline plus the bonuses of every
    /// unlocked badge, whatever the unlock order.
    #[test]
    fn prop_attributes_order_independent((first, second) in arb_two_orders()) {
        let catalog = BadgeCatalog::builtin();
        let a = unlock_all(&catalog, &first);
        let b = unlock_all(&catalog, &second);
        prop_assert_eq!(a.attributes(), b.attributes());

        let mut expected = baseline_attributes();
        for id in &first {
            for (attr, delta) in catalog.lookup(id).unwrap().bonuses {
                *expected.get_mut(*attr).unwrap() += delta;
            }
        }
        prop_assert_eq!(a.attributes(), &expected);
    }

    /// Property: a second unlock of any badge is a no-op.
    #[test]
    fn prop_duplicate_unlock_is_noop(ids in arb_unlock_order(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!ids.is_empty());
        let catalog = BadgeCatalog::builtin();
        let mut profile = unlock_all(&catalog, &ids);
        let before = profile.clone();

        let id = ids[pick.index(ids.len())];
        let outcome = profile.unlock_badge(catalog.lookup(id).unwrap(), Some(day(500)));
        prop_assert!(!outcome.applied);
        prop_assert_eq!(profile, before);
    }

    /// Property: each new unlock prepends exactly one log entry.
    #[test]
    fn prop_log_grows_once_per_unlock(ids in arb_unlock_order()) {
        let catalog = BadgeCatalog::builtin();
        let profile = unlock_all(&catalog, &ids);
        prop_assert_eq!(profile.activity_log().len(), ids.len());
        prop_assert_eq!(profile.unlocked_badges().len(), ids.len());
        if let Some(last) = ids.last() {
            let newest = &profile.activity_log()[0];
            prop_assert_eq!(newest.badge_id.as_deref(), Some(*last));
        }
    }

    /// Property: a save/load cycle keeps everything the card shows.
    #[test]
    fn prop_save_load_preserves_profile(
        ids in arb_unlock_order(),
        notes in prop::collection::vec("[a-zA-Z0-9 ]{1,30}", 0..4)
    ) {
        let catalog = BadgeCatalog::builtin();
        let mut profile = unlock_all(&catalog, &ids);
        for (i, note) in notes.iter().enumerate() {
            profile.add_custom_log_entry_on(day(100 + i), note.clone());
        }

        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("profile.json"));
        store.save(&profile).unwrap();
        let loaded = store.load(&catalog, "other", "2000-01-01").unwrap();

        prop_assert_eq!(loaded.name(), profile.name());
        prop_assert_eq!(loaded.birth_date(), profile.birth_date());
        prop_assert_eq!(loaded.title(), profile.title());
        prop_assert_eq!(loaded.attributes(), profile.attributes());
        prop_assert_eq!(loaded.unlocked_badges(), profile.unlocked_badges());
        let texts = |p: &Profile| p.activity_log().iter().map(LogEntry::plain_text).collect::<Vec<_>>();
        prop_assert_eq!(texts(&loaded), texts(&profile));
    }
}
