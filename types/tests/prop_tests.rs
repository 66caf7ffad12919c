use proptest::prelude::*;

use decree_types::{AccountId, Cycle};

proptest! {
    /// AccountId roundtrip: new -> as_str returns the original string.
    #[test]
    fn account_id_roundtrip(raw in "\\PC{0,64}") {
        let id = AccountId::new(raw.clone());
        prop_assert_eq!(id.as_str(), raw.as_str());
    }

    /// AccountId::is_valid is false exactly for whitespace-only strings.
    #[test]
    fn account_id_validity(raw in "\\PC{0,64}") {
        let id = AccountId::new(raw.clone());
        prop_assert_eq!(id.is_valid(), !raw.trim().is_empty());
    }

    /// AccountId bincode serialization roundtrip.
    #[test]
    fn account_id_bincode_roundtrip(raw in "\\PC{0,64}") {
        let id = AccountId::new(raw);
        let encoded = bincode::serialize(&id).unwrap();
        let decoded: AccountId = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, id);
    }

    /// Cycle ordering agrees with the underlying counter.
    #[test]
    fn cycle_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ca = Cycle::new(a);
        let cb = Cycle::new(b);
        prop_assert_eq!(ca <= cb, a <= b);
        prop_assert_eq!(ca == cb, a == b);
    }

    /// Cycle::next is strictly increasing by one.
    #[test]
    fn cycle_next_increments(n in 0u64..u64::MAX - 1) {
        let cycle = Cycle::new(n);
        prop_assert!(cycle.next() > cycle);
        prop_assert_eq!(cycle.next().as_u64(), n + 1);
    }

    /// Cycle bincode serialization roundtrip.
    #[test]
    fn cycle_bincode_roundtrip(n in 0u64..u64::MAX) {
        let cycle = Cycle::new(n);
        let encoded = bincode::serialize(&cycle).unwrap();
        let decoded: Cycle = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, cycle);
    }
}
