//! Property-based tests for paths and check primitives.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use docvalid::{validate, Path, Token, Validate, Validator};
use proptest::prelude::*;

struct Item {
    value: i64,
}

impl Validate for Item {
    fn validate(&self, v: &mut Validator) {
        v.check_int_max("value", self.value, 10);
    }
}

struct Collection {
    items: Vec<Option<Item>>,
}

impl Validate for Collection {
    fn validate(&self, v: &mut Validator) {
        v.check_objects("items", &self.items);
    }
}

prop_compose! {
    fn arbitrary_key()(key in "[a-z~/]{0,6}") -> String {
        key
    }
}

prop_compose! {
    fn arbitrary_bounds()(min in -1000i64..1000, span in 0i64..100) -> (i64, i64) {
        (min, min + span)
    }
}

proptest! {
    #[test]
    fn int_range_accepts_both_bounds((min, max) in arbitrary_bounds()) {
        let mut v = Validator::new();
        prop_assert!(v.check_int_min_max("n", min, min, max));
        prop_assert!(v.check_int_min_max("n", max, min, max));
        prop_assert!(v.is_valid());
    }

    #[test]
    fn int_range_records_at_most_one_error(
        (min, max) in arbitrary_bounds(),
        value in -2000i64..2000,
    ) {
        let mut v = Validator::new();
        let ok = v.check_int_min_max("n", value, min, max);

        prop_assert_eq!(ok, value >= min && value <= max);
        prop_assert_eq!(v.error_count(), usize::from(!ok));
        if value < min {
            prop_assert_eq!(v.errors()[0].code.as_str(), "integerTooSmall");
        } else if value > max {
            prop_assert_eq!(v.errors()[0].code.as_str(), "integerTooLarge");
        }
    }

    #[test]
    fn string_length_range_matches_char_count(
        s in "\\PC{0,20}",
        min in 0usize..10,
        extra in 0usize..10,
    ) {
        let max = min + extra;
        let len = s.chars().count();
        let mut v = Validator::new();

        prop_assert_eq!(v.check_string_length_min_max("s", &s, min, max), len >= min && len <= max);
        prop_assert!(v.error_count() <= 1);
    }

    #[test]
    fn rendered_paths_parse_back(keys in prop::collection::vec(arbitrary_key(), 0..6)) {
        let path: Path = keys.iter().map(Token::from).collect();
        let parsed: Path = path.to_string().parse().unwrap();
        prop_assert_eq!(parsed, path);
    }

    #[test]
    fn parent_undoes_child(
        keys in prop::collection::vec(arbitrary_key(), 0..6),
        index in 0usize..100,
    ) {
        let path: Path = keys.iter().map(Token::from).collect();
        let child = path.child(index);

        prop_assert_eq!(child.len(), path.len() + 1);
        prop_assert_eq!(child.parent(), path);
    }

    #[test]
    fn errors_follow_element_order(
        slots in prop::collection::vec(prop::option::of(0i64..20), 0..12)
    ) {
        let collection = Collection {
            items: slots.iter().map(|slot| slot.map(|value| Item { value })).collect(),
        };

        let expected: Vec<String> = slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| match slot {
                None => Some(format!("/items/{i}")),
                Some(value) if *value > 10 => Some(format!("/items/{i}/value")),
                Some(_) => None,
            })
            .collect();

        let found: Vec<String> = match validate(&collection) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(|e| e.path.to_string()).collect(),
        };

        prop_assert_eq!(found, expected);
    }
}
