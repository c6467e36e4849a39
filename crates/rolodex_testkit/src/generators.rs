//! Property-based test generators using proptest.

use proptest::prelude::*;
use rolodex_core::{Record, RecordId};

/// Strategy for names that start with an ASCII letter.
pub fn latin_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z][a-zA-Z '-]{0,15}").expect("Invalid regex")
}

/// Strategy for names made of logographic characters.
pub fn logographic_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[\u{4e00}-\u{9fa5}]{1,4}").expect("Invalid regex")
}

/// Strategy for names that land in the catch-all bucket for other reasons
/// (digits, symbols, accented letters, emoji, the empty name).
pub fn other_name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[0-9][a-z0-9]{0,6}").expect("Invalid regex"),
        prop::string::string_regex("[@#+ ][a-z]{0,6}").expect("Invalid regex"),
        prop::string::string_regex("[éüñ][a-z]{0,6}").expect("Invalid regex"),
        Just("😀 smile".to_string()),
        Just(String::new()),
    ]
}

/// Strategy mixing every kind of name.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => latin_name_strategy(),
        2 => logographic_name_strategy(),
        1 => other_name_strategy(),
        1 => any::<String>(),
    ]
}

/// Strategy for records with random ids.
pub fn record_strategy() -> impl Strategy<Value = Record> {
    (prop::array::uniform16(any::<u8>()), name_strategy())
        .prop_map(|(bytes, name)| Record::new(RecordId::from_bytes(bytes), name))
}

/// Strategy for record sets with distinct ids.
pub fn records_strategy(max: usize) -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(name_strategy(), 0..max).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let mut bytes = [0u8; 16];
                bytes[..8].copy_from_slice(&(i as u64).to_be_bytes());
                Record::new(RecordId::from_bytes(bytes), name)
            })
            .collect()
    })
}

/// Strategy for search queries, including the empty query.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        1 => Just(String::new()),
        4 => prop::string::string_regex("[a-zA-Z]{1,3}").expect("Invalid regex"),
        1 => prop::string::string_regex("[\u{4e00}-\u{9fa5}]").expect("Invalid regex"),
    ]
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::{classify, BucketKey};
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn latin_names_get_letters(name in latin_name_strategy()) {
            prop_assert!(!classify(&name).is_other());
        }

        #[test]
        fn logographic_names_get_other(name in logographic_name_strategy()) {
            prop_assert_eq!(classify(&name), BucketKey::OTHER);
        }

        #[test]
        fn other_names_get_other(name in other_name_strategy()) {
            prop_assert_eq!(classify(&name), BucketKey::OTHER);
        }

        #[test]
        fn record_ids_are_distinct(records in records_strategy(32)) {
            let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
            prop_assert_eq!(ids.len(), records.len());
        }
    }
}
