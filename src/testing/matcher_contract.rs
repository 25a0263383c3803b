use crate::{LocaleId, LocaleMatcher, NO_MATCH, PriorityList};

/// Tags every contract check runs over.
pub const SAMPLE_TAGS: &[&str] = &[
    "en", "en-GB", "en-US", "en-AU", "en-001", "und-UK", "fr", "fr-CA", "de", "de-AT", "es",
    "es-419", "es-MX", "pt-BR", "zh", "zh-TW", "zh-Hant", "zh-Hans-CN", "sr-Latn", "sr-Cyrl",
    "no", "nb", "nn", "da", "he", "iw", "ar-MA", "ja", "xx", "und",
];

/// Assert that a matcher satisfies the selection contracts:
///
/// 1. `identity_is_zero` → a tag is at distance 0 from itself
/// 2. `result_is_a_candidate` → the result comes from the supported list or is the default
/// 3. `selection_is_deterministic` → repeated queries agree
/// 4. `separators_are_equivalent` → `_` and `-` spellings score the same
/// 5. `distances_are_in_range` → every distance is 0, below the threshold, or the sentinel
#[macro_export]
macro_rules! assert_matcher_contract {
    ($matcher:expr) => {
        let matcher = &$matcher;
        $crate::testing::matcher_contract::identity_is_zero(matcher);
        $crate::testing::matcher_contract::result_is_a_candidate(matcher);
        $crate::testing::matcher_contract::selection_is_deterministic(matcher);
        $crate::testing::matcher_contract::separators_are_equivalent(matcher);
        $crate::testing::matcher_contract::distances_are_in_range(matcher);
    };
}

fn ids() -> Vec<LocaleId> {
    SAMPLE_TAGS.iter().map(|t| t.parse().unwrap()).collect()
}

pub fn identity_is_zero(matcher: &LocaleMatcher) {
    for id in ids() {
        assert_eq!(matcher.distance(&id, &id), 0, "{id}");
    }
}

pub fn result_is_a_candidate(matcher: &LocaleMatcher) {
    let supported: PriorityList = ids().into_iter().step_by(3).collect();
    for desired in ids() {
        let r = matcher.best_match_result(&desired, &supported).unwrap();
        match r.supported_index {
            Some(i) => assert_eq!(supported[i], r.supported, "{desired}"),
            None => assert_eq!(r.distance, NO_MATCH, "{desired}"),
        }
    }
}

pub fn selection_is_deterministic(matcher: &LocaleMatcher) {
    let supported: PriorityList = ids().into_iter().rev().collect();
    for desired in ids() {
        let a = matcher.best_match_result(&desired, &supported).unwrap();
        let b = matcher.best_match_result(&desired, &supported).unwrap();
        assert_eq!(a, b, "{desired}");
    }
}

pub fn separators_are_equivalent(matcher: &LocaleMatcher) {
    for tag in SAMPLE_TAGS {
        let dash: LocaleId = tag.parse().unwrap();
        let underscore: LocaleId = tag.replace('-', "_").parse().unwrap();
        assert_eq!(dash, underscore, "{tag}");
        assert_eq!(matcher.expand(&dash), matcher.expand(&underscore), "{tag}");
    }
}

pub fn distances_are_in_range(matcher: &LocaleMatcher) {
    let threshold = matcher.locale_distance().threshold();
    let all = ids();
    for desired in &all {
        for supported in &all {
            let d = matcher.distance(desired, supported);
            assert!(
                d == 0 || d < threshold || d == NO_MATCH,
                "distance({desired} -> {supported}) = {d}"
            );
        }
    }
}
