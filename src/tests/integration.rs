#[cfg(test)]
mod integration_tests {

    use crate::{
        DistanceTable, Error, LikelySubtags, LocaleId, LocaleMatcher, Lsr, MatchError, NO_MATCH,
        PriorityList, TableError, distance,
    };
    use std::sync::Arc;

    fn id(tag: &str) -> LocaleId {
        tag.parse().unwrap()
    }

    fn list(tags: &[&str]) -> PriorityList {
        PriorityList::from_tags(tags).unwrap()
    }

    #[test]
    fn accept_language_negotiation() {
        let m = LocaleMatcher::new();
        let desired: PriorityList = "de-CH, fr;q=0.8, en;q=0.5".parse().unwrap();
        let r = m.best_match_list(&desired, &list(&["en", "fr-FR", "de"])).unwrap();
        assert_eq!(r.supported, id("de"));
        assert_eq!(r.desired_index, 0);
        assert_eq!(r.distance, 4);
    }

    #[test]
    fn later_desired_locale_wins_when_first_has_no_match() {
        let m = LocaleMatcher::new();
        let desired: PriorityList = "ja, en-AU;q=0.9".parse().unwrap();
        let r = m.best_match_list(&desired, &list(&["fr", "en-GB", "en"])).unwrap();
        assert_eq!(r.supported, id("en-GB"));
        assert_eq!(r.desired_index, 1);
    }

    #[test]
    fn designated_default_for_unmatched() {
        let m = LocaleMatcher::builder().default_locale(id("mul")).build();
        let r = m.best_match_result(&id("ko"), &list(&["fr", "de"])).unwrap();
        assert_eq!(r.supported, id("mul"));
        assert_eq!(r.distance, NO_MATCH);

        // a default that is also supported reports its position
        let m = LocaleMatcher::builder().default_locale(id("de")).build();
        let r = m.best_match_result(&id("ko"), &list(&["fr", "de"])).unwrap();
        assert_eq!(r.supported_index, Some(1));
    }

    #[test]
    fn macro_region_candidates() {
        let m = LocaleMatcher::new();
        let supported = list(&["es", "es-419", "pt-BR", "pt-PT"]);
        assert_eq!(m.best_match(&id("es-AR"), &supported).unwrap(), id("es-419"));
        assert_eq!(m.best_match(&id("es-ES"), &supported).unwrap(), id("es"));
        assert_eq!(m.best_match(&id("pt-AO"), &supported).unwrap(), id("pt-PT"));
        assert_eq!(m.best_match(&id("pt"), &supported).unwrap(), id("pt-BR"));
    }

    #[test]
    fn legacy_codes_match_their_replacements() {
        let m = LocaleMatcher::new();
        assert_eq!(m.best_match(&id("iw"), &list(&["en", "he"])).unwrap(), id("he"));
        assert_eq!(m.distance(&id("in"), &id("id")), 0);
        assert_eq!(m.distance(&id("und-UK"), &id("en-GB")), 0);
    }

    #[test]
    fn serbian_scripts_are_close() {
        let m = LocaleMatcher::new();
        assert_eq!(m.distance(&id("sr-Latn"), &id("sr-Cyrl")), 5);
        assert_eq!(
            m.best_match(&id("sr-Latn"), &list(&["hr", "sr"])).unwrap(),
            id("sr")
        );
    }

    #[test]
    fn custom_table_and_likely_data() {
        let table = DistanceTable::builder()
            .load_str(
                "
                $nordic = DK+NO+SE
                da   sv   20  symmetric
                *    *    90  symmetric
                *_*  *_*  50  symmetric
                *_*_$nordic  *_*_$nordic  2  symmetric
                *_*_*  *_*_*  6  symmetric
                ",
            )
            .and_then(|b| b.freeze())
            .unwrap();
        let m = LocaleMatcher::builder()
            .distance_table(Arc::new(table))
            .threshold(30)
            .build();
        assert_eq!(m.distance(&id("da"), &id("sv")), 22);
        assert_eq!(m.best_match(&id("da"), &list(&["de", "sv"])).unwrap(), id("sv"));

        let likely = LikelySubtags::builder()
            .add_override_str("und", "fr_Latn_FR")
            .and_then(|b| b.add_override_str("fr", "fr_Latn_FR"))
            .unwrap()
            .build();
        let m = LocaleMatcher::builder().likely_subtags(Arc::new(likely)).build();
        assert_eq!(m.expand(&id("und")).to_string(), "fr_Latn_FR");
        assert_eq!(m.expand(&id("en")).to_string(), "en_Zzzz_ZZ");
    }

    #[test]
    fn crate_error_wraps_every_layer() {
        assert!(matches!(distance("", "en"), Err(Error::Parse(_))));
        let table = DistanceTable::builder().freeze().map_err(Error::from);
        assert_eq!(table.unwrap_err(), Error::Table(TableError::Empty));
        let m = LocaleMatcher::new();
        let err = m
            .best_match(&id("en"), &PriorityList::default())
            .map_err(Error::from)
            .unwrap_err();
        assert_eq!(err, Error::Match(MatchError::NoSupported));
        assert!(err.to_string().starts_with("match error:"));
    }

    #[test]
    fn expanded_forms_are_stable() {
        let m = LocaleMatcher::new();
        let max: Lsr = m.expand(&id("zh-TW"));
        assert_eq!(max.to_string(), "zh_Hant_TW");
        let min = m.likely_subtags().minimize(&LocaleId::from(max));
        assert_eq!(min, id("zh-TW"));
    }
}
