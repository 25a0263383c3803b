use super::TableError;
use crate::{
    lsr::Lsr,
    region::RegionGroup,
    subtags::{Language, Region, Script},
};
use std::fmt;

/// Which subtag a rule scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Language = 0,
    Script = 1,
    Region = 2,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Language, Level::Script, Level::Region];
}

/// One pattern field: a concrete subtag or `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field<T> {
    Any,
    Exact(T),
}

impl<T: PartialEq> Field<T> {
    #[inline(always)]
    fn matches(&self, value: &T) -> bool {
        match self {
            Field::Any => true,
            Field::Exact(v) => v == value,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Field::Any => 0,
            Field::Exact(_) => 2,
        }
    }
}

/// Region field: concrete, `*`, `$group` or `$!group`. Groups are stored as
/// indices into the owning table's group list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionField {
    Any,
    Exact(Region),
    InGroup(usize),
    NotInGroup(usize),
}

impl RegionField {
    #[inline(always)]
    fn matches(&self, region: Region, groups: &[RegionGroup]) -> bool {
        match *self {
            RegionField::Any => true,
            RegionField::Exact(r) => r == region,
            RegionField::InGroup(g) => groups[g].contains(region),
            RegionField::NotInGroup(g) => !groups[g].contains(region),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            RegionField::Any => 0,
            RegionField::InGroup(_) | RegionField::NotInGroup(_) => 1,
            RegionField::Exact(_) => 2,
        }
    }
}

/// `lang`, `lang_script` or `lang_script_region`, each field possibly `*`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub language: Field<Language>,
    pub script: Option<Field<Script>>,
    pub region: Option<RegionField>,
}

impl Pattern {
    /// Parse a pattern such as `en_*_$!enUS`. `group` resolves a group name to
    /// its index.
    pub fn parse(
        pattern: &str,
        mut group: impl FnMut(&str) -> Option<usize>,
    ) -> Result<Self, TableError> {
        let bad = || TableError::Pattern {
            pattern: pattern.to_owned(),
        };
        let mut fields = pattern.split(['_', '-']);

        let language = match fields.next() {
            Some("*") => Field::Any,
            Some(raw) => Field::Exact(Language::parse(raw).ok_or_else(bad)?),
            None => return Err(bad()),
        };
        let script = match fields.next() {
            None => None,
            Some("*") => Some(Field::Any),
            Some(raw) => Some(Field::Exact(Script::parse(raw).ok_or_else(bad)?)),
        };
        let region = match fields.next() {
            None => None,
            Some("*") => Some(RegionField::Any),
            Some(raw) => Some(match raw.strip_prefix('$') {
                Some(name) => match name.strip_prefix('!') {
                    Some(name) => RegionField::NotInGroup(group(name).ok_or_else(|| {
                        TableError::UnknownGroup {
                            name: name.to_owned(),
                        }
                    })?),
                    None => RegionField::InGroup(group(name).ok_or_else(|| {
                        TableError::UnknownGroup {
                            name: name.to_owned(),
                        }
                    })?),
                },
                None => RegionField::Exact(Region::parse(raw).ok_or_else(bad)?),
            }),
        };
        if fields.next().is_some() {
            return Err(bad());
        }
        Ok(Self {
            language,
            script,
            region,
        })
    }

    pub fn level(&self) -> Level {
        match (self.script, self.region) {
            (None, _) => Level::Language,
            (Some(_), None) => Level::Script,
            (Some(_), Some(_)) => Level::Region,
        }
    }

    #[inline]
    pub fn matches(&self, lsr: &Lsr, groups: &[RegionGroup]) -> bool {
        self.language.matches(&lsr.language)
            && self.script.is_none_or(|s| s.matches(&lsr.script))
            && self.region.is_none_or(|r| r.matches(lsr.region, groups))
    }

    fn rank(&self) -> [u8; 3] {
        [
            self.language.rank(),
            self.script.map_or(0, |s| s.rank()),
            self.region.map_or(0, |r| r.rank()),
        ]
    }
}

/// A distance between a desired and a supported pattern at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistanceRule {
    pub desired: Pattern,
    pub supported: Pattern,
    pub distance: u16,
    /// When false the rule applies only from `desired` to `supported`.
    pub symmetric: bool,
}

impl DistanceRule {
    pub fn level(&self) -> Level {
        self.desired.level()
    }

    #[inline]
    pub fn applies(&self, desired: &Lsr, supported: &Lsr, groups: &[RegionGroup]) -> bool {
        (self.desired.matches(desired, groups) && self.supported.matches(supported, groups))
            || (self.symmetric
                && self.desired.matches(supported, groups)
                && self.supported.matches(desired, groups))
    }

    /// Sort key, most specific first when ordered descending: field by field,
    /// language outranks script outranks region; exact > group > `*`.
    pub(crate) fn specificity(&self) -> [u8; 3] {
        let d = self.desired.rank();
        let s = self.supported.rank();
        [d[0] + s[0], d[1] + s[1], d[2] + s[2]]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Language => "language",
            Level::Script => "script",
            Level::Region => "region",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_groups(_: &str) -> Option<usize> {
        None
    }

    fn lsr(l: &str, s: &str, r: &str) -> Lsr {
        Lsr::new(
            Language::parse(l).unwrap(),
            Script::parse(s).unwrap(),
            Region::parse(r).unwrap(),
        )
    }

    #[test]
    fn levels() {
        assert_eq!(Pattern::parse("*", no_groups).unwrap().level(), Level::Language);
        assert_eq!(Pattern::parse("zh_Hant", no_groups).unwrap().level(), Level::Script);
        assert_eq!(Pattern::parse("*_*_*", no_groups).unwrap().level(), Level::Region);
    }

    #[test]
    fn malformed_patterns() {
        assert!(matches!(
            Pattern::parse("zh_Hxnt1", no_groups),
            Err(TableError::Pattern { .. })
        ));
        assert!(matches!(
            Pattern::parse("en_*_US_x", no_groups),
            Err(TableError::Pattern { .. })
        ));
        assert_eq!(
            Pattern::parse("en_*_$enUS", no_groups),
            Err(TableError::UnknownGroup {
                name: "enUS".into()
            })
        );
    }

    #[test]
    fn group_fields() {
        let groups = [RegionGroup::new("enUS", [Region::parse("US").unwrap()])];
        let p = Pattern::parse("en_*_$!enUS", |n| (n == "enUS").then_some(0)).unwrap();
        assert!(p.matches(&lsr("en", "Latn", "GB"), &groups));
        assert!(!p.matches(&lsr("en", "Latn", "US"), &groups));
        assert!(!p.matches(&lsr("fr", "Latn", "GB"), &groups));
    }

    #[test]
    fn oneway_rules_apply_in_one_direction() {
        let rule = DistanceRule {
            desired: Pattern::parse("zh_Hans", no_groups).unwrap(),
            supported: Pattern::parse("zh_Hant", no_groups).unwrap(),
            distance: 15,
            symmetric: false,
        };
        let hans = lsr("zh", "Hans", "CN");
        let hant = lsr("zh", "Hant", "TW");
        assert!(rule.applies(&hans, &hant, &[]));
        assert!(!rule.applies(&hant, &hans, &[]));
        assert!(DistanceRule { symmetric: true, ..rule }.applies(&hant, &hans, &[]));
    }

    #[test]
    fn specificity_orders_language_first() {
        let rule = |d: &str, s: &str| DistanceRule {
            desired: Pattern::parse(d, no_groups).unwrap(),
            supported: Pattern::parse(s, no_groups).unwrap(),
            distance: 0,
            symmetric: true,
        };
        assert!(rule("en_*_*", "en_*_*").specificity() > rule("*_*_GB", "*_*_US").specificity());
        assert!(rule("en_*_GB", "en_*_*").specificity() > rule("en_*_*", "en_*_*").specificity());
        assert_eq!(rule("*", "*").specificity(), [0, 0, 0]);
    }
}
