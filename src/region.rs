//! Region containment and named region groups.

use crate::{data::containment::REGION_PARENTS, subtags::Region};
use smallvec::SmallVec;

/// Regions that directly contain `region`.
pub fn parents(region: Region) -> impl Iterator<Item = Region> {
    REGION_PARENTS
        .get(region.as_str())
        .copied()
        .unwrap_or_default()
        .iter()
        .filter_map(|code| Region::parse(code))
}

/// Every region containing `region`, nearest first, without duplicates.
/// Does not yield `region` itself.
pub fn ancestors(region: Region) -> SmallVec<[Region; 8]> {
    let mut seen: SmallVec<[Region; 8]> = SmallVec::new();
    let mut cursor = 0;
    seen.extend(parents(region));
    while cursor < seen.len() {
        let current = seen[cursor];
        for parent in parents(current) {
            if !seen.contains(&parent) {
                seen.push(parent);
            }
        }
        cursor += 1;
    }
    seen
}

/// Whether `outer` is `inner` or one of its ancestors.
pub fn contains(outer: Region, inner: Region) -> bool {
    outer == inner || ancestors(inner).contains(&outer)
}

/// A named set of regions, e.g. `$americas`. A region belongs to the group if
/// it, or any region containing it, is a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup {
    name: String,
    members: SmallVec<[Region; 8]>,
}

impl RegionGroup {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = Region>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Region] {
        &self.members
    }

    pub fn contains(&self, region: Region) -> bool {
        self.members.contains(&region) || ancestors(region).iter().any(|r| self.members.contains(r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(code: &str) -> Region {
        Region::parse(code).unwrap()
    }

    #[test]
    fn central_america_rolls_up_twice() {
        let up = ancestors(r("MX"));
        assert_eq!(up[0], r("013"));
        assert!(up.contains(&r("003")));
        assert!(up.contains(&r("419")));
        assert!(up.contains(&r("019")));
        assert_eq!(up.last(), Some(&Region::WORLD));
        assert_eq!(up.iter().filter(|x| **x == r("019")).count(), 1);
    }

    #[test]
    fn containment() {
        assert!(contains(r("419"), r("AR")));
        assert!(contains(r("GB"), r("GB")));
        assert!(!contains(r("419"), r("US")));
        assert!(contains(Region::WORLD, r("JP")));
        assert!(ancestors(Region::WORLD).is_empty());
        assert!(ancestors(Region::UNKNOWN).is_empty());
    }

    #[test]
    fn groups_resolve_through_ancestors() {
        let americas = RegionGroup::new("americas", [r("019")]);
        assert!(americas.contains(r("419")));
        assert!(americas.contains(r("CU")));
        assert!(americas.contains(r("019")));
        assert!(!americas.contains(r("ES")));

        let en_us = RegionGroup::new("enUS", [r("US"), r("PR")]);
        assert!(en_us.contains(r("PR")));
        assert!(!en_us.contains(r("CA")));
        assert_eq!(en_us.name(), "enUS");
    }
}
