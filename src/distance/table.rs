use super::{
    NO_MATCH, TableError,
    rule::{DistanceRule, Level, Pattern},
};
use crate::{data::DEFAULT_DISTANCES, lsr::Lsr, region::RegionGroup, subtags::Region};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<Arc<DistanceTable>> = LazyLock::new(|| {
    let table = DistanceTableBuilder::new()
        .load_str(DEFAULT_DISTANCES)
        .and_then(DistanceTableBuilder::freeze)
        .expect("built-in distance table is malformed – this is a bug");
    tracing::debug!(
        rules = table.len(),
        groups = table.groups.len(),
        "loaded built-in distance table"
    );
    Arc::new(table)
});

/// Build phase of a [`DistanceTable`]. Rules keep insertion order until
/// [`freeze`](Self::freeze).
#[derive(Debug, Default, Clone)]
pub struct DistanceTableBuilder {
    groups: Vec<RegionGroup>,
    rules: Vec<DistanceRule>,
}

impl DistanceTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) the region group `$name`.
    pub fn define_group(mut self, name: &str, members: impl IntoIterator<Item = Region>) -> Self {
        let group = RegionGroup::new(name, members);
        match self.groups.iter_mut().find(|g| g.name() == name) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
        self
    }

    /// Add a rule scoring `desired` against `supported`. Both patterns must
    /// have the same number of fields. `distance` is 0-100, or [`NO_MATCH`].
    pub fn add_distance(
        mut self,
        desired: &str,
        supported: &str,
        distance: u16,
        symmetric: bool,
    ) -> Result<Self, TableError> {
        if distance > 100 && distance != NO_MATCH {
            return Err(TableError::Distance { value: distance });
        }
        let groups = &self.groups;
        let resolve = |name: &str| groups.iter().position(|g| g.name() == name);
        let desired_pattern = Pattern::parse(desired, resolve)?;
        let supported_pattern = Pattern::parse(supported, resolve)?;
        if desired_pattern.level() != supported_pattern.level() {
            return Err(TableError::LevelMismatch {
                desired: desired.to_owned(),
                supported: supported.to_owned(),
            });
        }
        self.rules.push(DistanceRule {
            desired: desired_pattern,
            supported: supported_pattern,
            distance,
            symmetric,
        });
        Ok(self)
    }

    /// Read rules and groups from the tabular format:
    ///
    /// ```text
    /// # comment
    /// $enUS = AS+GU+MH+MP+PR+UM+US+VI
    /// zh_Hans   zh_Hant   15   oneway
    /// *         *         80   symmetric
    /// ```
    pub fn load_str(mut self, text: &str) -> Result<Self, TableError> {
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let row = raw.split('#').next().unwrap_or_default().trim();
            if row.is_empty() {
                continue;
            }
            let err = |reason: String| TableError::Row { line, reason };

            if let Some(definition) = row.strip_prefix('$') {
                let (name, members) = definition
                    .split_once('=')
                    .ok_or_else(|| err("group definition needs `=`".into()))?;
                let members = members
                    .split('+')
                    .map(str::trim)
                    .map(|m| Region::parse(m).ok_or_else(|| err(format!("bad region `{m}`"))))
                    .collect::<Result<Vec<_>, _>>()?;
                self = self.define_group(name.trim(), members);
                continue;
            }

            let cols: Vec<&str> = row.split_whitespace().collect();
            let [desired, supported, distance, direction] = cols[..] else {
                return Err(err(format!("expected 4 columns, found {}", cols.len())));
            };
            let distance: u16 = distance
                .parse()
                .map_err(|_| err(format!("bad distance `{distance}`")))?;
            let symmetric = match direction {
                "symmetric" => true,
                "oneway" => false,
                other => return Err(err(format!("bad direction `{other}`"))),
            };
            self = self
                .add_distance(desired, supported, distance, symmetric)
                .map_err(|e| err(e.to_string()))?;
        }
        Ok(self)
    }

    /// Sort rules by specificity and seal the table.
    pub fn freeze(self) -> Result<DistanceTable, TableError> {
        if self.rules.is_empty() {
            return Err(TableError::Empty);
        }
        let mut levels: [Vec<DistanceRule>; 3] = Default::default();
        for rule in self.rules {
            levels[rule.level() as usize].push(rule);
        }
        for rules in &mut levels {
            // stable: equal specificity keeps insertion order
            rules.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
        }
        Ok(DistanceTable {
            groups: self.groups,
            levels,
        })
    }
}

/// An immutable, query-only distance table.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    groups: Vec<RegionGroup>,
    levels: [Vec<DistanceRule>; 3],
}

impl DistanceTable {
    /// The compiled-in table.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    pub fn builder() -> DistanceTableBuilder {
        DistanceTableBuilder::new()
    }

    /// Distance contributed by `level`, from the most specific applicable
    /// rule. `None` when no rule applies.
    pub fn lookup(&self, level: Level, desired: &Lsr, supported: &Lsr) -> Option<u16> {
        self.levels[level as usize]
            .iter()
            .find(|rule| rule.applies(desired, supported, &self.groups))
            .map(|rule| rule.distance)
    }

    /// Rules at `level` in lookup order.
    pub fn rules(&self, level: Level) -> &[DistanceRule] {
        &self.levels[level as usize]
    }

    pub fn group(&self, name: &str) -> Option<&RegionGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
