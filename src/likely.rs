//! Likely-subtag expansion.
//!
//! Implements *Add Likely Subtags* (and the inverse, *Remove Likely Subtags,
//! favoring region*) over tables aggregated from language usage statistics.
//! For every lookup key the (language, script, region) combination with the
//! largest literate population wins; ties keep the first record.

use crate::{
    data::{
        aliases::{LANGUAGE_ALIASES, REGION_ALIASES},
        population::{OVERRIDES, POPULATION},
    },
    locale::{LocaleId, ParseError},
    lsr::Lsr,
    subtags::{Language, Region, Script},
};
use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, LazyLock},
};

static GLOBAL: LazyLock<Arc<LikelySubtags>> = LazyLock::new(|| {
    let mut builder = LikelySubtagsBuilder::new();
    for row in POPULATION {
        let (Some(language), Some(script), Some(region)) = (
            Language::parse(row.language),
            Script::parse(row.script),
            Region::parse(row.region),
        ) else {
            panic!("malformed built-in population row {row:?} – this is a bug");
        };
        builder = builder.add_record(Lsr::new(language, script, region), row.literate);
    }
    for o in OVERRIDES {
        builder = builder
            .add_override_str(o.from, o.to)
            .expect("malformed built-in likely-subtag override – this is a bug");
    }
    let likely = builder.build();
    tracing::debug!(languages = likely.by_language.len(), "built likely-subtag tables");
    Arc::new(likely)
});

/// Frozen likely-subtag tables.
#[derive(Debug, Clone)]
pub struct LikelySubtags {
    by_language: HashMap<Language, (Script, Region)>,
    by_language_script: HashMap<(Language, Script), Region>,
    by_language_region: HashMap<(Language, Region), Script>,
    by_script_region: HashMap<(Script, Region), Language>,
    by_script: HashMap<Script, (Language, Region)>,
    by_region: HashMap<Region, (Language, Script)>,
    root: Lsr,
}

impl LikelySubtags {
    /// Tables built from the compiled-in data.
    pub fn global() -> Arc<Self> {
        Arc::clone(&GLOBAL)
    }

    pub fn builder() -> LikelySubtagsBuilder {
        LikelySubtagsBuilder::new()
    }

    pub fn root(&self) -> Lsr {
        self.root
    }

    pub fn expand_locale(&self, locale: &LocaleId) -> Lsr {
        self.expand(locale.language, locale.script, locale.region)
    }

    /// Fill in missing script and region. Fields that are present are kept
    /// (after alias replacement); fields with no data become `Zzzz` / `ZZ`.
    pub fn expand(&self, language: Language, script: Option<Script>, region: Option<Region>) -> Lsr {
        let language = canonical_language(language);
        let region = region.map(canonical_region);

        if let (Some(script), Some(region)) = (script, region)
            && !language.is_unknown()
        {
            return Lsr::new(language, script, region);
        }

        let (language, script, region) = if !language.is_unknown() && self.by_language.contains_key(&language) {
            self.fill_known(language, script, region)
        } else {
            self.fill_unknown(language, script, region)
        };

        let lsr = Lsr::new(
            language,
            script.unwrap_or(Script::UNKNOWN),
            region.unwrap_or(Region::UNKNOWN),
        );
        if lsr.is_partial() {
            tracing::debug!(%lsr, "no likely-subtag data, using unknown markers");
        }
        lsr
    }

    fn fill_known(
        &self,
        language: Language,
        mut script: Option<Script>,
        mut region: Option<Region>,
    ) -> (Language, Option<Script>, Option<Region>) {
        if script.is_none()
            && let Some(r) = region
        {
            script = self.by_language_region.get(&(language, r)).copied();
        }
        if region.is_none()
            && let Some(s) = script
        {
            region = self.by_language_script.get(&(language, s)).copied();
        }
        if let Some(&(s, r)) = self.by_language.get(&language) {
            script.get_or_insert(s);
            region.get_or_insert(r);
        }
        (language, script, region)
    }

    fn fill_unknown(
        &self,
        mut language: Language,
        mut script: Option<Script>,
        mut region: Option<Region>,
    ) -> (Language, Option<Script>, Option<Region>) {
        let undetermined = language.is_unknown();
        let mut found = |lang: Language| {
            if undetermined {
                language = lang;
            }
        };

        if let (Some(s), Some(r)) = (script, region)
            && let Some(&lang) = self.by_script_region.get(&(s, r))
        {
            found(lang);
        } else if let Some(s) = script
            && let Some(&(lang, r)) = self.by_script.get(&s)
        {
            found(lang);
            region.get_or_insert(r);
        } else if let Some(r) = region
            && let Some(&(lang, s)) = self.by_region.get(&r)
        {
            found(lang);
            script.get_or_insert(s);
        } else if script.is_none() && region.is_none() && undetermined {
            return (self.root.language, Some(self.root.script), Some(self.root.region));
        }
        (language, script, region)
    }

    /// Remove likely subtags, favoring region: the shortest identifier that
    /// expands back to the same LSR, trying `lang`, `lang-region`, then
    /// `lang-script`.
    pub fn minimize(&self, locale: &LocaleId) -> LocaleId {
        let max = self.expand_locale(locale);
        let language = max.language;
        let trials = [
            (None, None),
            (None, Some(max.region)),
            (Some(max.script), None),
        ];
        for (script, region) in trials {
            if self.expand(language, script, region) == max {
                return LocaleId::new(language, script, region).with_variants(locale.variants().iter().copied());
            }
        }
        LocaleId::from(max).with_variants(locale.variants().iter().copied())
    }
}

fn canonical_language(language: Language) -> Language {
    LANGUAGE_ALIASES
        .get(language.as_str())
        .and_then(|to| Language::parse(to))
        .unwrap_or(language)
}

fn canonical_region(region: Region) -> Region {
    REGION_ALIASES
        .get(region.as_str())
        .and_then(|to| Region::parse(to))
        .unwrap_or(region)
}

/// Keeps the record with the largest population per key; the first record
/// wins when populations are equal.
#[derive(Debug)]
struct Aggregate<K, V> {
    best: HashMap<K, (V, u32)>,
}

impl<K: Eq + Hash, V> Default for Aggregate<K, V> {
    fn default() -> Self {
        Self { best: HashMap::new() }
    }
}

impl<K: Eq + Hash, V> Aggregate<K, V> {
    fn offer(&mut self, key: K, value: V, population: u32) {
        match self.best.get_mut(&key) {
            Some(slot) if slot.1 >= population => {}
            Some(slot) => *slot = (value, population),
            None => {
                self.best.insert(key, (value, population));
            }
        }
    }

    fn finish(self) -> HashMap<K, V> {
        self.best.into_iter().map(|(k, (v, _))| (k, v)).collect()
    }
}

/// Mutable construction phase of [`LikelySubtags`].
#[derive(Debug)]
pub struct LikelySubtagsBuilder {
    records: Vec<(Lsr, u32)>,
    overrides: Vec<(LocaleId, Lsr)>,
    root: Lsr,
}

impl Default for LikelySubtagsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LikelySubtagsBuilder {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            overrides: Vec::new(),
            root: Lsr::new(Language::UNKNOWN, Script::UNKNOWN, Region::UNKNOWN),
        }
    }

    /// Add one usage row: `literate` people write `lsr.language` in
    /// `lsr.script` within `lsr.region`.
    pub fn add_record(mut self, lsr: Lsr, literate: u32) -> Self {
        self.records.push((lsr, literate));
        self
    }

    /// Pin the expansion of a partial tag. `from` decides which table is
    /// written: `lang`, `lang_Script`, `lang_RG`, `und_Script_RG`,
    /// `und_Script`, `und_RG`, or `und` for the root entry.
    pub fn add_override(mut self, from: LocaleId, to: Lsr) -> Self {
        self.overrides.push((from, to));
        self
    }

    pub fn add_override_str(self, from: &str, to: &str) -> Result<Self, ParseError> {
        let from: LocaleId = from.parse()?;
        let to_id: LocaleId = to.parse()?;
        let (Some(script), Some(region)) = (to_id.script, to_id.region) else {
            return Err(ParseError::InvalidSubtag {
                tag: to.to_owned(),
                subtag: to_id.language.to_string(),
            });
        };
        Ok(self.add_override(from, Lsr::new(to_id.language, script, region)))
    }

    pub fn root(mut self, root: Lsr) -> Self {
        self.root = root;
        self
    }

    pub fn build(self) -> LikelySubtags {
        let mut l = Aggregate::default();
        let mut ls = Aggregate::default();
        let mut lr = Aggregate::default();
        let mut sr = Aggregate::default();
        let mut s = Aggregate::default();
        let mut r = Aggregate::default();

        for &(lsr, pop) in &self.records {
            let Lsr {
                language,
                script,
                region,
            } = lsr;
            l.offer(language, (script, region), pop);
            ls.offer((language, script), region, pop);
            lr.offer((language, region), script, pop);
            sr.offer((script, region), language, pop);
            s.offer(script, (language, region), pop);
            r.offer(region, (language, script), pop);
        }

        let mut tables = LikelySubtags {
            by_language: l.finish(),
            by_language_script: ls.finish(),
            by_language_region: lr.finish(),
            by_script_region: sr.finish(),
            by_script: s.finish(),
            by_region: r.finish(),
            root: self.root,
        };

        for (from, to) in self.overrides {
            match (from.language.is_unknown(), from.script, from.region) {
                (false, None, None) => {
                    tables.by_language.insert(from.language, (to.script, to.region));
                }
                (false, Some(s), None) => {
                    tables.by_language_script.insert((from.language, s), to.region);
                }
                (false, None, Some(r)) => {
                    tables.by_language_region.insert((from.language, r), to.script);
                }
                (true, Some(s), Some(r)) => {
                    tables.by_script_region.insert((s, r), to.language);
                }
                (true, Some(s), None) => {
                    tables.by_script.insert(s, (to.language, to.region));
                }
                (true, None, Some(r)) => {
                    tables.by_region.insert(r, (to.language, to.script));
                }
                (true, None, None) => tables.root = to,
                (false, Some(_), Some(_)) => {
                    tracing::debug!(%from, "ignoring override for a fully specified tag");
                }
            }
        }
        tables
    }
}
