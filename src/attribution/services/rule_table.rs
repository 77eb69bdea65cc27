use crate::attribution::domain::{AttributionRecord, ModuleKey, ModuleVersion};
use crate::attribution::rules::builtin_rules;
use crate::shared::AttributionError;
use log::{debug, warn};
use std::collections::HashMap;

/// Number of extra lookups with a coarser module id (`group:artifact`, then `group`)
const MAX_FALLBACK_ATTEMPTS: usize = 2;

/// Stable identity of a rule, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(usize);

/// One versioned rule: applies from `threshold` onwards
#[derive(Debug, Clone)]
pub struct Rule {
    id: RuleId,
    threshold: ModuleVersion,
    record: AttributionRecord,
}

impl Rule {
    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn threshold(&self) -> &ModuleVersion {
        &self.threshold
    }

    pub fn record(&self) -> &AttributionRecord {
        &self.record
    }
}

/// Module id → rules sorted by descending threshold
///
/// Resolution returns the rule with the highest threshold that does not
/// exceed the queried version. When the exact module id has no rules, the
/// lookup falls back to coarser ids (`group:artifact` → `group`) while keeping
/// the queried version.
#[derive(Debug, Default)]
pub struct VersionedRuleTable {
    rules: HashMap<String, Vec<Rule>>,
    next_id: usize,
}

impl VersionedRuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table populated with the built-in rules
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for rule in builtin_rules() {
            if let Err(e) = table.insert(rule.coordinate, rule.record) {
                warn!("Skipping built-in license rule: {}", e);
            }
        }
        table
    }

    /// Adds a rule for `group[:artifact][:version]`
    ///
    /// Rules for the same module stay sorted by descending threshold; rules
    /// with equal thresholds keep their insertion order.
    pub fn insert(
        &mut self,
        coordinate: &str,
        record: AttributionRecord,
    ) -> Result<RuleId, AttributionError> {
        let key = ModuleKey::parse(coordinate, 0)?;
        let id = RuleId(self.next_id);
        self.next_id += 1;

        let list = self.rules.entry(key.module_id).or_default();
        list.push(Rule {
            id,
            threshold: key.version,
            record,
        });
        list.sort_by(|a, b| b.threshold.cmp(&a.threshold));

        Ok(id)
    }

    /// Finds the rule governing `coordinate`, if any
    ///
    /// # Errors
    /// `InvalidCoordinate` when the coordinate is empty or has more than four
    /// segments. A coordinate with no matching rule is `Ok(None)`.
    pub fn resolve(&self, coordinate: &str) -> Result<Option<&Rule>, AttributionError> {
        debug!("searching {}", coordinate);

        let key = ModuleKey::parse(coordinate, 0)?;
        let version = key.version;
        let mut candidates = self.rules.get(&key.module_id);

        let mut drop = 1;
        while candidates.is_none() && drop <= MAX_FALLBACK_ATTEMPTS {
            match ModuleKey::parse(coordinate, drop) {
                Ok(coarser) => {
                    debug!("retrying {} as {}", coordinate, coarser.module_id);
                    candidates = self.rules.get(&coarser.module_id);
                }
                Err(_) => break,
            }
            drop += 1;
        }

        let Some(candidates) = candidates else {
            debug!("no rules for {}", coordinate);
            return Ok(None);
        };

        let found = candidates.iter().find(|rule| {
            debug!("checking {} against {}", version, rule.threshold);
            rule.threshold <= version
        });

        if let Some(rule) = found {
            debug!("using {} for {}", rule.record.name(), coordinate);
        }
        Ok(found)
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.rules.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Module ids with at least one rule, sorted
    pub fn module_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Rules of one module id, highest threshold first
    pub fn rules_for(&self, module_id: &str) -> &[Rule] {
        self.rules.get(module_id).map(Vec::as_slice).unwrap_or_default()
    }
}
