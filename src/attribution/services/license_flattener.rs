use crate::attribution::domain::{AttributionRecord, License};
use std::collections::HashSet;

/// LicenseFlattener walks a record forest including every nested extra
///
/// Uses an explicit worklist so deeply nested extras cannot overflow the stack.
pub struct LicenseFlattener;

impl LicenseFlattener {
    /// Every record of the forest, each structurally distinct record once, in
    /// depth-first pre-order
    pub fn flatten(records: &[AttributionRecord]) -> Vec<&AttributionRecord> {
        let mut visited: HashSet<&AttributionRecord> = HashSet::new();
        let mut flattened = Vec::new();
        let mut worklist: Vec<&AttributionRecord> = records.iter().rev().collect();

        while let Some(record) = worklist.pop() {
            if !visited.insert(record) {
                continue;
            }
            flattened.push(record);
            worklist.extend(record.extras().iter().rev());
        }

        flattened
    }

    /// Distinct licenses referenced anywhere in the forest, first-seen order
    pub fn distinct_licenses(records: &[AttributionRecord]) -> Vec<License> {
        let mut seen = HashSet::new();
        Self::flatten(records)
            .into_iter()
            .map(AttributionRecord::license)
            .filter(|license| seen.insert(*license))
            .collect()
    }
}
