/// Outcome of a dependency scan, one display line per dependency
///
/// Lines are `[LICENSE_ID] group:name:version` for known and embedded
/// dependencies and `group:name:version [children]` for missing ones. All
/// three lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub known: Vec<String>,
    pub embedded: Vec<String>,
    pub missing: Vec<String>,
}

impl ScanReport {
    pub fn is_empty(&self) -> bool {
        self.known.is_empty() && self.embedded.is_empty() && self.missing.is_empty()
    }

    pub fn has_missing(&self) -> bool {
        !self.missing.is_empty()
    }

    pub(crate) fn sort(&mut self) {
        self.known.sort();
        self.embedded.sort();
        self.missing.sort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = ScanReport::default();
        assert!(report.is_empty());
        assert!(!report.has_missing());
    }

    #[test]
    fn test_sort_all_lists() {
        let mut report = ScanReport {
            known: vec!["[MIT] b:b:1".to_string(), "[APACHE_2] a:a:1".to_string()],
            embedded: vec!["[MIT] z:z:1".to_string(), "[MIT] y:y:1".to_string()],
            missing: vec!["q:q:1".to_string(), "p:p:1".to_string()],
        };
        report.sort();

        assert_eq!(report.known[0], "[APACHE_2] a:a:1");
        assert_eq!(report.embedded[0], "[MIT] y:y:1");
        assert_eq!(report.missing[0], "p:p:1");
        assert!(report.has_missing());
    }
}
