use crate::shared::AttributionError;
use std::cmp::Ordering;
use std::fmt;

/// Qualifiers that mark a plain release and compare equal to no qualifier
const RELEASE_QUALIFIERS: [&str; 3] = ["final", "release", "ga"];

/// Maximum number of `:`-separated segments in a coordinate
const MAX_COORDINATE_SEGMENTS: usize = 4;

/// Version of a module, compared semantically
///
/// The leading dotted numeric components are compared numerically with
/// missing components treated as zero (`1.0 == 1.0.0`, `2.10 > 2.9`).
/// Anything after the numeric part is a qualifier; a qualified version sorts
/// before the bare release (`4.0-RC1 < 4.0`). The raw text is kept for display.
#[derive(Debug, Clone)]
pub struct ModuleVersion {
    raw: String,
    numbers: Vec<u64>,
    qualifier: Option<String>,
}

impl ModuleVersion {
    /// The `0` version, used as the threshold for unversioned rules
    pub fn zero() -> Self {
        Self {
            raw: "0".to_string(),
            numbers: Vec::new(),
            qualifier: None,
        }
    }

    /// Parses a version string. Returns `None` unless the text starts with a digit.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if !text.starts_with(|c: char| c.is_ascii_digit()) {
            return None;
        }

        let mut numbers = Vec::new();
        let mut rest = text;
        loop {
            let digits_end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let (digits, tail) = rest.split_at(digits_end);
            numbers.push(digits.parse::<u64>().ok()?);
            rest = tail;

            match rest.strip_prefix('.') {
                Some(next) if next.starts_with(|c: char| c.is_ascii_digit()) => rest = next,
                _ => break,
            }
        }

        let qualifier = rest.trim_start_matches(['.', '-', '_', '+']);
        let qualifier = if qualifier.is_empty()
            || RELEASE_QUALIFIERS
                .iter()
                .any(|q| q.eq_ignore_ascii_case(qualifier))
        {
            None
        } else {
            Some(qualifier.to_ascii_lowercase())
        };

        Some(Self {
            raw: text.to_string(),
            numbers,
            qualifier,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    fn number_at(&self, index: usize) -> u64 {
        self.numbers.get(index).copied().unwrap_or(0)
    }
}

impl PartialEq for ModuleVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ModuleVersion {}

impl PartialOrd for ModuleVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ModuleVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.numbers.len().max(other.numbers.len());
        for index in 0..len {
            match self.number_at(index).cmp(&other.number_at(index)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match (&self.qualifier, &other.qualifier) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => compare_qualifiers(a, b),
        }
    }
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Natural ordering of qualifiers, so `rc10` sorts after `rc9`
fn compare_qualifiers(a: &str, b: &str) -> Ordering {
    let mut left = chunks(a).into_iter();
    let mut right = chunks(b).into_iter();
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ordering = match (x.parse::<u64>(), y.parse::<u64>()) {
                    (Ok(nx), Ok(ny)) => nx.cmp(&ny),
                    _ => x.cmp(y),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

fn chunks(text: &str) -> Vec<&str> {
    let mut result = Vec::new();
    let mut start = 0;
    let mut previous_digit: Option<bool> = None;

    for (index, c) in text.char_indices() {
        if !c.is_alphanumeric() {
            if start < index {
                result.push(&text[start..index]);
            }
            start = index + c.len_utf8();
            previous_digit = None;
            continue;
        }

        let is_digit = c.is_ascii_digit();
        if previous_digit.is_some_and(|p| p != is_digit) {
            result.push(&text[start..index]);
            start = index;
        }
        previous_digit = Some(is_digit);
    }
    if start < text.len() {
        result.push(&text[start..]);
    }
    result
}

/// A coordinate reduced to the key used by the rule table
///
/// `module_id` is `group` or `group:artifact`; the version is `0` when the
/// coordinate carries none (or carries one that does not parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleKey {
    pub module_id: String,
    pub version: ModuleVersion,
}

impl ModuleKey {
    /// Parses `group[:artifact[:version[:classifier]]]`, ignoring the last
    /// `drop` of the `group:artifact:version` segments. The classifier never
    /// takes part in matching.
    ///
    /// Two-segment coordinates whose second segment is a version
    /// (`org.jetbrains.kotlin:1.4.0`) are read as `group:version`.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` for an empty coordinate, for more than four
    /// segments, or when dropping segments leaves nothing.
    pub fn parse(coordinate: &str, drop: usize) -> Result<Self, AttributionError> {
        let trimmed = coordinate.trim();
        if trimmed.is_empty() {
            return Err(AttributionError::invalid_coordinate(
                coordinate,
                "the coordinate is empty",
            ));
        }

        let segments: Vec<&str> = trimmed.split(':').map(str::trim).collect();
        if segments.len() > MAX_COORDINATE_SEGMENTS {
            return Err(AttributionError::invalid_coordinate(
                coordinate,
                format!(
                    "expected at most {} ':'-separated segments, e.g. 'org.mockito:mockito-core:1.9.5:javadoc'",
                    MAX_COORDINATE_SEGMENTS
                ),
            ));
        }
        if segments[0].is_empty() {
            return Err(AttributionError::invalid_coordinate(
                coordinate,
                "the group is empty",
            ));
        }

        let key = match segments.len().min(3).saturating_sub(drop) {
            0 => {
                return Err(AttributionError::invalid_coordinate(
                    coordinate,
                    "no segments left to match",
                ))
            }
            1 => Self {
                module_id: segments[0].to_string(),
                version: ModuleVersion::zero(),
            },
            2 => match ModuleVersion::parse(segments[1]) {
                Some(version) => Self {
                    module_id: segments[0].to_string(),
                    version,
                },
                None => Self {
                    module_id: format!("{}:{}", segments[0], segments[1]),
                    version: ModuleVersion::zero(),
                },
            },
            _ => Self {
                module_id: format!("{}:{}", segments[0], segments[1]),
                version: ModuleVersion::parse(segments[2]).unwrap_or_else(ModuleVersion::zero),
            },
        };

        Ok(key)
    }
}
