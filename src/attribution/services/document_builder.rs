use crate::attribution::domain::{AttributionRecord, License};
use crate::attribution::policies::CopyrightPolicy;
use chrono::Datelike;
use std::cmp::Ordering;
use std::collections::HashSet;

const INDENT: &str = "   ";
const BODY: &str = "    ";
const AUTHOR: &str = "      ";

/// DocumentBuilder renders attribution records as the plain-text LICENSE document
///
/// Output depends only on record content: records are deduplicated and
/// sorted before rendering (the first top-level record stays first), and
/// lines always end with `\n`.
pub struct DocumentBuilder {
    current_year: i32,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::with_current_year(chrono::Local::now().year())
    }

    /// Builder with a fixed "current year", used for records without copyright
    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Keeps the first record in place, then appends the remaining records
    /// without copies of the first, deduplicated and sorted by name
    /// (case-insensitive).
    pub fn sort_and_clean(records: &[AttributionRecord]) -> Vec<AttributionRecord> {
        let Some((primary, rest)) = records.split_first() else {
            return Vec::new();
        };

        let mut cleaned = Vec::with_capacity(records.len());
        cleaned.push(primary.clone());
        cleaned.extend(
            Self::dedupe_sorted(rest)
                .into_iter()
                .filter(|record| record != primary),
        );
        cleaned
    }

    /// Renders the full LICENSE document
    pub fn render(&self, records: &[AttributionRecord]) -> String {
        let mut out = String::with_capacity(1024);

        for (index, record) in Self::sort_and_clean(records).iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            self.render_record(&mut out, record, 0);
        }

        out
    }

    fn render_record(&self, out: &mut String, record: &AttributionRecord, depth: usize) {
        let indent = INDENT.repeat(depth);
        let body = format!("{}{}", indent, BODY);
        let author_indent = format!("{}{}", indent, AUTHOR);

        out.push_str(&indent);
        out.push_str(" - ");
        out.push_str(record.name());
        if !record.description().is_empty() {
            out.push_str(" - ");
            out.push_str(record.description());
        }
        out.push('\n');

        // CUSTOM licenses are described by their notes instead of a catalog name
        let is_custom = record.license() == License::Custom;
        if is_custom {
            for note in record.notes() {
                push_block(out, &body, note);
            }
        } else {
            push_line(out, &body, &format!("[{}]", record.license().preferred_name()));
        }

        for url in record.urls() {
            push_line(out, &body, url);
        }

        push_line(
            out,
            &body,
            &CopyrightPolicy::format_line(record.copyrights(), self.current_year),
        );

        for author in record.authors() {
            push_line(out, &author_indent, author);
        }

        if !is_custom {
            for note in record.notes() {
                push_block(out, &body, note);
            }
        }

        if !record.extras().is_empty() {
            out.push('\n');
            push_line(out, &body, "Extra license information");
            for extra in Self::dedupe_sorted(record.extras()) {
                self.render_record(out, &extra, depth + 1);
            }
        }
    }

    /// Structural dedupe (first occurrence wins), then a total ordering so the
    /// result does not depend on input order
    fn dedupe_sorted(records: &[AttributionRecord]) -> Vec<AttributionRecord> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut unique: Vec<AttributionRecord> = records
            .iter()
            .filter(|record| seen.insert(*record))
            .cloned()
            .collect();
        unique.sort_by(compare_records);
        unique
    }
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_records(a: &AttributionRecord, b: &AttributionRecord) -> Ordering {
    a.name()
        .to_lowercase()
        .cmp(&b.name().to_lowercase())
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.license().id().cmp(b.license().id()))
        .then_with(|| a.description().cmp(b.description()))
        .then_with(|| a.serialize().cmp(&b.serialize()))
}

fn push_line(out: &mut String, prefix: &str, text: &str) {
    out.push_str(prefix);
    out.push_str(text);
    out.push('\n');
}

/// Multi-line text: trimmed, every line re-indented with `prefix`
fn push_block(out: &mut String, prefix: &str, text: &str) {
    for line in text.trim().lines() {
        push_line(out, prefix, line.trim_end());
    }
}
