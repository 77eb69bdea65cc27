use super::license::License;
use crate::shared::AttributionError;

/// License attribution for one project or bundled component
///
/// Records nest: `extras` holds the attributions of sub-components (and, for
/// the primary record of a project, everything found while scanning its
/// dependencies). Equality is structural over every field, recursively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttributionRecord {
    name: String,
    description: String,
    license: License,
    copyrights: Vec<i32>,
    urls: Vec<String>,
    notes: Vec<String>,
    authors: Vec<String>,
    extras: Vec<AttributionRecord>,
}

impl AttributionRecord {
    pub fn new(name: impl Into<String>, license: License) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            license,
            copyrights: Vec::new(),
            urls: Vec::new(),
            notes: Vec::new(),
            authors: Vec::new(),
            extras: Vec::new(),
        }
    }

    /// Starts a builder for a record with the given name and license
    pub fn builder(name: impl Into<String>, license: License) -> RecordBuilder {
        RecordBuilder {
            record: Self::new(name, license),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn license(&self) -> License {
        self.license
    }

    /// Earliest copyright year, or `0` when no year is set
    pub fn copyright(&self) -> i32 {
        self.copyrights.iter().copied().min().unwrap_or(0)
    }

    pub fn copyrights(&self) -> &[i32] {
        &self.copyrights
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn extras(&self) -> &[AttributionRecord] {
        &self.extras
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = description.into();
        self
    }

    /// Adds a copyright year. Non-positive years and repeats are ignored.
    pub fn add_copyright(&mut self, year: i32) -> &mut Self {
        if year > 0 && !self.copyrights.contains(&year) {
            self.copyrights.push(year);
        }
        self
    }

    pub fn add_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.urls.push(url.into());
        self
    }

    pub fn add_note(&mut self, note: impl Into<String>) -> &mut Self {
        self.notes.push(note.into());
        self
    }

    pub fn add_author(&mut self, author: impl Into<String>) -> &mut Self {
        self.authors.push(author.into());
        self
    }

    /// Builds a nested record through `configure` and appends it to the extras
    pub fn add_extra<F>(&mut self, name: impl Into<String>, license: License, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RecordBuilder),
    {
        let mut builder = Self::builder(name, license);
        configure(&mut builder);
        self.extras.push(builder.build());
        self
    }

    /// Appends an already built record to the extras
    pub fn push_extra(&mut self, extra: AttributionRecord) -> &mut Self {
        self.extras.push(extra);
        self
    }

    /// Checks the requirements for a license declared by the project itself
    ///
    /// # Errors
    /// `InvalidLicenseDeclaration` when the name is empty or no author is given
    pub fn validate_declaration(&self) -> Result<(), AttributionError> {
        if self.name.trim().is_empty() {
            return Err(AttributionError::InvalidLicenseDeclaration {
                message: format!(
                    "The name of the project this license applies to must be set for the '{}' license",
                    self.license.preferred_name()
                ),
            });
        }

        if self.authors.is_empty() {
            return Err(AttributionError::InvalidLicenseDeclaration {
                message: format!(
                    "An author must be specified for the '{}' license",
                    self.license.preferred_name()
                ),
            });
        }

        Ok(())
    }
}

/// Builder handed to `add_extra` closures and used for the built-in rules
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: AttributionRecord,
}

impl RecordBuilder {
    pub fn description(&mut self, description: impl Into<String>) -> &mut Self {
        self.record.set_description(description);
        self
    }

    pub fn copyright(&mut self, year: i32) -> &mut Self {
        self.record.add_copyright(year);
        self
    }

    pub fn url(&mut self, url: impl Into<String>) -> &mut Self {
        self.record.add_url(url);
        self
    }

    pub fn note(&mut self, note: impl Into<String>) -> &mut Self {
        self.record.add_note(note);
        self
    }

    pub fn author(&mut self, author: impl Into<String>) -> &mut Self {
        self.record.add_author(author);
        self
    }

    pub fn extra<F>(&mut self, name: impl Into<String>, license: License, configure: F) -> &mut Self
    where
        F: FnOnce(&mut RecordBuilder),
    {
        self.record.add_extra(name, license, configure);
        self
    }

    pub fn build(self) -> AttributionRecord {
        self.record
    }
}
