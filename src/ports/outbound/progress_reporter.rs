/// ProgressReporter port for user feedback during a license run
///
/// The dependency scan reports one progress step per resolved coordinate;
/// the scan summary, warnings about unresolved configurations and the final
/// "updated"/"up to date" line go through the other methods.
pub trait ProgressReporter {
    /// Reports an informational line (scan summary, loaded graph, ...)
    fn report(&self, message: &str);

    /// Reports scan progress
    ///
    /// # Arguments
    /// * `current` - 1-based index of the dependency being resolved
    /// * `total` - Number of distinct dependencies in the scan
    /// * `message` - Usually the `group:name:version` coordinate
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning, e.g. missing license data for a dependency
    fn report_error(&self, message: &str);

    /// Reports completion of a step and ends any active progress display
    fn report_completion(&self, message: &str);
}
