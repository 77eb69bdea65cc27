use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Used for the list of generated files handed to the packaging step.
pub trait OutputPresenter {
    /// Presents `content` at the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
