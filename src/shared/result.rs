/// Result alias used across the crate. Typed failures are
/// [`AttributionError`](super::AttributionError) values carried inside the
/// `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
