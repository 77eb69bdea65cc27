pub mod error;
pub mod result;
pub mod security;

pub use error::{AttributionError, ExitCode};
pub use result::Result;
