pub mod attribution_record;
pub mod coordinate;
pub mod dependency;
pub mod license;

pub use attribution_record::{AttributionRecord, RecordBuilder};
pub use coordinate::{ModuleKey, ModuleVersion};
pub use dependency::{DependencyGraph, DependencyNode};
pub use license::License;
