mod blob_codec;
mod document_builder;
mod graph_flattener;
mod license_flattener;
mod rule_table;

pub use blob_codec::BlobCodec;
pub use document_builder::DocumentBuilder;
pub use graph_flattener::GraphFlattener;
pub use license_flattener::LicenseFlattener;
pub use rule_table::{Rule, RuleId, VersionedRuleTable};
