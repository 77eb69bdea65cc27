/// Archive adapters for inspecting dependency artifacts
mod zip_inspector;

pub use zip_inspector::ZipArtifactInspector;
