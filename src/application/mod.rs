/// Application layer - Use cases and DTOs
///
/// Orchestrates the attribution services: validate the declared licenses,
/// scan the dependency graph, then render and write the license outputs.
pub mod dto;
pub mod use_cases;
