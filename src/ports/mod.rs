/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the infrastructure interfaces the
/// attribution core depends on.
pub mod outbound;
