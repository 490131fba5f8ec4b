/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the marketplace API
/// client, artifact storage, console output, and renderers.
pub mod outbound;
