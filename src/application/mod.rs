/// Application layer - Use cases and DTOs
///
/// Orchestrates the read-modify-write flows against the marketplace through
/// the outbound ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
