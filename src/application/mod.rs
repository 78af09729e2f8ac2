/// Kops group client and its constructors
pub mod client;
/// REST configuration
pub mod config;
/// Traits at the client and transport seams
pub mod interfaces;
/// Rate limiter module for API request throttling
pub mod rate_limiter;
/// Namespace-scoped typed sub-clients
pub mod typed;
