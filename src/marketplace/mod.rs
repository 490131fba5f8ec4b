/// Marketplace core - product aggregate and request-shaping services
pub mod domain;
pub mod services;
