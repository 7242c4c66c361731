//! Infrastructure adapters and runtime bootstrap.

pub mod error;
pub mod generate;
pub mod http;
pub mod store;
pub mod telemetry;
