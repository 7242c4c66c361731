//! Application services layer scaffolding.

pub mod error;
pub mod generate;
pub mod qc;
pub mod render;
pub mod repos;
