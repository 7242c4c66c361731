//! Domain layer types and invariants.

pub mod articles;
pub mod blocks;
pub mod entities;
pub mod slug;
pub mod types;
