//! Shared serde helpers for wire types

pub mod timestamp;
