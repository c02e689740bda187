//! High-level entry points that combine loading, editing and writing.

pub mod recipe;
