//! Provides input/output functionality for solver input files.
//!
//! A trait-based interface for reading a [`Document`](crate::core::models::document::Document)
//! from text and writing it back, plus the implementation for the KKR-CPA
//! input format.

pub mod kkr;
pub mod traits;
