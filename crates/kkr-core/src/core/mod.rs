//! # Core Module
//!
//! The stateless foundation of the library.
//!
//! - **Document Representation** ([`models`]) - The header, type table,
//!   position table and footer of an input file as owned value types
//! - **File I/O** ([`io`]) - The line-oriented reader and the canonical writer
//! - **Site Compositions** ([`composition`]) - Normalized species fractions used
//!   to build disordered (CPA) sites

pub mod composition;
pub mod io;
pub mod models;
