//! # kkredit Core Library
//!
//! Reads, edits and rewrites the column-oriented input files of KKR-CPA
//! electronic-structure solvers: a free-form header, a table of atom-type
//! definitions (species, concentrations, muffin-tin radius, external field,
//! angular-momentum cutoff), a table of atomic positions that refer to those
//! types by label, and a footer.
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Plain value types for the document
//!   (`Document`, `TypeDefinition`, `AtomicPosition`), the text reader and
//!   writer, and composition helpers.
//!
//! - **[`edit`]: The Mutation Layer.** Copy-producing transforms over a
//!   `Document`: relabelling positions by index, coordinate or label, adding
//!   and modifying type definitions, and mixing several species onto one site.
//!   The input document is never altered.
//!
//! - **[`workflows`]: The Public API.** Ordered edit recipes applied to a
//!   loaded document, the entry point used by the command-line front end.
//!
//! Atomic positions are never moved; only the type a site refers to changes.
//! When a document is written, only type definitions that some position
//! actually uses are emitted, in order of first use.

pub mod core;
pub mod edit;
pub mod workflows;

#[cfg(test)]
mod testing;

pub use crate::core::io::kkr::{load, save};
