//! # Edit Module
//!
//! Copy-producing transforms over a [`Document`](crate::core::models::document::Document).
//!
//! Every operation borrows its input and returns a new document, so a loaded
//! template can be edited many times without reloading. Positions are never
//! moved; only the label each site refers to, and the set of type
//! definitions, change.
//!
//! - **Relabelling** ([`ops`]) - by position index, by exact coordinate text,
//!   or by current label
//! - **Type definitions** ([`ops`], [`overrides`]) - append new definitions or
//!   override fields of an existing one
//! - **Site mixing** ([`mixing`]) - replace a site type with a new
//!   multi-species type built from a [`Composition`](crate::core::composition::Composition)

pub mod error;
pub mod mixing;
pub mod ops;
pub mod overrides;
