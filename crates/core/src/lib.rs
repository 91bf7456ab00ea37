//! Mobilya Core - Shared types library.
//!
//! This crate provides the common types used across the Mobilya storefront:
//! - [`types`] - Newtype IDs, catalog records, categories, and price formatting
//! - [`cart`] - The pure cart algebra (lines, totals, quantity rules)
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no HTTP,
//! no storage access. Persistence and transport live in the storefront crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod types;

pub use cart::*;
pub use types::*;
