//! Core library for docdir
//!
//! This crate implements the **Functional Core** of the docdir application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The docdir project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`docdir_core`** (this crate): Pure transformation functions with zero I/O
//! - **`docdir`**: I/O operations and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Total**: Malformed feed data degrades to defined defaults, never to an error
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! The core crate is organized by responsibility:
//!
//! - [`doctor`]: Feed record model and total normalization into a canonical record
//! - [`facets`]: Derivation of the available specialty facets from a record set
//! - [`filter`]: The composable filter pipeline over a record set
//! - [`sort`]: Total, stable ordering of a record set
//! - [`query`]: Canonical query state and its flat key/value encoding
//! - [`suggest`]: Autocomplete candidates for partial name input
//!
//! Each module contains:
//!
//! - **Domain models**: Structured types representing feed data and derived state
//! - **Transformation functions**: Pure functions over those models
//! - **Comprehensive tests**: Unit tests using fixture data (no mocking)
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use docdir_core::doctor::parse_feed;
//! use docdir_core::filter::filter_doctors;
//! use docdir_core::query::QueryStore;
//! use docdir_core::sort::sort_doctors;
//!
//! // Normalize a raw feed payload (no HTTP required)
//! let doctors = parse_feed(payload)?;
//!
//! // Rebuild the query state from persisted URL parameters
//! let store = QueryStore::from_params(&params);
//!
//! // Derive the visible list with pure functions
//! let visible = sort_doctors(filter_doctors(&doctors, store.state()), store.state().sort_by);
//! ```
//!
//! The key insight of the pattern: **data transformation logic should be pure
//! and ignorant of where data comes from or where it goes**. The shell decides
//! how the flat parameter pairs reach the store (URL query string, CLI flags);
//! the core only ever sees decoded key/value pairs.

pub mod doctor;
pub mod facets;
pub mod filter;
pub mod query;
pub mod sort;
pub mod suggest;
