//! Character table engine
//!
//! Loads the full character listing from a paginated API and derives the
//! visible page of a client-side filterable, sortable, paginated table.

pub mod api;
pub mod error;
pub mod model;
pub mod rate_limit;
pub mod table;

mod client;

pub use client::*;
