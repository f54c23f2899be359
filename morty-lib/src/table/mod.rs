//! Client-side table engine.
//!
//! Explicit state holders (filters, sort, pagination, selection) plus a pure
//! derivation turning them and the loaded records into the visible page.
//! [`TableView`] composes them behind one event-per-method surface.

mod columns;
mod derivation;
mod filter;
mod pagination;
mod selection;
mod sort;
mod view;

pub use columns::*;
pub use derivation::*;
pub use filter::*;
pub use pagination::*;
pub use selection::*;
pub use sort::*;
pub use view::*;
