//! Typed models

mod collection;
mod column;
mod record;

pub use collection::*;
pub use column::*;
pub use record::*;
