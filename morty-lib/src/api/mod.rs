//! Listing endpoint access: page decoding and exhaustive pagination.

mod page;
mod pages;
mod source;

pub use page::Page;
pub use pages::Pages;
pub use pages::load_all;
pub use pages::load_all_with_cancel;
pub use source::PageSource;

/// The public character listing the viewer loads by default.
pub const DEFAULT_START_URL: &str = "https://rickandmortyapi.com/api/character";
