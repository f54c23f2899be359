//! Error types

mod api;
mod input;

pub use api::*;
pub use input::*;

/// Top-level error for loading the dataset.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing endpoint failed or returned something undecodable.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The load was cancelled before the last page arrived.
    #[error("Load cancelled")]
    Cancelled,
}
