//! Error types for the bandstand core.

use thiserror::Error;

/// Errors at the inbound boundary of the site controller.
///
/// State transitions themselves are total functions and never fail; the
/// only thing that can go wrong is handing the controller a product
/// reference the catalog has never heard of.
#[derive(Error, Debug)]
pub enum BandstandError {
    #[error("Unknown product reference: {0}")]
    UnknownProduct(String),
}

/// Result type alias for bandstand operations.
pub type BandstandResult<T> = Result<T, BandstandError>;
