//! Errors surfaced by the HTTP layer.
use derive_more::{Display, Error};

/// Possible HTTP errors.
#[derive(Debug, Display, Error)]
pub enum HTTPError {
    /// 404
    #[display(fmt = "404: Not Found")]
    NotFound,
    /// 500
    #[display(fmt = "500: Internal Server Error")]
    InternalServerError,
}
