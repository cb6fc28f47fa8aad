use derive_more::{Display, Error};
use crate::backoffice::transport::error::ApiError;

#[derive(Debug, Display, Error)]
pub(crate) enum AuthError {
    #[display("{_0}")]
    Rejected(#[error(not(source))] String),
    #[display("Server returned non-JSON response")]
    NonJsonResponse,
    #[display("{_0}")]
    Api(ApiError),
    #[display("session file error, {_0}")]
    Store(std::io::Error),
    #[display("session data is corrupted, {_0}")]
    Corrupt(serde_json::Error),
}
