use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub(crate) enum ApiError {
    #[display("HTTP error! status: {_0}")]
    Status(#[error(not(source))] u16),
    #[display("request failed, {_0}")]
    Transport(reqwest::Error),
    #[display("failed to encode request body, {_0}")]
    Encode(serde_json::Error),
    #[display("Session expired. Please log in again.")]
    SessionExpired,
    #[display("not logged in, run `backoffice login` first")]
    Unauthenticated,
}

impl ApiError {
    /// Errors after which nothing on screen can be trusted and the user has to log in.
    pub fn needs_login(&self) -> bool {
        matches!(self, ApiError::SessionExpired | ApiError::Unauthenticated)
    }
}
