use derive_more::{Display, Error};
use crate::backoffice::model::order::DraftError;
use crate::backoffice::transport::error::ApiError;

#[derive(Debug, Display, Error)]
pub(crate) enum ScreenError {
    #[display("{_0}")]
    Api(ApiError),
    #[display("{_0}")]
    Draft(DraftError),
    #[display("no item with id {_0}")]
    UnknownItem(#[error(not(source))] i64),
    #[display("{_0} is required")]
    Blank(#[error(not(source))] &'static str),
}

impl From<ApiError> for ScreenError {
    fn from(e: ApiError) -> Self {
        ScreenError::Api(e)
    }
}

impl From<DraftError> for ScreenError {
    fn from(e: DraftError) -> Self {
        ScreenError::Draft(e)
    }
}
