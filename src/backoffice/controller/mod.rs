pub(crate) mod appetizer;
pub(crate) mod error;
pub(crate) mod ingredient;
pub(crate) mod pizza;
pub(crate) mod report;

use log::warn;
use serde_json::Value;
use crate::backoffice::controller::error::ScreenError;
use crate::backoffice::model::notice::{NoticeKind, Notices};
use crate::backoffice::normalize::Source;
use crate::backoffice::transport::client::ApiClient;

/// Fetch a list payload. A failure that does not require a new login is reported as a
/// notice and the list renders empty.
async fn fetch_or_notice(
    api: &ApiClient,
    source: Source,
    label: &str,
    notices: &mut Notices,
) -> Result<Option<Value>, ScreenError> {
    match api.get(source.endpoint, &[]).await {
        Ok(res) => Ok(Some(res.into_value())),
        Err(e) if e.needs_login() => Err(e.into()),
        Err(e) => {
            warn!("loading {} failed, {}", label, e);
            notices.push(NoticeKind::Error, format!("Error loading {label}: {e}"));
            Ok(None)
        }
    }
}
