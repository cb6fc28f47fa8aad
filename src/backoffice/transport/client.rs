use log::{debug, error, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use crate::backoffice::auth::session::Session;
use crate::backoffice::auth::store::SessionStore;
use crate::backoffice::model::config::AppConfig;
use crate::backoffice::transport::error::ApiError;
use crate::backoffice::transport::ApiResponse;
use crate::backoffice::util::time::helper;

/// Api client bound to one base url and, optionally, one login session.
pub(crate) struct ApiClient {
    http: Client,
    base_url: String,
    session: Option<Session>,
    store: SessionStore,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Option<Session>, store: SessionStore) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
            store,
        })
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiResponse, ApiError> {
        self.send(Method::GET, endpoint, query, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<ApiResponse, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Encode)?;
        self.send(Method::POST, endpoint, &[], Some(body)).await
    }

    /// Issue one request. An expired session is cleared from the store and fails the
    /// call before anything is sent.
    pub async fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse, ApiError> {
        let mut req = self
            .http
            .request(method.clone(), self.url(endpoint))
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.bearer()? {
            req = req.bearer_auth(token);
        }
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        debug!("{} {}", method, endpoint);
        let result = execute(req).await;
        if let Err(e) = &result {
            error!("api request {} {} failed, {}", method, endpoint, e);
        }
        result
    }

    fn bearer(&self) -> Result<Option<&str>, ApiError> {
        let Some(session) = &self.session else {
            return Ok(None);
        };
        if session.is_expired(helper::get_utc_now()) {
            warn!("session token expired, clearing stored session");
            if let Err(e) = self.store.clear() {
                warn!("failed to clear session file, {}", e);
            }
            return Err(ApiError::SessionExpired);
        }
        Ok(Some(session.token.as_str()))
    }
}

async fn execute(req: RequestBuilder) -> Result<ApiResponse, ApiError> {
    let res = req.send().await.map_err(ApiError::Transport)?;
    let status = res.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    if is_json(&res) {
        return res.json().await.map(ApiResponse::Json).map_err(ApiError::Transport);
    }
    res.text().await.map(ApiResponse::Text).map_err(ApiError::Transport)
}

pub(crate) fn is_json(res: &reqwest::Response) -> bool {
    res.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"))
}
