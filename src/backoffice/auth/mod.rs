//! Login session lifecycle: created at login, restored at startup, cleared at logout
//! or when the token expires.

pub(crate) mod error;
pub(crate) mod session;
pub(crate) mod store;

use chrono::{DateTime, Utc};
use log::{error, info, warn};
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::backoffice::auth::error::AuthError;
use crate::backoffice::auth::session::Session;
use crate::backoffice::auth::store::SessionStore;
use crate::backoffice::transport::client::{is_json, ApiClient};
use crate::backoffice::transport::error::ApiError;

const LOGIN_ENDPOINT: &str = "/auth/login";
const INVALID_CREDENTIALS_MSG: &str = "Invalid credentials";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: Value,
    token: String,
}

/// Exchange credentials for a session and persist it.
pub(crate) async fn login(
    api: &ApiClient,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let res = api
        .http()
        .post(api.url(LOGIN_ENDPOINT))
        .header(CONTENT_TYPE, "application/json")
        .json(&LoginRequest { username, password })
        .send()
        .await
        .map_err(|e| AuthError::Api(ApiError::Transport(e)))?;

    if !res.status().is_success() {
        warn!("login rejected for user={}, status={}", username, res.status());
        let message = match is_json(&res) {
            true => res
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| body.get("message").and_then(Value::as_str).map(str::to_string)),
            false => None,
        };
        return Err(AuthError::Rejected(
            message.unwrap_or_else(|| INVALID_CREDENTIALS_MSG.to_string()),
        ));
    }
    if !is_json(&res) {
        return Err(AuthError::NonJsonResponse);
    }

    let LoginResponse { user, token } = res
        .json()
        .await
        .map_err(|e| AuthError::Api(ApiError::Transport(e)))?;
    let session = Session { token, user };
    store.save(&session)?;
    info!("logged in as {}", session.display_name());
    Ok(session)
}

pub(crate) fn logout(store: &SessionStore) -> Result<(), AuthError> {
    store.clear()?;
    info!("logged out, cleared {}", store.path().display());
    Ok(())
}

/// Load the stored session. Expired or unreadable sessions are cleared and yield `None`.
pub(crate) fn restore(store: &SessionStore, now: DateTime<Utc>) -> Option<Session> {
    match store.load() {
        Ok(Some(session)) if !session.is_expired(now) => return Some(session),
        Ok(Some(session)) => info!("stored session for {} has expired", session.display_name()),
        Ok(None) => return None,
        Err(e) => error!("error reading stored session, {}", e),
    }
    if let Err(e) = store.clear() {
        warn!("failed to clear stored session, {}", e);
    }
    None
}

#[cfg(test)]
mod test {
    use std::fs;
    use actix_web::{web, HttpResponse};
    use serde_json::json;
    use super::*;
    use crate::backoffice::auth::session::test_token;
    use crate::backoffice::testing::{client_for, serve};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[actix_web::test]
    async fn login_persists_session() {
        let token = test_token(Some(10_000));
        let issued = token.clone();
        let (base, _srv) = serve(move |cfg| {
            let issued = issued.clone();
            cfg.route(LOGIN_ENDPOINT, web::post().to(move |body: web::Json<Value>| {
                let issued = issued.clone();
                async move {
                    match body["username"] == json!("sal") && body["password"] == json!("pizza") {
                        true => HttpResponse::Ok().json(json!({"user": {"username": "sal"}, "token": issued})),
                        false => HttpResponse::Unauthorized().json(json!({"message": "Wrong password"})),
                    }
                }
            }));
        })
        .await;
        let (api, dir) = client_for(&base, None);
        let store = store_in(&dir);

        let err = login(&api, &store, "sal", "pasta").await.unwrap_err();
        assert_eq!(err.to_string(), "Wrong password");
        assert!(store.load().unwrap().is_none());

        let session = login(&api, &store, "sal", "pizza").await.unwrap();
        assert_eq!(session.token, token);
        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[actix_web::test]
    async fn login_failure_messages() {
        let (base, _srv) = serve(|cfg| {
            cfg.route("/auth/login", web::post().to(|| async {
                HttpResponse::Forbidden().content_type("text/html").body("<h1>no</h1>")
            }));
        })
        .await;
        let (api, dir) = client_for(&base, None);
        let err = login(&api, &store_in(&dir), "a", "b").await.unwrap_err();
        assert_eq!(err.to_string(), INVALID_CREDENTIALS_MSG);

        let (base, _srv2) = serve(|cfg| {
            cfg.route("/auth/login", web::post().to(|| async {
                HttpResponse::Ok().content_type("text/plain").body("welcome")
            }));
        })
        .await;
        let (api, dir) = client_for(&base, None);
        let err = login(&api, &store_in(&dir), "a", "b").await.unwrap_err();
        assert!(matches!(err, AuthError::NonJsonResponse));
    }

    #[test]
    fn restore_keeps_live_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let session = Session { token: test_token(Some(100)), user: json!({"username": "sal"}) };
        store.save(&session).unwrap();
        assert_eq!(restore(&store, at(50)), Some(session));
    }

    #[test]
    fn restore_clears_expired_or_corrupt_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Session { token: test_token(Some(100)), user: json!({}) })
            .unwrap();
        assert_eq!(restore(&store, at(101)), None);
        assert!(!store.path().exists());

        fs::write(store.path(), "garbage").unwrap();
        assert_eq!(restore(&store, at(0)), None);
        assert!(!store.path().exists());

        assert_eq!(restore(&store, at(0)), None);
    }

    #[test]
    fn logout_removes_session_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Session { token: test_token(None), user: json!({}) })
            .unwrap();
        logout(&store).unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
