use crate::backoffice::auth;
use crate::backoffice::auth::session::Session;
use crate::backoffice::auth::store::SessionStore;
use crate::backoffice::model::config::AppConfig;
use crate::backoffice::transport::client::ApiClient;
use crate::backoffice::transport::error::ApiError;
use crate::backoffice::util::time::helper;

/// Everything one invocation works with: the session store, the restored session and an
/// api client bound to it.
pub(crate) struct AppState {
    store: SessionStore,
    api: ApiClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let store = SessionStore::new(config.session_file.clone());
        let session = auth::restore(&store, helper::get_utc_now());
        let api = ApiClient::new(config, session, store.clone())?;
        Ok(Self { store, api })
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session(&self) -> Option<&Session> {
        self.api.session()
    }

    /// Screens other than login are only reachable with a session.
    pub fn require_session(&self) -> Result<&Session, ApiError> {
        self.session().ok_or(ApiError::Unauthenticated)
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;
    use super::*;
    use crate::backoffice::auth::session::test_token;
    use crate::backoffice::testing::config_for;

    #[test]
    fn app_state_restores_live_session() {
        helper::set_utc_now(100);
        let dir = tempfile::tempdir().unwrap();
        let config = config_for("http://localhost:8080", dir.path().join("session.json"));
        let session = Session { token: test_token(Some(200)), user: json!({"username": "sal"}) };
        SessionStore::new(config.session_file.clone()).save(&session).unwrap();

        let state = AppState::new(&config).unwrap();
        assert_eq!(state.require_session().unwrap(), &session);
        assert_eq!(state.store().path(), config.session_file.as_path());
    }

    #[test]
    fn app_state_without_session_is_locked() {
        helper::set_utc_now(300);
        let dir = tempfile::tempdir().unwrap();
        let config = config_for("http://localhost:8080", dir.path().join("session.json"));
        SessionStore::new(config.session_file.clone())
            .save(&Session { token: test_token(Some(200)), user: json!({}) })
            .unwrap();

        let state = AppState::new(&config).unwrap();
        assert!(state.session().is_none());
        assert!(matches!(state.require_session(), Err(ApiError::Unauthenticated)));
        assert!(!config.session_file.exists());
    }
}
