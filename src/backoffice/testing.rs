//! In-process stand-in for the remote api, shared by the test modules.

use std::path::PathBuf;
use std::time::Duration;
use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpServer};
use tempfile::TempDir;
use crate::backoffice::auth::session::Session;
use crate::backoffice::auth::store::SessionStore;
use crate::backoffice::model::config::AppConfig;
use crate::backoffice::transport::client::ApiClient;

/// Start a server on an ephemeral port with the given routes, returning its base url.
pub(crate) async fn serve<F>(routes: F) -> (String, ServerHandle)
where
    F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
{
    let server = HttpServer::new(move || App::new().configure(routes.clone()))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("failed to bind mock api");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}"), handle)
}

pub(crate) fn config_for(base: &str, session_file: PathBuf) -> AppConfig {
    AppConfig::new(base.to_string(), session_file, Duration::from_secs(5))
}

/// Client for `base` whose session file lives in the returned temp dir.
pub(crate) fn client_for(base: &str, session: Option<Session>) -> (ApiClient, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = config_for(base, dir.path().join("session.json"));
    let store = SessionStore::new(config.session_file.clone());
    let api = ApiClient::new(&config, session, store).expect("failed to build client");
    (api, dir)
}
