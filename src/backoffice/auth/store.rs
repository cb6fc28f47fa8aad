use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
use std::path::{Path, PathBuf};
use crate::backoffice::auth::error::AuthError;
use crate::backoffice::auth::session::Session;

/// File the current session is kept in between invocations.
#[derive(Debug, Clone)]
pub(crate) struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when no session has been stored.
    pub fn load(&self) -> Result<Option<Session>, AuthError> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map(Some).map_err(AuthError::Corrupt),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::Store(e)),
        }
    }

    /// The file holds a bearer token, so on unix it is readable by the owner only.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        let bytes = serde_json::to_vec_pretty(session).map_err(AuthError::Corrupt)?;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.path).map_err(AuthError::Store)?;
        // mode only applies on creation
        #[cfg(unix)]
        file.set_permissions(fs::Permissions::from_mode(0o600)).map_err(AuthError::Store)?;
        file.write_all(&bytes).map_err(AuthError::Store)
    }

    pub fn clear(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(AuthError::Store(e)),
            _ => Ok(()),
        }
    }
}
