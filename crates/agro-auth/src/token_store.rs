//! Persistence of the provider session between CLI invocations.
//!
//! The session is kept as JSON in the OS keychain. When the keychain is not
//! available it goes to `~/.agrosalud/session.json` (mode 0600) instead.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;
use crate::session::AuthSession;

const DEFAULT_KEYRING_SERVICE: &str = "agrosalud-cli";
const KEYRING_USER: &str = "session";
const SESSION_FILE_NAME: &str = "session.json";

/// Keyring service name, overridable via `AGROSALUD_KEYRING_SERVICE` so tests
/// never touch real credentials.
fn keyring_service() -> String {
    std::env::var("AGROSALUD_KEYRING_SERVICE")
        .unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Where a session was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Keyring,
    File,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::File => "file",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    use_keyring: bool,
    file: PathBuf,
}

impl TokenStore {
    /// Keychain first, then `~/.agrosalud/session.json`.
    pub fn default_location() -> Result<Self, AuthError> {
        let file = dirs::home_dir()
            .map(|home| home.join(".agrosalud").join(SESSION_FILE_NAME))
            .ok_or_else(|| {
                AuthError::TokenStore("home directory not found; cannot store session".into())
            })?;
        Ok(Self {
            use_keyring: true,
            file,
        })
    }

    /// File storage only, at `path`.
    pub fn file_only(path: impl Into<PathBuf>) -> Self {
        Self {
            use_keyring: false,
            file: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn save(&self, session: &AuthSession) -> Result<(), AuthError> {
        let json = serde_json::to_string(session)
            .map_err(|e| AuthError::TokenStore(format!("serialize session: {e}")))?;

        if self.use_keyring {
            match keyring::Entry::new(&keyring_service(), KEYRING_USER)
                .and_then(|entry| entry.set_password(&json))
            {
                Ok(()) => return Ok(()),
                Err(error) => tracing::warn!(%error, "keyring store failed; falling back to file"),
            }
        }
        self.save_file(&json)
    }

    /// The stored session, if any. Unreadable entries count as absent.
    #[must_use]
    pub fn load(&self) -> Option<AuthSession> {
        self.load_with_source().map(|(session, _)| session)
    }

    #[must_use]
    pub fn load_with_source(&self) -> Option<(AuthSession, TokenSource)> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
            && let Ok(json) = entry.get_password()
            && let Some(session) = parse(&json)
        {
            return Some((session, TokenSource::Keyring));
        }
        let json = fs::read_to_string(&self.file).ok()?;
        parse(&json).map(|session| (session, TokenSource::File))
    }

    /// Remove the session from every tier.
    pub fn clear(&self) -> Result<(), AuthError> {
        if self.use_keyring
            && let Ok(entry) = keyring::Entry::new(&keyring_service(), KEYRING_USER)
        {
            // absent entries are fine
            let _ = entry.delete_credential();
        }
        if self.file.exists() {
            fs::remove_file(&self.file).map_err(|e| {
                AuthError::TokenStore(format!("failed to delete {}: {e}", self.file.display()))
            })?;
        }
        Ok(())
    }

    fn save_file(&self, json: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.file.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AuthError::TokenStore(format!("mkdir {}: {e}", parent.display())))?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.file, json)
            .map_err(|e| AuthError::TokenStore(format!("write {}: {e}", self.file.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.file, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStore(format!("chmod {}: {e}", self.file.display()))
            })?;
        }
        Ok(())
    }
}

fn parse(json: &str) -> Option<AuthSession> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(session) => Some(session),
        Err(error) => {
            tracing::warn!(%error, "ignoring unreadable stored session");
            None
        }
    }
}
