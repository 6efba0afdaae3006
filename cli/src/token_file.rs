//! Token slot persisted to a file between invocations.

#[cfg(test)]
#[path = "token_file_test.rs"]
mod token_file_test;

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use agentdesk::TokenStorage;

const TOKEN_DIR: &str = ".agentdesk";
const TOKEN_FILE: &str = "token";

/// `$HOME/.agentdesk/token`, or `None` when `HOME` is unset.
pub fn default_token_path() -> Option<PathBuf> {
    let home = std::env::var_os("HOME").filter(|home| !home.is_empty())?;
    Some(PathBuf::from(home).join(TOKEN_DIR).join(TOKEN_FILE))
}

#[derive(Clone, Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path)?;
        // `mode` only applies on creation; tighten a file left by older runs.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(token.as_bytes())?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                (!token.is_empty()).then(|| token.to_owned())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => None,
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "failed to read token file");
                None
            }
        }
    }

    fn save(&self, token: &str) {
        if let Err(error) = self.write(token) {
            tracing::warn!(path = %self.path.display(), %error, "failed to write token file");
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::NotFound => {}
            Err(error) => tracing::warn!(path = %self.path.display(), %error, "failed to remove token file"),
        }
    }
}
