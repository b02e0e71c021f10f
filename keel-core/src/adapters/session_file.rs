//! File-backed session store
//!
//! Persists the current session as `session.json` in the Keel directory.
//! Writes take an exclusive file lock so a CLI invocation and a desktop
//! app racing on the same directory cannot interleave partial writes.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fs2::FileExt;

use crate::domain::result::Result;
use crate::domain::Session;
use crate::ports::SessionStore;

const SESSION_FILE: &str = "session.json";

/// Session storage under the Keel directory
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(keel_dir: &Path) -> Self {
        Self {
            path: keel_dir.join(SESSION_FILE),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, session: &Session) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        serde_json::to_writer_pretty(&file, session)?;
        // Lock released when the handle closes.
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session = serde_json::from_str(&content)?;
        Ok(Some(session))
    }

    async fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
