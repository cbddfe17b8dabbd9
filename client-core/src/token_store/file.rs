use super::{TokenPair, TokenStore};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

const TOKEN_FILE_NAME: &str = "auth_tokens.json";
const TOKEN_TEMP_FILE_NAME: &str = "auth_tokens.json.tmp";

/// Persistent backend: one JSON record in a file under the given directory.
///
/// Writes go through a temp file followed by a rename, so a reader only
/// ever observes a complete pair or no pair at all.
pub struct FileTokenStore {
    token_file: PathBuf,
    temp_file: PathBuf,
}

impl FileTokenStore {
    /// Create a store rooted at `data_dir`. The directory is created on
    /// first write, not here.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            token_file: data_dir.join(TOKEN_FILE_NAME),
            temp_file: data_dir.join(TOKEN_TEMP_FILE_NAME),
        }
    }

    /// Create a store under the platform user data directory, namespaced
    /// by `app_dir_name`. Returns `None` when the platform has no data
    /// directory (some containerized environments).
    pub fn in_user_data_dir(app_dir_name: &str) -> Option<Self> {
        dirs::data_dir().map(|data_dir| Self::new(&data_dir.join(app_dir_name)))
    }

    /// Path of the backing file, useful for diagnostics.
    pub fn path(&self) -> &Path {
        &self.token_file
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<TokenPair> {
        let content = match fs::read_to_string(&self.token_file) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => return None,
            Err(error) => {
                warn!("Failed to read token file {:?}: {}", self.token_file, error);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(pair) => Some(pair),
            Err(error) => {
                // Corrupt data is treated as absent, not as an error.
                warn!("Stored token pair is unparseable, treating as absent: {error}");
                None
            }
        }
    }

    fn set(&self, pair: &TokenPair) {
        let json = match serde_json::to_string(pair) {
            Ok(json) => json,
            Err(error) => {
                warn!("Failed to serialize token pair: {error}");
                return;
            }
        };

        if let Some(parent) = self.token_file.parent() {
            if let Err(error) = fs::create_dir_all(parent) {
                warn!("Failed to create token directory {:?}: {}", parent, error);
                return;
            }
        }

        if let Err(error) = fs::write(&self.temp_file, &json) {
            warn!("Failed to write token file {:?}: {}", self.temp_file, error);
            return;
        }
        if let Err(error) = fs::rename(&self.temp_file, &self.token_file) {
            warn!("Failed to commit token file {:?}: {}", self.token_file, error);
        }
    }

    fn clear(&self) {
        match fs::remove_file(&self.token_file) {
            Ok(()) => debug!("Cleared stored token pair"),
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => {
                warn!("Failed to clear token file {:?}: {}", self.token_file, error);
            }
        }
    }
}
