use crate::core::errors::LedgerError;
use crate::core::models::ledger::LedgerState;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

/// Keeps the ledger as one pretty-printed JSON document on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileStorage {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes an empty ledger if the document does not exist yet.
    pub async fn init(&self) -> Result<(), LedgerError> {
        if fs::try_exists(&self.path).await.unwrap_or(false) {
            return Ok(());
        }
        debug!("Creating empty ledger at {}", self.path.display());
        self.save(&LedgerState::new()).await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load(&self) -> Result<LedgerState, LedgerError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LedgerState::new()),
            Err(e) => {
                warn!("Failed to read ledger {}: {}", self.path.display(), e);
                return Ok(LedgerState::new());
            }
        };
        match serde_json::from_str(&content) {
            Ok(state) => Ok(state),
            // Well-formed JSON of the wrong shape is never treated as empty.
            Err(e) if e.is_data() => {
                error!("Ledger {} does not match the expected shape: {}", self.path.display(), e);
                Err(LedgerError::StorageError(format!(
                    "Ledger {} could not be read: {}",
                    self.path.display(),
                    e
                )))
            }
            Err(e) => {
                warn!("Ledger {} is not valid JSON, starting empty: {}", self.path.display(), e);
                Ok(LedgerState::new())
            }
        }
    }

    async fn save(&self, state: &LedgerState) -> Result<(), LedgerError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| LedgerError::StorageError(format!("Failed to serialize ledger: {}", e)))?;
        let temp = self.temp_path();
        fs::write(&temp, json)
            .await
            .map_err(|e| LedgerError::StorageError(format!("Failed to write {}: {}", temp.display(), e)))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| LedgerError::StorageError(format!("Failed to replace {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
