use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{SAVE_VERSION, SaveData, load_from_json_string, save_to_json_string};

/// Loads and stores snapshots keyed by user id.
pub trait PersistenceGateway {
    fn load(&self, user_id: &str) -> Result<Option<SaveData>>;

    fn save(&mut self, user_id: &str, save: &SaveData) -> Result<()>;

    /// Patches only the wallet address of an existing snapshot. Returns
    /// `false` when the user has no snapshot yet.
    fn save_wallet(&mut self, user_id: &str, address: &str) -> Result<bool> {
        let Some(mut save) = self.load(user_id)? else {
            return Ok(false);
        };
        save.player.wallet_address = Some(address.to_string());
        self.save(user_id, &save)?;
        Ok(true)
    }
}

/// One pretty-printed JSON file per user inside `dir`.
#[derive(Debug, Clone)]
pub struct FileGateway {
    dir: PathBuf,
}

impl FileGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, user_id: &str) -> PathBuf {
        self.dir.join(format!(
            "fame_clicker_{}_v{SAVE_VERSION}.json",
            sanitize_user_id(user_id)
        ))
    }
}

impl PersistenceGateway for FileGateway {
    fn load(&self, user_id: &str) -> Result<Option<SaveData>> {
        let path = self.path_for(user_id);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed reading save file: {}", path.display()))?;
        let save = load_from_json_string(&text)
            .with_context(|| format!("failed loading save file: {}", path.display()))?;
        Ok(Some(save))
    }

    fn save(&mut self, user_id: &str, save: &SaveData) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed creating save dir: {}", self.dir.display()))?;

        let path = self.path_for(user_id);
        let staging = path.with_extension("json.tmp");
        let json = save_to_json_string(save)?;
        fs::write(&staging, json)
            .with_context(|| format!("failed writing save file: {}", staging.display()))?;
        fs::rename(&staging, &path)
            .with_context(|| format!("failed replacing save file: {}", path.display()))?;

        debug!(user = user_id, path = %path.display(), "saved progress");
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryGateway {
    snapshots: HashMap<String, SaveData>,
}

impl MemoryGateway {
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl PersistenceGateway for MemoryGateway {
    fn load(&self, user_id: &str) -> Result<Option<SaveData>> {
        Ok(self.snapshots.get(user_id).cloned())
    }

    fn save(&mut self, user_id: &str, save: &SaveData) -> Result<()> {
        self.snapshots.insert(user_id.to_string(), save.clone());
        Ok(())
    }
}

/// Keeps `[A-Za-z0-9-]` and writes every other byte as `_xx` (lowercase
/// hex), so distinct ids never share a file name.
pub fn sanitize_user_id(user_id: &str) -> String {
    let mut encoded = String::with_capacity(user_id.len());
    for byte in user_id.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            let _ = write!(encoded, "_{byte:02x}");
        }
    }
    encoded
}
