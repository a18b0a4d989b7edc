use anyhow::{Context, Result, ensure};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::{SAVE_VERSION, SaveData};

pub fn save_to_json_string(save_data: &SaveData) -> Result<String> {
    serde_json::to_string_pretty(save_data).context("failed to serialize save data to JSON")
}

/// Parses a snapshot, refusing ones written by a newer format version.
pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    let save: SaveData = serde_json::from_str(json).context("failed to parse save JSON")?;
    ensure!(
        save.version <= SAVE_VERSION,
        "save version {} is newer than supported version {SAVE_VERSION}",
        save.version
    );
    Ok(save)
}

pub fn export_to_base64(save_data: &SaveData) -> Result<String> {
    let json = serde_json::to_string(save_data).context("failed to serialize save data to JSON")?;
    Ok(STANDARD.encode(json.as_bytes()))
}

pub fn import_from_base64(encoded: &str) -> Result<SaveData> {
    let raw = STANDARD
        .decode(encoded.trim())
        .context("failed to decode base64 save payload")?;
    let json = String::from_utf8(raw).context("decoded base64 payload is not UTF-8")?;
    load_from_json_string(&json)
}
