use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

use super::Catalog;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// The catalog shipped with the game.
pub fn bundled_catalog() -> Result<Catalog> {
    parse_catalog(BUNDLED_CATALOG, "bundled catalog")
}

pub fn load_catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog: Catalog = read_json_file(path, "catalog")?;
    catalog
        .validate()
        .with_context(|| format!("invalid catalog: {}", path.display()))?;
    Ok(catalog)
}

pub fn parse_catalog(json: &str, label: &str) -> Result<Catalog> {
    let catalog: Catalog =
        serde_json::from_str(json).with_context(|| format!("failed parsing {label} as JSON"))?;
    catalog
        .validate()
        .with_context(|| format!("invalid {label}"))?;
    Ok(catalog)
}

pub fn read_json_file<T>(path: &Path, label: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading {label} file: {}", path.display()))?;

    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing {label} file as JSON: {}", path.display()))
}
