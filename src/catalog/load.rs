use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use super::model::{Catalog, Occupation};

const DEFAULT_CATALOG_JSON: &str = include_str!("../../data/occupations.json");

/// Loads the occupation catalog from `path`, or the embedded default dataset
/// when no path is given. Duplicate ids and empty catalogs are rejected;
/// career-path references pointing at unknown ids are deliberately left
/// alone (they are dropped per-subset at graph-build time).
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let occupations = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read catalog file {}", path.display()))?;
            parse_catalog(&raw)
                .with_context(|| format!("failed to parse catalog file {}", path.display()))?
        }
        None => parse_catalog(DEFAULT_CATALOG_JSON).context("failed to parse embedded catalog")?,
    };

    if occupations.is_empty() {
        return Err(anyhow!("catalog contains no occupations"));
    }

    let mut seen = HashSet::new();
    for occupation in &occupations {
        if !seen.insert(occupation.id.as_str()) {
            return Err(anyhow!("duplicate occupation id: {}", occupation.id));
        }
    }

    Ok(Catalog::new(occupations))
}

fn parse_catalog(raw: &str) -> Result<Vec<Occupation>> {
    serde_json::from_str(raw).context("invalid occupation JSON")
}
