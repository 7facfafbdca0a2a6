use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Spell list file: class name → spell page names, e.g.
/// `{"wizard": ["fire-bolt", "magic-missile"], "cleric": ["guidance"]}`.
#[derive(Debug, Deserialize)]
pub struct SpellList(BTreeMap<String, Vec<String>>);

impl SpellList {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read spell list {}", path.display()))?;
        let list: SpellList = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid spell list JSON in {}", path.display()))?;
        info!("Loaded {} spell group(s) from {}", list.0.len(), path.display());
        Ok(list)
    }

    /// (class, count) pairs in class order, for the run banner.
    pub fn group_sizes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(class, names)| (class.as_str(), names.len()))
    }

    /// Union of all groups with duplicates removed. Groups iterate in sorted
    /// order and names keep first-seen order, so the work list is stable
    /// across runs.
    pub fn flatten(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for group in self.0.values() {
            for name in group {
                if seen.insert(name.as_str()) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}

// ── Tests ──
