use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One scraped spell page, fully normalized. Immutable once built.
#[derive(Debug)]
pub struct Spell {
    pub title: String,
    pub content: String,
    pub url: String,
}

/// Write a single spell as `<name>.md` under `dir`, creating `dir` if needed.
pub fn write_spell(dir: &Path, name: &str, spell: &Spell) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.md", name));
    let body = format!(
        "# {}\n\n**Source:** {}\n\n{}",
        spell.title, spell.url, spell.content
    );
    fs::write(&path, body).with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Saved: {}", path.display());
    Ok(())
}

/// Build the combined document: fixed preamble, then every spell in input
/// order under its own heading. No dedup, no sorting.
pub fn combine(spells: &[Spell]) -> String {
    let mut doc = String::from("# D&D 5e Spells\n\n");
    doc.push_str("This file contains spells scraped from [dnd5e.wikidot.com]()\n");

    for spell in spells {
        doc.push_str(&format!(
            "## {}\n\n**URL:** {}\n\n{}\n\n",
            spell.title, spell.url, spell.content
        ));
    }

    doc
}

pub fn write_combined(path: &Path, spells: &[Spell]) -> Result<()> {
    fs::write(path, combine(spells))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Combined file saved: {}", path.display());
    Ok(())
}

// ── Tests ──
