use std::sync::LazyLock;

use regex::Regex;

static EXTRA_BLANKS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// The eight schools of magic, lowercase for substring matching.
const SPELL_SCHOOLS: &[&str] = &[
    "abjuration",
    "conjuration",
    "divination",
    "enchantment",
    "evocation",
    "illusion",
    "necromancy",
    "transmutation",
];

/// Reformat the plain text of a spell page into the Markdown schema.
///
/// Lines are trimmed, empties dropped, and each survivor classified in
/// original order. Fragments carry their own trailing newlines, so rules
/// that pad with blank lines can compound on adjacent lines; the final
/// collapse squeezes any run of 3+ newlines back down to one blank line.
pub fn normalize(raw: &str) -> String {
    let mut out = String::new();
    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        out.push_str(&format_line(line));
    }
    EXTRA_BLANKS_RE.replace_all(&out, "\n\n").into_owned()
}

/// Classify one line and emit its Markdown fragment.
///
/// Rules are ordered and first-match-wins: a description sentence can
/// mention a school name as flavor text, so the header heuristics must run
/// before the passthrough. Splits take everything after the first colon
/// (or literal marker); spell text legitimately contains more colons.
/// Lines that match a rule but lack the expected punctuation fall through
/// to the passthrough instead of truncating.
pub fn format_line(line: &str) -> String {
    // ── Source: <book> ──
    if line.starts_with("Source") {
        if let Some((_, rest)) = line.split_once(':') {
            return format!("**Source:** {}\n\n", rest.trim());
        }
        return format!("{}\n\n", line);
    }

    // ── Level + school header: "3rd-level evocation" / "Evocation cantrip" ──
    let lower = line.to_lowercase();
    if SPELL_SCHOOLS.iter().any(|school| lower.contains(school)) {
        let mut tokens = line.split_whitespace();
        if lower.contains("level") {
            if let (Some(level), Some(school)) = (tokens.next(), tokens.next()) {
                return format!(
                    "**Type:** Spell\n**Level:** {}\n**School:** {}\n\n",
                    level,
                    capitalize(school)
                );
            }
        } else if let Some(school) = tokens.next() {
            return format!("**Type:** Cantrip\n**School:** {}\n\n", capitalize(school));
        }
        return format!("{}\n\n", line);
    }

    // ── Stat block labels ──
    for (label, pad) in [
        ("Casting Time", ""),
        ("Range", ""),
        ("Components", ""),
        ("Duration", "\n"),
    ] {
        if line.starts_with(label) {
            if let Some((_, rest)) = line.split_once(':') {
                return format!("**{}:** {}\n{}", label, rest.trim(), pad);
            }
            return format!("{}\n\n", line);
        }
    }

    // ── Trailing markers: scaling text and class lists ──
    if line.contains("At Higher Levels") {
        if let Some((_, rest)) = line.split_once("At Higher Levels.") {
            return format!("\n**At Higher Levels:** {}\n", rest.trim());
        }
        return format!("{}\n\n", line);
    }
    if line.contains("Spell Lists") {
        if let Some((_, rest)) = line.split_once("Spell Lists.") {
            return format!("\n**Spell Lists:** {}\n", rest.trim());
        }
        return format!("{}\n\n", line);
    }

    // ── Plain description text ──
    format!("{}\n\n", line)
}

/// First char uppercased, remainder lowercased ("evocation" → "Evocation").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

// ── Tests ──
