pub mod format;

use std::sync::LazyLock;

use scraper::{Html, Selector};
use thiserror::Error;
use tracing::warn;

use crate::output::Spell;

static TITLE_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.page-title.page-header").unwrap());
static CONTENT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#page-content").unwrap());
static NOISE_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script, style").unwrap());

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("page has no content region")]
    MissingContent,
}

/// Parse one wiki page into a Spell record.
///
/// A missing title block degrades to a title derived from the page name;
/// a missing content block is fatal for the page and the caller skips it.
pub fn extract_spell(html: &str, name: &str, url: &str) -> Result<Spell, ExtractError> {
    let document = Html::parse_document(html);

    let title = match document.select(&TITLE_SEL).next() {
        Some(el) => el.text().collect::<String>().trim().to_string(),
        None => {
            warn!("No title block for {}, deriving from page name", name);
            title_case(name)
        }
    };

    let content_el = document
        .select(&CONTENT_SEL)
        .next()
        .ok_or(ExtractError::MissingContent)?;

    let cleaned = strip_noise(&content_el.html());
    let text: String = Html::parse_fragment(&cleaned).root_element().text().collect();
    let content = format::normalize(&text);

    Ok(Spell {
        title,
        content,
        url: url.to_string(),
    })
}

/// Remove script/style subtrees so embedded code never contaminates the
/// extracted prose. Works on the serialized region, so matched elements
/// re-serialize to exact substrings of the input.
fn strip_noise(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut result = html.to_string();
    for el in fragment.select(&NOISE_SEL) {
        result = result.replace(&el.html(), "");
    }
    result
}

/// "melf's-acid-arrow" → "Melf's Acid Arrow".
fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn fire_bolt_cantrip() {
        let html = fixture("fire-bolt");
        let spell = extract_spell(&html, "fire-bolt", "https://dnd5e.wikidot.com/spell:fire-bolt")
            .unwrap();
        assert_eq!(spell.title, "Fire Bolt");
        assert!(spell.content.contains("**Source:** Player's Handbook"));
        assert!(spell.content.contains("**Type:** Cantrip\n**School:** Evocation"));
        assert!(spell.content.contains("**Casting Time:** 1 action"));
        assert!(spell.content.contains("**Range:** 120 feet"));
        assert!(spell.content.contains("**Spell Lists:** Sorcerer, Wizard"));
    }

    #[test]
    fn acid_arrow_leveled() {
        let html = fixture("acid-arrow");
        let spell = extract_spell(&html, "acid-arrow", "https://dnd5e.wikidot.com/spell:acid-arrow")
            .unwrap();
        assert_eq!(spell.title, "Acid Arrow");
        assert!(spell
            .content
            .contains("**Type:** Spell\n**Level:** 2nd-level\n**School:** Evocation"));
        assert!(spell.content.contains("**Duration:** Instantaneous"));
        assert!(spell.content.contains("**At Higher Levels:** When you cast this spell"));
    }

    #[test]
    fn script_and_style_text_is_dropped() {
        let html = fixture("fire-bolt");
        let spell = extract_spell(&html, "fire-bolt", "url").unwrap();
        assert!(!spell.content.contains("createTechBox"));
        assert!(!spell.content.contains("font-weight"));
    }

    #[test]
    fn no_blank_line_runs_in_content() {
        for name in ["fire-bolt", "acid-arrow"] {
            let spell = extract_spell(&fixture(name), name, "url").unwrap();
            assert!(!spell.content.contains("\n\n\n"), "run of blanks in {}", name);
        }
    }

    #[test]
    fn missing_title_derives_from_page_name() {
        let html = r#"<html><body><div id="page-content"><p>Range: Self</p></div></body></html>"#;
        let spell = extract_spell(html, "melf's-acid-arrow", "url").unwrap();
        assert_eq!(spell.title, "Melf's Acid Arrow");
    }

    #[test]
    fn missing_content_is_an_error() {
        let html = r#"<html><body><div class="page-title page-header">Lost Page</div></body></html>"#;
        let err = extract_spell(html, "lost-page", "url").unwrap_err();
        assert!(matches!(err, ExtractError::MissingContent));
    }
}
