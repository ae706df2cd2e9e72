//! Paragraph-reference extraction for generative answers.
//!
//! Only the first retrieved chunk is inspected, by retrieval rank. The
//! generated answer text may cite a different or more precise paragraph than
//! the one extracted here; the two are deliberately not reconciled.

use std::sync::OnceLock;

use regex::Regex;

/// Sentinel source for answers where no paragraph reference was found.
pub const UNKNOWN_PARAGRAPH: &str = "Ukjent paragraf";

static PARAGRAPH_RE: OnceLock<Regex> = OnceLock::new();

fn paragraph_re() -> &'static Regex {
    PARAGRAPH_RE.get_or_init(|| Regex::new(r"§\s*11-\d+").expect("valid paragraph pattern"))
}

/// Extract the first chapter-11 paragraph reference (`§ 11-<n>`) from a
/// chunk's raw content.
pub fn extract_paragraph(content: &str) -> Option<String> {
    paragraph_re()
        .find(content)
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_reference_with_space() {
        let content = "Krav til rømningsvei følger av § 11-7 og gjelder alle byggverk.";
        assert_eq!(extract_paragraph(content).as_deref(), Some("§ 11-7"));
    }

    #[test]
    fn extracts_reference_without_space() {
        assert_eq!(extract_paragraph("se §11-14 annet ledd").as_deref(), Some("§11-14"));
    }

    #[test]
    fn first_occurrence_wins() {
        let content = "§ 11-2 angir risikoklasser, mens § 11-4 angir bæreevne.";
        assert_eq!(extract_paragraph(content).as_deref(), Some("§ 11-2"));
    }

    #[test]
    fn no_reference_yields_none() {
        assert_eq!(extract_paragraph("generelle krav til sikkerhet ved brann"), None);
        assert_eq!(extract_paragraph("§ 12-7 gjelder ikke dette kapittelet"), None);
    }
}
