//! Alias resolution for structural-element categories.
//!
//! Questions mention element categories in many spellings ("bærende
//! konstruksjoner", "hovedbæresystem", ...). The alias table maps those
//! phrases onto the canonical row keys of the requirement table.

/// Comparison form of a question: lowercased with all whitespace removed, so
/// matching is insensitive to spacing and case. The original string is never
/// mutated.
pub fn normalize_question(question: &str) -> String {
    question
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// A resolved alias.
#[derive(Debug, Clone)]
pub struct AliasMatch<'a> {
    /// The alias phrase as declared; echoed back in table answers.
    pub alias: &'a str,
    /// Canonical element category, the row key into the requirement table.
    pub category: &'a str,
}

/// Ordered `(alias, canonical category)` pairs.
///
/// Declaration order is significant: `resolve` returns the FIRST alias whose
/// whitespace-stripped form occurs in the normalized question, even when a
/// more specific alias would match later. Stored as a sequence, not a map, so
/// that iteration order is reproducible.
#[derive(Debug, Clone)]
pub struct AliasTable {
    pairs: Vec<(String, String)>,
}

impl AliasTable {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        AliasTable { pairs }
    }

    /// The alias set shipped with the § 11-4 requirement table.
    pub fn tek17_defaults() -> Self {
        let pairs = [
            ("bærende konstruksjoner", "bærende hovedsystem"),
            ("bærende bygningsdel", "bærende hovedsystem"),
            ("bærende bygningsdeler", "bærende hovedsystem"),
            ("hovedbæresystem", "bærende hovedsystem"),
            ("sekundære bærekonstruksjoner", "sekundære bygningsdeler"),
            ("sekundære bærende konstruksjoner", "sekundære bygningsdeler"),
            ("trappeløp", "trappeløp"),
            ("konstruksjon under kjeller", "bærekonstruksjon under øverste kjeller"),
            ("bæresystem under kjeller", "bærekonstruksjon under øverste kjeller"),
        ];

        AliasTable::new(
            pairs
                .into_iter()
                .map(|(alias, category)| (alias.to_string(), category.to_string()))
                .collect(),
        )
    }

    /// Find the first alias contained in `normalized` (see
    /// [`normalize_question`]). A miss is a normal branch, not an error; it
    /// sends the question to the generative fallback.
    pub fn resolve<'a>(&'a self, normalized: &str) -> Option<AliasMatch<'a>> {
        self.pairs.iter().find_map(|(alias, category)| {
            normalized
                .contains(&normalize_question(alias))
                .then_some(AliasMatch { alias, category })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ignores_case_and_spacing() {
        let aliases = AliasTable::tek17_defaults();

        let spaced = aliases
            .resolve(&normalize_question("Bærende  Konstruksjoner"))
            .unwrap();
        let compact = aliases
            .resolve(&normalize_question("bærendekonstruksjoner"))
            .unwrap();

        assert_eq!(spaced.category, "bærende hovedsystem");
        assert_eq!(spaced.category, compact.category);
    }

    #[test]
    fn first_alias_in_declaration_order_wins() {
        let aliases = AliasTable::new(vec![
            ("alpha beta".to_string(), "first".to_string()),
            ("beta".to_string(), "second".to_string()),
        ]);
        let reversed = AliasTable::new(vec![
            ("beta".to_string(), "second".to_string()),
            ("alpha beta".to_string(), "first".to_string()),
        ]);

        let question = normalize_question("krav til alpha beta her");
        assert_eq!(aliases.resolve(&question).unwrap().category, "first");
        assert_eq!(reversed.resolve(&question).unwrap().category, "second");
    }

    #[test]
    fn broader_default_alias_shadows_more_specific_one() {
        // "sekundære bærende konstruksjoner" contains "bærende konstruksjoner",
        // which is declared earlier, so the broader alias wins.
        let aliases = AliasTable::tek17_defaults();
        let matched = aliases
            .resolve(&normalize_question("sekundære bærende konstruksjoner"))
            .unwrap();

        assert_eq!(matched.alias, "bærende konstruksjoner");
        assert_eq!(matched.category, "bærende hovedsystem");
    }

    #[test]
    fn unknown_phrase_resolves_to_none() {
        let aliases = AliasTable::tek17_defaults();
        assert!(aliases
            .resolve(&normalize_question("hva er kravet til rømningsvei?"))
            .is_none());
    }

    #[test]
    fn normalization_strips_all_whitespace() {
        assert_eq!(
            normalize_question(" Hva\ter kravet\ntil Trappeløp? "),
            "hvaerkravettiltrappeløp?"
        );
    }
}
