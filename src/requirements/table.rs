//! The structured requirement table from TEK17 § 11-4 tabell 1.
//!
//! Loaded once at startup and read-only for the life of the process.

/// Risk-tier marker ("brannklasse") used by the building code to scale
/// required fire resistance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardClass {
    One,
    Two,
    Three,
}

impl HazardClass {
    /// Fixed scan order for question markers and table lookups.
    pub const ALL: [HazardClass; 3] = [HazardClass::One, HazardClass::Two, HazardClass::Three];

    pub fn as_str(self) -> &'static str {
        match self {
            HazardClass::One => "1",
            HazardClass::Two => "2",
            HazardClass::Three => "3",
        }
    }

    /// Marker substring expected in a normalized question, e.g. "brannklasse2".
    pub fn marker(self) -> String {
        format!("brannklasse{}", self.as_str())
    }
}

#[derive(Debug, Clone)]
struct RequirementEntry {
    category: &'static str,
    class: HazardClass,
    rating: &'static str,
}

/// `(canonical category, hazard class)` -> fire-resistance rating.
///
/// Authoritative and always preferred over generative answers. Ratings are
/// opaque formatted strings ("R 60 [B 60]") that are looked up and echoed,
/// never parsed.
#[derive(Debug, Clone)]
pub struct RequirementTable {
    entries: Vec<RequirementEntry>,
}

impl RequirementTable {
    /// The load-bearing requirements of § 11-4 tabell 1.
    ///
    /// Not every category has an entry for every class; a missing pair is a
    /// normal miss, not an error.
    pub fn tek17_section_11_4() -> Self {
        let entry = |category, class, rating| RequirementEntry {
            category,
            class,
            rating,
        };

        RequirementTable {
            entries: vec![
                entry("bærende hovedsystem", HazardClass::One, "R 30 [B 30]"),
                entry("bærende hovedsystem", HazardClass::Two, "R 60 [B 60]"),
                entry(
                    "bærende hovedsystem",
                    HazardClass::Three,
                    "R 90 A2-s1,d0 [A 90]",
                ),
                entry("sekundære bygningsdeler", HazardClass::Two, "R 60 [B 60]"),
                entry(
                    "sekundære bygningsdeler",
                    HazardClass::Three,
                    "R 60 A2-s1,d0 [A 60]",
                ),
                entry("trappeløp", HazardClass::Two, "R 30 [B 30]"),
                entry("trappeløp", HazardClass::Three, "R 30 A2-s1,d0 [A 30]"),
                entry(
                    "bærekonstruksjon under øverste kjeller",
                    HazardClass::Two,
                    "R 90 A2-s1,d0 [A 90]",
                ),
                entry(
                    "bærekonstruksjon under øverste kjeller",
                    HazardClass::Three,
                    "R 120 A2-s1,d0 [A 120]",
                ),
            ],
        }
    }

    pub fn get(&self, category: &str, class: HazardClass) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.category == category && entry.class == class)
            .map(|entry| entry.rating)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_pair() {
        let table = RequirementTable::tek17_section_11_4();
        assert_eq!(
            table.get("bærende hovedsystem", HazardClass::Three),
            Some("R 90 A2-s1,d0 [A 90]")
        );
    }

    #[test]
    fn missing_class_is_a_miss() {
        let table = RequirementTable::tek17_section_11_4();
        // trappeløp only has entries for classes 2 and 3
        assert_eq!(table.get("trappeløp", HazardClass::One), None);
        assert_eq!(table.get("trappeløp", HazardClass::Two), Some("R 30 [B 30]"));
    }

    #[test]
    fn unknown_category_is_a_miss() {
        let table = RequirementTable::tek17_section_11_4();
        assert_eq!(table.get("yttervegg", HazardClass::Two), None);
    }

    #[test]
    fn class_markers() {
        assert_eq!(HazardClass::Two.marker(), "brannklasse2");
        assert_eq!(HazardClass::ALL.map(HazardClass::as_str), ["1", "2", "3"]);
    }
}
