//! Static country catalogs.
//!
//! The free-text suggestion list and the sidebar list are kept apart: the
//! suggestion list carries both "Türkiye" and "Turkey", the sidebar only the
//! former and adds a flag glyph per entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryEntry {
    pub name: &'static str,
    pub flag: &'static str,
}

const SUGGESTION_NAMES: &[&str] = &[
    "Türkiye", "Turkey", "Germany", "France", "USA", "Norway", "Sweden", "Finland", "Japan",
    "Iceland",
];

const SIDEBAR: &[CountryEntry] = &[
    CountryEntry { name: "Türkiye", flag: "🇹🇷" },
    CountryEntry { name: "Germany", flag: "🇩🇪" },
    CountryEntry { name: "France", flag: "🇫🇷" },
    CountryEntry { name: "USA", flag: "🇺🇸" },
    CountryEntry { name: "Norway", flag: "🇳🇴" },
    CountryEntry { name: "Sweden", flag: "🇸🇪" },
    CountryEntry { name: "Finland", flag: "🇫🇮" },
    CountryEntry { name: "Japan", flag: "🇯🇵" },
    CountryEntry { name: "Iceland", flag: "🇮🇸" },
];

/// Candidate names for free-text suggestions, in display order.
pub fn suggestion_names() -> &'static [&'static str] {
    SUGGESTION_NAMES
}

/// Sidebar entries, in display order.
pub fn sidebar() -> &'static [CountryEntry] {
    SIDEBAR
}

pub fn sidebar_name(index: usize) -> Option<&'static str> {
    SIDEBAR.get(index).map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogs_are_deduplicated() {
        let names: HashSet<_> = suggestion_names().iter().collect();
        assert_eq!(names.len(), suggestion_names().len());
        let side: HashSet<_> = sidebar().iter().map(|e| e.name).collect();
        assert_eq!(side.len(), sidebar().len());
    }

    #[test]
    fn catalogs_differ_on_turkey() {
        assert!(suggestion_names().contains(&"Turkey"));
        assert!(sidebar().iter().all(|e| e.name != "Turkey"));
        assert_eq!(sidebar_name(0), Some("Türkiye"));
        assert_eq!(sidebar_name(sidebar().len()), None);
    }
}
