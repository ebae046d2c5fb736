use serde::Serialize;

use super::entry::{MovieEntry, Section};
use crate::parsers::{parse_entries, parse_sections};

/// A parsed movie log: the flat entry list and the year sections of one document
///
/// Built once per retrieved document and handed by reference to every view and
/// aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MovieLog {
    pub entries: Vec<MovieEntry>,
    pub sections: Vec<Section>,
}

impl MovieLog {
    pub fn parse(text: &str) -> Self {
        Self { entries: parse_entries(text), sections: parse_sections(text) }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_document() {
        let log = MovieLog::parse("");
        assert!(log.is_empty());
        assert_eq!(log, MovieLog::default());
    }

    #[test]
    fn test_parse_keeps_flat_and_sectioned_views_consistent() {
        let text = "- [x] Alien - 8.4/10\n## 2024\n- [ ] Dune\n- [x] Heat 8/10";
        let log = MovieLog::parse(text);

        let from_sections: Vec<&MovieEntry> =
            log.sections.iter().flat_map(|s| s.items.iter()).collect();
        let flat: Vec<&MovieEntry> = log.entries.iter().collect();
        assert_eq!(from_sections, flat);
        assert_eq!(log.sections.len(), 2);
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "## 2023\n- [x] Arrival:9/10\n- [ ] Tár\n## 2024\n";
        assert_eq!(MovieLog::parse(text), MovieLog::parse(text));
    }
}
