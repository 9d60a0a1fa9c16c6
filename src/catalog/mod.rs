//! Static study-content catalogs.
//!
//! Plain data tables rendered by the CLI and the library browser. The
//! execution core consumes only the `code` field of an entry; everything
//! else is presentational.

use serde::Serialize;

pub mod hooks;
pub mod polyfills;
pub mod questions;
pub mod templates;
pub mod theory;

/// Which catalog a runnable entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Polyfills,
    Hooks,
    Questions,
    Templates,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Polyfills,
        Section::Hooks,
        Section::Questions,
        Section::Templates,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Polyfills => "Polyfills",
            Section::Hooks => "Hook Templates",
            Section::Questions => "Coding Questions",
            Section::Templates => "Playground Templates",
        }
    }

    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            Section::Polyfills => polyfills::ENTRIES,
            Section::Hooks => hooks::ENTRIES,
            Section::Questions => questions::ENTRIES,
            Section::Templates => templates::ENTRIES,
        }
    }
}

/// One runnable study snippet. `expected_output` holds the logical output
/// lines without channel markers; empty means the entry is a free-form
/// starting point with nothing to check against.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub code: &'static str,
    pub expected_output: &'static str,
}

impl CatalogEntry {
    pub fn checkable(&self) -> bool {
        !self.expected_output.is_empty()
    }

    pub fn expected_lines(&self) -> Vec<&'static str> {
        if self.expected_output.is_empty() {
            Vec::new()
        } else {
            self.expected_output.lines().collect()
        }
    }
}

/// Theory track for [`TheoryTopic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    JavaScript,
    React,
}

impl Track {
    pub fn label(self) -> &'static str {
        match self {
            Track::JavaScript => "JavaScript",
            Track::React => "React",
        }
    }
}

/// One theory topic. `body` is markdown and renders through the markdown
/// printer; topics are reading material, not runnable snippets.
#[derive(Debug, Clone, Serialize)]
pub struct TheoryTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub track: Track,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub summary: &'static str,
    pub body: &'static str,
}

/// Look an entry up by id across every runnable section.
pub fn find_entry(id: &str) -> Option<(Section, &'static CatalogEntry)> {
    Section::ALL.iter().find_map(|&section| {
        section
            .entries()
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| (section, entry))
    })
}

pub fn find_topic(id: &str) -> Option<&'static TheoryTopic> {
    theory::TOPICS.iter().find(|topic| topic.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_across_sections_and_topics() {
        let mut seen = HashSet::new();
        for section in Section::ALL {
            for entry in section.entries() {
                assert!(seen.insert(entry.id), "duplicate id: {}", entry.id);
            }
        }
        for topic in theory::TOPICS {
            assert!(seen.insert(topic.id), "duplicate id: {}", topic.id);
        }
    }

    #[test]
    fn every_entry_has_code_and_title() {
        for section in Section::ALL {
            for entry in section.entries() {
                assert!(!entry.code.trim().is_empty(), "empty code: {}", entry.id);
                assert!(!entry.title.is_empty(), "empty title: {}", entry.id);
            }
        }
    }

    #[test]
    fn lookup_finds_entries_and_topics() {
        let (section, entry) = find_entry("array-map").expect("array-map should exist");
        assert_eq!(section, Section::Polyfills);
        assert_eq!(entry.title, "Array.prototype.map");
        assert!(find_topic("closures").is_some());
        assert!(find_entry("no-such-id").is_none());
    }

    #[test]
    fn expected_lines_split_on_newlines() {
        let (_, entry) = find_entry("function-bind").expect("function-bind should exist");
        assert_eq!(entry.expected_lines().len(), 2);
    }
}
