use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

/// Feed items grouped by section key, as embedded in the page payload.
pub type FeedSections = HashMap<String, Vec<FeedItem>>;

/// A single material card in the feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub url: String,
    /// Preview image; materials without one render a plain header.
    #[serde(rename = "img_url", default)]
    pub image_url: Option<String>,
    #[serde(rename = "views", default)]
    pub view_count: u64,
}

/// One of the fixed feed categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Topics,
    Phrasebook,
    Articles,
    Tests,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Topics,
        Section::Phrasebook,
        Section::Articles,
        Section::Tests,
    ];

    /// Key used both in the payload and in the section's page path.
    pub fn key(self) -> &'static str {
        match self {
            Section::Topics => "topics",
            Section::Phrasebook => "phrasebook",
            Section::Articles => "articles",
            Section::Tests => "tests",
        }
    }

    /// Badge text shown on every card of the section.
    pub fn label(self) -> &'static str {
        match self {
            Section::Topics => "ТОПИК",
            Section::Phrasebook => "РАЗГОВОРНИК",
            Section::Articles => "СТАТЬЯ",
            Section::Tests => "ТЕСТ",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Topics => "Topics",
            Section::Phrasebook => "Phrasebook",
            Section::Articles => "Articles",
            Section::Tests => "Tests",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.key() == key)
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
