// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// On-disk and display format for history timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Free-form profile fields; every field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Biodata {
    pub name: String,
    pub age: String,
    pub occupation: String,
}

impl Biodata {
    /// The display name, or `None` when unset.
    pub fn display_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagramType {
    Genogram,
    Ecomap,
    #[serde(rename = "Social Network")]
    SocialNetwork,
    #[serde(rename = "Life Roadmap")]
    LifeRoadmap,
}

impl DiagramType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Genogram => "Genogram",
            Self::Ecomap => "Ecomap",
            Self::SocialNetwork => "Social Network",
            Self::LifeRoadmap => "Life Roadmap",
        }
    }
}

impl fmt::Display for DiagramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One past diagram generation. Entries are never edited once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    title: String,
    #[serde(rename = "dot")]
    diagram_source: String,
    #[serde(rename = "type")]
    diagram_type: DiagramType,
    #[serde(with = "timestamp_serde")]
    timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn new(
        title: impl Into<String>,
        diagram_source: impl Into<String>,
        diagram_type: DiagramType,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            diagram_source: diagram_source.into(),
            diagram_type,
            timestamp,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn diagram_source(&self) -> &str {
        &self.diagram_source
    }

    pub fn diagram_type(&self) -> DiagramType {
        self.diagram_type
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn timestamp_text(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Everything persisted for one identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(rename = "bio")]
    biodata: Biodata,
    history: Vec<HistoryEntry>,
}

impl UserRecord {
    pub fn biodata(&self) -> &Biodata {
        &self.biodata
    }

    /// Replaces the biodata wholesale; fields are never merged.
    pub fn set_biodata(&mut self, biodata: Biodata) {
        self.biodata = biodata;
    }

    /// History in insertion (chronological) order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn append_history(&mut self, entry: HistoryEntry) -> &HistoryEntry {
        self.history.push(entry);
        let last = self.history.len() - 1;
        &self.history[last]
    }
}

mod timestamp_serde {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub(super) fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
