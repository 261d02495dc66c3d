// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AccountCredentialsParams {
    /// Login identity, usually an email address.
    pub identity: String,
    pub secret: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountRegisterResponse {
    pub identity: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountHomeResponse {
    pub identity: String,
    /// `None` until biodata with a name has been saved.
    pub name: Option<String>,
    pub logged_in_at: String,
    pub history_len: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AccountLogoutResponse {
    pub identity: String,
    /// Unsaved life-roadmap events dropped with the session.
    pub discarded_events: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct McpBiodata {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub occupation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BiodataResponse {
    pub biodata: McpBiodata,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpHistoryEntry {
    pub title: String,
    pub diagram_type: String,
    pub timestamp: String,
    /// Graphviz DOT source of the recorded diagram.
    pub dot: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HistoryListResponse {
    pub entries: Vec<McpHistoryEntry>,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GenogramGenerateParams {
    pub root: String,
    /// Comma-separated names.
    #[serde(default)]
    pub parents: String,
    #[serde(default)]
    pub spouse: String,
    /// Comma-separated names.
    #[serde(default)]
    pub siblings: String,
    /// Comma-separated names.
    #[serde(default)]
    pub children: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EcomapGenerateParams {
    pub center: String,
    /// One `name, relationship, emotion` line per connection; emotion is strong, weak,
    /// negative, or anything else for neutral.
    #[serde(default)]
    pub connections: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SocialNetworkGenerateParams {
    pub center: String,
    /// One `name, relationship` line per contact.
    #[serde(default)]
    pub contacts: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpMalformedLine {
    pub field: String,
    pub line_no: u64,
    pub line: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerateResponse {
    pub entry: McpHistoryEntry,
    /// Input lines that were skipped.
    pub warnings: Vec<McpMalformedLine>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RoadmapAddEventParams {
    /// Age or year the event happened at.
    pub time_label: String,
    pub description: String,
    /// Integer in -10..=10.
    pub impact: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct McpLifeEvent {
    pub time_label: String,
    pub description: String,
    pub impact: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoadmapResponse {
    pub events: Vec<McpLifeEvent>,
    pub chart: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RoadmapSaveResponse {
    pub entry: McpHistoryEntry,
}
