// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram builders.
//!
//! Each builder is a pure function from raw form text to a [`GraphDescription`], a title for
//! the history entry, and the per-line warnings collected while parsing. A malformed line never
//! aborts a build; it is skipped and reported.

mod ecomap;
mod genogram;
mod roadmap;
mod social_network;

pub use ecomap::{build_ecomap, Emotion, EcomapInput};
pub use genogram::{build_genogram, GenogramInput};
pub use roadmap::build_roadmap_placeholder;
pub use social_network::{build_social_network, SocialNetworkInput};

use std::fmt;

use crate::model::{DiagramType, GraphDescription, IdError, NodeId};

/// A freshly built diagram, not yet recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltDiagram {
    pub title: String,
    pub diagram_type: DiagramType,
    pub graph: GraphDescription,
    pub warnings: Vec<MalformedInputLine>,
}

impl BuiltDiagram {
    fn new(diagram_type: DiagramType, subject: &str, graph: GraphDescription) -> Self {
        Self {
            title: format!("{} for {subject}", diagram_type.label()),
            diagram_type,
            graph,
            warnings: Vec::new(),
        }
    }
}

/// A form field that the whole build depends on was unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {source}")]
pub struct DiagramInputError {
    pub field: &'static str,
    #[source]
    pub source: IdError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    FieldCount { expected: usize, found: usize },
    InvalidName(IdError),
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { expected, found } => write!(
                f,
                "expected {expected} comma-separated fields, found {found}"
            ),
            Self::InvalidName(reason) => write!(f, "invalid name ({reason})"),
        }
    }
}

/// One input line, or one entry of a name list, that was skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field} on line {line_no}: {line} ({reason})")]
pub struct MalformedInputLine {
    /// Form field the input came from.
    pub field: &'static str,
    pub line_no: usize,
    pub line: String,
    pub reason: MalformedReason,
}

fn required_name(field: &'static str, raw: &str) -> Result<NodeId, DiagramInputError> {
    NodeId::from_input(raw).map_err(|source| DiagramInputError { field, source })
}

/// A single optional name. A non-blank value that is not a valid name becomes a warning.
fn optional_name(field: &'static str, raw: &str) -> Result<Option<NodeId>, MalformedInputLine> {
    let name = raw.trim();
    if name.is_empty() {
        return Ok(None);
    }
    NodeId::new(name).map(Some).map_err(|reason| MalformedInputLine {
        field,
        line_no: 1,
        line: name.to_owned(),
        reason: MalformedReason::InvalidName(reason),
    })
}

/// Splits a comma- or newline-separated list, dropping blank entries.
///
/// Entries that are not valid names are skipped and returned as warnings.
fn name_list(field: &'static str, raw: &str) -> (Vec<NodeId>, Vec<MalformedInputLine>) {
    let mut names = Vec::new();
    let mut warnings = Vec::new();
    for (idx, line) in raw.lines().enumerate() {
        for entry in line.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
            match NodeId::new(entry) {
                Ok(name) => names.push(name),
                Err(reason) => warnings.push(MalformedInputLine {
                    field,
                    line_no: idx + 1,
                    line: entry.to_owned(),
                    reason: MalformedReason::InvalidName(reason),
                }),
            }
        }
    }
    (names, warnings)
}

/// Parses every non-blank line of `input` into exactly `N` trimmed fields.
///
/// The first field names the node and must be a valid [`NodeId`].
fn parse_entries<'a, const N: usize>(
    field: &'static str,
    input: &'a str,
) -> impl Iterator<Item = Result<(NodeId, [&'a str; N]), MalformedInputLine>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(move |(idx, line)| parse_entry::<N>(field, idx + 1, line))
}

fn parse_entry<'a, const N: usize>(
    field: &'static str,
    line_no: usize,
    line: &'a str,
) -> Result<(NodeId, [&'a str; N]), MalformedInputLine> {
    let malformed = |reason| MalformedInputLine {
        field,
        line_no,
        line: line.trim().to_owned(),
        reason,
    };

    let fields = line.split(',').map(str::trim).collect::<Vec<_>>();
    let fields: [&str; N] = fields.try_into().map_err(|fields: Vec<&str>| {
        malformed(MalformedReason::FieldCount {
            expected: N,
            found: fields.len(),
        })
    })?;
    let name = NodeId::new(fields[0])
        .map_err(|reason| malformed(MalformedReason::InvalidName(reason)))?;
    Ok((name, fields))
}
