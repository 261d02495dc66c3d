// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Users own a biodata record and an append-only history of generated diagrams; diagrams are
//! built as graph descriptions before being serialized.

pub mod graph;
pub mod ids;
pub mod record;
pub mod roadmap;

pub use graph::{GraphDescription, GraphEdge, GraphKind, GraphNode};
pub use ids::{Id, IdError, Identity, NodeId};
pub use record::{Biodata, DiagramType, HistoryEntry, UserRecord, TIMESTAMP_FORMAT};
pub use roadmap::{ImpactScore, LifeEvent, LifeEventError, LifeRoadmap, MAX_IMPACT, MIN_IMPACT};
