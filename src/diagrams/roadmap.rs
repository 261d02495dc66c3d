// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::BuiltDiagram;
use crate::model::{DiagramType, GraphDescription};

/// The history entry saved for a life roadmap.
///
/// Only an empty graph carrying a `Life Roadmap` comment is recorded; the events themselves
/// stay in the session and are charted, not encoded into the saved diagram.
pub fn build_roadmap_placeholder(owner: &str) -> BuiltDiagram {
    let mut graph = GraphDescription::directed();
    graph.set_comment(Some(DiagramType::LifeRoadmap.label()));
    BuiltDiagram::new(DiagramType::LifeRoadmap, owner, graph)
}

#[cfg(test)]
mod tests {
    use super::build_roadmap_placeholder;
    use crate::model::DiagramType;

    #[test]
    fn placeholder_is_an_empty_commented_graph() {
        let built = build_roadmap_placeholder("Alice");
        assert_eq!(built.title, "Life Roadmap for Alice");
        assert_eq!(built.diagram_type, DiagramType::LifeRoadmap);
        assert!(built.graph.is_empty());
        assert_eq!(built.graph.comment(), Some("Life Roadmap"));
    }
}
