// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{parse_entries, required_name, BuiltDiagram, DiagramInputError};
use crate::model::{DiagramType, GraphDescription, GraphEdge, GraphNode};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialNetworkInput {
    pub center: String,
    /// One `name, relationship` pair per line.
    pub contacts: String,
}

pub fn build_social_network(
    input: &SocialNetworkInput,
) -> Result<BuiltDiagram, DiagramInputError> {
    let center = required_name("center name", &input.center)?;

    let mut graph = GraphDescription::undirected();
    graph.declare_node(
        center.clone(),
        GraphNode::new(center.as_str())
            .with_shape("ellipse")
            .with_color("blue"),
    );

    let mut warnings = Vec::new();
    for entry in parse_entries::<2>("contacts", &input.contacts) {
        match entry {
            Ok((name, [_, relationship])) => {
                graph.declare_node(
                    name.clone(),
                    GraphNode::new(format!("{name} ({relationship})")),
                );
                graph.add_edge(GraphEdge::new(center.clone(), name));
            }
            Err(warning) => warnings.push(warning),
        }
    }

    let mut built = BuiltDiagram::new(DiagramType::SocialNetwork, center.as_str(), graph);
    built.warnings = warnings;
    Ok(built)
}

#[cfg(test)]
mod tests {
    use super::{build_social_network, SocialNetworkInput};
    use crate::diagrams::MalformedReason;
    use crate::model::GraphNode;

    fn network(contacts: &str) -> SocialNetworkInput {
        SocialNetworkInput {
            center: "Alice".to_owned(),
            contacts: contacts.to_owned(),
        }
    }

    #[test]
    fn contact_becomes_an_undirected_edge() {
        let built = build_social_network(&network("Bob, Friend")).expect("network");

        assert_eq!(built.title, "Social Network for Alice");
        assert!(!built.graph.is_directed());
        assert_eq!(
            built.graph.node("Bob").map(GraphNode::label),
            Some("Bob (Friend)")
        );

        let [edge] = built.graph.edges() else {
            panic!("expected exactly one edge");
        };
        assert_eq!((edge.from().as_str(), edge.to().as_str()), ("Alice", "Bob"));
        assert_eq!(edge.color(), None);
        assert_eq!(edge.style(), None);
    }

    #[test]
    fn empty_contacts_leave_only_the_center() {
        let built = build_social_network(&network("  \n\n")).expect("network");
        assert_eq!(built.graph.nodes().len(), 1);
        assert!(built.graph.node("Alice").is_some());
        assert!(built.graph.edges().is_empty());
        assert!(built.warnings.is_empty());
    }

    #[test]
    fn three_fields_are_malformed_for_contacts() {
        let built =
            build_social_network(&network("Bob, Friend, strong\nCara, Aunt")).expect("network");
        assert_eq!(built.graph.edges().len(), 1);
        assert_eq!(
            built.warnings[0].reason,
            MalformedReason::FieldCount { expected: 2, found: 3 }
        );
    }
}
