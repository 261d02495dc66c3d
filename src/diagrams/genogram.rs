// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{name_list, optional_name, required_name, BuiltDiagram, DiagramInputError};
use crate::model::{DiagramType, GraphDescription, GraphEdge, GraphNode};

/// Raw genogram form fields. List fields are comma- or newline-separated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenogramInput {
    pub root: String,
    pub parents: String,
    pub spouse: String,
    pub siblings: String,
    pub children: String,
}

/// Builds a family tree centred on `root`.
///
/// Parents point at the root and at every sibling, the root points at its spouse (labelled
/// `spouse`) and at each child. Roles are told apart by shape and color; a name that appears
/// in several roles collapses into one node.
pub fn build_genogram(input: &GenogramInput) -> Result<BuiltDiagram, DiagramInputError> {
    let root = required_name("root name", &input.root)?;
    let (parents, mut warnings) = name_list("parents", &input.parents);
    let spouse = optional_name("spouse", &input.spouse).unwrap_or_else(|warning| {
        warnings.push(warning);
        None
    });
    let (siblings, skipped) = name_list("siblings", &input.siblings);
    warnings.extend(skipped);
    let (children, skipped) = name_list("children", &input.children);
    warnings.extend(skipped);

    let mut graph = GraphDescription::directed();
    graph.declare_node(
        root.clone(),
        GraphNode::new(root.as_str())
            .with_shape("box")
            .with_color("blue"),
    );

    for parent in &parents {
        graph.declare_node(
            parent.clone(),
            GraphNode::new(parent.as_str())
                .with_shape("oval")
                .with_color("green"),
        );
        graph.add_edge(GraphEdge::new(parent.clone(), root.clone()));
    }

    if let Some(spouse) = spouse {
        graph.declare_node(
            spouse.clone(),
            GraphNode::new(spouse.as_str())
                .with_shape("oval")
                .with_color("red"),
        );
        graph.add_edge(GraphEdge::new(root.clone(), spouse).with_label("spouse"));
    }

    for sibling in siblings {
        graph.declare_node(sibling.clone(), GraphNode::new(sibling.as_str()).with_shape("box"));
        for parent in &parents {
            graph.add_edge(GraphEdge::new(parent.clone(), sibling.clone()));
        }
    }

    for child in children {
        graph.declare_node(child.clone(), GraphNode::new(child.as_str()).with_shape("box"));
        graph.add_edge(GraphEdge::new(root.clone(), child));
    }

    let mut built = BuiltDiagram::new(DiagramType::Genogram, root.as_str(), graph);
    built.warnings = warnings;
    Ok(built)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{build_genogram, GenogramInput};
    use crate::diagrams::MalformedReason;
    use crate::model::{DiagramType, GraphNode, IdError};

    fn edge_set(input: &GenogramInput) -> BTreeSet<(String, String)> {
        build_genogram(input)
            .expect("genogram")
            .graph
            .edges()
            .iter()
            .map(|edge| (edge.from().to_string(), edge.to().to_string()))
            .collect()
    }

    fn family() -> GenogramInput {
        GenogramInput {
            root: "Alice".to_owned(),
            parents: "Bob,Carol".to_owned(),
            spouse: "Dan".to_owned(),
            siblings: "Eve".to_owned(),
            children: "Fay".to_owned(),
        }
    }

    #[test]
    fn builds_the_full_family() {
        let built = build_genogram(&family()).expect("genogram");

        assert_eq!(built.title, "Genogram for Alice");
        assert_eq!(built.diagram_type, DiagramType::Genogram);
        assert!(built.graph.is_directed());
        assert!(built.warnings.is_empty());

        let nodes = built
            .graph
            .nodes()
            .keys()
            .map(|id| id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(nodes, vec!["Alice", "Bob", "Carol", "Dan", "Eve", "Fay"]);

        let expected = [
            ("Bob", "Alice"),
            ("Carol", "Alice"),
            ("Alice", "Dan"),
            ("Bob", "Eve"),
            ("Carol", "Eve"),
            ("Alice", "Fay"),
        ]
        .into_iter()
        .map(|(from, to)| (from.to_owned(), to.to_owned()))
        .collect::<BTreeSet<_>>();
        assert_eq!(edge_set(&family()), expected);
        assert_eq!(built.graph.edges().len(), 6);
    }

    #[test]
    fn styles_nodes_by_role() {
        let built = build_genogram(&family()).expect("genogram");
        let style = |name: &str| {
            let node = built.graph.node(name).expect("node");
            (node.shape(), node.color())
        };

        assert_eq!(style("Alice"), (Some("box"), Some("blue")));
        assert_eq!(style("Bob"), (Some("oval"), Some("green")));
        assert_eq!(style("Dan"), (Some("oval"), Some("red")));
        assert_eq!(style("Eve"), (Some("box"), None));
        assert_eq!(style("Fay"), (Some("box"), None));

        let spouse_edge = built
            .graph
            .edges()
            .iter()
            .find(|edge| edge.to().as_str() == "Dan")
            .expect("spouse edge");
        assert_eq!(spouse_edge.label(), Some("spouse"));
    }

    #[test]
    fn root_only_yields_a_single_node() {
        let input = GenogramInput {
            root: "  Alice ".to_owned(),
            spouse: "   ".to_owned(),
            parents: " , ".to_owned(),
            ..GenogramInput::default()
        };
        let built = build_genogram(&input).expect("genogram");
        assert_eq!(built.graph.nodes().len(), 1);
        assert_eq!(built.graph.node("Alice").map(GraphNode::label), Some("Alice"));
        assert!(built.graph.edges().is_empty());
    }

    #[test]
    fn siblings_without_parents_have_no_edges() {
        let input = GenogramInput {
            root: "Alice".to_owned(),
            siblings: "Eve, Gus".to_owned(),
            ..GenogramInput::default()
        };
        let built = build_genogram(&input).expect("genogram");
        assert_eq!(built.graph.nodes().len(), 3);
        assert!(built.graph.edges().is_empty());
    }

    #[test]
    fn duplicate_names_collapse_into_one_node() {
        let input = GenogramInput {
            root: "Alice".to_owned(),
            parents: "Bob, Bob".to_owned(),
            children: "Fay, Fay".to_owned(),
            ..GenogramInput::default()
        };
        let built = build_genogram(&input).expect("genogram");
        assert_eq!(built.graph.nodes().len(), 3);
        assert_eq!(built.graph.edges().len(), 4);
    }

    #[test]
    fn empty_root_is_rejected() {
        let input = GenogramInput {
            root: "   ".to_owned(),
            ..family()
        };
        let err = build_genogram(&input).unwrap_err();
        assert_eq!(err.field, "root name");
        assert_eq!(err.source, IdError::Empty);
    }

    #[test]
    fn invalid_relative_names_are_skipped_not_fatal() {
        let input = GenogramInput {
            parents: "Bob\tSmith, Carol".to_owned(),
            spouse: "D\u{1b}an".to_owned(),
            ..family()
        };
        let built = build_genogram(&input).expect("genogram");

        assert!(built.graph.node("Carol").is_some());
        assert!(built.graph.node("Bob\tSmith").is_none());
        assert!(built.graph.node("Eve").is_some());
        assert_eq!(built.graph.nodes().len(), 4);

        let skipped = built
            .warnings
            .iter()
            .map(|warning| (warning.field, warning.line.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(skipped, vec![("parents", "Bob\tSmith"), ("spouse", "D\u{1b}an")]);
        let control = MalformedReason::InvalidName(IdError::ContainsControl);
        assert!(built.warnings.iter().all(|warning| warning.reason == control));
    }
}
