// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{parse_entries, required_name, BuiltDiagram, DiagramInputError};
use crate::model::{DiagramType, GraphDescription, GraphEdge, GraphNode};

/// The emotional quality of a relationship, encoded as edge color and line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Strong,
    Weak,
    Negative,
    Neutral,
}

impl Emotion {
    /// Case-insensitive; anything unrecognised is [`Emotion::Neutral`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "strong" => Self::Strong,
            "weak" => Self::Weak,
            "negative" => Self::Negative,
            _ => Self::Neutral,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Strong => "green",
            Self::Weak => "gray",
            Self::Negative => "red",
            Self::Neutral => "black",
        }
    }

    pub fn style(self) -> &'static str {
        match self {
            Self::Strong => "bold",
            Self::Weak => "dashed",
            Self::Negative => "dotted",
            Self::Neutral => "solid",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcomapInput {
    pub center: String,
    /// One `name, relationship, emotion` triple per line.
    pub connections: String,
}

pub fn build_ecomap(input: &EcomapInput) -> Result<BuiltDiagram, DiagramInputError> {
    let center = required_name("center name", &input.center)?;

    let mut graph = GraphDescription::directed();
    graph.declare_node(
        center.clone(),
        GraphNode::new(center.as_str())
            .with_shape("circle")
            .with_color("blue"),
    );

    let mut warnings = Vec::new();
    for entry in parse_entries::<3>("connections", &input.connections) {
        let (name, [_, relationship, emotion]) = match entry {
            Ok(entry) => entry,
            Err(warning) => {
                warnings.push(warning);
                continue;
            }
        };

        let emotion = Emotion::parse(emotion);
        graph.declare_node(
            name.clone(),
            GraphNode::new(format!("{name} ({relationship})")),
        );
        graph.add_edge(
            GraphEdge::new(center.clone(), name)
                .with_color(emotion.color())
                .with_style(emotion.style()),
        );
    }

    let mut built = BuiltDiagram::new(DiagramType::Ecomap, center.as_str(), graph);
    built.warnings = warnings;
    Ok(built)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{build_ecomap, EcomapInput, Emotion};
    use crate::diagrams::MalformedReason;
    use crate::model::GraphNode;

    fn ecomap(connections: &str) -> EcomapInput {
        EcomapInput {
            center: "Alice".to_owned(),
            connections: connections.to_owned(),
        }
    }

    #[rstest]
    #[case("strong", "green", "bold")]
    #[case("WEAK", "gray", "dashed")]
    #[case(" Negative ", "red", "dotted")]
    #[case("ambivalent", "black", "solid")]
    #[case("", "black", "solid")]
    fn emotion_maps_to_color_and_style(
        #[case] raw: &str,
        #[case] color: &str,
        #[case] style: &str,
    ) {
        let emotion = Emotion::parse(raw);
        assert_eq!((emotion.color(), emotion.style()), (color, style));
    }

    #[test]
    fn strong_institution_line_becomes_a_green_bold_edge() {
        let built = build_ecomap(&ecomap("School, Institution, strong")).expect("ecomap");

        assert_eq!(built.title, "Ecomap for Alice");
        assert!(built.warnings.is_empty());
        assert_eq!(
            built.graph.node("School").map(GraphNode::label),
            Some("School (Institution)")
        );
        assert_eq!(
            built.graph.node("Alice").and_then(GraphNode::shape),
            Some("circle")
        );

        let [edge] = built.graph.edges() else {
            panic!("expected exactly one edge");
        };
        assert_eq!(edge.from().as_str(), "Alice");
        assert_eq!(edge.to().as_str(), "School");
        assert_eq!(edge.color(), Some("green"));
        assert_eq!(edge.style(), Some("bold"));
    }

    #[test]
    fn malformed_lines_are_skipped_and_reported() {
        let input = ecomap("Bad,Line\nWork, Employer, weak\nToo, many, fields, here\n");
        let built = build_ecomap(&input).expect("ecomap");

        assert_eq!(built.graph.nodes().len(), 2);
        assert_eq!(built.graph.edges().len(), 1);
        assert!(built.graph.node("Bad").is_none());

        assert_eq!(built.warnings.len(), 2);
        assert_eq!(built.warnings[0].line_no, 1);
        assert_eq!(built.warnings[0].line, "Bad,Line");
        assert_eq!(
            built.warnings[0].reason,
            MalformedReason::FieldCount { expected: 3, found: 2 }
        );
        assert_eq!(built.warnings[1].line_no, 3);
    }

    #[test]
    fn empty_center_is_rejected() {
        let input = EcomapInput {
            center: String::new(),
            connections: "School, Institution, strong".to_owned(),
        };
        assert!(build_ecomap(&input).is_err());
    }
}
