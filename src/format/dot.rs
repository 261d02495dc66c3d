// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

mod ident;

use std::iter::Peekable;

use self::ident::{format_id, is_bare_id_char};
use crate::model::{GraphDescription, GraphEdge, GraphKind, GraphNode, IdError, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DotParseError {
    #[error("expected 'digraph {{' or 'graph {{' as the first statement")]
    MissingHeader,
    #[error("missing closing '}}'")]
    MissingClosingBrace,
    #[error("content after closing '}}' on line {line_no}: {line}")]
    TrailingContent { line_no: usize, line: String },
    #[error("unsupported DOT syntax on line {line_no}: {line}")]
    UnsupportedSyntax { line_no: usize, line: String },
    #[error("unterminated quoted string on line {line_no}")]
    UnterminatedString { line_no: usize },
    #[error("unsupported attribute '{key}' on line {line_no}")]
    UnsupportedAttribute { line_no: usize, key: String },
    #[error("edge operator '{op}' on line {line_no} does not match a {kind} graph")]
    EdgeOperatorMismatch {
        line_no: usize,
        op: &'static str,
        kind: &'static str,
    },
    #[error("invalid node id on line {line_no}: {name:?} ({reason})")]
    InvalidNodeId {
        line_no: usize,
        name: String,
        reason: IdError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Id(String),
    Arrow,
    Dashes,
    OpenBracket,
    CloseBracket,
    Equals,
    Separator,
}

fn edge_op(kind: GraphKind) -> &'static str {
    match kind {
        GraphKind::Directed => "->",
        GraphKind::Undirected => "--",
    }
}

fn kind_name(kind: GraphKind) -> &'static str {
    match kind {
        GraphKind::Directed => "directed",
        GraphKind::Undirected => "undirected",
    }
}

fn tokenize(line: &str, line_no: usize) -> Result<Vec<Token>, DotParseError> {
    let mut tokens = Vec::new();
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            _ if ch.is_whitespace() => {}
            '[' => tokens.push(Token::OpenBracket),
            ']' => tokens.push(Token::CloseBracket),
            '=' => tokens.push(Token::Equals),
            ',' | ';' => tokens.push(Token::Separator),
            '-' if matches!(chars.peek(), Some((_, '>'))) => {
                chars.next();
                tokens.push(Token::Arrow);
            }
            '-' if matches!(chars.peek(), Some((_, '-'))) => {
                chars.next();
                tokens.push(Token::Dashes);
            }
            '"' => {
                let mut value = String::new();
                let mut closed = false;
                while let Some((_, ch)) = chars.next() {
                    match ch {
                        '"' => {
                            closed = true;
                            break;
                        }
                        '\\' => match chars.next() {
                            Some((_, 'n')) => value.push('\n'),
                            Some((_, 'r')) => value.push('\r'),
                            Some((_, '"')) => value.push('"'),
                            Some((_, '\\')) => value.push('\\'),
                            // Other escapes (\l, \N, ...) are Graphviz-specific; keep them verbatim.
                            Some((_, other)) => {
                                value.push('\\');
                                value.push(other);
                            }
                            None => break,
                        },
                        _ => value.push(ch),
                    }
                }
                if !closed {
                    return Err(DotParseError::UnterminatedString { line_no });
                }
                tokens.push(Token::Id(value));
            }
            _ if is_bare_id_char(ch) => {
                let mut end = idx + ch.len_utf8();
                while let Some(&(next_idx, next)) = chars.peek() {
                    if !is_bare_id_char(next) {
                        break;
                    }
                    end = next_idx + next.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Id(line[idx..end].to_owned()));
            }
            _ => {
                return Err(DotParseError::UnsupportedSyntax {
                    line_no,
                    line: line.to_owned(),
                })
            }
        }
    }

    Ok(tokens)
}

#[derive(Debug, Default)]
struct Attributes {
    label: Option<String>,
    color: Option<String>,
    shape: Option<String>,
    style: Option<String>,
}

fn parse_attributes<I>(
    tokens: &mut Peekable<I>,
    line_no: usize,
    line: &str,
) -> Result<Attributes, DotParseError>
where
    I: Iterator<Item = Token>,
{
    let unsupported = || DotParseError::UnsupportedSyntax {
        line_no,
        line: line.to_owned(),
    };

    let mut attrs = Attributes::default();
    loop {
        match tokens.next() {
            Some(Token::CloseBracket) => return Ok(attrs),
            Some(Token::Separator) => continue,
            Some(Token::Id(key)) => {
                if tokens.next() != Some(Token::Equals) {
                    return Err(unsupported());
                }
                let Some(Token::Id(value)) = tokens.next() else {
                    return Err(unsupported());
                };
                let slot = match key.as_str() {
                    "label" => &mut attrs.label,
                    "color" => &mut attrs.color,
                    "shape" => &mut attrs.shape,
                    "style" => &mut attrs.style,
                    _ => return Err(DotParseError::UnsupportedAttribute { line_no, key }),
                };
                *slot = Some(value);
            }
            _ => return Err(unsupported()),
        }
    }
}

fn node_id(name: String, line_no: usize) -> Result<NodeId, DotParseError> {
    NodeId::new(name.clone()).map_err(|reason| DotParseError::InvalidNodeId {
        line_no,
        name,
        reason,
    })
}

fn parse_statement(
    graph: &mut GraphDescription,
    line: &str,
    line_no: usize,
) -> Result<(), DotParseError> {
    let unsupported = || DotParseError::UnsupportedSyntax {
        line_no,
        line: line.to_owned(),
    };

    let mut tokens = tokenize(line, line_no)?.into_iter().peekable();
    let Some(Token::Id(first)) = tokens.next() else {
        return Err(unsupported());
    };

    let mut endpoints = vec![node_id(first, line_no)?];
    while let Some(op) = tokens.next_if(|token| matches!(token, Token::Arrow | Token::Dashes)) {
        let op_kind = match op {
            Token::Arrow => GraphKind::Directed,
            _ => GraphKind::Undirected,
        };
        if op_kind != graph.kind() {
            return Err(DotParseError::EdgeOperatorMismatch {
                line_no,
                op: edge_op(op_kind),
                kind: kind_name(graph.kind()),
            });
        }
        let Some(Token::Id(next)) = tokens.next() else {
            return Err(unsupported());
        };
        endpoints.push(node_id(next, line_no)?);
    }

    let attrs = if tokens.next_if_eq(&Token::OpenBracket).is_some() {
        parse_attributes(&mut tokens, line_no, line)?
    } else {
        Attributes::default()
    };

    if tokens.any(|token| token != Token::Separator) {
        return Err(unsupported());
    }

    if endpoints.len() == 1 {
        if attrs.style.is_some() {
            return Err(DotParseError::UnsupportedAttribute {
                line_no,
                key: "style".to_owned(),
            });
        }
        let node_id = endpoints.remove(0);
        let label = attrs
            .label
            .or_else(|| graph.node(node_id.as_str()).map(|node| node.label().to_owned()))
            .unwrap_or_else(|| node_id.as_str().to_owned());
        let mut node = GraphNode::new(label);
        if let Some(shape) = attrs.shape {
            node = node.with_shape(shape);
        }
        if let Some(color) = attrs.color {
            node = node.with_color(color);
        }
        graph.declare_node(node_id, node);
        return Ok(());
    }

    if attrs.shape.is_some() {
        return Err(DotParseError::UnsupportedAttribute {
            line_no,
            key: "shape".to_owned(),
        });
    }

    for pair in endpoints.windows(2) {
        let mut edge = GraphEdge::new(pair[0].clone(), pair[1].clone());
        if let Some(label) = &attrs.label {
            edge = edge.with_label(label.clone());
        }
        if let Some(color) = &attrs.color {
            edge = edge.with_color(color.clone());
        }
        if let Some(style) = &attrs.style {
            edge = edge.with_style(style.clone());
        }
        graph.add_edge(edge);
    }

    Ok(())
}

fn parse_header(trimmed: &str) -> Option<GraphKind> {
    let body = trimmed.strip_suffix('{')?;
    let mut parts = body.split_whitespace();
    let kind = match parts.next()? {
        "digraph" => GraphKind::Directed,
        "graph" => GraphKind::Undirected,
        _ => return None,
    };
    // An optional graph name is accepted and dropped.
    let _name = parts.next();
    if parts.next().is_some() {
        return None;
    }
    Some(kind)
}

/// Parse the DOT subset produced by [`export_dot`].
///
/// Supported:
/// - leading `// comment` lines (kept as the graph comment)
/// - `digraph {` / `graph {` header, optionally named
/// - one statement per line: node statements `id [attrs]` and edge chains `a -> b -> c [attrs]`
///   (`--` for undirected graphs)
/// - attributes `label`, `color`, `shape` (nodes) and `label`, `color`, `style` (edges)
/// - a single closing `}`
pub fn parse_dot(input: &str) -> Result<GraphDescription, DotParseError> {
    let mut graph: Option<GraphDescription> = None;
    let mut comment_lines = Vec::<&str>::new();
    let mut closed = false;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if closed {
            return Err(DotParseError::TrailingContent {
                line_no,
                line: trimmed.to_owned(),
            });
        }

        let Some(current) = graph.as_mut() else {
            if let Some(comment) = trimmed.strip_prefix("//") {
                comment_lines.push(comment.strip_prefix(' ').unwrap_or(comment));
                continue;
            }
            let kind = parse_header(trimmed).ok_or(DotParseError::MissingHeader)?;
            let mut created = GraphDescription::new(kind);
            if !comment_lines.is_empty() {
                created.set_comment(Some(comment_lines.join("\n")));
            }
            graph = Some(created);
            continue;
        };

        if trimmed == "}" {
            closed = true;
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }

        parse_statement(current, trimmed, line_no)?;
    }

    let graph = graph.ok_or(DotParseError::MissingHeader)?;
    if !closed {
        return Err(DotParseError::MissingClosingBrace);
    }
    Ok(graph)
}

fn push_attributes(out: &mut String, attrs: &[(&str, Option<&str>)]) {
    let mut first = true;
    for (key, value) in attrs {
        let Some(value) = value else {
            continue;
        };
        out.push_str(if first { " [" } else { " " });
        first = false;
        out.push_str(key);
        out.push('=');
        out.push_str(&format_id(value));
    }
    if !first {
        out.push(']');
    }
}

/// Export a graph description as DOT.
///
/// Export is stable/deterministic:
/// - the comment (if any) comes first, one `// ` line per comment line,
/// - nodes are emitted in `NodeId` order, always with an explicit `label`,
/// - edges follow in insertion order.
pub fn export_dot(graph: &GraphDescription) -> String {
    let mut out = String::new();
    if let Some(comment) = graph.comment() {
        for line in comment.lines() {
            out.push_str("// ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out.push_str(if graph.is_directed() { "digraph {\n" } else { "graph {\n" });

    for (node_id, node) in graph.nodes() {
        out.push('\t');
        out.push_str(&format_id(node_id.as_str()));
        push_attributes(
            &mut out,
            &[
                ("label", Some(node.label())),
                ("color", node.color()),
                ("shape", node.shape()),
            ],
        );
        out.push('\n');
    }

    let op = edge_op(graph.kind());
    for edge in graph.edges() {
        out.push('\t');
        out.push_str(&format_id(edge.from().as_str()));
        out.push(' ');
        out.push_str(op);
        out.push(' ');
        out.push_str(&format_id(edge.to().as_str()));
        push_attributes(
            &mut out,
            &[
                ("label", edge.label()),
                ("color", edge.color()),
                ("style", edge.style()),
            ],
        );
        out.push('\n');
    }

    out.push_str("}\n");
    out
}
