// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram format parsing/export.
//!
//! Graph descriptions are serialized as a small, Graphviz-compatible subset of DOT.

pub mod dot;

pub use dot::{export_dot, parse_dot, DotParseError};
