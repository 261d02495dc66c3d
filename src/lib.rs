// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kinmap: relationship diagrams for social work casework.
//!
//! Accounts hold a biodata record and an append-only history of generated diagrams
//! (genograms, ecomaps, social networks, life roadmaps), each stored as Graphviz DOT. The
//! binary exposes everything as MCP tools over stdio.

pub mod config;
pub mod diagrams;
pub mod format;
pub mod history;
pub mod mcp;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
