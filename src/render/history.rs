// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::HistoryEntry;

/// One `<type> - <title> (<timestamp>)` line per entry, oldest first.
pub fn render_history(history: &[HistoryEntry]) -> String {
    if history.is_empty() {
        return "No maps generated yet.".to_owned();
    }

    history
        .iter()
        .map(|entry| {
            format!(
                "{} - {} ({})",
                entry.diagram_type(),
                entry.title(),
                entry.timestamp_text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
