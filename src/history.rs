// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Appending generated diagrams to a user's history.

use chrono::{Local, NaiveDateTime, Timelike};

use crate::diagrams::BuiltDiagram;
use crate::format::export_dot;
use crate::model::{HistoryEntry, UserRecord};

/// Exports `built` to DOT and appends it to `record`, stamped with the current local time.
///
/// Persisting the record is left to the caller.
pub fn record<'a>(record: &'a mut UserRecord, built: &BuiltDiagram) -> &'a HistoryEntry {
    let now = Local::now().naive_local();
    // Stored timestamps carry whole seconds only.
    let now = now.with_nanosecond(0).unwrap_or(now);
    record_at(record, built, now)
}

pub fn record_at<'a>(
    record: &'a mut UserRecord,
    built: &BuiltDiagram,
    timestamp: NaiveDateTime,
) -> &'a HistoryEntry {
    let entry = HistoryEntry::new(
        built.title.clone(),
        export_dot(&built.graph),
        built.diagram_type,
        timestamp,
    );
    let entry = record.append_history(entry);
    tracing::debug!(
        title = entry.title(),
        diagram_type = %entry.diagram_type(),
        "appended history entry"
    );
    entry
}
