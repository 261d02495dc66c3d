// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{LifeRoadmap, MAX_IMPACT};

use super::text::{text_len, truncate_with_ellipsis};

/// Cells on each side of the zero axis.
const BAR_HALF_WIDTH: usize = MAX_IMPACT.unsigned_abs() as usize;

const MAX_LABEL_WIDTH: usize = 24;
const BAR_CELL: char = '█';
const AXIS: char = '│';

/// Renders the roadmap as one row per event: time label, signed score, a bar growing left
/// (negative) or right (positive) from the axis, then the description.
///
/// A scale row closes the chart. An empty roadmap renders a single notice line.
pub fn render_roadmap_chart(roadmap: &LifeRoadmap) -> String {
    if roadmap.is_empty() {
        return "No life events yet.".to_owned();
    }

    let labels = roadmap
        .events()
        .iter()
        .map(|event| truncate_with_ellipsis(event.time_label(), MAX_LABEL_WIDTH))
        .collect::<Vec<_>>();
    let label_width = labels.iter().map(|label| text_len(label)).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(labels.len() + 1);
    for (label, event) in labels.iter().zip(roadmap.events()) {
        let score = event.impact().get();
        let cells = usize::from(score.unsigned_abs());
        let (left, right) = if score < 0 { (cells, 0) } else { (0, cells) };

        let mut line = format!("{label:<label_width$}  {:>3} ", event.impact().to_string());
        push_repeated(&mut line, ' ', BAR_HALF_WIDTH - left);
        push_repeated(&mut line, BAR_CELL, left);
        line.push(AXIS);
        push_repeated(&mut line, BAR_CELL, right);
        push_repeated(&mut line, ' ', BAR_HALF_WIDTH - right);
        line.push_str("  ");
        line.push_str(event.description());
        lines.push(line);
    }

    let mut scale = " ".repeat(label_width + 6);
    scale.push_str("-10");
    push_repeated(&mut scale, ' ', BAR_HALF_WIDTH - 3);
    scale.push('0');
    push_repeated(&mut scale, ' ', BAR_HALF_WIDTH - 3);
    scale.push_str("+10");
    lines.push(scale);

    lines.join("\n")
}

fn push_repeated(out: &mut String, ch: char, count: usize) {
    out.extend(std::iter::repeat_n(ch, count));
}
