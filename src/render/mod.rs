// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain-text views: the life-roadmap impact chart and the history listing.

mod chart;
mod history;
mod text;

pub use chart::render_roadmap_chart;
pub use history::render_history;
