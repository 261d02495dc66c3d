// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

pub const MIN_IMPACT: i8 = -10;
pub const MAX_IMPACT: i8 = 10;

/// How strongly a life event affected the person, from -10 to 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ImpactScore(i8);

impl ImpactScore {
    pub fn new(value: i64) -> Result<Self, LifeEventError> {
        if !(i64::from(MIN_IMPACT)..=i64::from(MAX_IMPACT)).contains(&value) {
            return Err(LifeEventError::ImpactOutOfRange { value });
        }
        // In range, so the narrowing is lossless.
        Ok(Self(value as i8))
    }

    pub fn get(self) -> i8 {
        self.0
    }
}

impl fmt::Display for ImpactScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LifeEventError {
    #[error("time label must not be empty")]
    EmptyTimeLabel,
    #[error("event description must not be empty")]
    EmptyDescription,
    #[error("impact score {value} is outside -10..=10")]
    ImpactOutOfRange { value: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeEvent {
    time_label: String,
    description: String,
    impact: ImpactScore,
}

impl LifeEvent {
    pub fn new(
        time_label: &str,
        description: &str,
        impact: ImpactScore,
    ) -> Result<Self, LifeEventError> {
        let time_label = time_label.trim();
        if time_label.is_empty() {
            return Err(LifeEventError::EmptyTimeLabel);
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(LifeEventError::EmptyDescription);
        }
        Ok(Self {
            time_label: time_label.to_owned(),
            description: description.to_owned(),
            impact,
        })
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn impact(&self) -> ImpactScore {
        self.impact
    }
}

/// Events collected during one session, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeRoadmap {
    events: Vec<LifeEvent>,
}

impl LifeRoadmap {
    pub fn push(&mut self, event: LifeEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[LifeEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// `(time label, impact)` points for a time-series chart, in append order.
    pub fn series(&self) -> Vec<(&str, i8)> {
        self.events
            .iter()
            .map(|event| (event.time_label(), event.impact().get()))
            .collect()
    }
}
