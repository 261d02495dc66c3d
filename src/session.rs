// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Account entry points and the per-login session context.
//!
//! [`Workspace`] owns both stores and is shared for the life of the process. A [`Session`]
//! exists only after a successful [`Workspace::login`]; every user-scoped operation goes
//! through it and it is discarded by [`Session::logout`].

use chrono::{Local, NaiveDateTime};

use crate::diagrams::{
    build_ecomap, build_genogram, build_roadmap_placeholder, build_social_network, BuiltDiagram,
    DiagramInputError, EcomapInput, GenogramInput, MalformedInputLine, SocialNetworkInput,
};
use crate::history;
use crate::model::{
    Biodata, HistoryEntry, Identity, ImpactScore, LifeEvent, LifeEventError, LifeRoadmap,
    UserRecord,
};
use crate::store::{CredentialStore, RegisterError, StoreError, UserRecordStore};

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Input(#[from] DiagramInputError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A diagram that has been appended to history and persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDiagram {
    pub entry: HistoryEntry,
    pub warnings: Vec<MalformedInputLine>,
}

#[derive(Debug, Clone)]
pub struct Workspace {
    credentials: CredentialStore,
    records: UserRecordStore,
}

impl Workspace {
    pub fn new(credentials: CredentialStore, records: UserRecordStore) -> Self {
        Self {
            credentials,
            records,
        }
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    pub fn records(&self) -> &UserRecordStore {
        &self.records
    }

    pub fn register(&self, identity: &str, secret: &str) -> Result<(), RegisterError> {
        let identity = Identity::from_input(identity)?;
        self.credentials.register(&identity, secret)
    }

    /// Unknown identities and wrong secrets both yield [`LoginError::InvalidCredentials`].
    pub fn login(&self, identity: &str, secret: &str) -> Result<Session, LoginError> {
        let Ok(identity) = Identity::from_input(identity) else {
            return Err(LoginError::InvalidCredentials);
        };
        if !self.credentials.verify(&identity, secret)? {
            tracing::info!(identity = %identity, "login rejected");
            return Err(LoginError::InvalidCredentials);
        }

        let record = self.records.load(&identity)?;
        tracing::info!(
            identity = %identity,
            history_len = record.history().len(),
            "logged in"
        );
        Ok(Session {
            identity,
            record,
            logged_in_at: Local::now().naive_local(),
            roadmap: LifeRoadmap::default(),
            records: self.records.clone(),
        })
    }
}

#[derive(Debug)]
pub struct Session {
    identity: Identity,
    record: UserRecord,
    logged_in_at: NaiveDateTime,
    roadmap: LifeRoadmap,
    records: UserRecordStore,
}

impl Session {
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn logged_in_at(&self) -> NaiveDateTime {
        self.logged_in_at
    }

    pub fn record(&self) -> &UserRecord {
        &self.record
    }

    pub fn biodata(&self) -> &Biodata {
        self.record.biodata()
    }

    /// Name used in greetings and roadmap titles: the biodata name, else the identity.
    pub fn display_name(&self) -> &str {
        self.record
            .biodata()
            .display_name()
            .unwrap_or_else(|| self.identity.as_str())
    }

    /// The in-memory record only changes once the save has succeeded.
    pub fn save_biodata(&mut self, biodata: Biodata) -> Result<(), StoreError> {
        let mut updated = self.record.clone();
        updated.set_biodata(biodata);
        self.records.save(&self.identity, &updated)?;
        self.record = updated;
        tracing::info!(identity = %self.identity, "saved biodata");
        Ok(())
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.record.history()
    }

    pub fn generate_genogram(
        &mut self,
        input: &GenogramInput,
    ) -> Result<GeneratedDiagram, GenerateError> {
        let built = build_genogram(input)?;
        Ok(self.commit(built)?)
    }

    pub fn generate_ecomap(
        &mut self,
        input: &EcomapInput,
    ) -> Result<GeneratedDiagram, GenerateError> {
        let built = build_ecomap(input)?;
        Ok(self.commit(built)?)
    }

    pub fn generate_social_network(
        &mut self,
        input: &SocialNetworkInput,
    ) -> Result<GeneratedDiagram, GenerateError> {
        let built = build_social_network(input)?;
        Ok(self.commit(built)?)
    }

    /// Appends an event to the in-progress roadmap. Nothing is persisted until
    /// [`Session::save_roadmap`].
    pub fn add_life_event(
        &mut self,
        time_label: &str,
        description: &str,
        impact: i64,
    ) -> Result<&LifeEvent, LifeEventError> {
        let event = LifeEvent::new(time_label, description, ImpactScore::new(impact)?)?;
        self.roadmap.push(event);
        let events = self.roadmap.events();
        Ok(&events[events.len() - 1])
    }

    pub fn roadmap(&self) -> &LifeRoadmap {
        &self.roadmap
    }

    pub fn save_roadmap(&mut self) -> Result<HistoryEntry, StoreError> {
        let built = build_roadmap_placeholder(self.display_name());
        Ok(self.commit(built)?.entry)
    }

    /// Ends the session. The in-progress roadmap is dropped.
    pub fn logout(self) {
        tracing::info!(
            identity = %self.identity,
            discarded_events = self.roadmap.events().len(),
            "logged out"
        );
    }

    fn commit(&mut self, built: BuiltDiagram) -> Result<GeneratedDiagram, StoreError> {
        for warning in &built.warnings {
            tracing::warn!(
                identity = %self.identity,
                diagram_type = %built.diagram_type,
                field = warning.field,
                line_no = warning.line_no,
                "{warning}"
            );
        }

        let mut updated = self.record.clone();
        let entry = history::record(&mut updated, &built).clone();
        self.records.save(&self.identity, &updated)?;
        self.record = updated;
        tracing::info!(
            identity = %self.identity,
            title = entry.title(),
            skipped_lines = built.warnings.len(),
            "recorded diagram"
        );
        Ok(GeneratedDiagram {
            entry,
            warnings: built.warnings,
        })
    }
}
