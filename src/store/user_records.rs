// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use super::fs::{
    encode_file_stem, read_json_or_default, write_json, JsonLayout, StoreError, WriteDurability,
};
use crate::model::{Identity, UserRecord};

/// One pretty-printed JSON file per identity under a single root directory.
#[derive(Debug, Clone)]
pub struct UserRecordStore {
    root: PathBuf,
    durability: WriteDurability,
}

impl UserRecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Identities that are not safe file stems are hex-encoded behind a `~` prefix.
    pub fn record_path(&self, identity: &Identity) -> PathBuf {
        let stem = encode_file_stem(identity.as_str());
        self.root.join(format!("{stem}.json"))
    }

    /// A missing record loads as an empty one.
    pub fn load(&self, identity: &Identity) -> Result<UserRecord, StoreError> {
        read_json_or_default(&self.record_path(identity))
    }

    pub fn save(&self, identity: &Identity, record: &UserRecord) -> Result<(), StoreError> {
        let path = self.record_path(identity);
        write_json(&path, record, JsonLayout::Pretty, self.durability)?;
        tracing::debug!(
            identity = %identity,
            history_len = record.history().len(),
            "saved user record"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::UserRecordStore;
    use crate::model::{Biodata, DiagramType, HistoryEntry, Identity, UserRecord};

    fn identity(value: &str) -> Identity {
        Identity::new(value).expect("identity")
    }

    #[test]
    fn missing_record_loads_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserRecordStore::new(dir.path().join("user_data"));
        let record = store.load(&identity("alice@example.org")).expect("load");
        assert_eq!(record, UserRecord::default());
    }

    #[test]
    fn save_then_load_preserves_biodata_and_history() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserRecordStore::new(dir.path().join("user_data"));
        let alice = identity("alice@example.org");

        let mut record = UserRecord::default();
        record.set_biodata(Biodata {
            name: "Alice".to_owned(),
            age: "34".to_owned(),
            occupation: "Nurse".to_owned(),
        });
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|date| date.and_hms_opt(3, 4, 5))
            .expect("timestamp");
        record.append_history(HistoryEntry::new(
            "Genogram for Alice",
            "digraph {\n}\n",
            DiagramType::Genogram,
            timestamp,
        ));

        store.save(&alice, &record).expect("save");
        assert!(store.root().join("alice@example.org.json").is_file());
        assert_eq!(store.load(&alice).expect("load"), record);
    }

    #[test]
    fn record_file_is_indented_json() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserRecordStore::new(dir.path());
        let alice = identity("alice@example.org");
        store.save(&alice, &UserRecord::default()).expect("save");

        let raw = std::fs::read_to_string(store.record_path(&alice)).expect("read");
        assert!(raw.starts_with("{\n  \"bio\": {\n"), "{raw}");
    }

    #[test]
    fn path_like_identities_stay_inside_the_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserRecordStore::new(dir.path());
        let path = store.record_path(&identity("../escape"));
        assert_eq!(path.parent(), Some(dir.path()));
        assert_eq!(
            path.file_name().and_then(|name| name.to_str()),
            Some("~2e2e2f657363617065.json")
        );
    }

    #[test]
    fn records_are_isolated_per_identity() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UserRecordStore::new(dir.path());
        let alice = identity("alice@example.org");
        let bob = identity("bob@example.org");

        let mut record = UserRecord::default();
        record.set_biodata(Biodata {
            name: "Alice".to_owned(),
            ..Biodata::default()
        });
        store.save(&alice, &record).expect("save");

        assert_eq!(store.load(&bob).expect("load"), UserRecord::default());
    }
}
