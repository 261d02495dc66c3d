// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::fs::{read_json_or_default, write_json, JsonLayout, StoreError, WriteDurability};
use crate::model::{IdError, Identity};

/// Lowercase hex SHA-256 of the secret. Deterministic, so it can be recomputed at login.
pub fn hash_secret(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

fn digests_match(stored: &str, candidate: &str) -> bool {
    if stored.len() != candidate.len() {
        return false;
    }
    stored
        .bytes()
        .zip(candidate.bytes())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

/// The whole credential file: identity to secret hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials {
    entries: BTreeMap<String, String>,
}

impl Credentials {
    pub fn contains(&self, identity: &Identity) -> bool {
        self.entries.contains_key(identity.as_str())
    }

    pub fn secret_hash(&self, identity: &Identity) -> Option<&str> {
        self.entries.get(identity.as_str()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("user already exists")]
    AlreadyExists,
    #[error("invalid identity: {0}")]
    InvalidIdentity(#[from] IdError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Flat identity → hash file, read and written wholesale.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
    durability: WriteDurability,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Credentials, StoreError> {
        read_json_or_default(&self.path)
    }

    /// Adds `identity` with the hash of `secret`; an existing entry is never overwritten.
    pub fn register(&self, identity: &Identity, secret: &str) -> Result<(), RegisterError> {
        let mut credentials = self.load()?;
        if credentials.contains(identity) {
            tracing::info!(identity = %identity, "registration refused: identity taken");
            return Err(RegisterError::AlreadyExists);
        }

        credentials
            .entries
            .insert(identity.as_str().to_owned(), hash_secret(secret));
        write_json(&self.path, &credentials, JsonLayout::Compact, self.durability)?;
        tracing::info!(identity = %identity, "registered account");
        Ok(())
    }

    /// `false` for an unknown identity and for a wrong secret alike.
    pub fn verify(&self, identity: &Identity, secret: &str) -> Result<bool, StoreError> {
        let credentials = self.load()?;
        Ok(credentials
            .secret_hash(identity)
            .is_some_and(|stored| digests_match(stored, &hash_secret(secret))))
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::{hash_secret, CredentialStore, RegisterError};
    use crate::model::Identity;

    struct Ctx {
        _dir: TempDir,
        store: CredentialStore,
    }

    #[fixture]
    fn ctx() -> Ctx {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CredentialStore::new(dir.path().join("users.json"));
        Ctx { _dir: dir, store }
    }

    fn identity(value: &str) -> Identity {
        Identity::new(value).expect("identity")
    }

    #[test]
    fn hash_is_sha256_hex() {
        assert_eq!(
            hash_secret("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[rstest]
    fn register_then_verify(ctx: Ctx) {
        let alice = identity("alice@example.org");
        ctx.store.register(&alice, "s3cret").expect("register");

        assert!(ctx.store.verify(&alice, "s3cret").expect("verify"));
        assert!(!ctx.store.verify(&alice, "wrong").expect("verify"));
        assert!(!ctx.store.verify(&identity("bob@example.org"), "s3cret").expect("verify"));
    }

    #[rstest]
    fn second_registration_fails_and_keeps_the_hash(ctx: Ctx) {
        let alice = identity("alice@example.org");
        ctx.store.register(&alice, "first").expect("register");

        let err = ctx.store.register(&alice, "second").unwrap_err();
        assert!(matches!(err, RegisterError::AlreadyExists));

        let credentials = ctx.store.load().expect("load");
        assert_eq!(credentials.len(), 1);
        assert_eq!(credentials.secret_hash(&alice), Some(hash_secret("first").as_str()));
        assert!(ctx.store.verify(&alice, "first").expect("verify"));
    }

    #[rstest]
    fn file_is_a_flat_identity_to_hash_object(ctx: Ctx) {
        ctx.store
            .register(&identity("alice@example.org"), "password")
            .expect("register");

        let raw = std::fs::read_to_string(ctx.store.path()).expect("read");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(
            value,
            serde_json::json!({
                "alice@example.org": "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
            })
        );
    }

    #[rstest]
    fn missing_file_verifies_nobody(ctx: Ctx) {
        assert!(ctx.store.load().expect("load").is_empty());
        assert!(!ctx.store.verify(&identity("alice@example.org"), "x").expect("verify"));
    }

    #[rstest]
    fn corrupt_file_is_surfaced(ctx: Ctx) {
        std::fs::write(ctx.store.path(), "[]").expect("write");
        assert!(ctx.store.verify(&identity("alice@example.org"), "x").is_err());
        assert!(matches!(
            ctx.store.register(&identity("alice@example.org"), "x"),
            Err(RegisterError::Store(_))
        ));
    }
}
