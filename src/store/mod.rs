// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! On-disk persistence.
//!
//! Two independent files back an account: the shared credential file (identity to secret hash)
//! and one JSON record per identity holding biodata and diagram history. Every write replaces
//! the target file atomically.

pub mod credentials;
pub(crate) mod fs;
pub mod user_records;

pub use credentials::{hash_secret, CredentialStore, Credentials, RegisterError};
pub use fs::{StoreError, WriteDurability};
pub use user_records::UserRecordStore;
