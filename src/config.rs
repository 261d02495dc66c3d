// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::session::Workspace;
use crate::store::{CredentialStore, UserRecordStore, WriteDurability};

/// Kinmap: relationship diagrams for casework, served over MCP on stdio.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "kinmap", version)]
pub struct Config {
    /// Directory holding one JSON record per user
    #[arg(long, env = "KINMAP_DATA_DIR", default_value = "user_data")]
    pub data_dir: PathBuf,

    /// Credential file mapping identities to secret hashes
    #[arg(long, env = "KINMAP_USERS_FILE", default_value = "users.json")]
    pub users_file: PathBuf,

    /// Fsync every written file and its directory (slower)
    #[arg(long, env = "KINMAP_DURABLE_WRITES")]
    pub durable_writes: bool,
}

impl Config {
    pub fn durability(&self) -> WriteDurability {
        if self.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        }
    }

    pub fn workspace(&self) -> Workspace {
        let durability = self.durability();
        Workspace::new(
            CredentialStore::new(&self.users_file).with_durability(durability),
            UserRecordStore::new(&self.data_dir).with_durability(durability),
        )
    }
}
