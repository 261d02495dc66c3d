// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kinmap CLI entrypoint.
//!
//! Serves the MCP tools over stdio. Logs go to stderr so stdout stays reserved for the
//! protocol; set `RUST_LOG` to adjust verbosity.

use std::error::Error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kinmap::config::Config;
use kinmap::mcp::KinmapMcp;

fn run(config: Config) -> Result<(), Box<dyn Error>> {
    tracing::info!(
        data_dir = %config.data_dir.display(),
        users_file = %config.users_file.display(),
        durable_writes = config.durable_writes,
        "starting kinmap MCP server on stdio"
    );

    let mcp = KinmapMcp::new(config.workspace());
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    runtime.block_on(mcp.serve_stdio())?;

    tracing::info!("client disconnected");
    Ok(())
}

fn main() {
    let config = Config::parse();

    let result = (|| -> Result<(), Box<dyn Error>> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::from_default_env().add_directive("kinmap=info".parse()?))
            .init();
        run(config)
    })();

    if let Err(err) = result {
        eprintln!("kinmap: {err}");
        std::process::exit(1);
    }
}
