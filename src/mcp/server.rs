// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::diagrams::{EcomapInput, GenogramInput, MalformedInputLine, SocialNetworkInput};
use crate::model::{Biodata, HistoryEntry, LifeEvent, LifeEventError, TIMESTAMP_FORMAT};
use crate::render::{render_history, render_roadmap_chart};
use crate::session::{GenerateError, GeneratedDiagram, LoginError, Session, Workspace};
use crate::store::{RegisterError, StoreError};

use super::types::*;

/// One MCP client, one session slot. Every tool except `account.register` and
/// `account.login` needs a logged-in session.
#[derive(Clone)]
pub struct KinmapMcp {
    workspace: Arc<Workspace>,
    session: Arc<Mutex<Option<Session>>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl KinmapMcp {
    pub fn new(workspace: Workspace) -> Self {
        Self {
            workspace: Arc::new(workspace),
            session: Arc::new(Mutex::new(None)),
            tool_router: Self::tool_router(),
        }
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    #[tool(name = "account.register")]
    async fn account_register(
        &self,
        params: Parameters<AccountCredentialsParams>,
    ) -> Result<Json<AccountRegisterResponse>, ErrorData> {
        let AccountCredentialsParams { identity, secret } = params.0;
        self.workspace
            .register(&identity, &secret)
            .map_err(register_error)?;

        Ok(Json(AccountRegisterResponse {
            identity: identity.trim().to_owned(),
        }))
    }

    /// Replaces any session that is already active.
    #[tool(name = "account.login")]
    async fn account_login(
        &self,
        params: Parameters<AccountCredentialsParams>,
    ) -> Result<Json<AccountHomeResponse>, ErrorData> {
        let AccountCredentialsParams { identity, secret } = params.0;
        let session = self
            .workspace
            .login(&identity, &secret)
            .map_err(login_error)?;

        let mut slot = self.session.lock().await;
        if let Some(previous) = slot.take() {
            previous.logout();
        }
        let home = home_response(&session);
        *slot = Some(session);

        Ok(Json(home))
    }

    #[tool(name = "account.logout")]
    async fn account_logout(&self) -> Result<Json<AccountLogoutResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = slot.take().ok_or_else(no_session)?;
        let response = AccountLogoutResponse {
            identity: session.identity().as_str().to_owned(),
            discarded_events: session.roadmap().events().len() as u64,
        };
        session.logout();

        Ok(Json(response))
    }

    #[tool(name = "account.home")]
    async fn account_home(&self) -> Result<Json<AccountHomeResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;

        Ok(Json(home_response(session)))
    }

    #[tool(name = "biodata.read")]
    async fn biodata_read(&self) -> Result<Json<BiodataResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;

        Ok(Json(BiodataResponse {
            biodata: mcp_biodata(session.biodata()),
        }))
    }

    /// Replaces all three fields; omitted fields become empty.
    #[tool(name = "biodata.update")]
    async fn biodata_update(
        &self,
        params: Parameters<McpBiodata>,
    ) -> Result<Json<BiodataResponse>, ErrorData> {
        let McpBiodata {
            name,
            age,
            occupation,
        } = params.0;
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        session
            .save_biodata(Biodata {
                name,
                age,
                occupation,
            })
            .map_err(store_error)?;

        Ok(Json(BiodataResponse {
            biodata: mcp_biodata(session.biodata()),
        }))
    }

    #[tool(name = "history.list")]
    async fn history_list(&self) -> Result<Json<HistoryListResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        let history = session.history();

        Ok(Json(HistoryListResponse {
            entries: history.iter().map(mcp_history_entry).collect(),
            text: render_history(history),
        }))
    }

    #[tool(name = "genogram.generate")]
    async fn genogram_generate(
        &self,
        params: Parameters<GenogramGenerateParams>,
    ) -> Result<Json<GenerateResponse>, ErrorData> {
        let GenogramGenerateParams {
            root,
            parents,
            spouse,
            siblings,
            children,
        } = params.0;
        let input = GenogramInput {
            root,
            parents,
            spouse,
            siblings,
            children,
        };

        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        let generated = session
            .generate_genogram(&input)
            .map_err(generate_error)?;

        Ok(Json(generate_response(generated)))
    }

    #[tool(name = "ecomap.generate")]
    async fn ecomap_generate(
        &self,
        params: Parameters<EcomapGenerateParams>,
    ) -> Result<Json<GenerateResponse>, ErrorData> {
        let EcomapGenerateParams {
            center,
            connections,
        } = params.0;
        let input = EcomapInput {
            center,
            connections,
        };

        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        let generated = session.generate_ecomap(&input).map_err(generate_error)?;

        Ok(Json(generate_response(generated)))
    }

    #[tool(name = "social_network.generate")]
    async fn social_network_generate(
        &self,
        params: Parameters<SocialNetworkGenerateParams>,
    ) -> Result<Json<GenerateResponse>, ErrorData> {
        let SocialNetworkGenerateParams { center, contacts } = params.0;
        let input = SocialNetworkInput { center, contacts };

        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        let generated = session
            .generate_social_network(&input)
            .map_err(generate_error)?;

        Ok(Json(generate_response(generated)))
    }

    #[tool(name = "roadmap.add_event")]
    async fn roadmap_add_event(
        &self,
        params: Parameters<RoadmapAddEventParams>,
    ) -> Result<Json<RoadmapResponse>, ErrorData> {
        let RoadmapAddEventParams {
            time_label,
            description,
            impact,
        } = params.0;

        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        session
            .add_life_event(&time_label, &description, impact)
            .map_err(life_event_error)?;

        Ok(Json(roadmap_response(session)))
    }

    #[tool(name = "roadmap.read")]
    async fn roadmap_read(&self) -> Result<Json<RoadmapResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;

        Ok(Json(roadmap_response(session)))
    }

    /// Records the roadmap to history. Events stay in the session afterwards.
    #[tool(name = "roadmap.save")]
    async fn roadmap_save(&self) -> Result<Json<RoadmapSaveResponse>, ErrorData> {
        let mut slot = self.session.lock().await;
        let session = active_session(&mut slot)?;
        let entry = session.save_roadmap().map_err(store_error)?;

        Ok(Json(RoadmapSaveResponse {
            entry: mcp_history_entry(&entry),
        }))
    }
}

#[tool_handler]
impl ServerHandler for KinmapMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Kinmap relationship-diagram server. Register or log in first (tools: account.register, account.login, account.logout, account.home, biodata.read, biodata.update, history.list, genogram.generate, ecomap.generate, social_network.generate, roadmap.add_event, roadmap.read, roadmap.save). Generated diagrams are returned and stored as Graphviz DOT."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Session lookup, error mapping and response conversion for the tool handlers.
include!("server/helpers.rs");
