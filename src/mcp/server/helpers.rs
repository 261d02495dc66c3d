// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// MCP server helper functions:
/// session lookup, domain error mapping, and model-to-wire conversion.
fn no_session() -> ErrorData {
    ErrorData::invalid_request("not logged in; call account.login first", None)
}

fn active_session(slot: &mut Option<Session>) -> Result<&mut Session, ErrorData> {
    slot.as_mut().ok_or_else(no_session)
}

fn store_error(err: StoreError) -> ErrorData {
    tracing::error!(error = %err, "storage failure");
    ErrorData::internal_error(format!("storage failure: {err}"), None)
}

fn register_error(err: RegisterError) -> ErrorData {
    match err {
        RegisterError::AlreadyExists | RegisterError::InvalidIdentity(_) => {
            ErrorData::invalid_params(err.to_string(), None)
        }
        RegisterError::Store(err) => store_error(err),
    }
}

fn login_error(err: LoginError) -> ErrorData {
    match err {
        LoginError::InvalidCredentials => ErrorData::invalid_params(err.to_string(), None),
        LoginError::Store(err) => store_error(err),
    }
}

fn generate_error(err: GenerateError) -> ErrorData {
    match err {
        GenerateError::Input(err) => ErrorData::invalid_params(
            err.to_string(),
            Some(serde_json::json!({ "field": err.field })),
        ),
        GenerateError::Store(err) => store_error(err),
    }
}

fn life_event_error(err: LifeEventError) -> ErrorData {
    ErrorData::invalid_params(err.to_string(), None)
}

fn home_response(session: &Session) -> AccountHomeResponse {
    AccountHomeResponse {
        identity: session.identity().as_str().to_owned(),
        name: session.biodata().display_name().map(str::to_owned),
        logged_in_at: session.logged_in_at().format(TIMESTAMP_FORMAT).to_string(),
        history_len: session.history().len() as u64,
    }
}

fn mcp_biodata(biodata: &Biodata) -> McpBiodata {
    McpBiodata {
        name: biodata.name.clone(),
        age: biodata.age.clone(),
        occupation: biodata.occupation.clone(),
    }
}

fn mcp_history_entry(entry: &HistoryEntry) -> McpHistoryEntry {
    McpHistoryEntry {
        title: entry.title().to_owned(),
        diagram_type: entry.diagram_type().label().to_owned(),
        timestamp: entry.timestamp_text(),
        dot: entry.diagram_source().to_owned(),
    }
}

fn mcp_malformed_line(warning: &MalformedInputLine) -> McpMalformedLine {
    McpMalformedLine {
        field: warning.field.to_owned(),
        line_no: warning.line_no as u64,
        line: warning.line.clone(),
        message: warning.to_string(),
    }
}

fn generate_response(generated: GeneratedDiagram) -> GenerateResponse {
    GenerateResponse {
        entry: mcp_history_entry(&generated.entry),
        warnings: generated.warnings.iter().map(mcp_malformed_line).collect(),
    }
}

fn mcp_life_event(event: &LifeEvent) -> McpLifeEvent {
    McpLifeEvent {
        time_label: event.time_label().to_owned(),
        description: event.description().to_owned(),
        impact: event.impact().get(),
    }
}

fn roadmap_response(session: &Session) -> RoadmapResponse {
    let roadmap = session.roadmap();
    RoadmapResponse {
        events: roadmap.events().iter().map(mcp_life_event).collect(),
        chart: render_roadmap_chart(roadmap),
    }
}
