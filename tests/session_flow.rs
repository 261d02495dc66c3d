// SPDX-FileCopyrightText: 2026 Kinmap contributors
// SPDX-License-Identifier: LicenseRef-Kinmap-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinmap and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use kinmap::diagrams::{EcomapInput, GenogramInput, SocialNetworkInput};
use kinmap::format::parse_dot;
use kinmap::model::{Biodata, DiagramType};
use kinmap::render::render_history;
use kinmap::session::{LoginError, Workspace};
use kinmap::store::{CredentialStore, UserRecordStore};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("legacy")
}

fn workspace_in(dir: &Path) -> Workspace {
    Workspace::new(
        CredentialStore::new(dir.join("users.json")),
        UserRecordStore::new(dir.join("user_data")),
    )
}

fn copy_legacy_fixtures(dir: &Path) {
    let src = fixtures_dir();
    fs::copy(src.join("users.json"), dir.join("users.json")).expect("copy users.json");
    fs::create_dir_all(dir.join("user_data")).expect("create user_data");
    let record = "alice@example.org.json";
    fs::copy(src.join("user_data").join(record), dir.join("user_data").join(record))
        .expect("copy record");
}

#[test]
fn full_casework_flow_survives_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = workspace_in(dir.path());
    workspace.register("worker@example.org", "pw").expect("register");

    let mut session = workspace.login("worker@example.org", "pw").expect("login");
    session
        .save_biodata(Biodata {
            name: "Sam".to_owned(),
            age: "29".to_owned(),
            occupation: "Social worker".to_owned(),
        })
        .expect("biodata");

    let genogram = session
        .generate_genogram(&GenogramInput {
            root: "Alice".to_owned(),
            parents: "Bob, Carol".to_owned(),
            spouse: "Dan".to_owned(),
            siblings: "Eve".to_owned(),
            children: "Fay".to_owned(),
        })
        .expect("genogram");
    assert!(genogram.warnings.is_empty());

    let ecomap = session
        .generate_ecomap(&EcomapInput {
            center: "Alice".to_owned(),
            connections: "School, Institution, strong\nBad,Line\n\nClinic, Health, weak"
                .to_owned(),
        })
        .expect("ecomap");
    assert_eq!(ecomap.warnings.len(), 1);
    assert_eq!(ecomap.warnings[0].line_no, 2);

    session
        .generate_social_network(&SocialNetworkInput {
            center: "Alice".to_owned(),
            contacts: "Gus, neighbour".to_owned(),
        })
        .expect("social network");
    session.add_life_event("2018", "Lost job", -6).expect("event");
    session.save_roadmap().expect("roadmap");
    session.logout();

    // A fresh workspace over the same files sees everything.
    let session = workspace_in(dir.path())
        .login("worker@example.org", "pw")
        .expect("login again");
    assert_eq!(session.biodata().name, "Sam");
    assert!(session.roadmap().is_empty());

    let types = session
        .history()
        .iter()
        .map(|entry| entry.diagram_type())
        .collect::<Vec<_>>();
    assert_eq!(
        types,
        [
            DiagramType::Genogram,
            DiagramType::Ecomap,
            DiagramType::SocialNetwork,
            DiagramType::LifeRoadmap,
        ]
    );
    assert!(session
        .history()
        .windows(2)
        .all(|pair| pair[0].timestamp() <= pair[1].timestamp()));
    assert_eq!(session.history()[3].title(), "Life Roadmap for Sam");

    let genogram = parse_dot(session.history()[0].diagram_source()).expect("genogram dot");
    for name in ["Alice", "Bob", "Carol", "Dan", "Eve", "Fay"] {
        assert!(genogram.node(name).is_some(), "missing {name}");
    }
    let ecomap = parse_dot(session.history()[1].diagram_source()).expect("ecomap dot");
    assert_eq!(ecomap.edges().len(), 2);
    assert_eq!(ecomap.edges()[0].color(), Some("green"));
    assert_eq!(ecomap.edges()[1].style(), Some("dashed"));

    let listing = render_history(session.history());
    assert_eq!(listing.lines().count(), 4);
    assert!(listing.lines().next().is_some_and(|line| line.starts_with("Genogram - ")));
}

#[test]
fn legacy_files_load_unchanged() {
    let dir = tempfile::tempdir().expect("tempdir");
    copy_legacy_fixtures(dir.path());
    let workspace = workspace_in(dir.path());

    assert!(matches!(
        workspace.login("alice@example.org", "wrong"),
        Err(LoginError::InvalidCredentials)
    ));
    let mut session = workspace.login("alice@example.org", "letmein").expect("login");
    assert_eq!(session.biodata().occupation, "Librarian");
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history()[0].timestamp_text(), "2024-11-02 10:15:42");

    let legacy = parse_dot(session.history()[0].diagram_source()).expect("legacy dot");
    assert_eq!(legacy.comment(), Some("Genogram"));
    assert_eq!(legacy.node("Bob").and_then(|node| node.shape()), Some("oval"));

    session
        .generate_social_network(&SocialNetworkInput {
            center: "Alice".to_owned(),
            contacts: String::new(),
        })
        .expect("social network");

    let raw = fs::read_to_string(dir.path().join("user_data").join("alice@example.org.json"))
        .expect("read record");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["bio"]["name"], "Alice Doe");
    assert_eq!(value["history"][0]["type"], "Genogram");
    assert_eq!(value["history"][1]["type"], "Social Network");
}

#[test]
fn corrupt_record_is_reported_not_replaced() {
    let dir = tempfile::tempdir().expect("tempdir");
    let workspace = workspace_in(dir.path());
    workspace.register("worker@example.org", "pw").expect("register");
    let record_path = dir.path().join("user_data").join("worker@example.org.json");
    fs::create_dir_all(record_path.parent().expect("parent")).expect("mkdir");
    fs::write(&record_path, "{ not json").expect("write");

    assert!(matches!(
        workspace.login("worker@example.org", "pw"),
        Err(LoginError::Store(_))
    ));
    assert_eq!(fs::read_to_string(&record_path).expect("read"), "{ not json");
}
