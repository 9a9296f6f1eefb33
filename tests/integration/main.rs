//! Integration tests for Arbor
//!
//! These tests verify that the crates work together correctly, from a
//! course source all the way to the printed aggregate tree.

use arbor_client::{ClientError, CourseSource, Result};
use arbor_core::{CourseRecord, FileRecord, FolderRecord, Profile};
use arbor_sync::Orchestrator;
use async_trait::async_trait;
use std::process::Command;
use std::sync::Arc;

/// Fixed two-course snapshot of a remote instance.
struct FixtureSource;

#[async_trait]
impl CourseSource for FixtureSource {
    async fn profile(&self) -> Result<Profile> {
        Ok(Profile {
            id: 1,
            name: "Ada Lovelace".to_string(),
            primary_email: "ada@u.example.edu".to_string(),
            login_id: "e0000001".to_string(),
        })
    }

    async fn courses(&self) -> Result<Vec<CourseRecord>> {
        Ok(vec![
            CourseRecord {
                id: 2,
                name: "Databases".to_string(),
            },
            CourseRecord {
                id: 1,
                name: "Algorithms".to_string(),
            },
        ])
    }

    async fn course_folders(&self, course_id: u64) -> Result<Vec<FolderRecord>> {
        let folder = |id, name: &str, path: &str| FolderRecord {
            id,
            name: name.to_string(),
            full_path: path.to_string(),
        };
        match course_id {
            // deliberately unordered: children arrive before parents
            1 => Ok(vec![
                folder(12, "Week 1", "course files/Lectures/Week 1"),
                folder(10, "course files", "course files"),
                folder(11, "Lectures", "course files/Lectures"),
            ]),
            2 => Ok(vec![folder(20, "course files", "course files")]),
            _ => Err(ClientError::Status {
                status: reqwest::StatusCode::NOT_FOUND,
                url: format!("/api/v1/courses/{course_id}/folders"),
            }),
        }
    }

    async fn course_files(&self, course_id: u64) -> Result<Vec<FileRecord>> {
        match course_id {
            1 => Ok(vec![FileRecord {
                id: 900,
                folder_id: 12,
                filename: "intro.pdf".to_string(),
                url: "https://example.com/files/900/download".to_string(),
            }]),
            _ => Ok(vec![]),
        }
    }
}

/// The whole pipeline: source → per-course trees → aggregate.
#[tokio::test]
async fn test_pipeline_builds_aggregate_tree() {
    let orchestrator = Orchestrator::new(Arc::new(FixtureSource));
    let report = orchestrator.run().await.unwrap();

    assert!(report.failures.is_empty());
    assert_eq!(
        report.root.canonical(),
        "{(0,root):\
         {(1,Algorithms):{(10,course files):{(11,Lectures):{(12,Week 1):}}}}\
         {(2,Databases):{(20,course files):}}}"
    );

    let rendered = report.root.to_string();
    assert!(rendered.contains("Week 1"));
    assert!(rendered.contains("intro.pdf"));
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("arbor"));
    assert!(stdout.contains("Mirror remote course folders"));
}

/// A missing token must abort before any network call, with a
/// non-zero exit and a diagnostic on stderr.
#[test]
fn test_cli_missing_token_is_fatal() {
    let output = Command::new("cargo")
        .args(["run", "--", "tree"])
        .env_remove("CANVAS_TOKEN")
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("CANVAS_TOKEN"));
}
