//! CLI command implementations

use arbor_client::{CanvasClient, ClientConfig, CourseSource};
use arbor_sync::Orchestrator;
use std::sync::Arc;

/// Full run: profile, course list, one tree per course fetched
/// concurrently, aggregate printed. Per-course failures are reported
/// on stderr without aborting the run.
pub async fn tree(config: ClientConfig) -> anyhow::Result<()> {
    let client = Arc::new(CanvasClient::new(config));

    let profile = client.profile().await?;
    println!("{profile}");
    println!();

    let orchestrator = Orchestrator::new(client);
    let report = orchestrator.run().await?;

    tracing::info!(
        courses = report.root.folders.len(),
        nodes = report.root.node_count(),
        "tree build complete"
    );
    println!("{}", report.root);

    for failure in &report.failures {
        eprintln!("failed to fetch {}: {}", failure.course, failure.error);
    }
    Ok(())
}

pub async fn profile(config: ClientConfig) -> anyhow::Result<()> {
    let client = CanvasClient::new(config);
    let profile = client.profile().await?;
    println!("{profile}");
    Ok(())
}

pub async fn courses(config: ClientConfig) -> anyhow::Result<()> {
    let client = CanvasClient::new(config);
    let courses = client.courses().await?;
    if courses.is_empty() {
        println!("No courses found.");
        return Ok(());
    }
    for course in courses {
        println!("{course}");
    }
    Ok(())
}
