//! Fan-out/fan-in over independent per-course fetches

use arbor_client::{ClientError, CourseSource};
use arbor_core::{CourseRecord, FolderTree};
use futures_util::stream::{self, StreamExt};
use std::sync::Arc;

/// Upper bound on course listings in flight at once.
pub const DEFAULT_CONCURRENT_FETCHES: usize = 8;

/// Synthetic top-level node introduced solely to aggregate the
/// per-course trees into one structure.
const ROOT_ID: u64 = 0;
const ROOT_NAME: &str = "root";

/// One course that could not be fetched. Its subtree is absent from
/// the aggregate; the run itself still completes.
#[derive(Debug)]
pub struct CourseFailure {
    pub course: CourseRecord,
    pub error: ClientError,
}

/// The outcome of a full sync pass.
#[derive(Debug)]
pub struct SyncReport {
    /// Synthetic root with one child per successfully fetched course.
    pub root: FolderTree,
    /// Courses whose folder listing could not be fetched.
    pub failures: Vec<CourseFailure>,
}

/// Drives one tree build per course, with listings fetched
/// concurrently across courses, and aggregates the finished trees
/// under a synthetic root.
pub struct Orchestrator {
    source: Arc<dyn CourseSource>,
    concurrency: usize,
}

impl Orchestrator {
    pub fn new(source: Arc<dyn CourseSource>) -> Self {
        Orchestrator {
            source,
            concurrency: DEFAULT_CONCURRENT_FETCHES,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetch the course list, then build every course's tree. Failing
    /// to list the courses at all is fatal; per-course failures are
    /// isolated and reported instead.
    pub async fn run(&self) -> Result<SyncReport, ClientError> {
        let courses = self.source.courses().await?;
        Ok(self.run_for(courses).await)
    }

    /// Build one tree per course concurrently and aggregate them.
    ///
    /// Each course's tree stays private to its fetch unit until the
    /// unit completes; attaching to the synthetic root happens after
    /// the join point, so no unit ever shares mutable state.
    pub async fn run_for(&self, courses: Vec<CourseRecord>) -> SyncReport {
        let units =
            courses.into_iter().map(|course| self.build_course(course));
        let results: Vec<Result<FolderTree, CourseFailure>> =
            stream::iter(units)
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        let mut root = FolderTree::new(ROOT_ID, ROOT_NAME);
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(tree) => root.folders.push(tree),
                Err(failure) => {
                    tracing::warn!(
                        course = %failure.course,
                        error = %failure.error,
                        "course fetch failed"
                    );
                    failures.push(failure);
                }
            }
        }
        // completion order is nondeterministic; sort for stable output
        root.folders.sort_by(|a, b| a.name.cmp(&b.name));
        SyncReport { root, failures }
    }

    /// One fetch unit: the folder and file listings of a single
    /// course, reassembled into that course's tree.
    async fn build_course(
        &self,
        course: CourseRecord,
    ) -> Result<FolderTree, CourseFailure> {
        let (folders, files) = tokio::join!(
            self.source.course_folders(course.id),
            self.source.course_files(course.id),
        );
        let folders = match folders {
            Ok(v) => v,
            Err(error) => return Err(CourseFailure { course, error }),
        };
        // a failed file listing degrades to an empty one
        let files = files.unwrap_or_else(|err| {
            tracing::warn!(
                course_id = course.id,
                error = %err,
                "file listing failed"
            );
            Vec::new()
        });

        let mut tree = FolderTree::new(course.id, &course.name);
        tree.insert_all(folders);
        tree.attach_files(files);
        Ok(tree)
    }
}
