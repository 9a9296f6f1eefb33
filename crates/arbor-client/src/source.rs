//! Trait seam between the sync pipeline and the remote service

use crate::error::Result;
use arbor_core::{CourseRecord, FileRecord, FolderRecord, Profile};
use async_trait::async_trait;

/// The remote operations the sync pipeline depends on.
///
/// Implemented by [`CanvasClient`]; test doubles stand in for the
/// network.
///
/// [`CanvasClient`]: crate::client::CanvasClient
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Profile of the token's owner.
    async fn profile(&self) -> Result<Profile>;

    /// Courses the authenticated user is enrolled in.
    async fn courses(&self) -> Result<Vec<CourseRecord>>;

    /// The flat, unordered folder listing of one course.
    async fn course_folders(&self, course_id: u64)
    -> Result<Vec<FolderRecord>>;

    /// The flat file listing of one course.
    async fn course_files(&self, course_id: u64) -> Result<Vec<FileRecord>>;
}
