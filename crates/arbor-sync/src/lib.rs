//! Arbor Sync — concurrent per-course fetch orchestration

pub mod orchestrator;


pub use orchestrator::{
    CourseFailure, DEFAULT_CONCURRENT_FETCHES, Orchestrator, SyncReport,
};
