//! Arbor Core — shared data contracts and the folder tree builder

pub mod model;
pub mod tree;


pub use model::{CourseRecord, FileRecord, FolderRecord, Profile};
pub use tree::{FolderTree, PATH_SEPARATOR};
