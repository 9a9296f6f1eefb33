//! Data contracts for the remote course, folder, and file listings

use serde::{Deserialize, Serialize};
use std::fmt;

/// One course the authenticated user is enrolled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: u64,
    pub name: String,
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.id, self.name)
    }
}

/// One folder entry from a course's flat folder listing.
///
/// `full_path` (the remote `full_name` field) is the folder's complete
/// slash-delimited position. It is the only hierarchy information the
/// remote service provides; there is no parent id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub id: u64,
    pub name: String,
    #[serde(rename = "full_name")]
    pub full_path: String,
}

/// One file entry from a course's flat file listing. References its
/// owning folder by `folder_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: u64,
    pub folder_id: u64,
    pub filename: String,
    pub url: String,
}

/// The authenticated user's profile.
///
/// https://canvas.instructure.com/doc/api/users.html#Profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub name: String,
    pub primary_email: String,
    pub login_id: String,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "user data")?;
        writeln!(f, "  * id:    {}", self.id)?;
        writeln!(f, "  * name:  {}", self.name)?;
        writeln!(f, "  * email: {}", self.primary_email)?;
        write!(f, "  * login: {}", self.login_id)
    }
}
