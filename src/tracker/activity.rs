//! Activities that study sessions can be filed under.

use serde::{Deserialize, Serialize};

use super::error::TrackerError;

/// A named activity (a course, a project, a topic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedActivity")]
pub struct Activity {
    name: String,
}

impl Activity {
    /// Creates an activity; the name must be non-empty.
    pub fn new(name: impl Into<String>) -> Result<Self, TrackerError> {
        let name = name.into();
        if name.is_empty() {
            return Err(TrackerError::EmptyName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Mirror of [`Activity`] used to re-validate on deserialization.
#[derive(Deserialize)]
struct UncheckedActivity {
    name: String,
}

impl TryFrom<UncheckedActivity> for Activity {
    type Error = TrackerError;

    fn try_from(raw: UncheckedActivity) -> Result<Self, Self::Error> {
        Self::new(raw.name)
    }
}
