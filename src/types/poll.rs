use serde::{Deserialize, Serialize};

pub type PollId = u64;

/// A stored poll. `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub title: String,
    pub description: String,
}

/// Client-supplied fields for create and update. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl PollInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    pub(crate) fn into_poll(self, id: PollId) -> Poll {
        Poll {
            id,
            title: self.title,
            description: self.description,
        }
    }
}
