use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteAction {
    Summarize,
    Expand,
    Simplify,
    Correct,
    Academic,
    Creative,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NoteEdit {
    /// Note content after the selection was replaced.
    pub content: String,
    /// The fragment that replaced the selection.
    pub fragment: String,
}
