use serde::{Deserialize, Serialize};

/// Rules as they appear in the dataset: either an ordered list of clauses
/// or a single freeform paragraph.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Rules {
    Clauses(Vec<String>),
    Freeform(String),
}

/// Team size is either an exact headcount or a freeform range such as "2-4".
/// Absent means unlimited.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum TeamSize {
    Exact(u32),
    Range(String),
}

impl TeamSize {
    pub fn display(&self) -> String {
        match self {
            TeamSize::Exact(n) => n.to_string(),
            TeamSize::Range(s) => s.clone(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Event {
    pub event_id: i64,
    pub title: String,
    pub brief: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub rules: Option<Rules>,

    #[serde(default)]
    pub form_link: Option<String>,

    /// Absent means unlimited capacity.
    #[serde(default)]
    pub max_participants: Option<u32>,

    #[serde(default)]
    pub team_size: Option<TeamSize>,
}

impl Event {
    /// Case-insensitive substring match against title or brief.
    pub fn matches(&self, needle_lowercase: &str) -> bool {
        self.title.to_lowercase().contains(needle_lowercase)
            || self.brief.to_lowercase().contains(needle_lowercase)
    }
}
