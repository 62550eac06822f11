use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a branch. `Active` becomes `Merged` once and never goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchState {
    #[default]
    Active,
    Merged,
}

impl BranchState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Merged => "merged",
        }
    }
}

impl fmt::Display for BranchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single point on a branch. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A named line of commits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub id: String,
    /// Explicit stroke color; `None` means the configured branch color.
    pub color: Option<String>,
    pub commits: Vec<Commit>,
    pub state: BranchState,
    /// 1-based creation order.
    pub index: usize,
}

impl Branch {
    pub(crate) fn new(name: String, id: String, color: Option<String>, index: usize) -> Self {
        Self {
            name,
            id,
            color,
            commits: Vec::new(),
            state: BranchState::Active,
            index,
        }
    }

    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.state == BranchState::Merged
    }

    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Color to stroke this branch with, falling back to `default`.
    #[must_use]
    pub fn color_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(default)
    }

    pub(crate) fn mark_merged(&mut self) {
        self.state = BranchState::Merged;
    }
}
