use std::fmt;

/// Machine-readable error codes for hosts that branch on failure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    DuplicateBranch,
    UnknownBranch,
    InvalidConfig,
    RenderFailed,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DuplicateBranch => "E2001",
            Self::UnknownBranch => "E2002",
            Self::InvalidConfig => "E1001",
            Self::RenderFailed => "E5001",
        }
    }

    /// Short human-facing summary for logs.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DuplicateBranch => "Branch name already exists",
            Self::UnknownBranch => "Branch not found",
            Self::InvalidConfig => "Invalid canvas configuration",
            Self::RenderFailed => "Render adapter failed",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::DuplicateBranch => Some("Branch names are unique for the lifetime of a graph."),
            Self::UnknownBranch => Some("Create the branch before committing or merging on it."),
            Self::InvalidConfig => Some("Width, height, stroke width and point size must be > 0."),
            Self::RenderFailed => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Failure reported by a [`RenderAdapter`](crate::render::RenderAdapter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("render failed: {reason}")]
pub struct RenderError {
    pub reason: String,
}

impl RenderError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Errors raised by graph mutations, configuration and `push`.
///
/// Every error is raised before any state changes: a failed call leaves the
/// model exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("branch '{name}' already exists")]
    DuplicateBranch { name: String },

    #[error("unknown branch '{name}'")]
    UnknownBranch { name: String },

    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl GraphError {
    /// Machine-readable code associated with this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::DuplicateBranch { .. } => ErrorCode::DuplicateBranch,
            Self::UnknownBranch { .. } => ErrorCode::UnknownBranch,
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            Self::Render(_) => ErrorCode::RenderFailed,
        }
    }

    #[must_use]
    pub const fn hint(&self) -> Option<&'static str> {
        self.code().hint()
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownBranch {
            name: name.to_owned(),
        }
    }
}
