use serde::Serialize;

/// Canvas constants a layout was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub stroke_width: f64,
    pub point_size: f64,
}

/// Position of one commit marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommitPlacement {
    /// Global 0-based sequence number across all branches.
    pub sequence: usize,
    pub commit_id: String,
    pub label: String,
    pub branch_name: String,
    pub row_offset: f64,
    pub column_offset: f64,
    pub is_active: bool,
}

/// Connecting path of a non-primary branch.
///
/// The path leaves `(origin_column, origin_row)`, runs `branch_run`
/// horizontally, turns down through an arc of `corner_radius`, then drops
/// `vertical_extent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchPath {
    pub branch_name: String,
    pub color: String,
    /// Position in the creation-order walk (never 0).
    pub position: usize,
    pub origin_row: f64,
    pub origin_column: f64,
    pub vertical_extent: f64,
    pub corner_radius: f64,
    pub branch_run: f64,
}

/// Straight vertical line the primary branch is drawn as.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrunkPath {
    pub x: f64,
    pub top: f64,
    pub bottom: f64,
    pub stroke_width: f64,
    pub color: String,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub canvas: CanvasGeometry,
    pub row_spacing: f64,
    pub trunk: Option<TrunkPath>,
    pub commits: Vec<CommitPlacement>,
    pub branch_paths: Vec<BranchPath>,
}

impl LayoutResult {
    /// The result for a graph with no commits.
    #[must_use]
    pub const fn empty(canvas: CanvasGeometry) -> Self {
        Self {
            canvas,
            row_spacing: 0.0,
            trunk: None,
            commits: Vec::new(),
            branch_paths: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Placement with the given global sequence number.
    #[must_use]
    pub fn commit(&self, sequence: usize) -> Option<&CommitPlacement> {
        self.commits.get(sequence)
    }

    /// The highlighted commit, if the active index is in range.
    #[must_use]
    pub fn active(&self) -> Option<&CommitPlacement> {
        self.commits.iter().find(|c| c.is_active)
    }

    /// Path descriptor of a secondary branch.
    #[must_use]
    pub fn path_for(&self, branch_name: &str) -> Option<&BranchPath> {
        self.branch_paths
            .iter()
            .find(|p| p.branch_name == branch_name)
    }
}
