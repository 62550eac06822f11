//! Deterministic placement of commits and branch paths.
//!
//! Rows are shared by every branch: the `k`-th commit of the creation-order
//! walk sits at `k * row_spacing`, where `row_spacing = height / total`.
//! Columns are per branch: the branch at walk position `p` sits at
//! `p * column_spacing`. Each secondary branch leaves from the row of the
//! last commit placed before it.

use tracing::{debug, instrument};

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::layout::result::{
    BranchPath, CanvasGeometry, CommitPlacement, LayoutResult, TrunkPath,
};
use crate::model::Branch;

/// Pure function from a branch snapshot to a [`LayoutResult`].
///
/// Holds only the validated geometry it was built with; two calls with the
/// same inputs return equal results.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    config: GraphConfig,
}

impl LayoutEngine {
    /// Build an engine for the given canvas.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the config does not validate.
    pub fn new(config: GraphConfig) -> Result<Self, GraphError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.config
    }

    #[must_use]
    pub const fn canvas(&self) -> CanvasGeometry {
        CanvasGeometry {
            width: self.config.width,
            height: self.config.height,
            stroke_width: self.config.stroke_width,
            point_size: self.config.point_size,
        }
    }

    /// Lay out `branches` (in creation order) with commit `active_section`
    /// highlighted.
    ///
    /// A snapshot with no commits yields [`LayoutResult::empty`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    #[instrument(skip(self, branches), fields(branches = branches.len()))]
    pub fn layout(&self, branches: &[Branch], active_section: usize) -> LayoutResult {
        let total: usize = branches.iter().map(Branch::commit_count).sum();
        if total == 0 {
            debug!("no commits, empty layout");
            return LayoutResult::empty(self.canvas());
        }

        let row_spacing = self.config.height / total as f64;
        let mut commits = Vec::with_capacity(total);
        let mut branch_paths = Vec::with_capacity(branches.len().saturating_sub(1));

        let mut sequence = 0_usize;
        let mut running_row = 0.0_f64;

        for (position, branch) in branches.iter().enumerate() {
            let column = self.config.column_spacing * position as f64;

            if position != 0 {
                branch_paths.push(BranchPath {
                    branch_name: branch.name.clone(),
                    color: branch.color_or(&self.config.branch_color).to_owned(),
                    position,
                    origin_row: running_row,
                    origin_column: column,
                    vertical_extent: row_spacing * branch.commit_count() as f64
                        - self.config.point_size,
                    corner_radius: self.config.corner_radius,
                    branch_run: self.config.branch_run,
                });
            }

            for commit in &branch.commits {
                let row = sequence as f64 * row_spacing;
                running_row = row;
                commits.push(CommitPlacement {
                    sequence,
                    commit_id: commit.id.clone(),
                    label: commit.label.clone(),
                    branch_name: branch.name.clone(),
                    row_offset: row,
                    column_offset: column,
                    is_active: sequence == active_section,
                });
                sequence += 1;
            }
        }

        debug!(total, row_spacing, paths = branch_paths.len(), "layout computed");

        LayoutResult {
            canvas: self.canvas(),
            row_spacing,
            trunk: Some(self.trunk()),
            commits,
            branch_paths,
        }
    }

    fn trunk(&self) -> TrunkPath {
        TrunkPath {
            x: self.config.stroke_width / 2.0,
            top: self.config.top_margin,
            bottom: self.config.height,
            stroke_width: self.config.stroke_width,
            color: self.config.trunk_color.clone(),
        }
    }
}
