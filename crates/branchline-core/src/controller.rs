//! Public entry point: one visualization instance.
//!
//! [`Visualization`] owns a [`GraphModel`], a [`LayoutEngine`] and the
//! [`RenderAdapter`] frames are pushed to. Callers build branches through it
//! and call [`Visualization::push`] whenever they want a frame drawn; each
//! push lays out the whole model from scratch.

use tracing::{debug, info};

use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::id::{IdentifierProvider, RandomIds};
use crate::layout::{LayoutEngine, LayoutResult};
use crate::model::{BranchHandle, GraphModel};
use crate::render::RenderAdapter;

/// A commit-graph visualization bound to one drawing surface.
#[derive(Debug)]
pub struct Visualization<R, I = RandomIds> {
    model: GraphModel<I>,
    engine: LayoutEngine,
    renderer: R,
    active_section: usize,
    last_layout: Option<LayoutResult>,
}

impl<R: RenderAdapter> Visualization<R, RandomIds> {
    /// Build a visualization with random commit identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `config` does not validate.
    pub fn new(config: GraphConfig, renderer: R) -> Result<Self, GraphError> {
        Self::with_ids(config, renderer, RandomIds::new())
    }
}

impl<R: RenderAdapter, I: IdentifierProvider> Visualization<R, I> {
    /// Build a visualization drawing identifiers from `ids`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if `config` does not validate.
    pub fn with_ids(config: GraphConfig, renderer: R, ids: I) -> Result<Self, GraphError> {
        let engine = LayoutEngine::new(config)?;
        Ok(Self {
            model: GraphModel::with_ids(ids),
            engine,
            renderer,
            active_section: 0,
            last_layout: None,
        })
    }

    /// Create a branch and return a handle for committing on it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateBranch`] if the name is taken.
    pub fn branch(
        &mut self,
        name: &str,
        color: Option<&str>,
    ) -> Result<BranchHandle<'_, I>, GraphError> {
        self.model.create_branch(name, color)
    }

    /// Handle for an existing branch.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] if no branch has that name.
    pub fn on(&mut self, name: &str) -> Result<BranchHandle<'_, I>, GraphError> {
        self.model.handle(name)
    }

    /// Commit on a branch by name.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] if no branch has that name.
    pub fn commit(
        &mut self,
        branch_name: &str,
        value: &str,
        message: Option<&str>,
    ) -> Result<(), GraphError> {
        self.model.commit(branch_name, value, message)
    }

    /// Merge on a branch by name. See [`GraphModel::merge`].
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] if no branch has that name.
    pub fn merge(&mut self, branch_name: &str, commit_label: &str) -> Result<(), GraphError> {
        self.model.merge(branch_name, commit_label)
    }

    /// Highlight the commit with global sequence number `index` on the next
    /// push.
    pub fn set_active_section(&mut self, index: usize) {
        debug!(index, "active section set");
        self.active_section = index;
    }

    #[must_use]
    pub const fn active_section(&self) -> usize {
        self.active_section
    }

    /// Lay out the current model without drawing.
    #[must_use]
    pub fn layout(&self) -> LayoutResult {
        self.engine.layout(self.model.branches(), self.active_section)
    }

    /// Lay out the current model and hand the result to the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Render`] if the renderer rejects the frame; the
    /// previous frame stays as [`Visualization::last_layout`].
    pub fn push(&mut self) -> Result<&LayoutResult, GraphError> {
        let layout = self.layout();
        info!(
            branches = self.model.branches().len(),
            commits = layout.commits.len(),
            active_section = self.active_section,
            "pushing frame"
        );

        self.renderer.render(&layout)?;
        Ok(&*self.last_layout.insert(layout))
    }

    /// Layout forwarded by the most recent successful push.
    #[must_use]
    pub const fn last_layout(&self) -> Option<&LayoutResult> {
        self.last_layout.as_ref()
    }

    #[must_use]
    pub const fn model(&self) -> &GraphModel<I> {
        &self.model
    }

    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        self.engine.config()
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear down the visualization, keeping the renderer.
    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::id::SequentialIds;
    use crate::model::BranchState;
    use crate::render::RecordingRenderer;

    fn viz() -> Visualization<RecordingRenderer, SequentialIds> {
        Visualization::with_ids(
            GraphConfig::new(500.0, 500.0, 2.0),
            RecordingRenderer::new(),
            SequentialIds::default(),
        )
        .expect("viz")
    }

    struct FailingRenderer;

    impl RenderAdapter for FailingRenderer {
        fn render(&mut self, _layout: &LayoutResult) -> Result<(), RenderError> {
            Err(RenderError::new("surface detached"))
        }
    }

    #[test]
    fn invalid_config_is_rejected() {
        let result = Visualization::new(
            GraphConfig::new(-1.0, 500.0, 2.0),
            RecordingRenderer::new(),
        );
        assert!(matches!(result, Err(GraphError::InvalidConfig { field: "width", .. })));
    }

    #[test]
    fn push_forwards_one_frame_per_call() {
        let mut viz = viz();
        viz.branch("master", Some("red"))
            .and_then(|mut h| h.commit("name").and_then(|h| h.commit("Hello")).map(|_| ()))
            .expect("master");

        viz.push().expect("push");
        viz.commit("master", "again", None).expect("commit");
        viz.push().expect("push");

        let frames = viz.renderer().frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].commits.len(), 2);
        assert_eq!(frames[1].commits.len(), 3);
        assert_eq!(viz.last_layout(), frames.last());
    }

    #[test]
    fn push_on_empty_model_renders_empty_frame() {
        let mut viz = viz();
        let layout = viz.push().expect("push");
        assert!(layout.is_empty());
        assert_eq!(viz.renderer().frames().len(), 1);
    }

    #[test]
    fn active_section_flows_into_next_push() {
        let mut viz = viz();
        assert_eq!(viz.active_section(), 0);
        viz.branch("master", None)
            .and_then(|mut h| h.commit("a").and_then(|h| h.commit("b")).map(|_| ()))
            .expect("master");

        let first = viz.push().expect("push").clone();
        assert!(first.commits[0].is_active);

        viz.set_active_section(1);
        let second = viz.push().expect("push");
        assert!(!second.commits[0].is_active);
        assert!(second.commits[1].is_active);
    }

    #[test]
    fn on_resumes_an_existing_branch() {
        let mut viz = viz();
        viz.branch("master", None).expect("master");
        viz.branch("school", None).expect("school");
        viz.on("master")
            .and_then(|mut h| h.commit("late").map(|_| ()))
            .expect("resume");

        assert_eq!(viz.model().branch("master").map(|b| b.commits.len()), Some(1));
        assert!(matches!(viz.on("ghost"), Err(GraphError::UnknownBranch { .. })));
    }

    #[test]
    fn merge_through_facade() {
        let mut viz = viz();
        viz.branch("cons", None).expect("cons");
        viz.merge("cons", "wrap up").expect("merge");
        assert_eq!(viz.model().branch("cons").map(|b| b.state), Some(BranchState::Merged));
        assert!(viz.merge("ghost", "x").is_err());
    }

    #[test]
    fn render_failure_keeps_previous_frame() {
        let mut viz = Visualization::with_ids(
            GraphConfig::new(500.0, 500.0, 2.0),
            FailingRenderer,
            SequentialIds::default(),
        )
        .expect("viz");
        viz.branch("master", None).expect("master");
        viz.commit("master", "a", None).expect("commit");

        let err = viz.push().expect_err("render fails");
        assert_eq!(err.code(), crate::error::ErrorCode::RenderFailed);
        assert!(viz.last_layout().is_none());
        assert_eq!(viz.model().total_commits(), 1);
    }

    #[test]
    fn into_renderer_returns_surface() {
        let mut viz = viz();
        viz.push().expect("push");
        let recorder = viz.into_renderer();
        assert_eq!(recorder.frames().len(), 1);
    }
}
