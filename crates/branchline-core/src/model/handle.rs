use crate::error::GraphError;
use crate::id::IdentifierProvider;
use crate::model::graph::GraphModel;

/// A branch name bound to the model that owns it.
///
/// Calls delegate straight to [`GraphModel::commit`] and
/// [`GraphModel::merge`] and return the handle again so they chain:
///
/// ```
/// use branchline_core::id::SequentialIds;
/// use branchline_core::model::GraphModel;
///
/// let mut graph = GraphModel::with_ids(SequentialIds::default());
/// graph
///     .create_branch("master", Some("red"))?
///     .commit("name")?
///     .commit("Hello")?;
/// assert_eq!(graph.total_commits(), 2);
/// # Ok::<(), branchline_core::error::GraphError>(())
/// ```
#[derive(Debug)]
pub struct BranchHandle<'a, I> {
    model: &'a mut GraphModel<I>,
    name: String,
}

impl<'a, I: IdentifierProvider> BranchHandle<'a, I> {
    pub(crate) const fn new(model: &'a mut GraphModel<I>, name: String) -> Self {
        Self { model, name }
    }

    /// Name of the branch this handle is bound to.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Commit `value` on this branch.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphModel::commit`] errors.
    pub fn commit(&mut self, value: &str) -> Result<&mut Self, GraphError> {
        self.model.commit(&self.name, value, None)?;
        Ok(self)
    }

    /// Commit `value` on this branch with an attached message.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphModel::commit`] errors.
    pub fn commit_with_message(
        &mut self,
        value: &str,
        message: &str,
    ) -> Result<&mut Self, GraphError> {
        self.model.commit(&self.name, value, Some(message))?;
        Ok(self)
    }

    /// Merge `target`, which receives the synthetic commit and is marked
    /// merged. The handle's own branch is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] if `target` does not exist.
    pub fn merge(&mut self, target: &str, commit_label: &str) -> Result<&mut Self, GraphError> {
        self.model.merge(target, commit_label)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::id::SequentialIds;
    use crate::model::{BranchState, GraphModel};

    #[test]
    fn handle_commits_on_its_branch() {
        let mut graph = GraphModel::with_ids(SequentialIds::default());
        let mut school = graph.create_branch("school", Some("blue")).expect("create");
        assert_eq!(school.name(), "school");
        school
            .commit("nouvelle")
            .and_then(|h| h.commit_with_message("nouvelle", "second term"))
            .expect("commits");

        let branch = graph.branch("school").expect("school");
        assert_eq!(branch.commits.len(), 2);
        assert_eq!(branch.commits[1].message.as_deref(), Some("second term"));
    }

    #[test]
    fn handle_merge_targets_the_named_branch() {
        let mut graph = GraphModel::with_ids(SequentialIds::default());
        graph.create_branch("master", None).expect("create");
        graph
            .create_branch("school", None)
            .and_then(|mut h| h.merge("master", "graduated").map(|_| ()))
            .expect("merge");

        assert_eq!(graph.branch("master").map(|b| b.state), Some(BranchState::Merged));
        assert_eq!(graph.branch("school").map(|b| b.state), Some(BranchState::Active));
        assert_eq!(graph.branch("school").map(|b| b.commits.len()), Some(0));
    }

    #[test]
    fn handle_merge_on_unknown_target_fails() {
        let mut graph = GraphModel::with_ids(SequentialIds::default());
        let mut handle = graph.create_branch("master", None).expect("create");
        assert!(handle.merge("ghost", "x").is_err());
        assert_eq!(graph.history().len(), 0);
    }
}
