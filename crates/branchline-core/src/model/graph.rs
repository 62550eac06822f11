//! The branch/commit model and its history ledger.
//!
//! [`GraphModel`] owns every [`Branch`] (in creation order) and the
//! chronological [`HistoryEntry`] log. Mutations validate first and only then
//! touch state, so a failed call never leaves a half-applied change behind.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::GraphError;
use crate::id::{IdentifierProvider, RandomIds};
use crate::model::branch::{Branch, Commit};
use crate::model::handle::BranchHandle;
use crate::model::history::{EntryKind, HistoryEntry};

/// In-memory commit graph.
#[derive(Debug, Clone)]
pub struct GraphModel<I = RandomIds> {
    branches: Vec<Branch>,
    /// Branch name → position in `branches`.
    by_name: HashMap<String, usize>,
    history: Vec<HistoryEntry>,
    ids: I,
}

impl GraphModel<RandomIds> {
    /// Empty model with random identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ids(RandomIds::new())
    }
}

impl Default for GraphModel<RandomIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdentifierProvider> GraphModel<I> {
    /// Empty model drawing identifiers from `ids`.
    #[must_use]
    pub fn with_ids(ids: I) -> Self {
        Self {
            branches: Vec::new(),
            by_name: HashMap::new(),
            history: Vec::new(),
            ids,
        }
    }

    /// Create a branch and return a handle bound to it.
    ///
    /// The branch gets `index = existing branches + 1` and starts `Active`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateBranch`] if `name` is taken; the model
    /// is unchanged.
    pub fn create_branch(
        &mut self,
        name: &str,
        color: Option<&str>,
    ) -> Result<BranchHandle<'_, I>, GraphError> {
        if self.by_name.contains_key(name) {
            return Err(GraphError::DuplicateBranch {
                name: name.to_owned(),
            });
        }

        let id = self.ids.next_id();
        let index = self.branches.len() + 1;
        debug!(branch = name, %id, index, "branch created");

        self.by_name.insert(name.to_owned(), self.branches.len());
        self.branches.push(Branch::new(
            name.to_owned(),
            id,
            color.map(str::to_owned),
            index,
        ));

        Ok(BranchHandle::new(self, name.to_owned()))
    }

    /// Handle for a branch that already exists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] if no branch has that name.
    pub fn handle(&mut self, name: &str) -> Result<BranchHandle<'_, I>, GraphError> {
        if !self.by_name.contains_key(name) {
            return Err(GraphError::unknown(name));
        }
        Ok(BranchHandle::new(self, name.to_owned()))
    }

    /// Append a commit labelled `value` to `branch_name`.
    ///
    /// The branch's state is left alone; committing on a merged branch is
    /// allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] before anything is appended.
    pub fn commit(
        &mut self,
        branch_name: &str,
        value: &str,
        message: Option<&str>,
    ) -> Result<(), GraphError> {
        let position = self.position(branch_name)?;
        let id = self.ids.next_id();
        debug!(branch = branch_name, %id, label = value, "commit appended");

        self.branches[position].commits.push(Commit {
            id: id.clone(),
            label: value.to_owned(),
            message: message.map(str::to_owned),
        });
        self.history.push(HistoryEntry {
            id,
            branch_name: branch_name.to_owned(),
            kind: EntryKind::Commit,
        });
        Ok(())
    }

    /// Record a merge on `branch_name`.
    ///
    /// The named branch itself receives a synthetic commit labelled
    /// `commit_label` and is marked merged. Repeated merges each append again.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownBranch`] before anything is appended.
    pub fn merge(&mut self, branch_name: &str, commit_label: &str) -> Result<(), GraphError> {
        let position = self.position(branch_name)?;
        let id = self.ids.next_id();

        let branch = &mut self.branches[position];
        if branch.is_merged() {
            warn!(branch = branch_name, "merging a branch that is already merged");
        }
        debug!(branch = branch_name, %id, label = commit_label, "merge appended");

        branch.commits.push(Commit {
            id: id.clone(),
            label: commit_label.to_owned(),
            message: None,
        });
        branch.mark_merged();
        self.history.push(HistoryEntry {
            id,
            branch_name: branch_name.to_owned(),
            kind: EntryKind::Merge,
        });
        Ok(())
    }

    /// All branches in creation order.
    #[must_use]
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Look up a branch by name.
    #[must_use]
    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.by_name.get(name).map(|&pos| &self.branches[pos])
    }

    /// Returns `true` if a branch with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The full history ledger in call order.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// History entries that touched one branch, in call order.
    pub fn history_for<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a HistoryEntry> {
        self.history.iter().filter(move |e| e.branch_name == name)
    }

    /// Sum of commit counts over all branches (merge commits included).
    #[must_use]
    pub fn total_commits(&self) -> usize {
        self.branches.iter().map(Branch::commit_count).sum()
    }

    /// Returns `true` if there are no commits on any branch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_commits() == 0
    }

    fn position(&self, name: &str) -> Result<usize, GraphError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::unknown(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SequentialIds;
    use crate::model::branch::BranchState;

    fn model() -> GraphModel<SequentialIds> {
        GraphModel::with_ids(SequentialIds::default())
    }

    #[test]
    fn branches_keep_creation_order_and_index() {
        let mut graph = model();
        for name in ["master", "school", "experience"] {
            graph.create_branch(name, None).expect("create");
        }

        let names: Vec<&str> = graph.branches().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["master", "school", "experience"]);
        let indexes: Vec<usize> = graph.branches().iter().map(|b| b.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
        assert!(graph.branches().iter().all(|b| b.state == BranchState::Active));
    }

    #[test]
    fn duplicate_branch_is_rejected_without_change() {
        let mut graph = model();
        graph.create_branch("master", Some("red")).expect("create");
        graph.commit("master", "init", None).expect("commit");
        let before = graph.branches().to_vec();

        let err = graph.create_branch("master", Some("blue")).err();
        assert_eq!(
            err,
            Some(GraphError::DuplicateBranch {
                name: "master".into()
            })
        );
        assert_eq!(graph.branches(), before.as_slice());
        assert_eq!(graph.history().len(), 1);
    }

    #[test]
    fn commit_appends_commit_and_history() {
        let mut graph = model();
        graph.create_branch("master", None).expect("create");
        graph.commit("master", "name", Some("first")).expect("commit");
        graph.commit("master", "Hello", None).expect("commit");

        let master = graph.branch("master").expect("master");
        assert_eq!(master.commits.len(), 2);
        assert_eq!(master.commits[0].label, "name");
        assert_eq!(master.commits[0].message.as_deref(), Some("first"));
        assert_eq!(master.commits[1].label, "Hello");

        let kinds: Vec<EntryKind> = graph.history().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EntryKind::Commit, EntryKind::Commit]);
        assert_eq!(graph.history()[0].id, master.commits[0].id);
    }

    #[test]
    fn commit_on_unknown_branch_changes_nothing() {
        let mut graph = model();
        graph.create_branch("master", None).expect("create");

        let err = graph.commit("nope", "x", None).expect_err("unknown");
        assert_eq!(err, GraphError::UnknownBranch { name: "nope".into() });
        assert!(graph.history().is_empty());
        assert!(graph.is_empty());
    }

    #[test]
    fn merge_marks_named_branch_and_appends() {
        let mut graph = model();
        graph.create_branch("master", None).expect("create");
        graph.create_branch("school", None).expect("create");
        graph.commit("school", "a", None).expect("commit");

        graph.merge("school", "merged school").expect("merge");

        let school = graph.branch("school").expect("school");
        assert_eq!(school.state, BranchState::Merged);
        assert_eq!(school.commits.len(), 2);
        assert_eq!(school.commits[1].label, "merged school");
        assert_eq!(graph.branch("master").map(|b| b.state), Some(BranchState::Active));

        let last = graph.history().last().expect("entry");
        assert_eq!(last.kind, EntryKind::Merge);
        assert_eq!(last.branch_name, "school");
    }

    #[test]
    fn repeated_merges_each_append() {
        let mut graph = model();
        graph.create_branch("cons", None).expect("create");
        graph.merge("cons", "one").expect("merge");
        graph.merge("cons", "two").expect("merge");

        assert_eq!(graph.branch("cons").map(Branch::commit_count), Some(2));
        assert_eq!(graph.history().len(), 2);
        assert!(graph.branch("cons").is_some_and(Branch::is_merged));
    }

    #[test]
    fn merge_on_unknown_branch_changes_nothing() {
        let mut graph = model();
        let err = graph.merge("ghost", "m").expect_err("unknown");
        assert_eq!(err.code(), crate::error::ErrorCode::UnknownBranch);
        assert!(graph.history().is_empty());
    }

    #[test]
    fn history_for_filters_by_branch() {
        let mut graph = model();
        graph.create_branch("a", None).expect("create");
        graph.create_branch("b", None).expect("create");
        graph.commit("a", "1", None).expect("commit");
        graph.commit("b", "2", None).expect("commit");
        graph.merge("a", "3").expect("merge");

        let a: Vec<EntryKind> = graph.history_for("a").map(|e| e.kind).collect();
        assert_eq!(a, vec![EntryKind::Commit, EntryKind::Merge]);
        assert_eq!(graph.history_for("b").count(), 1);
        assert_eq!(graph.total_commits(), 3);
    }

    #[test]
    fn ids_are_distinct_across_branches_and_commits() {
        let mut graph = model();
        graph.create_branch("a", None).expect("create");
        graph.commit("a", "1", None).expect("commit");
        graph.merge("a", "2").expect("merge");

        let a = graph.branch("a").expect("a");
        let mut ids = vec![a.id.clone()];
        ids.extend(a.commits.iter().map(|c| c.id.clone()));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn handle_requires_existing_branch() {
        let mut graph = model();
        assert!(graph.handle("master").is_err());
        graph.create_branch("master", None).expect("create");
        assert!(graph.handle("master").is_ok());
    }
}
