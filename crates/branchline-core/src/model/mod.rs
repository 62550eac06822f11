//! Branch, commit and history data model.
//!
//! ## Submodules
//!
//! - [`branch`] — [`Branch`], [`Commit`] and the ACTIVE → MERGED lifecycle.
//! - [`history`] — chronological ledger of commit and merge events.
//! - [`graph`] — [`GraphModel`], the owner of both collections.
//! - [`handle`] — [`BranchHandle`], a branch name bound to its model.

pub mod branch;
pub mod graph;
pub mod handle;
pub mod history;

pub use branch::{Branch, BranchState, Commit};
pub use graph::GraphModel;
pub use handle::BranchHandle;
pub use history::{EntryKind, HistoryEntry};
