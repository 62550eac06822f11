//! Layout: from a branch snapshot to screen-space geometry.
//!
//! - [`engine`] — [`LayoutEngine`], the placement algorithm.
//! - [`result`] — [`LayoutResult`] and the descriptors it carries.

pub mod engine;
pub mod result;

pub use engine::LayoutEngine;
pub use result::{BranchPath, CanvasGeometry, CommitPlacement, LayoutResult, TrunkPath};
