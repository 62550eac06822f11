//! branchline-core library.
//!
//! Named branches accumulate commits and may be merged; the layout engine
//! places every commit on a shared vertical timeline and describes the path
//! each secondary branch takes off the trunk.
//!
//! # Conventions
//!
//! - **Errors**: [`error::GraphError`] for model and layout operations,
//!   `anyhow::Result` for config file loading.
//! - **Logging**: `tracing` macros only; the library never installs a
//!   subscriber.
//!
//! ```
//! use branchline_core::prelude::*;
//!
//! let mut viz = Visualization::with_ids(
//!     GraphConfig::new(500.0, 500.0, 2.0),
//!     RecordingRenderer::new(),
//!     SequentialIds::default(),
//! )?;
//! viz.branch("master", Some("red"))?.commit("name")?.commit("Hello")?;
//! viz.branch("school", Some("blue"))?.commit("nouvelle")?;
//!
//! let layout = viz.push()?;
//! assert_eq!(layout.commits.len(), 3);
//! assert_eq!(layout.branch_paths.len(), 1);
//! # Ok::<(), GraphError>(())
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod id;
pub mod layout;
pub mod model;
pub mod render;

pub mod prelude {
    pub use crate::config::{GraphConfig, load_config};
    pub use crate::controller::Visualization;
    pub use crate::error::{ErrorCode, GraphError, RenderError};
    pub use crate::id::{IdentifierProvider, RandomIds, SequentialIds};
    pub use crate::layout::{
        BranchPath, CanvasGeometry, CommitPlacement, LayoutEngine, LayoutResult, TrunkPath,
    };
    pub use crate::model::{
        Branch, BranchHandle, BranchState, Commit, EntryKind, GraphModel, HistoryEntry,
    };
    pub use crate::render::{RecordingRenderer, RenderAdapter};
}
