//! SVG render adapter for branchline layouts.
//!
//! Paths (trunk and branch-offs) go into one `<svg>` element; commit markers
//! are absolutely positioned `<div>`s laid over it, so hosts can style and
//! hit-test them with plain CSS.

#![forbid(unsafe_code)]

use std::fmt::Write as _;

use branchline_core::error::RenderError;
use branchline_core::layout::{BranchPath, CommitPlacement, LayoutResult, TrunkPath};
use branchline_core::render::RenderAdapter;
use tracing::debug;

pub const DEFAULT_SVG_CLASS: &str = "classSvg";
pub const POINT_CLASS: &str = "curry__point";
pub const POINT_ACTIVE_CLASS: &str = "curry__point--active";
const PATH_FILL: &str = "#FFFFFF";

/// Markup produced for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgDocument {
    /// The `<svg>` element with every path.
    pub svg: String,
    /// One marker `<div>` per commit, in sequence order.
    pub markers: String,
}

impl SvgDocument {
    /// Both parts concatenated, svg first.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!("{}{}", self.svg, self.markers)
    }
}

/// Renders each pushed layout to an [`SvgDocument`] and keeps the latest.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    class_name: String,
    frames: usize,
    document: Option<SvgDocument>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::with_class(DEFAULT_SVG_CLASS)
    }

    /// Use `class_name` as the `class` of the `<svg>` root.
    #[must_use]
    pub fn with_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            frames: 0,
            document: None,
        }
    }

    /// Markup of the most recent frame.
    #[must_use]
    pub const fn document(&self) -> Option<&SvgDocument> {
        self.document.as_ref()
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub const fn frames(&self) -> usize {
        self.frames
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderAdapter for SvgRenderer {
    fn render(&mut self, layout: &LayoutResult) -> Result<(), RenderError> {
        let document = SvgDocument {
            svg: render_svg(layout, &self.class_name)?,
            markers: render_markers(layout)?,
        };
        self.frames += 1;
        debug!(
            frame = self.frames,
            bytes = document.svg.len() + document.markers.len(),
            "svg frame rendered"
        );
        self.document = Some(document);
        Ok(())
    }
}

/// Render the `<svg>` element: the trunk, then one path per secondary branch.
///
/// # Errors
///
/// Returns [`RenderError`] if formatting into the buffer fails.
pub fn render_svg(layout: &LayoutResult, class_name: &str) -> Result<String, RenderError> {
    let width = num(layout.canvas.width);
    let height = num(layout.canvas.height);
    let mut svg = String::new();

    write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" class=\"{}\" viewBox=\"0 0 {width} {height}\">",
        escape_xml(class_name)
    )
    .map_err(fmt_error)?;

    if let Some(trunk) = &layout.trunk {
        write_path(&mut svg, &trunk_d(trunk), trunk.stroke_width, &trunk.color)?;
    }
    for branch in &layout.branch_paths {
        write_path(
            &mut svg,
            &branch_d(branch, layout.canvas.point_size),
            layout.canvas.stroke_width,
            &branch.color,
        )?;
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Render one marker `<div>` per commit.
///
/// # Errors
///
/// Returns [`RenderError`] if formatting into the buffer fails.
pub fn render_markers(layout: &LayoutResult) -> Result<String, RenderError> {
    let mut out = String::new();
    for commit in &layout.commits {
        write_marker(&mut out, commit, layout.canvas.point_size)?;
    }
    Ok(out)
}

/// Path data for the trunk: a straight drop from the top margin.
#[must_use]
pub fn trunk_d(trunk: &TrunkPath) -> String {
    format!(
        "M {x} {top} L {x} {bottom}",
        x = num(trunk.x),
        top = num(trunk.top),
        bottom = num(trunk.bottom)
    )
}

/// Path data for a branch-off: horizontal run, quarter arc, vertical drop.
#[must_use]
pub fn branch_d(path: &BranchPath, point_size: f64) -> String {
    let half = point_size / 2.0;
    let r = num(path.corner_radius);
    format!(
        "M{},{} h{} a{r},{r} 0 0 1 {r},{r} v{}",
        num(path.origin_column),
        num(path.origin_row + half),
        num(path.branch_run - half),
        num(path.vertical_extent)
    )
}

fn write_path(
    out: &mut String,
    d: &str,
    stroke_width: f64,
    color: &str,
) -> Result<(), RenderError> {
    write!(
        out,
        "<path d=\"{d}\" stroke-width=\"{}\" stroke=\"{}\" fill=\"{PATH_FILL}\"/>",
        num(stroke_width),
        escape_xml(color)
    )
    .map_err(fmt_error)
}

fn write_marker(
    out: &mut String,
    commit: &CommitPlacement,
    point_size: f64,
) -> Result<(), RenderError> {
    let class = if commit.is_active {
        format!("{POINT_CLASS} {POINT_ACTIVE_CLASS}")
    } else {
        POINT_CLASS.to_string()
    };
    let size = num(point_size);
    write!(
        out,
        "<div title=\"{}\" class=\"{class}\" data-commit=\"{}\" style=\"top:{}px;left:{}px;width:{size}px;height:{size}px\"></div>",
        escape_xml(&commit.label),
        escape_xml(&commit.commit_id),
        num(commit.row_offset),
        num(commit.column_offset)
    )
    .map_err(fmt_error)
}

fn fmt_error(err: std::fmt::Error) -> RenderError {
    RenderError::new(format!("markup formatting failed: {err}"))
}

/// Format a coordinate with at most two decimals and no trailing zeros.
fn num(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
