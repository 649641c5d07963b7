//! topreel declares an animated "Top N Movies" slideshow as a per-frame scene graph.
//!
//! The crate does not draw pixels. A rendering host asks for one frame at a time and gets
//! back a declarative [`SceneTree`]: a title scene followed by one scene per movie, each with
//! its frame range and styled text/image layers whose opacity and scale are already resolved.
//!
//! # Flow
//!
//! 1. **Configure**: load a [`ReelConfig`] (JSON or [`ReelConfig::default`]).
//! 2. **Register fonts**: [`FontSet::prepare`] drives the host's [`FontLoader`] once and returns
//!    [`PreparedFonts`].
//! 3. **Prepare**: [`Reel::new`] validates the config and quantizes scene lengths to frames
//!    ([`SceneTiming`]).
//! 4. **Evaluate**: [`render`] / [`Evaluator::eval_frame`] map `(frame, reel)` to a
//!    [`SceneTree`]. Evaluation is pure, so frames can be requested in any order or in
//!    parallel ([`render_frames`]).
//!
//! # Timeline
//!
//! At 30 fps the title lasts 75 frames and every item 90 frames; item `i` starts at
//! `75 + 90 * i`. Each item fades in over its first 15 frames and zooms from 1.0 to 1.1
//! across its whole scene. The fade length does not shift item starts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod composition;
mod config;
mod eval;
mod foundation;
mod render;
mod timeline;

pub use animation::ease::Ease;
pub use animation::interpolate::{Extrapolate, InterpolateOpts, interpolate};
pub use assets::fonts::{FontLoader, FontRegistry, FontSet, PreparedFonts};
pub use composition::model::{
    FillNode, ImageNode, ObjectFit, Placement, SceneKind, SceneNode, SceneTree, TextAlign,
    TextNode, TextStyle, VisualNode,
};
pub use composition::reel::Reel;
pub use config::model::{MovieItem, ReelConfig, ReelProps};
pub use eval::evaluator::{Evaluator, render};
pub use eval::fingerprint::{FrameFingerprint, combine_fingerprints, fingerprint_tree};
pub use foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, scale_about_center,
};
pub use foundation::error::{ReelError, ReelResult};
pub use render::pipeline::{RenderThreading, render_fingerprints, render_frames};
pub use timeline::timing::{SceneTiming, TimingSecs};
