use crate::foundation::core::{Affine, Canvas, FrameIndex, FrameRange};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Declarative scene graph for one evaluated frame.
///
/// Every scene of the timeline is declared, visible or not; the host renders the ones
/// whose [`SceneNode::local_frame`] is set.
pub struct SceneTree {
    /// Evaluated global frame.
    pub frame: FrameIndex,
    /// Output canvas.
    pub canvas: Canvas,
    /// Total composition length in frames.
    pub duration: FrameIndex,
    /// Backdrop behind every scene (straight RGBA8).
    pub background_rgba8: [u8; 4],
    /// Scenes in timeline order: the title, then one per item.
    pub scenes: Vec<SceneNode>,
}

impl SceneTree {
    /// Scenes active at [`SceneTree::frame`].
    pub fn active_scenes(&self) -> impl Iterator<Item = &SceneNode> {
        self.scenes.iter().filter(|s| s.local_frame.is_some())
    }

    /// Every image URL the tree references, in scene order.
    ///
    /// Fetching and caching is up to the host.
    pub fn image_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for scene in &self.scenes {
            scene.content.collect_image_sources(&mut out);
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// A timeline region with its own content and a re-based frame counter.
pub struct SceneNode {
    /// Stable scene identifier (`title`, `item-<id>`).
    pub id: String,
    /// Which part of the reel this scene is.
    pub kind: SceneKind,
    /// Placement on the global timeline.
    pub range: FrameRange,
    /// `frame - range.start` while the scene is active.
    pub local_frame: Option<FrameIndex>,
    /// Visual content.
    pub content: VisualNode,
}

impl SceneNode {
    /// First frame of the scene.
    pub fn start(&self) -> FrameIndex {
        self.range.start
    }

    /// Scene length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.range.len_frames()
    }

    /// `true` when the scene is visible at the evaluated frame.
    pub fn is_active(&self) -> bool {
        self.local_frame.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Scene role.
pub enum SceneKind {
    /// Opening heading.
    Title,
    /// One ranked movie.
    Item {
        /// Position in the movie list.
        index: usize,
        /// [`crate::MovieItem::id`].
        movie_id: u32,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// A styled visual element.
pub enum VisualNode {
    /// Full-bleed layer stacking its children.
    Fill(FillNode),
    /// Text block.
    Text(TextNode),
    /// Raster image referenced by URL.
    Image(ImageNode),
}

impl VisualNode {
    fn collect_image_sources<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Fill(fill) => {
                for child in &fill.children {
                    child.collect_image_sources(out);
                }
            }
            Self::Image(img) => out.push(&img.src),
            Self::Text(_) => {}
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Absolute full-canvas layer.
pub struct FillNode {
    /// Layer opacity applied to all children.
    pub opacity: f64,
    /// Children in paint order.
    pub children: Vec<VisualNode>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Text block with animated opacity and scale.
pub struct TextNode {
    /// Content.
    pub text: String,
    /// Static styling.
    pub style: TextStyle,
    /// Opacity of the block.
    pub opacity: f64,
    /// Uniform scale about the block center.
    pub scale: f64,
    /// `scale` as a canvas-space matrix.
    pub transform: Affine,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Static text styling.
pub struct TextStyle {
    /// Family name registered through [`crate::FontSet::prepare`].
    pub font_family: String,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Text color (straight RGBA8).
    pub color_rgba8: [u8; 4],
    /// Horizontal alignment.
    pub align: TextAlign,
    /// Box background, if any (straight RGBA8).
    pub background_rgba8: Option<[u8; 4]>,
    /// Box padding in pixels.
    pub padding_px: f32,
    /// Box placement on the canvas.
    pub placement: Placement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Horizontal text alignment.
pub enum TextAlign {
    /// Centered lines.
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Where a text box sits on the canvas.
pub enum Placement {
    /// Full-width box from the top edge; text centered both ways inside it.
    Centered {
        /// Box height as a percentage of the canvas height.
        height_pct: f32,
    },
    /// Box pinned above the bottom edge.
    AnchoredBottom {
        /// Distance from the bottom edge in pixels.
        bottom_px: f32,
        /// Box width as a percentage of the canvas width.
        width_pct: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
/// Image fitting inside its box.
pub enum ObjectFit {
    /// Fill the box, cropping overflow while keeping aspect ratio.
    Cover,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Image layer with an animated zoom.
pub struct ImageNode {
    /// Remote image URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// Fitting mode.
    pub fit: ObjectFit,
    /// Box width as a percentage of the canvas width.
    pub width_pct: f32,
    /// Box height as a percentage of the canvas height.
    pub height_pct: f32,
    /// Uniform zoom about the box center.
    pub scale: f64,
    /// `scale` as a canvas-space matrix.
    pub transform: Affine,
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
