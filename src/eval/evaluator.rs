use crate::{
    animation::interpolate::{InterpolateOpts, interpolate},
    composition::model::{
        FillNode, ImageNode, ObjectFit, Placement, SceneKind, SceneNode, SceneTree, TextAlign,
        TextNode, TextStyle, VisualNode,
    },
    composition::reel::Reel,
    config::model::MovieItem,
    foundation::core::{Affine, FrameIndex, Rect, scale_about_center},
    foundation::error::ReelResult,
};

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];
// rgba(0, 0, 0, 0.5)
const CAPTION_BACKGROUND: [u8; 4] = [0, 0, 0, 128];

const TITLE_FONT_PX: f32 = 80.0;
const TITLE_HEIGHT_PCT: f32 = 55.0;
const TITLE_SCALE_END: f64 = 1.2;

const CAPTION_FONT_PX: f32 = 40.0;
const CAPTION_BOTTOM_PX: f32 = 20.0;
const CAPTION_PADDING_PX: f32 = 10.0;

const ITEM_ZOOM_END: f64 = 1.1;

/// Stateless evaluator from a [`Reel`] to per-frame scene trees.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(reel))]
    /// Build the full scene tree for `frame`.
    ///
    /// Pure: the same reel and frame always give an identical tree. Frames at or past the
    /// end hold every animated value at its final clamped value, with no scene active.
    pub fn eval_frame(reel: &Reel, frame: FrameIndex) -> ReelResult<SceneTree> {
        let duration = reel.duration();
        if frame.0 >= duration.0 {
            tracing::debug!(frame = frame.0, duration = duration.0, "frame past the end");
        }

        let mut scenes = Vec::with_capacity(1 + reel.movies().len());
        scenes.push(title_scene(reel, frame)?);
        for (index, movie) in reel.movies().iter().enumerate() {
            scenes.push(item_scene(reel, frame, index, movie)?);
        }

        Ok(SceneTree {
            frame,
            canvas: reel.config().canvas,
            duration,
            background_rgba8: BLACK,
            scenes,
        })
    }
}

/// Evaluate `frame` of `reel`; shorthand for [`Evaluator::eval_frame`].
pub fn render(frame: FrameIndex, reel: &Reel) -> ReelResult<SceneTree> {
    Evaluator::eval_frame(reel, frame)
}

fn title_scene(reel: &Reel, frame: FrameIndex) -> ReelResult<SceneNode> {
    let timing = reel.timing();
    let range = timing.title_range();
    let window = [0.0, timing.title_frames as f64];
    let f = frame.0 as f64;

    let opts = InterpolateOpts::clamp_right();
    let opacity = interpolate(f, &window, &[0.0, 1.0], opts)?;
    let scale = interpolate(f, &window, &[1.0, TITLE_SCALE_END], opts)?;

    let canvas = reel.config().canvas;
    let heading_box = Rect::new(
        0.0,
        0.0,
        f64::from(canvas.width),
        f64::from(canvas.height) * f64::from(TITLE_HEIGHT_PCT) / 100.0,
    );

    let heading = TextNode {
        text: reel.config().props.title.clone(),
        style: TextStyle {
            font_family: reel.fonts().heading().to_string(),
            font_size_px: TITLE_FONT_PX,
            color_rgba8: WHITE,
            align: TextAlign::Center,
            background_rgba8: None,
            padding_px: 0.0,
            placement: Placement::Centered {
                height_pct: TITLE_HEIGHT_PCT,
            },
        },
        opacity,
        scale,
        transform: scale_about_center(heading_box, scale),
    };

    Ok(SceneNode {
        id: "title".to_string(),
        kind: SceneKind::Title,
        range,
        local_frame: range.local_frame(frame),
        content: VisualNode::Fill(FillNode {
            opacity: 1.0,
            children: vec![VisualNode::Text(heading)],
        }),
    })
}

fn item_scene(
    reel: &Reel,
    frame: FrameIndex,
    index: usize,
    movie: &MovieItem,
) -> ReelResult<SceneNode> {
    let timing = reel.timing();
    let range = timing.item_range(index);
    let start = range.start.0 as f64;
    let f = frame.0 as f64;

    // Both curves read the global frame; before `start` they extrapolate, which only
    // matters for scenes that are declared but not active.
    let opts = InterpolateOpts::clamp_right();
    let fade = interpolate(
        f,
        &[start, start + timing.transition_frames as f64],
        &[0.0, 1.0],
        opts,
    )?;
    let zoom = interpolate(
        f,
        &[start, start + timing.item_frames as f64],
        &[1.0, ITEM_ZOOM_END],
        opts,
    )?;

    let image = ImageNode {
        src: movie.image_url.clone(),
        alt: movie.title.clone(),
        fit: ObjectFit::Cover,
        width_pct: 100.0,
        height_pct: 100.0,
        scale: zoom,
        transform: scale_about_center(reel.config().canvas.rect(), zoom),
    };

    let caption = TextNode {
        text: movie.title.clone(),
        style: TextStyle {
            font_family: reel.fonts().caption().to_string(),
            font_size_px: CAPTION_FONT_PX,
            color_rgba8: WHITE,
            align: TextAlign::Center,
            background_rgba8: Some(CAPTION_BACKGROUND),
            padding_px: CAPTION_PADDING_PX,
            placement: Placement::AnchoredBottom {
                bottom_px: CAPTION_BOTTOM_PX,
                width_pct: 100.0,
            },
        },
        opacity: 1.0,
        scale: 1.0,
        transform: Affine::IDENTITY,
    };

    Ok(SceneNode {
        id: format!("item-{}", movie.id),
        kind: SceneKind::Item {
            index,
            movie_id: movie.id,
        },
        range,
        local_frame: range.local_frame(frame),
        content: VisualNode::Fill(FillNode {
            opacity: fade,
            children: vec![VisualNode::Image(image), VisualNode::Text(caption)],
        }),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
