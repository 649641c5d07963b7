use super::*;
use crate::{
    assets::fonts::FontRegistry,
    config::model::ReelConfig,
    foundation::core::{Fps, Point},
};

fn reel_with(config: ReelConfig) -> Reel {
    let mut registry = FontRegistry::new();
    Reel::prepare(config, &mut registry).unwrap()
}

fn default_reel() -> Reel {
    reel_with(ReelConfig::default())
}

fn title_node(tree: &SceneTree) -> &TextNode {
    match &tree.scenes[0].content {
        VisualNode::Fill(fill) => match &fill.children[0] {
            VisualNode::Text(text) => text,
            other => panic!("expected heading, got {other:?}"),
        },
        other => panic!("expected fill, got {other:?}"),
    }
}

fn item_fill(tree: &SceneTree, index: usize) -> &FillNode {
    match &tree.scenes[1 + index].content {
        VisualNode::Fill(fill) => fill,
        other => panic!("expected fill, got {other:?}"),
    }
}

fn item_image(tree: &SceneTree, index: usize) -> &ImageNode {
    match &item_fill(tree, index).children[0] {
        VisualNode::Image(img) => img,
        other => panic!("expected image, got {other:?}"),
    }
}

fn eval(reel: &Reel, frame: u64) -> SceneTree {
    Evaluator::eval_frame(reel, FrameIndex(frame)).unwrap()
}

#[test]
fn title_starts_transparent_at_natural_size() {
    let tree = eval(&default_reel(), 0);
    let title = title_node(&tree);
    assert_eq!(title.opacity, 0.0);
    assert_eq!(title.scale, 1.0);
    assert_eq!(title.text, "Top 5 Best Movies");
    assert_eq!(title.style.font_family, "Fjalla One");
    assert_eq!(title.style.font_size_px, 80.0);
}

#[test]
fn title_reaches_full_opacity_and_scale_at_its_end() {
    let reel = default_reel();
    let tree = eval(&reel, 75);
    let title = title_node(&tree);
    assert_eq!(title.opacity, 1.0);
    assert_eq!(title.scale, 1.2);
    // The title scene itself is over by now.
    assert!(!tree.scenes[0].is_active());

    let last = eval(&reel, 74);
    assert!(last.scenes[0].is_active());
    assert!(title_node(&last).opacity < 1.0);
}

#[test]
fn title_scale_is_applied_about_the_heading_box_center() {
    let tree = eval(&default_reel(), 75);
    let title = title_node(&tree);
    // 1280x720 canvas, heading box is the top 55%: center (640, 198).
    let c = title.transform * Point::new(640.0, 198.0);
    assert!((c.x - 640.0).abs() < 1e-9);
    assert!((c.y - 198.0).abs() < 1e-9);
}

#[test]
fn item_scenes_follow_the_title_back_to_back() {
    let tree = eval(&default_reel(), 0);
    assert_eq!(tree.scenes.len(), 6);
    assert_eq!(tree.scenes[0].start(), FrameIndex(0));
    assert_eq!(tree.scenes[0].duration_frames(), 75);
    for i in 0..5 {
        let scene = &tree.scenes[1 + i];
        assert_eq!(scene.start(), FrameIndex(75 + 90 * i as u64));
        assert_eq!(scene.duration_frames(), 90);
        assert_eq!(
            scene.kind,
            SceneKind::Item {
                index: i,
                movie_id: i as u32 + 1
            }
        );
    }
    assert_eq!(tree.duration, FrameIndex(525));
}

#[test]
fn item_fades_in_over_the_transition_window() {
    let reel = default_reel();
    for (index, start) in [(0usize, 75u64), (1, 165)] {
        assert_eq!(item_fill(&eval(&reel, start), index).opacity, 0.0);
        assert_eq!(item_fill(&eval(&reel, start + 15), index).opacity, 1.0);
        assert_eq!(item_fill(&eval(&reel, start + 60), index).opacity, 1.0);
        let mid = item_fill(&eval(&reel, start + 5), index).opacity;
        assert!(mid > 0.0 && mid < 1.0);
    }
}

#[test]
fn item_image_zooms_across_the_scene() {
    let reel = default_reel();
    assert_eq!(item_image(&eval(&reel, 75), 0).scale, 1.0);
    assert_eq!(item_image(&eval(&reel, 165), 0).scale, 1.1);
    let mid = item_image(&eval(&reel, 120), 0).scale;
    assert!((mid - 1.05).abs() < 1e-12);

    let tree = eval(&reel, 120);
    let img = item_image(&tree, 0);
    assert_eq!(img.fit, ObjectFit::Cover);
    assert_eq!(img.alt, "1. The Matrix");
}

#[test]
fn caption_is_pinned_to_the_bottom_with_movie_title() {
    let tree = eval(&default_reel(), 200);
    let fill = item_fill(&tree, 1);
    let VisualNode::Text(caption) = &fill.children[1] else {
        panic!("expected caption");
    };
    assert_eq!(caption.text, "2. Inception");
    assert_eq!(caption.style.font_family, "Archivo Black");
    assert_eq!(caption.style.font_size_px, 40.0);
    assert_eq!(caption.style.background_rgba8, Some([0, 0, 0, 128]));
    assert_eq!(
        caption.style.placement,
        Placement::AnchoredBottom {
            bottom_px: 20.0,
            width_pct: 100.0
        }
    );
}

#[test]
fn exactly_one_scene_is_active_per_frame() {
    let reel = default_reel();
    for f in [0, 74, 75, 164, 165, 300, 524] {
        let tree = eval(&reel, f);
        let active: Vec<_> = tree.active_scenes().collect();
        assert_eq!(active.len(), 1, "frame {f}");
        let scene = active[0];
        assert_eq!(
            scene.local_frame,
            Some(FrameIndex(f - scene.start().0)),
            "frame {f}"
        );
    }
}

#[test]
fn hidden_items_keep_their_extrapolated_values() {
    // Item 1 starts at 165; at frame 150 its fade extends below zero.
    let tree = eval(&default_reel(), 150);
    assert!(!tree.scenes[2].is_active());
    assert_eq!(item_fill(&tree, 1).opacity, -1.0);
}

#[test]
fn empty_movie_list_yields_only_the_title() {
    let reel = reel_with(ReelConfig {
        movies: Vec::new(),
        ..ReelConfig::default()
    });
    assert_eq!(reel.duration(), FrameIndex(75));
    let tree = eval(&reel, 10);
    assert_eq!(tree.scenes.len(), 1);
    assert_eq!(tree.scenes[0].kind, SceneKind::Title);
    assert!(tree.image_sources().is_empty());
}

#[test]
fn longer_lists_generalize() {
    let mut config = ReelConfig::default();
    config
        .movies
        .push(MovieItem::new(6, "6. Alien", "https://example.test/alien.jpg"));
    let reel = reel_with(config);
    assert_eq!(reel.duration(), FrameIndex(615));
    let tree = eval(&reel, 600);
    assert_eq!(tree.scenes.len(), 7);
    assert_eq!(tree.scenes[6].id, "item-6");
    assert!(tree.scenes[6].is_active());
}

#[test]
fn frames_past_the_end_hold_the_final_values() {
    let reel = default_reel();
    for f in [525, 600] {
        let tree = eval(&reel, f);
        assert_eq!(tree.active_scenes().count(), 0, "frame {f}");
        assert_eq!(title_node(&tree).opacity, 1.0);
        assert_eq!(title_node(&tree).scale, 1.2);
        for index in 0..5 {
            assert_eq!(item_fill(&tree, index).opacity, 1.0, "frame {f}");
            assert_eq!(item_image(&tree, index).scale, 1.1, "frame {f}");
        }
    }
    assert!(render(FrameIndex(524), &reel).unwrap().scenes[5].is_active());
}

#[test]
fn title_only_reel_reaches_its_end_state() {
    let reel = reel_with(ReelConfig {
        movies: Vec::new(),
        ..ReelConfig::default()
    });
    let tree = eval(&reel, 75);
    assert!(!tree.scenes[0].is_active());
    assert_eq!(title_node(&tree).opacity, 1.0);
    assert_eq!(title_node(&tree).scale, 1.2);
}

#[test]
fn duplicate_movie_ids_are_rejected() {
    let mut config = ReelConfig::default();
    config.movies[1].id = 1;
    let mut registry = FontRegistry::new();
    let err = Reel::prepare(config, &mut registry).unwrap_err();
    assert!(err.to_string().contains("duplicate movie id 1"));
}

#[test]
fn same_frame_twice_is_identical() {
    let reel = default_reel();
    let a = serde_json::to_vec(&eval(&reel, 200)).unwrap();
    let b = serde_json::to_vec(&eval(&reel, 200)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn title_comes_from_props() {
    let mut config = ReelConfig::default();
    config.props.title = "Top 5 Heist Movies".to_string();
    let tree = eval(&reel_with(config), 10);
    assert_eq!(title_node(&tree).text, "Top 5 Heist Movies");
}

#[test]
fn low_fps_is_rejected_at_construction() {
    let mut registry = FontRegistry::new();
    let config = ReelConfig {
        fps: Fps::new(1, 1).unwrap(),
        ..ReelConfig::default()
    };
    assert!(Reel::prepare(config, &mut registry).is_err());
}

#[test]
fn fonts_must_match_the_config() {
    let mut registry = FontRegistry::new();
    let fonts = crate::assets::fonts::FontSet {
        heading: "Inter".to_string(),
        caption: "Inter".to_string(),
    }
    .prepare(&mut registry)
    .unwrap();
    let err = Reel::new(ReelConfig::default(), fonts).unwrap_err();
    assert!(err.to_string().contains("prepared fonts"));
}
