use super::*;

#[test]
fn sample_list_has_five_ranked_entries() {
    let movies = MovieItem::sample_list();
    assert_eq!(movies.len(), 5);
    assert_eq!(movies[0], MovieItem::new(1, "1. The Matrix", SAMPLE_IMAGE_URL));
    assert_eq!(movies[3].title, "4. The Dark Knight");
    assert_eq!(movies[4].id, 5);
    assert!(movies.iter().all(|m| m.image_url == SAMPLE_IMAGE_URL));
}

#[test]
fn empty_json_yields_the_builtin_reel() {
    let cfg = ReelConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, ReelConfig::default());
    assert_eq!(cfg.props.title, "Top 5 Best Movies");
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    cfg.validate().unwrap();
}

#[test]
fn json_overrides_selected_fields() {
    let cfg = ReelConfig::from_json_str(
        r#"{
            "props": { "title": "Top 2 Documentaries" },
            "fps": { "num": 24, "den": 1 },
            "movies": [
                { "id": 7, "title": "1. Baraka", "image_url": "https://example.test/a.jpg" },
                { "id": 9, "title": "2. Koyaanisqatsi", "image_url": "https://example.test/b.jpg" }
            ],
            "timing": { "item_secs": 4.0 }
        }"#,
    )
    .unwrap();
    assert_eq!(cfg.props.title, "Top 2 Documentaries");
    assert_eq!(cfg.movies.len(), 2);
    assert_eq!(cfg.movies[1].id, 9);
    assert_eq!(cfg.timing.item_secs, 4.0);
    assert_eq!(cfg.timing.title_secs, 2.5);
    assert_eq!(cfg.canvas, Canvas::default());
    assert_eq!(cfg.fonts, FontSet::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = ReelConfig::from_json_str("{ \"fps\": 30 }").unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = ReelConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn validate_rejects_structural_problems() {
    let zero_den = ReelConfig {
        fps: Fps { num: 30, den: 0 },
        ..ReelConfig::default()
    };
    assert!(zero_den.validate().is_err());

    let flat = ReelConfig {
        canvas: Canvas {
            width: 0,
            height: 720,
        },
        ..ReelConfig::default()
    };
    assert!(flat.validate().is_err());

    let negative = ReelConfig {
        timing: TimingSecs {
            transition_secs: 0.0,
            ..TimingSecs::default()
        },
        ..ReelConfig::default()
    };
    assert!(negative.validate().is_err());
}

#[test]
fn content_is_not_validated_here() {
    let cfg = ReelConfig {
        props: ReelProps {
            title: String::new(),
        },
        movies: vec![MovieItem::new(1, "", "")],
        ..ReelConfig::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn duplicate_movie_ids_fail_validation() {
    let mut cfg = ReelConfig::default();
    cfg.movies.push(MovieItem::new(3, "6. Alien", SAMPLE_IMAGE_URL));
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(err.to_string().contains("duplicate movie id 3"));
}
