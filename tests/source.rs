//! Ingestion: parsing the line-oriented description into a built model.

use shape_animator::source::parse_str;
use shape_animator::types::{Point, Rgb, ShapeKind, TransformationKind};
use shape_animator::Error;

const SMALL_SCENE: &str = "\
# a rectangle crossing the canvas while fading to red
canvas 200 70 360 360

shape R rectangle
motion R 1 210 80 50 100 0 0 255  10 210 80 50 100 0 0 255
motion R 10 210 80 50 100 0 0 255  50 300 280 50 100 255 0 0

shape C ellipse
motion C 6 440 70 120 60 0 170 85  20 440 250 120 60 0 170 85
";

#[test]
fn a_full_document_builds_the_model() {
    let model = parse_str(SMALL_SCENE).unwrap();
    assert_eq!(model.frame().unwrap().width, 360);
    assert_eq!(model.shape_count(), 2);
    assert_eq!(model.shape("R").unwrap().kind(), ShapeKind::Rectangle);
    assert_eq!(model.shape("C").unwrap().kind(), ShapeKind::Ellipse);
}

#[test]
fn the_first_motion_snaps_the_initial_state() {
    let model = parse_str(SMALL_SCENE).unwrap();
    // The declared placeholder is replaced by the first motion's start
    // values, offset by the canvas origin (200, 70).
    let r = model.shape("R").unwrap();
    assert_eq!(r.location(), Point::new(10, 10));
    assert_eq!((r.width(), r.height()), (50, 100));
    assert_eq!(r.color(), Rgb::new(0, 0, 255));
}

#[test]
fn motions_decompose_into_one_transformation_per_changed_group() {
    let model = parse_str(SMALL_SCENE).unwrap();
    // R's first motion changes nothing; the second changes position and
    // color but not size. C's single motion only moves.
    let kinds: Vec<(String, TransformationKind)> = model
        .entries()
        .flat_map(|(id, _, list)| {
            list.iter()
                .map(move |t| (id.to_string(), t.kind()))
        })
        .collect();
    assert_eq!(
        kinds,
        [
            ("R".to_string(), TransformationKind::Move),
            ("R".to_string(), TransformationKind::Recolor),
            ("C".to_string(), TransformationKind::Move),
        ],
    );
}

#[test]
fn motion_endpoints_are_frame_relative() {
    let mut model = parse_str(SMALL_SCENE).unwrap();
    let shapes = model.shapes_at_tick(50).unwrap();
    let r = shapes.iter().find(|s| s.id() == "R").unwrap();
    assert_eq!(r.location(), Point::new(100, 210));
}

#[test]
fn the_final_tick_spans_the_whole_document() {
    let model = parse_str(SMALL_SCENE).unwrap();
    assert_eq!(model.final_tick().unwrap(), 50);
}

#[test]
fn duplicate_shape_declarations_fail() {
    let err = parse_str("canvas 0 0 10 10\nshape R rectangle\nshape R ellipse\n").unwrap_err();
    assert!(matches!(err, Error::DuplicateId(id) if id == "R"));
}

#[test]
fn unknown_shape_kinds_fail_with_the_line_number() {
    let err = parse_str("canvas 0 0 10 10\nshape R triangle\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn short_motion_lines_fail_with_the_line_number() {
    let err = parse_str("canvas 0 0 10 10\nshape R rectangle\nmotion R 1 2 3\n").unwrap_err();
    assert!(matches!(err, Error::Parse { line: 3, .. }));
}

#[test]
fn overlapping_motions_surface_the_model_error() {
    let doc = "\
canvas 0 0 100 100
shape R rectangle
motion R 0 10 10 5 5 0 0 0  10 50 50 5 5 0 0 0
motion R 5 30 30 5 5 0 0 0  15 80 80 5 5 0 0 0
";
    let err = parse_str(doc).unwrap_err();
    assert!(matches!(err, Error::Overlap { .. }));
}
