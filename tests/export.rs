//! Exports: text, SVG, and baked JSON snapshots.

use anyhow::Result;

use shape_animator::export::{snapshot, svg, text};
use shape_animator::source::parse_str;
use shape_animator::types::{Point, Rgb};
use shape_animator::{Animation, Error, Shape, Transformation};

fn scene() -> Animation {
    let mut model = Animation::new();
    model.declare_frame(0, 0, 500, 400);
    model
        .add_shape("R", Shape::rectangle(10, 20, 30, 40, 255, 0, 0).unwrap())
        .unwrap();
    model
        .add_shape("C", Shape::ellipse(100, 100, 25, 15, 0, 0, 255).unwrap())
        .unwrap();
    model
        .add_transformation(
            "R",
            Transformation::movement(2, 10, Point::new(10, 20), Point::new(200, 20)).unwrap(),
        )
        .unwrap();
    model
        .add_transformation(
            "R",
            Transformation::recolor(4, 8, Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)).unwrap(),
        )
        .unwrap();
    model
        .add_transformation(
            "C",
            Transformation::resize(0, 10, 25, 15, 50, 30).unwrap(),
        )
        .unwrap();
    model
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

#[test]
fn text_export_matches_the_display_form() -> Result<()> {
    let model = scene();
    let mut sink = Vec::new();
    text::write_to(&model, &mut sink)?;
    assert_eq!(String::from_utf8(sink)?, model.to_string());
    Ok(())
}

#[test]
fn text_export_round_trips_through_ingestion() -> Result<()> {
    let doc = "\
canvas 0 0 100 100
shape R rectangle
motion R 0 10 10 5 5 1 2 3  10 50 10 5 5 1 2 3
";
    let model = parse_str(doc)?;
    assert_eq!(
        text::render(&model),
        "Shapes:\n\
         Name: R\nType: rectangle\nMin corner: (10, 10), Width: 5, Height: 5\nColor: (1, 2, 3)\n\n\
         Shape R moves from (10, 10) to (50, 10) from t = 0 to t = 10",
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// SVG
// ---------------------------------------------------------------------------

#[test]
fn svg_export_renders_the_whole_document() -> Result<()> {
    let rendered = svg::render(&scene(), 2.0)?;
    assert_eq!(
        rendered,
        "<svg width=\"500\" height=\"400\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">\n\
         <rect id=\"R\" x=\"10\" y=\"20\" width=\"30\" height=\"40\" fill=\"rgb(255,0,0)\" visibility=\"visible\" >\n\
         \t<animate attributeType=\"xml\" begin=\"1.00s\" dur=\"4.00s\" attributeName=\"x\" from=\"10\" to=\"200\" fill=\"freeze\" />\n\
         \t<animate attributeType=\"xml\" begin=\"1.00s\" dur=\"4.00s\" attributeName=\"y\" from=\"20\" to=\"20\" fill=\"freeze\" />\n\
         \t<animate attributeType=\"xml\" attributeName=\"fill\" begin=\"2.00s\" dur=\"2.00s\" from=\"rgb(255,0,0)\" to=\"rgb(0,255,0)\" fill=\"freeze\" />\n\
         </rect>\n\
         <ellipse id=\"C\" cx=\"100\" cy=\"100\" rx=\"25\" ry=\"15\" fill=\"rgb(0,0,255)\" visibility=\"visible\" >\n\
         \t<animate attributeType=\"xml\" attributeName=\"rx\" from=\"25\" to=\"50\" begin=\"0.00s\" dur=\"5.00s\" fill=\"freeze\" />\n\
         \t<animate attributeType=\"xml\" attributeName=\"ry\" from=\"15\" to=\"30\" begin=\"0.00s\" dur=\"5.00s\" fill=\"freeze\" />\n\
         </ellipse>\n\
         </svg>\n",
    );
    Ok(())
}

#[test]
fn svg_export_rejects_non_positive_speeds() {
    assert!(matches!(
        svg::render(&scene(), 0.0),
        Err(Error::InvalidSpeed(_))
    ));
    assert!(matches!(
        svg::render(&scene(), -3.0),
        Err(Error::InvalidSpeed(_))
    ));
}

#[test]
fn svg_export_requires_a_canvas() {
    let mut model = Animation::new();
    model
        .add_shape("R", Shape::rectangle(0, 0, 1, 1, 0, 0, 0).unwrap())
        .unwrap();
    assert!(matches!(
        svg::render(&model, 1.0),
        Err(Error::MissingFrame)
    ));
}

// ---------------------------------------------------------------------------
// Snapshots
// ---------------------------------------------------------------------------

#[test]
fn snapshots_cover_every_tick_up_to_the_final_one() -> Result<()> {
    let mut model = scene();
    let dump = snapshot::bake(&mut model)?;
    assert_eq!(dump.ticks.len(), 11);
    assert_eq!(dump.ticks[0].tick, 0);
    assert_eq!(dump.ticks[10].tick, 10);
    for tick in &dump.ticks {
        assert_eq!(tick.shapes.len(), 2);
    }
    // The bake walks the model's own query path, so the midpoint shows the
    // same truncated interpolation a live query would.
    let r_mid = &dump.ticks[6].shapes[0];
    assert_eq!(r_mid.location(), Point::new(105, 20));
    Ok(())
}

#[test]
fn snapshots_serialize_and_deserialize() -> Result<()> {
    let mut model = scene();
    let dump = snapshot::bake(&mut model)?;
    let json = serde_json::to_string(&dump)?;
    let parsed: snapshot::SnapshotDump = serde_json::from_str(&json)?;
    assert_eq!(parsed.frame, dump.frame);
    assert_eq!(parsed.ticks.len(), dump.ticks.len());
    assert_eq!(parsed.ticks[6].shapes[0], dump.ticks[6].shapes[0]);
    Ok(())
}

#[test]
fn snapshots_of_an_empty_animation_fail() {
    let mut model = Animation::new();
    model.declare_frame(0, 0, 10, 10);
    assert!(matches!(
        snapshot::bake(&mut model),
        Err(Error::EmptyAnimation)
    ));
}
