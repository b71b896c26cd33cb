//! SVG export: one animated vector document per model.
//!
//! Every shape becomes a `<rect>` or `<ellipse>` element at its current
//! state, followed by one `<animate>` element per interpolated attribute.
//! Tick times are converted to seconds by the playback speed, two decimal
//! places, and every animation freezes at its end value.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Animation, Change, Shape, Transformation};
use crate::types::ShapeKind;

/// Render the SVG document at `speed` ticks per second.
pub fn render(animation: &Animation, speed: f64) -> Result<String> {
    if speed <= 0.0 {
        return Err(Error::InvalidSpeed(speed));
    }
    let frame = animation.frame().ok_or(Error::MissingFrame)?;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg width=\"{}\" height=\"{}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">",
        frame.width, frame.height,
    );
    for (_, shape, transformations) in animation.entries() {
        shape_open(&mut svg, shape);
        for t in transformations {
            animate(&mut svg, shape, t, speed);
        }
        match shape.kind() {
            ShapeKind::Rectangle => svg.push_str("</rect>\n"),
            ShapeKind::Ellipse => svg.push_str("</ellipse>\n"),
        }
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Write the SVG document to a file, replacing any existing one.
pub fn export(animation: &Animation, path: impl AsRef<Path>, speed: f64) -> Result<()> {
    fs::write(path, render(animation, speed)?)?;
    Ok(())
}

fn shape_open(svg: &mut String, shape: &Shape) {
    let color = shape.color();
    let fill = format!("rgb({},{},{})", color.r, color.g, color.b);
    let _ = match shape.kind() {
        ShapeKind::Rectangle => writeln!(
            svg,
            "<rect id=\"{}\" x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" visibility=\"visible\" >",
            shape.id(),
            shape.location().x,
            shape.location().y,
            shape.width(),
            shape.height(),
            fill,
        ),
        ShapeKind::Ellipse => writeln!(
            svg,
            "<ellipse id=\"{}\" cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\" visibility=\"visible\" >",
            shape.id(),
            shape.location().x,
            shape.location().y,
            shape.width(),
            shape.height(),
            fill,
        ),
    };
}

fn animate(svg: &mut String, shape: &Shape, t: &Transformation, speed: f64) {
    let begin = t.start() as f64 / speed;
    let dur = (t.end() - t.start()) as f64 / speed;
    match t.change() {
        Change::Move { from, to } => {
            let (x_attr, y_attr) = match shape.kind() {
                ShapeKind::Rectangle => ("x", "y"),
                ShapeKind::Ellipse => ("cx", "cy"),
            };
            let _ = writeln!(
                svg,
                "\t<animate attributeType=\"xml\" begin=\"{begin:.2}s\" dur=\"{dur:.2}s\" attributeName=\"{x_attr}\" from=\"{}\" to=\"{}\" fill=\"freeze\" />",
                from.x, to.x,
            );
            let _ = writeln!(
                svg,
                "\t<animate attributeType=\"xml\" begin=\"{begin:.2}s\" dur=\"{dur:.2}s\" attributeName=\"{y_attr}\" from=\"{}\" to=\"{}\" fill=\"freeze\" />",
                from.y, to.y,
            );
        }
        Change::Recolor { from, to } => {
            let _ = writeln!(
                svg,
                "\t<animate attributeType=\"xml\" attributeName=\"fill\" begin=\"{begin:.2}s\" dur=\"{dur:.2}s\" from=\"rgb({},{},{})\" to=\"rgb({},{},{})\" fill=\"freeze\" />",
                from.r, from.g, from.b, to.r, to.g, to.b,
            );
        }
        Change::Resize {
            from_w,
            from_h,
            to_w,
            to_h,
        } => {
            let (w_attr, h_attr) = match shape.kind() {
                ShapeKind::Rectangle => ("width", "height"),
                ShapeKind::Ellipse => ("rx", "ry"),
            };
            let _ = writeln!(
                svg,
                "\t<animate attributeType=\"xml\" attributeName=\"{w_attr}\" from=\"{from_w}\" to=\"{to_w}\" begin=\"{begin:.2}s\" dur=\"{dur:.2}s\" fill=\"freeze\" />",
            );
            let _ = writeln!(
                svg,
                "\t<animate attributeType=\"xml\" attributeName=\"{h_attr}\" from=\"{from_h}\" to=\"{to_h}\" begin=\"{begin:.2}s\" dur=\"{dur:.2}s\" fill=\"freeze\" />",
            );
        }
    }
}
