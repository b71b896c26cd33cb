//! Source ingestion: the line-oriented animation description.
//!
//! The format declares *what exists* and *how it moves*, one statement per
//! line; the parser replays it through the model's public contract:
//!
//! ```text
//! canvas <x> <y> <width> <height>
//! shape <id> rectangle|ellipse
//! motion <id> <t> <x> <y> <w> <h> <r> <g> <b>  <t> <x> <y> <w> <h> <r> <g> <b>
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A `motion` line
//! carries the full start and end attribute tuples; it is decomposed into
//! at most one transformation per attribute group that actually changes.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Animation, Shape, Transformation};
use crate::types::{Point, Rgb, ShapeKind};

/// Parse an animation description from a file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Animation> {
    parse_str(&fs::read_to_string(path)?)
}

/// Parse an animation description from a string.
pub fn parse_str(input: &str) -> Result<Animation> {
    let mut model = Animation::new();
    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut words = trimmed.split_whitespace();
        // A non-empty trimmed line always yields at least one word.
        let keyword = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();
        match keyword {
            "canvas" => canvas(&mut model, line, &rest)?,
            "shape" => shape(&mut model, line, &rest)?,
            "motion" => motion(&mut model, line, &rest)?,
            other => {
                return Err(Error::parse(line, format!("unknown statement `{other}`")));
            }
        }
    }
    Ok(model)
}

fn canvas(model: &mut Animation, line: usize, args: &[&str]) -> Result<()> {
    let [x, y, width, height] = fields(line, args, "canvas")?;
    model.declare_frame(x, y, width, height);
    Ok(())
}

fn shape(model: &mut Animation, line: usize, args: &[&str]) -> Result<()> {
    let [id, kind] = args else {
        return Err(Error::parse(
            line,
            format!("shape takes an id and a kind, got {} fields", args.len()),
        ));
    };
    let kind = match *kind {
        "rectangle" => ShapeKind::Rectangle,
        "ellipse" => ShapeKind::Ellipse,
        other => {
            return Err(Error::parse(line, format!("unknown shape kind `{other}`")));
        }
    };
    model.add_shape(id, Shape::with_defaults(kind))
}

fn motion(model: &mut Animation, line: usize, args: &[&str]) -> Result<()> {
    let Some((&id, values)) = args.split_first() else {
        return Err(Error::parse(line, "motion is missing a shape id"));
    };
    let [t1, x1, y1, w1, h1, r1, g1, b1, t2, x2, y2, w2, h2, r2, g2, b2] =
        fields(line, values, "motion")?;

    let frame = model
        .frame()
        .ok_or_else(|| Error::parse(line, "motion before canvas declaration"))?;
    let from = Point::new(x1 - frame.x, y1 - frame.y);
    let to = Point::new(x2 - frame.x, y2 - frame.y);

    // A freshly declared shape still sits at the placeholder state; the
    // first motion's start values are its real initial state.
    if model.shape(id)?.is_placeholder() {
        model.set_initial_state(id, from, w1, h1, Rgb::new(r1, g1, b1))?;
    }

    if x1 != x2 || y1 != y2 {
        model.add_transformation(id, Transformation::movement(t1, t2, from, to)?)?;
    }
    if r1 != r2 || g1 != g2 || b1 != b2 {
        model.add_transformation(
            id,
            Transformation::recolor(t1, t2, Rgb::new(r1, g1, b1), Rgb::new(r2, g2, b2))?,
        )?;
    }
    if w1 != w2 || h1 != h2 {
        model.add_transformation(id, Transformation::resize(t1, t2, w1, h1, w2, h2)?)?;
    }
    Ok(())
}

/// Parse exactly `N` integer fields for `statement`.
fn fields<const N: usize>(line: usize, args: &[&str], statement: &str) -> Result<[i32; N]> {
    if args.len() != N {
        return Err(Error::parse(
            line,
            format!("{statement} takes {N} fields, got {}", args.len()),
        ));
    }
    let mut out = [0i32; N];
    for (slot, word) in out.iter_mut().zip(args) {
        *slot = word
            .parse()
            .map_err(|_| Error::parse(line, format!("`{word}` is not an integer")))?;
    }
    Ok(out)
}
