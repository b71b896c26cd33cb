//! Shape: a drawable entity with geometry, color, identity, and a
//! visibility window.
//!
//! Shapes are plain values. Cloning one yields a fully independent copy,
//! which is what the store relies on to keep canonical state from ever
//! being reachable through a caller-held handle.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Point, Rgb, ShapeKind, Tick};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    id: String,
    kind: ShapeKind,
    location: Point,
    width: i32,
    height: i32,
    color: Rgb,
    appearance: Tick,
    disappearance: Tick,
}

impl Shape {
    /// Create a shape with explicit geometry and color.
    ///
    /// For rectangles `location` is the lower-left corner and
    /// `width`/`height` are the side lengths; for ellipses it is the
    /// center and they are the x/y radii.
    pub fn new(
        kind: ShapeKind,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        r: i32,
        g: i32,
        b: i32,
    ) -> Result<Self> {
        let mut shape = Self::with_defaults(kind);
        shape.location = Point::new(x, y);
        shape.set_width(width)?;
        shape.set_height(height)?;
        shape.set_color(r, g, b)?;
        Ok(shape)
    }

    pub fn rectangle(x: i32, y: i32, width: i32, height: i32, r: i32, g: i32, b: i32) -> Result<Self> {
        Self::new(ShapeKind::Rectangle, x, y, width, height, r, g, b)
    }

    pub fn ellipse(x: i32, y: i32, rx: i32, ry: i32, r: i32, g: i32, b: i32) -> Result<Self> {
        Self::new(ShapeKind::Ellipse, x, y, rx, ry, r, g, b)
    }

    /// Create a shape in the placeholder state `(0, 0) 1x1 rgb(0, 0, 0)`.
    ///
    /// The placeholder is never meant to be visible; ingestion overwrites
    /// it with the first motion's start values.
    pub fn with_defaults(kind: ShapeKind) -> Self {
        Shape {
            id: String::new(),
            kind,
            location: Point::new(0, 0),
            width: 1,
            height: 1,
            color: Rgb::new(0, 0, 0),
            appearance: 0,
            disappearance: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn location(&self) -> Point {
        self.location
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn r(&self) -> i32 {
        self.color.r
    }

    pub fn g(&self) -> i32 {
        self.color.g
    }

    pub fn b(&self) -> i32 {
        self.color.b
    }

    pub fn appearance(&self) -> Tick {
        self.appearance
    }

    pub fn disappearance(&self) -> Tick {
        self.disappearance
    }

    /// Whether this shape still carries the placeholder state it was
    /// constructed with.
    pub fn is_placeholder(&self) -> bool {
        self.location == Point::new(0, 0)
            && self.width == 1
            && self.height == 1
            && self.color == Rgb::new(0, 0, 0)
    }

    // -----------------------------------------------------------------------
    // Validated mutation
    // -----------------------------------------------------------------------

    pub fn set_color(&mut self, r: i32, g: i32, b: i32) -> Result<()> {
        for channel in [r, g, b] {
            if !(0..=255).contains(&channel) {
                return Err(Error::ColorOutOfRange(channel));
            }
        }
        self.color = Rgb::new(r, g, b);
        Ok(())
    }

    pub fn set_r(&mut self, r: i32) -> Result<()> {
        self.set_color(r, self.color.g, self.color.b)
    }

    pub fn set_g(&mut self, g: i32) -> Result<()> {
        self.set_color(self.color.r, g, self.color.b)
    }

    pub fn set_b(&mut self, b: i32) -> Result<()> {
        self.set_color(self.color.r, self.color.g, b)
    }

    pub fn set_width(&mut self, width: i32) -> Result<()> {
        if width < 0 {
            return Err(Error::NegativeDimension(width));
        }
        self.width = width;
        Ok(())
    }

    pub fn set_height(&mut self, height: i32) -> Result<()> {
        if height < 0 {
            return Err(Error::NegativeDimension(height));
        }
        self.height = height;
        Ok(())
    }

    /// Set the tick at which the shape becomes visible.
    pub fn appears(&mut self, t: Tick) -> Result<()> {
        if t < 0 {
            return Err(Error::InvalidTime(t));
        }
        self.appearance = t;
        Ok(())
    }

    /// Set the tick at which the shape stops being visible.
    pub fn disappears(&mut self, t: Tick) -> Result<()> {
        if t < 0 {
            return Err(Error::InvalidTime(t));
        }
        if t < self.appearance {
            return Err(Error::DisappearsBeforeAppears {
                appearance: self.appearance,
                disappearance: t,
            });
        }
        self.disappearance = t;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Store-internal mutation
    // -----------------------------------------------------------------------
    //
    // Interpolation output is derived from endpoints that were validated on
    // the way in, so these skip the range checks.

    pub(crate) fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    pub(crate) fn move_to(&mut self, x: i32, y: i32) {
        self.location = Point::new(x, y);
    }

    pub(crate) fn apply_size(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }

    pub(crate) fn apply_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Overwrite geometry and color from `canonical`, in place. The
    /// visibility window is left alone.
    pub(crate) fn restore_from(&mut self, canonical: &Shape) {
        self.location = canonical.location;
        self.width = canonical.width;
        self.height = canonical.height;
        self.color = canonical.color;
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ShapeKind::Rectangle => write!(
                f,
                "Name: {}\nType: rectangle\nMin corner: ({}, {}), Width: {}, Height: {}\nColor: {}",
                self.id, self.location.x, self.location.y, self.width, self.height, self.color,
            ),
            ShapeKind::Ellipse => write!(
                f,
                "Name: {}\nType: ellipse\nCenter: ({}, {}), X radius: {}, Y radius: {}\nColor: {}",
                self.id, self.location.x, self.location.y, self.width, self.height, self.color,
            ),
        }
    }
}
