//! Shared boundary types for the animator.
//!
//! These primitives cross every layer boundary: the model stores them,
//! the ingestion parser produces them, and the exports and the terminal
//! player consume them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An integer tick of animation time.
pub type Tick = i32;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB color with each channel in `0..=255`.
///
/// Channels are stored as `i32` because interpolation arithmetic runs on
/// signed integers; range validation happens at the shape setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl Rgb {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Rgb { r, g, b }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// A mutable 2D coordinate. For rectangles this is the lower-left corner,
/// for ellipses the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// The canvas rectangle the scene is drawn within. Motion coordinates in
/// the source format are relative to this frame's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Frame {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Frame {
            x,
            y,
            width,
            height,
        }
    }
}

// ---------------------------------------------------------------------------
// Kind tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeKind::Rectangle => f.write_str("rectangle"),
            ShapeKind::Ellipse => f.write_str("ellipse"),
        }
    }
}

/// The tag used for the same-kind overlap rule: for one shape, two
/// transformations of the same kind may not interleave in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationKind {
    Move,
    Resize,
    Recolor,
}

impl fmt::Display for TransformationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformationKind::Move => f.write_str("move"),
            TransformationKind::Resize => f.write_str("resize"),
            TransformationKind::Recolor => f.write_str("recolor"),
        }
    }
}
