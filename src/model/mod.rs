//! Model: the time-indexed scene store.
//!
//! The store owns three id-keyed, insertion-ordered maps: the canonical
//! shapes (as first registered), the working shapes that interpolation
//! writes into, and the per-shape transformation lists. Querying a tick
//! folds each shape's transformations over its persisted working state;
//! tick 0 and the final tick reset the working set back to canonical so a
//! replay or restart starts clean.
//!
//! The store never deals with files, terminals, or markup. Exports and
//! playback sit on top of `shapes_at_tick` and `entries`.

mod shape;
mod transformation;

use std::fmt;

use indexmap::IndexMap;

pub use shape::Shape;
pub use transformation::{Change, Transformation};

use crate::error::{Error, Result};
use crate::types::{Frame, Point, Rgb, Tick};

#[derive(Debug, Default)]
pub struct Animation {
    canonical: IndexMap<String, Shape>,
    working: IndexMap<String, Shape>,
    transformations: IndexMap<String, Vec<Transformation>>,
    frame: Option<Frame>,
}

impl Animation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the bounding frame.
    pub fn declare_frame(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.frame = Some(Frame::new(x, y, width, height));
    }

    pub fn frame(&self) -> Option<Frame> {
        self.frame
    }

    pub fn shape_count(&self) -> usize {
        self.working.len()
    }

    /// Register a shape under `id`.
    ///
    /// The id is assigned into the shape and its visibility window is
    /// forced to tick 0. Canonical and working state start as independent
    /// clones; an empty transformation list is created alongside.
    pub fn add_shape(&mut self, id: &str, mut shape: Shape) -> Result<()> {
        if id.is_empty() {
            return Err(Error::EmptyId);
        }
        if self.canonical.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        shape.set_id(id);
        shape.appears(0)?;
        shape.disappears(0)?;
        self.canonical.insert(id.to_string(), shape.clone());
        self.working.insert(id.to_string(), shape);
        self.transformations.insert(id.to_string(), Vec::new());
        Ok(())
    }

    /// Attach a transformation to the shape registered under `id`.
    ///
    /// Among the transformations of the same kind already attached, the new
    /// interval may not place its start or end strictly inside an existing
    /// open `(start, end)` interval. Touching endpoints are allowed, and so
    /// is an interval that strictly contains an existing one.
    pub fn add_transformation(&mut self, id: &str, mut t: Transformation) -> Result<()> {
        let list = self
            .transformations
            .get_mut(id)
            .ok_or_else(|| Error::UnknownShape(id.to_string()))?;
        for existing in list.iter() {
            if existing.kind() != t.kind() {
                continue;
            }
            let interior = |tick: Tick| tick > existing.start() && tick < existing.end();
            if interior(t.start()) || interior(t.end()) {
                return Err(Error::Overlap {
                    id: id.to_string(),
                    kind: existing.kind(),
                    start: existing.start(),
                    end: existing.end(),
                });
            }
        }
        t.set_shape_id(id);
        list.push(t);
        Ok(())
    }

    /// A snapshot of the *working* state registered under `id`.
    pub fn shape(&self, id: &str) -> Result<Shape> {
        if id.is_empty() {
            return Err(Error::EmptyId);
        }
        self.working
            .get(id)
            .cloned()
            .ok_or_else(|| Error::UnknownShape(id.to_string()))
    }

    /// Every shape's state at `tick`, in registration order.
    ///
    /// Each shape's transformation list is folded in insertion order over
    /// the shape's persisted working state, so transformations chain over
    /// whatever the previous one left behind rather than recomputing from
    /// canonical. Tick 0 resets the working set first; hitting the final
    /// tick resets it afterwards so the next pass starts clean.
    pub fn shapes_at_tick(&mut self, tick: Tick) -> Result<Vec<Shape>> {
        if tick < 0 {
            return Err(Error::NegativeTick(tick));
        }
        if tick == 0 {
            self.reset();
        }
        let mut snapshot = Vec::with_capacity(self.working.len());
        for (id, state) in self.working.iter_mut() {
            let list = self
                .transformations
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let next = list
                .iter()
                .fold(state.clone(), |shape, t| t.apply_at(shape, tick));
            *state = next.clone();
            snapshot.push(next);
        }
        if self.final_tick().is_ok_and(|last| tick == last) {
            self.reset();
        }
        Ok(snapshot)
    }

    /// The largest `end` across every transformation of every shape.
    pub fn final_tick(&self) -> Result<Tick> {
        self.transformations
            .values()
            .flatten()
            .map(Transformation::end)
            .max()
            .ok_or(Error::EmptyAnimation)
    }

    /// Copy canonical geometry and color back onto every working shape,
    /// in place.
    pub fn reset(&mut self) {
        for (id, state) in self.working.iter_mut() {
            if let Some(canonical) = self.canonical.get(id) {
                state.restore_from(canonical);
            }
        }
    }

    /// Overwrite the registered initial state of `id`, in both the
    /// canonical and the working map.
    ///
    /// Ingestion uses this once per shape: a freshly declared shape sits at
    /// the placeholder state, and the first motion's start values become
    /// its real initial state.
    pub fn set_initial_state(
        &mut self,
        id: &str,
        location: Point,
        width: i32,
        height: i32,
        color: Rgb,
    ) -> Result<()> {
        for map in [&mut self.canonical, &mut self.working] {
            let shape = map
                .get_mut(id)
                .ok_or_else(|| Error::UnknownShape(id.to_string()))?;
            shape.move_to(location.x, location.y);
            shape.set_width(width)?;
            shape.set_height(height)?;
            shape.set_color(color.r, color.g, color.b)?;
        }
        Ok(())
    }

    /// Iterate `(id, working shape, transformations)` in registration
    /// order. The exports are built on this.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Shape, &[Transformation])> {
        self.working.iter().map(|(id, shape)| {
            let list = self
                .transformations
                .get(id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            (id.as_str(), shape, list)
        })
    }
}

impl fmt::Display for Animation {
    /// The export-ready serialization: the shape states, then every
    /// transformation, both in registration order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Shapes:")?;
        for (i, shape) in self.working.values().enumerate() {
            if i == 0 {
                write!(f, "\n{shape}")?;
            } else {
                write!(f, "\n\n{shape}")?;
            }
        }
        f.write_str("\n")?;
        for list in self.transformations.values() {
            for t in list {
                write!(f, "\n{t}")?;
            }
        }
        Ok(())
    }
}
