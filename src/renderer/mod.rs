//! Renderer: the deterministic rasterizer.
//!
//! Takes one tick's shape snapshot plus the bounding frame and produces a
//! fixed-size cell grid scaled to the requested terminal area. The
//! renderer is pure and stateless. Given the same input, it always
//! produces the same output. It knows nothing about time, transformations,
//! or the terminal itself.

use crate::model::Shape;
use crate::types::{Frame, Rgb, ShapeKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub color: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Cell {
            ch: ' ',
            color: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellChange {
    pub x: u16,
    pub y: u16,
    pub cell: Cell,
}

pub struct Renderer;

impl Renderer {
    /// Rasterize a shape snapshot onto a `cols` x `rows` cell grid.
    ///
    /// Model coordinates are scaled so the whole frame fits the grid.
    /// Shapes paint in snapshot order, later ones over earlier ones.
    pub fn rasterize(shapes: &[Shape], frame: &Frame, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
        let mut grid = vec![vec![Cell::default(); cols as usize]; rows as usize];
        let sx = cols as f64 / frame.width.max(1) as f64;
        let sy = rows as f64 / frame.height.max(1) as f64;

        for shape in shapes {
            let cell = Cell {
                ch: '█',
                color: Some(shape.color()),
            };
            let loc = shape.location();
            match shape.kind() {
                ShapeKind::Rectangle => Self::fill_rect(
                    &mut grid,
                    loc.x as f64 * sx,
                    loc.y as f64 * sy,
                    shape.width() as f64 * sx,
                    shape.height() as f64 * sy,
                    &cell,
                ),
                ShapeKind::Ellipse => Self::fill_ellipse(
                    &mut grid,
                    loc.x as f64 * sx,
                    loc.y as f64 * sy,
                    shape.width() as f64 * sx,
                    shape.height() as f64 * sy,
                    &cell,
                ),
            }
        }

        grid
    }

    fn fill_rect(grid: &mut [Vec<Cell>], x: f64, y: f64, w: f64, h: f64, cell: &Cell) {
        let x1 = (x + w.max(1.0)).ceil() as i64;
        let y1 = (y + h.max(1.0)).ceil() as i64;
        for row in y.floor() as i64..y1 {
            for col in x.floor() as i64..x1 {
                Self::plot(grid, col, row, cell);
            }
        }
    }

    fn fill_ellipse(grid: &mut [Vec<Cell>], cx: f64, cy: f64, rx: f64, ry: f64, cell: &Cell) {
        let rx = rx.max(0.5);
        let ry = ry.max(0.5);
        for row in (cy - ry).floor() as i64..=(cy + ry).ceil() as i64 {
            for col in (cx - rx).floor() as i64..=(cx + rx).ceil() as i64 {
                let dx = (col as f64 + 0.5 - cx) / rx;
                let dy = (row as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    Self::plot(grid, col, row, cell);
                }
            }
        }
    }

    fn plot(grid: &mut [Vec<Cell>], col: i64, row: i64, cell: &Cell) {
        if row < 0 || col < 0 {
            return;
        }
        if let Some(slot) = grid
            .get_mut(row as usize)
            .and_then(|cells| cells.get_mut(col as usize))
        {
            *slot = cell.clone();
        }
    }

    /// Compute a cell-level diff between two grids.
    pub fn diff(prev: &[Vec<Cell>], next: &[Vec<Cell>]) -> Vec<CellChange> {
        let mut changes = Vec::new();
        for (y, (prev_row, next_row)) in prev.iter().zip(next.iter()).enumerate() {
            for (x, (prev_cell, next_cell)) in prev_row.iter().zip(next_row.iter()).enumerate() {
                if prev_cell != next_cell {
                    changes.push(CellChange {
                        x: x as u16,
                        y: y as u16,
                        cell: next_cell.clone(),
                    });
                }
            }
        }
        changes
    }
}
