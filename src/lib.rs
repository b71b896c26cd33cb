//! A tick-indexed 2D shape animator.
//!
//! The model stores shapes and their scheduled transformations and answers
//! "what does the scene look like at tick T" deterministically. Everything
//! else is a thin collaborator around that contract: a line-oriented
//! source parser fills the model, exports dump it as text, SVG, or baked
//! JSON snapshots, and the terminal player polls it tick by tick.

pub mod error;
pub mod export;
pub mod model;
pub mod player;
pub mod renderer;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use model::{Animation, Change, Shape, Transformation};
