//! The error taxonomy.
//!
//! Every contract violation is raised synchronously at the offending call;
//! the library never retries, logs, or swallows an error. The CLI converts
//! these into user-facing messages via `anyhow` context chains.

use thiserror::Error;

use crate::types::{Tick, TransformationKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("shape id cannot be empty")]
    EmptyId,

    #[error("a shape named `{0}` already exists")]
    DuplicateId(String),

    #[error("no shape named `{0}` has been declared")]
    UnknownShape(String),

    #[error("tick cannot be negative (got {0})")]
    NegativeTick(Tick),

    #[error("time cannot be negative (got {0})")]
    InvalidTime(Tick),

    #[error(
        "shape cannot disappear at t = {disappearance} before appearing at t = {appearance}"
    )]
    DisappearsBeforeAppears {
        appearance: Tick,
        disappearance: Tick,
    },

    #[error("color channel out of range: {0} (expected 0..=255)")]
    ColorOutOfRange(i32),

    #[error("dimension cannot be negative (got {0})")]
    NegativeDimension(i32),

    #[error("transformation interval is inverted: start {start} > end {end}")]
    InvalidInterval { start: Tick, end: Tick },

    #[error(
        "shape `{id}` already has a {kind} transformation covering t = {start} to t = {end}"
    )]
    Overlap {
        id: String,
        kind: TransformationKind,
        start: Tick,
        end: Tick,
    },

    #[error("the animation has no transformations")]
    EmptyAnimation,

    #[error("no canvas has been declared")]
    MissingFrame,

    #[error("playback speed must be positive (got {0})")]
    InvalidSpeed(f64),

    #[error("line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a parse failure at a 1-based source line.
    pub(crate) fn parse(line: usize, msg: impl Into<String>) -> Self {
        Error::Parse {
            line,
            msg: msg.into(),
        }
    }
}
