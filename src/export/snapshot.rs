//! Snapshot export: every tick's shape states, baked to JSON.
//!
//! The dump replays ticks `0..=final_tick` through the store's own query
//! path, so it reflects exactly what a playback surface polling the model
//! would have seen.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Animation, Shape};
use crate::types::{Frame, Tick};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: Tick,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDump {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame: Option<Frame>,
    pub ticks: Vec<TickSnapshot>,
}

/// Replay every tick through the model and collect the results.
///
/// Fails with the empty-animation error when there is no transformation to
/// derive a final tick from.
pub fn bake(animation: &mut Animation) -> Result<SnapshotDump> {
    let last = animation.final_tick()?;
    let mut ticks = Vec::new();
    for tick in 0..=last {
        ticks.push(TickSnapshot {
            tick,
            shapes: animation.shapes_at_tick(tick)?,
        });
    }
    Ok(SnapshotDump {
        frame: animation.frame(),
        ticks,
    })
}

/// Bake and write the dump to a file as pretty-printed JSON.
pub fn export(animation: &mut Animation, path: impl AsRef<Path>) -> Result<()> {
    let dump = bake(animation)?;
    fs::write(path, serde_json::to_string_pretty(&dump)?)?;
    Ok(())
}
